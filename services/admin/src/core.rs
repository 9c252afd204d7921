//! Engine capability boundary
//!
//! The admin surface only ever talks to the engine through the
//! [`MarketCore`] trait. The one production implementation is
//! [`EngineClient`], a thin HTTP client for the engine's internal admin
//! API; tests substitute an in-memory double.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use types::market::{MarketReport, SuspendEpoch, SuspendTime};

/// Failure of a core invocation. Every variant surfaces to the admin
/// caller as a generic internal error; detail stays in the server log.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("engine transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("engine rejected request: {0}")]
    Rejected(String),
}

/// Capability over the engine's market state and epoch scheduling.
///
/// Implementations must be safe for concurrent callers; the admin layer
/// issues at most one core call per inbound request and never retries.
#[async_trait]
pub trait MarketCore: Send + Sync {
    /// Status of every known market, keyed by market name.
    async fn market_statuses(&self) -> Result<HashMap<String, MarketReport>, CoreError>;

    /// Status of one market; `None` if the engine has no such market.
    async fn market_status(&self, name: &str) -> Result<Option<MarketReport>, CoreError>;

    /// Whether a market is matching; `None` if the engine has no such
    /// market.
    async fn market_running(&self, name: &str) -> Result<Option<bool>, CoreError>;

    /// Schedule suspension of one market. The engine resolves `at` to an
    /// epoch boundary (the next boundary for `Immediate`).
    async fn suspend_market(
        &self,
        name: &str,
        at: SuspendTime,
        persist_book: bool,
    ) -> Result<SuspendEpoch, CoreError>;

    /// Schedule suspension of every running market.
    async fn suspend_all(
        &self,
        at: SuspendTime,
        persist_book: bool,
    ) -> Result<HashMap<String, SuspendEpoch>, CoreError>;
}

/// Production adapter: the engine's internal admin API over HTTP.
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: reqwest::Client,
    base_url: String,
}

/// Wire form of a suspend instruction. `t` is milliseconds since the
/// Unix epoch; absent means the next epoch boundary.
#[derive(Debug, Serialize)]
struct SuspendRequest {
    t: Option<i64>,
    persist: bool,
}

impl SuspendRequest {
    fn new(at: SuspendTime, persist: bool) -> Self {
        Self {
            t: at.as_millis(),
            persist,
        }
    }
}

impl EngineClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl MarketCore for EngineClient {
    async fn market_statuses(&self) -> Result<HashMap<String, MarketReport>, CoreError> {
        let res = self
            .http
            .get(self.url("/internal/markets"))
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    async fn market_status(&self, name: &str) -> Result<Option<MarketReport>, CoreError> {
        let res = self
            .http
            .get(self.url(&format!("/internal/market/{name}")))
            .send()
            .await?;
        if res.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let res = res.error_for_status()?;
        Ok(Some(res.json().await?))
    }

    async fn market_running(&self, name: &str) -> Result<Option<bool>, CoreError> {
        Ok(self.market_status(name).await?.map(|report| report.running))
    }

    async fn suspend_market(
        &self,
        name: &str,
        at: SuspendTime,
        persist_book: bool,
    ) -> Result<SuspendEpoch, CoreError> {
        let res = self
            .http
            .post(self.url(&format!("/internal/market/{name}/suspend")))
            .json(&SuspendRequest::new(at, persist_book))
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(CoreError::Rejected(res.text().await.unwrap_or_default()));
        }
        Ok(res.json().await?)
    }

    async fn suspend_all(
        &self,
        at: SuspendTime,
        persist_book: bool,
    ) -> Result<HashMap<String, SuspendEpoch>, CoreError> {
        let res = self
            .http
            .post(self.url("/internal/suspend"))
            .json(&SuspendRequest::new(at, persist_book))
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(CoreError::Rejected(res.text().await.unwrap_or_default()));
        }
        Ok(res.json().await?)
    }
}
