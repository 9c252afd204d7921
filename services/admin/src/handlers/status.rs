//! Read-only status endpoints

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use types::market::MarketStatus;

use crate::error::AppError;
use crate::state::AppState;

/// `GET /ping`: fixed liveness payload, independent of any state.
pub async fn ping() -> Json<&'static str> {
    Json("pong")
}

/// `GET /markets`: status of every market the engine reports, keyed and
/// ordered by market name. An engine with no markets yields `{}`.
pub async fn markets(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, MarketStatus>>, AppError> {
    let statuses = state.core.market_statuses().await?;
    let statuses = statuses
        .iter()
        .map(|(name, report)| (name.clone(), MarketStatus::from_report(None, report)))
        .collect();
    Ok(Json(statuses))
}

/// `GET /market/{name}`: status of a single market, with the name
/// echoed in the record.
pub async fn market_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MarketStatus>, AppError> {
    let report = state
        .core
        .market_status(&name)
        .await?
        .ok_or_else(|| AppError::UnknownMarket(name.clone()))?;
    Ok(Json(MarketStatus::from_report(Some(name), &report)))
}
