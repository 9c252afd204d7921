//! Suspend scheduling endpoint
//!
//! Validation runs before the engine is consulted, so a rejected
//! request never reaches the core. Concurrent suspends of the same
//! market race at the engine; the last core-level write wins and no
//! ordering is guaranteed here.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use serde::Deserialize;
use types::market::{SuspendResult, SuspendTime};
use types::time::ms_to_time;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuspendQuery {
    /// Target time in milliseconds since the Unix epoch; absent means
    /// the next epoch boundary.
    pub t: Option<String>,
    /// Whether the order book is retained; absent means yes.
    pub persist: Option<String>,
}

/// `GET /market/{name}/suspend?t=<ms>&persist=<bool>`: schedule a
/// coordinated suspension of one market.
pub async fn suspend_market(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SuspendQuery>,
) -> Result<Json<SuspendResult>, AppError> {
    match state.core.market_running(&name).await? {
        None => return Err(AppError::UnknownMarket(name)),
        Some(false) => return Err(AppError::MarketNotRunning(name)),
        Some(true) => {}
    }

    let at = parse_suspend_time(query.t.as_deref())?;
    let persist_book = parse_persist(query.persist.as_deref())?;

    let epoch = state.core.suspend_market(&name, at, persist_book).await?;
    tracing::info!(market = %name, epoch = epoch.idx, end = %epoch.end, "suspension scheduled");
    Ok(Json(SuspendResult::new(name, &epoch)))
}

/// An absent (or empty) `t` selects the next epoch boundary, which is
/// valid at any wall time. An explicit `t` must parse as integer
/// milliseconds and lie strictly in the future.
fn parse_suspend_time(raw: Option<&str>) -> Result<SuspendTime, AppError> {
    let Some(raw) = raw.filter(|value| !value.is_empty()) else {
        return Ok(SuspendTime::Immediate);
    };
    let ms: i64 = raw
        .parse()
        .map_err(|_| AppError::InvalidSuspendTime(raw.to_string()))?;
    let at = ms_to_time(ms).ok_or_else(|| AppError::InvalidSuspendTime(raw.to_string()))?;
    if at <= Utc::now() {
        return Err(AppError::SuspendTimeInPast(ms));
    }
    Ok(SuspendTime::At(at))
}

/// Fixed allow-list rather than a general boolean parser, so the
/// accepted literals and the rejection message stay stable.
fn parse_persist(raw: Option<&str>) -> Result<bool, AppError> {
    match raw.unwrap_or("") {
        "" | "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(AppError::InvalidPersistFlag(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::time::now_ms;

    #[test]
    fn test_absent_time_is_immediate() {
        assert_eq!(parse_suspend_time(None).unwrap(), SuspendTime::Immediate);
        assert_eq!(parse_suspend_time(Some("")).unwrap(), SuspendTime::Immediate);
    }

    #[test]
    fn test_malformed_time_rejected() {
        let err = parse_suspend_time(Some("QWERT")).unwrap_err();
        assert!(err.to_string().starts_with("invalid suspend time"));

        let err = parse_suspend_time(Some("12.5")).unwrap_err();
        assert!(err.to_string().starts_with("invalid suspend time"));
    }

    #[test]
    fn test_past_time_rejected() {
        let err = parse_suspend_time(Some("12")).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("specified market suspend time is in the past")
        );
    }

    #[test]
    fn test_future_time_accepted() {
        let ms = now_ms() + 60_000;
        match parse_suspend_time(Some(&ms.to_string())).unwrap() {
            SuspendTime::At(at) => assert_eq!(at.timestamp_millis(), ms),
            SuspendTime::Immediate => panic!("future time parsed as immediate"),
        }
    }

    #[test]
    fn test_persist_allow_list() {
        assert!(parse_persist(None).unwrap());
        assert!(parse_persist(Some("")).unwrap());
        assert!(parse_persist(Some("true")).unwrap());
        assert!(parse_persist(Some("1")).unwrap());
        assert!(!parse_persist(Some("false")).unwrap());
        assert!(!parse_persist(Some("0")).unwrap());

        let err = parse_persist(Some("blahblahblah")).unwrap_err();
        assert!(err.to_string().starts_with("invalid persist book boolean"));

        // Case variants are not in the allow-list.
        assert!(parse_persist(Some("TRUE")).is_err());
        assert!(parse_persist(Some("False")).is_err());
    }
}
