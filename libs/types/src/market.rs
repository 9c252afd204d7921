//! Market status and suspension types
//!
//! Records exchanged between the admin service and the engine, plus the
//! serialized views the admin surface returns to operators. A scheduled
//! suspension is always carried as an `Option` so that "no suspension"
//! stays distinguishable from "suspends at epoch 0".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A suspension the engine currently holds for a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSuspend {
    /// Final epoch index; matching stops at this epoch's boundary.
    pub epoch: i64,
    /// Whether the order book is retained across the suspension.
    pub persist_book: bool,
}

/// Point-in-time market state as reported by the engine.
///
/// Owned transiently per request and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketReport {
    pub running: bool,
    pub epoch_duration: u64,
    pub active_epoch: i64,
    pub start_epoch: i64,
    /// Present iff a suspension is currently scheduled.
    pub suspend: Option<ScheduledSuspend>,
}

/// The epoch at which a newly scheduled suspension takes effect,
/// reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspendEpoch {
    /// Epoch index at which the market stops matching.
    pub idx: i64,
    /// Wall-clock end of that epoch.
    pub end: DateTime<Utc>,
}

/// When a suspension should take effect.
///
/// `Immediate` means the next epoch boundary the engine can honor and is
/// valid at any wall time; `At` is an operator-chosen instant that must
/// be strictly in the future when the request is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendTime {
    Immediate,
    At(DateTime<Utc>),
}

impl SuspendTime {
    /// Millisecond timestamp for the wire; `None` for `Immediate`.
    pub fn as_millis(&self) -> Option<i64> {
        match self {
            SuspendTime::Immediate => None,
            SuspendTime::At(t) => Some(t.timestamp_millis()),
        }
    }
}

/// Serialized status record returned by the admin surface.
///
/// `market` is omitted when the record sits in a map keyed by name.
/// `finalepoch` and `persistbook` are present iff the engine reports a
/// scheduled suspension; both are omitted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatus {
    #[serde(rename = "market", skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub running: bool,
    #[serde(rename = "epochlen")]
    pub epoch_duration: u64,
    #[serde(rename = "activeepoch")]
    pub active_epoch: i64,
    #[serde(rename = "startepoch")]
    pub start_epoch: i64,
    #[serde(rename = "finalepoch", skip_serializing_if = "Option::is_none", default)]
    pub suspend_epoch: Option<i64>,
    #[serde(rename = "persistbook", skip_serializing_if = "Option::is_none", default)]
    pub persist_book: Option<bool>,
}

impl MarketStatus {
    /// Build the operator-facing view of an engine report. `name` is
    /// attached for single-market responses and left out of keyed maps.
    pub fn from_report(name: Option<String>, report: &MarketReport) -> Self {
        Self {
            name,
            running: report.running,
            epoch_duration: report.epoch_duration,
            active_epoch: report.active_epoch,
            start_epoch: report.start_epoch,
            suspend_epoch: report.suspend.map(|s| s.epoch),
            persist_book: report.suspend.map(|s| s.persist_book),
        }
    }
}

/// Response to a successfully scheduled suspension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspendResult {
    pub market: String,
    #[serde(rename = "finalepoch")]
    pub final_epoch: i64,
    #[serde(rename = "suspendtime")]
    pub suspend_time: DateTime<Utc>,
}

impl SuspendResult {
    pub fn new(market: impl Into<String>, epoch: &SuspendEpoch) -> Self {
        Self {
            market: market.into(),
            final_epoch: epoch.idx,
            suspend_time: epoch.end,
        }
    }
}
