//! Millisecond-precision Unix time helpers
//!
//! The engine's epoch timeline is expressed in integer milliseconds
//! since the Unix epoch; these helpers convert between that and
//! `chrono` instants.

use chrono::{DateTime, TimeZone, Utc};

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Interpret `ms` as milliseconds since the Unix epoch.
///
/// Returns `None` for values outside chrono's representable range.
pub fn ms_to_time(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_round_trip() {
        let t = ms_to_time(1_234_567_890_123).unwrap();
        assert_eq!(t.timestamp_millis(), 1_234_567_890_123);
    }

    #[test]
    fn test_now_ms_is_recent() {
        // 2023-01-01T00:00:00Z in ms; anything earlier means a broken
        // clock source.
        assert!(now_ms() > 1_672_531_200_000);
    }

    #[test]
    fn test_ms_out_of_range() {
        assert!(ms_to_time(i64::MAX).is_none());
    }
}
