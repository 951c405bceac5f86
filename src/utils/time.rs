//! Timestamp utilities: storage format for entry bounds, parsing back, "now".

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, Utc};

/// Fixed-width so that lexical order in SQLite equals chronological order.
pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const TS_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Current UTC instant, as used for entry bounds.
pub fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn format_ts(ts: &NaiveDateTime) -> String {
    ts.format(TS_FORMAT).to_string()
}

pub fn parse_ts(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TS_PARSE_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_optional_ts(input: Option<&str>) -> AppResult<Option<NaiveDateTime>> {
    input.map(parse_ts).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn stored_timestamps_parse_back() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_milli_opt(9, 5, 7, 42)
            .unwrap();
        let s = format_ts(&ts);
        assert_eq!(s, "2025-03-04 09:05:07.042");
        assert_eq!(parse_ts(&s).unwrap(), ts);
    }

    #[test]
    fn fraction_is_optional_when_parsing() {
        assert!(parse_ts("2025-03-04 09:05:07").is_ok());
        assert!(matches!(
            parse_ts("yesterday"),
            Err(AppError::InvalidTimestamp(_))
        ));
    }
}
