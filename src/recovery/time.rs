//! Snapshot time formatting and recovery target parsing.
//!
//! Times are shown and read in the local time zone as `YYYY-MM-DD HH:mm:ss`,
//! the same shape used for Tab completion of the recovery prompt.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{HistoryError, Result};

/// Display format for snapshot times.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-time layouts accepted for the recovery target, besides RFC 3339.
const ACCEPTED_FORMATS: &[&str] = &[
    TIME_FORMAT,
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Format a millisecond timestamp as local time.
pub fn format_timestamp(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| format_datetime(&dt))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Format a local date-time for display and completion.
pub fn format_datetime(dt: &DateTime<Local>) -> String {
    dt.format(TIME_FORMAT).to_string()
}

/// Parse a recovery target into milliseconds since the epoch.
///
/// Local layouts are read in the system time zone; a time that falls into a
/// daylight-saving gap is rejected, an ambiguous one resolves to the earlier
/// instant. A bare date means local midnight.
pub fn parse_target_time(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let invalid = || HistoryError::InvalidTime {
        input: input.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.timestamp_millis());
    }

    let naive = ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(invalid)?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_ms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .earliest()
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn parses_display_format() {
        assert_eq!(
            parse_target_time("2023-11-14 22:13:20").unwrap(),
            local_ms(2023, 11, 14, 22, 13, 20)
        );
    }

    #[test]
    fn parses_without_seconds_and_with_t_separator() {
        assert_eq!(
            parse_target_time("2023-11-14 22:13").unwrap(),
            local_ms(2023, 11, 14, 22, 13, 0)
        );
        assert_eq!(
            parse_target_time("2023-11-14T22:13:20").unwrap(),
            local_ms(2023, 11, 14, 22, 13, 20)
        );
    }

    #[test]
    fn bare_date_is_local_midnight() {
        assert_eq!(
            parse_target_time("2024-02-29").unwrap(),
            local_ms(2024, 2, 29, 0, 0, 0)
        );
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_target_time("2023-11-14T22:13:20Z").unwrap(),
            1_700_000_000_000
        );
        assert_eq!(
            parse_target_time("2023-11-15T00:13:20+02:00").unwrap(),
            1_700_000_000_000
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse_target_time("  2023-11-14 22:13:20\n").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_target_time("last tuesday").unwrap_err();
        assert!(matches!(err, HistoryError::InvalidTime { .. }));
        assert!(err.to_string().contains("last tuesday"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_target_time("   ").is_err());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_target_time("2023-02-30 10:00:00").is_err());
        assert!(parse_target_time("2023-13-01").is_err());
    }

    #[test]
    fn formatted_timestamp_parses_back() {
        let ms = local_ms(2022, 6, 1, 8, 30, 5);
        let shown = format_timestamp(ms);
        assert_eq!(shown, "2022-06-01 08:30:05");
        assert_eq!(parse_target_time(&shown).unwrap(), ms);
    }

    #[test]
    fn format_timestamp_drops_milliseconds() {
        let ms = local_ms(2022, 6, 1, 8, 30, 5) + 999;
        assert_eq!(format_timestamp(ms), "2022-06-01 08:30:05");
    }

    #[test]
    fn out_of_range_timestamp_is_unknown() {
        assert_eq!(format_timestamp(i64::MAX), "unknown");
    }
}
