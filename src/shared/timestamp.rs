//! Fixed-layout timestamp codec.
//!
//! The backend stamps every record as `YYYY-MM-DDTHH:MM:SS.fffffffffZ`.
//! Components are read at fixed character offsets rather than through a
//! general date parser, so anything after the fraction (the zone suffix) is
//! ignored and the instant is taken as UTC.
//!
//! Resolution is `chrono`'s native nanosecond, so a nine-digit fraction
//! survives a format/parse round trip exactly.

use crate::error::{ApiError, ApiResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

/// Shortest string the fixed layout accepts.
pub const TIMESTAMP_MIN_LEN: usize = 29;

const FRACTION_START: usize = 20;
const FRACTION_END: usize = 29;
const FRACTION_DIGITS: u32 = 9;

/// Parse a backend timestamp.
///
/// # Errors
///
/// - [`ApiError::MalformedTimestamp`] if the string is shorter than
///   [`TIMESTAMP_MIN_LEN`], a component is not numeric, or the hour, minute
///   or second is out of range.
/// - [`ApiError::InvalidDate`] if year/month/day is not a calendar date.
pub fn parse_timestamp(s: &str) -> ApiResult<DateTime<Utc>> {
    if s.len() < TIMESTAMP_MIN_LEN {
        return Err(ApiError::MalformedTimestamp(s.to_string()));
    }

    let year = component(s, 0, 4)?;
    let month = component(s, 5, 7)?;
    let day = component(s, 8, 10)?;
    let hour = component(s, 11, 13)?;
    let minute = component(s, 14, 16)?;
    let second = component(s, 17, 19)?;
    let nanos = fraction_nanos(s)?;

    // Second 60 is a leap second and rolls into the next minute.
    if hour > 23 || minute > 59 || second > 60 {
        return Err(ApiError::MalformedTimestamp(s.to_string()));
    }

    let date = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| ApiError::InvalidDate(s.to_string()))?;

    let naive = date.and_time(NaiveTime::MIN)
        + Duration::hours(hour.into())
        + Duration::minutes(minute.into())
        + Duration::seconds(second.into())
        + Duration::nanoseconds(nanos.into());

    Ok(Utc.from_utc_datetime(&naive))
}

/// Format an instant in the backend's fixed layout (nine fraction digits, `Z`).
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.9fZ").to_string()
}

fn component(s: &str, start: usize, end: usize) -> ApiResult<u32> {
    s.get(start..end)
        .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| ApiError::MalformedTimestamp(s.to_string()))
}

/// Leading digits of the fraction field, scaled to nanoseconds.
///
/// The live service sometimes trims a trailing zero, leaving eight digits
/// followed by the zone suffix inside the fraction field.
fn fraction_nanos(s: &str) -> ApiResult<u32> {
    let field = s
        .get(FRACTION_START..FRACTION_END)
        .ok_or_else(|| ApiError::MalformedTimestamp(s.to_string()))?;

    let digits: &str = match field.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &field[..end],
        None => field,
    };
    if digits.is_empty() {
        return Err(ApiError::MalformedTimestamp(s.to_string()));
    }

    let value: u32 = digits
        .parse()
        .map_err(|_| ApiError::MalformedTimestamp(s.to_string()))?;
    Ok(value * 10u32.pow(FRACTION_DIGITS - digits.len() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_full_layout() {
        let ts = parse_timestamp("2015-07-13T05:38:17.336403920Z").unwrap();
        assert_eq!(ts.year(), 2015);
        assert_eq!(ts.month(), 7);
        assert_eq!(ts.day(), 13);
        assert_eq!(ts.hour(), 5);
        assert_eq!(ts.minute(), 38);
        assert_eq!(ts.second(), 17);
        assert_eq!(ts.nanosecond(), 336_403_920);
    }

    #[test]
    fn test_parse_eight_digit_fraction() {
        let ts = parse_timestamp("2015-07-13T05:38:17.33640392Z").unwrap();
        assert_eq!(ts.nanosecond(), 336_403_920);
    }

    #[test]
    fn test_zone_suffix_is_ignored() {
        let utc = parse_timestamp("2015-01-01T00:00:00.000000000Z").unwrap();
        let offset = parse_timestamp("2015-01-01T00:00:00.000000000+02:00").unwrap();
        assert_eq!(utc, offset);
    }

    #[test]
    fn test_rejects_out_of_range_clock() {
        for s in [
            "9999-12-31T99:00:00.000000000Z",
            "2015-01-01T24:00:00.000000000Z",
            "2015-01-01T00:60:00.000000000Z",
            "2015-01-01T00:00:61.000000000Z",
        ] {
            match parse_timestamp(s) {
                Err(ApiError::MalformedTimestamp(raw)) => assert_eq!(raw, s),
                other => panic!("expected MalformedTimestamp for {:?}, got {:?}", s, other),
            }
        }
    }

    #[test]
    fn test_last_instant_round_trips() {
        let ts = parse_timestamp("9999-12-31T23:59:59.999999999Z").unwrap();
        assert_eq!(parse_timestamp(&format_timestamp(&ts)).unwrap(), ts);
    }

    #[test]
    fn test_leap_second_rolls_over() {
        let leap = parse_timestamp("2015-06-30T23:59:60.000000000Z").unwrap();
        let next = parse_timestamp("2015-07-01T00:00:00.000000000Z").unwrap();
        assert_eq!(leap, next);
    }

    #[test]
    fn test_rejects_short_input() {
        for s in ["", "2015-01-01", "2015-01-01T00:00:00Z", "2015-01-01T00:00:00.0000000Z"] {
            assert!(s.len() < TIMESTAMP_MIN_LEN);
            match parse_timestamp(s) {
                Err(ApiError::MalformedTimestamp(raw)) => assert_eq!(raw, s),
                other => panic!("expected MalformedTimestamp for {:?}, got {:?}", s, other),
            }
        }
    }

    #[test]
    fn test_rejects_non_numeric_components() {
        assert!(matches!(
            parse_timestamp("20X5-01-01T00:00:00.000000000Z"),
            Err(ApiError::MalformedTimestamp(_))
        ));
        assert!(matches!(
            parse_timestamp("2015-01-01T00:00:00.Z00000000Z"),
            Err(ApiError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn test_rejects_impossible_dates() {
        for s in [
            "2024-13-01T00:00:00.000000000Z",
            "2024-02-30T00:00:00.000000000Z",
            "2024-01-32T00:00:00.000000000Z",
            "2023-02-29T00:00:00.000000000Z",
            "2024-00-10T00:00:00.000000000Z",
        ] {
            match parse_timestamp(s) {
                Err(ApiError::InvalidDate(raw)) => assert_eq!(raw, s),
                other => panic!("expected InvalidDate for {:?}, got {:?}", s, other),
            }
        }
    }

    #[test]
    fn test_leap_day_accepted() {
        let ts = parse_timestamp("2024-02-29T23:59:59.999999999Z").unwrap();
        assert_eq!(ts.month(), 2);
        assert_eq!(ts.day(), 29);
        assert_eq!(ts.nanosecond(), 999_999_999);
    }

    #[test]
    fn test_format_layout() {
        let ts = parse_timestamp("2015-01-01T00:00:00.000000001Z").unwrap();
        let formatted = format_timestamp(&ts);
        assert_eq!(formatted, "2015-01-01T00:00:00.000000001Z");
        assert!(formatted.len() >= TIMESTAMP_MIN_LEN);
    }

    #[test]
    fn test_parse_format_parse_is_stable() {
        for s in [
            "2015-07-13T05:38:17.336403920Z",
            "2015-07-13T05:38:17.33640392Z",
            "1999-12-31T23:59:59.999999999Z",
            "2000-02-29T12:00:00.500000000Z",
            "2016-01-04T08:15:00.000000000Z",
        ] {
            let first = parse_timestamp(s).unwrap();
            let second = parse_timestamp(&format_timestamp(&first)).unwrap();
            assert_eq!(first, second, "round trip changed {}", s);
        }
    }
}
