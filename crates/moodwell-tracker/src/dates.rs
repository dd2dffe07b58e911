//! Calendar-day parsing and arithmetic

use crate::error::TrackerError;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar day
pub fn parse_date(input: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| TrackerError::InvalidDate {
        input: input.to_string(),
    })
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_date(" 2024-01-01\n").is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_date("not-a-date"),
            Err(TrackerError::InvalidDate {
                input: "not-a-date".to_string()
            })
        );
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_days_between_signed() {
        let a = parse_date("2024-01-01").unwrap();
        let b = parse_date("2024-01-29").unwrap();
        assert_eq!(days_between(a, b), 28);
        assert_eq!(days_between(b, a), -28);
    }
}
