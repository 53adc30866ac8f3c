//! Calendar dates
//!
//! Puzzles and progress records are keyed by ISO `YYYY-MM-DD` dates.

use super::category::PuzzleError;
use chrono::{Local, NaiveDate};

/// Parse an ISO `YYYY-MM-DD` date
///
/// # Errors
/// Returns `PuzzleError::InvalidDate` for anything else.
///
/// # Examples
/// ```
/// use konekcije::core::parse_date;
///
/// assert_eq!(parse_date("2026-02-07").unwrap().to_string(), "2026-02-07");
/// assert!(parse_date("07.02.2026").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate, PuzzleError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| PuzzleError::InvalidDate(text.to_string()))
}

/// Today's date on the local calendar
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let date = parse_date("2026-02-07").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 7).unwrap());
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(parse_date(" 2025-12-31\n").is_ok());
    }

    #[test]
    fn parse_invalid() {
        assert!(matches!(
            parse_date("2026-02-30"),
            Err(PuzzleError::InvalidDate(_))
        ));
        assert!(parse_date("").is_err());
        assert!(parse_date("2026/02/07").is_err());
    }
}
