//! Calendar date parsing for request bodies.

use jiff::civil::Date;
use salvo::http::StatusError;

use crate::extensions::*;

/// Parse an optional `YYYY-MM-DD` value; absent or blank stays `None`.
pub(crate) fn parse_optional_date(value: Option<&str>) -> Result<Option<Date>, StatusError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| value.parse::<Date>().or_400("Invalid date, expected YYYY-MM-DD"))
        .transpose()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn absent_and_blank_dates_are_none() -> TestResult {
        assert_eq!(parse_optional_date(None)?, None);
        assert_eq!(parse_optional_date(Some("  "))?, None);

        Ok(())
    }

    #[test]
    fn iso_dates_parse() -> TestResult {
        assert_eq!(
            parse_optional_date(Some("2026-12-24"))?,
            Some(date(2026, 12, 24))
        );

        Ok(())
    }

    #[test]
    fn malformed_dates_are_bad_requests() -> TestResult {
        let error = parse_optional_date(Some("24/12/2026"))
            .err()
            .ok_or("expected an error")?;

        assert_eq!(error.code, StatusCode::BAD_REQUEST);

        Ok(())
    }
}
