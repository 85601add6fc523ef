use bigdecimal::{BigDecimal, RoundingMode};
use chrono::NaiveDate;

use crate::api::error::ApiError;
use crate::reports::period::Period;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_id(raw: &str, field_name: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ApiError::bad_request(format!("Invalid {} format", field_name)))
}

pub fn parse_period(year: &str, month: &str) -> Result<Period, ApiError> {
    let year = year
        .parse::<i32>()
        .map_err(|_| ApiError::bad_request("Invalid year format"))?;
    let month = month
        .parse::<u32>()
        .map_err(|_| ApiError::bad_request("month must be between 1 and 12"))?;

    Ok(Period::new(year, month)?)
}

/// Only dates that fall inside a reportable month are accepted.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ApiError::bad_request("date must be in YYYY-MM-DD format"))?;
    Period::containing(date)?;
    Ok(date)
}

pub fn require<T>(value: Option<T>, field_name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(format!("{} is required", field_name)))
}

pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{} cannot be empty", field_name)));
    }
    Ok(())
}

/// Amounts are stored with two decimal places.
pub fn to_money(value: BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "user_id").unwrap(), 42);
        assert!(parse_id("abc", "user_id").is_err());
        assert!(parse_id("0", "user_id").is_err());
        assert!(parse_id("-3", "user_id").is_err());
    }

    #[test]
    fn test_parse_period() {
        let period = parse_period("2024", "3").unwrap();
        assert_eq!(period.to_string(), "2024-03");
        assert!(parse_period("2024", "13").is_err());
        assert!(parse_period("2024", "0").is_err());
        assert!(parse_period("twenty", "3").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
        assert!(parse_date("03/05/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_date_rejects_unreportable_years() {
        let err = parse_date("0000-03-05").unwrap_err();
        assert_eq!(err.message(), "year must be between 1 and 9999");
        assert!(parse_date("+10000-01-01").is_err());
        assert!(parse_date("9999-12-31").is_ok());
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some(5), "amount").unwrap(), 5);
        let err = require::<i32>(None, "amount").unwrap_err();
        assert_eq!(err.message(), "amount is required");
    }

    #[test]
    fn test_to_money() {
        assert_eq!(to_money(BigDecimal::from_str("12.345").unwrap()).to_string(), "12.35");
        assert_eq!(to_money(BigDecimal::from(7)).to_string(), "7.00");
    }
}
