use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use dialoguer::Input as DialoguerInput;

use crate::cli_utils::{CliError, CliResult};
use crate::reports::period::Period;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input utilities
pub struct Input;

impl Input {
    pub fn get_string(prompt: &str) -> CliResult<String> {
        Ok(DialoguerInput::new().with_prompt(prompt).interact_text()?)
    }

    /// Empty input maps to `None`
    pub fn get_optional_string(prompt: &str) -> CliResult<Option<String>> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (optional)", prompt))
            .allow_empty(true)
            .interact_text()?;

        Ok(if input.trim().is_empty() { None } else { Some(input) })
    }

    /// Get a database id
    pub fn get_id(prompt: &str) -> CliResult<i32> {
        parse_id(&Self::get_string(prompt)?)
    }

    pub fn get_optional_id(prompt: &str) -> CliResult<Option<i32>> {
        Self::get_optional_string(prompt)?
            .map(|raw| parse_id(&raw))
            .transpose()
    }

    pub fn get_decimal(prompt: &str) -> CliResult<BigDecimal> {
        parse_decimal(&Self::get_string(prompt)?)
    }

    pub fn get_optional_decimal(prompt: &str) -> CliResult<Option<BigDecimal>> {
        Self::get_optional_string(prompt)?
            .map(|raw| parse_decimal(&raw))
            .transpose()
    }

    /// Defaults to today
    pub fn get_date(prompt: &str) -> CliResult<NaiveDate> {
        let today = chrono::Local::now().date_naive().format(DATE_FORMAT).to_string();
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (YYYY-MM-DD)", prompt))
            .default(today)
            .interact_text()?;

        parse_date(&input)
    }

    pub fn get_optional_date(prompt: &str) -> CliResult<Option<NaiveDate>> {
        Self::get_optional_string(&format!("{} (YYYY-MM-DD)", prompt))?
            .map(|raw| parse_date(&raw))
            .transpose()
    }

    pub fn select_from_list(prompt: &str, items: &[&str]) -> CliResult<usize> {
        use dialoguer::Select;
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }
}

pub fn parse_id(raw: &str) -> CliResult<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| CliError::ValidationError("Invalid id".to_string()))
}

pub fn parse_decimal(raw: &str) -> CliResult<BigDecimal> {
    BigDecimal::from_str(raw.trim())
        .map_err(|_| CliError::ValidationError("Invalid decimal format".to_string()))
}

pub fn parse_date(raw: &str) -> CliResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CliError::ValidationError("Dates must look like 2024-03-05".to_string()))?;
    Period::containing(date)?;
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(parse_id("0").is_err());
        assert!(parse_id("seven").is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("12.50").unwrap(), BigDecimal::from_str("12.5").unwrap());
        assert!(parse_decimal("12,50").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("0000-03-05").is_err());
        assert!(parse_date("+10000-01-01").is_err());
    }
}
