//! Form Validation
//!
//! Every dialog and form submits through `submit_if_valid`: blank required
//! fields stop the submit before any parsing or service call happens.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("{field} is not a valid {expected}")]
    Invalid { field: String, expected: &'static str },
}

/// Labels of blank fields, in form order
pub fn missing_fields(fields: &[(&str, &str)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label.to_string())
        .collect()
}

pub fn validate_required(fields: &[(&str, &str)]) -> Result<(), ValidationError> {
    let missing = missing_fields(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Missing(missing))
    }
}

/// Run `submit` only when every required field is filled in
///
/// `submit` may fail itself while parsing the filled-in values; either error
/// comes back for the caller to show.
pub fn submit_if_valid<T>(
    fields: &[(&str, &str)],
    submit: impl FnOnce() -> Result<T, ValidationError>,
) -> Result<T, ValidationError> {
    validate_required(fields)?;
    submit()
}

/// Parse the `YYYY-MM-DD` value of a date input
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ValidationError::Invalid {
        field: field.to_string(),
        expected: "date",
    })
}

/// Parse the `YYYY-MM-DDTHH:MM` value of a datetime-local input
pub fn parse_date_time(field: &str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ValidationError::Invalid {
            field: field.to_string(),
            expected: "date and time",
        })
}

/// Parse a dollar amount such as "120", "$1,250.5" or "75.00" into cents
pub fn parse_amount_cents(field: &str, value: &str) -> Result<u64, ValidationError> {
    let invalid = || ValidationError::Invalid {
        field: field.to_string(),
        expected: "amount",
    };
    let cleaned: String = value.trim().trim_start_matches('$').chars().filter(|c| *c != ',').collect();
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };
    if whole.is_empty() || fraction.len() > 2 {
        return Err(invalid());
    }
    let dollars: u64 = whole.parse().map_err(|_| invalid())?;
    let cents: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };
    let total = dollars.checked_mul(100).and_then(|d| d.checked_add(cents)).ok_or_else(invalid)?;
    if total == 0 {
        return Err(invalid());
    }
    Ok(total)
}

/// Parse a whole-number score between 0 and `max`
pub fn parse_score(field: &str, value: &str, max: u32) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|score| *score <= max)
        .ok_or_else(|| ValidationError::Invalid {
            field: field.to_string(),
            expected: "score",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_listed_in_order() {
        let err = validate_required(&[("Subject", " "), ("Body", "hi"), ("To", "")]).unwrap_err();
        assert_eq!(err, ValidationError::Missing(vec!["Subject".into(), "To".into()]));
        assert_eq!(err.to_string(), "Please fill in: Subject, To");
        assert!(validate_required(&[("Subject", "Hello")]).is_ok());
    }

    #[test]
    fn test_submit_not_called_when_invalid() {
        let mut called = false;
        let result = submit_if_valid(&[("Title", "Essay"), ("Due date", " ")], || {
            called = true;
            Ok(())
        });
        assert_eq!(result, Err(ValidationError::Missing(vec!["Due date".into()])));
        assert!(!called);

        let result = submit_if_valid(&[("Title", "Essay")], || Ok(42));
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn test_submit_surfaces_parse_errors() {
        let mut sent = false;
        let result = submit_if_valid(&[("Due date", "14/03")], || {
            let due = parse_date("Due date", "14/03")?;
            sent = true;
            Ok(due)
        });
        assert_eq!(result.unwrap_err().to_string(), "Due date is not a valid date");
        assert!(!sent);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("Due date", "2025-03-14"), Ok(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()));
        let err = parse_date("Due date", "14/03/2025").unwrap_err();
        assert_eq!(err.to_string(), "Due date is not a valid date");
    }

    #[test]
    fn test_parse_date_time() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap().and_hms_opt(16, 30, 0).unwrap();
        assert_eq!(parse_date_time("Starts", "2025-03-12T16:30"), Ok(expected));
        assert_eq!(parse_date_time("Starts", "2025-03-12T16:30:00"), Ok(expected));
        assert_eq!(
            parse_date_time("Starts", "").unwrap_err().to_string(),
            "Starts is not a valid date and time"
        );
    }

    #[test]
    fn test_parse_amount_cents() {
        assert_eq!(parse_amount_cents("Amount", "120"), Ok(12_000));
        assert_eq!(parse_amount_cents("Amount", "$1,250.5"), Ok(125_050));
        assert_eq!(parse_amount_cents("Amount", " 75.05 "), Ok(7_505));
        assert!(parse_amount_cents("Amount", "0").is_err());
        assert!(parse_amount_cents("Amount", "1.234").is_err());
        assert!(parse_amount_cents("Amount", "abc").is_err());
        assert!(parse_amount_cents("Amount", ".50").is_err());
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("Score", "87", 100), Ok(87));
        assert!(parse_score("Score", "101", 100).is_err());
        assert!(parse_score("Score", "-3", 100).is_err());
    }
}
