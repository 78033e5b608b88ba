//! Field-level validation shared by the enquiry forms and the collector

use chrono::NaiveDate;
use thiserror::Error;

/// Date format used by `<input type="date">` and stored as-is by the collector
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A required field is missing or a field value is malformed.
///
/// Raised before anything is sent over the network; the collector runs the
/// same checks and answers 422.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} is not valid")]
    Malformed { field: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field } | ValidationError::Malformed { field } => field,
        }
    }
}

/// Fails with `Missing` when the value is empty or whitespace only
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}

/// Required, well-formed email address
pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require(field, value)?;
    if !is_valid_email(value) {
        return Err(ValidationError::Malformed { field });
    }
    Ok(())
}

/// Required calendar date in `YYYY-MM-DD` form
pub fn require_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    require(field, value)?;
    parse_event_date(value).ok_or(ValidationError::Malformed { field })
}

pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), EVENT_DATE_FORMAT).ok()
}

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Maps an empty optional text field to `None`
pub fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("name", "Priya").is_ok());
        assert_eq!(
            require("name", "   "),
            Err(ValidationError::Missing { field: "name" })
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("first.last@mail.example.co.in"));
        assert!(!is_valid_email("guest@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("guest@@example.com"));
        assert!(!is_valid_email("gu est@example.com"));
        assert!(!is_valid_email("guest@example..com"));
    }

    #[test]
    fn test_require_email_distinguishes_missing_and_malformed() {
        assert_eq!(
            require_email("email", ""),
            Err(ValidationError::Missing { field: "email" })
        );
        assert_eq!(
            require_email("email", "nope"),
            Err(ValidationError::Malformed { field: "email" })
        );
    }

    #[test]
    fn test_event_date() {
        assert_eq!(
            require_date("event_date", "2026-03-10"),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap())
        );
        assert_eq!(
            require_date("event_date", "2026-02-30"),
            Err(ValidationError::Malformed { field: "event_date" })
        );
        assert_eq!(
            require_date("event_date", "10.03.2026"),
            Err(ValidationError::Malformed { field: "event_date" })
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty("+91 99"), Some("+91 99".to_string()));
    }

    #[test]
    fn test_error_message() {
        let err = ValidationError::Malformed { field: "email" };
        assert_eq!(err.to_string(), "email is not valid");
        assert_eq!(err.field(), "email");
    }
}
