//! Parsing of submitted form fields.
//!
//! Page forms arrive as plain text. Each helper trims its input and reports failures as
//! [`RentalError`] so the message can be shown next to the form.

use chrono::NaiveDate;

use crate::server::error::rental::RentalError;

/// Trimmed value of a required field, `None` when blank.
pub fn required(value: &str) -> Option<&str> {
    let value = value.trim();

    (!value.is_empty()).then_some(value)
}

/// `true` when any of the fields is blank after trimming.
pub fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|value| required(value).is_none())
}

/// Parses the ID chosen in a select box.
///
/// A blank value means nothing was selected and yields `SelectionRequired(subject)`.
pub fn parse_selection(
    field: &'static str,
    value: &str,
    subject: &'static str,
) -> Result<i32, RentalError> {
    let value = required(value).ok_or(RentalError::SelectionRequired(subject))?;

    parse_id(field, value)
}

pub fn parse_id(field: &'static str, value: &str) -> Result<i32, RentalError> {
    value.trim().parse().map_err(|_| RentalError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parses a finite, non-negative amount of money.
pub fn parse_amount(field: &'static str, value: &str) -> Result<f64, RentalError> {
    let invalid = || RentalError::InvalidNumber {
        field,
        value: value.to_string(),
    };

    let amount: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(invalid());
    }

    Ok(amount)
}

/// Parses a `YYYY-MM-DD` date as sent by `<input type="date">`.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, RentalError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| RentalError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_selection_asks_for_choice() {
        let result = parse_selection("branch_id", "  ", "a branch");

        assert_eq!(result, Err(RentalError::SelectionRequired("a branch")));
    }

    #[test]
    fn parses_selected_id() {
        assert_eq!(parse_selection("car_id", " 12 ", "a car"), Ok(12));
        assert!(matches!(
            parse_selection("car_id", "twelve", "a car"),
            Err(RentalError::InvalidNumber { field: "car_id", .. })
        ));
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert_eq!(parse_amount("damage_cost", "150.25"), Ok(150.25));
        assert!(parse_amount("damage_cost", "-1").is_err());
        assert!(parse_amount("damage_cost", "NaN").is_err());
        assert!(parse_amount("damage_cost", "inf").is_err());
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_date("start_date", "2025-03-01"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        );
        assert!(matches!(
            parse_date("start_date", "01.03.2025"),
            Err(RentalError::InvalidDate { field: "start_date", .. })
        ));
    }

    #[test]
    fn detects_blank_fields() {
        assert!(any_blank(&["a", " "]));
        assert!(!any_blank(&["a", "b"]));
    }
}
