/// Utilities for the `<input type="date">` fields
///
/// Values are exchanged as `YYYY-MM-DD` strings, the format date inputs use.
use chrono::{Days, NaiveDate};
use contracts::domain::common::validation::{parse_event_date, EVENT_DATE_FORMAT};

/// Today's date in the visitor's time zone, read from the browser clock
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Format a date for a date input value or `min` attribute
/// Example: 2026-03-10 -> "2026-03-10"
pub fn to_input_value(date: NaiveDate) -> String {
    date.format(EVENT_DATE_FORMAT).to_string()
}

/// Parse a date input value; empty or malformed input is `None`
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    parse_event_date(value)
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(to_input_value(date), "2026-03-10");
        assert_eq!(from_input_value("2026-03-10"), Some(date));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("10.03.2026"), None);
    }

    #[test]
    fn test_next_day_crosses_month_end() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(to_input_value(next_day(date)), "2026-03-01");
    }
}
