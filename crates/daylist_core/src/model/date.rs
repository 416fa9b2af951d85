//! Calendar-day keys (`YYYY-MM-DD`) used to bucket tasks.

use chrono::{NaiveDate, Utc};

/// Format of every date bucket key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Day bucket key type. Lexicographic order equals chronological order.
pub type DateKey = String;

/// Returns today's key in UTC.
pub fn today_key() -> DateKey {
    Utc::now().date_naive().format(DATE_KEY_FORMAT).to_string()
}

/// Returns whether `value` is a real calendar date in `YYYY-MM-DD` form.
///
/// Advisory only: the store accepts any key.
pub fn is_date_key(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, DATE_KEY_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{is_date_key, today_key};

    #[test]
    fn today_key_is_a_valid_key() {
        assert!(is_date_key(&today_key()));
    }

    #[test]
    fn is_date_key_rejects_loose_formats() {
        assert!(is_date_key("2024-02-29"));
        assert!(!is_date_key("2023-02-29"));
        assert!(!is_date_key("2024-1-5"));
        assert!(!is_date_key("yesterday"));
    }
}
