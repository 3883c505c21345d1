//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono accepts unpadded and signed numbers for %Y/%m/%d, so the shape is
// pinned down before parsing.
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile date shape regex")
});

/// A birthday, stored as a parsed calendar date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("2000-05-15").unwrap();
/// assert_eq!(birthday.to_string(), "2000-05-15");
/// assert!(Birthday::new("15.05.2000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from strict `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text has any other shape
    /// or names a date that does not exist (e.g. `2023-02-30`).
    pub fn new(date: impl AsRef<str>) -> Result<Self, ValidationError> {
        let date = date.as_ref();
        if !DATE_SHAPE.is_match(date) {
            return Err(ValidationError::InvalidDate(date.to_string()));
        }

        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))
    }

    /// Get the underlying date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month and day in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years. Returns
    /// `None` only when `year` is outside chrono's supported range.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The first celebration on or after `today`.
    ///
    /// If this year's date equals `today` it is returned as is; rollover to
    /// next year only happens once the date has strictly passed.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(today.year())?;
        if this_year < today {
            self.in_year(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Whole days from `today` until the next celebration (0 on the day).
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }
}

impl Field for Birthday {
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }
}

// Serde support - serialize as YYYY-MM-DD
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("2000-05-15").unwrap();
        assert_eq!(birthday.as_date(), date(2000, 5, 15));
        assert!(Birthday::new("2024-02-29").is_ok());
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("2000-5-15").is_err());
        assert!(Birthday::new("2000-05-5").is_err());
        assert!(Birthday::new("15-05-2000").is_err());
        assert!(Birthday::new("2000/05/15").is_err());
        assert!(Birthday::new("+2000-05-15").is_err());
        assert!(Birthday::new("2000-05-15 ").is_err());
        assert!(Birthday::new("20000-05-15").is_err());
        assert!(Birthday::new("yesterday").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("2023-02-29").is_err());
        assert!(Birthday::new("2000-13-01").is_err());
        assert!(Birthday::new("2000-04-31").is_err());
        assert!(Birthday::new("2000-00-10").is_err());
    }

    #[test]
    fn test_birthday_set_keeps_old_value_on_error() {
        let mut birthday = Birthday::new("2000-05-15").unwrap();
        assert_eq!(
            birthday.set("May 15"),
            Err(ValidationError::InvalidDate("May 15".to_string()))
        );
        assert_eq!(birthday.as_date(), date(2000, 5, 15));

        birthday.set("1999-12-31").unwrap();
        assert_eq!(birthday.as_date(), date(1999, 12, 31));
    }

    #[test]
    fn test_days_until_counts_today_as_due() {
        let birthday = Birthday::new("2000-05-15").unwrap();
        assert_eq!(birthday.days_until(date(2026, 5, 15)), Some(0));
        assert_eq!(birthday.days_until(date(2026, 5, 14)), Some(1));
        assert_eq!(birthday.days_until(date(2026, 5, 16)), Some(364));
    }

    #[test]
    fn test_days_until_across_year_end() {
        let birthday = Birthday::new("1990-01-01").unwrap();
        assert_eq!(birthday.days_until(date(2026, 12, 31)), Some(1));
    }

    #[test]
    fn test_leap_day_birthday() {
        let birthday = Birthday::new("2000-02-29").unwrap();
        assert_eq!(birthday.in_year(2026), Some(date(2026, 2, 28)));
        assert_eq!(birthday.in_year(2028), Some(date(2028, 2, 29)));
        assert_eq!(birthday.days_until(date(2026, 1, 1)), Some(58));
        assert_eq!(birthday.days_until(date(2028, 1, 1)), Some(59));
        assert_eq!(
            birthday.next_occurrence(date(2026, 3, 1)),
            Some(date(2027, 2, 28))
        );
    }

    #[test]
    fn test_birthday_serde() {
        let birthday = Birthday::new("2000-05-15").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"2000-05-15\"");

        let back: Birthday = serde_json::from_str("\"2000-05-15\"").unwrap();
        assert_eq!(back, birthday);

        let bad: Result<Birthday, _> = serde_json::from_str("\"2000-5-15\"");
        assert!(bad.is_err());
    }
}
