//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format accepted and produced for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is a valid regex")
});

/// A calendar date of birth, with no time component.
///
/// Constructed from the fixed textual format `DD.MM.YYYY`; the date must
/// exist on the calendar (no 30 February).
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("12.06.1990").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 12).unwrap());
/// assert_eq!(birthday.to_string(), "12.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// the expected shape or names a date that does not exist.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();

        if !BIRTHDAY_PATTERN.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// Wrap an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Day of the month, starting from 1.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Month of the year, starting from 1.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Year of birth.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

// Serialized in the same text form users type.
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

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
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(birthday.date(), ymd(1990, 6, 15));
        assert_eq!(birthday.day(), 15);
        assert_eq!(birthday.month(), 6);
        assert_eq!(birthday.year(), 1990);
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.2000").is_err());
        assert!(Birthday::new("31.04.2021").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("01.13.2000").is_err());
    }

    #[test]
    fn test_birthday_accepts_leap_day() {
        assert_eq!(Birthday::new("29.02.2024").unwrap().date(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_birthday_rejects_other_formats() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1990-06-15").is_err());
        assert!(Birthday::new("15/06/1990").is_err());
        assert!(Birthday::new("5.6.1990").is_err());
        assert!(Birthday::new("15.06.90").is_err());
        assert!(Birthday::new("15.06.1990 ").is_err());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        assert_eq!(
            Birthday::new("32.01.2000"),
            Err(ValidationError::InvalidBirthday("32.01.2000".to_string()))
        );
    }

    #[test]
    fn test_birthday_display_pads_fields() {
        assert_eq!(Birthday::from_date(ymd(1985, 1, 2)).to_string(), "02.01.1985");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("01.12.1999").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01.12.1999\"");

        let back: Birthday = serde_json::from_str("\"01.12.1999\"").unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"31.11.1999\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_formatted_dates_parse_back(
            date in (1000i32..=9999, 1u32..=12, 1u32..=31)
                .prop_filter_map("not a calendar date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        ) {
            let text = date.format(BIRTHDAY_FORMAT).to_string();
            prop_assert_eq!(Birthday::new(&text).unwrap().date(), date);
        }
    }
}
