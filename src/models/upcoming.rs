//! Report row for the upcoming-birthday query.

use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::domain::Name;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A contact whose birthday falls inside the requested window, with the
/// date on which to congratulate them (weekends already rolled forward).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub greeting_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.greeting_date.format(BIRTHDAY_FORMAT)
        )
    }
}
