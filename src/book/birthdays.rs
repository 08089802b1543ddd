//! Upcoming-birthday scheduling rule.
//!
//! A birthday is projected onto the current year, or the next one if it has
//! already passed. If that occurrence is within the window (inclusive, with
//! today counting as zero days ahead) the greeting date is the occurrence,
//! rolled forward to Monday when it lands on a weekend.

use crate::domain::Birthday;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Default look-ahead, in days, for the upcoming-birthday report.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// The date `birthday` is celebrated in `year`.
///
/// A 29 February birthday is celebrated on 1 March in non-leap years.
/// Returns `None` only when `year` is outside the supported calendar range.
pub fn anniversary_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// The first celebration of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let candidate = anniversary_in(birthday, today.year())?;
    if candidate < today {
        return anniversary_in(birthday, today.year() + 1);
    }
    Some(candidate)
}

/// Move Saturday and Sunday to the following Monday; weekdays are unchanged.
pub fn roll_forward_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

/// Greeting date for `birthday` if its next occurrence is at most
/// `window_days` days after `today`.
///
/// The window is checked against the occurrence itself, before any weekend
/// roll-forward.
pub fn greeting_date(birthday: &Birthday, today: NaiveDate, window_days: u32) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today)?;
    let days_ahead = (occurrence - today).num_days();
    if days_ahead > i64::from(window_days) {
        return None;
    }
    Some(roll_forward_weekend(occurrence))
}
