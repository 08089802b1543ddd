//! Data models for the contact book.
//!
//! This module contains the contact record aggregate and the rows produced
//! by the upcoming-birthday report.

pub mod record;
pub mod upcoming;

pub use record::Record;
pub use upcoming::UpcomingBirthday;
