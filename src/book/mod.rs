//! The address book store and the upcoming-birthday rule.

mod address_book;
pub mod birthdays;

pub use address_book::{AddressBook, Upsert};
pub use birthdays::DEFAULT_WINDOW_DAYS;
