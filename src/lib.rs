//! Contact Book - a command-line address book with birthday reminders.
//!
//! The library holds names, phone numbers and birthdays, persists them as a
//! JSON snapshot, and reports whose birthdays fall within an upcoming window,
//! moving weekend greetings to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and birthday report rows
//! - **book**: The name-keyed address book and the birthday scheduling rule
//! - **repositories**: Snapshot persistence behind a repository trait
//! - **cli**: Command parsing and the interactive session
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use book::{AddressBook, Upsert, DEFAULT_WINDOW_DAYS};
pub use cli::{Command, CommandError, Outcome, Session};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError, StorageResult};
pub use models::{Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
