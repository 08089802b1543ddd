//! Interactive command surface.
//!
//! Input lines are parsed into [`Command`]s and run against a [`Session`],
//! which owns the address book for the lifetime of the process. This is the
//! only layer that turns error kinds into user-facing text.

mod parser;
mod session;

pub use parser::{parse_input, Command};
pub use session::{Outcome, Session};

use crate::error::BookError;
use thiserror::Error;

/// Errors reported back to the user for a single input line.
///
/// None of them ends the session, and none leaves the book half-updated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input line
    #[error("Enter a command")]
    Empty,

    /// Keyword not recognised
    #[error("Invalid command")]
    UnknownCommand(String),

    /// Wrong number or shape of arguments
    #[error("Please enter the correct arguments. Usage: {0}")]
    Usage(&'static str),

    /// `change` without an old number on a contact with several numbers
    #[error("The contact {0} has several phones; use: change {0} <old phone> <new phone>")]
    AmbiguousPhone(String),

    /// `change` on a contact without phone numbers
    #[error("No phones to edit for {0}")]
    NoPhones(String),

    /// A record or address book operation failed
    #[error("{}", book_message(.0))]
    Book(#[from] BookError),
}

fn book_message(err: &BookError) -> String {
    match err {
        BookError::InvalidFormat(reason) => {
            format!("Please enter the correct arguments: {}", reason)
        }
        BookError::ContactNotFound(name) => format!("No such contact: {}", name),
        BookError::PhoneNotFound(phone) => format!("Phone {} not found", phone),
    }
}
