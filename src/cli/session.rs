//! Caller-owned session state and command execution.

use super::parser::{parse_input, Command};
use super::CommandError;
use crate::book::{AddressBook, Upsert};
use crate::config::Config;
use crate::domain::Name;
use crate::error::{BookError, StorageResult};
use crate::models::Record;
use crate::repositories::BookRepository;
use chrono::{Local, NaiveDate};

const HELP: &str = "Commands:
  hello
  add <name> [phone]
  change <name> [old phone] <new phone>
  phone <name>
  remove-phone <name> <phone>
  delete <name>
  all
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  birthdays [days]
  help
  close | exit";

/// What the REPL should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and read the next line.
    Continue(String),
    /// Print the message and stop.
    Exit(String),
}

impl Outcome {
    /// The text to print for either variant.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(message) | Outcome::Exit(message) => message,
        }
    }
}

/// One interactive session: the address book loaded at start-up, the
/// repository it is saved back to, and the session settings.
pub struct Session<R: BookRepository> {
    book: AddressBook,
    repository: R,
    window_days: u32,
    autosave: bool,
    clock: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<R: BookRepository> Session<R> {
    /// Load the book from `repository` and start a session.
    pub fn open(repository: R, config: &Config) -> StorageResult<Self> {
        let book = repository.load()?;
        tracing::info!("Session started with {} contacts", book.len());
        Ok(Self {
            book,
            repository,
            window_days: config.birthday_window_days,
            autosave: config.autosave,
            clock: local_today,
        })
    }

    /// Replace the source of "today" used by the `birthdays` command.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// The in-memory address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// The repository the book is saved to.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Parse and run one input line, rendering any error as a message.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let command = match parse_input(line) {
            Ok(command) => command,
            Err(e) => return Outcome::Continue(e.to_string()),
        };

        // A failed save keeps the session open so the user can retry.
        if command == Command::Exit {
            return match self.save() {
                Ok(()) => Outcome::Exit("Good bye!".to_string()),
                Err(e) => {
                    tracing::error!("Failed to save address book on exit: {}", e);
                    Outcome::Continue(format!(
                        "Failed to save contacts: {}\nFix the problem and exit again.",
                        e
                    ))
                }
            };
        }

        match self.execute(&command) {
            Ok(message) => {
                if self.autosave && command.is_mutating() {
                    if let Err(e) = self.save() {
                        tracing::error!("Autosave failed: {}", e);
                        return Outcome::Continue(format!(
                            "{}\nWarning: failed to save contacts: {}",
                            message, e
                        ));
                    }
                }
                Outcome::Continue(message)
            }
            Err(e) => {
                tracing::debug!("Command failed: {:?}", e);
                Outcome::Continue(e.to_string())
            }
        }
    }

    /// Run a command against the address book and return its reply.
    ///
    /// `Command::Exit` is a no-op here; saving is done by
    /// [`Session::handle_line`] or [`Session::save`].
    pub fn execute(&mut self, command: &Command) -> Result<String, CommandError> {
        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Help => Ok(HELP.to_string()),
            Command::Exit => Ok("Good bye!".to_string()),
            Command::Add { name, phone } => self.add_contact(name, phone.as_deref()),
            Command::Change { name, old, new } => self.change_contact(name, old.as_deref(), new),
            Command::Phone { name } => self.show_phones(name),
            Command::RemovePhone { name, phone } => {
                let removed = self.book.find_mut(name)?.remove_phone(phone)?;
                Ok(format!("Phone {} removed from {}.", removed, name))
            }
            Command::Delete { name } => {
                self.book.delete(name)?;
                Ok(format!("Contact {} deleted.", name))
            }
            Command::All => Ok(self.show_all()),
            Command::AddBirthday { name, birthday } => {
                self.book.find_mut(name)?.set_birthday(birthday)?;
                Ok("Date of birth added.".to_string())
            }
            Command::ShowBirthday { name } => {
                let record = self.book.find(name)?;
                Ok(match record.birthday() {
                    Some(birthday) => birthday.to_string(),
                    None => format!("No birthday set for {}", name),
                })
            }
            Command::Birthdays { days } => Ok(self.upcoming(days.unwrap_or(self.window_days))),
        }
    }

    /// Write the book to the repository.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book)
    }

    // The record is built and validated in full before it touches the book.
    fn add_contact(&mut self, name: &str, phone: Option<&str>) -> Result<String, CommandError> {
        let mut record = Record::new(Name::new(name).map_err(BookError::from)?);
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }

        Ok(match self.book.add_record(record) {
            Upsert::Created => "Contact added.".to_string(),
            Upsert::Updated => "Contact updated.".to_string(),
        })
    }

    fn change_contact(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: &str,
    ) -> Result<String, CommandError> {
        let record = self.book.find_mut(name)?;
        let old = match (old, record.phones()) {
            (Some(old), _) => old.to_string(),
            (None, []) => return Err(CommandError::NoPhones(name.to_string())),
            (None, [only]) => only.as_str().to_string(),
            (None, _) => return Err(CommandError::AmbiguousPhone(name.to_string())),
        };

        record.edit_phone(&old, new)?;
        Ok(format!(
            "Contact updated successfully. Number {} was replaced with {}.",
            old, new
        ))
    }

    fn show_phones(&self, name: &str) -> Result<String, CommandError> {
        let record = self.book.find(name)?;
        if record.phones().is_empty() {
            return Ok(format!("The contact {} has no phones", name));
        }

        let mut text = format!("The contact {} has following phones:", name);
        for phone in record.phones() {
            text.push('\n');
            text.push_str(phone.as_str());
        }
        Ok(text)
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts".to_string();
        }
        self.book
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn upcoming(&self, window_days: u32) -> String {
        let upcoming = self.book.upcoming_birthdays_on((self.clock)(), window_days);
        if upcoming.is_empty() {
            return "No birthdays".to_string();
        }
        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
