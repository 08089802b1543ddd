//! Name-keyed store of contact records.

use super::birthdays;
use crate::domain::Name;
use crate::error::{BookError, BookResult};
use crate::models::{Record, UpcomingBirthday};
use chrono::{Local, NaiveDate};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Outcome of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No record had this name; a new one was inserted.
    Created,
    /// A record with this name already existed and was reused.
    Updated,
}

/// The address book: records keyed by contact name.
///
/// Iteration follows insertion order, and deleting a contact keeps the
/// relative order of the others. Every record's name matches its key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<Name, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.records.keys()
    }

    /// Insert `record`, or fold it into the existing record with that name.
    ///
    /// When the name is already present its phone numbers are merged in and
    /// its birthday, if set, replaces the stored one.
    pub fn add_record(&mut self, record: Record) -> Upsert {
        match self.records.entry(record.name().clone()) {
            Entry::Occupied(mut entry) => {
                tracing::debug!("Merging record into existing contact: {}", record.name());
                entry.get_mut().merge(record);
                Upsert::Updated
            }
            Entry::Vacant(entry) => {
                tracing::debug!("Adding contact: {}", record.name());
                entry.insert(record);
                Upsert::Created
            }
        }
    }

    /// Get the record for `name`, creating an empty one if absent.
    pub fn upsert(&mut self, name: Name) -> (Upsert, &mut Record) {
        match self.records.entry(name) {
            Entry::Occupied(entry) => (Upsert::Updated, entry.into_mut()),
            Entry::Vacant(entry) => {
                tracing::debug!("Adding contact: {}", entry.key());
                let record = Record::new(entry.key().clone());
                (Upsert::Created, entry.insert(record))
            }
        }
    }

    /// Look up a contact by name.
    ///
    /// # Errors
    ///
    /// `BookError::ContactNotFound` if no record has this name.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Mutable lookup; see [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove a contact and return its record.
    ///
    /// # Errors
    ///
    /// `BookError::ContactNotFound` if no record has this name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        tracing::debug!("Deleted contact: {}", name);
        Ok(record)
    }

    /// Contacts to congratulate within `window_days` days from the local
    /// calendar date.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_on(Local::now().date_naive(), window_days)
    }

    /// Contacts to congratulate within `window_days` days from `today`.
    ///
    /// Entries come out in store order, not sorted by date. Contacts without
    /// a birthday are never included.
    pub fn upcoming_birthdays_on(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let greeting_date = birthdays::greeting_date(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().clone(),
                    greeting_date,
                })
            })
            .collect();

        tracing::debug!(
            "Upcoming birthdays from {} within {} days: {} of {} contacts",
            today,
            window_days,
            upcoming.len(),
            self.records.len()
        );
        upcoming
    }
}

/// Snapshot layout: a flat list of records in store order.
#[derive(Serialize)]
struct BookSnapshotRef<'a> {
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct BookSnapshot {
    #[serde(default)]
    contacts: Vec<Record>,
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        BookSnapshotRef {
            contacts: self.records.values().collect(),
        }
        .serialize(serializer)
    }
}

// Rebuilt through `add_record` so the key and uniqueness invariants hold
// for whatever is on disk.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let snapshot = BookSnapshot::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in snapshot.contacts {
            book.add_record(record);
        }
        Ok(book)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
