//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one immutable name, a set of distinct phone numbers and an
/// optional birthday.
///
/// Phone numbers keep the order they were added in, which is the order they
/// are rendered in. Every mutating method either applies fully or returns an
/// error with the record unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordData")]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

/// Wire form of a record; duplicates are folded away on conversion.
#[derive(Deserialize)]
struct RecordData {
    name: Name,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl From<RecordData> for Record {
    fn from(data: RecordData) -> Self {
        let mut record = Record::new(data.name);
        for phone in data.phones {
            record.insert_phone(phone);
        }
        record.birthday = data.birthday;
        record
    }
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create an empty record, validating the name text.
    pub fn with_name(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(Name::new(name)?))
    }

    /// The contact's name; it never changes after creation.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number.
    ///
    /// Adding a number the record already holds is a no-op, not an error.
    /// Returns `true` when the number was newly added.
    ///
    /// # Errors
    ///
    /// `BookError::InvalidFormat` if `phone` is not 10 digits.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<bool> {
        let phone = PhoneNumber::new(phone)?;
        Ok(self.insert_phone(phone))
    }

    /// Remove a phone number and return it.
    ///
    /// # Errors
    ///
    /// `BookError::InvalidFormat` if `phone` is not 10 digits,
    /// `BookError::PhoneNotFound` if the record does not hold it.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<PhoneNumber> {
        let phone = PhoneNumber::new(phone)?;
        let index = self
            .position(phone.as_str())
            .ok_or_else(|| BookError::PhoneNotFound(phone.into_inner()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// If `new` is already held elsewhere, `old` is simply dropped so that
    /// numbers stay unique.
    ///
    /// # Errors
    ///
    /// `BookError::PhoneNotFound` if the record does not hold `old`,
    /// `BookError::InvalidFormat` if `new` is not 10 digits. The record is
    /// unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        let new = PhoneNumber::new(new)?;

        match self.position(new.as_str()) {
            Some(existing) if existing != index => {
                self.phones.remove(index);
            }
            _ => self.phones[index] = new,
        }
        Ok(())
    }

    /// Look up a phone number held by this record.
    ///
    /// # Errors
    ///
    /// `BookError::PhoneNotFound` if the record does not hold it.
    pub fn find_phone(&self, phone: &str) -> BookResult<&PhoneNumber> {
        self.position(phone)
            .map(|index| &self.phones[index])
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }

    /// Set the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// `BookError::InvalidFormat` if `birthday` is not a real `DD.MM.YYYY` date.
    pub fn set_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Fold another record for the same contact into this one.
    ///
    /// New phone numbers are appended; the incoming birthday, if any, wins.
    pub(crate) fn merge(&mut self, other: Record) {
        debug_assert_eq!(self.name, other.name);
        for phone in other.phones {
            self.insert_phone(phone);
        }
        if other.birthday.is_some() {
            self.birthday = other.birthday;
        }
    }

    fn insert_phone(&mut self, phone: PhoneNumber) -> bool {
        if self.phones.contains(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
