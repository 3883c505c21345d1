//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an optional birthday and a list of phones.
///
/// The name is fixed at construction and is the record's key in an
/// [`AddressBook`](crate::book::AddressBook). Phones are kept in the order
/// they were added and never contain the same number twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordData")]
pub struct Record {
    name: Name,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    phones: Vec<Phone>,
}

/// Wire shape of a record before the phone list is deduplicated.
#[derive(Deserialize)]
struct RecordData {
    name: Name,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl From<RecordData> for Record {
    fn from(data: RecordData) -> Self {
        let mut record = Record {
            name: data.name,
            birthday: data.birthday,
            phones: Vec::with_capacity(data.phones.len()),
        };
        for phone in data.phones {
            record.push_unique(phone);
        }
        record
    }
}

impl Record {
    /// Create a record, validating the name and the optional birthday.
    ///
    /// An empty birthday string means "no birthday", the same as `None`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` or `ValidationError::InvalidDate`.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::Record;
    ///
    /// let record = Record::new("John", Some("2000-05-15")).unwrap();
    /// assert_eq!(record.name().as_str(), "John");
    /// assert!(Record::new("John", Some("15/05/2000")).is_err());
    /// ```
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let birthday = match birthday {
            Some(raw) if !raw.is_empty() => Some(Birthday::new(raw)?),
            _ => None,
        };

        Ok(Self {
            name,
            birthday,
            phones: Vec::new(),
        })
    }

    /// The record's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Set or replace the birthday. The old value stays on error.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(birthday) => birthday.set(raw),
            None => {
                self.birthday = Some(Birthday::parse(raw)?);
                Ok(())
            }
        }
    }

    /// Remove the birthday.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Add a phone number unless an equal one is already present.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `number` is not ten digits.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(number)?;
        self.push_unique(phone);
        Ok(())
    }

    fn push_unique(&mut self, phone: Phone) {
        if self.phones.contains(&phone) {
            tracing::trace!(record = %self.name, phone = %phone, "Phone already present");
            return;
        }
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `number`. Does nothing if absent.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(index) = self.position(number) {
            let removed = self.phones.remove(index);
            tracing::debug!(record = %self.name, phone = %removed, "Removed phone");
        }
    }

    /// Replace the phone equal to `old` with `new`.
    ///
    /// If `new` is already on the record, the edited entry is dropped instead
    /// so the list stays free of duplicates.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not on the record.
    /// - `BookError::Validation` if `new` is not a valid phone.
    ///
    /// The phone list is unchanged on either error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        if old != new && self.position(new).is_some() {
            self.phones.remove(index);
        } else {
            self.phones[index].set(new)?;
        }

        tracing::debug!(record = %self.name, old, new, "Edited phone");
        Ok(())
    }

    /// Find the phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| *phone == number)
    }

    fn position(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone == number)
    }

    /// Days from today (local time) until the next birthday.
    ///
    /// Returns `None` when no birthday is set. See
    /// [`Record::days_to_birthday_from`] for the exact rules.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// A birthday that falls on `today` gives 0. Rollover to next year only
    /// happens once this year's date is strictly in the past.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        match &self.birthday {
            Some(birthday) => write!(f, ", birthday: {}", birthday),
            None => f.write_str(", birthday: not set"),
        }
    }
}
