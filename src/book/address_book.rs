//! The address book: an insertion-ordered mapping from name to record.

use super::batches::RecordBatches;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use serde::{Deserialize, Serialize, Serializer};
use std::slice;

/// A collection of records keyed by name.
///
/// Records keep the order in which their names were first added. Adding a
/// record whose name is already present replaces the stored record in place
/// (last write wins), so there is never more than one record per name.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John", None).unwrap());
/// book.add_record(Record::new("Jane", None).unwrap());
///
/// book.delete("Jane");
/// assert!(book.find("Jane").is_none());
/// assert!(book.find("John").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(name = %record.name(), "Overwriting record");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                tracing::debug!(name = %record.name(), "Adding record");
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name().as_str() == name)
    }

    /// Look up a record by name for in-place edits.
    ///
    /// Record names cannot change, so edits through this reference keep the
    /// book's keys consistent.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.name().as_str() == name)
    }

    /// Remove the record with this name. Does nothing if there is none.
    ///
    /// Returns the removed record.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        match self.position(name) {
            Some(index) => {
                tracing::debug!(name, "Deleting record");
                Some(self.records.remove(index))
            }
            None => {
                tracing::trace!(name, "Delete of unknown record ignored");
                None
            }
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterate over names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| record.name().as_str())
    }

    /// Split the book into batches of at most `size` records.
    ///
    /// Batches follow the book's current order. Each call returns a fresh
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidBatchSize` if `size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::{AddressBook, Record};
    ///
    /// let mut book = AddressBook::new();
    /// for name in ["Ann", "Bob", "Cid"] {
    ///     book.add_record(Record::new(name, None).unwrap());
    /// }
    ///
    /// let sizes: Vec<usize> = book.batches(2).unwrap().map(|b| b.len()).collect();
    /// assert_eq!(sizes, vec![2, 1]);
    /// ```
    pub fn batches(&self, size: usize) -> BookResult<RecordBatches<'_>> {
        if size == 0 {
            return Err(BookError::InvalidBatchSize);
        }
        Ok(RecordBatches::new(&self.records, size))
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        book.extend(iter);
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// Serde support - serialize as a plain list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}
