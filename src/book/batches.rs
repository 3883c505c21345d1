//! Chunked iteration over an address book.

use crate::models::Record;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// Lazy sequence of record batches produced by
/// [`AddressBook::batches`](super::AddressBook::batches).
///
/// Each batch holds up to the requested number of consecutive records; only
/// the final batch may be shorter. The sequence borrows the book, so the
/// order it walks cannot change underneath it. Once exhausted it stays
/// exhausted; ask the book for a new one to iterate again.
#[derive(Debug, Clone)]
pub struct RecordBatches<'a> {
    inner: slice::Chunks<'a, Record>,
}

impl<'a> RecordBatches<'a> {
    pub(super) fn new(records: &'a [Record], size: usize) -> Self {
        Self {
            inner: records.chunks(size),
        }
    }
}

impl<'a> Iterator for RecordBatches<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RecordBatches<'_> {}

impl FusedIterator for RecordBatches<'_> {}

/// One batch of consecutive records.
///
/// Displays as one `name: record` line per record.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a>(&'a [Record]);

impl<'a> Batch<'a> {
    /// The records in this batch, in book order.
    pub fn records(&self) -> &'a [Record] {
        self.0
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Batches handed out by [`RecordBatches`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the records in this batch.
    pub fn iter(&self) -> slice::Iter<'a, Record> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for Batch<'a> {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Batch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.0 {
            writeln!(f, "{}: {}", record.name(), record)?;
        }
        Ok(())
    }
}
