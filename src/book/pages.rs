//! Fixed-size pagination over the address book.

use super::address_book::RecordMap;
use crate::models::Record;
use std::iter::FusedIterator;

/// Iterator over successive pages of records, in insertion order.
///
/// Page `i` holds records `[i * size, i * size + size)`; the last page may be
/// shorter. An empty book, or a page size of zero, yields no pages at all.
/// Once exhausted the iterator stays exhausted; call
/// [`AddressBook::pages`](crate::AddressBook::pages) again to start over.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: &'a RecordMap,
    size: usize,
    cursor: usize,
    done: bool,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: &'a RecordMap, size: usize) -> Self {
        Self {
            records,
            size,
            cursor: 0,
            done: false,
        }
    }

    /// Index of the page the next call to `next` will return.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.size
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let records = self.records;
        let start = self.cursor.saturating_mul(self.size);
        let end = start.saturating_add(self.size).min(records.len());
        let page: Vec<&'a Record> = (start..end)
            .filter_map(|index| records.get_index(index).map(|(_, record)| record))
            .collect();

        if page.is_empty() {
            self.done = true;
            return None;
        }

        self.cursor += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done || self.size == 0 {
            return (0, Some(0));
        }
        let remaining = self
            .records
            .len()
            .saturating_sub(self.cursor.saturating_mul(self.size));
        let pages = remaining.div_ceil(self.size);
        (pages, Some(pages))
    }
}

impl FusedIterator for Pages<'_> {}
