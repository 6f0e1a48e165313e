//! Parsed catalog: the optional header plus entries in input order.

mod entry;
mod header;

use serde::Serialize;

pub use entry::Entry;
pub use header::Header;

/// A parsed PO catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    header: Option<Header>,
    entries: Vec<Entry>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the header lines. Later calls replace earlier ones.
    pub fn add_headers(&mut self, lines: Vec<String>) {
        self.header = Some(Header::new(lines));
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub const fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the first entry with the given `msgid` and `msgctxt`.
    #[must_use]
    pub fn entry(&self, msgid: &str, context: Option<&str>) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.msgid() == msgid && entry.context() == context)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Catalog {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
