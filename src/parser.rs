//! Streaming, line-oriented PO parser.
//!
//! Lines are pulled one at a time from a [`LineSource`], trimmed, and fed through the
//! boundary check before being dispatched on their first character:
//!
//! - `#` comments (`#,` flags, `#.` extracted comments, anything else translator comments)
//! - `m` property lines (`msgctxt`, `msgid`, `msgid_plural`, `msgstr`, `msgstr[N]`)
//! - `"` continuation lines extending the last declared property
//!
//! Every other line is ignored. An entry is closed by a blank line, and the first closed
//! entry that looks like a header is stored as the catalog header instead.

mod accumulator;
mod error;
mod header;
mod line;

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};

pub use accumulator::{
    EntryAccumulator,
    Property,
};
pub use error::ParseError;
pub use header::{
    HEADER_KEYS,
    header_lines,
    is_header,
};
pub use line::LineKind;

use crate::catalog::{
    Catalog,
    Entry,
};
use crate::input::source::{
    FileSource,
    LineSource,
    StringSource,
};

/// Behaviour switches for [`Parser`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserOptions {
    /// Close the current entry when a `msgid` line arrives while it already has one.
    ///
    /// Off by default: only blank lines separate entries, and a repeated `msgid` is
    /// appended to the current one.
    pub close_on_repeated_msgid: bool,
}

/// Parses a catalog from in-memory text.
///
/// # Errors
/// - An unknown `msg*` key or a continuation line without an active property
pub fn parse_string(text: &str) -> Result<Catalog, ParseError> {
    Parser::new(StringSource::new(text)).parse()
}

/// Parses a catalog from a file.
///
/// # Errors
/// - The file cannot be opened or read
/// - An unknown `msg*` key or a continuation line without an active property
pub fn parse_file(path: impl AsRef<Path>) -> Result<Catalog, ParseError> {
    Parser::new(FileSource::open(path)?).parse()
}

/// Drives a [`LineSource`] through the parse loop.
#[derive(Debug)]
pub struct Parser<S> {
    source: S,
    options: ParserOptions,
}

/// State local to one parse run.
#[derive(Debug, Default)]
struct ParseState {
    catalog: Catalog,
    entry: EntryAccumulator,
    /// Last declared property; the only one a continuation line may extend
    property: Option<Property>,
    /// One-based number of the line being processed
    line_number: usize,
    header_found: bool,
}

impl<S: LineSource> Parser<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    #[must_use]
    pub const fn with_options(source: S, options: ParserOptions) -> Self {
        Self { source, options }
    }

    /// Consumes the source and returns the parsed catalog.
    ///
    /// The source is closed exactly once, whether parsing succeeds or not.
    ///
    /// # Errors
    /// - The source fails to produce a line
    /// - An unknown `msg*` key or a continuation line without an active property
    pub fn parse(mut self) -> Result<Catalog, ParseError> {
        let mut state = ParseState::default();
        let result = self.run(&mut state);
        self.source.close();
        result?;

        // An entry not followed by a blank line; never treated as header.
        if !state.entry.is_empty() {
            state.catalog.add_entry(Entry::from(state.entry.take()));
        }

        tracing::debug!(
            entries = state.catalog.len(),
            header = state.header_found,
            lines = state.line_number,
            "Parsed catalog"
        );
        Ok(state.catalog)
    }

    fn run(&mut self, state: &mut ParseState) -> Result<(), ParseError> {
        while !self.source.ended() {
            let raw = self.source.next_line()?;
            state.line_number += 1;
            let line = line::trim_line(&raw);

            if line.is_empty() && state.entry.is_empty() {
                continue;
            }

            if self.should_close_entry(line, &state.entry) {
                state.close_entry();
                if line.is_empty() {
                    continue;
                }
            }

            state.process_line(line)?;
        }
        Ok(())
    }

    fn should_close_entry(&self, line: &str, entry: &EntryAccumulator) -> bool {
        if line.is_empty() {
            return true;
        }
        self.options.close_on_repeated_msgid
            && entry.has_msgid()
            && line::split_property(line).0 == "msgid"
    }
}

impl ParseState {
    /// Hands the accumulated entry to the catalog, as header or as a regular entry.
    fn close_entry(&mut self) {
        let entry = self.entry.take();
        self.property = None;

        if !self.header_found && is_header(&entry) {
            self.header_found = true;
            let lines = entry.msgstr.as_deref().map(header_lines).unwrap_or_default();
            tracing::debug!(line = self.line_number, keys = lines.len(), "Found catalog header");
            self.catalog.add_headers(lines);
        } else {
            tracing::trace!(line = self.line_number, "Closed entry");
            self.catalog.add_entry(Entry::from(entry));
        }
    }

    fn process_line(&mut self, line: &str) -> Result<(), ParseError> {
        match LineKind::classify(line) {
            LineKind::Comment => line::handle_comment(line, &mut self.entry),
            LineKind::Property => {
                let property = line::handle_property(line, self.line_number, &mut self.entry)?;
                self.property = Some(property);
            }
            LineKind::Continuation => line::handle_continuation(
                line,
                self.line_number,
                self.property,
                &mut self.entry,
            )?,
            LineKind::Other => {}
        }
        Ok(())
    }
}
