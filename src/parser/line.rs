//! Line classification and the per-kind handlers that mutate the accumulator.

use super::accumulator::{
    EntryAccumulator,
    Property,
};
use super::error::ParseError;

/// Kind of a trimmed line, decided by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#`
    Comment,
    /// `m`
    Property,
    /// `"`
    Continuation,
    /// Anything else; ignored. Empty lines never reach dispatch.
    Other,
}

impl LineKind {
    #[must_use]
    pub fn classify(line: &str) -> Self {
        match line.chars().next() {
            Some('#') => Self::Comment,
            Some('m') => Self::Property,
            Some('"') => Self::Continuation,
            Some(_) | None => Self::Other,
        }
    }
}

/// Characters stripped from both ends of every line. Non-ASCII whitespace such as
/// U+00A0 is content.
const TRIMMED: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trims [`TRIMMED`] characters from both ends of a line.
#[must_use]
pub(super) fn trim_line(text: &str) -> &str {
    text.trim_matches(TRIMMED)
}

/// Separator between a key and its value, or after a flag comma.
const fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Removes one leading and one trailing `"` if present. No unescaping.
#[must_use]
pub(super) fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

/// Splits a property line into its key and the remainder after the first whitespace run.
pub(super) fn split_property(line: &str) -> (&str, &str) {
    line.split_once(is_separator)
        .map_or((line, ""), |(key, rest)| (key, rest.trim_start_matches(is_separator)))
}

/// Handles `#`, `#,` and `#.` lines.
pub(super) fn handle_comment(line: &str, entry: &mut EntryAccumulator) {
    if let Some(rest) = line.strip_prefix("#,") {
        let flags = trim_line(rest)
            .split(',')
            .map(|flag| flag.trim_start_matches(is_separator))
            .map(String::from)
            .collect();
        entry.set_flags(flags);
    } else if let Some(rest) = line.strip_prefix("#.") {
        entry.push_extracted_comment(trim_line(rest).to_string());
    } else {
        let rest = line.strip_prefix('#').unwrap_or(line);
        entry.push_translator_comment(trim_line(rest).to_string());
    }
}

/// Handles a `msg*` line and returns the property it declared.
pub(super) fn handle_property(
    line: &str,
    line_number: usize,
    entry: &mut EntryAccumulator,
) -> Result<Property, ParseError> {
    let (key, value) = split_property(line);
    let property = Property::from_key(key).ok_or_else(|| ParseError::UnrecognizedProperty {
        key: key.to_string(),
        line: line_number,
    })?;

    entry.append(property, strip_quotes(value));
    Ok(property)
}

/// Handles a bare quoted line continuing the active property.
pub(super) fn handle_continuation(
    line: &str,
    line_number: usize,
    active: Option<Property>,
    entry: &mut EntryAccumulator,
) -> Result<(), ParseError> {
    let property = active.ok_or(ParseError::DanglingContinuation { line: line_number })?;
    entry.append(property, strip_quotes(line));
    Ok(())
}
