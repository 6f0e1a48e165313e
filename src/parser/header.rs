//! Recognition of the catalog header pseudo-entry.

use super::accumulator::EntryAccumulator;
use super::line::trim_line;

/// Marker separating header lines inside the header `msgstr`.
///
/// This is the literal two-character sequence, not a newline: values are never unescaped.
pub const HEADER_LINE_SEPARATOR: &str = "\\n";

/// Metadata keys that must all appear for an entry to count as the header.
pub const HEADER_KEYS: &[&str] = &[
    "Project-Id-Version:",
    "Report-Msgid-Bugs-To:",
    "POT-Creation-Date:",
    "PO-Revision-Date:",
    "Last-Translator:",
    "Language-Team:",
    "MIME-Version:",
    "Content-Type:",
    "Content-Transfer-Encoding:",
    "Plural-Forms:",
];

/// Returns true if a completed entry is the catalog header.
///
/// The entry needs an empty `msgid`, a `msgstr`, and every key of [`HEADER_KEYS`] in its
/// `msgstr` lines. Whether this is the first such entry is the caller's concern.
#[must_use]
pub fn is_header(entry: &EntryAccumulator) -> bool {
    if entry.is_empty() {
        return false;
    }
    let Some(msgstr) = entry.msgstr.as_deref() else {
        return false;
    };
    if entry.msgid.as_deref() != Some("") {
        return false;
    }

    let mut missing: Vec<&str> = HEADER_KEYS.to_vec();
    for line in msgstr.split(HEADER_LINE_SEPARATOR) {
        let token = line.split(':').next().unwrap_or(line);
        let key = format!("{}:", trim_line(trim_line(token).trim_matches('"')));
        if let Some(position) = missing.iter().position(|candidate| *candidate == key) {
            missing.swap_remove(position);
        }
    }

    missing.is_empty()
}

/// Splits a header `msgstr` into its non-empty lines.
#[must_use]
pub fn header_lines(msgstr: &str) -> Vec<String> {
    msgstr
        .split(HEADER_LINE_SEPARATOR)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
