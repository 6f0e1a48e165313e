//! Catalog metadata carried by the header pseudo-entry.

use serde::Serialize;

/// Header lines of a catalog, e.g. `Content-Type: text/plain; charset=UTF-8`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Header {
    lines: Vec<String>,
}

impl Header {
    #[must_use]
    pub const fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterates `(key, value)` pairs of lines in `Key: value` form, values trimmed.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines
            .iter()
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim(), value.trim()))
    }

    /// Returns the value of the first line whose key matches, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    }

    /// `Plural-Forms` value, e.g. `nplurals=2; plural=(n != 1);`
    #[must_use]
    pub fn plural_forms(&self) -> Option<&str> {
        self.get("Plural-Forms")
    }

    /// `Language` value, if the catalog declares one.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.get("Language")
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn header() -> Header {
        Header::new(vec![
            "Project-Id-Version: demo 1.0".to_string(),
            "Content-Type: text/plain; charset=UTF-8".to_string(),
            "Plural-Forms: nplurals=2; plural=(n != 1);".to_string(),
            "Language: de".to_string(),
            "no separator here".to_string(),
        ])
    }

    #[rstest]
    #[case("Content-Type", Some("text/plain; charset=UTF-8"))]
    #[case("content-type", Some("text/plain; charset=UTF-8"))]
    #[case("Project-Id-Version", Some("demo 1.0"))]
    #[case("Last-Translator", None)]
    fn test_get(#[case] key: &str, #[case] expected: Option<&str>) {
        let header = header();

        assert_that!(header.get(key), eq(expected));
    }

    #[googletest::test]
    fn test_well_known_accessors() {
        let header = header();

        expect_that!(header.plural_forms(), some(eq("nplurals=2; plural=(n != 1);")));
        expect_that!(header.language(), some(eq("de")));
    }

    #[googletest::test]
    fn test_entries_skip_lines_without_separator() {
        let header = header();

        expect_that!(header.entries().count(), eq(4));
        expect_that!(header.lines().len(), eq(5));
    }
}
