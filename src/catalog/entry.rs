//! A completed translation entry.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::parser::EntryAccumulator;

/// One translatable unit of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// `msgctxt`
    context: Option<String>,
    /// Empty when the entry had no `msgid` line.
    msgid: String,
    msgid_plural: Option<String>,
    msgstr: Option<String>,
    /// `msgstr[N]` keyed by plural index
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    msgstr_plurals: BTreeMap<usize, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    flags: Vec<String>,
    /// `# ...` lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    translator_comments: Vec<String>,
    /// `#. ...` lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extracted_comments: Vec<String>,
}

impl Entry {
    /// Creates a singular entry.
    #[must_use]
    pub fn new(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        Self { msgid: msgid.into(), msgstr: Some(msgstr.into()), ..Self::default() }
    }

    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    #[must_use]
    pub fn msgid(&self) -> &str {
        &self.msgid
    }

    #[must_use]
    pub fn msgid_plural(&self) -> Option<&str> {
        self.msgid_plural.as_deref()
    }

    #[must_use]
    pub fn msgstr(&self) -> Option<&str> {
        self.msgstr.as_deref()
    }

    #[must_use]
    pub const fn msgstr_plurals(&self) -> &BTreeMap<usize, String> {
        &self.msgstr_plurals
    }

    /// Returns the translation for a plural index.
    ///
    /// Index 0 falls back to the singular `msgstr` for entries without plural forms.
    #[must_use]
    pub fn translation(&self, index: usize) -> Option<&str> {
        self.msgstr_plurals
            .get(&index)
            .map(String::as_str)
            .or_else(|| if index == 0 { self.msgstr() } else { None })
    }

    #[must_use]
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    #[must_use]
    pub fn translator_comments(&self) -> &[String] {
        &self.translator_comments
    }

    #[must_use]
    pub fn extracted_comments(&self) -> &[String] {
        &self.extracted_comments
    }

    #[must_use]
    pub const fn is_plural(&self) -> bool {
        self.msgid_plural.is_some()
    }

    #[must_use]
    pub fn is_fuzzy(&self) -> bool {
        self.flags.iter().any(|flag| flag == "fuzzy")
    }
}

impl From<EntryAccumulator> for Entry {
    fn from(entry: EntryAccumulator) -> Self {
        Self {
            context: entry.msgctxt,
            msgid: entry.msgid.unwrap_or_default(),
            msgid_plural: entry.msgid_plural,
            msgstr: entry.msgstr,
            msgstr_plurals: entry.msgstr_plurals,
            flags: entry.flags.unwrap_or_default(),
            translator_comments: entry.tcomment,
            extracted_comments: entry.ccomment,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::parser::Property;

    #[googletest::test]
    fn test_from_accumulator_maps_fields() {
        let mut accumulator = EntryAccumulator::new();
        accumulator.append(Property::Msgctxt, "menu");
        accumulator.append(Property::Msgid, "item");
        accumulator.append(Property::MsgidPlural, "items");
        accumulator.append(Property::MsgstrPlural(0), "Eintrag");
        accumulator.append(Property::MsgstrPlural(1), "Einträge");
        accumulator.set_flags(vec!["fuzzy".to_string()]);
        accumulator.push_translator_comment("check".to_string());
        accumulator.push_extracted_comment("from menu.c".to_string());

        let entry = Entry::from(accumulator);

        expect_that!(entry.context(), some(eq("menu")));
        expect_that!(entry.msgid(), eq("item"));
        expect_that!(entry.msgid_plural(), some(eq("items")));
        expect_that!(entry.msgstr(), none());
        expect_that!(entry.translation(0), some(eq("Eintrag")));
        expect_that!(entry.translation(1), some(eq("Einträge")));
        expect_that!(entry.translation(2), none());
        expect_that!(entry.is_plural(), eq(true));
        expect_that!(entry.is_fuzzy(), eq(true));
        expect_that!(entry.translator_comments(), elements_are![eq("check")]);
        expect_that!(entry.extracted_comments(), elements_are![eq("from menu.c")]);
    }

    #[googletest::test]
    fn test_missing_msgid_becomes_empty() {
        let mut accumulator = EntryAccumulator::new();
        accumulator.push_translator_comment("orphan comment".to_string());

        let entry = Entry::from(accumulator);

        expect_that!(entry.msgid(), eq(""));
        expect_that!(entry.flags(), empty());
        expect_that!(entry.is_fuzzy(), eq(false));
    }

    #[googletest::test]
    fn test_singular_translation_index_zero() {
        let entry = Entry::new("Hello", "Hallo");

        expect_that!(entry.translation(0), some(eq("Hallo")));
        expect_that!(entry.translation(1), none());
        expect_that!(entry.is_plural(), eq(false));
    }

    #[test]
    fn test_serializes_camel_case_and_skips_empty() {
        let entry = Entry::new("Hello", "Hallo");

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "context": null,
                "msgid": "Hello",
                "msgidPlural": null,
                "msgstr": "Hallo",
            })
        );
    }
}
