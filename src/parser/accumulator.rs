//! In-progress entry state built line by line.

use std::collections::BTreeMap;
use std::fmt;

/// A property that can be declared by a `msg*` line and extended by continuation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Msgctxt,
    Msgid,
    MsgidPlural,
    Msgstr,
    /// `msgstr[N]`
    MsgstrPlural(usize),
}

impl Property {
    /// Parses a property key such as `msgid` or `msgstr[2]`.
    ///
    /// Returns `None` for anything else, including `msgstr[]` without a numeric index.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "msgctxt" => Some(Self::Msgctxt),
            "msgid" => Some(Self::Msgid),
            "msgid_plural" => Some(Self::MsgidPlural),
            "msgstr" => Some(Self::Msgstr),
            _ => key
                .strip_prefix("msgstr[")
                .and_then(|rest| rest.strip_suffix(']'))
                .and_then(|index| index.parse().ok())
                .map(Self::MsgstrPlural),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msgctxt => f.write_str("msgctxt"),
            Self::Msgid => f.write_str("msgid"),
            Self::MsgidPlural => f.write_str("msgid_plural"),
            Self::Msgstr => f.write_str("msgstr"),
            Self::MsgstrPlural(index) => write!(f, "msgstr[{index}]"),
        }
    }
}

/// Accumulated fields of the entry currently being parsed.
///
/// A field is `None` until a line declares it; once declared it is only ever appended to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryAccumulator {
    pub(crate) msgctxt: Option<String>,
    pub(crate) msgid: Option<String>,
    pub(crate) msgid_plural: Option<String>,
    pub(crate) msgstr: Option<String>,
    pub(crate) msgstr_plurals: BTreeMap<usize, String>,
    /// Last `#,` line wins.
    pub(crate) flags: Option<Vec<String>>,
    pub(crate) tcomment: Vec<String>,
    pub(crate) ccomment: Vec<String>,
}

impl EntryAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no line has contributed to this entry yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.msgctxt.is_none()
            && self.msgid.is_none()
            && self.msgid_plural.is_none()
            && self.msgstr.is_none()
            && self.msgstr_plurals.is_empty()
            && self.flags.is_none()
            && self.tcomment.is_empty()
            && self.ccomment.is_empty()
    }

    /// Returns the accumulated value of a property, if it has been declared.
    #[must_use]
    pub fn get(&self, property: Property) -> Option<&str> {
        match property {
            Property::Msgctxt => self.msgctxt.as_deref(),
            Property::Msgid => self.msgid.as_deref(),
            Property::MsgidPlural => self.msgid_plural.as_deref(),
            Property::Msgstr => self.msgstr.as_deref(),
            Property::MsgstrPlural(index) => self.msgstr_plurals.get(&index).map(String::as_str),
        }
    }

    #[must_use]
    pub fn has_msgid(&self) -> bool {
        self.msgid.is_some()
    }

    /// Appends text to a property, declaring it as empty first if needed.
    pub fn append(&mut self, property: Property, text: &str) {
        let slot = match property {
            Property::Msgctxt => self.msgctxt.get_or_insert_with(String::new),
            Property::Msgid => self.msgid.get_or_insert_with(String::new),
            Property::MsgidPlural => self.msgid_plural.get_or_insert_with(String::new),
            Property::Msgstr => self.msgstr.get_or_insert_with(String::new),
            Property::MsgstrPlural(index) => self.msgstr_plurals.entry(index).or_default(),
        };
        slot.push_str(text);
    }

    pub fn set_flags(&mut self, flags: Vec<String>) {
        self.flags = Some(flags);
    }

    pub fn push_translator_comment(&mut self, comment: String) {
        self.tcomment.push(comment);
    }

    pub fn push_extracted_comment(&mut self, comment: String) {
        self.ccomment.push(comment);
    }

    /// Hands the accumulated entry out and leaves an empty accumulator behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("msgctxt", Some(Property::Msgctxt))]
    #[case("msgid", Some(Property::Msgid))]
    #[case("msgid_plural", Some(Property::MsgidPlural))]
    #[case("msgstr", Some(Property::Msgstr))]
    #[case("msgstr[0]", Some(Property::MsgstrPlural(0)))]
    #[case("msgstr[12]", Some(Property::MsgstrPlural(12)))]
    #[case("msgstr[]", None)]
    #[case("msgstr[one]", None)]
    #[case("msgstr[1", None)]
    #[case("msgfoo", None)]
    #[case("msgid_plurals", None)]
    fn test_property_from_key(#[case] key: &str, #[case] expected: Option<Property>) {
        assert_that!(Property::from_key(key), eq(expected));
    }

    #[rstest]
    #[case(Property::Msgid, "msgid")]
    #[case(Property::MsgidPlural, "msgid_plural")]
    #[case(Property::MsgstrPlural(3), "msgstr[3]")]
    fn test_property_display(#[case] property: Property, #[case] expected: &str) {
        assert_that!(property.to_string(), eq(expected));
    }

    #[googletest::test]
    fn test_append_concatenates_without_separator() {
        let mut entry = EntryAccumulator::new();
        entry.append(Property::Msgid, "");
        entry.append(Property::Msgid, "Hello, ");
        entry.append(Property::Msgid, "world!");

        expect_that!(entry.get(Property::Msgid), some(eq("Hello, world!")));
        expect_that!(entry.get(Property::Msgstr), none());
    }

    #[googletest::test]
    fn test_append_plural_keeps_forms_apart() {
        let mut entry = EntryAccumulator::new();
        entry.append(Property::MsgstrPlural(1), "many");
        entry.append(Property::MsgstrPlural(0), "one");

        expect_that!(entry.get(Property::MsgstrPlural(0)), some(eq("one")));
        expect_that!(entry.get(Property::MsgstrPlural(1)), some(eq("many")));
        expect_that!(entry.get(Property::MsgstrPlural(2)), none());
    }

    #[googletest::test]
    fn test_is_empty_tracks_declared_fields() {
        let mut entry = EntryAccumulator::new();
        expect_that!(entry.is_empty(), eq(true));

        entry.append(Property::Msgid, "");
        expect_that!(entry.is_empty(), eq(false));
        expect_that!(entry.has_msgid(), eq(true));
    }

    #[googletest::test]
    fn test_empty_flags_still_count_as_content() {
        let mut entry = EntryAccumulator::new();
        entry.set_flags(Vec::new());

        expect_that!(entry.is_empty(), eq(false));
    }

    #[googletest::test]
    fn test_take_resets() {
        let mut entry = EntryAccumulator::new();
        entry.push_translator_comment("note".to_string());

        let taken = entry.take();

        expect_that!(taken.tcomment, elements_are![eq("note")]);
        expect_that!(entry.is_empty(), eq(true));
    }
}
