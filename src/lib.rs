//! po-catalog
//!
//! Streaming parser for gettext PO translation catalogs.
//!
//! ```
//! let catalog = po_catalog::parse_string("msgid \"Hello\"\nmsgstr \"Hallo\"\n")?;
//! assert_eq!(catalog.entry("Hello", None).and_then(|e| e.msgstr()), Some("Hallo"));
//! # Ok::<(), po_catalog::ParseError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod indexer;
pub mod input;
pub mod parser;

pub use catalog::{
    Catalog,
    Entry,
    Header,
};
pub use parser::{
    ParseError,
    Parser,
    ParserOptions,
    parse_file,
    parse_string,
};
