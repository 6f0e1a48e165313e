//! Inputs to the parser.

pub mod source;

pub use source::{
    FileSource,
    LineSource,
    StringSource,
};
