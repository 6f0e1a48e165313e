//! Line sources feeding the catalog parser.

use std::fs::File;
use std::io::{
    self,
    BufRead,
    BufReader,
};
use std::path::Path;

/// A pull-based supplier of raw, untrimmed lines.
///
/// Consumers call [`LineSource::close`] once they are done, whatever the outcome.
pub trait LineSource {
    /// Returns true once every line has been handed out.
    fn ended(&mut self) -> bool;

    /// Returns the next line without its line terminator.
    ///
    /// # Errors
    /// - Reading the underlying input failed
    /// - The source is already exhausted (`UnexpectedEof`)
    fn next_line(&mut self) -> io::Result<String>;

    /// Releases the underlying input.
    fn close(&mut self);
}

/// Error returned when a line is requested from an exhausted source.
fn exhausted() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "line source is exhausted")
}

/// Lines of an in-memory text.
#[derive(Debug, Clone)]
pub struct StringSource<'a> {
    lines: std::str::Lines<'a>,
    peeked: Option<&'a str>,
}

impl<'a> StringSource<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut lines = text.lines();
        let peeked = lines.next();
        Self { lines, peeked }
    }
}

impl LineSource for StringSource<'_> {
    fn ended(&mut self) -> bool {
        self.peeked.is_none()
    }

    fn next_line(&mut self) -> io::Result<String> {
        let line = self.peeked.take().ok_or_else(exhausted)?;
        self.peeked = self.lines.next();
        Ok(line.to_string())
    }

    fn close(&mut self) {
        self.peeked = None;
    }
}

/// Streams the lines of a file, keeping one line of lookahead.
#[derive(Debug)]
pub struct FileSource {
    /// `None` once closed
    reader: Option<BufReader<File>>,
    /// Next line to hand out; `None` at end of input
    pending: Option<io::Result<String>>,
}

impl FileSource {
    /// Opens a file for line-by-line reading.
    ///
    /// # Errors
    /// - The file cannot be opened
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Opening catalog file");
        let file = File::open(path)?;
        let mut source = Self { reader: Some(BufReader::new(file)), pending: None };
        source.pending = source.read_ahead();
        Ok(source)
    }

    fn read_ahead(&mut self) -> Option<io::Result<String>> {
        let reader = self.reader.as_mut()?;
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl LineSource for FileSource {
    fn ended(&mut self) -> bool {
        self.pending.is_none()
    }

    fn next_line(&mut self) -> io::Result<String> {
        let line = self.pending.take().ok_or_else(exhausted)?;
        self.pending = match line {
            Ok(_) => self.read_ahead(),
            // A failed read stops the source rather than retrying.
            Err(_) => None,
        };
        line
    }

    fn close(&mut self) {
        self.reader = None;
        self.pending = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn drain(source: &mut impl LineSource) -> Vec<String> {
        let mut lines = Vec::new();
        while !source.ended() {
            lines.push(source.next_line().unwrap());
        }
        lines
    }

    #[rstest]
    #[case("", &[])]
    #[case("one", &["one"])]
    #[case("one\ntwo\n", &["one", "two"])]
    #[case("one\r\n\r\n  two  ", &["one", "", "  two  "])]
    fn test_string_source_lines(#[case] text: &str, #[case] expected: &[&str]) {
        let mut source = StringSource::new(text);

        assert_eq!(drain(&mut source), expected);
    }

    #[rstest]
    fn test_string_source_exhausted() {
        let mut source = StringSource::new("only");
        source.next_line().unwrap();

        let result = source.next_line();

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[googletest::test]
    fn test_string_source_close_ends() {
        let mut source = StringSource::new("a\nb");
        source.close();

        expect_that!(source.ended(), eq(true));
    }

    #[googletest::test]
    fn test_file_source_streams_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("de.po");
        fs::write(&path, "msgid \"a\"\r\nmsgstr \"b\"\n\nlast").unwrap();

        let mut source = FileSource::open(&path).unwrap();
        let lines = drain(&mut source);
        source.close();

        expect_that!(lines, elements_are![eq("msgid \"a\""), eq("msgstr \"b\""), eq(""), eq("last")]);
        expect_that!(source.ended(), eq(true));
    }

    #[rstest]
    fn test_file_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSource::open(temp_dir.path().join("missing.po"));

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
