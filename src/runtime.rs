use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Blocking source of learner input, one line at a time.
pub trait LineSource {
    /// Returns `Ok(None)` once input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Production source reading from any buffered reader (stdin in the binary).
pub struct ReaderSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(Some(line))
            }
        }
    }
}

/// Test source replaying a fixed script.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_source_strips_line_endings() {
        let mut src = ReaderSource::new("first\r\nsecond\nlast".as_bytes());
        assert_eq!(src.next_line().unwrap().as_deref(), Some("first"));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("second"));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn reader_source_keeps_blank_lines() {
        let mut src = ReaderSource::new("\n\nx\n".as_bytes());
        assert_eq!(src.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(src.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("x"));
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let mut src = ScriptedSource::new(["a", "b"]);
        assert_eq!(src.remaining(), 2);
        assert_eq!(src.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(src.next_line().unwrap(), None);
    }
}
