//! Line cursor for the block renderer.
//!
//! The block renderer is line-oriented but needs a little look-ahead:
//! a fence peeks at the next line for a filename caption, a table header
//! peeks for its separator row, and blockquotes consume a whole run of
//! `> ` lines at once. The cursor keeps that bookkeeping in one place.

/// A cursor over the lines of one chapter.
///
/// Lines are split on `\n`; a trailing `\r` is dropped so CRLF sources
/// classify the same way as LF sources.
///
/// # Example
/// ```
/// use ferrobook::cursor::LineCursor;
///
/// let mut cursor = LineCursor::new("# Title\n> a\n> b\nbody");
/// assert_eq!(cursor.next_line(), Some("# Title"));
/// assert_eq!(cursor.take_while(|l| l.starts_with("> ")), vec!["> a", "> b"]);
/// assert_eq!(cursor.peek(), Some("body"));
/// ```
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor positioned at the first line of `input`.
    pub fn new(input: &'a str) -> Self {
        let lines = input
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines, pos: 0 }
    }

    /// Current line without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Consume the current line.
    #[inline]
    pub fn bump(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// Consume and return the current line.
    #[inline]
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consume lines while `pred` holds, returning them in order.
    ///
    /// Stops at the first line that fails the predicate and leaves it
    /// unconsumed.
    pub fn take_while<P>(&mut self, mut pred: P) -> Vec<&'a str>
    where
        P: FnMut(&str) -> bool,
    {
        let start = self.pos;
        while let Some(line) = self.peek() {
            if !pred(line) {
                break;
            }
            self.pos += 1;
        }
        self.lines[start..self.pos].to_vec()
    }
}
