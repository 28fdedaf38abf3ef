//! Scan cursor over an in-memory source buffer.

/// Mutable scan state: byte offset plus 1-based line/column.
///
/// Peeking past the end of the buffer returns a `'\0'` sentinel so scanners
/// can look ahead without bounds checks.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    offset: usize,
    line: usize,
    column: usize,
}

pub const EOF_CHAR: char = '\0';

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.offset.min(self.source.len())..]
    }

    /// Current character, or `EOF_CHAR` at the end of input.
    pub fn peek(&self) -> char {
        self.remaining().chars().next().unwrap_or(EOF_CHAR)
    }

    /// Character `k` positions ahead, or `EOF_CHAR` past the end.
    pub fn peek_at(&self, k: usize) -> char {
        self.remaining().chars().nth(k).unwrap_or(EOF_CHAR)
    }

    /// Consume one character and return it.
    ///
    /// A `'\r'` counts as a line boundary; an immediately following `'\n'`
    /// is absorbed into the same boundary, so CRLF advances the line once.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.remaining().chars().next()?;
        self.offset += ch.len_utf8();
        match ch {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\r' => {
                if self.peek() == '\n' {
                    self.offset += 1;
                }
                self.line += 1;
                self.column = 1;
            }
            _ => {
                self.column += 1;
            }
        }
        Some(ch)
    }

    /// Source text between `start` and the current offset.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start.min(self.source.len())..self.offset.min(self.source.len())]
    }

    /// Reposition the cursor. Used by snapshot restore only; callers are
    /// expected to pass coordinates captured from this cursor.
    pub fn set_position(&mut self, offset: usize, line: usize, column: usize) {
        self.offset = offset.min(self.source.len());
        self.line = line;
        self.column = column;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_and_advance_track_columns() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), 'a');
        assert_eq!(cursor.peek_at(1), 'b');
        assert_eq!(cursor.peek_at(2), EOF_CHAR);
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.advance(), Some('b'));
        assert!(cursor.is_eof());
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn newline_resets_column() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
        cursor.advance();
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn crlf_collapses_to_one_line_boundary() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.peek(), 'b');
    }

    #[test]
    fn lone_cr_is_a_line_boundary() {
        let mut cursor = Cursor::new("a\rb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.peek(), 'b');
    }
}
