//! Lexical diagnostics. Recorded, never thrown: a malformed token keeps
//! the scan moving and the parser decides what to do with it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What went wrong, without position information.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated text block")]
    UnterminatedTextBlock,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("empty character literal")]
    EmptyCharLiteral,
    #[error("line terminator in character literal")]
    NewlineInCharLiteral,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("incomplete escape sequence")]
    IncompleteEscape,
    #[error("incomplete unicode escape")]
    IncompleteUnicodeEscape,
    #[error("malformed numeric literal: {0}")]
    MalformedNumber(String),
}

/// A lexical error with its discovery position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset where the offending construct starts.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl LexError {
    pub fn new(kind: LexErrorKind, offset: usize, line: usize, column: usize) -> Self {
        Self {
            kind,
            offset,
            line,
            column,
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_through_display() {
        let err = LexError::new(LexErrorKind::UnexpectedChar('#'), 4, 1, 5);
        assert_eq!(err.message(), "unexpected character '#'");

        let err = LexError::new(
            LexErrorKind::MalformedNumber("misplaced underscore".into()),
            0,
            1,
            1,
        );
        assert_eq!(
            err.message(),
            "malformed numeric literal: misplaced underscore"
        );
    }
}
