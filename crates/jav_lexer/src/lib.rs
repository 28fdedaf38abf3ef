//! jav_lexer: hand-written, mode-switching lexer for the jav language.
//!
//! Turns raw source text into a stream of typed tokens (trivia included)
//! for a recursive-descent parser and editor tooling. Provides bounded
//! lookahead and snapshot/restore so speculative grammar rules can roll
//! the lexer back exactly.

pub mod diagnostics;
pub mod lexer;
pub mod mode;
pub mod source;
pub mod span;
pub mod token;

pub use diagnostics::{LexError, LexErrorKind};
pub use lexer::{Lexer, Snapshot};
pub use mode::{LexMode, ModeStack};
pub use source::Cursor;
pub use span::Span;
pub use token::{Channel, Radix, Token, TokenFlags, TokenKind};
