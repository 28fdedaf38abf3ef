//! Lexer core: mode dispatch, lookahead buffering, snapshot/restore.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::diagnostics::{LexError, LexErrorKind};
use crate::mode::{LexMode, ModeStack};
use crate::source::Cursor;
use crate::span::Span;
use crate::token::{Channel, Token, TokenFlags, TokenKind};

mod comment;
mod identifier;
mod number;
mod operators;
mod string;
mod text_block;

/// Distinguishes lexer instances so a snapshot cannot be restored onto a
/// lexer it was not taken from.
static NEXT_LEXER_ID: AtomicU64 = AtomicU64::new(0);

/// Position captured at the start of a token.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Immutable capture of lexer state for exact rollback.
///
/// Restoring must leave the lexer observably identical to the moment the
/// snapshot was taken; that is the contract backtracking parsers rely on.
#[derive(Debug, Clone)]
pub struct Snapshot {
    lexer_id: u64,
    offset: usize,
    line: usize,
    column: usize,
    modes: Vec<LexMode>,
    diagnostics: Vec<LexError>,
    lookahead: VecDeque<Token>,
}

impl Snapshot {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn mode(&self) -> LexMode {
        *self.modes.last().unwrap_or(&LexMode::Default)
    }
}

/// Streaming tokenizer over a single in-memory source buffer.
///
/// One instance per buffer; all operations are synchronous mutations of
/// in-process state, owned by a single logical caller.
#[derive(Debug)]
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    modes: ModeStack,
    diagnostics: Vec<LexError>,
    lookahead: VecDeque<Token>,
    source_id: Option<String>,
    instance_id: u64,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            modes: ModeStack::new(),
            diagnostics: Vec::new(),
            lookahead: VecDeque::new(),
            source_id: None,
            instance_id: NEXT_LEXER_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Attach a caller-supplied identifier (typically a file path). It is
    /// echoed back for diagnostics and has no other behavior.
    pub fn with_source_id(source: &'src str, source_id: impl Into<String>) -> Self {
        let mut lexer = Self::new(source);
        lexer.source_id = Some(source_id.into());
        lexer
    }

    /// Consume and return the next token, trivia included.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.lookahead.pop_front() {
            return token;
        }
        self.produce_next()
    }

    /// Return the `k`-th upcoming token (`k >= 1`) without consuming any.
    ///
    /// # Panics
    ///
    /// Panics when `k == 0`; that is a caller bug, not a lexical error.
    pub fn lookahead(&mut self, k: usize) -> Token {
        assert!(k >= 1, "lookahead distance must be at least 1");
        while self.lookahead.len() < k {
            let token = self.produce_next();
            self.lookahead.push_back(token);
        }
        self.lookahead[k - 1].clone()
    }

    /// Drain the whole buffer into a vector, EOF token included.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    pub fn total_length(&self) -> Option<usize> {
        Some(self.cursor.len())
    }

    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    pub fn mode(&self) -> LexMode {
        self.modes.current()
    }

    /// Force a mode transition. Exposed for callers that resume
    /// interpolation-like constructs; returns the previously active mode.
    pub fn push_mode(&mut self, mode: LexMode) -> LexMode {
        self.modes.push(mode)
    }

    pub fn pop_mode(&mut self) -> LexMode {
        self.modes.pop()
    }

    /// All lexical errors discovered so far, in discovery order.
    pub fn diagnostics(&self) -> &[LexError] {
        &self.diagnostics
    }

    /// Capture the full observable state: cursor, mode stack, diagnostics
    /// and any buffered lookahead tokens.
    pub fn snapshot(&self) -> Snapshot {
        debug!(offset = self.cursor.offset(), "lexer snapshot taken");
        Snapshot {
            lexer_id: self.instance_id,
            offset: self.cursor.offset(),
            line: self.cursor.line(),
            column: self.cursor.column(),
            modes: self.modes.to_vec(),
            diagnostics: self.diagnostics.clone(),
            lookahead: self.lookahead.clone(),
        }
    }

    /// Roll the lexer back to a previously captured state. Diagnostics
    /// discovered after the snapshot point are discarded.
    ///
    /// # Panics
    ///
    /// Panics when the snapshot was taken from a different lexer instance.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        assert_eq!(
            snapshot.lexer_id, self.instance_id,
            "snapshot belongs to a different lexer instance"
        );
        debug!(offset = snapshot.offset, "lexer state restored");
        self.cursor
            .set_position(snapshot.offset, snapshot.line, snapshot.column);
        self.modes.replace(snapshot.modes.clone());
        self.diagnostics = snapshot.diagnostics.clone();
        self.lookahead = snapshot.lookahead.clone();
    }

    /// Produce one token from the underlying scanner, bypassing the
    /// lookahead buffer. Trivia first, then mode dispatch; every path
    /// consumes at least one character, so scanning always makes progress.
    fn produce_next(&mut self) -> Token {
        if self.cursor.is_eof() {
            return self.eof_token();
        }
        if let Some(trivia) = self.scan_whitespace() {
            return trivia;
        }
        let mode = self.modes.current();
        trace!(?mode, offset = self.cursor.offset(), "dispatching scanner");
        match mode {
            LexMode::Default => self.scan_default(),
            LexMode::InString => string::lex_string(self, true),
            LexMode::InTextBlock => text_block::lex_text_block(self, true),
        }
    }

    fn scan_default(&mut self) -> Token {
        let c = self.cursor.peek();
        if c == '"' {
            if self.cursor.peek_at(1) == '"' && self.cursor.peek_at(2) == '"' {
                self.modes.push(LexMode::InTextBlock);
                return text_block::lex_text_block(self, false);
            }
            self.modes.push(LexMode::InString);
            return string::lex_string(self, false);
        }
        if c == '\'' {
            return string::lex_char(self);
        }
        if c == '/' && matches!(self.cursor.peek_at(1), '/' | '*') {
            return comment::lex_comment(self);
        }
        if c.is_ascii_digit() {
            return number::lex_number(self);
        }
        if identifier::is_identifier_start(c) {
            return identifier::lex_identifier(self);
        }
        operators::lex_operator(self)
    }

    fn scan_whitespace(&mut self) -> Option<Token> {
        let mark = self.mark();
        while !self.cursor.is_eof() && self.cursor.peek().is_whitespace() {
            self.cursor.advance();
        }
        if self.cursor.offset() == mark.offset {
            return None;
        }
        Some(self.finish(
            &mark,
            TokenKind::Whitespace,
            Channel::Trivia,
            TokenFlags::EMPTY,
        ))
    }

    fn eof_token(&self) -> Token {
        let len = self.cursor.len();
        Token::new(
            TokenKind::Eof,
            "",
            Span::empty(len as u32),
            self.cursor.line(),
            self.cursor.column(),
            Channel::Default,
            TokenFlags::EOF,
        )
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark {
            offset: self.cursor.offset(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    pub(crate) fn peek(&self) -> char {
        self.cursor.peek()
    }

    pub(crate) fn peek_at(&self, k: usize) -> char {
        self.cursor.peek_at(k)
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        self.cursor.advance()
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    pub(crate) fn lexeme_from(&self, mark: &Mark) -> &'src str {
        self.cursor.slice_from(mark.offset)
    }

    /// Build a token spanning from `mark` to the current cursor position.
    pub(crate) fn finish(
        &self,
        mark: &Mark,
        kind: TokenKind,
        channel: Channel,
        flags: TokenFlags,
    ) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(mark.offset),
            Span::new(mark.offset as u32, self.cursor.offset() as u32),
            mark.line,
            mark.column,
            channel,
            flags,
        )
    }

    pub(crate) fn record_error(&mut self, kind: LexErrorKind, mark: &Mark) {
        self.diagnostics
            .push(LexError::new(kind, mark.offset, mark.line, mark.column));
    }
}
