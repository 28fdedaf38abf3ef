//! Token model: kinds, channels, flags.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Radix of an integer literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

/// Token categories for the jav language.
///
/// Floating-point literals store their digits as text; `f64` has no `Eq`
/// and the value is only needed by consumers that ask for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    Int { value: i64, radix: Radix },
    Long { value: i64, radix: Radix },
    Float { text: String },
    Double { text: String },
    Char { value: char },
    Str { value: String },
    TextBlock { value: String },
    True,
    False,
    Null,

    Identifier(String),

    // Keywords
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    CharKw,
    Class,
    Const,
    Continue,
    Default,
    Do,
    DoubleKw,
    Else,
    Enum,
    Extends,
    Final,
    Finally,
    FloatKw,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    IntKw,
    Interface,
    LongKw,
    Native,
    New,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Var,
    Void,
    Volatile,
    While,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,
    Comma,
    Dot,
    Ellipsis,
    At,
    DoubleColon,

    // Operators
    Assign,       // =
    Plus,         // +
    Minus,        // -
    Multiply,     // *
    Divide,       // /
    Modulo,       // %
    Increment,    // ++
    Decrement,    // --
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=
    And,          // &&
    Or,           // ||
    Not,          // !
    BitNot,       // ~
    BitAnd,       // &
    BitOr,        // |
    BitXor,       // ^
    LeftShift,    // <<
    RightShift,   // >>
    UnsignedRightShift, // >>>
    PlusAssign,   // +=
    MinusAssign,  // -=
    MultiplyAssign, // *=
    DivideAssign, // /=
    ModuloAssign, // %=
    BitAndAssign, // &=
    BitOrAssign,  // |=
    BitXorAssign, // ^=
    LeftShiftAssign,  // <<=
    RightShiftAssign, // >>=
    UnsignedRightShiftAssign, // >>>=
    Question,     // ?
    Colon,        // :
    Arrow,        // ->

    // Trivia
    Whitespace,
    LineComment,
    BlockComment,
    JavaDoc,

    Unknown,
    Eof,
}

impl TokenKind {
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Abstract
                | TokenKind::Assert
                | TokenKind::Boolean
                | TokenKind::Break
                | TokenKind::Byte
                | TokenKind::Case
                | TokenKind::Catch
                | TokenKind::CharKw
                | TokenKind::Class
                | TokenKind::Const
                | TokenKind::Continue
                | TokenKind::Default
                | TokenKind::Do
                | TokenKind::DoubleKw
                | TokenKind::Else
                | TokenKind::Enum
                | TokenKind::Extends
                | TokenKind::Final
                | TokenKind::Finally
                | TokenKind::FloatKw
                | TokenKind::For
                | TokenKind::Goto
                | TokenKind::If
                | TokenKind::Implements
                | TokenKind::Import
                | TokenKind::Instanceof
                | TokenKind::IntKw
                | TokenKind::Interface
                | TokenKind::LongKw
                | TokenKind::Native
                | TokenKind::New
                | TokenKind::Package
                | TokenKind::Private
                | TokenKind::Protected
                | TokenKind::Public
                | TokenKind::Return
                | TokenKind::Short
                | TokenKind::Static
                | TokenKind::Strictfp
                | TokenKind::Super
                | TokenKind::Switch
                | TokenKind::Synchronized
                | TokenKind::This
                | TokenKind::Throw
                | TokenKind::Throws
                | TokenKind::Transient
                | TokenKind::Try
                | TokenKind::Var
                | TokenKind::Void
                | TokenKind::Volatile
                | TokenKind::While
        )
    }

    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Int { .. }
                | TokenKind::Long { .. }
                | TokenKind::Float { .. }
                | TokenKind::Double { .. }
                | TokenKind::Char { .. }
                | TokenKind::Str { .. }
                | TokenKind::TextBlock { .. }
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    pub const fn is_float_literal(&self) -> bool {
        matches!(self, TokenKind::Float { .. } | TokenKind::Double { .. })
    }

    pub const fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::JavaDoc
        )
    }
}

/// Channel a token is emitted on. Parsers skip `Trivia`; editors do not.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Default,
    Trivia,
}

/// Bit set of per-token conditions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenFlags(u8);

impl TokenFlags {
    pub const EMPTY: TokenFlags = TokenFlags(0);
    pub const ERROR: TokenFlags = TokenFlags(1);
    pub const INCOMPLETE: TokenFlags = TokenFlags(1 << 1);
    pub const EOF: TokenFlags = TokenFlags(1 << 2);

    pub const fn union(self, other: TokenFlags) -> TokenFlags {
        TokenFlags(self.0 | other.0)
    }

    pub const fn contains(self, other: TokenFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A single lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact substring consumed; empty for synthetic EOF tokens.
    pub lexeme: String,
    pub span: Span,
    /// 1-based position of the first character.
    pub line: usize,
    pub column: usize,
    pub channel: Channel,
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        span: Span,
        line: usize,
        column: usize,
        channel: Channel,
        flags: TokenFlags,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            line,
            column,
            channel,
            flags,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.flags.contains(TokenFlags::EOF)
    }

    pub fn is_error(&self) -> bool {
        self.flags.contains(TokenFlags::ERROR)
    }

    pub fn is_trivia(&self) -> bool {
        matches!(self.channel, Channel::Trivia)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_and_literal_classification() {
        assert!(TokenKind::Class.is_keyword());
        assert!(TokenKind::Strictfp.is_keyword());
        assert!(!TokenKind::Identifier("classy".into()).is_keyword());
        assert!(TokenKind::Null.is_literal());
        assert!(!TokenKind::Null.is_keyword());
    }

    #[test]
    fn float_literal_detection() {
        let float = TokenKind::Float {
            text: "3.14".into(),
        };
        assert!(float.is_float_literal());
        assert!(!TokenKind::Int {
            value: 3,
            radix: Radix::Decimal
        }
        .is_float_literal());
    }

    #[test]
    fn flags_union_and_contains() {
        let flags = TokenFlags::ERROR.union(TokenFlags::INCOMPLETE);
        assert!(flags.contains(TokenFlags::ERROR));
        assert!(flags.contains(TokenFlags::INCOMPLETE));
        assert!(!flags.contains(TokenFlags::EOF));
        assert!(TokenFlags::EMPTY.is_empty());
    }
}
