//! Operator and punctuation scanning.

use crate::diagnostics::LexErrorKind;
use crate::source::EOF_CHAR;
use crate::token::{Channel, Token, TokenFlags, TokenKind};

use super::Lexer;

/// Multi-character operators, longest first. The greedy scan below accepts
/// the first full match, so `>>>=` wins over `>>>`, `>>` and `>=`.
const MULTI_CHAR_OPERATORS: &[(&str, TokenKind)] = &[
    (">>>=", TokenKind::UnsignedRightShiftAssign),
    (">>>", TokenKind::UnsignedRightShift),
    (">>=", TokenKind::RightShiftAssign),
    ("<<=", TokenKind::LeftShiftAssign),
    ("...", TokenKind::Ellipsis),
    ("<<", TokenKind::LeftShift),
    (">>", TokenKind::RightShift),
    ("->", TokenKind::Arrow),
    ("::", TokenKind::DoubleColon),
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
    ("+=", TokenKind::PlusAssign),
    ("-=", TokenKind::MinusAssign),
    ("*=", TokenKind::MultiplyAssign),
    ("/=", TokenKind::DivideAssign),
    ("%=", TokenKind::ModuloAssign),
    ("&=", TokenKind::BitAndAssign),
    ("|=", TokenKind::BitOrAssign),
    ("^=", TokenKind::BitXorAssign),
];

pub(crate) fn lex_operator(lexer: &mut Lexer<'_>) -> Token {
    let mark = lexer.mark();
    let first = lexer.peek();

    for (symbol, kind) in MULTI_CHAR_OPERATORS {
        if !symbol.starts_with(first) {
            continue;
        }
        if symbol
            .chars()
            .enumerate()
            .all(|(i, c)| lexer.peek_at(i) == c)
        {
            for _ in 0..symbol.chars().count() {
                lexer.advance();
            }
            return lexer.finish(&mark, kind.clone(), Channel::Default, TokenFlags::EMPTY);
        }
    }

    lexer.advance();
    let kind = match first {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        ';' => TokenKind::Semicolon,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '@' => TokenKind::At,
        '=' => TokenKind::Assign,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Multiply,
        '/' => TokenKind::Divide,
        '%' => TokenKind::Modulo,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        '!' => TokenKind::Not,
        '~' => TokenKind::BitNot,
        '&' => TokenKind::BitAnd,
        '|' => TokenKind::BitOr,
        '^' => TokenKind::BitXor,
        '?' => TokenKind::Question,
        ':' => TokenKind::Colon,
        c => {
            lexer.record_error(LexErrorKind::UnexpectedChar(c), &mark);
            return lexer.finish(&mark, TokenKind::Unknown, Channel::Default, TokenFlags::ERROR);
        }
    };
    lexer.finish(&mark, kind, Channel::Default, TokenFlags::EMPTY)
}

/// Characters that may legally follow a literal: whitespace, end of input,
/// or the start of a recognized punctuation/operator/literal token.
pub(super) fn is_token_terminator(c: char) -> bool {
    c == EOF_CHAR
        || c.is_whitespace()
        || matches!(
            c,
            '(' | ')'
                | '{'
                | '}'
                | '['
                | ']'
                | ';'
                | ','
                | '.'
                | '@'
                | '='
                | '+'
                | '-'
                | '*'
                | '/'
                | '%'
                | '<'
                | '>'
                | '!'
                | '~'
                | '&'
                | '|'
                | '^'
                | '?'
                | ':'
                | '"'
                | '\''
        )
}
