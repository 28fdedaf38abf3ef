//! Identifier and keyword scanning.

use unicode_ident::{is_xid_continue, is_xid_start};

use crate::token::{Channel, Token, TokenFlags, TokenKind};

use super::Lexer;

pub(crate) fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '$' || is_xid_start(c)
}

fn is_identifier_continue(c: char) -> bool {
    c == '_' || c == '$' || c.is_ascii_digit() || is_xid_continue(c)
}

pub(crate) fn lex_identifier(lexer: &mut Lexer<'_>) -> Token {
    let mark = lexer.mark();
    lexer.advance();
    while is_identifier_continue(lexer.peek()) {
        lexer.advance();
    }

    let text = lexer.lexeme_from(&mark);
    let kind =
        keyword_kind(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()));
    lexer.finish(&mark, kind, Channel::Default, TokenFlags::EMPTY)
}

/// Keyword lookup branched on the first byte.
fn keyword_kind(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    match bytes.first()? {
        b'a' => match text {
            "abstract" => Some(TokenKind::Abstract),
            "assert" => Some(TokenKind::Assert),
            _ => None,
        },
        b'b' => match text {
            "boolean" => Some(TokenKind::Boolean),
            "break" => Some(TokenKind::Break),
            "byte" => Some(TokenKind::Byte),
            _ => None,
        },
        b'c' => match text {
            "case" => Some(TokenKind::Case),
            "catch" => Some(TokenKind::Catch),
            "char" => Some(TokenKind::CharKw),
            "class" => Some(TokenKind::Class),
            "const" => Some(TokenKind::Const),
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        b'd' => match text {
            "default" => Some(TokenKind::Default),
            "do" => Some(TokenKind::Do),
            "double" => Some(TokenKind::DoubleKw),
            _ => None,
        },
        b'e' => match text {
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "extends" => Some(TokenKind::Extends),
            _ => None,
        },
        b'f' => match text {
            "false" => Some(TokenKind::False),
            "final" => Some(TokenKind::Final),
            "finally" => Some(TokenKind::Finally),
            "float" => Some(TokenKind::FloatKw),
            "for" => Some(TokenKind::For),
            _ => None,
        },
        b'g' => match text {
            "goto" => Some(TokenKind::Goto),
            _ => None,
        },
        b'i' => match text {
            "if" => Some(TokenKind::If),
            "implements" => Some(TokenKind::Implements),
            "import" => Some(TokenKind::Import),
            "instanceof" => Some(TokenKind::Instanceof),
            "int" => Some(TokenKind::IntKw),
            "interface" => Some(TokenKind::Interface),
            _ => None,
        },
        b'l' => match text {
            "long" => Some(TokenKind::LongKw),
            _ => None,
        },
        b'n' => match text {
            "native" => Some(TokenKind::Native),
            "new" => Some(TokenKind::New),
            "null" => Some(TokenKind::Null),
            _ => None,
        },
        b'p' => match text {
            "package" => Some(TokenKind::Package),
            "private" => Some(TokenKind::Private),
            "protected" => Some(TokenKind::Protected),
            "public" => Some(TokenKind::Public),
            _ => None,
        },
        b'r' => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        b's' => match text {
            "short" => Some(TokenKind::Short),
            "static" => Some(TokenKind::Static),
            "strictfp" => Some(TokenKind::Strictfp),
            "super" => Some(TokenKind::Super),
            "switch" => Some(TokenKind::Switch),
            "synchronized" => Some(TokenKind::Synchronized),
            _ => None,
        },
        b't' => match text {
            "this" => Some(TokenKind::This),
            "throw" => Some(TokenKind::Throw),
            "throws" => Some(TokenKind::Throws),
            "transient" => Some(TokenKind::Transient),
            "true" => Some(TokenKind::True),
            "try" => Some(TokenKind::Try),
            _ => None,
        },
        b'v' => match text {
            "var" => Some(TokenKind::Var),
            "void" => Some(TokenKind::Void),
            "volatile" => Some(TokenKind::Volatile),
            _ => None,
        },
        b'w' => match text {
            "while" => Some(TokenKind::While),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_resolve_and_near_misses_do_not() {
        assert_eq!(keyword_kind("class"), Some(TokenKind::Class));
        assert_eq!(keyword_kind("instanceof"), Some(TokenKind::Instanceof));
        assert_eq!(keyword_kind("classy"), None);
        assert_eq!(keyword_kind("Class"), None);
        assert_eq!(keyword_kind(""), None);
    }

    #[test]
    fn literal_words_map_to_literal_kinds() {
        assert_eq!(keyword_kind("true"), Some(TokenKind::True));
        assert_eq!(keyword_kind("false"), Some(TokenKind::False));
        assert_eq!(keyword_kind("null"), Some(TokenKind::Null));
    }
}
