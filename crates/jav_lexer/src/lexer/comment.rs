//! Line, block and Javadoc comment scanning. Comments are trivia.

use crate::diagnostics::LexErrorKind;
use crate::token::{Channel, Token, TokenFlags, TokenKind};

use super::Lexer;

/// The dispatcher guarantees the next two characters are `//` or `/*`.
pub(crate) fn lex_comment(lexer: &mut Lexer<'_>) -> Token {
    let mark = lexer.mark();
    lexer.advance(); // '/'

    if lexer.peek() == '/' {
        lexer.advance();
        // Runs to, but not including, the next line terminator.
        while !lexer.is_eof() && !matches!(lexer.peek(), '\n' | '\r') {
            lexer.advance();
        }
        return lexer.finish(
            &mark,
            TokenKind::LineComment,
            Channel::Trivia,
            TokenFlags::EMPTY,
        );
    }

    lexer.advance(); // '*'
    let kind = if lexer.peek() == '*' {
        TokenKind::JavaDoc
    } else {
        TokenKind::BlockComment
    };

    // Newlines inside the comment are tracked by the cursor as usual.
    let mut saw_star = false;
    while let Some(c) = lexer.advance() {
        if saw_star && c == '/' {
            return lexer.finish(&mark, kind, Channel::Trivia, TokenFlags::EMPTY);
        }
        saw_star = c == '*';
    }

    lexer.record_error(LexErrorKind::UnterminatedComment, &mark);
    lexer.finish(
        &mark,
        kind,
        Channel::Trivia,
        TokenFlags::ERROR.union(TokenFlags::INCOMPLETE),
    )
}
