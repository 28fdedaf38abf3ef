//! Text block scanning: `"""` ... `"""`.

use crate::diagnostics::LexErrorKind;
use crate::token::{Channel, Token, TokenFlags, TokenKind};

use super::string::scan_escape;
use super::Lexer;

/// Scan a text block. The opening delimiter has not been consumed unless
/// `resumed` is set. Newlines inside the block are tracked by the cursor
/// and normalized to `'\n'` in the decoded value.
pub(crate) fn lex_text_block(lexer: &mut Lexer<'_>, resumed: bool) -> Token {
    let mark = lexer.mark();
    if !resumed {
        lexer.advance();
        lexer.advance();
        lexer.advance();
    }

    let mut value = String::new();
    let mut flags = TokenFlags::EMPTY;
    loop {
        if lexer.is_eof() {
            lexer.record_error(LexErrorKind::UnterminatedTextBlock, &mark);
            lexer.pop_mode();
            return lexer.finish(
                &mark,
                TokenKind::TextBlock { value },
                Channel::Default,
                TokenFlags::ERROR.union(TokenFlags::INCOMPLETE),
            );
        }
        if lexer.peek() == '"' && lexer.peek_at(1) == '"' && lexer.peek_at(2) == '"' {
            lexer.advance();
            lexer.advance();
            lexer.advance();
            lexer.pop_mode();
            return lexer.finish(&mark, TokenKind::TextBlock { value }, Channel::Default, flags);
        }
        match lexer.peek() {
            '\\' => {
                let escape_mark = lexer.mark();
                lexer.advance();
                match scan_escape(lexer) {
                    Ok(c) => value.push(c),
                    Err(kind) => {
                        let abort = matches!(kind, LexErrorKind::IncompleteUnicodeEscape);
                        lexer.record_error(kind, &escape_mark);
                        flags = flags.union(TokenFlags::ERROR);
                        if abort {
                            lexer.pop_mode();
                            return lexer.finish(
                                &mark,
                                TokenKind::TextBlock { value },
                                Channel::Default,
                                flags,
                            );
                        }
                    }
                }
            }
            c => {
                lexer.advance();
                value.push(if c == '\r' { '\n' } else { c });
            }
        }
    }
}
