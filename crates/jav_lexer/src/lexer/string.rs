//! String and character literal scanning, plus the escape decoding shared
//! with text blocks.

use crate::diagnostics::LexErrorKind;
use crate::token::{Channel, Token, TokenFlags, TokenKind};

use super::Lexer;

const REPLACEMENT: char = '\u{FFFD}';

/// Scan a string literal. The opening quote has not been consumed unless
/// `resumed` is set (the lexer was re-entered in string mode by a caller).
///
/// Line boundaries inside the literal are normalized to `'\n'` in the
/// decoded value; the lexeme keeps the raw text.
pub(crate) fn lex_string(lexer: &mut Lexer<'_>, resumed: bool) -> Token {
    let mark = lexer.mark();
    if !resumed {
        lexer.advance(); // opening quote; mode was pushed by the dispatcher
    }

    let mut value = String::new();
    let mut flags = TokenFlags::EMPTY;
    loop {
        if lexer.is_eof() {
            lexer.record_error(LexErrorKind::UnterminatedString, &mark);
            lexer.pop_mode();
            return lexer.finish(
                &mark,
                TokenKind::Str { value },
                Channel::Default,
                TokenFlags::ERROR.union(TokenFlags::INCOMPLETE),
            );
        }
        match lexer.peek() {
            '"' => {
                lexer.advance();
                lexer.pop_mode();
                return lexer.finish(&mark, TokenKind::Str { value }, Channel::Default, flags);
            }
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
                            // A malformed unicode escape aborts the token.
                            lexer.pop_mode();
                            return lexer.finish(
                                &mark,
                                TokenKind::Str { value },
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

/// Scan a character literal: exactly one character or escape, immediately
/// followed by a closing quote.
pub(crate) fn lex_char(lexer: &mut Lexer<'_>) -> Token {
    let mark = lexer.mark();
    lexer.advance(); // opening quote

    let mut flags = TokenFlags::EMPTY;
    let mut value = '\0';
    match lexer.peek() {
        '\'' => {
            lexer.advance();
            lexer.record_error(LexErrorKind::EmptyCharLiteral, &mark);
            return lexer.finish(
                &mark,
                TokenKind::Char { value },
                Channel::Default,
                TokenFlags::ERROR,
            );
        }
        '\n' | '\r' => {
            lexer.record_error(LexErrorKind::NewlineInCharLiteral, &mark);
            return lexer.finish(
                &mark,
                TokenKind::Char { value },
                Channel::Default,
                TokenFlags::ERROR,
            );
        }
        _ if lexer.is_eof() => {
            lexer.record_error(LexErrorKind::UnterminatedChar, &mark);
            return lexer.finish(
                &mark,
                TokenKind::Char { value },
                Channel::Default,
                TokenFlags::ERROR.union(TokenFlags::INCOMPLETE),
            );
        }
        '\\' => {
            let escape_mark = lexer.mark();
            lexer.advance();
            match scan_escape(lexer) {
                Ok(c) => value = c,
                Err(kind) => {
                    lexer.record_error(kind, &escape_mark);
                    flags = flags.union(TokenFlags::ERROR);
                }
            }
        }
        c => {
            lexer.advance();
            value = c;
        }
    }

    if lexer.peek() == '\'' {
        lexer.advance();
    } else {
        lexer.record_error(LexErrorKind::UnterminatedChar, &mark);
        flags = flags.union(TokenFlags::ERROR).union(TokenFlags::INCOMPLETE);
    }
    lexer.finish(&mark, TokenKind::Char { value }, Channel::Default, flags)
}

/// Decode one escape unit. The backslash itself is already consumed.
///
/// Recognized: the single-letter escapes `b t n f r s " ' \`, octal escapes
/// of one to three digits capped at 255, and `\u` (the `u` may repeat)
/// followed by exactly four hex digits.
pub(super) fn scan_escape(lexer: &mut Lexer<'_>) -> Result<char, LexErrorKind> {
    match lexer.peek() {
        'b' => consume_as(lexer, '\u{0008}'),
        't' => consume_as(lexer, '\t'),
        'n' => consume_as(lexer, '\n'),
        'f' => consume_as(lexer, '\u{000C}'),
        'r' => consume_as(lexer, '\r'),
        's' => consume_as(lexer, ' '),
        '"' => consume_as(lexer, '"'),
        '\'' => consume_as(lexer, '\''),
        '\\' => consume_as(lexer, '\\'),
        '0'..='7' => {
            // Up to three octal digits; stops before the value overflows a
            // byte, so `\777` decodes two digits and leaves the third.
            let mut value = 0u32;
            let mut count = 0;
            while count < 3 {
                let c = lexer.peek();
                if !('0'..='7').contains(&c) {
                    break;
                }
                let digit = c as u32 - '0' as u32;
                if value * 8 + digit > 255 {
                    break;
                }
                value = value * 8 + digit;
                lexer.advance();
                count += 1;
            }
            Ok(char::from_u32(value).unwrap_or(REPLACEMENT))
        }
        'u' => {
            while lexer.peek() == 'u' {
                lexer.advance();
            }
            let mut value = 0u32;
            for _ in 0..4 {
                let Some(digit) = lexer.peek().to_digit(16) else {
                    return Err(LexErrorKind::IncompleteUnicodeEscape);
                };
                lexer.advance();
                value = value * 16 + digit;
            }
            // Out-of-range values (lone surrogates) decode to U+FFFD.
            Ok(char::from_u32(value).unwrap_or(REPLACEMENT))
        }
        _ if lexer.is_eof() => Err(LexErrorKind::IncompleteEscape),
        c => {
            lexer.advance();
            Err(LexErrorKind::InvalidEscape(c))
        }
    }
}

fn consume_as(lexer: &mut Lexer<'_>, decoded: char) -> Result<char, LexErrorKind> {
    lexer.advance();
    Ok(decoded)
}
