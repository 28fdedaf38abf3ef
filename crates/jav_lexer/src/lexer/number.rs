//! Numeric literal scanning: hex/binary/octal/decimal integers, floats,
//! digit separators and type suffixes. The most error-prone scanner in a
//! hand-written lexer; every exit runs the terminator check.

use crate::diagnostics::LexErrorKind;
use crate::token::{Channel, Radix, Token, TokenFlags, TokenKind};

use super::operators::is_token_terminator;
use super::{Lexer, Mark};

/// Result of a digit run: how many digits, and whether an underscore sat
/// anywhere other than between two digits.
struct DigitRun {
    digits: usize,
    misplaced_underscore: bool,
}

pub(crate) fn lex_number(lexer: &mut Lexer<'_>) -> Token {
    let mark = lexer.mark();
    if lexer.peek() == '0' {
        match lexer.peek_at(1) {
            'x' | 'X' => return lex_radix(lexer, mark, Radix::Hex),
            'b' | 'B' => return lex_radix(lexer, mark, Radix::Binary),
            // Only an octal digit switches radix; '0_7' stays decimal so the
            // separator counts as sitting between two digits.
            c if ('0'..='7').contains(&c) => return lex_radix(lexer, mark, Radix::Octal),
            _ => {}
        }
    }
    lex_decimal(lexer, mark)
}

/// Hex, binary and octal integers. Underscore placement follows the same
/// rule as decimal, against the radix-specific digit predicate.
fn lex_radix(lexer: &mut Lexer<'_>, mark: Mark, radix: Radix) -> Token {
    lexer.advance(); // leading '0'
    let prefix_len = if matches!(radix, Radix::Octal) {
        1
    } else {
        lexer.advance(); // 'x' / 'X' / 'b' / 'B'
        2
    };

    let run = consume_digits(lexer, |c| is_radix_digit(radix, c));
    let raw_digits: String = lexer.lexeme_from(&mark)[prefix_len..]
        .chars()
        .filter(|c| *c != '_')
        .collect();

    let mut errors = Vec::new();
    if run.digits == 0 {
        errors.push(LexErrorKind::MalformedNumber(
            "missing digits after radix prefix".into(),
        ));
    }
    if run.misplaced_underscore {
        errors.push(LexErrorKind::MalformedNumber(
            "misplaced underscore".into(),
        ));
    }

    let mut long = false;
    match lexer.peek() {
        'l' | 'L' => {
            lexer.advance();
            long = true;
        }
        // Hex never reaches this arm for 'f'/'d'; those are hex digits.
        'f' | 'F' | 'd' | 'D' => {
            lexer.advance();
            errors.push(LexErrorKind::MalformedNumber(
                "floating-point suffix on non-decimal literal".into(),
            ));
        }
        _ => {}
    }

    if let Some(error) = check_terminator(lexer) {
        errors.push(error);
    }

    let mut value = 0i64;
    if errors.is_empty() {
        match i64::from_str_radix(&raw_digits, radix.base()) {
            Ok(v) => value = v,
            Err(_) => errors.push(LexErrorKind::MalformedNumber(
                "integer literal out of range".into(),
            )),
        }
    }

    let kind = if long {
        TokenKind::Long { value, radix }
    } else {
        TokenKind::Int { value, radix }
    };
    emit(lexer, mark, kind, errors)
}

fn lex_decimal(lexer: &mut Lexer<'_>, mark: Mark) -> Token {
    let mut errors = Vec::new();

    let int_run = consume_digits(lexer, |c| c.is_ascii_digit());
    if int_run.misplaced_underscore {
        errors.push(LexErrorKind::MalformedNumber(
            "misplaced underscore".into(),
        ));
    }

    let mut is_float = false;

    // Fractional part: '.' only belongs to the literal when a digit follows.
    if lexer.peek() == '.' && lexer.peek_at(1).is_ascii_digit() {
        lexer.advance();
        let frac = consume_digits(lexer, |c| c.is_ascii_digit());
        if frac.misplaced_underscore {
            errors.push(LexErrorKind::MalformedNumber(
                "misplaced underscore".into(),
            ));
        }
        is_float = true;
    }

    if matches!(lexer.peek(), 'e' | 'E') {
        lexer.advance();
        if matches!(lexer.peek(), '+' | '-') {
            lexer.advance();
        }
        let exp = consume_digits(lexer, |c| c.is_ascii_digit());
        if exp.digits == 0 {
            errors.push(LexErrorKind::MalformedNumber(
                "missing digits in exponent".into(),
            ));
        }
        if exp.misplaced_underscore {
            errors.push(LexErrorKind::MalformedNumber(
                "misplaced underscore".into(),
            ));
        }
        is_float = true;
    }

    // Numeric text without separators, captured before the suffix.
    let clean_text: String = lexer
        .lexeme_from(&mark)
        .chars()
        .filter(|c| *c != '_')
        .collect();

    let mut suffix = None;
    match lexer.peek() {
        'l' | 'L' => {
            lexer.advance();
            if is_float {
                errors.push(LexErrorKind::MalformedNumber(
                    "long suffix on floating-point literal".into(),
                ));
            }
            suffix = Some('l');
        }
        'f' | 'F' => {
            lexer.advance();
            suffix = Some('f');
        }
        'd' | 'D' => {
            lexer.advance();
            suffix = Some('d');
        }
        _ => {}
    }

    if let Some(error) = check_terminator(lexer) {
        errors.push(error);
    }

    let mut value = 0i64;
    if errors.is_empty() && !is_float && !matches!(suffix, Some('f') | Some('d')) {
        match clean_text.parse::<i64>() {
            Ok(v) => value = v,
            Err(_) => errors.push(LexErrorKind::MalformedNumber(
                "integer literal out of range".into(),
            )),
        }
    }

    // A float suffix forces floating-point classification even without a
    // fractional part.
    let kind = match suffix {
        Some('f') => TokenKind::Float { text: clean_text },
        Some('d') => TokenKind::Double { text: clean_text },
        Some(_) => TokenKind::Long {
            value,
            radix: Radix::Decimal,
        },
        None if is_float => TokenKind::Double { text: clean_text },
        None => TokenKind::Int {
            value,
            radix: Radix::Decimal,
        },
    };
    emit(lexer, mark, kind, errors)
}

/// Consume digits and separators. Underscores are only legal between two
/// digits; leading, trailing and doubled separators are flagged.
fn consume_digits<F>(lexer: &mut Lexer<'_>, predicate: F) -> DigitRun
where
    F: Fn(char) -> bool,
{
    let mut digits = 0;
    let mut underscores = 0;
    let mut misplaced = false;
    let mut last_was_digit = false;
    loop {
        let c = lexer.peek();
        if predicate(c) {
            lexer.advance();
            digits += 1;
            last_was_digit = true;
        } else if c == '_' {
            if !last_was_digit {
                misplaced = true;
            }
            lexer.advance();
            underscores += 1;
            last_was_digit = false;
        } else {
            break;
        }
    }
    if underscores > 0 && !last_was_digit {
        misplaced = true;
    }
    DigitRun {
        digits,
        misplaced_underscore: misplaced,
    }
}

/// The character after a literal must be a token terminator. Anything else
/// is consumed into the error token so the scan keeps moving.
fn check_terminator(lexer: &mut Lexer<'_>) -> Option<LexErrorKind> {
    if is_token_terminator(lexer.peek()) {
        return None;
    }
    while !is_token_terminator(lexer.peek()) {
        lexer.advance();
    }
    Some(LexErrorKind::MalformedNumber(
        "trailing characters after literal".into(),
    ))
}

fn is_radix_digit(radix: Radix, c: char) -> bool {
    match radix {
        Radix::Binary => matches!(c, '0' | '1'),
        Radix::Octal => ('0'..='7').contains(&c),
        Radix::Decimal => c.is_ascii_digit(),
        Radix::Hex => c.is_ascii_hexdigit(),
    }
}

fn emit(lexer: &mut Lexer<'_>, mark: Mark, kind: TokenKind, errors: Vec<LexErrorKind>) -> Token {
    let flags = if errors.is_empty() {
        TokenFlags::EMPTY
    } else {
        TokenFlags::ERROR
    };
    for error in errors {
        lexer.record_error(error, &mark);
    }
    lexer.finish(&mark, kind, Channel::Default, flags)
}
