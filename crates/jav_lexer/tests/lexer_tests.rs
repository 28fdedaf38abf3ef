use jav_lexer::{Channel, LexMode, Lexer, Radix, Token, TokenFlags, TokenKind};
use test_case::test_case;

fn lex_all(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

/// Kinds on the default channel, EOF excluded.
fn significant_kinds(input: &str) -> Vec<TokenKind> {
    lex_all(input)
        .into_iter()
        .filter(|t| !t.is_trivia() && !t.is_eof())
        .map(|t| t.kind)
        .collect()
}

#[test]
fn keywords_identifiers_and_punctuation() {
    let kinds = significant_kinds("class Foo { int x; }");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Class,
            TokenKind::Identifier("Foo".into()),
            TokenKind::LeftBrace,
            TokenKind::IntKw,
            TokenKind::Identifier("x".into()),
            TokenKind::Semicolon,
            TokenKind::RightBrace,
        ]
    );
}

#[test]
fn keyword_versus_identifier() {
    assert_eq!(significant_kinds("class"), vec![TokenKind::Class]);
    assert_eq!(
        significant_kinds("classy"),
        vec![TokenKind::Identifier("classy".into())]
    );
}

#[test]
fn whitespace_and_comments_are_trivia() {
    let tokens = lex_all("a // line\n/* block */ /** doc */ b");
    let trivia: Vec<_> = tokens
        .iter()
        .filter(|t| t.is_trivia())
        .map(|t| t.kind.clone())
        .collect();
    assert!(trivia.contains(&TokenKind::LineComment));
    assert!(trivia.contains(&TokenKind::BlockComment));
    assert!(trivia.contains(&TokenKind::JavaDoc));
    assert!(trivia.contains(&TokenKind::Whitespace));
    for token in tokens.iter().filter(|t| t.is_trivia()) {
        assert_eq!(token.channel, Channel::Trivia);
    }
}

#[test]
fn unterminated_block_comment_is_flagged() {
    let mut lexer = Lexer::new("/* no end");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::BlockComment);
    assert!(token.flags.contains(TokenFlags::ERROR));
    assert!(token.flags.contains(TokenFlags::INCOMPLETE));
    assert_eq!(lexer.diagnostics().len(), 1);
}

#[test_case("123", 123, Radix::Decimal ; "decimal")]
#[test_case("0x1A", 26, Radix::Hex ; "hex")]
#[test_case("0b101", 5, Radix::Binary ; "binary")]
#[test_case("0777", 511, Radix::Octal ; "octal")]
#[test_case("1_000", 1000, Radix::Decimal ; "digit separator")]
#[test_case("1_2_3", 123, Radix::Decimal ; "repeated separators")]
#[test_case("0xFF_EC", 0xFFEC, Radix::Hex ; "hex separator")]
#[test_case("0_7", 7, Radix::Decimal ; "separator after leading zero")]
#[test_case("07_7", 63, Radix::Octal ; "octal separator")]
fn integer_literals(input: &str, value: i64, radix: Radix) {
    let mut lexer = Lexer::new(input);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Int { value, radix });
    assert_eq!(token.lexeme, input);
    assert!(lexer.diagnostics().is_empty());
}

#[test_case("42L", 42, Radix::Decimal ; "decimal long")]
#[test_case("0x10l", 16, Radix::Hex ; "hex long")]
fn long_literals(input: &str, value: i64, radix: Radix) {
    let mut lexer = Lexer::new(input);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Long { value, radix });
    assert!(lexer.diagnostics().is_empty());
}

#[test_case("3.14f", "3.14" ; "float suffix")]
#[test_case("2f", "2" ; "float suffix without fraction")]
fn float_literals(input: &str, text: &str) {
    let mut lexer = Lexer::new(input);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Float { text: text.into() });
    assert!(token.kind.is_float_literal());
    assert!(lexer.diagnostics().is_empty());
}

#[test_case("1e10", "1e10" ; "exponent")]
#[test_case("2.5", "2.5" ; "fraction")]
#[test_case("1.5e-3", "1.5e-3" ; "fraction with signed exponent")]
#[test_case("7d", "7" ; "double suffix")]
#[test_case("1_0.2_5", "10.25" ; "separators stripped from text")]
fn double_literals(input: &str, text: &str) {
    let mut lexer = Lexer::new(input);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Double { text: text.into() });
    assert!(token.kind.is_float_literal());
    assert!(lexer.diagnostics().is_empty());
}

#[test_case("1__0" ; "doubled separator")]
#[test_case("1_" ; "trailing separator")]
#[test_case("0x_1" ; "separator before first digit")]
#[test_case("0x" ; "missing digits after prefix")]
#[test_case("1e" ; "missing exponent digits")]
#[test_case("0b12" ; "non binary digit")]
#[test_case("123abc" ; "trailing garbage")]
#[test_case("0b101f" ; "float suffix on binary")]
#[test_case("3.14L" ; "long suffix on float")]
fn malformed_numbers_record_diagnostics(input: &str) {
    let mut lexer = Lexer::new(input);
    let token = lexer.next_token();
    assert!(token.is_error(), "expected error token for {input:?}");
    assert!(!lexer.diagnostics().is_empty());
    // One bad literal never stops the scan.
    assert!(lexer.next_token().is_eof());
}

#[test]
fn malformed_number_consumes_whole_run() {
    let kinds = significant_kinds("1__0 ok");
    assert_eq!(kinds.len(), 2);
    assert_eq!(kinds[1], TokenKind::Identifier("ok".into()));
}

#[test]
fn string_literal_with_escapes() {
    let mut lexer = Lexer::new("\"a\\nb\"");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Str { value: "a\nb".into() });
    assert_eq!(token.lexeme, "\"a\\nb\"");
    assert_eq!(token.span.start, 0);
    assert_eq!(token.span.end, 6);
    assert!(token.flags.is_empty());
    assert!(lexer.diagnostics().is_empty());
}

#[test_case("\"\\u0041\"", "A" ; "unicode escape")]
#[test_case("\"\\uu0041\"", "A" ; "repeated u prefix")]
#[test_case("\"\\101\"", "A" ; "octal escape")]
#[test_case("\"\\0\"", "\0" ; "single octal digit")]
#[test_case("\"\\s\"", " " ; "space escape")]
#[test_case("\"\\\"\"", "\"" ; "escaped quote")]
#[test_case("\"\\uD800\"", "\u{FFFD}" ; "lone surrogate replaced")]
fn escape_decoding(input: &str, expected: &str) {
    let mut lexer = Lexer::new(input);
    let token = lexer.next_token();
    assert_eq!(
        token.kind,
        TokenKind::Str {
            value: expected.into()
        }
    );
    assert!(lexer.diagnostics().is_empty());
}

#[test]
fn octal_escape_caps_at_byte_value() {
    // \777 would overflow a byte; only \77 is consumed.
    let mut lexer = Lexer::new("\"\\7777\"");
    let token = lexer.next_token();
    assert_eq!(
        token.kind,
        TokenKind::Str {
            value: "\u{3F}77".into()
        }
    );
    assert!(lexer.diagnostics().is_empty());
}

#[test]
fn unterminated_string_is_incomplete_error() {
    let mut lexer = Lexer::new("\"a");
    let token = lexer.next_token();
    assert!(token.flags.contains(TokenFlags::ERROR));
    assert!(token.flags.contains(TokenFlags::INCOMPLETE));
    assert_eq!(lexer.diagnostics().len(), 1);
    assert!(lexer.next_token().is_eof());
}

#[test]
fn truncated_unicode_escape_aborts_the_token() {
    let mut lexer = Lexer::new("\"\\u00G1\" next");
    let token = lexer.next_token();
    assert!(token.is_error());
    assert_eq!(lexer.diagnostics().len(), 1);
    // Scanning continues past the aborted token.
    let rest: Vec<_> = lexer
        .tokenize()
        .into_iter()
        .filter(|t| !t.is_trivia() && !t.is_eof())
        .collect();
    assert!(!rest.is_empty());
}

#[test]
fn string_with_literal_newline_updates_line() {
    let mut lexer = Lexer::new("\"a\nb\"");
    let token = lexer.next_token();
    assert_eq!(token.line, 1);
    assert_eq!(token.kind, TokenKind::Str { value: "a\nb".into() });
    assert_eq!(lexer.line(), 2);
}

#[test_case("'a'", 'a' ; "plain")]
#[test_case("'\\n'", '\n' ; "escape")]
#[test_case("'\\''", '\'' ; "escaped quote")]
#[test_case("'\\u0042'", 'B' ; "unicode")]
fn char_literals(input: &str, value: char) {
    let mut lexer = Lexer::new(input);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Char { value });
    assert!(lexer.diagnostics().is_empty());
}

#[test]
fn empty_char_literal_is_rejected() {
    let mut lexer = Lexer::new("''");
    let token = lexer.next_token();
    assert!(token.is_error());
    assert_eq!(lexer.diagnostics().len(), 1);
}

#[test]
fn newline_inside_char_literal_is_rejected() {
    let mut lexer = Lexer::new("'\n'");
    let token = lexer.next_token();
    assert!(token.is_error());
    assert!(!lexer.diagnostics().is_empty());
}

#[test]
fn char_literal_requires_closing_quote() {
    let mut lexer = Lexer::new("'ab'");
    let token = lexer.next_token();
    assert!(token.is_error());
}

#[test]
fn text_block_round_trip() {
    let mut lexer = Lexer::new("\"\"\"hi\nthere\"\"\"");
    let token = lexer.next_token();
    assert_eq!(
        token.kind,
        TokenKind::TextBlock {
            value: "hi\nthere".into()
        }
    );
    assert!(lexer.diagnostics().is_empty());
    assert_eq!(lexer.line(), 2);
}

#[test]
fn unterminated_text_block() {
    let mut lexer = Lexer::new("\"\"\"open");
    let token = lexer.next_token();
    assert!(token.flags.contains(TokenFlags::INCOMPLETE));
    assert_eq!(lexer.diagnostics().len(), 1);
    assert_eq!(lexer.mode(), LexMode::Default);
}

#[test]
fn longest_match_wins_for_shift_assign() {
    assert_eq!(
        significant_kinds(">>>="),
        vec![TokenKind::UnsignedRightShiftAssign]
    );
    assert_eq!(
        significant_kinds("a >>>= b"),
        vec![
            TokenKind::Identifier("a".into()),
            TokenKind::UnsignedRightShiftAssign,
            TokenKind::Identifier("b".into()),
        ]
    );
}

#[test]
fn operator_prefix_fallbacks() {
    assert_eq!(
        significant_kinds(">>> >>= >> >= >"),
        vec![
            TokenKind::UnsignedRightShift,
            TokenKind::RightShiftAssign,
            TokenKind::RightShift,
            TokenKind::GreaterEqual,
            TokenKind::Greater,
        ]
    );
    assert_eq!(
        significant_kinds("... .. ."),
        vec![TokenKind::Ellipsis, TokenKind::Dot, TokenKind::Dot, TokenKind::Dot]
    );
}

#[test]
fn unknown_character_becomes_error_token() {
    let mut lexer = Lexer::new("#");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Unknown);
    assert!(token.is_error());
    assert_eq!(lexer.diagnostics().len(), 1);
    assert!(lexer.next_token().is_eof());
}

#[test]
fn forward_progress_on_arbitrary_input() {
    let input = "#`\\ junk \u{7}\u{7} 0x 1__2 \"open";
    let mut lexer = Lexer::new(input);
    let mut last_offset = 0;
    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        assert!(
            lexer.offset() > last_offset,
            "lexer stalled at offset {last_offset}"
        );
        last_offset = lexer.offset();
    }
}

#[test]
fn offsets_are_monotonic_across_tokens() {
    let tokens = lex_all("int x = 1 + 2; // done\n\"s\"");
    let mut previous_end = 0;
    for token in tokens {
        assert!(token.span.start >= previous_end);
        assert!(token.span.start <= token.span.end);
        previous_end = token.span.start;
    }
}

#[test]
fn lookahead_matches_subsequent_consumption() {
    let input = "public static void main(String[] args)";
    let mut lexer = Lexer::new(input);
    let peeked: Vec<_> = (1..=8).map(|k| lexer.lookahead(k)).collect();
    let consumed: Vec<_> = (0..8).map(|_| lexer.next_token()).collect();
    assert_eq!(peeked, consumed);

    let direct: Vec<_> = {
        let mut fresh = Lexer::new(input);
        (0..8).map(|_| fresh.next_token()).collect()
    };
    assert_eq!(consumed, direct);
}

#[test]
#[should_panic(expected = "lookahead distance")]
fn lookahead_zero_is_a_caller_bug() {
    let mut lexer = Lexer::new("x");
    lexer.lookahead(0);
}

#[test]
fn snapshot_restore_replays_identically() {
    let mut lexer = Lexer::new("int a = 0x; \"unterminated");
    lexer.next_token();
    lexer.next_token();
    let snapshot = lexer.snapshot();
    let diagnostics_at_snapshot = lexer.diagnostics().to_vec();

    let first_run: Vec<_> = (0..6).map(|_| lexer.next_token()).collect();
    let diagnostics_after = lexer.diagnostics().to_vec();

    lexer.restore(&snapshot);
    assert_eq!(lexer.offset(), snapshot.offset());
    assert_eq!(lexer.diagnostics(), diagnostics_at_snapshot.as_slice());

    let second_run: Vec<_> = (0..6).map(|_| lexer.next_token()).collect();
    assert_eq!(first_run, second_run);
    assert_eq!(lexer.diagnostics(), diagnostics_after.as_slice());
}

#[test]
fn snapshot_preserves_lookahead_buffer() {
    let mut lexer = Lexer::new("a b c d");
    lexer.lookahead(3);
    let snapshot = lexer.snapshot();
    let first = lexer.next_token();
    lexer.next_token();
    lexer.restore(&snapshot);
    assert_eq!(lexer.next_token(), first);
}

#[test]
#[should_panic(expected = "different lexer instance")]
fn restore_rejects_foreign_snapshot() {
    let source = "x";
    let other = Lexer::new(source).snapshot();
    let mut lexer = Lexer::new(source);
    lexer.restore(&other);
}

#[test]
fn eof_is_terminal_and_stable() {
    let mut lexer = Lexer::new("x");
    while !lexer.next_token().is_eof() {}
    let first_eof = lexer.next_token();
    let second_eof = lexer.next_token();
    assert!(first_eof.is_eof());
    assert_eq!(first_eof, second_eof);
    assert_eq!(first_eof.span.start as usize, 1);
    assert_eq!(first_eof.span.end as usize, 1);
    assert!(first_eof.lexeme.is_empty());
}

#[test]
fn mode_stack_is_exposed_and_floored() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.mode(), LexMode::Default);
    assert_eq!(lexer.push_mode(LexMode::InString), LexMode::Default);
    assert_eq!(lexer.mode(), LexMode::InString);
    assert_eq!(lexer.pop_mode(), LexMode::InString);
    // Popping the floor is a no-op.
    assert_eq!(lexer.pop_mode(), LexMode::Default);
    assert_eq!(lexer.mode(), LexMode::Default);
}

#[test]
fn source_id_is_echoed_back() {
    let lexer = Lexer::with_source_id("", "src/Main.jav");
    assert_eq!(lexer.source_id(), Some("src/Main.jav"));
    assert_eq!(lexer.total_length(), Some(0));
    assert_eq!(Lexer::new("").source_id(), None);
}

#[test]
fn crlf_counts_as_one_line_boundary() {
    let mut lexer = Lexer::new("a\r\nb");
    let a = lexer.next_token();
    assert_eq!((a.line, a.column), (1, 1));
    lexer.next_token(); // whitespace trivia
    let b = lexer.next_token();
    assert_eq!((b.line, b.column), (2, 1));
}
