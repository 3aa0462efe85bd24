use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLError;
use crate::GraphQLErrorKind;
use crate::GraphQLErrorNoteKind;

fn lex_all(source: &str) -> Vec<GraphQLToken> {
    StrGraphQLTokenSource::new(source)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|err| panic!("failed to lex {source:?}: {err}"))
}

fn kinds(source: &str) -> Vec<GraphQLTokenKind> {
    lex_all(source).into_iter().map(|token| token.kind).collect()
}

fn values(source: &str) -> Vec<(GraphQLTokenKind, String)> {
    lex_all(source)
        .into_iter()
        .filter(|token| token.kind != GraphQLTokenKind::Eof)
        .map(|token| (token.kind, token.value_str().to_string()))
        .collect()
}

fn lex_err(source: &str) -> GraphQLError {
    for result in StrGraphQLTokenSource::new(source) {
        if let Err(err) = result {
            return err;
        }
    }
    panic!("expected lexing {source:?} to fail");
}

// =============================================================================
// Punctuators, names, and numbers
// =============================================================================

/// Verifies that every punctuator is recognized and that ignored
/// characters (spaces, tabs, commas, line terminators) are skipped.
///
/// See [Punctuators](https://spec.graphql.org/October2021/#Punctuator).
#[test]
fn lexes_punctuators() {
    use GraphQLTokenKind::*;
    assert_eq!(
        kinds("! $ & ( ) ...\t: = @ [ ] {,|\n}"),
        vec![
            Bang,
            Dollar,
            Ampersand,
            ParenOpen,
            ParenClose,
            Ellipsis,
            Colon,
            Equals,
            At,
            SquareBracketOpen,
            SquareBracketClose,
            CurlyBraceOpen,
            Pipe,
            CurlyBraceClose,
            Eof,
        ],
    );
}

#[test]
fn lexes_names_and_numbers() {
    use GraphQLTokenKind::*;
    assert_eq!(
        values("foo _bar9 0 -12 1.5 -0.25e10 3E-2 4e+1"),
        vec![
            (Name, "foo".to_string()),
            (Name, "_bar9".to_string()),
            (IntValue, "0".to_string()),
            (IntValue, "-12".to_string()),
            (FloatValue, "1.5".to_string()),
            (FloatValue, "-0.25e10".to_string()),
            (FloatValue, "3E-2".to_string()),
            (FloatValue, "4e+1".to_string()),
        ],
    );
}

#[test]
fn empty_input_is_just_eof() {
    let tokens = lex_all("");
    assert_eq!(tokens, vec![GraphQLToken::new(GraphQLTokenKind::Eof, 0, 0, 1, 1)]);
}

/// Verifies that the iterator ends after yielding `Eof`.
#[test]
fn iteration_stops_after_eof() {
    let mut source = StrGraphQLTokenSource::new("a");
    assert!(matches!(source.next(), Some(Ok(t)) if t.kind == GraphQLTokenKind::Name));
    assert!(matches!(source.next(), Some(Ok(t)) if t.kind == GraphQLTokenKind::Eof));
    assert!(source.next().is_none());
    assert!(source.next().is_none());
}

/// Verifies that lexing stops after the first error.
#[test]
fn iteration_stops_after_error() {
    let mut source = StrGraphQLTokenSource::new("a ? b");
    assert!(matches!(source.next(), Some(Ok(_))));
    assert!(matches!(source.next(), Some(Err(_))));
    assert!(source.next().is_none());
}

/// Verifies that a leading zero followed by a digit is rejected at the
/// position of the extra digit.
///
/// See [Int Value](https://spec.graphql.org/October2021/#IntValue).
#[test]
fn rejects_leading_zeros() {
    let err = lex_err("007");
    assert_eq!(
        err.message(),
        "Syntax Error: Invalid number, unexpected digit after 0: \"0\".",
    );
    assert_eq!(err.positions(), &[1]);
    assert_eq!(err.kind(), &GraphQLErrorKind::InvalidNumber);
    assert_eq!(err.notes().len(), 1);
    assert_eq!(err.notes()[0].kind, GraphQLErrorNoteKind::Help);
}

#[test]
fn rejects_incomplete_numbers() {
    let cases = [
        ("1.", 2, "<EOF>"),
        ("-", 1, "<EOF>"),
        ("1.x", 2, "\"x\""),
        ("1e", 2, "<EOF>"),
        ("1e+", 3, "<EOF>"),
    ];
    for (source, position, found) in cases {
        let err = lex_err(source);
        assert_eq!(
            err.message(),
            format!("Syntax Error: Invalid number, expected digit but got: {found}."),
            "{source:?}",
        );
        assert_eq!(err.positions(), &[position], "{source:?}");
    }
}

/// Verifies that a number may not run straight into a name or a dot.
#[test]
fn rejects_names_and_dots_after_numbers() {
    let err = lex_err("12abc");
    assert_eq!(
        err.message(),
        "Syntax Error: Invalid number, expected digit but got: \"a\".",
    );
    assert_eq!(err.positions(), &[2]);

    let err = lex_err("1.2.3");
    assert_eq!(
        err.message(),
        "Syntax Error: Invalid number, expected digit but got: \".\".",
    );
    assert_eq!(err.positions(), &[3]);
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies escape sequence decoding.
///
/// See [String Value](https://spec.graphql.org/October2021/#StringValue).
#[test]
fn decodes_string_escapes() {
    let tokens = lex_all(r#""a\"b\\c\/\n\t\u00e9\u0041""#);
    assert_eq!(tokens[0].kind, GraphQLTokenKind::StringValue);
    assert_eq!(tokens[0].value_str(), "a\"b\\c/\n\t\u{e9}A");
}

#[test]
fn string_keeps_non_ascii_text() {
    let tokens = lex_all("\"héllo ☃\"");
    assert_eq!(tokens[0].value_str(), "héllo ☃");
    assert_eq!(tokens[0].end, "\"héllo ☃\"".len());
}

/// Verifies that an escaped surrogate pair decodes to one character.
#[test]
fn decodes_surrogate_pairs() {
    let tokens = lex_all(r#""\uD83D\uDE00!""#);
    assert_eq!(tokens[0].value_str(), "\u{1F600}!");
}

#[test]
fn rejects_lone_surrogates() {
    let err = lex_err(r#""\uD83D""#);
    assert_eq!(
        err.message(),
        "Syntax Error: Invalid character escape sequence: \\uD83D.",
    );
    assert_eq!(err.positions(), &[2]);
    assert_eq!(err.kind(), &GraphQLErrorKind::InvalidString);
}

#[test]
fn rejects_bad_escapes() {
    let err = lex_err(r#""\x""#);
    assert_eq!(
        err.message(),
        "Syntax Error: Invalid character escape sequence: \\x.",
    );
    assert_eq!(err.positions(), &[2]);

    let err = lex_err(r#""\u12G4""#);
    assert_eq!(
        err.message(),
        "Syntax Error: Invalid character escape sequence: \\u12G4.",
    );
}

/// Verifies that an unterminated string is reported at the point lexing
/// gave up, with a note pointing at the opening quote.
#[test]
fn reports_unterminated_strings() {
    let err = lex_err("\"abc");
    assert_eq!(err.message(), "Syntax Error: Unterminated string.");
    assert_eq!(err.kind(), &GraphQLErrorKind::UnterminatedString);
    assert_eq!(err.positions(), &[4]);
    assert_eq!(err.notes()[0].message, "String started here");
    assert_eq!(err.notes()[0].position, Some(0));

    let err = lex_err("\"ab\ncd\"");
    assert_eq!(err.positions(), &[3]);

    let err = lex_err("\"ab\\");
    assert_eq!(err.kind(), &GraphQLErrorKind::UnterminatedString);
}

#[test]
fn rejects_control_characters_in_strings() {
    let err = lex_err("\"a\u{1}\"");
    assert_eq!(
        err.message(),
        "Syntax Error: Invalid character within String: \"\\u0001\".",
    );
    assert_eq!(err.positions(), &[2]);
}

/// Verifies block string dedenting and `\"""` unescaping.
///
/// See [Block Strings](https://spec.graphql.org/October2021/#BlockStringCharacter).
#[test]
fn lexes_block_strings() {
    let tokens = lex_all("\"\"\"\n  hello\n    world\n\"\"\"");
    assert_eq!(tokens[0].kind, GraphQLTokenKind::BlockStringValue);
    assert_eq!(tokens[0].value_str(), "hello\n  world");

    let tokens = lex_all(r#""""a \""" b""""#);
    assert_eq!(tokens[0].value_str(), "a \"\"\" b");

    let tokens = lex_all(r#""""no \n escapes""""#);
    assert_eq!(tokens[0].value_str(), "no \\n escapes");
}

#[test]
fn reports_unterminated_block_strings() {
    let err = lex_err("\"\"\"abc\n");
    assert_eq!(err.message(), "Syntax Error: Unterminated string.");
    assert_eq!(err.positions(), &[7]);
    assert_eq!(err.locations()[0].line, 2);
}

// =============================================================================
// Comments and unexpected characters
// =============================================================================

/// Verifies that comments are emitted as tokens whose value excludes the
/// `#`.
#[test]
fn lexes_comments() {
    let tokens = lex_all("# hi\n{ }");
    assert_eq!(tokens[0].kind, GraphQLTokenKind::Comment);
    assert_eq!(tokens[0].value_str(), " hi");
    assert_eq!((tokens[0].start, tokens[0].end), (0, 4));
    assert_eq!(tokens[1].kind, GraphQLTokenKind::CurlyBraceOpen);
    assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
}

#[test]
fn unexpected_characters() {
    let cases = [
        ("?", "Syntax Error: Cannot parse the unexpected character \"?\"."),
        ("..", "Syntax Error: Cannot parse the unexpected character \".\"."),
        ("\u{7}", "Syntax Error: Cannot contain the invalid character \"\\u0007\"."),
        ("\u{203B}", "Syntax Error: Cannot parse the unexpected character \"\\u203B\"."),
        (
            "'",
            "Syntax Error: Unexpected single quote character ('), did you mean \
             to use a double quote (\")?",
        ),
    ];
    for (source, message) in cases {
        let err = lex_err(source);
        assert_eq!(err.message(), message, "{source:?}");
        assert_eq!(err.positions(), &[0], "{source:?}");
        assert_eq!(err.kind(), &GraphQLErrorKind::UnexpectedCharacter);
    }
}

// =============================================================================
// Positions
// =============================================================================

/// Verifies line/column tracking across `\n` and `\r\n`.
#[test]
fn tracks_lines_and_columns() {
    let tokens = lex_all("{\n  foo\r\n  bar }");
    let foo = &tokens[1];
    assert_eq!((foo.start, foo.end, foo.line, foo.column), (4, 7, 2, 3));
    let bar = &tokens[2];
    assert_eq!((bar.start, bar.line, bar.column), (11, 3, 3));
    let close = &tokens[3];
    assert_eq!((close.line, close.column), (3, 7));
}

#[test]
fn block_strings_advance_lines() {
    let tokens = lex_all("\"\"\"a\nb\"\"\" c");
    assert_eq!((tokens[1].line, tokens[1].column), (2, 6));
}

/// Verifies that a byte-order mark is ignored but counts as one column.
#[test]
fn skips_byte_order_mark() {
    let tokens = lex_all("\u{FEFF}a,b");
    assert_eq!((tokens[0].start, tokens[0].column), (3, 2));
    assert_eq!(tokens[1].start, 5);
}

#[test]
fn columns_count_characters() {
    let tokens = lex_all("\"é\" x");
    assert_eq!(tokens[1].start, 5);
    assert_eq!(tokens[1].column, 5);
}

/// Verifies columns stay exact across a long single line (the shape of a
/// minified document) with non-ASCII text ahead of most tokens, and that
/// they restart on the next line.
#[test]
fn columns_on_long_lines() {
    let count = 20_000;
    let source = format!("{{ a(x: \"é\") {}}}\n  b", "a ".repeat(count));
    let tokens = lex_all(&source);

    let close_paren = &tokens[6];
    assert_eq!(close_paren.kind, GraphQLTokenKind::ParenClose);
    assert_eq!((close_paren.start, close_paren.column), (11, 11));

    let names = &tokens[7..7 + count];
    for (i, token) in names.iter().enumerate() {
        assert_eq!(token.kind, GraphQLTokenKind::Name);
        assert_eq!(token.start, 13 + 2 * i);
        assert_eq!(token.column, 13 + 2 * i, "name #{i}");
    }

    let close_brace = &tokens[7 + count];
    assert_eq!(close_brace.kind, GraphQLTokenKind::CurlyBraceClose);
    assert_eq!((close_brace.line, close_brace.column), (1, 13 + 2 * count));

    let b = &tokens[8 + count];
    assert_eq!(b.value_str(), "b");
    assert_eq!((b.line, b.column), (2, 3));
}

/// Verifies columns restart after line breaks inside a block string.
#[test]
fn columns_after_multiline_block_string() {
    let tokens = lex_all("x \"\"\"é\r\n  é\nab\"\"\" yz");
    let yz = &tokens[2];
    assert_eq!(yz.value_str(), "yz");
    assert_eq!((yz.line, yz.column), (3, 7));
}
