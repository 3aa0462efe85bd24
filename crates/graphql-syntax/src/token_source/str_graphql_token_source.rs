//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes the body of a [`Source`].
//!
//! The lexer scans bytes and only decodes characters where a multi-byte
//! sequence matters (error messages, column counting). Token `start`/`end`
//! values are byte offsets into the body; `column` counts characters.
//!
//! Lexing stops at the first malformed token: the iterator yields one
//! `Err` and then ends.
//!
//! ```rust
//! use graphql_syntax::token::GraphQLTokenKind;
//! use graphql_syntax::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.map(|token| token.kind))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name,
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::block_string::dedent_block_string_value;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLError;
use crate::GraphQLErrorKind;
use crate::GraphQLErrorNote;
use crate::IntoSource;
use crate::Source;
use std::sync::Arc;

/// Lexes GraphQL tokens (comments included) from a [`Source`] body.
pub struct StrGraphQLTokenSource {
    source: Arc<Source>,

    /// Byte offset of the next unread byte.
    pos: usize,

    /// Current 1-indexed physical line.
    line: usize,

    /// Byte offset on the current line whose column is `column`. Columns
    /// are counted forward from here so each byte is scanned once.
    column_pos: usize,
    column: usize,

    /// Set once `Eof` or an error has been yielded.
    finished: bool,
}

impl StrGraphQLTokenSource {
    pub fn new(source: impl IntoSource) -> Self {
        Self {
            source: source.into_source(),
            pos: 0,
            line: 1,
            column_pos: 0,
            column: 1,
            finished: false,
        }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> Result<GraphQLToken, GraphQLError> {
        let source = Arc::clone(&self.source);
        let body = source.body();
        let bytes = body.as_bytes();

        self.skip_whitespace(body);
        let start = self.pos;
        let line = self.line;
        let column = self.column_of(body, start);

        let Some(&byte) = bytes.get(start) else {
            return Ok(GraphQLToken::new(
                GraphQLTokenKind::Eof,
                body.len(),
                body.len(),
                line,
                column,
            ));
        };

        let punctuator = match byte {
            b'!' => Some(GraphQLTokenKind::Bang),
            b'$' => Some(GraphQLTokenKind::Dollar),
            b'&' => Some(GraphQLTokenKind::Ampersand),
            b'(' => Some(GraphQLTokenKind::ParenOpen),
            b')' => Some(GraphQLTokenKind::ParenClose),
            b':' => Some(GraphQLTokenKind::Colon),
            b'=' => Some(GraphQLTokenKind::Equals),
            b'@' => Some(GraphQLTokenKind::At),
            b'[' => Some(GraphQLTokenKind::SquareBracketOpen),
            b']' => Some(GraphQLTokenKind::SquareBracketClose),
            b'{' => Some(GraphQLTokenKind::CurlyBraceOpen),
            b'|' => Some(GraphQLTokenKind::Pipe),
            b'}' => Some(GraphQLTokenKind::CurlyBraceClose),
            _ => None,
        };
        if let Some(kind) = punctuator {
            self.pos = start + 1;
            return Ok(GraphQLToken::new(kind, start, start + 1, line, column));
        }

        match byte {
            b'#' => Ok(self.lex_comment(body, start, line, column)),
            b'.' if bytes.get(start + 1) == Some(&b'.')
                && bytes.get(start + 2) == Some(&b'.') =>
            {
                self.pos = start + 3;
                Ok(GraphQLToken::new(
                    GraphQLTokenKind::Ellipsis,
                    start,
                    start + 3,
                    line,
                    column,
                ))
            },
            b'"' if bytes.get(start + 1) == Some(&b'"')
                && bytes.get(start + 2) == Some(&b'"') =>
            {
                self.lex_block_string(body, start, line, column)
            },
            b'"' => self.lex_string(body, start, line, column),
            b'-' | b'0'..=b'9' => self.lex_number(body, start, line, column),
            b if is_name_start(b) => Ok(self.lex_name(body, start, line, column)),
            _ => Err(self.unexpected_character(body, start)),
        }
    }

    // =========================================================================
    // Whitespace and position tracking
    // =========================================================================

    /// Skips ignored characters: spaces, tabs, commas, line terminators,
    /// and the byte-order mark.
    fn skip_whitespace(&mut self, body: &str) {
        let bytes = body.as_bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            match byte {
                b' ' | b'\t' | b',' => self.pos += 1,
                b'\n' => {
                    self.pos += 1;
                    self.start_new_line();
                },
                b'\r' => {
                    self.pos +=
                        if bytes.get(self.pos + 1) == Some(&b'\n') { 2 } else { 1 };
                    self.start_new_line();
                },
                _ if body[self.pos..].starts_with('\u{FEFF}') => {
                    self.pos += '\u{FEFF}'.len_utf8();
                },
                _ => break,
            }
        }
    }

    fn start_new_line(&mut self) {
        self.start_line_at(self.pos);
    }

    fn start_line_at(&mut self, line_start: usize) {
        self.line += 1;
        self.column_pos = line_start;
        self.column = 1;
    }

    /// 1-indexed character column of byte offset `pos` on the current line.
    ///
    /// `pos` must not precede the previously queried offset.
    fn column_of(&mut self, body: &str, pos: usize) -> usize {
        let skipped = &body[self.column_pos..pos];
        self.column +=
            if skipped.is_ascii() {
                skipped.len()
            } else {
                skipped.chars().count()
            };
        self.column_pos = pos;
        self.column
    }

    fn error(
        &mut self,
        position: usize,
        description: impl AsRef<str>,
        kind: GraphQLErrorKind,
    ) -> GraphQLError {
        self.finished = true;
        GraphQLError::syntax_error(&self.source, position, description, kind)
    }

    // =========================================================================
    // Token lexers
    // =========================================================================

    /// Lexes a `#` comment. The comment ends before the first line
    /// terminator or other control character (tab excepted).
    fn lex_comment(
        &mut self,
        body: &str,
        start: usize,
        line: usize,
        column: usize,
    ) -> GraphQLToken {
        let bytes = body.as_bytes();
        let content_start = start + 1;
        let line_end = memchr::memchr2(b'\n', b'\r', &bytes[content_start..])
            .map_or(bytes.len(), |i| content_start + i);
        let end = bytes[content_start..line_end]
            .iter()
            .position(|b| *b < 0x20 && *b != b'\t')
            .map_or(line_end, |i| content_start + i);

        self.pos = end;
        GraphQLToken::with_value(
            GraphQLTokenKind::Comment,
            start,
            end,
            line,
            column,
            &body[content_start..end],
        )
    }

    /// Lexes a name matching `[_A-Za-z][_0-9A-Za-z]*`.
    fn lex_name(
        &mut self,
        body: &str,
        start: usize,
        line: usize,
        column: usize,
    ) -> GraphQLToken {
        let end = body.as_bytes()[start + 1..]
            .iter()
            .position(|b| !is_name_continue(*b))
            .map_or(body.len(), |i| start + 1 + i);

        self.pos = end;
        GraphQLToken::with_value(
            GraphQLTokenKind::Name,
            start,
            end,
            line,
            column,
            &body[start..end],
        )
    }

    /// Lexes an `IntValue` or `FloatValue`:
    ///
    /// ```text
    /// -? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?
    /// ```
    ///
    /// A number may not be directly followed by `.` or a name-start
    /// character.
    fn lex_number(
        &mut self,
        body: &str,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<GraphQLToken, GraphQLError> {
        let bytes = body.as_bytes();
        let mut pos = start;
        let mut is_float = false;

        if bytes.get(pos) == Some(&b'-') {
            pos += 1;
        }

        if bytes.get(pos) == Some(&b'0') {
            pos += 1;
            if bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                let err = self.error(
                    pos,
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        print_char_code(body, pos),
                    ),
                    GraphQLErrorKind::InvalidNumber,
                );
                return Err(err.with_note(GraphQLErrorNote::help(
                    "Leading zeros are not allowed in numbers",
                )));
            }
        } else {
            pos = self.read_digits(body, pos)?;
        }

        if bytes.get(pos) == Some(&b'.') {
            is_float = true;
            pos = self.read_digits(body, pos + 1)?;
        }

        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            is_float = true;
            pos += 1;
            if matches!(bytes.get(pos), Some(b'+' | b'-')) {
                pos += 1;
            }
            pos = self.read_digits(body, pos)?;
        }

        if bytes.get(pos).is_some_and(|b| *b == b'.' || is_name_start(*b)) {
            return Err(self.error(
                pos,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    print_char_code(body, pos),
                ),
                GraphQLErrorKind::InvalidNumber,
            ));
        }

        self.pos = pos;
        let kind =
            if is_float {
                GraphQLTokenKind::FloatValue
            } else {
                GraphQLTokenKind::IntValue
            };
        Ok(GraphQLToken::with_value(
            kind,
            start,
            pos,
            line,
            column,
            &body[start..pos],
        ))
    }

    /// Consumes one or more ASCII digits starting at `pos` and returns the
    /// offset just past them.
    fn read_digits(
        &mut self,
        body: &str,
        pos: usize,
    ) -> Result<usize, GraphQLError> {
        let bytes = body.as_bytes();
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return Err(self.error(
                pos,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    print_char_code(body, pos),
                ),
                GraphQLErrorKind::InvalidNumber,
            ));
        }
        Ok(bytes[pos..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map_or(bytes.len(), |i| pos + i))
    }

    /// Lexes a single-line `"..."` string, decoding escape sequences.
    fn lex_string(
        &mut self,
        body: &str,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<GraphQLToken, GraphQLError> {
        let bytes = body.as_bytes();
        let mut pos = start + 1;
        let mut chunk_start = pos;
        let mut value = String::new();

        while let Some(&byte) = bytes.get(pos) {
            match byte {
                b'\n' | b'\r' => break,
                b'"' => {
                    value.push_str(&body[chunk_start..pos]);
                    self.pos = pos + 1;
                    return Ok(GraphQLToken::with_value(
                        GraphQLTokenKind::StringValue,
                        start,
                        pos + 1,
                        line,
                        column,
                        value,
                    ));
                },
                b'\\' => {
                    value.push_str(&body[chunk_start..pos]);
                    pos += 1;
                    let Some(&escape) = bytes.get(pos) else {
                        break;
                    };
                    match escape {
                        b'"' => value.push('"'),
                        b'/' => value.push('/'),
                        b'\\' => value.push('\\'),
                        b'b' => value.push('\u{0008}'),
                        b'f' => value.push('\u{000C}'),
                        b'n' => value.push('\n'),
                        b'r' => value.push('\r'),
                        b't' => value.push('\t'),
                        b'u' => {
                            let (ch, consumed) =
                                self.read_unicode_escape(body, pos)?;
                            value.push(ch);
                            pos += consumed;
                        },
                        _ => {
                            let escaped = body[pos..].chars().next().unwrap_or('\0');
                            return Err(self.error(
                                pos,
                                format!(
                                    "Invalid character escape sequence: \\{escaped}.",
                                ),
                                GraphQLErrorKind::InvalidString,
                            ));
                        },
                    }
                    pos += 1;
                    chunk_start = pos;
                },
                b if b < 0x20 && b != b'\t' => {
                    return Err(self.error(
                        pos,
                        format!(
                            "Invalid character within String: {}.",
                            print_char_code(body, pos),
                        ),
                        GraphQLErrorKind::InvalidString,
                    ));
                },
                _ => pos += 1,
            }
        }

        Err(self.unterminated_string(pos, start))
    }

    /// Decodes the `\uXXXX` escape whose `u` is at `pos`.
    ///
    /// A high surrogate followed by an escaped low surrogate decodes to a
    /// single scalar value. Returns the character and the number of bytes
    /// consumed after the `u`.
    fn read_unicode_escape(
        &mut self,
        body: &str,
        pos: usize,
    ) -> Result<(char, usize), GraphQLError> {
        let Some(code) = read_hex4(body, pos + 1) else {
            return Err(self.invalid_unicode_escape(body, pos));
        };

        if let Some(ch) = char::from_u32(code) {
            return Ok((ch, 4));
        }

        let is_high_surrogate = (0xD800..=0xDBFF).contains(&code);
        if is_high_surrogate
            && body[pos + 5..].starts_with("\\u")
            && let Some(low) = read_hex4(body, pos + 7)
            && (0xDC00..=0xDFFF).contains(&low)
        {
            let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
            if let Some(ch) = char::from_u32(combined) {
                return Ok((ch, 10));
            }
        }

        Err(self.invalid_unicode_escape(body, pos))
    }

    fn invalid_unicode_escape(&mut self, body: &str, pos: usize) -> GraphQLError {
        let sequence: String = body[pos + 1..].chars().take(4).collect();
        self.error(
            pos,
            format!("Invalid character escape sequence: \\u{sequence}."),
            GraphQLErrorKind::InvalidString,
        )
    }

    /// Lexes a `"""` block string. The raw content is dedented to produce
    /// the token value.
    fn lex_block_string(
        &mut self,
        body: &str,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<GraphQLToken, GraphQLError> {
        let bytes = body.as_bytes();
        let mut pos = start + 3;
        let mut chunk_start = pos;
        let mut raw = String::new();

        while let Some(&byte) = bytes.get(pos) {
            match byte {
                b'"' if body[pos..].starts_with("\"\"\"") => {
                    raw.push_str(&body[chunk_start..pos]);
                    self.pos = pos + 3;
                    return Ok(GraphQLToken::with_value(
                        GraphQLTokenKind::BlockStringValue,
                        start,
                        pos + 3,
                        line,
                        column,
                        dedent_block_string_value(&raw),
                    ));
                },
                b'\n' => {
                    pos += 1;
                    self.start_line_at(pos);
                },
                b'\r' => {
                    pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
                    self.start_line_at(pos);
                },
                b'\\' if body[pos + 1..].starts_with("\"\"\"") => {
                    raw.push_str(&body[chunk_start..pos]);
                    raw.push_str("\"\"\"");
                    pos += 4;
                    chunk_start = pos;
                },
                b if b < 0x20 && b != b'\t' => {
                    return Err(self.error(
                        pos,
                        format!(
                            "Invalid character within String: {}.",
                            print_char_code(body, pos),
                        ),
                        GraphQLErrorKind::InvalidString,
                    ));
                },
                _ => pos += 1,
            }
        }

        Err(self.unterminated_string(pos, start))
    }

    fn unterminated_string(&mut self, pos: usize, start: usize) -> GraphQLError {
        self.error(
            pos,
            "Unterminated string.",
            GraphQLErrorKind::UnterminatedString,
        ).with_note(GraphQLErrorNote::general_at("String started here", start))
    }

    fn unexpected_character(&mut self, body: &str, pos: usize) -> GraphQLError {
        let ch = body[pos..].chars().next().unwrap_or('\0');
        let description =
            if (ch as u32) < 0x20 && !matches!(ch, '\t' | '\n' | '\r') {
                format!(
                    "Cannot contain the invalid character {}.",
                    print_char_code(body, pos),
                )
            } else if ch == '\'' {
                "Unexpected single quote character ('), did you mean to use \
                 a double quote (\")?".to_string()
            } else {
                format!(
                    "Cannot parse the unexpected character {}.",
                    print_char_code(body, pos),
                )
            };
        self.error(pos, description, GraphQLErrorKind::UnexpectedCharacter)
    }
}

impl Iterator for StrGraphQLTokenSource {
    type Item = Result<GraphQLToken, GraphQLError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if let Ok(GraphQLToken { kind: GraphQLTokenKind::Eof, .. }) = &token {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

/// Parses exactly four hex digits starting at byte `pos`.
fn read_hex4(body: &str, pos: usize) -> Option<u32> {
    let digits = body.get(pos..pos + 4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Renders the character at byte `pos` for use in an error message.
///
/// ASCII characters are rendered as a JSON string literal (`"a"`,
/// `"\n"`, `"\u0007"`); everything else as `"\uXXXX"`; end of input as
/// `<EOF>`.
fn print_char_code(body: &str, pos: usize) -> String {
    let Some(ch) = body.get(pos..).and_then(|rest| rest.chars().next()) else {
        return "<EOF>".to_string();
    };
    let code = ch as u32;
    if code >= 0x7F {
        return format!("\"\\u{code:04X}\"");
    }
    match ch {
        '"' => "\"\\\"\"".to_string(),
        '\\' => "\"\\\\\"".to_string(),
        '\u{0008}' => "\"\\b\"".to_string(),
        '\u{000C}' => "\"\\f\"".to_string(),
        '\n' => "\"\\n\"".to_string(),
        '\r' => "\"\\r\"".to_string(),
        '\t' => "\"\\t\"".to_string(),
        _ if code < 0x20 => format!("\"\\u{code:04x}\""),
        _ => format!("\"{ch}\""),
    }
}
