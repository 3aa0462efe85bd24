use crate::GraphQLError;
use std::sync::Arc;

/// A 1-indexed `(line, column)` pair used to shift positions reported
/// for a [`Source`] whose body was extracted from a larger file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LocationOffset {
    pub line: usize,
    pub column: usize,
}

impl Default for LocationOffset {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// A 1-indexed line/column location within a [`Source`] body.
///
/// Columns count characters (not bytes) from the start of the line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

/// An immutable GraphQL text buffer along with a human-readable name and
/// a [`LocationOffset`].
///
/// A `Source` is shared (via [`Arc`]) by every token, [`Loc`](crate::Loc),
/// and [`GraphQLError`] produced while lexing or parsing it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    body: String,
    name: String,
    location_offset: LocationOffset,
}

impl Source {
    /// The name given to sources that were not explicitly named.
    pub const DEFAULT_NAME: &'static str = "GraphQL Request";

    /// Creates a source with the default name and no location offset.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: Self::DEFAULT_NAME.to_string(),
            location_offset: LocationOffset::default(),
        }
    }

    /// Creates a source with the given display name (typically a file
    /// path).
    pub fn with_name(
        body: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
            location_offset: LocationOffset::default(),
        }
    }

    /// Creates a source whose positions are reported relative to
    /// `(line, column)` of some enclosing file.
    ///
    /// Both values are 1-indexed and must be strictly positive.
    pub fn with_location_offset(
        body: impl Into<String>,
        name: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Result<Self, GraphQLError> {
        if line == 0 {
            return Err(GraphQLError::invalid_configuration(
                "line in locationOffset is 1-indexed and must be positive.",
            ));
        }
        if column == 0 {
            return Err(GraphQLError::invalid_configuration(
                "column in locationOffset is 1-indexed and must be positive.",
            ));
        }
        Ok(Self {
            body: body.into(),
            name: name.into(),
            location_offset: LocationOffset { line, column },
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location_offset(&self) -> LocationOffset {
        self.location_offset
    }

    /// Computes the physical 1-indexed line and column of a byte
    /// `position` within this source's body.
    ///
    /// `\r\n`, `\n`, and `\r` each terminate one line. Positions past the
    /// end of the body are clamped to the end.
    pub fn location_of(&self, position: usize) -> SourceLocation {
        let position = clamp_to_char_boundary(&self.body, position);
        let bytes = self.body.as_bytes();
        let mut line = 1;
        let mut line_start = 0;
        let mut i = 0;
        while i < position {
            match bytes[i] {
                b'\n' => {
                    line += 1;
                    line_start = i + 1;
                },
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line += 1;
                    line_start = i + 1;
                },
                _ => (),
            }
            i += 1;
        }
        let line_start = line_start.min(position);
        SourceLocation {
            line,
            column: self.body[line_start..position].chars().count() + 1,
        }
    }

    /// Maps a physical location in this body onto the enclosing file by
    /// applying the [`LocationOffset`].
    ///
    /// The column offset only shifts locations on the body's first line.
    pub fn offset_location(&self, location: SourceLocation) -> SourceLocation {
        let column_offset =
            if location.line == 1 {
                self.location_offset.column - 1
            } else {
                0
            };
        SourceLocation {
            line: location.line + self.location_offset.line - 1,
            column: location.column + column_offset,
        }
    }

    /// Returns the text of the 1-indexed physical `line`, without its
    /// terminator.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        split_lines(&self.body).nth(line.checked_sub(1)?)
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

/// Conversion into a shared [`Source`], accepted by every parse entry
/// point so callers may pass either raw text or a prepared source.
pub trait IntoSource {
    fn into_source(self) -> Arc<Source>;
}

impl IntoSource for &str {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self))
    }
}

impl IntoSource for String {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self))
    }
}

impl IntoSource for &String {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self.as_str()))
    }
}

impl IntoSource for Source {
    fn into_source(self) -> Arc<Source> {
        Arc::new(self)
    }
}

impl IntoSource for Arc<Source> {
    fn into_source(self) -> Arc<Source> {
        self
    }
}

impl IntoSource for &Arc<Source> {
    fn into_source(self) -> Arc<Source> {
        Arc::clone(self)
    }
}

/// Splits on `\r\n`, `\n`, or `\r`, the line terminators GraphQL
/// recognizes.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(idx) => {
                let terminator_len =
                    if current[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[idx + terminator_len..]);
                Some(&current[..idx])
            },
            None => {
                rest = None;
                Some(current)
            },
        }
    })
}

fn clamp_to_char_boundary(text: &str, position: usize) -> usize {
    let mut position = position.min(text.len());
    while !text.is_char_boundary(position) {
        position -= 1;
    }
    position
}
