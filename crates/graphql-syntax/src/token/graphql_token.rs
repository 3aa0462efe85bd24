use crate::token::GraphQLTokenKind;

/// A GraphQL token with its position in the source body.
///
/// `start` and `end` are absolute byte offsets forming the half-open
/// interval `[start, end)`. `line` and `column` are 1-indexed physical
/// coordinates of `start` (the column counts characters).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLToken {
    pub kind: GraphQLTokenKind,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,

    /// The decoded payload for `Name`, `IntValue`, `FloatValue`,
    /// `StringValue`, `BlockStringValue`, and `Comment` tokens. `None`
    /// for every other kind.
    ///
    /// Numbers keep their raw source text; strings hold their unescaped
    /// (or dedented) content; comments exclude the leading `#`.
    pub value: Option<String>,
}

impl GraphQLToken {
    /// Convenience constructor for a token without a payload.
    pub fn new(
        kind: GraphQLTokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            line,
            column,
            value: None,
        }
    }

    /// Convenience constructor for a token that carries a payload.
    pub fn with_value(
        kind: GraphQLTokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            line,
            column,
            value: Some(value.into()),
        }
    }

    /// The start-of-file token every lexer begins on.
    pub fn sof() -> Self {
        Self::new(GraphQLTokenKind::Sof, 0, 0, 0, 0)
    }

    /// Returns the payload, or `""` for kinds without one.
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Returns `true` if this is a `Name` token whose text is `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == GraphQLTokenKind::Name && self.value_str() == keyword
    }

    /// Describes this token for error messages, e.g. `Name "foo"`,
    /// `"{"`, or `<EOF>`.
    pub fn description(&self) -> String {
        match &self.value {
            Some(value) if self.kind != GraphQLTokenKind::Comment => {
                format!("{} \"{value}\"", self.kind.description())
            },
            _ => self.kind.description(),
        }
    }
}
