/// Categorizes a [`GraphQLError`](crate::GraphQLError) for programmatic
/// handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// The full human-readable text lives in the error's `message`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphQLErrorKind {
    /// A character that cannot begin any token (or a control character
    /// where none is allowed).
    ///
    /// ```text
    /// { field ? }
    ///         ^ Cannot parse the unexpected character "?".
    /// ```
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// A malformed numeric literal (leading zeros, missing digits).
    ///
    /// ```text
    /// { field(arg: 007) }
    ///                ^ Invalid number, unexpected digit after 0: "0".
    /// ```
    #[error("invalid number")]
    InvalidNumber,

    /// A malformed escape sequence or disallowed character inside a
    /// string literal.
    #[error("invalid string")]
    InvalidString,

    /// A string or block string reached end of input (or, for quoted
    /// strings, a line terminator) before its closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// The parser expected one thing and found another.
    ///
    /// `expected` is `None` for bare "Unexpected ..." errors where the
    /// grammar allowed several alternatives.
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        expected: Option<String>,
        found: String,
    },

    /// A name used where the grammar reserves it (e.g. `true` as an enum
    /// value, `on` as a fragment name).
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },

    /// Input nesting (values, selection sets, type references) exceeded
    /// the configured maximum depth.
    #[error("nesting depth limit of {limit} exceeded")]
    NestingLimitExceeded {
        limit: usize,
    },

    /// Invalid construction-time configuration (e.g. a non-positive
    /// source location offset).
    #[error("invalid configuration")]
    InvalidConfiguration,
}

impl GraphQLErrorKind {
    /// Returns `true` for errors caused by malformed input text.
    pub fn is_syntax_error(&self) -> bool {
        match self {
            GraphQLErrorKind::UnexpectedCharacter
            | GraphQLErrorKind::InvalidNumber
            | GraphQLErrorKind::InvalidString
            | GraphQLErrorKind::UnterminatedString
            | GraphQLErrorKind::UnexpectedToken { .. }
            | GraphQLErrorKind::ReservedName { .. } => true,

            GraphQLErrorKind::NestingLimitExceeded { .. }
            | GraphQLErrorKind::InvalidConfiguration => false,
        }
    }
}
