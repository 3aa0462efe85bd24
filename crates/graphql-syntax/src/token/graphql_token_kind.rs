/// The kind of a GraphQL token.
///
/// Token payloads (names, the raw text of numbers, decoded string values,
/// comment text) live on [`GraphQLToken::value`](crate::token::GraphQLToken::value)
/// rather than in this enum, so kinds are cheap to copy and compare.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (`IntValue`
/// with value `"-123"`), not as separate minus and number tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Stream boundaries
    // =========================================================================
    /// Start of input. Always the first token a
    /// [`Lexer`](crate::Lexer) holds.
    Sof,
    /// End of input. Once reached, the lexer keeps returning it.
    Eof,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A name/identifier matching `[_A-Za-z][_0-9A-Za-z]*`.
    Name,
    /// An integer literal, including an optional leading `-`.
    IntValue,
    /// A float literal, including an optional leading `-`.
    FloatValue,
    /// A quoted string. The token value is the unescaped content.
    StringValue,
    /// A `"""`-delimited block string. The token value is the dedented
    /// content.
    BlockStringValue,

    // =========================================================================
    // Trivia
    // =========================================================================
    /// A `#` comment. The lexer records these but never hands them to the
    /// parser.
    Comment,
}

impl GraphQLTokenKind {
    /// Returns the string representation of this token if it is a
    /// punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Sof
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Name
            | GraphQLTokenKind::IntValue
            | GraphQLTokenKind::FloatValue
            | GraphQLTokenKind::StringValue
            | GraphQLTokenKind::BlockStringValue
            | GraphQLTokenKind::Comment => None,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `true` for the two string kinds, which may also serve as
    /// descriptions on type-system definitions.
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::StringValue | GraphQLTokenKind::BlockStringValue,
        )
    }

    /// Returns the short human-readable name used in error messages.
    ///
    /// Punctuators are quoted (`"{"`), everything else is named
    /// (`Name`, `Int`, `<EOF>`).
    pub fn description(&self) -> String {
        let name = match self {
            GraphQLTokenKind::Sof => "<SOF>",
            GraphQLTokenKind::Eof => "<EOF>",
            GraphQLTokenKind::Name => "Name",
            GraphQLTokenKind::IntValue => "Int",
            GraphQLTokenKind::FloatValue => "Float",
            GraphQLTokenKind::StringValue => "String",
            GraphQLTokenKind::BlockStringValue => "BlockString",
            GraphQLTokenKind::Comment => "Comment",

            GraphQLTokenKind::Ampersand
            | GraphQLTokenKind::At
            | GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::SquareBracketOpen => {
                let punctuator = self.as_punctuator_str().unwrap_or_default();
                return format!("\"{punctuator}\"");
            },
        };
        name.to_string()
    }
}

impl std::fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}
