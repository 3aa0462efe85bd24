use crate::token::GraphQLToken;
use crate::GraphQLError;

/// Marker trait for lexers: iterators that yield [`GraphQLToken`]s or the
/// first [`GraphQLError`] encountered.
///
/// [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource)
/// lexes a [`Source`](crate::Source) body. Other implementations (e.g. a
/// pre-tokenized buffer) can feed a [`Lexer`](crate::Lexer) through
/// [`Lexer::from_token_source`](crate::Lexer::from_token_source).
///
/// Implementors are responsible for:
/// - Skipping ignored characters (whitespace, commas, BOM)
/// - Yielding `Comment` tokens in source order (the `Lexer` sets them aside)
/// - Yielding a final `Eof` token, or an `Err` and then nothing
///
/// All lookahead and buffering is handled by the `Lexer`.
pub trait GraphQLTokenSource: Iterator<Item = Result<GraphQLToken, GraphQLError>> {}

impl<T> GraphQLTokenSource for T where T: Iterator<Item = Result<GraphQLToken, GraphQLError>> {}
