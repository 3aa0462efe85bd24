//! A GraphQL language front end: turns GraphQL source text into a
//! positioned AST.
//!
//! The pipeline is [`Source`] → [`Lexer`] (pulling tokens from a
//! [`token_source::GraphQLTokenSource`]) → [`GraphQLParser`] →
//! [`ast::Document`]. Parsing is a pure function of the input and
//! [`ParseOptions`]; the first malformed construct produces a
//! [`GraphQLError`] and no partial tree.
//!
//! ```rust
//! use graphql_syntax::ast;
//! use graphql_syntax::ParseOptions;
//!
//! let doc = graphql_syntax::parse("{ field }", ParseOptions::default()).unwrap();
//! let ast::Definition::Operation(op) = &doc.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! assert_eq!(op.operation, ast::OperationKind::Query);
//!
//! let err = graphql_syntax::parse("{ field", ParseOptions::default()).unwrap_err();
//! assert_eq!(err.message(), "Syntax Error: Expected Name, found <EOF>.");
//! ```

pub mod ast;
mod block_string;
mod graphql_error;
mod graphql_error_kind;
mod graphql_error_note;
mod graphql_parser;
mod lexer;
mod loc;
mod parse_options;
mod source;
pub mod token;
pub mod token_source;

pub use block_string::dedent_block_string_value;
pub use graphql_error::GraphQLError;
pub use graphql_error_kind::GraphQLErrorKind;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parser::GraphQLParser;
pub use lexer::Lexer;
pub use loc::Loc;
pub use parse_options::ParseOptions;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source::IntoSource;
pub use source::LocationOffset;
pub use source::Source;
pub use source::SourceLocation;

/// Parses a GraphQL document.
///
/// Accepts raw text or a prepared [`Source`] (for a custom name or
/// location offset).
pub fn parse(
    source: impl IntoSource,
    options: ParseOptions,
) -> Result<ast::Document, GraphQLError> {
    GraphQLParser::new(source, options).parse_document()
}

/// Parses a single value literal such as `[1, 2, "three"]`.
///
/// The whole input must be the value; variables are allowed.
pub fn parse_value(
    source: impl IntoSource,
    options: ParseOptions,
) -> Result<ast::Value, GraphQLError> {
    GraphQLParser::new(source, options).parse_standalone_value()
}

/// Parses a single type reference such as `[String!]!`.
pub fn parse_type(
    source: impl IntoSource,
    options: ParseOptions,
) -> Result<ast::TypeAnnotation, GraphQLError> {
    GraphQLParser::new(source, options).parse_standalone_type()
}

#[cfg(test)]
mod tests;
