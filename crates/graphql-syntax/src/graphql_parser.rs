//! Recursive-descent parser producing the [`ast`](crate::ast) types.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLError;
use crate::GraphQLErrorKind;
use crate::IntoSource;
use crate::Lexer;
use crate::Loc;
use crate::ParseOptions;
use std::sync::Arc;

/// A recursive-descent parser for GraphQL documents, values, and type
/// references.
///
/// Parsing stops at the first error: every production returns a
/// `Result` and no partial tree is ever produced.
///
/// # Usage
///
/// ```rust
/// use graphql_syntax::GraphQLParser;
/// use graphql_syntax::ParseOptions;
///
/// let parser = GraphQLParser::new("{ hello }", ParseOptions::default());
/// let doc = parser.parse_document().unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub struct GraphQLParser<TTokenSource: GraphQLTokenSource = StrGraphQLTokenSource> {
    lexer: Lexer<TTokenSource>,
    options: ParseOptions,

    /// Current nesting depth, incremented on entry to
    /// `parse_value_literal`, `parse_selection_set`, and
    /// `parse_type_reference` and decremented on exit. Bounded by
    /// [`ParseOptions::max_nesting_depth`].
    recursion_depth: usize,
}

impl GraphQLParser<StrGraphQLTokenSource> {
    /// Creates a parser over `source` (raw text or a prepared
    /// [`Source`](crate::Source)).
    pub fn new(source: impl IntoSource, options: ParseOptions) -> Self {
        Self::from_lexer(Lexer::new(source), options)
    }
}

impl<TTokenSource: GraphQLTokenSource> GraphQLParser<TTokenSource> {
    /// Creates a parser that pulls tokens from an existing [`Lexer`]. The
    /// lexer must not have been advanced yet.
    pub fn from_lexer(lexer: Lexer<TTokenSource>, options: ParseOptions) -> Self {
        Self {
            lexer,
            options,
            recursion_depth: 0,
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parses a complete document: one or more definitions followed by
    /// end of input.
    pub fn parse_document(mut self) -> Result<ast::Document, GraphQLError> {
        let start = self.start();
        let definitions = self.many(
            GraphQLTokenKind::Sof,
            Self::parse_definition,
            GraphQLTokenKind::Eof,
        )?;
        Ok(ast::Document {
            definitions,
            loc: self.loc(start),
        })
    }

    /// Parses a single (non-const) value literal spanning the entire
    /// input.
    pub fn parse_standalone_value(mut self) -> Result<ast::Value, GraphQLError> {
        self.expect_token(GraphQLTokenKind::Sof)?;
        let value = self.parse_value_literal(false)?;
        self.expect_token(GraphQLTokenKind::Eof)?;
        Ok(value)
    }

    /// Parses a single type reference spanning the entire input.
    pub fn parse_standalone_type(
        mut self,
    ) -> Result<ast::TypeAnnotation, GraphQLError> {
        self.expect_token(GraphQLTokenKind::Sof)?;
        let type_annotation = self.parse_type_reference()?;
        self.expect_token(GraphQLTokenKind::Eof)?;
        Ok(type_annotation)
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn token(&self) -> &GraphQLToken {
        self.lexer.token()
    }

    fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.token().kind == kind
    }

    fn peek_description(&self) -> bool {
        self.token().kind.is_string()
    }

    /// Consumes the current token if it is of `kind`, otherwise fails with
    /// `Expected <kind>, found <token>.`
    fn expect_token(
        &mut self,
        kind: GraphQLTokenKind,
    ) -> Result<GraphQLToken, GraphQLError> {
        if self.peek(kind) {
            let token = self.token().clone();
            self.lexer.advance()?;
            return Ok(token);
        }
        let token = self.token();
        Err(GraphQLError::syntax_error(
            self.lexer.source(),
            token.start,
            format!("Expected {}, found {}.", kind.description(), token.description()),
            GraphQLErrorKind::UnexpectedToken {
                expected: Some(kind.description()),
                found: token.description(),
            },
        ))
    }

    /// Consumes the current token if it is of `kind`.
    fn skip(&mut self, kind: GraphQLTokenKind) -> Result<bool, GraphQLError> {
        if self.peek(kind) {
            self.lexer.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the current token if it is the name `keyword`, otherwise
    /// fails with `Expected "<keyword>", found <token>.`
    fn expect_keyword(&mut self, keyword: &str) -> Result<(), GraphQLError> {
        if self.expect_optional_keyword(keyword)? {
            return Ok(());
        }
        let token = self.token();
        Err(GraphQLError::syntax_error(
            self.lexer.source(),
            token.start,
            format!("Expected \"{keyword}\", found {}.", token.description()),
            GraphQLErrorKind::UnexpectedToken {
                expected: Some(format!("\"{keyword}\"")),
                found: token.description(),
            },
        ))
    }

    fn expect_optional_keyword(
        &mut self,
        keyword: &str,
    ) -> Result<bool, GraphQLError> {
        if self.token().is_keyword(keyword) {
            self.lexer.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// `Unexpected <current token>.`
    fn unexpected(&self) -> GraphQLError {
        self.unexpected_at(self.token())
    }

    fn unexpected_at(&self, token: &GraphQLToken) -> GraphQLError {
        GraphQLError::syntax_error(
            self.lexer.source(),
            token.start,
            format!("Unexpected {}.", token.description()),
            GraphQLErrorKind::UnexpectedToken {
                expected: None,
                found: token.description(),
            },
        )
    }

    /// The current token, retained as a node's start unless locations are
    /// disabled.
    fn start(&self) -> Option<GraphQLToken> {
        if self.options.no_location {
            return None;
        }
        Some(self.token().clone())
    }

    /// A [`Loc`] from `start` through the most recently consumed token.
    fn loc(&self, start: Option<GraphQLToken>) -> Option<Loc> {
        start.map(|start| {
            Loc::new(
                start,
                self.lexer.last_token().clone(),
                Arc::clone(self.lexer.source()),
            )
        })
    }

    // =========================================================================
    // List helpers
    // =========================================================================

    /// `open item* close`: zero or more items.
    fn any<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect_token(open)?;
        let mut items = vec![];
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    /// `(open item+ close)?`: an optional list that, when present, holds at
    /// least one item.
    fn optional_many<T>(
        &mut self,
        open: GraphQLTokenKind,
        parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        if !self.peek(open) {
            return Ok(vec![]);
        }
        self.many(open, parse_item, close)
    }

    /// `open item+ close`: one or more items.
    fn many<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect_token(open)?;
        let mut items = vec![parse_item(self)?];
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Increments the nesting depth, failing once it passes
    /// `max_nesting_depth`. Callers must pair a successful call with
    /// `exit_recursion()` (use the wrapper pattern).
    fn enter_recursion(&mut self) -> Result<(), GraphQLError> {
        if self.recursion_depth >= self.options.max_nesting_depth {
            return Err(GraphQLError::nesting_limit(
                self.lexer.source(),
                self.token().start,
                self.options.max_nesting_depth,
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> Result<ast::Definition, GraphQLError> {
        if self.peek(GraphQLTokenKind::Name) {
            let keyword = self.token().value_str();
            let is_executable = matches!(
                keyword,
                "query" | "mutation" | "subscription" | "fragment",
            );
            let is_type_system = matches!(
                keyword,
                "schema" | "scalar" | "type" | "interface" | "union" | "enum"
                    | "input" | "directive",
            );
            let is_extension = keyword == "extend";

            if is_executable {
                return self.parse_executable_definition();
            } else if is_type_system {
                return self.parse_type_system_definition();
            } else if is_extension {
                return self.parse_type_system_extension();
            }
        } else if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            return self.parse_executable_definition();
        } else if self.peek_description() {
            return self.parse_type_system_definition();
        }
        Err(self.unexpected())
    }

    fn parse_executable_definition(
        &mut self,
    ) -> Result<ast::Definition, GraphQLError> {
        if self.token().is_keyword("fragment") {
            return Ok(ast::Definition::Fragment(
                self.parse_fragment_definition()?,
            ));
        }
        Ok(ast::Definition::Operation(self.parse_operation_definition()?))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_operation_definition(
        &mut self,
    ) -> Result<ast::OperationDefinition, GraphQLError> {
        let start = self.start();
        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                operation: ast::OperationKind::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
                loc: self.loc(start),
            });
        }

        let operation = self.parse_operation_type()?;
        let name =
            if self.peek(GraphQLTokenKind::Name) {
                Some(self.parse_name()?)
            } else {
                None
            };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_operation_type(&mut self) -> Result<ast::OperationKind, GraphQLError> {
        let token = self.expect_token(GraphQLTokenKind::Name)?;
        ast::OperationKind::from_keyword(token.value_str())
            .ok_or_else(|| self.unexpected_at(&token))
    }

    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<ast::VariableDefinition>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_variable_definition,
            GraphQLTokenKind::ParenClose,
        )
    }

    fn parse_variable_definition(
        &mut self,
    ) -> Result<ast::VariableDefinition, GraphQLError> {
        let start = self.start();
        let variable = self.parse_variable()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_reference()?;
        let default_value =
            if self.skip(GraphQLTokenKind::Equals)? {
                Some(self.parse_value_literal(true)?)
            } else {
                None
            };
        let directives = self.parse_directives(true)?;
        Ok(ast::VariableDefinition {
            variable,
            var_type,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_variable(&mut self) -> Result<ast::Variable, GraphQLError> {
        let start = self.start();
        self.expect_token(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(ast::Variable {
            name,
            loc: self.loc(start),
        })
    }

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet, GraphQLError> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(
        &mut self,
    ) -> Result<ast::SelectionSet, GraphQLError> {
        let start = self.start();
        let selections = self.many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_selection,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(ast::SelectionSet {
            selections,
            loc: self.loc(start),
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection, GraphQLError> {
        if self.peek(GraphQLTokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            Ok(ast::Selection::Field(self.parse_field()?))
        }
    }

    fn parse_field(&mut self) -> Result<ast::Field, GraphQLError> {
        let start = self.start();
        let name_or_alias = self.parse_name()?;
        let (alias, name) =
            if self.skip(GraphQLTokenKind::Colon)? {
                (Some(name_or_alias), self.parse_name()?)
            } else {
                (None, name_or_alias)
            };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set =
            if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
                Some(self.parse_selection_set()?)
            } else {
                None
            };
        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_arguments(
        &mut self,
        is_const: bool,
    ) -> Result<Vec<ast::Argument>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::ParenOpen,
            |parser| parser.parse_argument(is_const),
            GraphQLTokenKind::ParenClose,
        )
    }

    fn parse_argument(&mut self, is_const: bool) -> Result<ast::Argument, GraphQLError> {
        let start = self.start();
        let name = self.parse_name()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }

    /// Parses a fragment spread (`...Name`) or an inline fragment
    /// (`... on Type { }` / `... { }`).
    fn parse_fragment(&mut self) -> Result<ast::Selection, GraphQLError> {
        let start = self.start();
        self.expect_token(GraphQLTokenKind::Ellipsis)?;

        let has_type_condition = self.expect_optional_keyword("on")?;
        if !has_type_condition && self.peek(GraphQLTokenKind::Name) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            }));
        }

        let type_condition =
            if has_type_condition {
                Some(self.parse_named_type()?)
            } else {
                None
            };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    fn parse_fragment_definition(
        &mut self,
    ) -> Result<ast::FragmentDefinition, GraphQLError> {
        let start = self.start();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        let variable_definitions =
            if self.options.experimental_fragment_variables {
                self.parse_variable_definitions()?
            } else {
                vec![]
            };
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            name,
            variable_definitions,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// A fragment name is any name except `on`.
    fn parse_fragment_name(&mut self) -> Result<ast::Name, GraphQLError> {
        if self.token().is_keyword("on") {
            let token = self.token();
            return Err(GraphQLError::syntax_error(
                self.lexer.source(),
                token.start,
                format!("Unexpected {}.", token.description()),
                GraphQLErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            ));
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value_literal(&mut self, is_const: bool) -> Result<ast::Value, GraphQLError> {
        self.enter_recursion()?;
        let result = self.parse_value_literal_impl(is_const);
        self.exit_recursion();
        result
    }

    fn parse_value_literal_impl(
        &mut self,
        is_const: bool,
    ) -> Result<ast::Value, GraphQLError> {
        let kind = self.token().kind;
        match kind {
            GraphQLTokenKind::SquareBracketOpen => self.parse_list(is_const),
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object(is_const),
            GraphQLTokenKind::IntValue => {
                let token = self.expect_token(GraphQLTokenKind::IntValue)?;
                Ok(ast::Value::Int(ast::IntValue {
                    value: token.value_str().to_string(),
                    loc: self.loc(self.retain(token)),
                }))
            },
            GraphQLTokenKind::FloatValue => {
                let token = self.expect_token(GraphQLTokenKind::FloatValue)?;
                Ok(ast::Value::Float(ast::FloatValue {
                    value: token.value_str().to_string(),
                    loc: self.loc(self.retain(token)),
                }))
            },
            GraphQLTokenKind::StringValue | GraphQLTokenKind::BlockStringValue => {
                Ok(ast::Value::String(self.parse_string_literal()?))
            },
            GraphQLTokenKind::Name => {
                let token = self.expect_token(GraphQLTokenKind::Name)?;
                let value = match token.value_str() {
                    "true" | "false" => ast::Value::Boolean(ast::BooleanValue {
                        value: token.value_str() == "true",
                        loc: None,
                    }),
                    "null" => ast::Value::Null(ast::NullValue { loc: None }),
                    name => ast::Value::Enum(ast::EnumValue {
                        value: name.to_string(),
                        loc: None,
                    }),
                };
                Ok(self.with_value_loc(value, token))
            },
            GraphQLTokenKind::Dollar if !is_const => {
                Ok(ast::Value::Variable(self.parse_variable()?))
            },
            _ => Err(self.unexpected()),
        }
    }

    /// Attaches the location of the single-token `value` parsed from
    /// `token`.
    fn with_value_loc(&self, mut value: ast::Value, token: GraphQLToken) -> ast::Value {
        let loc = self.loc(self.retain(token));
        match &mut value {
            ast::Value::Boolean(boolean) => boolean.loc = loc,
            ast::Value::Null(null) => null.loc = loc,
            ast::Value::Enum(enum_value) => enum_value.loc = loc,
            _ => (),
        }
        value
    }

    /// Keeps an already-consumed token as a node's start unless locations
    /// are disabled.
    fn retain(&self, token: GraphQLToken) -> Option<GraphQLToken> {
        (!self.options.no_location).then_some(token)
    }

    fn parse_string_literal(&mut self) -> Result<ast::StringValue, GraphQLError> {
        let token = self.token().clone();
        self.lexer.advance()?;
        Ok(ast::StringValue {
            value: token.value_str().to_string(),
            is_block: token.kind == GraphQLTokenKind::BlockStringValue,
            loc: self.loc(self.retain(token)),
        })
    }

    fn parse_list(&mut self, is_const: bool) -> Result<ast::Value, GraphQLError> {
        let start = self.start();
        let values = self.any(
            GraphQLTokenKind::SquareBracketOpen,
            |parser| parser.parse_value_literal(is_const),
            GraphQLTokenKind::SquareBracketClose,
        )?;
        Ok(ast::Value::List(ast::ListValue {
            values,
            loc: self.loc(start),
        }))
    }

    fn parse_object(&mut self, is_const: bool) -> Result<ast::Value, GraphQLError> {
        let start = self.start();
        let fields = self.any(
            GraphQLTokenKind::CurlyBraceOpen,
            |parser| parser.parse_object_field(is_const),
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(ast::Value::Object(ast::ObjectValue {
            fields,
            loc: self.loc(start),
        }))
    }

    fn parse_object_field(
        &mut self,
        is_const: bool,
    ) -> Result<ast::ObjectField, GraphQLError> {
        let start = self.start();
        let name = self.parse_name()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::ObjectField {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(
        &mut self,
        is_const: bool,
    ) -> Result<Vec<ast::DirectiveAnnotation>, GraphQLError> {
        let mut directives = vec![];
        while self.peek(GraphQLTokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_directive(
        &mut self,
        is_const: bool,
    ) -> Result<ast::DirectiveAnnotation, GraphQLError> {
        let start = self.start();
        self.expect_token(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(ast::DirectiveAnnotation {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type references
    // =========================================================================

    fn parse_type_reference(&mut self) -> Result<ast::TypeAnnotation, GraphQLError> {
        self.enter_recursion()?;
        let result = self.parse_type_reference_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_reference_impl(
        &mut self,
    ) -> Result<ast::TypeAnnotation, GraphQLError> {
        let start = self.start();
        let type_annotation =
            if self.skip(GraphQLTokenKind::SquareBracketOpen)? {
                let of_type = self.parse_type_reference()?;
                self.expect_token(GraphQLTokenKind::SquareBracketClose)?;
                ast::TypeAnnotation::List(ast::ListType {
                    of_type: Box::new(of_type),
                    loc: self.loc(start.clone()),
                })
            } else {
                ast::TypeAnnotation::Named(self.parse_named_type()?)
            };

        if self.skip(GraphQLTokenKind::Bang)? {
            return Ok(ast::TypeAnnotation::NonNull(ast::NonNullType {
                of_type: Box::new(type_annotation),
                loc: self.loc(start),
            }));
        }
        Ok(type_annotation)
    }

    fn parse_named_type(&mut self) -> Result<ast::NamedType, GraphQLError> {
        let start = self.start();
        let name = self.parse_name()?;
        Ok(ast::NamedType {
            name,
            loc: self.loc(start),
        })
    }

    fn parse_name(&mut self) -> Result<ast::Name, GraphQLError> {
        let token = self.expect_token(GraphQLTokenKind::Name)?;
        Ok(ast::Name {
            value: token.value_str().to_string(),
            loc: self.loc(self.retain(token)),
        })
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn parse_type_system_definition(
        &mut self,
    ) -> Result<ast::Definition, GraphQLError> {
        // Skip past a description to find the keyword.
        let keyword_token =
            if self.peek_description() {
                self.lexer.lookahead()?.clone()
            } else {
                self.token().clone()
            };

        if keyword_token.kind == GraphQLTokenKind::Name {
            match keyword_token.value_str() {
                "schema" => {
                    return Ok(ast::Definition::Schema(
                        self.parse_schema_definition()?,
                    ));
                },
                "scalar" => {
                    return Ok(ast::Definition::Type(ast::TypeDefinition::Scalar(
                        self.parse_scalar_type_definition()?,
                    )));
                },
                "type" => {
                    return Ok(ast::Definition::Type(ast::TypeDefinition::Object(
                        self.parse_object_type_definition()?,
                    )));
                },
                "interface" => {
                    return Ok(ast::Definition::Type(ast::TypeDefinition::Interface(
                        self.parse_interface_type_definition()?,
                    )));
                },
                "union" => {
                    return Ok(ast::Definition::Type(ast::TypeDefinition::Union(
                        self.parse_union_type_definition()?,
                    )));
                },
                "enum" => {
                    return Ok(ast::Definition::Type(ast::TypeDefinition::Enum(
                        self.parse_enum_type_definition()?,
                    )));
                },
                "input" => {
                    return Ok(ast::Definition::Type(
                        ast::TypeDefinition::InputObject(
                            self.parse_input_object_type_definition()?,
                        ),
                    ));
                },
                "directive" => {
                    return Ok(ast::Definition::Directive(
                        self.parse_directive_definition()?,
                    ));
                },
                _ => (),
            }
        }
        Err(self.unexpected_at(&keyword_token))
    }

    fn parse_description(&mut self) -> Result<Option<ast::StringValue>, GraphQLError> {
        if self.peek_description() {
            return Ok(Some(self.parse_string_literal()?));
        }
        Ok(None)
    }

    fn parse_schema_definition(
        &mut self,
    ) -> Result<ast::SchemaDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_root_operation_type_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(ast::SchemaDefinition {
            description,
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    fn parse_root_operation_type_definition(
        &mut self,
    ) -> Result<ast::RootOperationTypeDefinition, GraphQLError> {
        let start = self.start();
        let operation = self.parse_operation_type()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(ast::RootOperationTypeDefinition {
            operation,
            named_type,
            loc: self.loc(start),
        })
    }

    fn parse_scalar_type_definition(
        &mut self,
    ) -> Result<ast::ScalarTypeDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::ScalarTypeDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_object_type_definition(
        &mut self,
    ) -> Result<ast::ObjectTypeDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `implements &? A (& B)*`, or `implements A B` when legacy SDL
    /// interfaces are allowed.
    fn parse_implements_interfaces(
        &mut self,
    ) -> Result<Vec<ast::NamedType>, GraphQLError> {
        let mut types = vec![];
        if !self.expect_optional_keyword("implements")? {
            return Ok(types);
        }
        self.skip(GraphQLTokenKind::Ampersand)?;
        loop {
            types.push(self.parse_named_type()?);
            let has_more = self.skip(GraphQLTokenKind::Ampersand)?
                || (self.options.allow_legacy_sdl_implements_interfaces
                    && self.peek(GraphQLTokenKind::Name));
            if !has_more {
                break;
            }
        }
        Ok(types)
    }

    fn parse_fields_definition(
        &mut self,
    ) -> Result<Vec<ast::FieldDefinition>, GraphQLError> {
        if self.options.allow_legacy_sdl_empty_fields
            && self.peek(GraphQLTokenKind::CurlyBraceOpen)
            && self.lexer.lookahead()?.kind == GraphQLTokenKind::CurlyBraceClose
        {
            self.lexer.advance()?;
            self.lexer.advance()?;
            return Ok(vec![]);
        }
        self.optional_many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )
    }

    fn parse_field_definition(
        &mut self,
    ) -> Result<ast::FieldDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_argument_defs(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_input_value_def,
            GraphQLTokenKind::ParenClose,
        )
    }

    fn parse_input_value_def(
        &mut self,
    ) -> Result<ast::InputValueDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_reference()?;
        let default_value =
            if self.skip(GraphQLTokenKind::Equals)? {
                Some(self.parse_value_literal(true)?)
            } else {
                None
            };
        let directives = self.parse_directives(true)?;
        Ok(ast::InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_interface_type_definition(
        &mut self,
    ) -> Result<ast::InterfaceTypeDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_union_type_definition(
        &mut self,
    ) -> Result<ast::UnionTypeDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let members = self.parse_union_member_types()?;
        Ok(ast::UnionTypeDefinition {
            description,
            name,
            directives,
            members,
            loc: self.loc(start),
        })
    }

    /// `= |? A (| B)*`
    fn parse_union_member_types(
        &mut self,
    ) -> Result<Vec<ast::NamedType>, GraphQLError> {
        let mut types = vec![];
        if self.skip(GraphQLTokenKind::Equals)? {
            self.skip(GraphQLTokenKind::Pipe)?;
            loop {
                types.push(self.parse_named_type()?);
                if !self.skip(GraphQLTokenKind::Pipe)? {
                    break;
                }
            }
        }
        Ok(types)
    }

    fn parse_enum_type_definition(
        &mut self,
    ) -> Result<ast::EnumTypeDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.parse_enum_values_definition()?;
        Ok(ast::EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    fn parse_enum_values_definition(
        &mut self,
    ) -> Result<Vec<ast::EnumValueDefinition>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_enum_value_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )
    }

    fn parse_enum_value_definition(
        &mut self,
    ) -> Result<ast::EnumValueDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        let name = self.parse_enum_value_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    /// An enum value is any name except `true`, `false`, or `null`.
    fn parse_enum_value_name(&mut self) -> Result<ast::Name, GraphQLError> {
        let token = self.token();
        if let value @ ("true" | "false" | "null") = token.value_str()
            && token.kind == GraphQLTokenKind::Name
        {
            return Err(GraphQLError::syntax_error(
                self.lexer.source(),
                token.start,
                format!(
                    "{} is reserved and cannot be used for an enum value.",
                    token.description(),
                ),
                GraphQLErrorKind::ReservedName {
                    name: value.to_string(),
                },
            ));
        }
        self.parse_name()
    }

    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<ast::InputObjectTypeDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_fields_definition()?;
        Ok(ast::InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_input_fields_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_input_value_def,
            GraphQLTokenKind::CurlyBraceClose,
        )
    }

    fn parse_directive_definition(
        &mut self,
    ) -> Result<ast::DirectiveDefinition, GraphQLError> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect_token(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let repeatable = self.expect_optional_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(ast::DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            loc: self.loc(start),
        })
    }

    /// `|? LOCATION (| LOCATION)*`
    fn parse_directive_locations(
        &mut self,
    ) -> Result<Vec<ast::DirectiveLocation>, GraphQLError> {
        self.skip(GraphQLTokenKind::Pipe)?;
        let mut locations = vec![self.parse_directive_location()?];
        while self.skip(GraphQLTokenKind::Pipe)? {
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(
        &mut self,
    ) -> Result<ast::DirectiveLocation, GraphQLError> {
        let token = self.token().clone();
        let name = self.parse_name()?;
        match ast::DirectiveLocationKind::from_name(&name.value) {
            Some(kind) => Ok(ast::DirectiveLocation {
                kind,
                loc: name.loc,
            }),
            None => {
                let mut error = self.unexpected_at(&token);
                if let Some(suggestion) = suggest_directive_location(&name.value) {
                    error.add_help(format!("Did you mean `{suggestion}`?"));
                }
                Err(error)
            },
        }
    }

    // =========================================================================
    // Type-system extensions
    // =========================================================================

    fn parse_type_system_extension(
        &mut self,
    ) -> Result<ast::Definition, GraphQLError> {
        let keyword_token = self.lexer.lookahead()?.clone();
        if keyword_token.kind == GraphQLTokenKind::Name {
            let extension = match keyword_token.value_str() {
                "schema" => {
                    return Ok(ast::Definition::SchemaExtension(
                        self.parse_schema_extension()?,
                    ));
                },
                "scalar" => ast::TypeExtension::Scalar(
                    self.parse_scalar_type_extension()?,
                ),
                "type" => ast::TypeExtension::Object(
                    self.parse_object_type_extension()?,
                ),
                "interface" => ast::TypeExtension::Interface(
                    self.parse_interface_type_extension()?,
                ),
                "union" => ast::TypeExtension::Union(
                    self.parse_union_type_extension()?,
                ),
                "enum" => ast::TypeExtension::Enum(
                    self.parse_enum_type_extension()?,
                ),
                "input" => ast::TypeExtension::InputObject(
                    self.parse_input_object_type_extension()?,
                ),
                _ => return Err(self.unexpected_at(&keyword_token)),
            };
            return Ok(ast::Definition::TypeExtension(extension));
        }
        Err(self.unexpected_at(&keyword_token))
    }

    fn parse_schema_extension(&mut self) -> Result<ast::SchemaExtension, GraphQLError> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.optional_many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_root_operation_type_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        if directives.is_empty() && operation_types.is_empty() {
            return Err(self.unexpected());
        }
        Ok(ast::SchemaExtension {
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    fn parse_scalar_type_extension(
        &mut self,
    ) -> Result<ast::ScalarTypeExtension, GraphQLError> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        if directives.is_empty() {
            return Err(self.unexpected());
        }
        Ok(ast::ScalarTypeExtension {
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_object_type_extension(
        &mut self,
    ) -> Result<ast::ObjectTypeExtension, GraphQLError> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected());
        }
        Ok(ast::ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_interface_type_extension(
        &mut self,
    ) -> Result<ast::InterfaceTypeExtension, GraphQLError> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected());
        }
        Ok(ast::InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_union_type_extension(
        &mut self,
    ) -> Result<ast::UnionTypeExtension, GraphQLError> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let members = self.parse_union_member_types()?;
        if directives.is_empty() && members.is_empty() {
            return Err(self.unexpected());
        }
        Ok(ast::UnionTypeExtension {
            name,
            directives,
            members,
            loc: self.loc(start),
        })
    }

    fn parse_enum_type_extension(
        &mut self,
    ) -> Result<ast::EnumTypeExtension, GraphQLError> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.parse_enum_values_definition()?;
        if directives.is_empty() && values.is_empty() {
            return Err(self.unexpected());
        }
        Ok(ast::EnumTypeExtension {
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    fn parse_input_object_type_extension(
        &mut self,
    ) -> Result<ast::InputObjectTypeExtension, GraphQLError> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_fields_definition()?;
        if directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected());
        }
        Ok(ast::InputObjectTypeExtension {
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }
}

/// Suggests the closest directive location name for a misspelling.
fn suggest_directive_location(input: &str) -> Option<&'static str> {
    const LOCATIONS: &[&str] = &[
        "QUERY",
        "MUTATION",
        "SUBSCRIPTION",
        "FIELD",
        "FRAGMENT_DEFINITION",
        "FRAGMENT_SPREAD",
        "INLINE_FRAGMENT",
        "VARIABLE_DEFINITION",
        "SCHEMA",
        "SCALAR",
        "OBJECT",
        "FIELD_DEFINITION",
        "ARGUMENT_DEFINITION",
        "INTERFACE",
        "UNION",
        "ENUM",
        "ENUM_VALUE",
        "INPUT_OBJECT",
        "INPUT_FIELD_DEFINITION",
    ];

    let input = input.to_uppercase();
    LOCATIONS
        .iter()
        .map(|location| (edit_distance(&input, location), *location))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, location)| location)
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != *b_char);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}
