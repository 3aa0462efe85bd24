//! Various test utils.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLError;
use crate::Loc;
use crate::ParseOptions;

/// Parses `source` with default options, panicking on error.
pub(crate) fn parse_ok(source: &str) -> ast::Document {
    match crate::parse(source, ParseOptions::default()) {
        Ok(doc) => doc,
        Err(err) => panic!("failed to parse {source:?}:\n{}", err.format_detailed()),
    }
}

/// Parses `source` with default options, panicking if it succeeds.
pub(crate) fn parse_err(source: &str) -> GraphQLError {
    parse_err_with(source, ParseOptions::default())
}

pub(crate) fn parse_err_with(source: &str, options: ParseOptions) -> GraphQLError {
    match crate::parse(source, options) {
        Ok(doc) => panic!("expected {source:?} to fail, got: {doc:#?}"),
        Err(err) => err,
    }
}

/// Returns the only operation in `doc`.
pub(crate) fn only_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    assert_eq!(doc.definitions.len(), 1, "expected a single definition");
    match &doc.definitions[0] {
        ast::Definition::Operation(op) => op,
        other => panic!("expected an operation, got: {other:?}"),
    }
}

/// Returns the only type definition in `doc`.
pub(crate) fn only_type_definition(doc: &ast::Document) -> &ast::TypeDefinition {
    assert_eq!(doc.definitions.len(), 1, "expected a single definition");
    match &doc.definitions[0] {
        ast::Definition::Type(def) => def,
        other => panic!("expected a type definition, got: {other:?}"),
    }
}

/// Returns the only type extension in `doc`.
pub(crate) fn only_type_extension(doc: &ast::Document) -> &ast::TypeExtension {
    assert_eq!(doc.definitions.len(), 1, "expected a single definition");
    match &doc.definitions[0] {
        ast::Definition::TypeExtension(ext) => ext,
        other => panic!("expected a type extension, got: {other:?}"),
    }
}

/// Returns the `index`th selection of `selection_set` as a field.
pub(crate) fn nth_field(selection_set: &ast::SelectionSet, index: usize) -> &ast::Field {
    match &selection_set.selections[index] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field, got: {other:?}"),
    }
}

/// Returns the names of a list of named types.
pub(crate) fn type_names(types: &[ast::NamedType]) -> Vec<&str> {
    types.iter().map(|t| t.name.as_str()).collect()
}

/// Creates a token for use with [`MockTokenSource`].
pub(crate) fn mock_token(
    kind: GraphQLTokenKind,
    start: usize,
    end: usize,
    value: Option<&str>,
) -> GraphQLToken {
    GraphQLToken {
        kind,
        start,
        end,
        line: 1,
        column: start + 1,
        value: value.map(str::to_string),
    }
}

/// A token source that replays a fixed list of tokens. It never yields
/// `Eof`, so consumers must synthesize one.
pub(crate) struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken>,
}

impl MockTokenSource {
    pub(crate) fn new(tokens: Vec<GraphQLToken>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = Result<GraphQLToken, GraphQLError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next().map(Ok)
    }
}

// =============================================================================
// Loc nesting
// =============================================================================

/// Asserts that every node in `doc` has a [`Loc`] and that each child's
/// range lies within its parent's.
pub(crate) fn assert_locs_nested(doc: &ast::Document) {
    let root = expect_loc(doc.loc());
    for definition in &doc.definitions {
        let loc = nested(root, definition.loc());
        match definition {
            ast::Definition::Operation(op) => walk_operation(loc, op),
            ast::Definition::Fragment(frag) => {
                nested(loc, frag.name.loc());
                walk_variable_definitions(loc, &frag.variable_definitions);
                nested(loc, frag.type_condition.loc());
                walk_directives(loc, &frag.directives);
                walk_selection_set(loc, &frag.selection_set);
            },
            ast::Definition::Schema(schema) => {
                walk_description(loc, schema.description.as_ref());
                walk_directives(loc, &schema.directives);
                walk_operation_types(loc, &schema.operation_types);
            },
            ast::Definition::Type(def) => walk_type_definition(loc, def),
            ast::Definition::Directive(def) => {
                walk_description(loc, def.description.as_ref());
                nested(loc, def.name.loc());
                walk_input_values(loc, &def.arguments);
                for location in &def.locations {
                    nested(loc, location.loc());
                }
            },
            ast::Definition::SchemaExtension(ext) => {
                walk_directives(loc, &ext.directives);
                walk_operation_types(loc, &ext.operation_types);
            },
            ast::Definition::TypeExtension(ext) => walk_type_extension(loc, ext),
        }
    }
}

fn expect_loc(loc: Option<&Loc>) -> &Loc {
    loc.unwrap_or_else(|| panic!("node is missing its loc"))
}

fn nested<'a>(parent: &Loc, child: Option<&'a Loc>) -> &'a Loc {
    let child = expect_loc(child);
    assert!(
        child.start <= child.end,
        "inverted loc {child:?}",
    );
    assert!(
        parent.contains(child),
        "{child:?} ({:?}) is not within {parent:?} ({:?})",
        child.source_slice(),
        parent.source_slice(),
    );
    child
}

fn walk_operation(loc: &Loc, op: &ast::OperationDefinition) {
    if let Some(name) = &op.name {
        nested(loc, name.loc());
    }
    walk_variable_definitions(loc, &op.variable_definitions);
    walk_directives(loc, &op.directives);
    walk_selection_set(loc, &op.selection_set);
}

fn walk_variable_definitions(parent: &Loc, defs: &[ast::VariableDefinition]) {
    for def in defs {
        let loc = nested(parent, def.loc());
        let variable = nested(loc, def.variable.loc());
        nested(variable, def.variable.name.loc());
        walk_type(loc, &def.var_type);
        if let Some(value) = &def.default_value {
            walk_value(loc, value);
        }
        walk_directives(loc, &def.directives);
    }
}

fn walk_selection_set(parent: &Loc, selection_set: &ast::SelectionSet) {
    let loc = nested(parent, selection_set.loc());
    for selection in &selection_set.selections {
        let selection_loc = nested(loc, selection.loc());
        match selection {
            ast::Selection::Field(field) => {
                if let Some(alias) = &field.alias {
                    nested(selection_loc, alias.loc());
                }
                nested(selection_loc, field.name.loc());
                walk_arguments(selection_loc, &field.arguments);
                walk_directives(selection_loc, &field.directives);
                if let Some(selection_set) = &field.selection_set {
                    walk_selection_set(selection_loc, selection_set);
                }
            },
            ast::Selection::FragmentSpread(spread) => {
                nested(selection_loc, spread.name.loc());
                walk_directives(selection_loc, &spread.directives);
            },
            ast::Selection::InlineFragment(inline) => {
                if let Some(type_condition) = &inline.type_condition {
                    nested(selection_loc, type_condition.loc());
                }
                walk_directives(selection_loc, &inline.directives);
                walk_selection_set(selection_loc, &inline.selection_set);
            },
        }
    }
}

fn walk_arguments(parent: &Loc, arguments: &[ast::Argument]) {
    for argument in arguments {
        let loc = nested(parent, argument.loc());
        nested(loc, argument.name.loc());
        walk_value(loc, &argument.value);
    }
}

fn walk_directives(parent: &Loc, directives: &[ast::DirectiveAnnotation]) {
    for directive in directives {
        let loc = nested(parent, directive.loc());
        nested(loc, directive.name.loc());
        walk_arguments(loc, &directive.arguments);
    }
}

fn walk_value(parent: &Loc, value: &ast::Value) {
    let loc = nested(parent, value.loc());
    match value {
        ast::Value::Variable(variable) => {
            nested(loc, variable.name.loc());
        },
        ast::Value::List(list) => {
            for item in &list.values {
                walk_value(loc, item);
            }
        },
        ast::Value::Object(object) => {
            for field in &object.fields {
                let field_loc = nested(loc, field.loc());
                nested(field_loc, field.name.loc());
                walk_value(field_loc, &field.value);
            }
        },
        ast::Value::Int(_)
        | ast::Value::Float(_)
        | ast::Value::String(_)
        | ast::Value::Boolean(_)
        | ast::Value::Null(_)
        | ast::Value::Enum(_) => (),
    }
}

fn walk_type(parent: &Loc, type_annotation: &ast::TypeAnnotation) {
    let loc = nested(parent, type_annotation.loc());
    match type_annotation {
        ast::TypeAnnotation::Named(named) => {
            nested(loc, named.name.loc());
        },
        ast::TypeAnnotation::List(list) => walk_type(loc, &list.of_type),
        ast::TypeAnnotation::NonNull(non_null) => walk_type(loc, &non_null.of_type),
    }
}

fn walk_description(parent: &Loc, description: Option<&ast::StringValue>) {
    if let Some(description) = description {
        nested(parent, description.loc());
    }
}

fn walk_named_types(parent: &Loc, types: &[ast::NamedType]) {
    for named in types {
        let loc = nested(parent, named.loc());
        nested(loc, named.name.loc());
    }
}

fn walk_operation_types(parent: &Loc, operation_types: &[ast::RootOperationTypeDefinition]) {
    for operation_type in operation_types {
        let loc = nested(parent, operation_type.loc());
        nested(loc, operation_type.named_type.loc());
    }
}

fn walk_fields(parent: &Loc, fields: &[ast::FieldDefinition]) {
    for field in fields {
        let loc = nested(parent, field.loc());
        walk_description(loc, field.description.as_ref());
        nested(loc, field.name.loc());
        walk_input_values(loc, &field.arguments);
        walk_type(loc, &field.field_type);
        walk_directives(loc, &field.directives);
    }
}

fn walk_input_values(parent: &Loc, values: &[ast::InputValueDefinition]) {
    for value in values {
        let loc = nested(parent, value.loc());
        walk_description(loc, value.description.as_ref());
        nested(loc, value.name.loc());
        walk_type(loc, &value.value_type);
        if let Some(default_value) = &value.default_value {
            walk_value(loc, default_value);
        }
        walk_directives(loc, &value.directives);
    }
}

fn walk_enum_values(parent: &Loc, values: &[ast::EnumValueDefinition]) {
    for value in values {
        let loc = nested(parent, value.loc());
        walk_description(loc, value.description.as_ref());
        nested(loc, value.name.loc());
        walk_directives(loc, &value.directives);
    }
}

fn walk_type_definition(loc: &Loc, def: &ast::TypeDefinition) {
    walk_description(loc, def.description());
    nested(loc, def.name().loc());
    match def {
        ast::TypeDefinition::Scalar(scalar) => walk_directives(loc, &scalar.directives),
        ast::TypeDefinition::Object(object) => {
            walk_named_types(loc, &object.interfaces);
            walk_directives(loc, &object.directives);
            walk_fields(loc, &object.fields);
        },
        ast::TypeDefinition::Interface(interface) => {
            walk_named_types(loc, &interface.interfaces);
            walk_directives(loc, &interface.directives);
            walk_fields(loc, &interface.fields);
        },
        ast::TypeDefinition::Union(union) => {
            walk_directives(loc, &union.directives);
            walk_named_types(loc, &union.members);
        },
        ast::TypeDefinition::Enum(enum_def) => {
            walk_directives(loc, &enum_def.directives);
            walk_enum_values(loc, &enum_def.values);
        },
        ast::TypeDefinition::InputObject(input) => {
            walk_directives(loc, &input.directives);
            walk_input_values(loc, &input.fields);
        },
    }
}

fn walk_type_extension(loc: &Loc, ext: &ast::TypeExtension) {
    nested(loc, ext.name().loc());
    match ext {
        ast::TypeExtension::Scalar(scalar) => walk_directives(loc, &scalar.directives),
        ast::TypeExtension::Object(object) => {
            walk_named_types(loc, &object.interfaces);
            walk_directives(loc, &object.directives);
            walk_fields(loc, &object.fields);
        },
        ast::TypeExtension::Interface(interface) => {
            walk_named_types(loc, &interface.interfaces);
            walk_directives(loc, &interface.directives);
            walk_fields(loc, &interface.fields);
        },
        ast::TypeExtension::Union(union) => {
            walk_directives(loc, &union.directives);
            walk_named_types(loc, &union.members);
        },
        ast::TypeExtension::Enum(enum_ext) => {
            walk_directives(loc, &enum_ext.directives);
            walk_enum_values(loc, &enum_ext.values);
        },
        ast::TypeExtension::InputObject(input) => {
            walk_directives(loc, &input.directives);
            walk_input_values(loc, &input.fields);
        },
    }
}
