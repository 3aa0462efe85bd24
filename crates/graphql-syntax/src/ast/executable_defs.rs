use crate::ast::ast_node::impl_ast_node;
use crate::ast::ast_node::impl_ast_node_for_enum;
use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use crate::Loc;

/// A query, mutation, or subscription.
///
/// The shorthand form `{ ... }` parses as an anonymous `query` with no
/// variables or directives.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations).
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub loc: Option<Loc>,
}

/// `$name: Type = default @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
    pub loc: Option<Loc>,
}

/// A brace-delimited, non-empty list of selections.
///
/// See
/// [Selection Sets](https://spec.graphql.org/October2021/#sec-Selection-Sets).
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl_ast_node_for_enum!(Selection { Field, FragmentSpread, InlineFragment });

/// A field selection, optionally aliased, with arguments, directives,
/// and a nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/October2021/#sec-Language.Fields).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: Option<SelectionSet>,
    pub loc: Option<Loc>,
}

impl Field {
    /// The key this field's result is stored under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub loc: Option<Loc>,
}

/// `... on Type @directives { ... }` (the type condition is optional).
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub loc: Option<Loc>,
}

/// `fragment Name on Type @directives { ... }`
///
/// `variable_definitions` is only ever non-empty when parsing with
/// [`ParseOptions::experimental_fragment_variables`](crate::ParseOptions::experimental_fragment_variables).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub variable_definitions: Vec<VariableDefinition>,
    pub type_condition: NamedType,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub loc: Option<Loc>,
}

impl_ast_node!(
    OperationDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
);
