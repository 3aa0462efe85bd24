use crate::ast::ast_node::impl_ast_node;
use crate::ast::Value;
use crate::Loc;

/// A GraphQL name (identifier).
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub loc: Option<Loc>,
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// A variable reference such as `$id`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub loc: Option<Loc>,
}

/// A single `name: value` argument.
///
/// See
/// [Arguments](https://spec.graphql.org/October2021/#sec-Language.Arguments).
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Loc>,
}

/// A directive applied at some location, e.g. `@include(if: $flag)`.
///
/// See
/// [Directives](https://spec.graphql.org/October2021/#sec-Language.Directives).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub loc: Option<Loc>,
}

impl_ast_node!(Name, Variable, Argument, DirectiveAnnotation);
