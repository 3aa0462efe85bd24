use crate::ast::ast_node::impl_ast_node;
use crate::ast::ast_node::impl_ast_node_for_enum;
use crate::ast::Name;
use crate::Loc;

/// A type reference such as `String`, `[ID!]`, or `User!`.
///
/// See
/// [Type References](https://spec.graphql.org/October2021/#sec-Type-References).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

impl_ast_node_for_enum!(TypeAnnotation { Named, List, NonNull });

impl TypeAnnotation {
    /// The innermost named type, e.g. `ID` for `[ID!]!`.
    pub fn named_type(&self) -> &NamedType {
        match self {
            TypeAnnotation::Named(named) => named,
            TypeAnnotation::List(list) => list.of_type.named_type(),
            TypeAnnotation::NonNull(non_null) => non_null.of_type.named_type(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }
}

/// A reference to a named type.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub loc: Option<Loc>,
}

/// `[of_type]`
#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub of_type: Box<TypeAnnotation>,
    pub loc: Option<Loc>,
}

/// `of_type!`. The wrapped type is never itself a [`NonNullType`].
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub of_type: Box<TypeAnnotation>,
    pub loc: Option<Loc>,
}

impl_ast_node!(NamedType, ListType, NonNullType);
