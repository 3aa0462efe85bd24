use crate::ast::ast_node::impl_ast_node;
use crate::ast::ast_node::impl_ast_node_for_enum;
use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::Loc;

/// Root AST node for any GraphQL document.
///
/// A single `Document` type holds executable definitions (operations and
/// fragments), type-system definitions, and extensions side by side.
/// Deciding which kinds a given consumer accepts is left to that
/// consumer; [`executable_definitions()`](Document::executable_definitions)
/// and [`type_system_definitions()`](Document::type_system_definitions)
/// filter when needed.
///
/// See
/// [Document](https://spec.graphql.org/October2021/#sec-Document).
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Option<Loc>,
}

impl Document {
    /// Iterate over only the operations and fragments in this document.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| def.is_executable())
    }

    /// Iterate over only the type-system definitions and extensions in
    /// this document.
    pub fn type_system_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| !def.is_executable())
    }

    /// Iterate over the operation definitions in this document.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    /// Iterate over the fragment definitions in this document.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }
}

/// A top-level definition within a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    Directive(DirectiveDefinition),
    SchemaExtension(SchemaExtension),
    TypeExtension(TypeExtension),
}

impl_ast_node_for_enum!(Definition {
    Operation,
    Fragment,
    Schema,
    Type,
    Directive,
    SchemaExtension,
    TypeExtension,
});

impl Definition {
    /// Returns `true` for operations and fragments.
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }
}

impl_ast_node!(Document);
