use crate::ast::ast_node::impl_ast_node;
use crate::ast::ast_node::impl_ast_node_for_enum;
use crate::ast::DirectiveAnnotation;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::RootOperationTypeDefinition;
use crate::Loc;

/// `extend schema @directives { ... }`
///
/// At least one of `directives` or `operation_types` is non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension {
    pub directives: Vec<DirectiveAnnotation>,
    pub operation_types: Vec<RootOperationTypeDefinition>,
    pub loc: Option<Loc>,
}

/// An `extend` of a named type. Every extension adds at least one
/// directive, interface, field, member, or value.
///
/// See
/// [Type Extensions](https://spec.graphql.org/October2021/#sec-Type-Extensions).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension {
    Scalar(ScalarTypeExtension),
    Object(ObjectTypeExtension),
    Interface(InterfaceTypeExtension),
    Union(UnionTypeExtension),
    Enum(EnumTypeExtension),
    InputObject(InputObjectTypeExtension),
}

impl_ast_node_for_enum!(TypeExtension {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
});

impl TypeExtension {
    pub fn name(&self) -> &Name {
        match self {
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension {
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension {
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension {
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension {
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub members: Vec<NamedType>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension {
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub values: Vec<EnumValueDefinition>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension {
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<InputValueDefinition>,
    pub loc: Option<Loc>,
}

impl_ast_node!(
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
);
