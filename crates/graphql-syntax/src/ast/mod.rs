//! AST types for parsed GraphQL documents, values, and type references.
//!
//! Every node owns its data and carries an optional [`Loc`](crate::Loc)
//! pointing back into the shared [`Source`](crate::Source). Locations
//! nest: a parent's range always contains each child's range.
//!
//! Every node implements [`AstNode`], giving it `loc()` and
//! `to_source()` as inherent methods.
//!
//! # Example
//!
//! ```rust
//! use graphql_syntax::ast::Definition;
//! use graphql_syntax::ParseOptions;
//!
//! let doc = graphql_syntax::parse(
//!     "type Query { hello: String }",
//!     ParseOptions::default(),
//! ).unwrap();
//! assert!(matches!(doc.definitions[0], Definition::Type(_)));
//! assert_eq!(doc.to_source(), "type Query { hello: String }");
//! ```

mod ast_node;
mod directive_location;
mod document;
mod executable_defs;
mod operation_kind;
mod shared_nodes;
mod type_annotation;
mod type_extensions;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use directive_location::DirectiveLocation;
pub use directive_location::DirectiveLocationKind;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use operation_kind::OperationKind;
pub use shared_nodes::Argument;
pub use shared_nodes::DirectiveAnnotation;
pub use shared_nodes::Name;
pub use shared_nodes::Variable;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::TypeAnnotation;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::SchemaExtension;
pub use type_extensions::TypeExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
