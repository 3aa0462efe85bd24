use crate::ast::ast_node::impl_ast_node;
use crate::Loc;

/// One entry in a directive definition's `on` list.
///
/// See
/// [Directive Locations](https://spec.graphql.org/October2021/#DirectiveLocations).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLocation {
    pub kind: DirectiveLocationKind,
    pub loc: Option<Loc>,
}

impl_ast_node!(DirectiveLocation);

/// The kind of location where a directive may be applied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocationKind {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type-system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocationKind {
    /// Looks up a location by its name as written in GraphQL source
    /// (e.g. `FIELD_DEFINITION`).
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => DirectiveLocationKind::Query,
            "MUTATION" => DirectiveLocationKind::Mutation,
            "SUBSCRIPTION" => DirectiveLocationKind::Subscription,
            "FIELD" => DirectiveLocationKind::Field,
            "FRAGMENT_DEFINITION" => DirectiveLocationKind::FragmentDefinition,
            "FRAGMENT_SPREAD" => DirectiveLocationKind::FragmentSpread,
            "INLINE_FRAGMENT" => DirectiveLocationKind::InlineFragment,
            "VARIABLE_DEFINITION" => DirectiveLocationKind::VariableDefinition,
            "SCHEMA" => DirectiveLocationKind::Schema,
            "SCALAR" => DirectiveLocationKind::Scalar,
            "OBJECT" => DirectiveLocationKind::Object,
            "FIELD_DEFINITION" => DirectiveLocationKind::FieldDefinition,
            "ARGUMENT_DEFINITION" => DirectiveLocationKind::ArgumentDefinition,
            "INTERFACE" => DirectiveLocationKind::Interface,
            "UNION" => DirectiveLocationKind::Union,
            "ENUM" => DirectiveLocationKind::Enum,
            "ENUM_VALUE" => DirectiveLocationKind::EnumValue,
            "INPUT_OBJECT" => DirectiveLocationKind::InputObject,
            "INPUT_FIELD_DEFINITION" => DirectiveLocationKind::InputFieldDefinition,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocationKind::Query => "QUERY",
            DirectiveLocationKind::Mutation => "MUTATION",
            DirectiveLocationKind::Subscription => "SUBSCRIPTION",
            DirectiveLocationKind::Field => "FIELD",
            DirectiveLocationKind::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocationKind::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocationKind::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocationKind::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocationKind::Schema => "SCHEMA",
            DirectiveLocationKind::Scalar => "SCALAR",
            DirectiveLocationKind::Object => "OBJECT",
            DirectiveLocationKind::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocationKind::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocationKind::Interface => "INTERFACE",
            DirectiveLocationKind::Union => "UNION",
            DirectiveLocationKind::Enum => "ENUM",
            DirectiveLocationKind::EnumValue => "ENUM_VALUE",
            DirectiveLocationKind::InputObject => "INPUT_OBJECT",
            DirectiveLocationKind::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Returns `true` for locations within executable documents.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            DirectiveLocationKind::Query
                | DirectiveLocationKind::Mutation
                | DirectiveLocationKind::Subscription
                | DirectiveLocationKind::Field
                | DirectiveLocationKind::FragmentDefinition
                | DirectiveLocationKind::FragmentSpread
                | DirectiveLocationKind::InlineFragment
                | DirectiveLocationKind::VariableDefinition,
        )
    }
}

impl std::fmt::Display for DirectiveLocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
