use crate::ast::ast_node::impl_ast_node;
use crate::ast::ast_node::impl_ast_node_for_enum;
use crate::ast::Name;
use crate::ast::Variable;
use crate::Loc;

/// An input value literal.
///
/// In const contexts (default values, directive arguments in type-system
/// definitions) the parser never produces [`Value::Variable`].
///
/// See
/// [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl_ast_node_for_enum!(Value {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
});

/// An integer literal. `value` is the raw source text (e.g. `-42`).
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: String,
    pub loc: Option<Loc>,
}

impl IntValue {
    /// Parses the literal as an `i64`; `None` if it does not fit.
    pub fn parse_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }
}

/// A float literal. `value` is the raw source text (e.g. `1.5e10`).
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub loc: Option<Loc>,
}

impl FloatValue {
    pub fn parse_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }
}

/// A string literal holding its decoded content. `is_block` records
/// whether it was written as a `"""` block string.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub is_block: bool,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub loc: Option<Loc>,
}

/// An enum literal: any name other than `true`, `false`, or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Option<Loc>,
}

/// A `name: value` entry within an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Loc>,
}

impl_ast_node!(
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
);
