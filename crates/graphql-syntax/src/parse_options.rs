/// Options accepted by [`parse`](crate::parse),
/// [`parse_value`](crate::parse_value), and
/// [`parse_type`](crate::parse_type).
///
/// Every flag defaults to `false`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseOptions {
    /// Omit [`Loc`](crate::Loc) information from every AST node.
    pub no_location: bool,

    /// Allow fragment definitions to declare variables, e.g.
    /// `fragment A($v: Int) on T { ... }`.
    pub experimental_fragment_variables: bool,

    /// Accept `implements A B` (interfaces without `&` separators).
    pub allow_legacy_sdl_implements_interfaces: bool,

    /// Accept `type T {}` (an empty field-definition block).
    pub allow_legacy_sdl_empty_fields: bool,

    /// Maximum nesting of value literals, selection sets, and type
    /// references before parsing fails with
    /// [`NestingLimitExceeded`](crate::GraphQLErrorKind::NestingLimitExceeded).
    pub max_nesting_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            no_location: false,
            experimental_fragment_variables: false,
            allow_legacy_sdl_implements_interfaces: false,
            allow_legacy_sdl_empty_fields: false,
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
