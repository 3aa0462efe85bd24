use graphql_syntax::ParseOptions;

/// What each input file is expected to contain.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub(crate) enum ParseTarget {
    /// A full document of definitions.
    #[default]
    Document,

    /// A single value literal.
    Value,

    /// A single type reference.
    Type,
}

/// Flags mapping onto [`ParseOptions`].
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct ParseArgs {
    #[arg(
        help="Allow fragment definitions to declare variables.",
        long,
    )]
    experimental_fragment_variables: bool,

    #[arg(
        help="Accept `implements A B` without `&` separators.",
        long,
    )]
    allow_legacy_sdl_implements_interfaces: bool,

    #[arg(
        help="Accept empty field blocks such as `type T {}`.",
        long,
    )]
    allow_legacy_sdl_empty_fields: bool,

    #[arg(
        default_value_t=ParseOptions::DEFAULT_MAX_NESTING_DEPTH,
        help="Maximum nesting of values, selection sets, and type references.",
        long,
    )]
    max_nesting_depth: usize,
}

impl ParseArgs {
    pub(crate) fn to_options(&self) -> ParseOptions {
        ParseOptions {
            no_location: false,
            experimental_fragment_variables: self.experimental_fragment_variables,
            allow_legacy_sdl_implements_interfaces:
                self.allow_legacy_sdl_implements_interfaces,
            allow_legacy_sdl_empty_fields: self.allow_legacy_sdl_empty_fields,
            max_nesting_depth: self.max_nesting_depth,
        }
    }
}
