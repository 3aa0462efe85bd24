mod graphql_error_tests;
mod graphql_parser_options_tests;
pub(crate) mod utils;
