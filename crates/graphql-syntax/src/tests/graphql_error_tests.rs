use crate::tests::utils::only_operation;
use crate::tests::utils::parse_ok;
use crate::GraphQLError;
use crate::GraphQLErrorKind;
use crate::GraphQLErrorNote;
use crate::ParseOptions;
use crate::Source;

fn parse_source_err(source: Source) -> GraphQLError {
    crate::parse(source, ParseOptions::default()).unwrap_err()
}

/// Verifies the multi-line diagnostic rendering.
#[test]
fn format_detailed_renders_snippet() {
    let err = parse_source_err(Source::with_name(
        "type Query {\n  name String\n}",
        "schema.graphql",
    ));
    assert_eq!(
        err.format_detailed(),
        "error: Syntax Error: Expected \":\", found Name \"String\".\n  \
         --> schema.graphql:2:8\n   \
         |\n \
         2 |   name String\n   \
         |        ^\n",
    );
}

#[test]
fn format_oneline_includes_name_and_location() {
    let err = parse_source_err(Source::with_name(
        "type Query {\n  name String\n}",
        "schema.graphql",
    ));
    assert_eq!(
        err.format_oneline(),
        "schema.graphql:2:8: Syntax Error: Expected \":\", found Name \"String\".",
    );
    assert_eq!(err.to_string(), err.message());
}

/// Verifies that notes with a position render their own snippet.
#[test]
fn format_detailed_renders_positioned_notes() {
    let err = crate::parse("\"abc", ParseOptions::default()).unwrap_err();
    assert_eq!(
        err.format_detailed(),
        "error: Syntax Error: Unterminated string.\n  \
         --> GraphQL Request:1:5\n   \
         |\n \
         1 | \"abc\n   \
         |     ^\n   \
         = note: String started here\n   \
         |\n \
         1 | \"abc\n   \
         | -\n",
    );
}

#[test]
fn format_detailed_renders_help() {
    let err = crate::parse("{ a(x: 00) }", ParseOptions::default()).unwrap_err();
    assert!(err.format_detailed().ends_with(
        "   = help: Leading zeros are not allowed in numbers\n",
    ));
}

/// Verifies that location offsets shift reported positions.
#[test]
fn location_offset_shifts_reported_locations() {
    let source =
        Source::with_location_offset("{ field", "embedded.graphql", 10, 5).unwrap();
    let err = parse_source_err(source);
    assert_eq!(
        err.format_oneline(),
        "embedded.graphql:10:12: Syntax Error: Expected Name, found <EOF>.",
    );
    // Physical locations are unaffected.
    assert_eq!(err.locations()[0].line, 1);
    assert_eq!(err.locations()[0].column, 8);

    let source =
        Source::with_location_offset("{\n  f(", "embedded.graphql", 10, 5).unwrap();
    let err = parse_source_err(source);
    assert!(err.format_oneline().starts_with("embedded.graphql:11:5: "));
    assert!(err.format_detailed().contains("\n11 |   f(\n"));
}

#[test]
fn errors_without_source_render_message_only() {
    let mut err = GraphQLError::new("Something broke.", GraphQLErrorKind::InvalidConfiguration);
    assert_eq!(err.format_oneline(), "Something broke.");

    err.add_note("more context");
    err.add_help("try again");
    assert_eq!(
        err.format_detailed(),
        "error: Something broke.\n   = note: more context\n   = help: try again\n",
    );
    assert!(err.graphql_source().is_none());
    assert!(err.positions().is_empty());
}

/// Verifies that errors built from AST nodes take their positions from
/// the nodes' locations.
#[test]
fn with_nodes_derives_positions() {
    let doc = parse_ok("{\n  a\n  b\n}");
    let op = only_operation(&doc);
    let locs = op.selection_set.selections
        .iter()
        .filter_map(|selection| selection.loc().cloned());

    let err = GraphQLError::new("Duplicate field.", GraphQLErrorKind::InvalidConfiguration)
        .with_nodes(locs)
        .with_note(GraphQLErrorNote::general("fields must be unique"));
    assert_eq!(err.nodes().len(), 2);
    assert_eq!(err.positions(), &[4, 8]);
    assert_eq!(
        err.locations().iter().map(|l| (l.line, l.column)).collect::<Vec<_>>(),
        vec![(2, 3), (3, 3)],
    );
    assert!(err.graphql_source().is_some());
    assert!(err.format_detailed().contains(" 3 |   b\n"));
}
