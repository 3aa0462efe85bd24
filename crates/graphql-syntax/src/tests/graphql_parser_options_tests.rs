use crate::ast;
use crate::tests::utils::only_type_definition;
use crate::tests::utils::parse_err;
use crate::tests::utils::type_names;
use crate::ParseOptions;

fn parse_with(source: &str, options: ParseOptions) -> ast::Document {
    crate::parse(source, options)
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"))
}

/// Verifies that `no_location` strips every location.
#[test]
fn no_location_omits_locs() {
    let options = ParseOptions {
        no_location: true,
        ..ParseOptions::default()
    };
    let doc = parse_with("query Q($v: Int = 1) { a(x: [true]) @d }", options);
    assert!(doc.loc.is_none());
    assert_eq!(doc.to_source(), "");

    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    assert!(op.loc.is_none());
    assert!(op.name.as_ref().is_some_and(|name| name.loc.is_none()));
    assert!(op.variable_definitions[0].loc.is_none());
    assert!(op.variable_definitions[0].default_value.as_ref().is_some_and(|v| v.loc().is_none()));

    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert!(field.loc.is_none());
    assert!(field.arguments[0].value.loc().is_none());
    assert!(field.directives[0].loc.is_none());

    let value = crate::parse_value("true", options).unwrap();
    assert!(value.loc().is_none());
}

/// Verifies that, by default, interfaces must be separated by `&`.
#[test]
fn legacy_implements_rejected_by_default() {
    let err = parse_err("type T implements Foo Bar { f: Int }");
    assert_eq!(err.message(), "Syntax Error: Unexpected Name \"Bar\".");
    assert_eq!(err.positions(), &[22]);
}

#[test]
fn legacy_implements_allowed_with_flag() {
    let options = ParseOptions {
        allow_legacy_sdl_implements_interfaces: true,
        ..ParseOptions::default()
    };
    let doc = parse_with("type T implements Foo Bar & Baz { f: Int }", options);
    let ast::TypeDefinition::Object(object) = only_type_definition(&doc) else {
        panic!("expected an object type");
    };
    assert_eq!(type_names(&object.interfaces), vec!["Foo", "Bar", "Baz"]);
    assert_eq!(object.fields.len(), 1);
}

/// Verifies that `{}` is not a valid field list by default.
#[test]
fn legacy_empty_fields_rejected_by_default() {
    let err = parse_err("type T {}");
    assert_eq!(err.message(), "Syntax Error: Expected Name, found \"}\".");
    assert_eq!(err.positions(), &[8]);
}

#[test]
fn legacy_empty_fields_allowed_with_flag() {
    let options = ParseOptions {
        allow_legacy_sdl_empty_fields: true,
        ..ParseOptions::default()
    };
    let doc = parse_with("type T {}\ninterface I {}\nextend type T @a", options);
    assert_eq!(doc.definitions.len(), 3);
    let ast::Definition::Type(ast::TypeDefinition::Object(object)) = &doc.definitions[0] else {
        panic!("expected an object type");
    };
    assert!(object.fields.is_empty());
    assert_eq!(object.loc.as_ref().map(|l| l.end), Some(9));
}

/// Verifies that fragment variables need the experimental flag.
#[test]
fn fragment_variables_rejected_by_default() {
    let err = parse_err("fragment F($v: Int) on T { a }");
    assert_eq!(err.message(), "Syntax Error: Expected \"on\", found \"(\".");
    assert_eq!(err.positions(), &[10]);
}

#[test]
fn fragment_variables_allowed_with_flag() {
    let options = ParseOptions {
        experimental_fragment_variables: true,
        ..ParseOptions::default()
    };
    let doc = parse_with("fragment F($v: Int = 1) on T { a(x: $v) }", options);
    let fragment = doc.fragments().next().unwrap();
    assert_eq!(fragment.variable_definitions.len(), 1);
    assert_eq!(fragment.variable_definitions[0].variable.name.as_str(), "v");
}

#[test]
fn default_options() {
    let options = ParseOptions::default();
    assert!(!options.no_location);
    assert!(!options.experimental_fragment_variables);
    assert!(!options.allow_legacy_sdl_implements_interfaces);
    assert!(!options.allow_legacy_sdl_empty_fields);
    assert_eq!(options.max_nesting_depth, ParseOptions::DEFAULT_MAX_NESTING_DEPTH);
}
