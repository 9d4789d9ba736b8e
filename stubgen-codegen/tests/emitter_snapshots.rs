//! Snapshot tests for generated unit text.
//!
//! Run `cargo insta review` to update snapshots when making intentional
//! changes to the emitted layout.

use stubgen_codegen::{CancelToken, Generator, MARKER_ATTRIBUTE, MemorySink};
use stubgen_semantic::SymbolTable;
use stubgen_syntax::{Declaration, DefaultExpr, MethodDecl, ParamDecl, SourceUnit};

fn semantics() -> SymbolTable {
    SymbolTable::new()
        .with_attribute("Cmd", MARKER_ATTRIBUTE)
        .with_type("int", "System.Int32")
        .with_type("string[]", "System.String[]")
        .with_type("Color", "Palette.Color")
        .with_member("Color.Red", "Palette.Color.Red")
}

/// Generate and return the single produced unit's text.
fn generate_one(units: &[SourceUnit]) -> String {
    let generator = Generator::new();
    let mut sink = MemorySink::new();
    let semantics = semantics();
    generator
        .run(units, &semantics, &mut sink, CancelToken::new())
        .expect("run should succeed");

    let mut sources = sink.into_sources();
    assert_eq!(sources.len(), 1, "expected exactly one generated unit");
    sources.remove(0).1
}

#[test]
fn test_single_method_unit() {
    let units = vec![SourceUnit::new(
        "Single.cs",
        vec![Declaration::namespace(
            "NS",
            vec![Declaration::class(
                "A",
                vec![Declaration::method(
                    MethodDecl::new("Foo", "void").public().with_attribute("Cmd"),
                )],
            )],
        )],
    )];

    insta::assert_snapshot!("single_method_unit", generate_one(&units));
}

#[test]
fn test_nested_types_unit() {
    let units = vec![SourceUnit::new(
        "Nested.cs",
        vec![Declaration::namespace(
            "NS",
            vec![Declaration::class(
                "Outer",
                vec![Declaration::class(
                    "Inner",
                    vec![
                        Declaration::method(
                            MethodDecl::new("Bar", "Task").public().with_attribute("Cmd"),
                        ),
                        Declaration::method(
                            MethodDecl::new("Baz", "Task")
                                .public()
                                .with_attribute("Cmd")
                                .with_param(ParamDecl::new("x", "int")),
                        ),
                    ],
                )],
            )],
        )],
    )];

    insta::assert_snapshot!("nested_types_unit", generate_one(&units));
}

#[test]
fn test_params_with_defaults_unit() {
    let units = vec![SourceUnit::new(
        "Defaults.cs",
        vec![Declaration::namespace(
            "NS.Bot",
            vec![Declaration::class(
                "Commands",
                vec![Declaration::method(
                    MethodDecl::new("Send", "Task")
                        .public()
                        .with_attribute("Cmd")
                        .with_param(
                            ParamDecl::new("count", "int")
                                .with_default(DefaultExpr::Literal("1".into())),
                        )
                        .with_param(
                            ParamDecl::new("color", "Color")
                                .with_default(DefaultExpr::Member("Color.Red".into())),
                        )
                        .with_param(ParamDecl::new("rest", "string[]").variadic()),
                )],
            )],
        )],
    )];

    insta::assert_snapshot!("params_with_defaults_unit", generate_one(&units));
}
