use expect_test::expect;
use graphql_typegen::{generate, GeneratorConfig, Schema};

fn schema(value: serde_json::Value) -> Schema {
    Schema::from_json_value(value).unwrap()
}

#[test]
fn end_to_end() {
    let schema = schema(serde_json::json!({
        "data": {
            "__schema": {
                "queryType": { "name": "Box" },
                "types": [
                    { "kind": "SCALAR", "name": "Token" },
                    {
                        "kind": "OBJECT",
                        "name": "Box",
                        "fields": [{
                            "name": "value",
                            "type": {
                                "kind": "NON_NULL",
                                "ofType": { "kind": "SCALAR", "name": "Token" }
                            }
                        }]
                    }
                ]
            }
        }
    }));
    let config = GeneratorConfig::default().with_scalar_alias("Token=string");

    let expected = expect![[r#"
        type NonNull<T> = T;
        type List<T> = T[];
        type Optional<T> = T | null;

        interface Response {
          data: Box | null;
          errors?: List<ErrorResponse>;
        }

        interface ErrorResponse {
          message: string;
          locations?: List<ErrorLocation>;
        }

        interface ErrorLocation {
          line: number;
          column: number;
        }

        type Token = string;

        interface Box {
          value: NonNull<string>;
        }

    "#]];
    expected.assert_eq(&generate(&schema, &config).unwrap());
}

#[test]
fn scalar_alias_overrides_the_builtin() {
    let schema = schema(serde_json::json!({
        "types": [{ "kind": "SCALAR", "name": "Int" }]
    }));
    let config = GeneratorConfig::default().with_scalar_alias("Int=bigint");

    let rendered = generate(&schema, &config).unwrap();
    assert!(rendered.contains("type Int = bigint;"));
    assert!(!rendered.contains("type Int = number;"));
}

#[test]
fn undocumented_definitions_emit_no_comment_lines() {
    let schema = schema(serde_json::json!({
        "types": [{
            "kind": "OBJECT",
            "name": "Plain",
            "fields": [{
                "name": "id",
                "type": { "kind": "SCALAR", "name": "ID" }
            }]
        }]
    }));

    let rendered = generate(&schema, &GeneratorConfig::default()).unwrap();
    assert!(!rendered.contains("/**"));
}

#[test]
fn described_definitions_emit_one_wrapped_docblock() {
    let schema = schema(serde_json::json!({
        "types": [{
            "kind": "OBJECT",
            "name": "Documented",
            "description": "A type that exists to carry documentation."
        }]
    }));

    let rendered = generate(&schema, &GeneratorConfig::default()).unwrap();
    let expected = expect![[r#"
        /**
         * A type that exists to carry documentation.
         */
        interface Documented {
        }

    "#]];
    let block = rendered
        .split("\n\n")
        .find(|block| block.contains("Documented"))
        .unwrap();
    expected.assert_eq(&format!("{block}\n\n"));
}

#[test]
fn union_renders_on_a_single_line_in_input_order() {
    let schema = schema(serde_json::json!({
        "types": [
            {
                "kind": "UNION",
                "name": "Item",
                "possibleTypes": [{ "name": "A" }, { "name": "B" }]
            },
            { "kind": "OBJECT", "name": "A" },
            { "kind": "OBJECT", "name": "B" }
        ]
    }));

    let rendered = generate(&schema, &GeneratorConfig::default()).unwrap();
    assert!(rendered.contains("type Item = A | B;\n"));
}

#[test]
fn deprecated_field_with_default_sibling() {
    let schema = schema(serde_json::json!({
        "types": [
            {
                "kind": "OBJECT",
                "name": "Account",
                "fields": [{
                    "name": "legacyId",
                    "description": "The identifier from the previous system.",
                    "type": { "kind": "SCALAR", "name": "ID" },
                    "isDeprecated": true,
                    "deprecationReason": "Use id."
                }]
            },
            {
                "kind": "INPUT_OBJECT",
                "name": "AccountFilter",
                "inputFields": [{
                    "name": "includeClosed",
                    "type": { "kind": "SCALAR", "name": "Boolean" },
                    "defaultValue": "false"
                }]
            }
        ]
    }));

    let rendered = generate(&schema, &GeneratorConfig::default()).unwrap();

    let expected = expect![[r#"
        interface Account {
          /**
           * @deprecated Use id.
           *
           * The identifier from the previous system.
           */
          legacyId?: Optional<string>;
        }

        interface AccountFilter {
          /**
           * @default false
           */
          includeClosed?: Optional<boolean>;
        }

    "#]];
    let tail = rendered
        .split_once("interface Account")
        .map(|(_, tail)| format!("interface Account{tail}"))
        .unwrap();
    expected.assert_eq(&tail);
}

#[test]
fn output_is_reproducible() {
    let document = serde_json::json!({
        "queryType": { "name": "Query" },
        "types": [
            {
                "kind": "OBJECT",
                "name": "Query",
                "fields": [{
                    "name": "items",
                    "type": {
                        "kind": "NON_NULL",
                        "ofType": {
                            "kind": "LIST",
                            "ofType": { "kind": "NON_NULL", "ofType": { "kind": "OBJECT", "name": "Item" } }
                        }
                    }
                }]
            },
            { "kind": "OBJECT", "name": "Item" }
        ]
    });
    let config = GeneratorConfig::default();

    let first = generate(&schema(document.clone()), &config).unwrap();
    let second = generate(&schema(document), &config).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("items: NonNull<List<NonNull<Item>>>;"));
}
