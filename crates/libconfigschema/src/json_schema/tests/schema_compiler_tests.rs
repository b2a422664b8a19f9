use crate::json_schema::compile;
use crate::json_schema::CompileError;
use crate::json_schema::CompiledSchema;
use crate::json_schema::JsonType;
use crate::json_schema::SchemaCompiler;
use crate::json_schema::SchemaNode;
use crate::types::FieldDefinition;
use crate::types::ObjectType;
use crate::types::TypeDefinition;
use crate::types::TypeKind;
use crate::types::TypeReference;
use crate::types::UnionType;
use crate::TypeGraph;
use crate::TypeGraphBuilder;
use proptest::prelude::*;
use serde::Serialize;
use serde_json::json;

fn build_graph(sdl: &str) -> TypeGraph {
    TypeGraphBuilder::new()
        .load_str(None, sdl)
        .and_then(TypeGraphBuilder::build)
        .expect("schema should build")
}

fn compile_sdl(sdl: &str) -> CompiledSchema {
    compile(&build_graph(sdl), "Query").expect("schema should compile")
}

/// Compares pretty-printed text so key order is checked too.
fn assert_json_eq(actual: &impl Serialize, expected: serde_json::Value) {
    assert_eq!(
        serde_json::to_string_pretty(actual).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );
}

#[test]
fn scalar_fields_and_lists() {
    let compiled = compile_sdl("type Query { a: String! b: [Int!] }");

    assert_json_eq(&compiled, json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "title": "Config",
        "type": "object",
        "properties": {
            "a": {"type": "string"},
            "b": {"type": "array", "items": {"type": "integer"}},
        },
        "required": ["a"],
        "additionalProperties": false,
        "definitions": {},
    }));
}

#[test]
fn required_omitted_when_no_field_is_required() {
    let compiled = compile_sdl("type Query { a: Float }");

    assert_json_eq(&compiled, json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "title": "Config",
        "type": "object",
        "properties": {
            "a": {"type": "number"},
        },
        "additionalProperties": false,
        "definitions": {},
    }));
}

#[test]
fn enum_field() {
    let compiled = compile_sdl(concat!(
        "enum Color { RED GREEN }\n",
        "type Query { color: Color }\n",
    ));

    assert_json_eq(&compiled.properties()["color"], json!({
        "type": "string",
        "enum": ["RED", "GREEN"],
        "description": "Allowed values: RED, GREEN",
    }));
}

#[test]
fn list_of_enum_merges_field_and_value_descriptions() {
    let compiled = compile_sdl(concat!(
        "enum Color { RED GREEN }\n",
        "type Query {\n",
        "  \"Palette entries\"\n",
        "  palette: [Color!]\n",
        "}\n",
    ));

    assert_json_eq(&compiled.properties()["palette"], json!({
        "type": "array",
        "items": {
            "type": "string",
            "enum": ["RED", "GREEN"],
            "description": "Allowed values: RED, GREEN",
        },
        "description": "Palette entries (Allowed values: RED, GREEN)",
    }));
}

#[test]
fn objects_are_referenced_never_inlined() {
    let compiled = compile_sdl(concat!(
        "type Query { server: Server! }\n",
        "type Server { host: String! port: Int }\n",
    ));

    assert_json_eq(&compiled.properties()["server"], json!({
        "$ref": "#/definitions/Server",
    }));
    assert_eq!(compiled.required(), ["server"]);
    assert_json_eq(compiled.definitions(), json!({
        "Server": {
            "type": "object",
            "title": "Server",
            "properties": {
                "host": {"type": "string"},
                "port": {"type": "integer"},
            },
            "required": ["host"],
            "additionalProperties": false,
        },
    }));
}

#[test]
fn definitions_follow_declaration_order_and_skip_root() {
    let compiled = compile_sdl(concat!(
        "type Zeta { a: Int }\n",
        "type Query { z: Zeta a: Alpha }\n",
        "type Alpha { a: Int }\n",
    ));

    assert_eq!(
        compiled.definitions().keys().collect::<Vec<_>>(),
        vec!["Zeta", "Alpha"],
    );
}

#[test]
fn interface_expands_to_implementors_in_declaration_order() {
    let compiled = compile_sdl(concat!(
        "interface Link { href: String! }\n",
        "type Prefix implements Link { href: String! }\n",
        "type Exact implements Link { href: String! }\n",
        "type Query { link: Link }\n",
    ));

    assert_json_eq(&compiled.properties()["link"], json!({
        "anyOf": [
            {"$ref": "#/definitions/Prefix"},
            {"$ref": "#/definitions/Exact"},
        ],
        "description": "Any of: Prefix, Exact",
    }));
}

#[test]
fn interface_without_implementors_is_empty_any_of() {
    let compiled = compile_sdl(concat!(
        "interface Lonely { a: Int }\n",
        "type Query { lonely: Lonely }\n",
    ));

    assert_json_eq(&compiled.properties()["lonely"], json!({
        "anyOf": [],
        "description": "Any of: ",
    }));
}

#[test]
fn union_keeps_member_order_across_kinds() {
    let compiled = compile_sdl(concat!(
        "type Complex { id: ID! }\n",
        "union Something = String | Int | Complex\n",
        "type Query { value: [Something] }\n",
    ));

    assert_json_eq(&compiled.properties()["value"], json!({
        "type": "array",
        "items": {
            "anyOf": [
                {"type": "string"},
                {"type": "integer"},
                {"$ref": "#/definitions/Complex"},
            ],
            "description": "Any of: String, Int, Complex",
        },
        "description": "Any of: String, Int, Complex",
    }));
}

#[test]
fn with_additional_properties_directive() {
    let compiled = compile_sdl(concat!(
        "type Query { open: Open closed: Closed }\n",
        "type Open @withAdditionalProperties { a: Int }\n",
        "type Closed { a: Int }\n",
    ));

    assert_json_eq(
        &compiled.definitions()["Open"],
        json!({
            "type": "object",
            "title": "Open",
            "properties": {"a": {"type": "integer"}},
            "additionalProperties": true,
        }),
    );
    assert_json_eq(
        &compiled.definitions()["Closed"],
        json!({
            "type": "object",
            "title": "Closed",
            "properties": {"a": {"type": "integer"}},
            "additionalProperties": false,
        }),
    );
}

#[test]
fn self_referential_types_compile() {
    let compiled = compile_sdl(concat!(
        "type Query { root: TreeNode }\n",
        "type TreeNode { parent: TreeNode children: [TreeNode!]! }\n",
    ));

    assert_json_eq(&compiled.definitions()["TreeNode"], json!({
        "type": "object",
        "title": "TreeNode",
        "properties": {
            "parent": {"$ref": "#/definitions/TreeNode"},
            "children": {
                "type": "array",
                "items": {"$ref": "#/definitions/TreeNode"},
            },
        },
        "required": ["children"],
        "additionalProperties": false,
    }));
}

#[test]
fn references_to_the_root_point_at_the_document() {
    let compiled = compile_sdl(concat!(
        "type Query { child: Query node: Node }\n",
        "type Node { parent: Query }\n",
        "union Either = Query | Node\n",
        "type Holder { either: [Either] }\n",
    ));

    assert_json_eq(&compiled.properties()["child"], json!({"$ref": "#"}));
    assert_json_eq(&compiled.definitions()["Node"], json!({
        "type": "object",
        "title": "Node",
        "properties": {"parent": {"$ref": "#"}},
        "additionalProperties": false,
    }));
    assert_json_eq(&compiled.definitions()["Holder"], json!({
        "type": "object",
        "title": "Holder",
        "properties": {
            "either": {
                "type": "array",
                "items": {
                    "anyOf": [
                        {"$ref": "#"},
                        {"$ref": "#/definitions/Node"},
                    ],
                    "description": "Any of: Query, Node",
                },
                "description": "Any of: Query, Node",
            },
        },
        "additionalProperties": false,
    }));
    assert_eq!(
        compiled.definitions().keys().collect::<Vec<_>>(),
        vec!["Node", "Holder"],
    );
}

#[test]
fn unknown_and_json_scalars() {
    let compiled = compile_sdl(concat!(
        "scalar JSON\n",
        "scalar Date\n",
        "type Query {\n",
        "  extra: JSON\n",
        "  \"When it happened\"\n",
        "  when: Date\n",
        "  whens: [Date]\n",
        "}\n",
    ));

    assert_json_eq(&compiled.properties()["extra"], json!({
        "type": "object",
        "properties": {},
    }));
    assert_json_eq(&compiled.properties()["when"], json!({
        "type": "object",
        "properties": {},
        "description": "When it happened (Unknown object)",
    }));
    assert_json_eq(&compiled.properties()["whens"], json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {},
            "description": "Unknown object",
        },
        "description": "Unknown object",
    }));
}

#[test]
fn field_descriptions_attach_to_outer_node() {
    let compiled = compile_sdl(concat!(
        "enum Level { LOW HIGH }\n",
        "type Query {\n",
        "  \"How loud\"\n",
        "  level: Level\n",
        "  \"Every port\"\n",
        "  ports: [Int!]!\n",
        "}\n",
    ));

    assert_json_eq(&compiled.properties()["level"], json!({
        "type": "string",
        "enum": ["LOW", "HIGH"],
        "description": "How loud (Allowed values: LOW, HIGH)",
    }));
    assert_json_eq(&compiled.properties()["ports"], json!({
        "type": "array",
        "items": {"type": "integer"},
        "description": "Every port",
    }));
}

#[test]
fn missing_root_type() {
    let graph = build_graph("type Config { a: Int }");

    assert_eq!(
        compile(&graph, "Query"),
        Err(CompileError::RootTypeNotFound { type_name: "Query".to_string() }),
    );
}

#[test]
fn root_type_must_be_an_object() {
    let graph = build_graph("enum Query { A }");

    assert_eq!(
        compile(&graph, "Query"),
        Err(CompileError::RootTypeNotObject {
            kind: TypeKind::Enum,
            type_name: "Query".to_string(),
        }),
    );
}

#[test]
fn custom_root_type() {
    let graph = build_graph("type Query { a: Int }\ntype Settings { b: Boolean! }");
    let compiled = compile(&graph, "Settings").unwrap();

    assert_eq!(compiled.properties().keys().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(compiled.required(), ["b"]);
    assert_eq!(compiled.definitions().keys().collect::<Vec<_>>(), vec!["Query"]);
}

#[test]
fn undefined_reference_in_unvalidated_graph() {
    let graph = TypeGraph::from_definitions([TypeDefinition::from(ObjectType::new(
        "Query",
        [FieldDefinition::new("ghost", TypeReference::named("Ghost"))],
    ))]);

    assert_eq!(
        compile(&graph, "Query"),
        Err(CompileError::UndefinedTypeReference { type_name: "Ghost".to_string() }),
    );
}

#[test]
fn union_containing_itself_is_an_error() {
    let graph = TypeGraph::from_definitions([
        TypeDefinition::from(UnionType::new("Outer", ["Int", "Inner"])),
        TypeDefinition::from(UnionType::new("Inner", ["String", "Outer"])),
        TypeDefinition::from(ObjectType::new(
            "Query",
            [FieldDefinition::new("value", TypeReference::named("Outer"))],
        )),
    ]);

    assert_eq!(
        compile(&graph, "Query"),
        Err(CompileError::CyclicUnion { union_name: "Outer".to_string() }),
    );
}

#[test]
fn nested_union_members_expand() {
    let graph = TypeGraph::from_definitions([
        TypeDefinition::from(UnionType::new("Inner", ["String"])),
        TypeDefinition::from(UnionType::new("Outer", ["Int", "Inner"])),
        TypeDefinition::from(ObjectType::new(
            "Query",
            [FieldDefinition::new("value", TypeReference::named("Outer"))],
        )),
    ]);
    let compiled = compile(&graph, "Query").unwrap();

    assert_eq!(
        compiled.properties()["value"],
        SchemaNode::any_of(vec![
            SchemaNode::primitive(JsonType::Integer),
            SchemaNode::any_of(vec![SchemaNode::primitive(JsonType::String)])
                .with_description("Any of: String"),
        ]).with_description("Any of: Int, Inner"),
    );
}

#[test]
fn compiling_twice_is_byte_identical() {
    let graph = build_graph(concat!(
        "interface Named { name: String! }\n",
        "type A implements Named { name: String! b: B }\n",
        "type B implements Named { name: String! a: [A] }\n",
        "union AorB = A | B\n",
        "type Query { named: Named both: [AorB!]! }\n",
    ));
    let compiler = SchemaCompiler::new(&graph, "Query");

    let first = compiler.compile().unwrap().to_json_string_pretty().unwrap();
    let second = compiler.compile().unwrap().to_json_string_pretty().unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_compiles_are_identical() {
    use rayon::prelude::*;

    let graph = build_graph(concat!(
        "enum Mode { FAST SAFE }\n",
        "type Query { mode: Mode! inner: Inner }\n",
        "type Inner { values: [[Float]] }\n",
    ));
    let expected = compile(&graph, "Query").unwrap().to_json_string_pretty().unwrap();

    let outputs = (0..32)
        .into_par_iter()
        .map(|_| compile(&graph, "Query").unwrap().to_json_string_pretty().unwrap())
        .collect::<Vec<_>>();
    assert!(outputs.iter().all(|output| output == &expected));
}

fn wrapped(depth_ops: &[bool], base: TypeReference) -> TypeReference {
    // Innermost first; `true` wraps in a list, `false` in a required layer.
    depth_ops.iter().fold(base, |inner, is_list| {
        if *is_list {
            TypeReference::list(inner)
        } else if inner.is_required() {
            inner
        } else {
            TypeReference::required(inner)
        }
    })
}

proptest! {
    #[test]
    fn list_and_required_follow_wrappers(
        ops in proptest::collection::vec(any::<bool>(), 0..6),
    ) {
        let type_ref = wrapped(&ops, TypeReference::named("Int"));
        let expect_list = ops.iter().any(|is_list| *is_list);
        let expect_required = matches!(type_ref, TypeReference::Required(_));

        let graph = TypeGraph::from_definitions([TypeDefinition::from(ObjectType::new(
            "Query",
            [FieldDefinition::new("f", type_ref)],
        ))]);
        let compiled = compile(&graph, "Query").unwrap();

        let expected_node =
            if expect_list {
                SchemaNode::array(SchemaNode::primitive(JsonType::Integer))
            } else {
                SchemaNode::primitive(JsonType::Integer)
            };
        prop_assert_eq!(&compiled.properties()["f"], &expected_node);
        prop_assert_eq!(compiled.required().len(), usize::from(expect_required));
    }
}
