use fixture_forge::{
    generate, generate_seeded, AssembleError, EncodeError, Error, FieldDescriptor, Generated,
    GeneratorError, GeneratorInfo, GeneratorRegistry, Params, Record, Value, XmlEncoder,
    XmlOptions,
};
use quick_xml::events::Event;
use quick_xml::Reader;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// One element of a parsed document.
#[derive(Debug)]
struct Node {
    depth: usize,
    name: String,
    text: Option<String>,
}

/// Parse `xml` into a flat pre-order list of elements. Panics on malformed input.
fn parse(xml: &str) -> Vec<Node> {
    let mut reader = Reader::from_str(xml);
    let mut nodes: Vec<Node> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                open.push(nodes.len());
                nodes.push(Node {
                    depth: open.len() - 1,
                    name,
                    text: None,
                });
            }
            Event::Text(t) => {
                let text = t.unescape().unwrap().into_owned();
                if !text.trim().is_empty() {
                    let idx = *open.last().expect("text outside of an element");
                    nodes[idx].text = Some(text);
                }
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(open.is_empty(), "unclosed elements");
    nodes
}

fn to_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

fn schema_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("school", "school"),
        FieldDescriptor::new("age", "number")
            .with_params(Params::new().with("min", 18).with("max", 80)),
        FieldDescriptor::new("active", "bool"),
        FieldDescriptor::new("motto", "sentence_simple"),
        FieldDescriptor::new("code", "pattern")
            .with_params(Params::new().with("pattern", "SCH-{rand:5}")),
    ]
}

#[test]
fn test_single_shape_has_one_child_per_field_in_order() {
    let options = XmlOptions::single(schema_fields()).with_root_element("campus");
    let nodes = parse(&to_string(generate_seeded(&options, 42).unwrap()));

    let roots: Vec<&Node> = nodes.iter().filter(|n| n.depth == 0).collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name, "campus");

    let children: Vec<&str> = nodes
        .iter()
        .filter(|n| n.depth == 1)
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(children, vec!["school", "age", "active", "motto", "code"]);
}

#[test]
fn test_array_shape_has_row_count_records() {
    let options = XmlOptions::array(7, schema_fields())
        .with_root_element("schools")
        .with_record_element("school_row")
        .with_indent(true);
    let nodes = parse(&to_string(generate_seeded(&options, 42).unwrap()));

    assert_eq!(nodes[0].name, "schools");
    let records: Vec<&Node> = nodes.iter().filter(|n| n.depth == 1).collect();
    assert_eq!(records.len(), 7);
    assert!(records.iter().all(|n| n.name == "school_row"));
    assert_eq!(nodes.iter().filter(|n| n.depth == 2).count(), 7 * 5);
}

#[test]
fn test_autoincrement_matches_record_position() {
    let mut fields = vec![FieldDescriptor::new("id", "autoincrement")];
    fields.extend(schema_fields());
    let options = XmlOptions::array(25, fields);

    let nodes = parse(&to_string(generate_seeded(&options, 3).unwrap()));
    let ids: Vec<String> = nodes
        .iter()
        .filter(|n| n.depth == 2 && n.name == "id")
        .filter_map(|n| n.text.clone())
        .collect();

    let expected: Vec<String> = (1..=25).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_sequence_field_encoding() {
    let tags = FieldDescriptor::new("tags", "static")
        .with_params(serde_yaml_params("{ value: [a, b] }"));
    let options = XmlOptions::single(vec![tags]).with_root_element("post");

    let xml = to_string(generate_seeded(&options, 1).unwrap());
    assert_eq!(
        xml,
        "<post><tags><value>a</value><value>b</value></tags></post>"
    );
}

#[test]
fn test_sequence_entries_keep_their_positions() {
    let tags = FieldDescriptor::new("tags", "static")
        .with_params(serde_yaml_params("{ value: [a, ~, b, {}] }"));
    let options = XmlOptions::single(vec![tags]).with_root_element("post");

    let nodes = parse(&to_string(generate_seeded(&options, 1).unwrap()));
    let entries: Vec<Option<&str>> = nodes
        .iter()
        .filter(|n| n.name == "value")
        .map(|n| n.text.as_deref())
        .collect();

    assert_eq!(entries, vec![Some("a"), None, Some("b"), None]);
}

#[test]
fn test_empty_mapping_field_is_omitted() {
    let options = XmlOptions::single(vec![
        FieldDescriptor::new("first", "static").with_params(Params::new().with("value", "x")),
        FieldDescriptor::new("nothing", "static").with_params(serde_yaml_params("{ value: {} }")),
        FieldDescriptor::new("last", "static").with_params(Params::new().with("value", 2)),
    ]);

    let xml = to_string(generate_seeded(&options, 1).unwrap());
    assert_eq!(xml, "<xml><first>x</first><last>2</last></xml>");
}

#[test]
fn test_nested_mapping_from_custom_generator() {
    let mut registry = GeneratorRegistry::with_builtins();
    registry
        .register(
            "address",
            GeneratorInfo::new("Address", "address", "Street and city", "map"),
            |_: &Params, rng: &mut dyn RngCore| -> Result<Value, GeneratorError> {
                let number = i64::from(rng.next_u32() % 100);
                Ok(Value::Mapping(
                    Record::new()
                        .with("street", format!("{number} Main St"))
                        .with("geo", Record::new().with("lat", 1.5).with("lon", -2.25)),
                ))
            },
        )
        .unwrap();

    let options = XmlOptions::single(vec![FieldDescriptor::new("home", "address")]);
    let mut rng = StdRng::seed_from_u64(5);
    let nodes = parse(&to_string(generate(&options, &registry, &mut rng).unwrap()));

    let names: Vec<(usize, &str)> = nodes.iter().map(|n| (n.depth, n.name.as_str())).collect();
    assert_eq!(
        names,
        vec![
            (0, "xml"),
            (1, "home"),
            (2, "street"),
            (2, "geo"),
            (3, "lat"),
            (3, "lon"),
        ]
    );
    assert_eq!(nodes[5].text.as_deref(), Some("-2.25"));
}

#[test]
fn test_error_scenarios() {
    let mut triangle = XmlOptions::single(schema_fields());
    triangle.shape = "triangle".to_string();
    assert!(matches!(
        generate_seeded(&triangle, 1),
        Err(Error::Assemble(AssembleError::InvalidShape(_)))
    ));

    assert!(matches!(
        generate_seeded(&XmlOptions::single(vec![]), 1),
        Err(Error::Assemble(AssembleError::MissingFields))
    ));

    assert!(matches!(
        generate_seeded(&XmlOptions::array(0, schema_fields()), 1),
        Err(Error::Assemble(AssembleError::MissingRowCount(0)))
    ));

    let unknown = XmlOptions::single(vec![FieldDescriptor::new("x", "doesNotExist")]);
    match generate_seeded(&unknown, 1) {
        Err(Error::Assemble(AssembleError::UnknownGenerator(name))) => {
            assert_eq!(name, "doesNotExist")
        }
        other => panic!("Expected UnknownGenerator, got {other:?}"),
    }

    let bad_param = XmlOptions::single(vec![FieldDescriptor::new("age", "number")
        .with_params(Params::new().with("min", 10).with("max", 1))]);
    match generate_seeded(&bad_param, 1) {
        Err(Error::Assemble(AssembleError::GeneratorInvocation { field, .. })) => {
            assert_eq!(field, "age")
        }
        other => panic!("Expected GeneratorInvocation, got {other:?}"),
    }

    let bad_name = XmlOptions::single(vec![FieldDescriptor::new("two words", "school")]);
    assert!(matches!(
        generate_seeded(&bad_name, 1),
        Err(Error::Encode(EncodeError::InvalidElementName(_)))
    ));
}

#[test]
fn test_element_name_defaults() {
    let fields = || vec![FieldDescriptor::new("id", "autoincrement")];

    // Empty root in single mode is not an error
    let single = XmlOptions::single(vec![FieldDescriptor::new("n", "number")]);
    assert!(to_string(generate_seeded(&single, 1).unwrap()).starts_with("<xml><n>"));

    let both_empty = XmlOptions::array(1, fields());
    assert_eq!(
        to_string(generate_seeded(&both_empty, 1).unwrap()),
        "<xml><record><id>1</id></record></xml>"
    );

    let root_only = XmlOptions::array(1, fields()).with_root_element("rows");
    assert_eq!(
        to_string(generate_seeded(&root_only, 1).unwrap()),
        "<rows><record><id>1</id></record></rows>"
    );

    let record_only = XmlOptions::array(1, fields()).with_record_element("row");
    assert_eq!(
        to_string(generate_seeded(&record_only, 1).unwrap()),
        "<xml><row><id>1</id></row></xml>"
    );
}

#[test]
fn test_indentation_is_four_spaces_per_level() {
    let options = XmlOptions::array(2, vec![FieldDescriptor::new("id", "autoincrement")])
        .with_indent(true);

    let xml = to_string(generate_seeded(&options, 1).unwrap());
    assert_eq!(
        xml,
        "<xml>\n    <record>\n        <id>1</id>\n    </record>\n    <record>\n        <id>2</id>\n    </record>\n</xml>"
    );
}

#[test]
fn test_same_seed_same_document() {
    let options = XmlOptions::array(10, schema_fields()).with_indent(true);

    assert_eq!(
        generate_seeded(&options, 99).unwrap(),
        generate_seeded(&options, 99).unwrap()
    );
    assert_ne!(
        generate_seeded(&options, 99).unwrap(),
        generate_seeded(&options, 100).unwrap()
    );
}

#[test]
fn test_fixed_record_encodes_identically() {
    let record = Record::new()
        .with("name", "Ada")
        .with("scores", vec![1i64, 2, 3])
        .with("meta", Record::new().with("ok", true));
    let generated = Generated::Array(vec![record.clone(), record]);
    let encoder = XmlEncoder::new("people", "person").with_indent(true);

    assert_eq!(
        encoder.encode(&generated).unwrap(),
        encoder.encode(&generated).unwrap()
    );
}

#[test]
fn test_options_from_yaml_end_to_end() {
    let options = XmlOptions::from_yaml(
        r#"
type: array
root_element: catalog
record_element: item
row_count: 3
fields:
  - name: sku
    function: pattern
    params:
      pattern: "SKU-{rand:4}"
  - name: colors
    generator: sample_array
    params:
      pool: [red, green, blue]
      min_length: 2
      max_length: 2
"#,
    )
    .unwrap();

    let nodes = parse(&to_string(generate_seeded(&options, 11).unwrap()));
    assert_eq!(nodes.iter().filter(|n| n.name == "item").count(), 3);

    for sku in nodes.iter().filter(|n| n.name == "sku") {
        let text = sku.text.as_deref().unwrap();
        assert!(text.starts_with("SKU-"));
        assert_eq!(text.len(), 8);
    }
    assert_eq!(
        nodes
            .iter()
            .filter(|n| n.name == "value" && n.depth == 3)
            .count(),
        3 * 2
    );
}

fn serde_yaml_params(yaml: &str) -> Params {
    XmlOptions::from_yaml(&format!(
        "type: single\nfields:\n  - name: f\n    generator: static\n    params: {yaml}\n"
    ))
    .unwrap()
    .fields
    .remove(0)
    .params
}
