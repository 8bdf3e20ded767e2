/// Round-trip tests: parse(serialize(t)) must rebuild t exactly
use crate::*;

fn subsection(label: &str, text: &str) -> Node {
    Node::new(Kind::Subsection)
        .with_child(Node::leaf(Kind::Label, label))
        .with_child(Node::leaf(Kind::Text, text))
}

fn act() -> Node {
    Node::new(Kind::Act)
        .with_attr("date.assent", "2024-05-01")
        .with_attr("id", "DLM_NEW")
        .with_child(
            Node::new(Kind::Cover)
                .with_child(Node::leaf(Kind::Title, "New Legislation Act 2024"))
                .with_child(
                    Node::new(Kind::MetadataAct).with_child(
                        Node::new(Kind::MetadataRow)
                            .with_child(Node::leaf(Kind::MetadataKey, "Commencement"))
                            .with_child(Node::leaf(Kind::MetadataValue, "1 July 2024")),
                    ),
                ),
        )
        .with_child(
            Node::new(Kind::Body).with_child(
                Node::new(Kind::Part)
                    .with_attr("id", "P1")
                    .with_child(Node::leaf(Kind::Label, "Part 1").with_attr("auto.number", "no"))
                    .with_child(Node::leaf(Kind::Heading, "Preliminary provisions"))
                    .with_child(
                        Node::new(Kind::CrossHeading)
                            .with_child(Node::leaf(Kind::Heading, "Cross-heading")),
                    )
                    .with_child(
                        Node::new(Kind::Section)
                            .with_attr("id", "S1")
                            .with_child(Node::leaf(Kind::Label, "1").with_attr("auto.number", "yes"))
                            .with_child(Node::leaf(Kind::Heading, "Title"))
                            .with_child(subsection("(1)", "This Act is the New Legislation Act 2024."))
                            .with_child(
                                subsection("(2)", "In this Act,").with_child(
                                    Node::new(Kind::DefPara)
                                        .with_child(Node::leaf(Kind::DefTerm, "Minister"))
                                        .with_child(Node::leaf(Kind::Text, "means the Minister of Justice")),
                                ),
                            ),
                    ),
            ),
        )
}

#[test]
fn test_roundtrip_full_act() {
    let tree = act();
    let serialized = serialize(&tree);
    let reparsed = parse(&serialized).expect("serialized act should parse");
    assert_eq!(reparsed, tree);
}

#[test]
fn test_roundtrip_pretty_act() {
    let tree = act();
    let serialized = serialize_pretty(&tree);
    let reparsed = parse(&serialized).expect("pretty act should parse");
    assert_eq!(reparsed, tree);
}

#[test]
fn test_roundtrip_custom_indent() {
    let tree = act();
    let serialized = Serializer::with_indent("\t").serialize(&tree);
    assert!(serialized.contains("\n\t<cover>"));
    assert_eq!(parse(&serialized).unwrap(), tree);
}

#[test]
fn test_roundtrip_reserved_characters() {
    let samples = vec![
        "<", ">", "&", "'", "\"",
        "a < b && c > d",
        "&amp; already escaped",
        r#"He said "it's <fine>""#,
    ];

    for sample in samples {
        let tree = Node::new(Kind::Subsection)
            .with_attr("note", sample)
            .with_child(Node::leaf(Kind::Label, "(1)"))
            .with_child(Node::leaf(Kind::Text, sample));
        let serialized = serialize(&tree);
        let reparsed = parse(&serialized).unwrap_or_else(|e| panic!("failed to reparse {}: {}", serialized, e));
        assert_eq!(reparsed, tree, "sample {:?}", sample);
    }
}

#[test]
fn test_roundtrip_preserves_edge_whitespace_in_leaves() {
    let tree = Node::new(Kind::Subsection).with_child(Node::leaf(Kind::Text, "  padded text  "));
    assert_eq!(parse(&serialize(&tree)).unwrap(), tree);
}

#[test]
fn test_roundtrip_preserves_attribute_order() {
    let tree = Node::new(Kind::Section)
        .with_attr("id", "S9")
        .with_attr("status", "draft")
        .with_attr("amended", "no")
        .with_child(Node::leaf(Kind::Label, "9"));
    let reparsed = parse(&serialize(&tree)).unwrap();

    let keys: Vec<&str> = reparsed
        .attributes
        .as_ref()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["id", "status", "amended"]);
}

#[test]
fn test_serialize_is_idempotent_view() {
    let tree = act();
    let once = serialize(&tree);
    let twice = serialize(&parse(&once).unwrap());
    assert_eq!(once, twice);
}
