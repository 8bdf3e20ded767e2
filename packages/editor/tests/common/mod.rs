//! Shared fixtures for editor integration tests

#![allow(dead_code)]

use statute_editor::{Document, Kind, Node, NodeFactory, Path};
use statute_parser::IDGenerator;

/// Part 1 holds two sections and a subpart with one more section.
///
/// ```text
/// [1, 0]        part P1
/// [1, 0, 2]       section S1 { subsection S1-1 }
/// [1, 0, 3]       section S2 { subsection S2-1, subsection S2-2 }
/// [1, 0, 4]       subpart SP1
/// [1, 0, 4, 2]      section S3 { subsection S3-1 }
/// ```
pub const ACT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<act id="DLM1" date.assent="2024-05-01">
  <cover>
    <title>Test Act 2024</title>
  </cover>
  <body>
    <part id="P1">
      <label auto.number="no">Part 1</label>
      <heading>Preliminary provisions</heading>
      <section id="S1">
        <label auto.number="yes">1</label>
        <heading>Title</heading>
        <subsection id="S1-1">
          <label>(1)</label>
          <text>This Act is the Test Act 2024.</text>
        </subsection>
      </section>
      <section id="S2">
        <label auto.number="yes">2</label>
        <heading>Commencement</heading>
        <subsection id="S2-1">
          <label>(1)</label>
          <text>This Act comes into force on the day after assent.</text>
        </subsection>
        <subsection id="S2-2">
          <label>(2)</label>
          <text>Part 2 comes into force by Order in Council.</text>
        </subsection>
      </section>
      <subpart id="SP1">
        <label auto.number="yes">Subpart 1</label>
        <heading>Interpretation</heading>
        <section id="S3">
          <label auto.number="yes">1</label>
          <heading>Definitions</heading>
          <subsection id="S3-1">
            <label>(1)</label>
            <text>In this Act, unless the context otherwise requires,</text>
          </subsection>
        </section>
      </subpart>
    </part>
  </body>
</act>
"#;

pub fn fixture() -> Document {
    let root = statute_parser::parse(ACT).unwrap();
    Document::with_factory(root, NodeFactory::new(IDGenerator::from_seed("test".to_string())))
}

pub fn node<'a>(doc: &'a Document, path: &[usize]) -> &'a Node {
    doc.root()
        .get(&Path::from(path))
        .unwrap_or_else(|| panic!("no node at {:?}", path))
}

/// Ids of the `kind` children of the node at `path`, in order
pub fn ids(doc: &Document, path: &[usize], kind: Kind) -> Vec<String> {
    node(doc, path)
        .children
        .iter()
        .filter(|c| c.kind == kind)
        .map(|c| c.id().unwrap_or("-").to_string())
        .collect()
}

/// Labels of the `kind` children of the node at `path`, in order
pub fn labels(doc: &Document, path: &[usize], kind: Kind) -> Vec<String> {
    node(doc, path)
        .children
        .iter()
        .filter(|c| c.kind == kind)
        .map(|c| c.label_text().unwrap_or("-").to_string())
        .collect()
}

pub fn assert_round_trips(doc: &Document) {
    let text = doc.to_source();
    assert_eq!(&statute_parser::parse(&text).unwrap(), doc.root(), "round trip failed for {}", text);
}
