//! Property-Based Tests for the mutation engine
//!
//! Random edit sequences are replayed against the test Act.
//!
//! ## Properties Verified
//!
//! - Round trip: every reachable tree serializes and parses back equal
//! - Atomicity: a rejected mutation returns the version unchanged
//! - Well-formedness: every parent/child pair satisfies the hierarchy table
//! - Numbering: every numbered sibling group reads 1, 2, 3, ...

mod common;

use common::fixture;
use proptest::prelude::*;
use statute_editor::hierarchy::accepts;
use statute_editor::numbering::{format_label, is_auto_numbered};
use statute_editor::{Document, Kind, Mutation, Node, Path, Position};

/// Node selectors are resolved against the tree at replay time so that most
/// generated operations hit real nodes.
#[derive(Debug, Clone)]
enum Op {
    Select(usize),
    SelectDangling(Vec<usize>),
    Add(Kind),
    Move(usize, usize, bool),
    Update(usize, String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => any::<usize>().prop_map(Op::Select),
        1 => prop::collection::vec(0usize..8, 0..5).prop_map(Op::SelectDangling),
        3 => prop::sample::select(Kind::ALL.to_vec()).prop_map(Op::Add),
        3 => (any::<usize>(), any::<usize>(), any::<bool>()).prop_map(|(s, t, after)| Op::Move(s, t, after)),
        2 => (any::<usize>(), "[a-zA-Z0-9 <>&'\"().,;-]{0,16}").prop_map(|(p, text)| Op::Update(p, text)),
    ]
}

fn all_paths(node: &Node, at: Path, out: &mut Vec<Path>) {
    for (i, child) in node.children.iter().enumerate() {
        all_paths(child, at.child(i), out);
    }
    out.push(at);
}

fn pick(paths: &[Path], selector: usize) -> Path {
    paths[selector % paths.len()].clone()
}

fn to_mutation(doc: &Document, op: &Op) -> Mutation {
    let mut paths = Vec::new();
    all_paths(doc.root(), Path::root(), &mut paths);

    match op {
        Op::Select(i) => Mutation::Select { path: pick(&paths, *i) },
        Op::SelectDangling(indices) => Mutation::Select {
            path: Path::from(indices.clone()),
        },
        Op::Add(kind) => Mutation::AddNode { kind: *kind },
        Op::Move(s, t, after) => Mutation::MoveNode {
            source: pick(&paths, *s),
            target: pick(&paths, *t),
            position: if *after { Position::After } else { Position::Before },
            kind: None,
        },
        Op::Update(i, content) => {
            // relabelling by hand would break the numbering property
            let editable: Vec<Path> = paths
                .iter()
                .filter(|p| doc.root().get(p).is_some_and(|n| n.kind != Kind::Label))
                .cloned()
                .collect();
            Mutation::UpdateContent {
                path: pick(&editable, *i),
                content: content.clone(),
            }
        }
    }
}

fn check_well_formed(node: &Node) -> Result<(), TestCaseError> {
    for child in &node.children {
        prop_assert!(accepts(node.kind, child.kind), "{} inside {}", child.kind, node.kind);
        check_well_formed(child)?;
    }
    Ok(())
}

fn check_numbering(node: &Node) -> Result<(), TestCaseError> {
    for kind in Kind::ALL.into_iter().filter(|k| is_auto_numbered(*k)) {
        let siblings = node.children.iter().filter(|c| c.kind == kind);
        for (i, sibling) in siblings.enumerate() {
            prop_assert_eq!(
                sibling.label_text().map(str::to_string),
                format_label(kind, i + 1),
                "{} #{} under {}",
                kind,
                i + 1,
                node.kind
            );
        }
    }
    for child in &node.children {
        check_numbering(child)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    /// Property: reachable trees stay well formed, numbered and round-trippable
    #[test]
    fn prop_edit_sequences_preserve_invariants(ops in prop::collection::vec(arb_op(), 1..24)) {
        let mut doc = fixture();

        for op in &ops {
            let mutation = to_mutation(&doc, op);

            doc = match doc.try_apply(&mutation) {
                Ok(next) => {
                    check_well_formed(next.root())?;
                    check_numbering(next.root())?;
                    next
                }
                Err(_) => {
                    let unchanged = doc.apply(mutation);
                    prop_assert_eq!(unchanged.root(), doc.root());
                    prop_assert_eq!(unchanged.revision(), doc.revision());
                    unchanged
                }
            };
        }

        let text = doc.to_source();
        let parsed = statute_parser::parse(&text).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(&parsed, doc.root());

        let pretty = doc.to_source_pretty();
        let parsed = statute_parser::parse(&pretty).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(&parsed, doc.root());
    }

    /// Property: revisions only move forward, one step per accepted change
    #[test]
    fn prop_revision_counts_accepted_changes(ops in prop::collection::vec(arb_op(), 1..16)) {
        let mut doc = fixture();
        let mut accepted = 0;

        for op in &ops {
            let mutation = to_mutation(&doc, op);
            let structural = mutation.is_structural();
            if let Ok(next) = doc.try_apply(&mutation) {
                if structural {
                    accepted += 1;
                }
                doc = next;
            }
        }

        prop_assert_eq!(doc.revision(), accepted);
    }
}
