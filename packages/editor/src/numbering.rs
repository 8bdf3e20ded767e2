//! # Numbering Engine
//!
//! Rewrites the labels of an ordered sibling group so that every node of
//! one kind carries its 1-based position among siblings of that kind.
//!
//! | kind       | label         |
//! |------------|---------------|
//! | section    | `1`           |
//! | subsection | `(1)`         |
//! | para       | `(a)`         |
//! | subpara    | `(i)`         |
//! | subsubpara | `(A)`         |
//!
//! A label with `auto.number="no"` is never rewritten.

use serde::{Deserialize, Serialize};
use statute_parser::{Kind, Node};

/// Label attribute controlling renumbering
pub const AUTO_NUMBER_ATTR: &str = "auto.number";

const ROMANS: [&str; 10] = ["i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x"];

/// How a manually numbered sibling affects the counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManualNumbering {
    /// The manual label keeps its place in the sequence
    #[default]
    Reserve,
    /// The manual label is left out of the sequence entirely
    Exclude,
}

/// Kinds whose labels are derived from position
pub fn is_auto_numbered(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Section | Kind::Subsection | Kind::Para | Kind::Subpara | Kind::Subsubpara
    )
}

/// Display label for the `n`th (1-based) node of `kind`
pub fn format_label(kind: Kind, n: usize) -> Option<String> {
    let label = match kind {
        Kind::Section => n.to_string(),
        Kind::Subsection => format!("({})", n),
        Kind::Para => format!("({})", letter(n, b'a')),
        Kind::Subpara => match n.checked_sub(1).and_then(|i| ROMANS.get(i)) {
            Some(roman) => format!("({})", roman),
            None => format!("({})", n),
        },
        Kind::Subsubpara => format!("({})", letter(n, b'A')),
        _ => return None,
    };
    Some(label)
}

/// `1 -> a`, `26 -> z`; past the alphabet the plain number is used
fn letter(n: usize, base: u8) -> String {
    if (1..=26).contains(&n) {
        char::from(base + (n - 1) as u8).to_string()
    } else {
        n.to_string()
    }
}

fn is_manual(label: &Node) -> bool {
    label.attr(AUTO_NUMBER_ATTR) == Some("no")
}

/// Renumber `kind` siblings, returning a new sequence
pub fn renumber(siblings: &[Node], kind: Kind) -> Vec<Node> {
    renumber_with(siblings, kind, ManualNumbering::default())
}

pub fn renumber_with(siblings: &[Node], kind: Kind, policy: ManualNumbering) -> Vec<Node> {
    let mut renumbered = siblings.to_vec();
    renumber_in_place(&mut renumbered, kind, policy);
    renumbered
}

/// Renumber `kind` siblings in place. Descendants are never visited.
pub fn renumber_in_place(siblings: &mut [Node], kind: Kind, policy: ManualNumbering) {
    if !is_auto_numbered(kind) {
        return;
    }

    let mut counter = 1;
    for node in siblings.iter_mut().filter(|n| n.kind == kind) {
        let Some(label) = node.children.iter_mut().find(|c| c.kind == Kind::Label) else {
            counter += 1;
            continue;
        };

        if is_manual(label) {
            if policy == ManualNumbering::Reserve {
                counter += 1;
            }
            continue;
        }

        label.content = format_label(kind, counter);
        counter += 1;
    }
}
