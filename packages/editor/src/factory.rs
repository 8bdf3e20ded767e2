//! # Node Factory
//!
//! Builds default subtrees for structural kinds. Each created node gets a
//! fresh `id` attribute from the session's [`IDGenerator`].

use crate::mutations::MutationError;
use crate::numbering::AUTO_NUMBER_ATTR;
use statute_parser::{IDGenerator, Kind, Node};

/// Kinds that can be created on demand
pub const CREATABLE_KINDS: [Kind; 9] = [
    Kind::Part,
    Kind::Subpart,
    Kind::CrossHeading,
    Kind::Section,
    Kind::Subsection,
    Kind::Para,
    Kind::Subpara,
    Kind::Subsubpara,
    Kind::DefPara,
];

pub fn is_creatable(kind: Kind) -> bool {
    CREATABLE_KINDS.contains(&kind)
}

/// Creates well-formed default nodes
#[derive(Debug, Clone)]
pub struct NodeFactory {
    ids: IDGenerator,
}

impl NodeFactory {
    pub fn new(ids: IDGenerator) -> Self {
        Self { ids }
    }

    /// Factory whose ids are seeded from `session`
    pub fn for_session(session: &str) -> Self {
        Self::new(IDGenerator::new(session))
    }

    pub fn ids(&self) -> &IDGenerator {
        &self.ids
    }

    /// Build a default subtree for `kind`
    pub fn create(&self, kind: Kind) -> Result<Node, MutationError> {
        if !is_creatable(kind) {
            return Err(MutationError::NotCreatable(kind));
        }

        let node = Node::new(kind).with_attr("id", self.ids.new_id(kind.tag_name()));

        let node = match kind {
            Kind::Part => node
                .with_child(auto_label("Part X"))
                .with_child(Node::leaf(Kind::Heading, "New Part Heading")),
            Kind::Subpart => node
                .with_child(auto_label("Subpart X"))
                .with_child(Node::leaf(Kind::Heading, "New Subpart Heading")),
            Kind::CrossHeading => node.with_child(Node::leaf(Kind::Heading, "Cross-heading")),
            Kind::Section => {
                let subsection = Node::new(Kind::Subsection)
                    .with_attr("id", self.ids.new_id(Kind::Subsection.tag_name()))
                    .with_child(Node::leaf(Kind::Label, "(1)"))
                    .with_child(Node::leaf(Kind::Text, "[Type text here...]"));
                node.with_child(auto_label("0"))
                    .with_child(Node::leaf(Kind::Heading, "[Insert section heading]"))
                    .with_child(subsection)
            }
            Kind::Subsection => labelled(node, "(x)", "[Type text here...]"),
            Kind::Para => labelled(node, "(a)", "Paragraph text..."),
            Kind::Subpara => labelled(node, "(i)", "Subparagraph text..."),
            Kind::Subsubpara => labelled(node, "(A)", "Sub-subparagraph text..."),
            Kind::DefPara => node
                .with_child(Node::leaf(Kind::DefTerm, "[Term]"))
                .with_child(Node::leaf(Kind::Text, "means [definition]")),
            _ => return Err(MutationError::NotCreatable(kind)),
        };

        Ok(node)
    }
}

fn auto_label(content: &str) -> Node {
    Node::leaf(Kind::Label, content).with_attr(AUTO_NUMBER_ATTR, "yes")
}

fn labelled(node: Node, label: &str, text: &str) -> Node {
    node.with_child(Node::leaf(Kind::Label, label))
        .with_child(Node::leaf(Kind::Text, text))
}
