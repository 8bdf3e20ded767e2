//! Starting tree for a new Act

use crate::numbering::AUTO_NUMBER_ATTR;
use chrono::{Datelike, NaiveDate};
use statute_parser::{Kind, Node};

/// A minimal Act: one Part holding one Section.
pub fn seed_act(assent: NaiveDate) -> Node {
    let year = assent.year();

    let section = Node::new(Kind::Section)
        .with_attr("id", "S1")
        .with_child(Node::leaf(Kind::Label, "1").with_attr(AUTO_NUMBER_ATTR, "yes"))
        .with_child(Node::leaf(Kind::Heading, "Title"))
        .with_child(
            Node::new(Kind::Subsection)
                .with_attr("id", "S1-1")
                .with_child(Node::leaf(Kind::Label, "(1)"))
                .with_child(Node::leaf(
                    Kind::Text,
                    format!("This Act is the New Legislation Act {}.", year),
                )),
        );

    let part = Node::new(Kind::Part)
        .with_attr("id", "P1")
        .with_child(Node::leaf(Kind::Label, "Part 1").with_attr(AUTO_NUMBER_ATTR, "no"))
        .with_child(Node::leaf(Kind::Heading, "Preliminary provisions"))
        .with_child(section);

    Node::new(Kind::Act)
        .with_attr("date.assent", assent.format("%Y-%m-%d").to_string())
        .with_attr("id", "DLM_NEW")
        .with_child(
            Node::new(Kind::Cover)
                .with_child(Node::leaf(Kind::Title, format!("New Legislation Act {}", year))),
        )
        .with_child(Node::new(Kind::Body).with_child(part))
}
