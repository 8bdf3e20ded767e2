use crate::error::UnknownKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Insertion-ordered attribute map
pub type Attributes = IndexMap<String, String>;

/// Structural role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Act,
    Cover,
    Title,
    Body,
    Part,
    Subpart,
    #[serde(rename = "crosshead")]
    CrossHeading,
    Section,
    Subsection,
    Para,
    Subpara,
    Subsubpara,
    DefPara,
    DefTerm,
    Label,
    Heading,
    Text,
    MetadataAct,
    MetadataBill,
    MetadataRow,
    MetadataKey,
    MetadataValue,
}

impl Kind {
    pub const ALL: [Kind; 22] = [
        Kind::Act,
        Kind::Cover,
        Kind::Title,
        Kind::Body,
        Kind::Part,
        Kind::Subpart,
        Kind::CrossHeading,
        Kind::Section,
        Kind::Subsection,
        Kind::Para,
        Kind::Subpara,
        Kind::Subsubpara,
        Kind::DefPara,
        Kind::DefTerm,
        Kind::Label,
        Kind::Heading,
        Kind::Text,
        Kind::MetadataAct,
        Kind::MetadataBill,
        Kind::MetadataRow,
        Kind::MetadataKey,
        Kind::MetadataValue,
    ];

    /// Element name used in the textual format
    pub fn tag_name(self) -> &'static str {
        match self {
            Kind::Act => "act",
            Kind::Cover => "cover",
            Kind::Title => "title",
            Kind::Body => "body",
            Kind::Part => "part",
            Kind::Subpart => "subpart",
            Kind::CrossHeading => "crosshead",
            Kind::Section => "section",
            Kind::Subsection => "subsection",
            Kind::Para => "para",
            Kind::Subpara => "subpara",
            Kind::Subsubpara => "subsubpara",
            Kind::DefPara => "def-para",
            Kind::DefTerm => "def-term",
            Kind::Label => "label",
            Kind::Heading => "heading",
            Kind::Text => "text",
            Kind::MetadataAct => "metadata-act",
            Kind::MetadataBill => "metadata-bill",
            Kind::MetadataRow => "metadata-row",
            Kind::MetadataKey => "metadata-key",
            Kind::MetadataValue => "metadata-value",
        }
    }

    /// Text-bearing kinds. Their payload lives in `content`, never in `children`.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            Kind::Text
                | Kind::Label
                | Kind::Heading
                | Kind::Title
                | Kind::DefTerm
                | Kind::MetadataKey
                | Kind::MetadataValue
        )
    }

    pub fn is_container(self) -> bool {
        !self.is_leaf()
    }

    pub fn is_metadata(self) -> bool {
        matches!(
            self,
            Kind::MetadataAct
                | Kind::MetadataBill
                | Kind::MetadataRow
                | Kind::MetadataKey
                | Kind::MetadataValue
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag_name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Position of a node as child indices from the root.
///
/// Paths address by position, not identity: any insert, remove or move
/// along the way invalidates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<usize>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Index within the parent's children (`None` for the root)
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            Some(Path(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    pub fn child(&self, index: usize) -> Path {
        let mut indices = self.0.clone();
        indices.push(index);
        Path(indices)
    }

    /// True when `prefix` is this path or one of its ancestors
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for Path {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}

/// A node of the legislation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            attributes: None,
            content: None,
            children: Vec::new(),
        }
    }

    /// Text-bearing node
    pub fn leaf(kind: Kind, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::new(kind)
        }
    }

    pub fn container(kind: Kind, children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::new(kind)
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.get(name))
            .map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name.into(), value.into());
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Resolve a descendant by path
    pub fn get(&self, path: &Path) -> Option<&Node> {
        let mut current = self;
        for &index in path.indices() {
            current = current.children.get(index)?;
        }
        Some(current)
    }

    pub fn get_mut(&mut self, path: &Path) -> Option<&mut Node> {
        let mut current = self;
        for &index in path.indices() {
            current = current.children.get_mut(index)?;
        }
        Some(current)
    }

    /// First direct child of `kind`
    pub fn child_of_kind(&self, kind: Kind) -> Option<&Node> {
        self.children.iter().find(|c| c.kind == kind)
    }

    pub fn label(&self) -> Option<&Node> {
        self.child_of_kind(Kind::Label)
    }

    /// Label text, if the node carries a label
    pub fn label_text(&self) -> Option<&str> {
        self.label().and_then(|l| l.content.as_deref())
    }

    /// Depth-first search for the node carrying `id`, returning its path
    pub fn find_by_id(&self, id: &str) -> Option<Path> {
        fn walk(node: &Node, id: &str, path: &mut Vec<usize>) -> Option<Path> {
            if node.id() == Some(id) {
                return Some(Path::new(path.clone()));
            }
            for (i, child) in node.children.iter().enumerate() {
                path.push(i);
                if let Some(found) = walk(child, id, path) {
                    return Some(found);
                }
                path.pop();
            }
            None
        }

        walk(self, id, &mut Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::container(
            Kind::Act,
            vec![
                Node::container(Kind::Cover, vec![Node::leaf(Kind::Title, "Act")]),
                Node::container(
                    Kind::Body,
                    vec![Node::new(Kind::Part)
                        .with_attr("id", "P1")
                        .with_child(Node::leaf(Kind::Label, "Part 1"))],
                ),
            ],
        )
    }

    #[test]
    fn test_kind_tag_names_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(kind.tag_name().parse::<Kind>().unwrap(), kind);
        }
        assert!("chapter".parse::<Kind>().is_err());
    }

    #[test]
    fn test_kind_serde_uses_tag_names() {
        let json = serde_json::to_string(&Kind::CrossHeading).unwrap();
        assert_eq!(json, "\"crosshead\"");
        let json = serde_json::to_string(&Kind::MetadataValue).unwrap();
        assert_eq!(json, "\"metadata-value\"");
        let kind: Kind = serde_json::from_str("\"def-para\"").unwrap();
        assert_eq!(kind, Kind::DefPara);
    }

    #[test]
    fn test_leaf_predicates() {
        assert!(Kind::Label.is_leaf());
        assert!(Kind::MetadataKey.is_leaf());
        assert!(Kind::Section.is_container());
        assert!(Kind::MetadataRow.is_container());
        assert!(Kind::MetadataRow.is_metadata());
        assert!(!Kind::Part.is_metadata());
    }

    #[test]
    fn test_path_navigation() {
        let root = sample();
        let path = Path::from(vec![1, 0, 0]);
        assert_eq!(root.get(&path).unwrap().content.as_deref(), Some("Part 1"));
        assert!(root.get(&Path::from(vec![1, 3])).is_none());
        assert_eq!(root.get(&Path::root()).unwrap().kind, Kind::Act);

        assert_eq!(path.parent(), Some(Path::from(vec![1, 0])));
        assert_eq!(path.last(), Some(0));
        assert!(path.starts_with(&Path::from(vec![1])));
        assert!(!Path::from(vec![1]).starts_with(&path));
        assert_eq!(Path::root().parent(), None);
        assert_eq!(path.to_string(), "/1/0/0");
    }

    #[test]
    fn test_find_by_id() {
        let root = sample();
        assert_eq!(root.find_by_id("P1"), Some(Path::from(vec![1, 0])));
        assert_eq!(root.find_by_id("missing"), None);
    }

    #[test]
    fn test_attribute_helpers() {
        let mut node = Node::new(Kind::Label);
        assert!(node.attributes.is_none());
        node.set_attr("auto.number", "no");
        assert_eq!(node.attr("auto.number"), Some("no"));
        assert_eq!(node.attr("id"), None);
    }
}
