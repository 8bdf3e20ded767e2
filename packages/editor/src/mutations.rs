//! # Tree Mutations
//!
//! Structural operations on a legislation tree.
//!
//! ## Mutation Semantics
//!
//! ### AddNode
//! - Walks upward from the selection looking for a node that accepts the
//!   new kind; direct containment beats sibling placement at every level
//! - Without a selection, starts at the Body
//! - Renumbers the receiving sibling group
//!
//! ### MoveNode
//! - Relocates a subtree before or after a target node
//! - Fails on cycles and on incompatible kinds
//! - Leaf kinds only reorder within their own parent
//! - Renumbers both the old and the new sibling group
//!
//! ### UpdateContent
//! - Atomic replacement of a leaf's text
//!
//! Every check runs before the tree is touched, and callers apply to their
//! own copy, so a rejected mutation never leaves a partial edit behind.

use crate::factory::{is_creatable, NodeFactory};
use crate::hierarchy::{accepts, move_compatible};
use crate::numbering::{renumber_in_place, ManualNumbering};
use serde::{Deserialize, Serialize};
use statute_parser::{Kind, Node, Path};
use thiserror::Error;
use tracing::debug;

/// Drop position relative to the target node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Before,
    After,
}

/// Editing commands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Set the advisory selection (not validated)
    Select { path: Path },

    /// Replace the text of the node at `path`
    UpdateContent { path: Path, content: String },

    /// Create a node of `kind` near the current selection
    AddNode { kind: Kind },

    /// Move the subtree at `source` next to `target`.
    ///
    /// `kind` is the kind the caller believes it is dragging; when given it
    /// must match the node found at `source`.
    MoveNode {
        source: Path,
        target: Path,
        position: Position,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<Kind>,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(Path),

    #[error("No valid place to insert {0} from the current selection")]
    NoInsertionPoint(Kind),

    #[error("Kind {0} cannot be created")]
    NotCreatable(Kind),

    #[error("Would create cycle: {target} is inside {moved}")]
    CycleDetected { moved: Path, target: Path },

    #[error("Cannot move {moved} next to {target}")]
    IncompatibleKinds { moved: Kind, target: Kind },

    #[error("{parent} cannot contain {child}")]
    HierarchyViolation { parent: Kind, child: Kind },

    #[error("Expected {expected} at {path}, found {found}")]
    KindMismatch {
        path: Path,
        expected: Kind,
        found: Kind,
    },

    #[error("{kind} at {path} does not hold text")]
    NotTextBearing { path: Path, kind: Kind },

    #[error("Node at {0} has children; edit its text nodes instead")]
    HasChildren(Path),

    #[error("{kind} can only be reordered within {parent}")]
    LeafOutsideParent { kind: Kind, parent: Path },

    #[error("Source and target are the same node")]
    SamePath,

    #[error("The root node cannot be moved")]
    RootNotMovable,
}

/// Collaborators a mutation needs besides the tree itself
#[derive(Debug, Clone, Copy)]
pub struct EditContext<'a> {
    pub factory: &'a NodeFactory,
    pub numbering: ManualNumbering,
}

/// Where a new node goes: `parent.children.insert(index, ..)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPoint {
    pub parent: Path,
    pub index: usize,
}

impl Mutation {
    /// Apply to `root`. Selection changes are handled by the document, so
    /// `Select` is a no-op here.
    pub fn apply(
        &self,
        root: &mut Node,
        selection: Option<&Path>,
        ctx: &EditContext<'_>,
    ) -> Result<(), MutationError> {
        match self {
            Mutation::Select { .. } => Ok(()),

            Mutation::UpdateContent { path, content } => {
                Self::apply_update_content(root, path, content)
            }

            Mutation::AddNode { kind } => Self::apply_add(root, selection, *kind, ctx),

            Mutation::MoveNode {
                source,
                target,
                position,
                kind,
            } => Self::apply_move(root, source, target, *position, *kind, ctx.numbering),
        }
    }

    /// Whether the mutation touches the tree (as opposed to selection only)
    pub fn is_structural(&self) -> bool {
        !matches!(self, Mutation::Select { .. })
    }

    fn apply_update_content(root: &mut Node, path: &Path, content: &str) -> Result<(), MutationError> {
        let node = root
            .get_mut(path)
            .ok_or_else(|| MutationError::NodeNotFound(path.clone()))?;

        if node.kind.is_container() {
            return Err(MutationError::NotTextBearing {
                path: path.clone(),
                kind: node.kind,
            });
        }
        if node.has_children() {
            return Err(MutationError::HasChildren(path.clone()));
        }

        node.content = Some(content.to_string());
        Ok(())
    }

    fn apply_add(
        root: &mut Node,
        selection: Option<&Path>,
        kind: Kind,
        ctx: &EditContext<'_>,
    ) -> Result<(), MutationError> {
        if !is_creatable(kind) {
            return Err(MutationError::NotCreatable(kind));
        }

        let point = find_insertion_point(root, selection, kind)
            .ok_or(MutationError::NoInsertionPoint(kind))?;
        let node = ctx.factory.create(kind)?;

        let parent = root
            .get_mut(&point.parent)
            .ok_or_else(|| MutationError::NodeNotFound(point.parent.clone()))?;
        let index = point.index.min(parent.children.len());

        debug!(%kind, parent = %point.parent, index, "inserting node");
        parent.children.insert(index, node);
        renumber_in_place(&mut parent.children, kind, ctx.numbering);

        Ok(())
    }

    fn apply_move(
        root: &mut Node,
        source: &Path,
        target: &Path,
        position: Position,
        expected_kind: Option<Kind>,
        numbering: ManualNumbering,
    ) -> Result<(), MutationError> {
        if source == target {
            return Err(MutationError::SamePath);
        }

        let (Some(source_parent), Some(source_index)) = (source.parent(), source.last()) else {
            return Err(MutationError::RootNotMovable);
        };
        if target.is_root() {
            return Err(MutationError::RootNotMovable);
        }

        let moved_kind = root
            .get(source)
            .ok_or_else(|| MutationError::NodeNotFound(source.clone()))?
            .kind;

        if let Some(expected) = expected_kind {
            if expected != moved_kind {
                return Err(MutationError::KindMismatch {
                    path: source.clone(),
                    expected,
                    found: moved_kind,
                });
            }
        }

        if target.starts_with(source) {
            return Err(MutationError::CycleDetected {
                moved: source.clone(),
                target: target.clone(),
            });
        }

        let target_kind = root
            .get(target)
            .ok_or_else(|| MutationError::NodeNotFound(target.clone()))?
            .kind;
        if !move_compatible(moved_kind, target_kind) {
            return Err(MutationError::IncompatibleKinds {
                moved: moved_kind,
                target: target_kind,
            });
        }

        let target_parent = target.parent().ok_or(MutationError::RootNotMovable)?;
        // a label or heading belongs to the node that owns it
        if moved_kind.is_leaf() && target_parent != source_parent {
            return Err(MutationError::LeafOutsideParent {
                kind: moved_kind,
                parent: source_parent,
            });
        }

        let target_parent_kind = root
            .get(&target_parent)
            .ok_or_else(|| MutationError::NodeNotFound(target_parent.clone()))?
            .kind;
        if !accepts(target_parent_kind, moved_kind) {
            return Err(MutationError::HierarchyViolation {
                parent: target_parent_kind,
                child: moved_kind,
            });
        }

        let same_parent = source_parent == target_parent;

        // Remove
        let parent = root
            .get_mut(&source_parent)
            .ok_or_else(|| MutationError::NodeNotFound(source_parent.clone()))?;
        let moved = parent.children.remove(source_index);
        if !same_parent {
            renumber_in_place(&mut parent.children, moved_kind, numbering);
        }

        // Re-resolve the target now that later siblings have shifted
        let adjusted = shift_after_removal(source, target);
        let (Some(target_parent), Some(target_index)) = (adjusted.parent(), adjusted.last()) else {
            return Err(MutationError::RootNotMovable);
        };

        let parent = root
            .get_mut(&target_parent)
            .ok_or_else(|| MutationError::NodeNotFound(target_parent.clone()))?;
        let index = match position {
            Position::Before => target_index,
            Position::After => target_index + 1,
        }
        .min(parent.children.len());

        debug!(%moved_kind, from = %source, to = %target_parent, index, "moving node");
        parent.children.insert(index, moved);
        renumber_in_place(&mut parent.children, moved_kind, numbering);

        Ok(())
    }
}

/// Find where a new `kind` node goes, walking up from `selection`.
///
/// At each level the node itself is tried as the parent first, then the
/// node's parent (placing the new node right after it). Returns `None` when
/// the selection does not resolve or no ancestor can host `kind`.
pub fn find_insertion_point(root: &Node, selection: Option<&Path>, kind: Kind) -> Option<InsertionPoint> {
    let mut current = match selection {
        Some(path) => path.clone(),
        None if root.kind == Kind::Body => Path::root(),
        None => {
            let body = root.children.iter().position(|c| c.kind == Kind::Body)?;
            Path::root().child(body)
        }
    };

    loop {
        let node = root.get(&current)?;
        if accepts(node.kind, kind) {
            return Some(InsertionPoint {
                parent: current,
                index: node.children.len(),
            });
        }

        let parent_path = current.parent()?;
        let parent = root.get(&parent_path)?;
        if accepts(parent.kind, kind) {
            let index = current.last()? + 1;
            return Some(InsertionPoint {
                parent: parent_path,
                index,
            });
        }

        current = parent_path;
    }
}

/// Rewrite `path` as it reads after the node at `removed` is taken out.
///
/// Removal shifts every later sibling of `removed` down by one, and with
/// them every path running through those siblings.
pub fn shift_after_removal(removed: &Path, path: &Path) -> Path {
    let Some(removed_index) = removed.last() else {
        return path.clone();
    };
    let depth = removed.len() - 1;
    let mut indices = path.indices().to_vec();

    if indices.len() > depth
        && indices[..depth] == removed.indices()[..depth]
        && indices[depth] > removed_index
    {
        indices[depth] -= 1;
    }

    Path::new(indices)
}

/// Parse a JSON array of mutations
pub fn parse_script(json: &str) -> Result<Vec<Mutation>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Result of applying a mutation to a document
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Revision after the mutation
    pub revision: u64,

    /// Whether the tree changed
    pub changed: bool,
}
