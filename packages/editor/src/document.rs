//! # Document Versions
//!
//! A `Document` is one version of a legislation tree: the root node, the
//! advisory selection and a revision counter. Applying a mutation never
//! changes a version in place; it returns the next one.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Parse → Edit → Serialize → Save
//!   ↓      ↓       ↓        ↓         ↓
//! File   Tree  Mutations   Text     File
//! ```

use crate::factory::NodeFactory;
use crate::mutations::{EditContext, Mutation, MutationError, MutationResult, Position};
use crate::numbering::ManualNumbering;
use crate::seed::seed_act;
use crate::EditorError;
use statute_parser::{parse, Kind, Node, Path, Serializer};
use tracing::{debug, info};

/// One version of an editable document
#[derive(Debug, Clone)]
pub struct Document {
    root: Node,
    selection: Option<Path>,

    /// Increments on every successful content or structural change
    revision: u64,

    /// Shared by every version derived from this one
    factory: NodeFactory,
    numbering: ManualNumbering,
}

impl Document {
    /// Wrap an existing tree. Ids for new nodes are seeded from the
    /// current time.
    pub fn new(root: Node) -> Self {
        let session = chrono::Utc::now().to_rfc3339();
        Self::with_factory(root, NodeFactory::for_session(&session))
    }

    pub fn with_factory(root: Node, factory: NodeFactory) -> Self {
        Self {
            root,
            selection: None,
            revision: 0,
            factory,
            numbering: ManualNumbering::default(),
        }
    }

    /// A fresh Act assented today
    pub fn seed() -> Self {
        Self::new(seed_act(chrono::Local::now().date_naive()))
    }

    /// Parse a document from text
    pub fn from_source(source: &str) -> Result<Self, EditorError> {
        let root = parse(source)?;
        Ok(Self::with_factory(root, NodeFactory::for_session(source)))
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        info!(path = %path.display(), bytes = source.len(), "loading document");
        Self::from_source(&source)
    }

    /// Write the compact serialized form to `path`
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), EditorError> {
        self.save_with(path, &mut Serializer::new())
    }

    pub fn save_with(
        &self,
        path: impl AsRef<std::path::Path>,
        serializer: &mut Serializer,
    ) -> Result<(), EditorError> {
        let path = path.as_ref();
        let source = serializer.serialize(&self.root);
        info!(path = %path.display(), revision = self.revision, "saving document");
        std::fs::write(path, source)?;
        Ok(())
    }

    /// Set the policy used when renumbering around manual labels
    pub fn with_numbering(mut self, numbering: ManualNumbering) -> Self {
        self.numbering = numbering;
        self
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn selection(&self) -> Option<&Path> {
        self.selection.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn numbering(&self) -> ManualNumbering {
        self.numbering
    }

    pub fn factory(&self) -> &NodeFactory {
        &self.factory
    }

    pub fn to_source(&self) -> String {
        statute_parser::serialize(&self.root)
    }

    pub fn to_source_pretty(&self) -> String {
        statute_parser::serialize_pretty(&self.root)
    }

    /// Apply a mutation, returning the next version. A rejected mutation
    /// yields this version unchanged.
    pub fn apply(&self, mutation: Mutation) -> Document {
        match self.try_apply(&mutation) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, revision = self.revision, "mutation rejected");
                self.clone()
            }
        }
    }

    /// Apply a mutation, reporting why it was rejected
    pub fn try_apply(&self, mutation: &Mutation) -> Result<Document, MutationError> {
        if let Mutation::Select { path } = mutation {
            return Ok(Document {
                selection: Some(path.clone()),
                ..self.clone()
            });
        }

        let mut root = self.root.clone();
        let ctx = EditContext {
            factory: &self.factory,
            numbering: self.numbering,
        };
        mutation.apply(&mut root, self.selection.as_ref(), &ctx)?;

        Ok(Document {
            root,
            selection: self.selection.clone(),
            revision: self.revision + 1,
            factory: self.factory.clone(),
            numbering: self.numbering,
        })
    }

    /// Apply a mutation only if this version is still at `expected`
    pub fn apply_at(&self, expected: u64, mutation: Mutation) -> Result<Document, EditorError> {
        if expected != self.revision {
            return Err(EditorError::StaleRevision {
                expected,
                actual: self.revision,
            });
        }
        Ok(self.apply(mutation))
    }

    /// Summary of the step from this version to `next`
    pub fn result_of(&self, next: &Document) -> MutationResult {
        MutationResult {
            revision: next.revision,
            changed: next.root != self.root,
        }
    }

    /// Same tree under a new revision, used when history restores a version
    pub(crate) fn restored_at(&self, revision: u64) -> Document {
        Document {
            revision,
            ..self.clone()
        }
    }

    pub fn select(&self, path: impl Into<Path>) -> Document {
        self.apply(Mutation::Select { path: path.into() })
    }

    pub fn update_content(&self, path: impl Into<Path>, content: impl Into<String>) -> Document {
        self.apply(Mutation::UpdateContent {
            path: path.into(),
            content: content.into(),
        })
    }

    pub fn add(&self, kind: Kind) -> Document {
        self.apply(Mutation::AddNode { kind })
    }

    pub fn move_node(
        &self,
        source: impl Into<Path>,
        target: impl Into<Path>,
        position: Position,
    ) -> Document {
        self.apply(Mutation::MoveNode {
            source: source.into(),
            target: target.into(),
            position,
            kind: None,
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::seed()
    }
}
