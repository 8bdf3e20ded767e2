//! # Statute Editor
//!
//! Structural editing engine for legislation trees.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ parser: text ⇄ Node tree                    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document versions + mutations       │
//! │  - Hierarchy table (who may contain whom)   │
//! │  - Insertion-point inference                │
//! │  - Move/reorder with cycle checks           │
//! │  - Sibling renumbering                      │
//! │  - Undo/redo history                        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Versions are values**: every mutation returns a new `Document`
//! 2. **All or nothing**: a rejected mutation returns the version unchanged
//! 3. **One rulebook**: structural rules live only in [`hierarchy`]
//! 4. **Labels follow position**: numbered siblings are relabelled after
//!    every structural change
//!
//! ## Usage
//!
//! ```rust,ignore
//! use statute_editor::{Document, Kind, Position};
//!
//! let doc = Document::load("act.xml")?;
//!
//! let doc = doc.select(vec![1, 0, 2]).add(Kind::Subsection);
//! let doc = doc.move_node(vec![1, 0, 3], vec![1, 0, 2], Position::Before);
//!
//! doc.save("act.xml")?;
//! ```

mod document;
mod errors;
pub mod factory;
pub mod hierarchy;
mod history;
mod mutations;
pub mod numbering;
mod seed;

pub use document::Document;
pub use errors::EditorError;
pub use factory::NodeFactory;
pub use history::{History, HistoryEntry};
pub use mutations::{
    find_insertion_point, parse_script, shift_after_removal, EditContext, InsertionPoint, Mutation,
    MutationError, MutationResult, Position,
};
pub use numbering::ManualNumbering;
pub use seed::seed_act;

// Re-export common types for convenience
pub use statute_parser::{Kind, Node, Path};
