//! # Undo/Redo History
//!
//! Tracks document versions and enables undo/redo.
//!
//! ## Design
//!
//! - Versions are immutable, so undo keeps the version that preceded a step
//!   rather than computing an inverse mutation
//! - Undo restores that version and moves the current one to the redo stack
//! - New mutations clear the redo stack
//! - Selection changes and rejected mutations are not recorded
//! - Supports batched operations (group multiple mutations as one undo step)
//! - A restored version gets a fresh revision, so a token taken before the
//!   undo is still recognised as stale
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(Document::seed());
//!
//! history.apply(Mutation::AddNode { kind: Kind::Part });
//! history.undo();
//! history.redo();
//! ```

use crate::{Document, Mutation, MutationError};
use tracing::debug;

/// One undo step: the version to return to
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Version before the step was applied
    pub before: Document,

    /// Mutations that made up the step (in application order)
    pub mutations: Vec<Mutation>,

    /// Optional description of this step
    pub description: Option<String>,
}

impl HistoryEntry {
    fn new(before: Document) -> Self {
        Self {
            before,
            mutations: Vec::new(),
            description: None,
        }
    }
}

/// Undo/redo history over document versions
#[derive(Debug)]
pub struct History {
    current: Document,

    /// Steps that can be undone (most recent last)
    undo_stack: Vec<HistoryEntry>,

    /// Steps that can be redone (most recent last)
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<HistoryEntry>,
}

impl History {
    /// Create a history with default max levels (100)
    pub fn new(document: Document) -> Self {
        Self::with_max_levels(document, 100)
    }

    pub fn with_max_levels(document: Document, max_levels: usize) -> Self {
        Self {
            current: document,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    pub fn current(&self) -> &Document {
        &self.current
    }

    /// Apply a mutation, recording it for undo. Rejected mutations leave
    /// both the document and the history untouched.
    pub fn apply(&mut self, mutation: Mutation) -> &Document {
        if let Err(error) = self.try_apply(mutation) {
            debug!(%error, "mutation rejected");
        }
        &self.current
    }

    pub fn try_apply(&mut self, mutation: Mutation) -> Result<&Document, MutationError> {
        let next = self.current.try_apply(&mutation)?;

        if mutation.is_structural() {
            let before = std::mem::replace(&mut self.current, next);
            if let Some(batch) = &mut self.current_batch {
                batch.mutations.push(mutation);
            } else {
                let mut entry = HistoryEntry::new(before);
                entry.mutations.push(mutation);
                self.push_entry(entry);
            }
        } else {
            self.current = next;
        }

        Ok(&self.current)
    }

    /// Start a batch of mutations (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(HistoryEntry::new(self.current.clone()));
    }

    /// End the current batch and push it to the undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.mutations.is_empty() {
                self.push_entry(batch);
            }
        }
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        self.redo_stack.clear();
    }

    /// Undo the most recent step. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.undo_stack.pop() else {
            return false;
        };

        let revision = self.current.revision() + 1;
        let restored = entry.before.restored_at(revision);
        let undone = std::mem::replace(&mut self.current, restored);
        debug!(revision, mutations = entry.mutations.len(), "undo");

        self.redo_stack.push(HistoryEntry {
            before: undone,
            mutations: entry.mutations,
            description: entry.description,
        });
        true
    }

    /// Redo the most recently undone step
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.redo_stack.pop() else {
            return false;
        };

        let revision = self.current.revision() + 1;
        let restored = entry.before.restored_at(revision);
        let redone = std::mem::replace(&mut self.current, restored);
        debug!(revision, mutations = entry.mutations.len(), "redo");

        self.undo_stack.push(HistoryEntry {
            before: redone,
            mutations: entry.mutations,
            description: entry.description,
        });
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history, keeping the current version
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    pub fn into_current(self) -> Document {
        self.current
    }
}
