//! Type-change operations and undo support.
//!
//! [`ChangeTypeCommand`] is the action bound to every menu leaf: it applies
//! one target type to every selected entry and commits the resulting edits
//! as a single named [`UndoGroup`]. One activation is one undo step, no
//! matter how many entries were selected.
//!
//! [`UndoHistory`] is the shipped [`UndoSink`]: a bounded undo stack plus a
//! redo stack of committed groups.

use serde::{Deserialize, Serialize};

use crate::model::{EntryType, Library, TypeChange};

// ────────────────────────────────────────────────────────────────────────────
// Undo group & sink
// ────────────────────────────────────────────────────────────────────────────

/// A named, atomic group of type changes.
///
/// Produced once per leaf activation and handed to the [`UndoSink`], which
/// owns it thereafter. May carry zero edits when every selected entry
/// already had the target type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoGroup {
    /// Name shown in the undo history (e.g. "Change entry type").
    pub name: String,
    /// Per-entry edits in selection order.
    pub edits: Vec<TypeChange>,
}

impl UndoGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edits: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }
}

/// Destination for completed undo groups: the host's undo history.
pub trait UndoSink {
    /// Accept one completed group. Called exactly once per activation.
    fn commit(&mut self, group: UndoGroup);
}

// ────────────────────────────────────────────────────────────────────────────
// ChangeTypeCommand
// ────────────────────────────────────────────────────────────────────────────

/// The action bound to a menu leaf: change the type of every selected entry.
///
/// A plain value capturing the target type, the selection, and the undo-group
/// name at menu-build time. The mutable collaborators (library, undo sink)
/// are passed at activation, which is when the user clicks the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTypeCommand {
    /// The type to apply.
    pub target: EntryType,
    /// Indices of the selected entries, in selection order.
    pub selection: Vec<usize>,
    /// Name for the committed undo group. Opaque localized text.
    pub undo_name: String,
}

impl ChangeTypeCommand {
    pub fn new(
        target: EntryType,
        selection: Vec<usize>,
        undo_name: impl Into<String>,
    ) -> Self {
        Self {
            target,
            selection,
            undo_name: undo_name.into(),
        }
    }

    /// Apply the target type to every selected entry and commit one undo
    /// group.
    ///
    /// Entries that already have the target type (or indices that fell out
    /// of range) produce no edit record and are skipped. The group is
    /// committed even when it ends up empty: one activation is always one
    /// undo step, matching what the user expects from a single click.
    pub fn activate(&self, library: &mut Library, undo: &mut impl UndoSink) {
        let mut group = UndoGroup::new(self.undo_name.clone());
        for &index in &self.selection {
            if let Some(change) = library.set_entry_type(index, self.target.clone()) {
                group.edits.push(change);
            }
        }
        undo.commit(group);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Undo history (undo / redo stacks)
// ────────────────────────────────────────────────────────────────────────────

/// Bounded undo/redo history of committed [`UndoGroup`]s.
///
/// # Example
///
/// ```rust,ignore
/// let mut history = UndoHistory::new(100);
/// command.activate(&mut library, &mut history);
/// history.undo(&mut library); // reverts the whole group
/// history.redo(&mut library); // re-applies it
/// ```
#[derive(Debug, Clone)]
pub struct UndoHistory {
    undo_stack: Vec<UndoGroup>,
    redo_stack: Vec<UndoGroup>,
    max_size: usize,
}

impl UndoHistory {
    /// Create a new history with the given maximum undo depth.
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Undo the most recent group, returning true if an undo was performed.
    ///
    /// Edits are reverted in reverse order of application.
    pub fn undo(&mut self, library: &mut Library) -> bool {
        if let Some(group) = self.undo_stack.pop() {
            for edit in group.edits.iter().rev() {
                apply_type(library, edit.entry_index, &edit.old_type);
            }
            self.redo_stack.push(group);
            true
        } else {
            false
        }
    }

    /// Redo the most recently undone group, returning true if a redo was
    /// performed.
    pub fn redo(&mut self, library: &mut Library) -> bool {
        if let Some(group) = self.redo_stack.pop() {
            for edit in &group.edits {
                apply_type(library, edit.entry_index, &edit.new_type);
            }
            self.undo_stack.push(group);
            true
        } else {
            false
        }
    }

    /// Returns true if there are groups to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are groups to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Name of the group `undo` would revert, if any.
    pub fn peek_undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|g| g.name.as_str())
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl UndoSink for UndoHistory {
    /// Push a committed group onto the undo stack and clear the redo stack.
    fn commit(&mut self, group: UndoGroup) {
        self.undo_stack.push(group);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }
}

/// Force an entry's type, ignoring the no-op check. Undo/redo must restore
/// the recorded state exactly, not re-derive change records.
fn apply_type(library: &mut Library, index: usize, ty: &EntryType) {
    if let Some(entry) = library.entries.get_mut(index) {
        entry.entry_type = ty.clone();
    }
}
