//! Grouped undo/redo history for the headless editor.
//!
//! Every primitive edit is recorded as a [`TextEdit`] tagged with a group id. Edits made
//! between `begin_group` and `end_group` share one id and are undone or redone together,
//! which is how a whole "erase all misspellings" pass becomes a single undo step.

/// One recorded replacement: `deleted` was at `offset` and got replaced by `inserted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Byte offset of the edit.
    pub offset: usize,
    /// Bytes removed.
    pub deleted: Vec<u8>,
    /// Bytes inserted.
    pub inserted: Vec<u8>,
}

#[derive(Debug, Clone)]
struct UndoStep {
    group_id: usize,
    edit: TextEdit,
}

/// Undo/redo stacks with nesting-aware edit groups.
#[derive(Debug)]
pub struct UndoRedoManager {
    undo_stack: Vec<UndoStep>,
    redo_stack: Vec<UndoStep>,
    max_undo: usize,
    next_group_id: usize,
    open_group: Option<usize>,
    group_depth: usize,
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl UndoRedoManager {
    /// Create a history keeping at most `max_undo` edits.
    pub fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo,
            next_group_id: 0,
            open_group: None,
            group_depth: 0,
        }
    }

    /// Returns `true` if there is something to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns `true` if there is something to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of recorded edits.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Open a group. Groups nest; only the outermost `end_group` closes it.
    pub fn begin_group(&mut self) {
        if self.group_depth == 0 {
            self.open_group = Some(self.allocate_group());
        }
        self.group_depth += 1;
    }

    /// Close the innermost group.
    pub fn end_group(&mut self) {
        self.group_depth = self.group_depth.saturating_sub(1);
        if self.group_depth == 0 {
            self.open_group = None;
        }
    }

    fn allocate_group(&mut self) -> usize {
        let id = self.next_group_id;
        self.next_group_id = self.next_group_id.wrapping_add(1);
        id
    }

    /// Record an edit; clears the redo stack.
    pub fn push(&mut self, edit: TextEdit) {
        self.redo_stack.clear();
        if self.undo_stack.len() >= self.max_undo {
            self.undo_stack.remove(0);
        }
        let group_id = match self.open_group {
            Some(id) => id,
            None => self.allocate_group(),
        };
        self.undo_stack.push(UndoStep { group_id, edit });
    }

    /// Pop the most recent group, newest edit first.
    pub fn pop_undo_group(&mut self) -> Option<Vec<TextEdit>> {
        let group_id = self.undo_stack.last()?.group_id;
        let mut edits = Vec::new();
        while let Some(step) = self.undo_stack.pop_if(|s| s.group_id == group_id) {
            edits.push(step.edit.clone());
            self.redo_stack.push(step);
        }
        Some(edits)
    }

    /// Pop the most recently undone group, oldest edit first.
    pub fn pop_redo_group(&mut self) -> Option<Vec<TextEdit>> {
        let group_id = self.redo_stack.last()?.group_id;
        let mut edits = Vec::new();
        while let Some(step) = self.redo_stack.pop_if(|s| s.group_id == group_id) {
            edits.push(step.edit.clone());
            self.undo_stack.push(step);
        }
        Some(edits)
    }
}
