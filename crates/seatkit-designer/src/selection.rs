//! Selection state: active tool, selected ids, and the derived kind.
//!
//! The selection is an explicit store with a single mutation entry point,
//! [`SelectionState::set_selection`]; every other mutator routes through it
//! so the derived classification can never drift from the id set. It is
//! session-local, never persisted, and reset on deselect or tool switch.

use std::collections::HashSet;

use tracing::warn;
use uuid::Uuid;

use crate::document::SeatMapDocument;

/// The active canvas tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Select,
    DrawZone,
}

/// Classification of the current selection, always the least-common
/// classification of the node types the id set references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionKind {
    #[default]
    None,
    Zone,
    Seat,
    Mixed,
}

/// Classifies an id set against the document.
///
/// Ids that resolve to neither a zone nor a seat are ignored (and worth a
/// warning upstream); an id set of only unknown ids classifies as `None`.
pub fn classify(doc: &SeatMapDocument, ids: &HashSet<Uuid>) -> SelectionKind {
    let mut saw_zone = false;
    let mut saw_seat = false;
    for id in ids {
        if doc.is_zone(*id) {
            saw_zone = true;
        } else if doc.is_seat(*id) {
            saw_seat = true;
        }
        if saw_zone && saw_seat {
            return SelectionKind::Mixed;
        }
    }
    match (saw_zone, saw_seat) {
        (true, false) => SelectionKind::Zone,
        (false, true) => SelectionKind::Seat,
        (true, true) => SelectionKind::Mixed,
        (false, false) => SelectionKind::None,
    }
}

/// The selection store consumed by every interactive component.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    tool: ToolMode,
    selected: HashSet<Uuid>,
    kind: SelectionKind,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    /// Switches the active tool and clears the selection.
    pub fn set_tool(&mut self, tool: ToolMode) {
        self.tool = tool;
        self.clear();
    }

    pub fn selected(&self) -> &HashSet<Uuid> {
        &self.selected
    }

    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    /// Replaces the selection. The single mutation entry point: drops ids
    /// that resolve to nothing and recomputes the classification.
    pub fn set_selection(&mut self, ids: HashSet<Uuid>, doc: &SeatMapDocument) {
        let (known, unknown): (HashSet<Uuid>, HashSet<Uuid>) = ids
            .into_iter()
            .partition(|id| doc.is_zone(*id) || doc.is_seat(*id));
        if !unknown.is_empty() {
            warn!(count = unknown.len(), "dropping unknown ids from selection");
        }
        self.kind = classify(doc, &known);
        self.selected = known;
    }

    /// Replaces the selection with exactly one object.
    pub fn select_only(&mut self, id: Uuid, doc: &SeatMapDocument) {
        self.set_selection(HashSet::from([id]), doc);
    }

    /// Toggles membership of one object in the selection.
    pub fn toggle(&mut self, id: Uuid, doc: &SeatMapDocument) {
        let mut ids = self.selected.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        self.set_selection(ids, doc);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.kind = SelectionKind::None;
    }

    /// Drops ids that no longer resolve (after deletes) and reclassifies.
    pub fn prune(&mut self, doc: &SeatMapDocument) {
        let ids = std::mem::take(&mut self.selected);
        self.set_selection(ids, doc);
    }
}
