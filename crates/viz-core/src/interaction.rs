// File: crates/viz-core/src/interaction.rs
// Summary: Hover/click selection state machine with equality-based re-click reset.

use crate::data::DatumKey;

/// Raw client pixel position of the pointer, kept for tooltip placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPos {
    pub x: f32,
    pub y: f32,
}

/// A selection transition. Hover and click run as independent machines:
/// `idle -> hovered -> idle` and `idle -> clicked -> idle`.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionEvent {
    HoverSet(DatumKey),
    HoverCleared,
    ClickSet(DatumKey),
    ClickCleared,
}

/// Component-local selection state. At most one hovered and one clicked key
/// at a time; no cross-instance sharing.
///
/// `reset_on_reclick` is equality-based: clicking the currently clicked key
/// again clears the click. The upstream option this models is named
/// "resetSelectionOnDoubleClick", but no timing window is involved; the
/// misleading name is not carried over.
#[derive(Debug)]
pub struct InteractionController {
    hovered: Option<DatumKey>,
    clicked: Option<DatumKey>,
    pointer: Option<PointerPos>,
    reset_on_reclick: bool,
    data_keys: Vec<DatumKey>,
}

impl InteractionController {
    pub fn new(reset_on_reclick: bool) -> Self {
        Self {
            hovered: None,
            clicked: None,
            pointer: None,
            reset_on_reclick,
            data_keys: Vec::new(),
        }
    }

    pub fn hovered(&self) -> Option<&DatumKey> {
        self.hovered.as_ref()
    }

    pub fn clicked(&self) -> Option<&DatumKey> {
        self.clicked.as_ref()
    }

    pub fn pointer(&self) -> Option<PointerPos> {
        self.pointer
    }

    /// Pointer entered or moved over a datum. The pointer position updates
    /// on every call; a transition is reported only when the key changes.
    pub fn pointer_over(&mut self, key: DatumKey, pos: PointerPos) -> Option<SelectionEvent> {
        self.pointer = Some(pos);
        if self.hovered.as_ref() == Some(&key) {
            return None;
        }
        self.hovered = Some(key.clone());
        Some(SelectionEvent::HoverSet(key))
    }

    /// Pointer left the mark set; clears both the hover and the position.
    pub fn pointer_leave(&mut self) -> Option<SelectionEvent> {
        self.pointer = None;
        if self.hovered.take().is_some() {
            Some(SelectionEvent::HoverCleared)
        } else {
            None
        }
    }

    /// Click toggles the clicked key. Re-clicking the current key clears it
    /// when `reset_on_reclick` is set, and re-sets it otherwise.
    pub fn click(&mut self, key: DatumKey) -> SelectionEvent {
        if self.clicked.as_ref() == Some(&key) && self.reset_on_reclick {
            self.clicked = None;
            return SelectionEvent::ClickCleared;
        }
        self.clicked = Some(key.clone());
        SelectionEvent::ClickSet(key)
    }

    /// Reconcile with the current data identity; selection resets when the
    /// underlying ordered key set changed.
    pub fn sync_data(&mut self, keys: Vec<DatumKey>) {
        if self.data_keys != keys {
            self.hovered = None;
            self.clicked = None;
            self.pointer = None;
            self.data_keys = keys;
        }
    }

    /// Mark opacity under the current selection: unselected marks dim while
    /// something is hovered or clicked.
    pub fn opacity_for(&self, key: &DatumKey) -> f32 {
        let active = self.hovered.as_ref().or(self.clicked.as_ref());
        match active {
            Some(a) if a != key => 0.35,
            _ => 1.0,
        }
    }
}
