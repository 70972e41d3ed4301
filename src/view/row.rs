//! Pooled terminal rows

use crate::history::RowText;
use crate::scroller::{SlotFrame, SlotIndex, SlotTemplate, SlotView};
use tracing::trace;

/// One pooled row: the text it shows and where it sits in the content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSlot {
    slot: SlotIndex,
    text: String,
    frame: SlotFrame,
    active: bool,
}

impl RowSlot {
    /// Create a hidden, empty row for pool slot `slot`.
    pub fn new(slot: SlotIndex) -> Self {
        Self {
            slot,
            ..Self::default()
        }
    }

    /// Pool slot this row belongs to.
    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    /// Text last filled in.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position and height in content coordinates.
    pub fn frame(&self) -> SlotFrame {
        self.frame
    }

    /// Whether the row is drawn.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl SlotView for RowSlot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn place(&mut self, frame: SlotFrame) {
        self.frame = frame;
    }
}

impl RowText for RowSlot {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }
}

/// Row prototype for the terminal list.
///
/// Counts instantiations and releases so leaks show up in tests and logs.
#[derive(Debug, Default)]
pub struct RowTemplate {
    instantiated: usize,
    released: usize,
}

impl RowTemplate {
    /// Create a template with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows created so far.
    pub fn instantiated(&self) -> usize {
        self.instantiated
    }

    /// Rows released so far.
    pub fn released(&self) -> usize {
        self.released
    }

    /// Rows currently alive.
    pub fn live(&self) -> usize {
        self.instantiated - self.released
    }
}

impl SlotTemplate for RowTemplate {
    type View = RowSlot;

    fn row_height(&self) -> Option<u32> {
        Some(1)
    }

    fn instantiate(&mut self, slot: SlotIndex) -> RowSlot {
        self.instantiated += 1;
        RowSlot::new(slot)
    }

    fn release(&mut self, view: RowSlot) {
        self.released += 1;
        trace!(slot = view.slot().get(), "Released row");
    }
}
