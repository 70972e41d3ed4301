//! Core scroller newtypes

/// Index of an item in the list. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the index `amount` items later.
    pub fn offset_by(&self, amount: usize) -> Self {
        Self(self.0.saturating_add(amount))
    }

    /// Get the index `amount` items earlier, saturating at 0.
    pub fn saturating_sub(&self, amount: usize) -> Self {
        Self(self.0.saturating_sub(amount))
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Position of a slot inside the view pool. 0-indexed; slot 0 shows the window start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Create a new SlotIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

/// Size of the host viewport in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    /// Width available to item content.
    pub width: u32,
    /// Height of the visible area.
    pub height: u32,
}

impl ViewportSize {
    /// Smallest width at which item heights can be measured.
    ///
    /// Widths at or below this are what hosts report before their first layout pass.
    pub const MIN_MEASURABLE_WIDTH: u32 = 1;

    /// Create new viewport size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the width is large enough to measure item heights.
    pub fn has_measurable_width(&self) -> bool {
        self.width > Self::MIN_MEASURABLE_WIDTH
    }
}

/// Placement of a slot inside the scrollable content.
///
/// Slots are top-anchored and grow downward: `top` is the distance from the
/// top edge of the content to the top edge of the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotFrame {
    /// Distance from content top.
    pub top: usize,
    /// Slot height.
    pub height: u32,
}

impl SlotFrame {
    /// Create a new frame.
    pub fn new(top: usize, height: u32) -> Self {
        Self { top, height }
    }

    /// Position for hosts whose y axis points up from a top anchor.
    pub fn anchored_y(&self) -> i64 {
        -i64::try_from(self.top).unwrap_or(i64::MAX)
    }

    /// Distance from content top to the bottom edge of the slot.
    pub fn bottom(&self) -> usize {
        self.top.saturating_add(self.height as usize)
    }
}
