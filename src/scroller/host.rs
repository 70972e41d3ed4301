//! Seams between the scroller and the host UI.
//!
//! The scroller never touches widgets directly. A host provides:
//!
//! - a [`ScrollSurface`]: the scrollable viewport (geometry, scroll offset, content size)
//! - a [`SlotTemplate`]: the prototype row the pool instantiates and releases
//! - an [`ItemSource`]: per-index heights and the fill callback, passed to each operation

use super::types::{ItemIndex, SlotFrame, SlotIndex, ViewportSize};

/// The host's scrollable viewport.
///
/// Scroll offsets are absolute distances from the top of the content.
pub trait ScrollSurface {
    /// Current viewport size. A width of 0 or 1 means the host has not laid out yet.
    fn viewport_size(&self) -> ViewportSize;

    /// Current scroll offset from the content top.
    fn scroll_top(&self) -> usize;

    /// Move the scroll offset. Hosts may clamp.
    fn set_scroll_top(&mut self, offset: usize);

    /// Publish the total scrollable content extent.
    fn set_content_extent(&mut self, extent: usize);
}

/// A visual row handle owned by a pool slot.
pub trait SlotView {
    /// Show or hide the row. Hidden rows keep their resources.
    fn set_active(&mut self, active: bool);

    /// Position and size the row inside the content.
    fn place(&mut self, frame: SlotFrame);
}

/// Factory for row handles. All resource acquisition and release for rows goes through here.
pub trait SlotTemplate {
    /// Row handle type.
    type View: SlotView;

    /// Height of the prototype row, used to estimate pool size before any item is measured.
    fn row_height(&self) -> Option<u32> {
        None
    }

    /// Create the row for `slot`. New rows start hidden.
    fn instantiate(&mut self, slot: SlotIndex) -> Self::View;

    /// Release a row created by [`SlotTemplate::instantiate`].
    fn release(&mut self, view: Self::View) {
        drop(view);
    }
}

/// Content callbacks supplied by the owner of the items.
///
/// # Contract
/// `height_of` must be a pure function of `(index, width)`. Implementations
/// that cache heights must drop the cache in `invalidate_heights`, which the
/// scroller calls whenever the measurement width changes.
pub trait ItemSource<V> {
    /// Height of the item at `index` when laid out at `width`.
    /// Values below 1 are treated as 1.
    fn height_of(&mut self, index: ItemIndex, width: u32) -> i64;

    /// Populate `view` with the content of the item at `index`.
    /// Only called with indices below the current item count.
    fn fill(&mut self, index: ItemIndex, view: &mut V);

    /// Drop any cached heights.
    fn invalidate_heights(&mut self) {}
}

/// [`ItemSource`] built from a height closure and a fill closure.
///
/// # Examples
///
/// ```
/// # use vscroll::scroller::host::{FnSource, ItemSource};
/// # use vscroll::scroller::types::ItemIndex;
/// let mut filled = Vec::new();
/// let mut source = FnSource::new(|_, _| 48, |index: ItemIndex, view: &mut String| {
///     *view = format!("row {}", index.get());
///     filled.push(index.get());
/// });
/// let mut view = String::new();
/// assert_eq!(source.height_of(ItemIndex::new(0), 320), 48);
/// source.fill(ItemIndex::new(3), &mut view);
/// assert_eq!(view, "row 3");
/// ```
pub struct FnSource<H, F> {
    height: H,
    fill: F,
}

impl<H, F> FnSource<H, F> {
    /// Wrap the two closures.
    pub fn new<V>(height: H, fill: F) -> Self
    where
        H: FnMut(ItemIndex, u32) -> i64,
        F: FnMut(ItemIndex, &mut V),
    {
        Self { height, fill }
    }
}

impl<H, F> std::fmt::Debug for FnSource<H, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

impl<V, H, F> ItemSource<V> for FnSource<H, F>
where
    H: FnMut(ItemIndex, u32) -> i64,
    F: FnMut(ItemIndex, &mut V),
{
    fn height_of(&mut self, index: ItemIndex, width: u32) -> i64 {
        (self.height)(index, width)
    }

    fn fill(&mut self, index: ItemIndex, view: &mut V) {
        (self.fill)(index, view);
    }
}
