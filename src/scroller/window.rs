//! Visibility window resolution over a [`LayoutTable`].

use super::layout::LayoutTable;
use super::types::ItemIndex;

/// Index of the first item whose bottom edge reaches `scroll_top`.
///
/// Lower-bound binary search for the smallest `i` with
/// `offset[i] + height[i] >= scroll_top`. Item heights vary, so this is not
/// an exact-match search. The result is clamped to `[0, len - 1]`.
///
/// # Examples
///
/// ```
/// # use vscroll::scroller::layout::{LayoutParams, LayoutTable};
/// # use vscroll::scroller::window::find_first_visible;
/// # use vscroll::scroller::types::ItemIndex;
/// let table = LayoutTable::build(100, LayoutParams::new(10, 10, 6), |_| 48);
/// assert_eq!(find_first_visible(&table, 0), ItemIndex::new(0));
/// assert_eq!(find_first_visible(&table, 1000), ItemIndex::new(18));
/// ```
pub fn find_first_visible(table: &LayoutTable, scroll_top: usize) -> ItemIndex {
    let len = table.len();
    if len <= 1 || scroll_top == 0 {
        return ItemIndex::new(0);
    }

    let offsets = table.offsets();
    let heights = table.heights();

    let mut left = 0;
    let mut right = len - 1;

    while left < right {
        let mid = left + (right - left) / 2;
        let bottom = offsets[mid] + heights[mid] as usize;

        if bottom < scroll_top {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    ItemIndex::new(left.min(len - 1))
}

/// First item to bind into slot 0.
///
/// Half the overscan goes above the first visible item; with an odd
/// overscan the extra row goes below.
///
/// # Examples
///
/// ```
/// # use vscroll::scroller::window::window_start;
/// # use vscroll::scroller::types::ItemIndex;
/// assert_eq!(window_start(ItemIndex::new(18), 4), ItemIndex::new(16));
/// assert_eq!(window_start(ItemIndex::new(18), 5), ItemIndex::new(16));
/// assert_eq!(window_start(ItemIndex::new(1), 4), ItemIndex::new(0));
/// ```
pub fn window_start(first_visible: ItemIndex, overscan: usize) -> ItemIndex {
    first_visible.saturating_sub(overscan / 2)
}

/// Window start for `scroll_top`, clamped to the table.
pub fn resolve_window_start(table: &LayoutTable, scroll_top: usize, overscan: usize) -> ItemIndex {
    let start = window_start(find_first_visible(table, scroll_top), overscan);
    ItemIndex::new(start.get().min(table.len().saturating_sub(1)))
}
