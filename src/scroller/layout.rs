//! LayoutTable - prefix offsets and content extent for variable-height items
//!
//! # Complexity
//!
//! - `build`: O(n), one height query per item
//! - `push`: O(1) amortized
//! - `offset`, `height`, `content_extent`: O(1)

use super::types::ItemIndex;

/// Spacing parameters that shape the offset table.
///
/// # Equality Semantics
/// Two LayoutParams are equal if they would produce identical tables
/// for the same heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Space above the first item.
    pub top_padding: u32,
    /// Space below the last item.
    pub bottom_padding: u32,
    /// Space between consecutive items.
    pub item_spacing: u32,
}

impl LayoutParams {
    /// Create new layout params.
    pub fn new(top_padding: u32, bottom_padding: u32, item_spacing: u32) -> Self {
        Self {
            top_padding,
            bottom_padding,
            item_spacing,
        }
    }

    /// Extent of a list with no items.
    pub fn padding_extent(&self) -> usize {
        self.top_padding as usize + self.bottom_padding as usize
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(10, 10, 6)
    }
}

/// Clamp a raw height query result into a usable item height.
///
/// Heights below 1 would stall the offset table, so they become 1.
pub fn clamp_height(raw: i64) -> u32 {
    u32::try_from(raw.max(1)).unwrap_or(u32::MAX)
}

/// Offset and height tables for every item plus the total content extent.
///
/// # Invariants
/// - `offsets.len() == heights.len()`
/// - `offsets[0] == top_padding` when non-empty
/// - `offsets[i] + heights[i] + item_spacing == offsets[i + 1]`
/// - every height is >= 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    offsets: Vec<usize>,
    heights: Vec<u32>,
    content_extent: usize,
    params: LayoutParams,
}

impl LayoutTable {
    /// Create an empty table.
    pub fn new(params: LayoutParams) -> Self {
        Self {
            offsets: Vec::new(),
            heights: Vec::new(),
            content_extent: params.padding_extent(),
            params,
        }
    }

    /// Build the tables for `count` items, querying each height once.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vscroll::scroller::layout::{LayoutParams, LayoutTable};
    /// let table = LayoutTable::build(100, LayoutParams::new(10, 10, 6), |_| 48);
    /// assert_eq!(table.offsets()[0], 10);
    /// assert_eq!(table.offsets()[1], 64);
    /// assert_eq!(table.offsets()[99], 5356);
    /// assert_eq!(table.content_extent(), 5414);
    /// ```
    pub fn build<F>(count: usize, params: LayoutParams, height_of: F) -> Self
    where
        F: FnMut(ItemIndex) -> i64,
    {
        let mut table = Self::new(params);
        table.rebuild(count, height_of);
        table
    }

    /// Rebuild in place, retaining allocated capacity.
    pub fn rebuild<F>(&mut self, count: usize, mut height_of: F)
    where
        F: FnMut(ItemIndex) -> i64,
    {
        self.offsets.clear();
        self.heights.clear();
        self.offsets.reserve(count);
        self.heights.reserve(count);

        let spacing = self.params.item_spacing as usize;
        let mut cursor = self.params.top_padding as usize;
        for i in 0..count {
            let height = clamp_height(height_of(ItemIndex::new(i)));
            self.offsets.push(cursor);
            self.heights.push(height);
            cursor = cursor + height as usize + spacing;
        }

        self.content_extent = self.compute_extent();
    }

    /// Append one item after the current last one.
    ///
    /// Returns the index of the new item.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vscroll::scroller::layout::{LayoutParams, LayoutTable};
    /// let mut table = LayoutTable::build(2, LayoutParams::new(10, 10, 6), |_| 48);
    /// table.push(0);
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.offsets()[2], 118);
    /// assert_eq!(table.content_extent(), 129);
    /// ```
    pub fn push(&mut self, raw_height: i64) -> ItemIndex {
        let height = clamp_height(raw_height);
        let offset = match (self.offsets.last(), self.heights.last()) {
            (Some(&last_offset), Some(&last_height)) => {
                last_offset + last_height as usize + self.params.item_spacing as usize
            }
            _ => self.params.top_padding as usize,
        };

        let index = ItemIndex::new(self.offsets.len());
        self.offsets.push(offset);
        self.heights.push(height);
        self.content_extent = self.compute_extent();
        index
    }

    /// Remove every item, keeping capacity.
    pub fn clear(&mut self) {
        self.offsets.clear();
        self.heights.clear();
        self.content_extent = self.params.padding_extent();
    }

    fn compute_extent(&self) -> usize {
        match (self.offsets.last(), self.heights.last()) {
            (Some(&offset), Some(&height)) => {
                offset + height as usize + self.params.bottom_padding as usize
            }
            _ => self.params.padding_extent(),
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset of the item at `index`.
    pub fn offset(&self, index: ItemIndex) -> Option<usize> {
        self.offsets.get(index.get()).copied()
    }

    /// Height of the item at `index`.
    pub fn height(&self, index: ItemIndex) -> Option<u32> {
        self.heights.get(index.get()).copied()
    }

    /// All offsets, in item order.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// All heights, in item order.
    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    /// Total scrollable extent including padding.
    pub fn content_extent(&self) -> usize {
        self.content_extent
    }

    /// Parameters the table was built with.
    pub fn params(&self) -> LayoutParams {
        self.params
    }
}
