//! HistoryRows - history lines with a width-tagged height cache

use super::wrap::wrapped_row_count;
use crate::scroller::{ItemIndex, ItemSource};

/// Row sizing rules for history lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMetrics {
    /// Smallest height a row may have.
    pub min_row_height: u32,
    /// Added to the wrapped text height of every row.
    pub row_vertical_padding: u32,
}

impl RowMetrics {
    /// Create row metrics.
    pub fn new(min_row_height: u32, row_vertical_padding: u32) -> Self {
        Self {
            min_row_height,
            row_vertical_padding,
        }
    }

    /// One text row per wrapped line, no padding.
    pub fn terminal() -> Self {
        Self::new(1, 0)
    }

    /// Height of `text` wrapped at `width` columns.
    pub fn row_height(&self, text: &str, width: u32) -> u32 {
        let rows = u32::try_from(wrapped_row_count(text, width as usize)).unwrap_or(u32::MAX);
        rows.saturating_add(self.row_vertical_padding)
            .max(self.min_row_height)
    }
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self::new(48, 8)
    }
}

/// A row view that can display one history line.
pub trait RowText {
    /// Replace the row's text.
    fn set_text(&mut self, text: &str);
}

/// History lines plus lazily measured heights.
///
/// Heights are cached per index and tagged with the width they were measured
/// at. A query at a different width drops the whole cache first.
#[derive(Debug, Clone, Default)]
pub struct HistoryRows {
    lines: Vec<String>,
    heights: Vec<Option<u32>>,
    measured_width: Option<u32>,
    metrics: RowMetrics,
}

impl HistoryRows {
    /// Create an empty history.
    pub fn new(metrics: RowMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    /// Replace every line. The height cache starts empty.
    pub fn set_lines<I, L>(&mut self, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self.heights = vec![None; self.lines.len()];
        self.measured_width = None;
    }

    /// Append one line with no cached height.
    pub fn push(&mut self, line: impl Into<String>) -> ItemIndex {
        let index = ItemIndex::new(self.lines.len());
        self.lines.push(line.into());
        self.heights.push(None);
        index
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`.
    pub fn line(&self, index: ItemIndex) -> Option<&str> {
        self.lines.get(index.get()).map(String::as_str)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Sizing rules in use.
    pub fn metrics(&self) -> RowMetrics {
        self.metrics
    }

    /// Cached height at `index`, if measured since the last invalidation.
    pub fn cached_height(&self, index: ItemIndex) -> Option<u32> {
        self.heights.get(index.get()).copied().flatten()
    }

    /// Width the cached heights were measured at.
    pub fn measured_width(&self) -> Option<u32> {
        self.measured_width
    }

    /// Height of the line at `index` when laid out `width` columns wide.
    ///
    /// Out-of-range indices and unusable widths report the minimum row height
    /// without touching the cache.
    pub fn height_at(&mut self, index: ItemIndex, width: u32) -> u32 {
        let min = self.metrics.min_row_height;
        if width <= 1 || index.get() >= self.lines.len() {
            return min;
        }

        if self.measured_width != Some(width) {
            self.invalidate();
            self.measured_width = Some(width);
        }

        let i = index.get();
        if let Some(height) = self.heights[i] {
            return height;
        }
        let height = self.metrics.row_height(&self.lines[i], width);
        self.heights[i] = Some(height);
        height
    }

    /// Forget every cached height.
    pub fn invalidate(&mut self) {
        self.heights.iter_mut().for_each(|h| *h = None);
    }
}

impl<V: RowText> ItemSource<V> for HistoryRows {
    fn height_of(&mut self, index: ItemIndex, width: u32) -> i64 {
        i64::from(self.height_at(index, width))
    }

    fn fill(&mut self, index: ItemIndex, view: &mut V) {
        if let Some(line) = self.lines.get(index.get()) {
            view.set_text(line);
        }
    }

    fn invalidate_heights(&mut self) {
        self.invalidate();
    }
}
