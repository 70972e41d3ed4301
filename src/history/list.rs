//! HistoryList - a scrolling history of text lines

use super::rows::{HistoryRows, RowMetrics, RowText};
use crate::scroller::{
    ScrollSurface, ScrollerConfig, SlotTemplate, VerticalScroller, DEFAULT_BOTTOM_EPSILON,
};
use std::fmt;
use tracing::debug;

/// Text history rendered through a [`VerticalScroller`].
///
/// New history follows the bottom of the list. Appended lines follow only
/// while the viewport is already at the bottom, so a reader scrolled into
/// older lines keeps their place.
pub struct HistoryList<S, T>
where
    S: ScrollSurface,
    T: SlotTemplate,
    T::View: RowText,
{
    scroller: VerticalScroller<S, T>,
    rows: HistoryRows,
}

impl<S, T> HistoryList<S, T>
where
    S: ScrollSurface,
    T: SlotTemplate,
    T::View: RowText,
{
    /// Set up an empty history over the host's surface and row template.
    pub fn new(config: ScrollerConfig, metrics: RowMetrics, surface: S, template: T) -> Self {
        Self {
            scroller: VerticalScroller::setup(config, Some(surface), Some(template)),
            rows: HistoryRows::new(metrics),
        }
    }

    /// Replace the whole history and jump to the newest line.
    pub fn set_history<I, L>(&mut self, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.rows.set_lines(lines);
        debug!(lines = self.rows.len(), "History replaced");
        self.scroller.set_data(self.rows.len(), true, &mut self.rows);
    }

    /// Append one line.
    pub fn append_line(&mut self, line: impl Into<String>) {
        self.rows.push(line);
        self.scroller.append_one(&mut self.rows);
    }

    /// Per-frame update. Picks up viewport resizes.
    pub fn tick(&mut self) {
        self.scroller.tick(&mut self.rows);
    }

    /// Scroll by `delta` units, clamped to the content.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.scroller.max_scroll();
        let Some(surface) = self.scroller.surface_mut() else {
            return;
        };
        let top = surface.scroll_top().saturating_add_signed(delta).min(max);
        surface.set_scroll_top(top);
        self.scroller.on_scroll(&mut self.rows);
    }

    /// Scroll to the oldest line.
    pub fn scroll_to_top(&mut self) {
        if let Some(surface) = self.scroller.surface_mut() {
            surface.set_scroll_top(0);
        }
        self.scroller.on_scroll(&mut self.rows);
    }

    /// Scroll to the newest line.
    pub fn scroll_to_bottom(&mut self) {
        self.scroller.scroll_to_bottom(&mut self.rows);
    }

    /// Whether the newest line is in view.
    pub fn is_at_bottom(&self) -> bool {
        self.scroller.is_at_bottom(DEFAULT_BOTTOM_EPSILON)
    }

    /// Viewport height, used for page-sized scrolling.
    pub fn page_height(&self) -> usize {
        self.scroller
            .surface()
            .map_or(0, |surface| surface.viewport_size().height as usize)
    }

    /// Underlying scroller.
    pub fn scroller(&self) -> &VerticalScroller<S, T> {
        &self.scroller
    }

    /// Host surface, for hosts that resize it before the next [`tick`](Self::tick).
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.scroller.surface_mut()
    }

    /// History lines and their height cache.
    pub fn rows(&self) -> &HistoryRows {
        &self.rows
    }
}

impl<S, T> fmt::Debug for HistoryList<S, T>
where
    S: ScrollSurface,
    T: SlotTemplate,
    T::View: RowText,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryList")
            .field("lines", &self.rows.len())
            .field("state", &self.scroller.state())
            .field("pool", &self.scroller.pool_len())
            .finish_non_exhaustive()
    }
}
