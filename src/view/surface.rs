//! TerminalSurface - scroll state of the list area

use crate::scroller::{ScrollSurface, ViewportSize};
use ratatui::layout::Rect;

/// Scroll surface over a terminal rectangle. One unit is one text row.
///
/// Scroll offsets are clamped so the viewport never runs past the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalSurface {
    area: Rect,
    scroll_top: usize,
    content_extent: usize,
}

impl TerminalSurface {
    /// Create a surface covering `area`.
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            ..Self::default()
        }
    }

    /// Area the list is drawn in.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Move or resize the list area. The scroll offset is re-clamped.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    /// Last published content extent.
    pub fn content_extent(&self) -> usize {
        self.content_extent
    }

    /// Largest scroll offset that keeps the viewport inside the content.
    pub fn max_scroll(&self) -> usize {
        self.content_extent
            .saturating_sub(usize::from(self.area.height))
    }
}

impl ScrollSurface for TerminalSurface {
    fn viewport_size(&self) -> ViewportSize {
        ViewportSize::new(u32::from(self.area.width), u32::from(self.area.height))
    }

    fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: usize) {
        self.scroll_top = offset.min(self.max_scroll());
    }

    fn set_content_extent(&mut self, extent: usize) {
        self.content_extent = extent;
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }
}
