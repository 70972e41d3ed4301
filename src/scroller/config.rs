//! Scroller tuning parameters.

use super::layout::LayoutParams;

/// Row height assumed before any item has been measured.
pub const DEFAULT_FALLBACK_ROW_HEIGHT: u32 = 48;

/// Extra rows bound beyond the visible area.
pub const DEFAULT_OVERSCAN: usize = 4;

/// Distance from the bottom still considered "at bottom".
pub const DEFAULT_BOTTOM_EPSILON: usize = 1;

/// Layout and pooling parameters for a [`VerticalScroller`](super::VerticalScroller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollerConfig {
    /// Padding and spacing of the offset table.
    pub layout: LayoutParams,
    /// Extra slots beyond the visible area, split above and below.
    pub overscan: usize,
    /// Row height used for pool sizing when the template reports none.
    pub fallback_row_height: u32,
}

impl ScrollerConfig {
    /// Create a config.
    pub fn new(layout: LayoutParams, overscan: usize, fallback_row_height: u32) -> Self {
        Self {
            layout,
            overscan,
            fallback_row_height,
        }
    }

    /// Preset for terminal hosts where one unit is one text row.
    pub fn terminal() -> Self {
        Self::new(LayoutParams::new(0, 0, 1), DEFAULT_OVERSCAN, 1)
    }

    /// Estimated distance between the tops of consecutive rows.
    pub fn average_item_height(&self, template_row_height: Option<u32>) -> u32 {
        template_row_height
            .unwrap_or(self.fallback_row_height)
            .max(1)
            .saturating_add(self.layout.item_spacing)
    }
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self::new(
            LayoutParams::default(),
            DEFAULT_OVERSCAN,
            DEFAULT_FALLBACK_ROW_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_layout() {
        let config = ScrollerConfig::default();
        assert_eq!(config.layout, LayoutParams::new(10, 10, 6));
        assert_eq!(config.overscan, 4);
        assert_eq!(config.fallback_row_height, 48);
    }

    #[test]
    fn average_uses_fallback_plus_spacing() {
        assert_eq!(ScrollerConfig::default().average_item_height(None), 54);
    }

    #[test]
    fn average_prefers_template_height() {
        assert_eq!(ScrollerConfig::default().average_item_height(Some(30)), 36);
    }

    #[test]
    fn average_never_zero() {
        let config = ScrollerConfig::new(LayoutParams::new(0, 0, 0), 0, 0);
        assert_eq!(config.average_item_height(Some(0)), 1);
    }

    #[test]
    fn terminal_preset_uses_row_units() {
        let config = ScrollerConfig::terminal();
        assert_eq!(config.average_item_height(None), 2);
        assert_eq!(config.layout.top_padding, 0);
    }
}
