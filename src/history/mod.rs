//! History - text lines shown through the virtualized scroller
//!
//! - `wrap`: display-width wrapping used for both measuring and drawing
//! - `rows`: HistoryRows - lines with a width-tagged height cache
//! - `list`: HistoryList - rows plus a VerticalScroller, follow-the-bottom append

pub mod list;
pub mod rows;
pub mod wrap;

pub use list::HistoryList;
pub use rows::{HistoryRows, RowMetrics, RowText};
