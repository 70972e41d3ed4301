//! Scroller - variable-height virtualized vertical list
//!
//! Keeps a pool of reusable row slots sized to the viewport and rebinds them
//! to whichever items are under the viewport as it scrolls. Item heights are
//! measured once per data reset into a prefix-offset table, so finding the
//! first visible item is a binary search and scrolling never re-measures.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (ItemIndex, SlotIndex, ViewportSize, SlotFrame)
//! - `layout`: LayoutTable - offsets, heights and content extent
//! - `window`: first-visible search and window start
//! - `pool`: ViewPool - fixed-length arena of slots
//! - `host`: traits the host UI implements (ScrollSurface, SlotTemplate, ItemSource)
//! - `vertical`: VerticalScroller - lifecycle, data reset, append, per-frame refresh
//! - `config`: ScrollerConfig - padding, spacing, overscan
//! - `error`: SetupError

pub mod config;
pub mod error;
pub mod host;
pub mod layout;
pub mod pool;
pub mod types;
pub mod vertical;
pub mod window;

pub use config::{ScrollerConfig, DEFAULT_BOTTOM_EPSILON};
pub use error::SetupError;
pub use host::{FnSource, ItemSource, ScrollSurface, SlotTemplate, SlotView};
pub use layout::{LayoutParams, LayoutTable};
pub use pool::{Slot, ViewPool};
pub use types::{ItemIndex, SlotFrame, SlotIndex, ViewportSize};
pub use vertical::{ScrollerState, VerticalScroller};
