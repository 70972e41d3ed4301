//! Scroller setup errors.

use thiserror::Error;

/// Host resources missing when a scroller is set up.
///
/// These never propagate into caller code: the scroller logs them, stays
/// uninitialized and turns every operation into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No scroll surface (viewport) was supplied.
    #[error("VerticalScroller: scroll surface reference is missing")]
    MissingSurface,

    /// No slot template (row prototype) was supplied.
    #[error("VerticalScroller: slot template reference is missing")]
    MissingTemplate,
}
