//! vscroll
//!
//! A variable-height virtualized list: only the rows near the viewport get a
//! view, and a small pool of views is rebound as the list scrolls.
//!
//! The library follows a Pure Core / Impure Shell split:
//!
//! - [`scroller`]: layout table, binding window and view pool (pure core)
//! - [`history`]: a line history with cached wrapped heights on top of the scroller
//! - [`view`]: terminal host drawing the history with ratatui (impure shell)
//! - [`config`], [`logging`], [`source`], [`error`]: binary plumbing

pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod scroller;
pub mod source;
pub mod view;
