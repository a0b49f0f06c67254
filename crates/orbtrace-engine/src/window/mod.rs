//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and drives the renderer once per
//! redraw.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
