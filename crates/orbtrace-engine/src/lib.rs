//! orbtrace engine crate.
//!
//! A real-time sphere ray tracer: the scene model, the GPU resources that
//! hold it, and the frame loop that animates an orbiting camera and dispatches
//! one compute pass per display refresh.

pub mod coords;
pub mod device;
pub mod error;
pub mod frame;
pub mod logging;
pub mod scene;
pub mod time;
pub mod tracer;
pub mod window;

pub use error::RendererError;
