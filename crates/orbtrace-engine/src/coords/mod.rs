//! Coordinate and geometry types shared by the scene model and the frame loop.
//!
//! World space:
//! - right-handed, +Y up
//! - units are arbitrary scene units (the default scene is a few units across)
//!
//! Output space is physical pixels, origin top-left.

mod color;
mod pixel_size;
mod vec3;

pub use color::ColorRgb;
pub use pixel_size::PixelSize;
pub use vec3::Vec3;
