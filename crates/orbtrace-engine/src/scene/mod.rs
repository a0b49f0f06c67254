//! Scene model.
//!
//! Responsibilities:
//! - build the fixed, ordered list of sphere primitives
//! - serialize it byte-exactly for upload into the device scene buffer
//!
//! The scene is built once at startup and never mutated afterwards.

mod layout;
mod sphere;

pub use layout::{deserialize, serialize, GpuSphere, SceneLayoutError, SPHERE_STRIDE};
pub use sphere::{build, Sphere};
