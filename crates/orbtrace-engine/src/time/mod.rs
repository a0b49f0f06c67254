//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per renderer, started at construction
//! - call `tick()` once per refresh tick to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{elapsed_seconds, instant_after, FrameClock, FrameTime};
