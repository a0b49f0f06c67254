use std::fmt;
use std::time::Instant;

use crate::coords::PixelSize;
use crate::device::SurfaceErrorKind;
use crate::time::FrameClock;

use super::{FramePlan, OrbitCamera, ThreadgroupCaps};

/// Ticks between periodic frame summaries in the log.
const SUMMARY_INTERVAL: u64 = 600;

/// Host surface contract.
///
/// Implemented over a wgpu surface by the tracer, and by in-memory targets in
/// tests.
pub trait PresentTarget {
    /// Acquired image plus its encoding context.
    type Frame;

    /// Current output size in physical pixels.
    fn pixel_size(&self) -> PixelSize;

    /// Obtains a presentable, writable image and a fresh encoder.
    fn acquire(&mut self) -> Result<Self::Frame, SkipReason>;

    /// Encodes the plan into `frame`, requests presentation, and submits.
    fn submit(&mut self, frame: Self::Frame, plan: &FramePlan);
}

/// Why a tick produced no frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The surface has a zero dimension (minimized, or mid-resize).
    ZeroSizedSurface,
    /// The surface could not hand out an image.
    SurfaceUnavailable(SurfaceErrorKind),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSizedSurface => f.write_str("surface has zero size"),
            Self::SurfaceUnavailable(kind) => write!(f, "surface unavailable ({kind})"),
        }
    }
}

/// A dropped frame. Recoverable; the next tick starts afresh.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("frame {frame_index} skipped: {reason}")]
pub struct FrameSkipped {
    pub frame_index: u64,
    pub reason: SkipReason,
}

/// Orchestrator state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameState {
    /// Between ticks.
    Idle,
    /// Building and dispatching one frame.
    Submitting,
}

/// Running frame counters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub ticks: u64,
    pub presented: u64,
    pub skipped: u64,
}

/// Drives one frame per refresh tick.
///
/// Owns the immutable animation start (through its clock) and the camera
/// model. All per-frame inputs are recomputed from `(now, start)` and the
/// target's current size, so a skipped tick leaves no trace.
#[derive(Debug)]
pub struct FrameOrchestrator {
    clock: FrameClock,
    camera: OrbitCamera,
    caps: ThreadgroupCaps,
    state: FrameState,
    stats: FrameStats,
}

impl FrameOrchestrator {
    pub fn new(caps: ThreadgroupCaps, camera: OrbitCamera) -> Self {
        Self::with_clock(FrameClock::new(), caps, camera)
    }

    pub fn with_clock(clock: FrameClock, caps: ThreadgroupCaps, camera: OrbitCamera) -> Self {
        Self {
            clock,
            camera,
            caps,
            state: FrameState::Idle,
            stats: FrameStats::default(),
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn caps(&self) -> ThreadgroupCaps {
        self.caps
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Animation origin, fixed at construction.
    pub fn start(&self) -> Instant {
        self.clock.start()
    }

    /// Runs one tick against `target` at the current time.
    pub fn tick<T: PresentTarget>(&mut self, target: &mut T) -> Result<FramePlan, FrameSkipped> {
        self.tick_at(Instant::now(), target)
    }

    /// Runs one tick against `target` at `now`.
    pub fn tick_at<T: PresentTarget>(
        &mut self,
        now: Instant,
        target: &mut T,
    ) -> Result<FramePlan, FrameSkipped> {
        self.state = FrameState::Submitting;
        let result = self.run_tick(now, target);
        self.state = FrameState::Idle;

        self.stats.ticks += 1;
        match result {
            Ok(_) => self.stats.presented += 1,
            Err(_) => self.stats.skipped += 1,
        }

        if self.stats.ticks % SUMMARY_INTERVAL == 0 {
            log::debug!(
                "{} ticks: {} presented, {} skipped",
                self.stats.ticks,
                self.stats.presented,
                self.stats.skipped
            );
        }

        result
    }

    fn run_tick<T: PresentTarget>(
        &mut self,
        now: Instant,
        target: &mut T,
    ) -> Result<FramePlan, FrameSkipped> {
        let time = self.clock.tick_at(now);
        let skipped = |reason| FrameSkipped {
            frame_index: time.frame_index,
            reason,
        };

        if target.pixel_size().is_empty() {
            return Err(skipped(SkipReason::ZeroSizedSurface));
        }

        let frame = target.acquire().map_err(skipped)?;

        // Read the size again: acquiring may have reconfigured the surface.
        let size = target.pixel_size();
        let plan = FramePlan::build(time, size, &self.camera, self.caps.threads_per_group());

        target.submit(frame, &plan);
        log::trace!(
            "frame {} submitted: {}x{}, {:?} groups",
            plan.frame_index,
            size.width,
            size.height,
            plan.dispatch.workgroup_count()
        );

        Ok(plan)
    }
}
