use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds elapsed since the clock's start instant.
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock anchored to a fixed start instant.
///
/// Elapsed time is always `now - start`, never a sum of per-frame deltas, so
/// dropped or stalled frames do not introduce drift. The start instant is set
/// once at construction.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a clock that starts now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock with an explicit start instant.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            frame_index: 0,
        }
    }

    /// Returns the start instant.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Number of ticks taken so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock using the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock using a caller-provided timestamp.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let ft = FrameTime {
            elapsed: elapsed_seconds(self.start, now),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Seconds from `start` to `now`. A `now` earlier than `start` yields zero.
pub fn elapsed_seconds(start: Instant, now: Instant) -> f32 {
    now.saturating_duration_since(start).as_secs_f64() as f32
}

/// Inverse of [`elapsed_seconds`], for building timestamps in tests and tools.
///
/// Negative, non-finite, or unrepresentable offsets yield `start`.
pub fn instant_after(start: Instant, seconds: f32) -> Instant {
    Duration::try_from_secs_f32(seconds.max(0.0))
        .ok()
        .and_then(|d| start.checked_add(d))
        .unwrap_or(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_measured_from_start() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let a = clock.tick_at(instant_after(start, 1.5));
        let b = clock.tick_at(instant_after(start, 4.0));

        assert!((a.elapsed - 1.5).abs() < 1e-6);
        assert!((b.elapsed - 4.0).abs() < 1e-6);
    }

    #[test]
    fn skipped_ticks_do_not_drift() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let _ = clock.tick_at(instant_after(start, 0.016));
        // Long gap, as after a run of dropped frames.
        let ft = clock.tick_at(instant_after(start, 10.0));
        assert!((ft.elapsed - 10.0).abs() < 1e-5);
    }

    #[test]
    fn frame_index_counts_ticks() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        assert_eq!(clock.tick_at(start).frame_index, 0);
        assert_eq!(clock.tick_at(start).frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn instant_after_rejects_unusable_offsets() {
        let start = Instant::now();
        assert_eq!(instant_after(start, f32::NAN), start);
        assert_eq!(instant_after(start, f32::INFINITY), start);
        assert_eq!(instant_after(start, -3.0), start);
        assert_eq!(instant_after(start, f32::MAX), start);
        assert!(instant_after(start, 2.0) > start);
    }

    #[test]
    fn time_before_start_clamps_to_zero() {
        let now = Instant::now();
        let later = now + Duration::from_secs(5);
        assert_eq!(elapsed_seconds(later, now), 0.0);
    }
}
