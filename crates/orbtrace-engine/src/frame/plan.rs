use crate::coords::PixelSize;
use crate::time::FrameTime;

use super::{DispatchPlan, GridSize, OrbitCamera, Uniforms};

/// Everything the device needs for one frame.
///
/// Built from scratch each tick from the clock, the camera model, and the
/// surface size at encode time; nothing carries over between frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FramePlan {
    pub frame_index: u64,
    pub size: PixelSize,
    pub uniforms: Uniforms,
    pub dispatch: DispatchPlan,
}

impl FramePlan {
    pub fn build(
        time: FrameTime,
        size: PixelSize,
        camera: &OrbitCamera,
        threads_per_group: GridSize,
    ) -> Self {
        let pose = camera.pose_at(time.elapsed);
        Self {
            frame_index: time.frame_index,
            size,
            uniforms: Uniforms::new(pose, size, time.elapsed),
            dispatch: DispatchPlan::exact(size, threads_per_group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;
    use crate::time::{instant_after, FrameClock};
    use std::time::Instant;

    #[test]
    fn plan_combines_clock_camera_and_size() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let ft = clock.tick_at(start);

        let plan = FramePlan::build(
            ft,
            PixelSize::new(800, 600),
            &OrbitCamera::default(),
            GridSize::new(32, 8, 1),
        );

        assert_eq!(plan.frame_index, 0);
        assert_eq!(plan.uniforms.time, 0.0);
        assert_eq!(plan.uniforms.camera_position, Vec3::new(0.0, 2.0, 11.0));
        assert_eq!(plan.uniforms.resolution, [800.0, 600.0]);
        assert_eq!(plan.dispatch.threads_per_grid, GridSize::new(800, 600, 1));
        assert_eq!(plan.dispatch.threads_per_group, GridSize::new(32, 8, 1));
    }

    #[test]
    fn time_flows_into_uniforms() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let ft = clock.tick_at(instant_after(start, 3.0));
        let camera = OrbitCamera::default();

        let plan = FramePlan::build(ft, PixelSize::new(2, 2), &camera, GridSize::new(1, 1, 1));

        assert!((plan.uniforms.time - 3.0).abs() < 1e-6);
        assert_eq!(plan.uniforms.camera_position, camera.pose_at(ft.elapsed).position);
    }
}
