use std::f32::consts::TAU;

use crate::coords::Vec3;

/// Camera position and look-at target for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// Closed circular orbit around a fixed target.
///
/// Position at time `t`:
/// `(center.x + sin(t * speed) * radius, height, center.z + cos(t * speed) * radius)`.
/// User camera control is not implemented; this is the only camera model.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Orbit centre in the X/Z plane (`y` is ignored).
    pub center: Vec3,
    pub radius: f32,
    /// Fixed camera height.
    pub height: f32,
    /// Angular speed in radians per second.
    pub angular_speed: f32,
    pub target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            center: Vec3::new(0.0, 0.0, 5.0),
            radius: 6.0,
            height: 2.0,
            angular_speed: 0.5,
            target: Vec3::zero(),
        }
    }
}

impl OrbitCamera {
    /// Pose at `time` seconds since start. Pure.
    pub fn pose_at(&self, time: f32) -> CameraPose {
        let angle = time * self.angular_speed;
        CameraPose {
            position: Vec3::new(
                self.center.x + angle.sin() * self.radius,
                self.height,
                self.center.z + angle.cos() * self.radius,
            ),
            target: self.target,
        }
    }

    /// Seconds per full revolution.
    pub fn period(&self) -> f32 {
        TAU / self.angular_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < EPS
    }

    #[test]
    fn starts_behind_the_scene() {
        let pose = OrbitCamera::default().pose_at(0.0);
        assert_eq!(pose.position, Vec3::new(0.0, 2.0, 11.0));
        assert_eq!(pose.target, Vec3::zero());
    }

    #[test]
    fn returns_after_one_period() {
        let cam = OrbitCamera::default();
        assert!((cam.period() - 12.566_371).abs() < EPS);
        let start = cam.pose_at(0.0).position;
        let end = cam.pose_at(cam.period()).position;
        assert!(close(start, end), "{start:?} vs {end:?}");
    }

    #[test]
    fn quarter_turn_swings_to_positive_x() {
        let cam = OrbitCamera::default();
        let p = cam.pose_at(cam.period() / 4.0).position;
        assert!(close(p, Vec3::new(6.0, 2.0, 5.0)), "{p:?}");
    }

    #[test]
    fn stays_on_the_orbit() {
        let cam = OrbitCamera::default();
        for i in 0..50 {
            let p = cam.pose_at(i as f32 * 0.37).position;
            assert_eq!(p.y, 2.0);
            let flat = Vec3::new(p.x, 0.0, p.z);
            assert!((flat.distance(cam.center) - 6.0).abs() < EPS);
        }
    }
}
