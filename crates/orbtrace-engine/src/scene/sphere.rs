use crate::coords::{ColorRgb, Vec3};

/// Sphere primitive as seen by the host.
///
/// `specular` is the reflectivity coefficient in `[0, 1]`:
/// 0.0 is matte, 1.0 is a perfect mirror.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: ColorRgb,
    pub specular: f32,
}

impl Sphere {
    #[inline]
    pub const fn new(center: Vec3, radius: f32, color: ColorRgb, specular: f32) -> Self {
        Self {
            center,
            radius,
            color,
            specular,
        }
    }

    /// Returns `true` if the sphere can be intersected meaningfully.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.color.is_unit_range()
            && (0.0..=1.0).contains(&self.specular)
    }
}

/// Returns the fixed default scene.
///
/// Order is significant: it is the index order the kernel iterates in.
pub fn build() -> Vec<Sphere> {
    vec![
        // red unit sphere
        Sphere::new(Vec3::zero(), 1.0, ColorRgb::new(1.0, 0.0, 0.0), 0.2),
        // ground
        Sphere::new(Vec3::new(0.0, -101.0, 0.0), 100.0, ColorRgb::grey(0.5), 0.0),
        // mirror
        Sphere::new(Vec3::new(-2.2, 0.0, -1.0), 1.0, ColorRgb::grey(0.9), 0.95),
        // blue
        Sphere::new(Vec3::new(2.2, 0.0, -1.0), 1.0, ColorRgb::new(0.0, 0.0, 1.0), 0.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_has_four_valid_spheres() {
        let spheres = build();
        assert_eq!(spheres.len(), 4);
        assert!(spheres.iter().all(Sphere::is_valid));
    }

    #[test]
    fn default_scene_roles() {
        let s = build();
        assert_eq!(s[0].center, Vec3::zero());
        assert_eq!(s[0].radius, 1.0);
        assert_eq!(s[1].radius, 100.0);
        // Ground top sits one unit below the origin, touching the unit sphere.
        assert_eq!(s[1].center.y + s[1].radius, -1.0);
        assert!(s[2].specular >= 0.95);
        assert_eq!(s[3].color, ColorRgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(build(), build());
    }

    #[test]
    fn invalid_spheres_are_rejected() {
        let ok = Sphere::new(Vec3::zero(), 1.0, ColorRgb::grey(0.5), 0.5);
        assert!(ok.is_valid());
        assert!(!Sphere { radius: 0.0, ..ok }.is_valid());
        assert!(!Sphere { specular: 1.5, ..ok }.is_valid());
        assert!(!Sphere { color: ColorRgb::new(2.0, 0.0, 0.0), ..ok }.is_valid());
        assert!(!Sphere { center: Vec3::new(f32::NAN, 0.0, 0.0), ..ok }.is_valid());
    }
}
