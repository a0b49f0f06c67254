//! Thread-group sizing and dispatch grid planning.

use crate::coords::PixelSize;

/// Three-dimensional extent, in threads or in thread groups.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GridSize {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl GridSize {
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn volume(self) -> u64 {
        self.x as u64 * self.y as u64 * self.z as u64
    }
}

/// Device thread-group capability figures.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ThreadgroupCaps {
    /// SIMD width; becomes the group's X dimension.
    pub execution_width: u32,
    /// Upper bound on `x * y * z` for one group.
    pub max_threads_per_group: u32,
    pub max_group_size_x: u32,
    pub max_group_size_y: u32,
}

impl ThreadgroupCaps {
    /// Reads the limits of a created device, with a configured execution width.
    pub fn from_limits(limits: &wgpu::Limits, execution_width: u32) -> Self {
        Self {
            execution_width,
            max_threads_per_group: limits.max_compute_invocations_per_workgroup,
            max_group_size_x: limits.max_compute_workgroup_size_x,
            max_group_size_y: limits.max_compute_workgroup_size_y,
        }
    }

    /// Group size `(w, floor(max / w), 1)`, with both dimensions kept within
    /// device limits and at least 1.
    pub fn threads_per_group(&self) -> GridSize {
        let max_total = self.max_threads_per_group.max(1);
        let w = self
            .execution_width
            .clamp(1, self.max_group_size_x.max(1).min(max_total));
        let h = (max_total / w).clamp(1, self.max_group_size_y.max(1));
        GridSize::new(w, h, 1)
    }
}

/// Exact-coverage dispatch for one frame.
///
/// `threads_per_grid` is exactly the output size. wgpu launches whole groups,
/// so the trailing groups may contain invocations past the edge; the kernel
/// returns early for those, leaving one live invocation per pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DispatchPlan {
    pub threads_per_grid: GridSize,
    pub threads_per_group: GridSize,
}

impl DispatchPlan {
    pub fn exact(size: PixelSize, threads_per_group: GridSize) -> Self {
        Self {
            threads_per_grid: GridSize::new(size.width, size.height, 1),
            threads_per_group,
        }
    }

    /// Number of groups to launch along each axis.
    pub fn workgroup_count(&self) -> GridSize {
        let g = self.threads_per_grid;
        let t = self.threads_per_group;
        GridSize::new(
            g.x.div_ceil(t.x.max(1)),
            g.y.div_ceil(t.y.max(1)),
            g.z.div_ceil(t.z.max(1)),
        )
    }

    /// Whether an invocation with this global id maps to an output pixel.
    #[inline]
    pub fn is_live(&self, gx: u32, gy: u32) -> bool {
        gx < self.threads_per_grid.x && gy < self.threads_per_grid.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(width: u32, max: u32) -> ThreadgroupCaps {
        ThreadgroupCaps {
            execution_width: width,
            max_threads_per_group: max,
            max_group_size_x: 256,
            max_group_size_y: 256,
        }
    }

    // ── group sizing ──────────────────────────────────────────────────────

    #[test]
    fn group_height_fills_the_budget() {
        assert_eq!(caps(32, 256).threads_per_group(), GridSize::new(32, 8, 1));
        assert_eq!(caps(32, 1024).threads_per_group(), GridSize::new(32, 32, 1));
        assert_eq!(caps(64, 256).threads_per_group(), GridSize::new(64, 4, 1));
    }

    #[test]
    fn height_floors() {
        assert_eq!(caps(24, 256).threads_per_group(), GridSize::new(24, 10, 1));
    }

    #[test]
    fn width_is_clamped_to_limits() {
        let c = ThreadgroupCaps {
            execution_width: 512,
            max_threads_per_group: 256,
            max_group_size_x: 128,
            max_group_size_y: 64,
        };
        assert_eq!(c.threads_per_group(), GridSize::new(128, 2, 1));
    }

    #[test]
    fn height_is_clamped_to_limits() {
        let c = ThreadgroupCaps {
            execution_width: 1,
            max_threads_per_group: 256,
            max_group_size_x: 256,
            max_group_size_y: 64,
        };
        assert_eq!(c.threads_per_group(), GridSize::new(1, 64, 1));
    }

    #[test]
    fn group_never_exceeds_budget() {
        for width in [1, 7, 16, 32, 33, 64, 100, 256, 300] {
            for max in [1, 64, 128, 256, 1024] {
                let g = caps(width, max).threads_per_group();
                assert!(g.x >= 1 && g.y >= 1);
                assert!(g.volume() <= max as u64, "w={width} max={max} -> {g:?}");
            }
        }
    }

    #[test]
    fn from_limits_reads_device_figures() {
        let limits = wgpu::Limits::default();
        let c = ThreadgroupCaps::from_limits(&limits, 32);
        assert_eq!(c.max_threads_per_group, limits.max_compute_invocations_per_workgroup);
        assert_eq!(c.max_group_size_x, limits.max_compute_workgroup_size_x);
        assert_eq!(c.max_group_size_y, limits.max_compute_workgroup_size_y);
    }

    // ── coverage ──────────────────────────────────────────────────────────

    #[test]
    fn grid_is_exactly_the_output_size() {
        let group = GridSize::new(32, 8, 1);
        for (w, h) in [(1, 1), (31, 7), (32, 8), (33, 9), (1920, 1080), (1, 4000)] {
            let plan = DispatchPlan::exact(PixelSize::new(w, h), group);
            assert_eq!(plan.threads_per_grid, GridSize::new(w, h, 1));
        }
    }

    #[test]
    fn workgroup_count_rounds_up_without_spare_groups() {
        let group = GridSize::new(32, 8, 1);
        let plan = DispatchPlan::exact(PixelSize::new(33, 8), group);
        assert_eq!(plan.workgroup_count(), GridSize::new(2, 1, 1));

        for (w, h) in [(1, 1), (31, 7), (64, 16), (65, 17), (1920, 1080)] {
            let plan = DispatchPlan::exact(PixelSize::new(w, h), group);
            let n = plan.workgroup_count();
            assert!(n.x * group.x >= w && (n.x - 1) * group.x < w);
            assert!(n.y * group.y >= h && (n.y - 1) * group.y < h);
            assert_eq!(n.z, 1);
        }
    }

    #[test]
    fn every_pixel_gets_exactly_one_live_invocation() {
        for (group, (w, h)) in [
            (GridSize::new(32, 8, 1), (1, 1)),
            (GridSize::new(32, 8, 1), (33, 9)),
            (GridSize::new(16, 16, 1), (100, 37)),
            (GridSize::new(7, 3, 1), (50, 50)),
        ] {
            let plan = DispatchPlan::exact(PixelSize::new(w, h), group);
            let n = plan.workgroup_count();
            let mut hits = vec![0u32; (w * h) as usize];

            for gy in 0..n.y {
                for gx in 0..n.x {
                    for ly in 0..group.y {
                        for lx in 0..group.x {
                            let x = gx * group.x + lx;
                            let y = gy * group.y + ly;
                            if plan.is_live(x, y) {
                                hits[(y * w + x) as usize] += 1;
                            }
                        }
                    }
                }
            }

            assert!(hits.iter().all(|&c| c == 1), "{w}x{h} with {group:?}");
        }
    }
}
