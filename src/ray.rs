/// Query against the tree: hits are accepted for `0 <= t <= distance`, with the hit
/// point at `origin + direction * t`.
///
/// `direction` is not normalized, so `t` counts multiples of it. The query never
/// shortens `distance`; the closest hit is reported separately in a
/// [`RaycastHit`](crate::RaycastHit). A non-positive `distance` never hits.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: glam::Vec3A,
    pub direction: glam::Vec3A,
    /// Largest accepted `t`, infinite for an unbounded query
    pub distance: f32,
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Default::default(),
            direction: glam::Vec3A::new(1.0, 0.0, 0.0),
            distance: 1.0,
        }
    }
}

impl Ray {
    #[inline]
    pub fn new(origin: glam::Vec3A, direction: glam::Vec3A, distance: f32) -> Self {
        Self {
            origin,
            direction,
            distance,
        }
    }

    /// Unbounded query
    #[inline]
    pub fn infinite_ray(origin: glam::Vec3A, direction: glam::Vec3A) -> Self {
        Self::new(origin, direction, f32::INFINITY)
    }

    /// Point along the ray at parameter `t`
    #[inline]
    pub fn at(&self, t: f32) -> glam::Vec3A {
        self.origin + self.direction * t
    }
}
