extern crate glam;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{Grow, AABB};

/// World-space triangle. The winding is kept exactly as supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertex0: glam::Vec3A,
    pub vertex1: glam::Vec3A,
    pub vertex2: glam::Vec3A,
}

impl Triangle {
    /// Zeroed Triangle
    pub const ZERO: Self = Triangle {
        vertex0: glam::Vec3A::ZERO,
        vertex1: glam::Vec3A::ZERO,
        vertex2: glam::Vec3A::ZERO,
    };

    #[inline]
    pub fn new(vertex0: glam::Vec3A, vertex1: glam::Vec3A, vertex2: glam::Vec3A) -> Triangle {
        Triangle {
            vertex0,
            vertex1,
            vertex2,
        }
    }

    #[inline]
    pub fn vertices(&self) -> [glam::Vec3A; 3] {
        [self.vertex0, self.vertex1, self.vertex2]
    }

    #[inline]
    pub fn centroid(&self) -> glam::Vec3A {
        (self.vertex0 + self.vertex1 + self.vertex2) / 3.0
    }

    /// Per-axis min/max of the three vertices
    #[inline]
    pub fn bounds(&self) -> AABB {
        let mut aabb = AABB::default();
        aabb.grow(self);
        aabb
    }

    /// Apply an affine transform to every vertex
    #[inline]
    pub fn transformed(&self, transform: &glam::Affine3A) -> Triangle {
        Triangle::new(
            transform.transform_point3a(self.vertex0),
            transform.transform_point3a(self.vertex1),
            transform.transform_point3a(self.vertex2),
        )
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Distribution<Triangle> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Triangle {
        Triangle::new(rng.gen(), rng.gen(), rng.gen())
    }
}
