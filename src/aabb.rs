use crate::{Axis, Triangle};

/// Axis aligned bounding box. The default box is empty (min = +inf, max = -inf)
/// and is the identity for [`Grow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: glam::Vec3A,
    pub max: glam::Vec3A,
}

impl Default for AABB {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Objects that can grow to contain something else
pub trait Grow<T> {
    fn grow(&mut self, other: T);
}

impl Grow<glam::Vec3A> for AABB {
    /// Grow the box to contain a new point
    #[inline]
    fn grow(&mut self, point: glam::Vec3A) {
        self.max = self.max.max(point);
        self.min = self.min.min(point);
    }
}

impl Grow<&Triangle> for AABB {
    #[inline]
    fn grow(&mut self, tri: &Triangle) {
        self.grow(tri.vertex0);
        self.grow(tri.vertex1);
        self.grow(tri.vertex2);
    }
}

impl Grow<&AABB> for AABB {
    #[inline]
    fn grow(&mut self, other: &AABB) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

impl AABB {
    pub const EMPTY: Self = Self {
        min: glam::Vec3A::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
        max: glam::Vec3A::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
    };

    #[inline]
    pub fn new(min: glam::Vec3A, max: glam::Vec3A) -> Self {
        Self { min, max }
    }

    /// If the AABB is valid (min <= max)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// True for a box that was never grown
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    #[inline]
    pub fn center(&self) -> glam::Vec3A {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> glam::Vec3A {
        self.max - self.min
    }

    /// Axis of the largest extent, see [`Axis::largest`] for the tie order
    #[inline]
    pub fn longest_axis(&self) -> Axis {
        Axis::largest(self.size())
    }

    #[inline]
    pub fn union(&self, other: &AABB) -> AABB {
        let mut aabb = *self;
        aabb.grow(other);
        aabb
    }

    /// Eight corners, bottom face first
    pub fn corners(&self) -> [glam::Vec3A; 8] {
        let (min, max) = (self.min, self.max);
        [
            min,
            glam::Vec3A::new(min.x, min.y, max.z),
            glam::Vec3A::new(max.x, min.y, max.z),
            glam::Vec3A::new(max.x, min.y, min.z),
            glam::Vec3A::new(min.x, max.y, max.z),
            glam::Vec3A::new(min.x, max.y, min.z),
            glam::Vec3A::new(max.x, max.y, min.z),
            max,
        ]
    }
}

impl From<&Triangle> for AABB {
    #[inline]
    fn from(tri: &Triangle) -> Self {
        tri.bounds()
    }
}

impl<'a> FromIterator<&'a Triangle> for AABB {
    fn from_iter<I: IntoIterator<Item = &'a Triangle>>(iter: I) -> Self {
        let mut aabb = AABB::default();
        iter.into_iter().for_each(|tri| aabb.grow(tri));
        aabb
    }
}

impl<'a> FromIterator<&'a AABB> for AABB {
    fn from_iter<I: IntoIterator<Item = &'a AABB>>(iter: I) -> Self {
        let mut aabb = AABB::default();
        iter.into_iter().for_each(|other| aabb.grow(other));
        aabb
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3A;

    use crate::*;

    #[test]
    fn empty_box() {
        let aabb = AABB::default();
        assert!(aabb.is_empty());
        assert!(!aabb.is_valid());

        let from_nothing: AABB = std::iter::empty::<&Triangle>().collect();
        assert_eq!(from_nothing, AABB::EMPTY);
    }

    #[test]
    fn union_of_triangles() {
        let triangles = [
            Triangle::new(Vec3A::ZERO, Vec3A::X, Vec3A::Y),
            Triangle::new(
                Vec3A::new(-1.0, 0.0, 2.0),
                Vec3A::new(0.0, 3.0, 2.0),
                Vec3A::new(0.0, 0.0, 4.0),
            ),
        ];
        let aabb: AABB = triangles.iter().collect();

        assert_eq!(aabb.min, Vec3A::new(-1.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3A::new(1.0, 3.0, 4.0));
        assert_eq!(aabb.center(), Vec3A::new(0.0, 1.5, 2.0));
        assert_eq!(aabb.size(), Vec3A::new(2.0, 3.0, 4.0));
        assert_eq!(aabb.longest_axis(), Axis::Z);
        assert!(aabb.is_valid());
    }

    #[test]
    fn union_with_empty_is_identity() {
        let aabb = AABB::new(Vec3A::splat(-1.0), Vec3A::splat(2.0));
        assert_eq!(aabb.union(&AABB::EMPTY), aabb);
        assert_eq!(AABB::EMPTY.union(&aabb), aabb);
    }

    #[test]
    fn inverted_box_propagates() {
        let inverted = AABB::new(Vec3A::ONE, Vec3A::ZERO);
        assert!(inverted.is_empty());
        assert!(!inverted.is_valid());
        assert_eq!(inverted.size(), Vec3A::splat(-1.0));

        let unit = AABB::new(Vec3A::ZERO, Vec3A::ONE);
        assert_eq!(inverted.union(&unit), unit);

        let partial = AABB::new(Vec3A::splat(-1.0), Vec3A::splat(0.5));
        assert_eq!(inverted.union(&partial), partial);

        assert_eq!(Wireframe::from_boxes(&[inverted]).box_count(), 0);
    }

    #[test]
    fn longest_axis_prefers_x_then_y() {
        let cube = AABB::new(Vec3A::ZERO, Vec3A::ONE);
        assert_eq!(cube.longest_axis(), Axis::X);

        let yz = AABB::new(Vec3A::ZERO, Vec3A::new(0.5, 1.0, 1.0));
        assert_eq!(yz.longest_axis(), Axis::Y);
    }

    #[test]
    fn corners_span_box() {
        let aabb = AABB::new(Vec3A::new(-1.0, -2.0, -3.0), Vec3A::new(1.0, 2.0, 3.0));
        let grown: AABB = {
            let mut grown = AABB::default();
            aabb.corners().into_iter().for_each(|corner| grown.grow(corner));
            grown
        };
        assert_eq!(grown, aabb);
        assert_eq!(aabb.corners()[0], aabb.min);
        assert_eq!(aabb.corners()[7], aabb.max);
    }
}
