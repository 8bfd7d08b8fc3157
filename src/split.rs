use crate::{Axis, TriangleBuildData, AABB};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPlane {
    pub axis: Axis,
    pub position: f32,
}

pub trait SplitPlaneStrategy {
    /// Get the split plane for a set of triangles whose union box is `bounds`.
    ///
    /// Only called with non-empty sets.
    fn get_split_plane(bounds: &AABB, triangles: &[TriangleBuildData]) -> SplitPlane;
}

/// Longest axis of the union box, plane at the median of the triangle box centers.
///
/// For even counts the element at rank `n / 2` (0-indexed) is used, found by
/// partial selection, so identical inputs always produce the same tree.
pub struct MedianSplitStrategy {}

impl MedianSplitStrategy {
    /// Median of the box centers along `axis`, linear expected time.
    ///
    /// NaN centers are left out of the ranking. Those only come from triangles with
    /// a NaN vertex, which never intersect a ray, so a finite plane keeps every
    /// triangle that can still be hit. NaN is returned only when no center is a number.
    pub fn median_center(triangles: &[TriangleBuildData], axis: Axis) -> f32 {
        let mut centers: Vec<f32> = triangles
            .iter()
            .map(|data| data.bounds.center()[axis])
            .filter(|center| !center.is_nan())
            .collect();

        if centers.is_empty() {
            return f32::NAN;
        }

        let mid = centers.len() / 2;
        let (_, median, _) = centers.select_nth_unstable_by(mid, f32::total_cmp);
        *median
    }
}

impl SplitPlaneStrategy for MedianSplitStrategy {
    #[inline]
    fn get_split_plane(bounds: &AABB, triangles: &[TriangleBuildData]) -> SplitPlane {
        let axis = bounds.longest_axis();
        SplitPlane {
            axis,
            position: Self::median_center(triangles, axis),
        }
    }
}

/// Longest axis of the union box, plane through the middle of the box
pub struct MidpointSplitStrategy {}

impl SplitPlaneStrategy for MidpointSplitStrategy {
    #[inline]
    fn get_split_plane(bounds: &AABB, _triangles: &[TriangleBuildData]) -> SplitPlane {
        let axis = bounds.longest_axis();
        SplitPlane {
            axis,
            position: bounds.center()[axis],
        }
    }
}
