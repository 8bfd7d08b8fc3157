use crate::{
    KdNode, KdTreeConfig, KdTreeStats, MeshId, Primitive, SplitPlane, SplitPlaneStrategy,
    Triangle, AABB,
};

/// A triangle paired with its bounding box, computed once at ingestion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleBuildData {
    pub triangle: Triangle,
    pub bounds: AABB,
    pub mesh: MeshId,
}

impl TriangleBuildData {
    #[inline]
    pub fn new(triangle: Triangle, mesh: MeshId) -> Self {
        Self {
            triangle,
            bounds: triangle.bounds(),
            mesh,
        }
    }

    #[inline]
    fn primitive(&self) -> Primitive {
        Primitive {
            triangle: self.triangle,
            mesh: self.mesh,
        }
    }
}

impl From<Triangle> for TriangleBuildData {
    #[inline]
    fn from(triangle: Triangle) -> Self {
        Self::new(triangle, MeshId::default())
    }
}

/// Partition triangles by a plane. Triangles whose box strictly contains the plane
/// go to both sides, the rest go to the side(s) they touch.
pub fn split_triangles_by_plane(
    plane: &SplitPlane,
    triangles: Vec<TriangleBuildData>,
) -> (Vec<TriangleBuildData>, Vec<TriangleBuildData>) {
    let SplitPlane { axis, position } = *plane;

    let mut left = Vec::with_capacity(triangles.len() / 2 + 1);
    let mut right = Vec::with_capacity(triangles.len() / 2 + 1);

    for data in triangles {
        let min = data.bounds.min[axis];
        let max = data.bounds.max[axis];
        let straddles = position < max && position > min;

        if straddles || min <= position {
            left.push(data);
        }
        if straddles || max >= position {
            right.push(data);
        }
    }

    (left, right)
}

pub(crate) struct Builder<'a> {
    config: &'a KdTreeConfig,
    pub(crate) stats: KdTreeStats,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(config: &'a KdTreeConfig, input_triangles: usize) -> Self {
        Self {
            config,
            stats: KdTreeStats {
                input_triangles,
                ..Default::default()
            },
        }
    }

    pub(crate) fn build_subtree<Strat>(
        &mut self,
        triangles: Vec<TriangleBuildData>,
        depth_budget: u32,
    ) -> KdNode
    where
        Strat: SplitPlaneStrategy,
    {
        let over_capacity = triangles.len() > self.config.max_primitives_per_leaf;

        if !over_capacity || depth_budget == 0 {
            return self.make_leaf(triangles, depth_budget, over_capacity);
        }

        let bounds: AABB = triangles.iter().map(|data| &data.bounds).collect();
        let plane = Strat::get_split_plane(&bounds, &triangles);

        let (left, right) = split_triangles_by_plane(&plane, triangles);

        self.stats.split_count += 1;

        let left = self.build_subtree::<Strat>(left, depth_budget - 1);
        let right = self.build_subtree::<Strat>(right, depth_budget - 1);

        KdNode::Split {
            axis: plane.axis,
            plane: plane.position,
            children: Box::new([left, right]),
        }
    }

    fn make_leaf(
        &mut self,
        triangles: Vec<TriangleBuildData>,
        depth_budget: u32,
        over_capacity: bool,
    ) -> KdNode {
        let depth = self.config.max_depth - depth_budget;

        if over_capacity {
            log::trace!(
                "depth budget exhausted, forcing a leaf with {} triangles (limit {})",
                triangles.len(),
                self.config.max_primitives_per_leaf
            );
            self.stats.forced_leaves += 1;
        }

        self.stats.leaf_count += 1;
        self.stats.stored_triangles += triangles.len();
        self.stats.max_depth = self.stats.max_depth.max(depth);

        KdNode::Leaf {
            primitives: triangles.iter().map(TriangleBuildData::primitive).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3A;

    use rand::{thread_rng, Rng};

    use crate::*;

    fn spanning(x_min: f32, x_max: f32) -> TriangleBuildData {
        Triangle::new(
            Vec3A::new(x_min, 0.0, 0.0),
            Vec3A::new(x_max, 0.0, 0.0),
            Vec3A::new(x_min, 1.0, 0.0),
        )
        .into()
    }

    #[test]
    fn straddling_goes_both_ways() {
        let plane = SplitPlane {
            axis: Axis::X,
            position: 2.0,
        };
        let (left, right) = split_triangles_by_plane(&plane, vec![spanning(1.0, 3.0)]);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn touching_plane_from_one_side() {
        let plane = SplitPlane {
            axis: Axis::X,
            position: 2.0,
        };

        let (left, right) = split_triangles_by_plane(&plane, vec![spanning(0.0, 2.0)]);
        assert_eq!((left.len(), right.len()), (1, 1));

        let (left, right) = split_triangles_by_plane(&plane, vec![spanning(2.0, 4.0)]);
        assert_eq!((left.len(), right.len()), (1, 1));

        let (left, right) = split_triangles_by_plane(&plane, vec![spanning(0.0, 1.5)]);
        assert_eq!((left.len(), right.len()), (1, 0));

        let (left, right) = split_triangles_by_plane(&plane, vec![spanning(2.5, 4.0)]);
        assert_eq!((left.len(), right.len()), (0, 1));
    }

    #[test]
    fn split_never_drops_triangles() {
        let mut rng = thread_rng();
        let triangles: Vec<TriangleBuildData> = (0..256)
            .map(|_| {
                let v0 = rng.gen::<Vec3A>() * 9.0 - Vec3A::splat(5.0);
                let v1 = v0 + rng.gen::<Vec3A>();
                let v2 = v0 + rng.gen::<Vec3A>();
                Triangle::new(v0, v1, v2).into()
            })
            .collect();

        let bounds: AABB = triangles.iter().map(|data| &data.bounds).collect();
        let plane = MedianSplitStrategy::get_split_plane(&bounds, &triangles);
        let (left, right) = split_triangles_by_plane(&plane, triangles.clone());

        assert!(left.len() + right.len() >= triangles.len());
        for data in &triangles {
            assert!(left.contains(data) || right.contains(data));
        }
    }
}
