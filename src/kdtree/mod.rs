mod bounds;
mod build;
mod traverse;

pub use build::{split_triangles_by_plane, TriangleBuildData};

use build::Builder;

use crate::{
    Axis, KdTreeConfig, KdTreeError, MedianSplitStrategy, MeshId, Primitive, Raycast,
    RaycastHit, Ray, SplitPlaneStrategy, Triangle, AABB,
};

/// Node of a [`KdTree`]. Children of a split are owned; `children[0]` is the side
/// below the plane, `children[1]` the side above it.
#[derive(Debug, Clone, PartialEq)]
pub enum KdNode {
    Split {
        axis: Axis,
        plane: f32,
        children: Box<[KdNode; 2]>,
    },
    Leaf {
        primitives: Vec<Primitive>,
    },
}

impl KdNode {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, KdNode::Leaf { .. })
    }
}

/// Numbers gathered while building a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KdTreeStats {
    /// Triangles handed to the builder
    pub input_triangles: usize,
    /// Triangles stored over all leaves, counting duplicates
    pub stored_triangles: usize,
    pub split_count: usize,
    pub leaf_count: usize,
    /// Deepest leaf, in edges from the root
    pub max_depth: u32,
    /// Leaves created because the depth budget ran out while still over capacity
    pub forced_leaves: usize,
}

/// Static kd-tree over world-space triangles.
///
/// Built once, immutable afterwards. Queries only need `&self`, so a built tree
/// can be shared between threads.
#[derive(Debug, Clone)]
pub struct KdTree {
    root: KdNode,
    config: KdTreeConfig,
    stats: KdTreeStats,
}

impl KdTree {
    /// Build with [`KdTreeConfig::default`]
    pub fn new(triangles: Vec<Triangle>) -> Self {
        let data = triangles.into_iter().map(TriangleBuildData::from).collect();
        Self::build_unchecked::<MedianSplitStrategy>(data, KdTreeConfig::default())
    }

    pub fn with_config(triangles: Vec<Triangle>, config: KdTreeConfig) -> Result<Self, KdTreeError> {
        let data = triangles.into_iter().map(TriangleBuildData::from).collect();
        Self::build(data, config)
    }

    /// Build with median splits
    pub fn build(data: Vec<TriangleBuildData>, config: KdTreeConfig) -> Result<Self, KdTreeError> {
        Self::build_with_strategy::<MedianSplitStrategy>(data, config)
    }

    pub fn build_with_strategy<Strat>(
        data: Vec<TriangleBuildData>,
        config: KdTreeConfig,
    ) -> Result<Self, KdTreeError>
    where
        Strat: SplitPlaneStrategy,
    {
        config.validate()?;
        Ok(Self::build_unchecked::<Strat>(data, config))
    }

    /// Build without validating `config`
    pub(crate) fn build_unchecked<Strat>(data: Vec<TriangleBuildData>, config: KdTreeConfig) -> Self
    where
        Strat: SplitPlaneStrategy,
    {
        let mut builder = Builder::new(&config, data.len());
        let root = builder.build_subtree::<Strat>(data, config.max_depth);
        let stats = builder.stats;

        log::debug!(
            "built kd-tree over {} triangles: {} splits, {} leaves, {} stored triangles, depth {}, {} forced leaves",
            stats.input_triangles,
            stats.split_count,
            stats.leaf_count,
            stats.stored_triangles,
            stats.max_depth,
            stats.forced_leaves
        );

        Self {
            root,
            config,
            stats,
        }
    }

    #[inline]
    pub fn root(&self) -> &KdNode {
        &self.root
    }

    #[inline]
    pub fn config(&self) -> &KdTreeConfig {
        &self.config
    }

    #[inline]
    pub fn stats(&self) -> &KdTreeStats {
        &self.stats
    }

    /// Nearest triangle hit by the ray within `max_distance`, measured in multiples of `direction`.
    ///
    /// Returns [`RaycastHit::MISS`] when nothing is hit or `max_distance <= 0`.
    #[inline]
    pub fn raycast(
        &self,
        origin: glam::Vec3A,
        direction: glam::Vec3A,
        max_distance: f32,
    ) -> RaycastHit {
        Raycast::raycast(self, &Ray::new(origin, direction, max_distance))
    }

    /// Bounding boxes of every node in post-order, the root's box last
    pub fn collect_bounds(&self) -> Vec<AABB> {
        let mut out = Vec::with_capacity(self.stats.leaf_count + self.stats.split_count);
        self.root.collect_bounds(&mut out);
        out
    }

    /// Leaves left to right, with their depth
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![(0, &self.root)],
        }
    }

    /// Mesh ids present in the tree, sorted and without duplicates
    pub fn meshes(&self) -> Vec<MeshId> {
        let mut meshes: Vec<MeshId> = self
            .leaves()
            .flat_map(|(_, primitives)| primitives.iter().map(|prim| prim.mesh))
            .collect();
        meshes.sort_unstable();
        meshes.dedup();
        meshes
    }
}

impl Raycast for KdTree {
    fn raycast(&self, ray: &Ray) -> RaycastHit {
        let mut best = RaycastHit::MISS;
        if ray.distance <= 0.0 {
            return best;
        }
        self.root.raycast_visit(ray, &mut best);
        best
    }
}

/// Depth-first iterator over the leaves of a [`KdTree`]
pub struct Leaves<'a> {
    stack: Vec<(u32, &'a KdNode)>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (u32, &'a [Primitive]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, node)) = self.stack.pop() {
            match node {
                KdNode::Leaf { primitives } => return Some((depth, primitives.as_slice())),
                KdNode::Split { children, .. } => {
                    self.stack.push((depth + 1, &children[1]));
                    self.stack.push((depth + 1, &children[0]));
                }
            }
        }
        None
    }
}
