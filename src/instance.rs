use glam::{Affine3A, Quat, Vec3};

use crate::{
    KdTree, KdTreeConfig, KdTreeError, MedianSplitStrategy, MeshId, Triangle, TriangleBuildData,
};

/// Mesh placed in the scene: local-space triangles plus the instance transform
#[derive(Debug, Clone, Copy)]
pub struct MeshInstance<'a> {
    pub triangles: &'a [Triangle],
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl<'a> MeshInstance<'a> {
    #[inline]
    pub fn new(triangles: &'a [Triangle]) -> Self {
        Self {
            triangles,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    #[inline]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// `Scale * Rotate * Translate(position)`.
    ///
    /// The translation is applied to the local point first, then the rotation, then
    /// the scale. The renderer places its models with the same matrix, so the index
    /// has to match it even though it differs from the usual translate-last order.
    #[inline]
    pub fn model_matrix(&self) -> Affine3A {
        Affine3A::from_scale(self.scale)
            * Affine3A::from_quat(self.rotation)
            * Affine3A::from_translation(self.position)
    }

    /// World-space triangles of this instance, tagged with `mesh`
    pub fn world_triangles(&self, mesh: MeshId) -> impl Iterator<Item = TriangleBuildData> + 'a {
        let transform = self.model_matrix();
        let triangles = self.triangles;
        triangles
            .iter()
            .map(move |tri| TriangleBuildData::new(tri.transformed(&transform), mesh))
    }
}

/// Flatten instances into world space. Triangles of `instances[i]` get `MeshId(i)`.
pub fn flatten_instances(instances: &[MeshInstance]) -> Vec<TriangleBuildData> {
    let data: Vec<TriangleBuildData> = instances
        .iter()
        .enumerate()
        .flat_map(|(i, instance)| instance.world_triangles(MeshId(i as u32)))
        .collect();

    log::debug!(
        "flattened {} mesh instances into {} world-space triangles",
        instances.len(),
        data.len()
    );

    data
}

impl KdTree {
    /// Build over mesh instances with [`KdTreeConfig::default`]
    pub fn from_instances(instances: &[MeshInstance]) -> Self {
        Self::build_unchecked::<MedianSplitStrategy>(
            flatten_instances(instances),
            KdTreeConfig::default(),
        )
    }

    pub fn from_instances_with_config(
        instances: &[MeshInstance],
        config: KdTreeConfig,
    ) -> Result<Self, KdTreeError> {
        Self::build(flatten_instances(instances), config)
    }
}
