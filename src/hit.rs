use crate::Triangle;

/// Identifies the mesh instance a triangle was ingested from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

/// Triangle stored in a leaf, together with where it came from
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Primitive {
    pub triangle: Triangle,
    pub mesh: MeshId,
}

/// Result of a raycast. `distance == f32::INFINITY` means nothing was hit,
/// in which case `triangle`, `point` and `mesh` hold their default values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub triangle: Triangle,
    pub point: glam::Vec3A,
    pub distance: f32,
    pub mesh: MeshId,
}

impl Default for RaycastHit {
    fn default() -> Self {
        Self::MISS
    }
}

impl RaycastHit {
    pub const MISS: Self = Self {
        triangle: Triangle::ZERO,
        point: glam::Vec3A::ZERO,
        distance: f32::INFINITY,
        mesh: MeshId(0),
    };

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.distance.is_finite()
    }

    /// `Some(self)` when something was hit
    #[inline]
    pub fn into_option(self) -> Option<RaycastHit> {
        self.is_hit().then_some(self)
    }
}
