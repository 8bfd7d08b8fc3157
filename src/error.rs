use thiserror::Error;

/// Errors raised while validating a [`KdTreeConfig`](crate::KdTreeConfig).
///
/// Building and querying a tree never fail once the configuration is accepted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KdTreeError {
    /// Leaves must be allowed to hold at least one triangle
    #[error("max_primitives_per_leaf must be at least 1")]
    ZeroLeafCapacity,

    /// Straddling triangles are duplicated on every level, so very deep trees blow up in memory
    #[error("max_depth {requested} exceeds the supported limit of {limit}")]
    DepthLimitExceeded { requested: u32, limit: u32 },
}
