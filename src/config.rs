use crate::KdTreeError;

/// Build parameters of a [`KdTree`](crate::KdTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdTreeConfig {
    /// Maximum number of split levels between the root and any leaf
    pub max_depth: u32,
    /// Subsets at or below this size become leaves
    pub max_primitives_per_leaf: usize,
}

impl KdTreeConfig {
    pub const DEFAULT_MAX_DEPTH: u32 = 15;
    pub const DEFAULT_MAX_PRIMITIVES_PER_LEAF: usize = 150;
    pub const MAX_SUPPORTED_DEPTH: u32 = 32;

    #[inline]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn with_max_primitives_per_leaf(mut self, max_primitives_per_leaf: usize) -> Self {
        self.max_primitives_per_leaf = max_primitives_per_leaf;
        self
    }

    pub fn validate(&self) -> Result<(), KdTreeError> {
        if self.max_primitives_per_leaf == 0 {
            return Err(KdTreeError::ZeroLeafCapacity);
        }
        if self.max_depth > Self::MAX_SUPPORTED_DEPTH {
            return Err(KdTreeError::DepthLimitExceeded {
                requested: self.max_depth,
                limit: Self::MAX_SUPPORTED_DEPTH,
            });
        }
        Ok(())
    }
}

impl Default for KdTreeConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_primitives_per_leaf: Self::DEFAULT_MAX_PRIMITIVES_PER_LEAF,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn defaults() {
        let config = KdTreeConfig::default();
        assert_eq!(config.max_depth, 15);
        assert_eq!(config.max_primitives_per_leaf, 150);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_leaves() {
        let config = KdTreeConfig::default().with_max_primitives_per_leaf(0);
        assert_eq!(config.validate(), Err(KdTreeError::ZeroLeafCapacity));
    }

    #[test]
    fn rejects_deep_trees() {
        let config = KdTreeConfig::default().with_max_depth(33);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            KdTreeError::DepthLimitExceeded {
                requested: 33,
                limit: 32
            }
        );
        assert_eq!(
            err.to_string(),
            "max_depth 33 exceeds the supported limit of 32"
        );
    }

    #[test]
    fn zero_depth_is_allowed() {
        let config = KdTreeConfig::default().with_max_depth(0);
        assert!(config.validate().is_ok());
    }
}
