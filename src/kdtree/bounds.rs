use crate::{KdNode, AABB};

impl KdNode {
    /// Push the boxes of this subtree in post-order and return this node's box
    pub(crate) fn collect_bounds(&self, out: &mut Vec<AABB>) -> AABB {
        let bounds: AABB = match self {
            KdNode::Leaf { primitives } => primitives.iter().map(|prim| &prim.triangle).collect(),
            KdNode::Split { children, .. } => {
                let first = out.len();
                children[0].collect_bounds(out);
                children[1].collect_bounds(out);

                // The bounding box of an inner node covers everything reported below it
                out[first..].iter().collect()
            }
        };

        out.push(bounds);
        bounds
    }
}
