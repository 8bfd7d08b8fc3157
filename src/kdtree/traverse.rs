use crate::{intersections::test_primitive, KdNode, Ray, RaycastHit};

impl KdNode {
    /// Visit the subtree near side first and keep the closest accepted hit in `best`.
    ///
    /// The far child is visited whenever the ray crosses the split plane within
    /// `[0, ray.distance)`, regardless of how close `best` already is.
    pub(crate) fn raycast_visit(&self, ray: &Ray, best: &mut RaycastHit) {
        match self {
            KdNode::Leaf { primitives } => {
                for prim in primitives {
                    test_primitive(&prim.triangle, prim.mesh, ray, best);
                }
            }
            KdNode::Split {
                axis,
                plane,
                children,
            } => {
                let origin = ray.origin[*axis];
                let direction = ray.direction[*axis];
                let near = (origin > *plane) as usize;

                children[near].raycast_visit(ray, best);

                if direction == 0.0 {
                    // parallel to the split plane, the far side is unreachable
                    return;
                }

                let t = (*plane - origin) / direction;
                if 0.0 <= t && t < ray.distance {
                    children[near ^ 1].raycast_visit(ray, best);
                }
            }
        }
    }
}
