use bytemuck::{Pod, Zeroable};

use crate::{KdTree, AABB};

/// Vertex of a line list, laid out for direct upload
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct LineVertex {
    pub position: glam::Vec3,
}

/// Line list drawing the edges of a set of boxes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<LineVertex>,
    pub indices: Vec<u32>,
}

impl Wireframe {
    pub const VERTICES_PER_BOX: usize = 8;
    pub const INDICES_PER_BOX: usize = 24;

    /// Index pairs into [`AABB::corners`]: bottom face, top face, then the four verticals
    const EDGES: [u32; Self::INDICES_PER_BOX] = [
        0, 1, 1, 2, 2, 3, 3, 0, //
        5, 4, 4, 7, 7, 6, 6, 5, //
        0, 5, 1, 4, 2, 7, 3, 6,
    ];

    /// Empty boxes are skipped
    pub fn from_boxes(boxes: &[AABB]) -> Self {
        let mut wireframe = Wireframe::default();

        for aabb in boxes.iter().filter(|aabb| !aabb.is_empty()) {
            let base = wireframe.vertices.len() as u32;

            wireframe
                .vertices
                .extend(aabb.corners().into_iter().map(|corner| LineVertex {
                    position: corner.into(),
                }));
            wireframe
                .indices
                .extend(Self::EDGES.iter().map(|index| base + index));
        }

        wireframe
    }

    #[inline]
    pub fn box_count(&self) -> usize {
        self.vertices.len() / Self::VERTICES_PER_BOX
    }

    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl KdTree {
    /// Wireframe of every node box, see [`KdTree::collect_bounds`]
    pub fn bounds_wireframe(&self) -> Wireframe {
        let wireframe = Wireframe::from_boxes(&self.collect_bounds());
        log::debug!(
            "created bounding box wireframe: {} boxes, {} vertices",
            wireframe.box_count(),
            wireframe.vertices.len()
        );
        wireframe
    }
}
