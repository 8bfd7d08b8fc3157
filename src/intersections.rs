use crate::{MeshId, Primitive, Ray, RaycastHit, Triangle};

/// Objects capable of answering a nearest-hit ray query
pub trait Raycast {
    fn raycast(&self, ray: &Ray) -> RaycastHit;
}

/// Returned by [`ray_triangle_intersect`] when the ray misses
pub const NO_INTERSECTION: f32 = -1.0;

/// Intersect the ray's supporting line with a triangle.
///
/// Returns the ray parameter `t` of the hit, [`NO_INTERSECTION`] when the line is
/// parallel to the triangle or passes outside of it, or NaN for zero-area
/// triangles. Negative `t` and `t` beyond the query distance are left to the caller.
pub fn ray_triangle_intersect(tri: &Triangle, origin: glam::Vec3A, direction: glam::Vec3A) -> f32 {
    let ab = tri.vertex1 - tri.vertex0;
    let ac = tri.vertex2 - tri.vertex0;
    let n = ab.cross(ac).normalize();

    let denom = n.dot(direction);
    if denom == 0.0 {
        // ray parallel to triangle
        return NO_INTERSECTION;
    }
    let d = n.dot(tri.vertex0);
    let t = (d - n.dot(origin)) / denom;

    // point on the triangle's plane
    let q = origin + direction * t;

    let bc = tri.vertex2 - tri.vertex1;
    let ca = tri.vertex0 - tri.vertex2;
    if ab.cross(q - tri.vertex0).dot(n) < 0.0
        || bc.cross(q - tri.vertex1).dot(n) < 0.0
        || ca.cross(q - tri.vertex2).dot(n) < 0.0
    {
        return NO_INTERSECTION;
    }

    t
}

/// Test one triangle and keep it in `best` if it is at least as close as the current hit
/// and within the ray distance. Ties go to the triangle tested last.
#[inline]
pub(crate) fn test_primitive(triangle: &Triangle, mesh: MeshId, ray: &Ray, best: &mut RaycastHit) {
    let t = ray_triangle_intersect(triangle, ray.origin, ray.direction);
    if t >= 0.0 && t <= best.distance && t <= ray.distance {
        *best = RaycastHit {
            triangle: *triangle,
            point: ray.at(t),
            distance: t,
            mesh,
        };
    }
}

impl Raycast for Triangle {
    #[inline]
    fn raycast(&self, ray: &Ray) -> RaycastHit {
        [*self].raycast(ray)
    }
}

/// Linear scan over every triangle
impl Raycast for [Triangle] {
    fn raycast(&self, ray: &Ray) -> RaycastHit {
        let mut best = RaycastHit::MISS;
        if ray.distance <= 0.0 {
            return best;
        }
        self.iter()
            .for_each(|tri| test_primitive(tri, MeshId::default(), ray, &mut best));
        best
    }
}

/// Linear scan over every primitive
impl Raycast for [Primitive] {
    fn raycast(&self, ray: &Ray) -> RaycastHit {
        let mut best = RaycastHit::MISS;
        if ray.distance <= 0.0 {
            return best;
        }
        self.iter()
            .for_each(|prim| test_primitive(&prim.triangle, prim.mesh, ray, &mut best));
        best
    }
}
