// bench.rs
#![feature(test)]
extern crate test;

#[cfg(test)]
mod intersect_bench {
    use test::Bencher;

    use std::iter;

    use rand::{prelude::SliceRandom, thread_rng, Rng};

    use glam::Vec3A;

    use kdtree_raycast::*;

    static TRIANGLES_NUM: usize = 64;

    fn random_triangle() -> Triangle {
        let mut rng = thread_rng();
        let v0 = rng.gen::<Vec3A>() * 9.0 - Vec3A::splat(5.0);
        let v1 = rng.gen();
        let v2 = rng.gen();
        Triangle::new(v0, v1, v2)
    }

    #[bench]
    fn ray_triangle_intersect(b: &mut Bencher) {
        let tri = random_triangle();
        let origin = Vec3A::ZERO;
        let direction = tri.centroid().normalize_or_zero();

        b.iter(|| ray_triangle_intersect(&tri, origin, direction));
    }

    #[bench]
    fn ray_triangle_no_intersect(b: &mut Bencher) {
        let tri = random_triangle();
        let origin = Vec3A::ZERO;
        let direction = -tri.centroid().normalize_or_zero();

        b.iter(|| ray_triangle_intersect(&tri, origin, direction));
    }

    #[bench]
    fn ray_triangles_intersect(b: &mut Bencher) {
        let mut rng = thread_rng();
        let triangles: Vec<Triangle> = iter::repeat_with(random_triangle)
            .take(TRIANGLES_NUM)
            .collect();

        let ray = Ray::infinite_ray(
            Vec3A::ZERO,
            triangles
                .choose(&mut rng)
                .unwrap()
                .centroid()
                .normalize_or_zero(),
        );

        b.iter(|| triangles[..].raycast(&ray));
    }
}
