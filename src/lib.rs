pub mod axis;
pub use axis::*;

pub mod triangle;
pub use triangle::*;

pub mod ray;
pub use ray::*;

pub mod aabb;
pub use aabb::*;

pub mod hit;
pub use hit::*;

pub mod intersections;
pub use intersections::{ray_triangle_intersect, Raycast, NO_INTERSECTION};

pub mod error;
pub use error::*;

pub mod config;
pub use config::*;

pub mod split;
pub use split::*;

pub mod kdtree;
pub use kdtree::*;

pub mod instance;
pub use instance::*;

pub mod wireframe;
pub use wireframe::*;
