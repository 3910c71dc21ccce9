//! 2D geometry kernel
//!
//! Pure functions only: no state, no allocation beyond small scratch
//! vectors, no panics. Everything here works in screen space (y grows
//! downward) with `glam::Vec2`.

pub mod polygon;
pub mod rect;
pub mod segment;

pub use polygon::{Polygon, point_in_polygon, segment_intersects_polygon};
pub use rect::{Rect, aabb_overlap, closest_point_on_rect, segment_intersects_rect};
pub use segment::{Crossing, closest_point_on_segment, segment_intersect};
