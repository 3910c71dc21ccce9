//! Polygon rings for demolition blocks and scene obstacles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::segment::{Crossing, chord_crossing, closest_point_on_segment};

/// A closed polygon stored as an ordered ring (no repeated closing vertex)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Regular polygon with `sides` vertices on a circle
    pub fn regular(center: Vec2, radius: f32, sides: usize) -> Self {
        let points = (0..sides)
            .map(|i| {
                let theta = i as f32 / sides as f32 * std::f32::consts::TAU;
                center + Vec2::new(theta.cos(), theta.sin()) * radius
            })
            .collect();
        Self { points }
    }

    /// A polygon needs at least 3 vertices to enclose anything
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    /// Edges in ring order, including the closing last→first edge
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Vertex mean (matches the centroid for regular and convex blocks closely enough)
    pub fn centroid(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::ZERO;
        }
        self.points.iter().copied().sum::<Vec2>() / self.points.len() as f32
    }

    /// Axis-aligned bounds
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::new(0.0, 0.0, 0.0, 0.0);
        };
        let (min, max) = self
            .points
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Rect::from_corners(min, max)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        point_in_polygon(p, &self.points)
    }

    /// Closest point on the polygon itself: `p` when inside, else the nearest edge point
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        if !self.is_valid() || self.contains(p) {
            return p;
        }
        self.edges()
            .map(|(a, b)| closest_point_on_segment(p, a, b))
            .min_by(|a, b| a.distance_squared(p).total_cmp(&b.distance_squared(p)))
            .unwrap_or(p)
    }

    /// Move every vertex by `offset`
    pub fn translated(&self, offset: Vec2) -> Polygon {
        Polygon::new(self.points.iter().map(|p| *p + offset).collect())
    }
}

impl From<Rect> for Polygon {
    fn from(rect: Rect) -> Self {
        Polygon::new(rect.corners().to_vec())
    }
}

/// Even-odd ray-casting containment test
///
/// The ring wraps last→first internally. Fewer than 3 vertices is never
/// inside.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Cross the chord `p1→p2` against every polygon edge
pub fn segment_intersects_polygon(p1: Vec2, p2: Vec2, polygon: &Polygon) -> Option<Crossing> {
    if !polygon.is_valid() {
        return None;
    }
    chord_crossing(p1, p2, polygon.edges())
}
