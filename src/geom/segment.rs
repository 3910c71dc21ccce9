//! Segment-segment intersection and chord crossings
//!
//! A "chord" is the straight line from the first to the last point of a
//! stroke. Crossing a shape means the chord enters through one edge and
//! leaves through another.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PARALLEL_EPSILON;

/// Entry and exit points of a chord through a closed shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub entry: Vec2,
    pub exit: Vec2,
}

impl Crossing {
    /// Midpoint of the cut inside the shape
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.entry + self.exit) * 0.5
    }

    /// Cut direction in radians, measured from +x
    #[inline]
    pub fn angle(&self) -> f32 {
        let d = self.exit - self.entry;
        d.y.atan2(d.x)
    }

    /// Length of the cut inside the shape
    #[inline]
    pub fn length(&self) -> f32 {
        self.entry.distance(self.exit)
    }
}

/// Entry and exit closer than this collapse to a single touch point
const TOUCH_EPSILON: f32 = 1e-3;

/// Parametric intersection of `p1→p2` with `p3→p4`
///
/// Returns `(ua, ub)`, the positions along the first and second segment,
/// both in `[0, 1]`.
pub(crate) fn segment_params(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<(f32, f32)> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let denom = d2.y * d1.x - d2.x * d1.y;
    if denom.abs() < PARALLEL_EPSILON || !denom.is_finite() {
        return None;
    }

    let offset = p1 - p3;
    let ua = (d2.x * offset.y - d2.y * offset.x) / denom;
    let ub = (d1.x * offset.y - d1.y * offset.x) / denom;

    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Some((ua, ub))
    } else {
        None
    }
}

/// Intersection point of segments `p1→p2` and `p3→p4`
///
/// Parallel, collinear and non-overlapping segments return `None`.
pub fn segment_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    segment_params(p1, p2, p3, p4).map(|(ua, _)| p1 + (p2 - p1) * ua)
}

/// Cross the chord `p1→p2` against a list of edges
///
/// Needs at least two hits; the first and last along the chord become
/// entry and exit. A chord that starts or ends inside the shape only
/// reports one hit and is a miss.
pub(crate) fn chord_crossing<I>(p1: Vec2, p2: Vec2, edges: I) -> Option<Crossing>
where
    I: IntoIterator<Item = (Vec2, Vec2)>,
{
    let mut hits: Vec<(f32, Vec2)> = edges
        .into_iter()
        .filter_map(|(a, b)| segment_params(p1, p2, a, b).map(|(t, _)| (t, p1 + (p2 - p1) * t)))
        .collect();

    if hits.len() < 2 {
        return None;
    }

    hits.sort_by(|a, b| a.0.total_cmp(&b.0));
    let entry = hits[0].1;
    let exit = hits[hits.len() - 1].1;

    // Grazing a corner hits two edges at the same spot
    if entry.distance(exit) < TOUCH_EPSILON {
        return None;
    }

    Some(Crossing { entry, exit })
}

/// Closest point to `p` on the segment `a→b`
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-8 {
        return a; // Degenerate segment
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_intersect_cross() {
        let hit = segment_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("diagonals cross");
        assert!((hit - Vec2::new(5.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_segment_intersect_parallel() {
        let hit = segment_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
        );
        assert!(hit.is_none());

        // Collinear overlap is also treated as parallel
        let hit = segment_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(15.0, 0.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_segment_intersect_out_of_range() {
        // Lines cross at (20, 0), past the end of the first segment
        let hit = segment_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, -5.0),
            Vec2::new(20.0, 5.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_segment_intersect_endpoint_touch() {
        let hit = segment_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(10.0, 5.0),
        );
        assert!(hit.is_some());
    }

    #[test]
    fn test_chord_crossing_needs_two_hits() {
        let edges = [(Vec2::new(5.0, -5.0), Vec2::new(5.0, 5.0))];
        assert!(chord_crossing(Vec2::ZERO, Vec2::new(10.0, 0.0), edges).is_none());
    }

    #[test]
    fn test_chord_crossing_sorted_by_chord() {
        // Edges supplied far-first; entry must still be the near one
        let edges = [
            (Vec2::new(8.0, -5.0), Vec2::new(8.0, 5.0)),
            (Vec2::new(2.0, -5.0), Vec2::new(2.0, 5.0)),
        ];
        let crossing = chord_crossing(Vec2::ZERO, Vec2::new(10.0, 0.0), edges).unwrap();
        assert!((crossing.entry.x - 2.0).abs() < 1e-4);
        assert!((crossing.exit.x - 8.0).abs() < 1e-4);
        assert!(crossing.angle().abs() < 1e-6);
        assert!((crossing.midpoint().x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_closest_point_on_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(Vec2::new(5.0, 3.0), a, b), Vec2::new(5.0, 0.0));
        assert_eq!(closest_point_on_segment(Vec2::new(-4.0, 1.0), a, b), a);
        assert_eq!(closest_point_on_segment(Vec2::new(14.0, 1.0), a, b), b);
        assert_eq!(closest_point_on_segment(Vec2::new(3.0, 3.0), a, a), a);
    }
}
