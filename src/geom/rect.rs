//! Axis-aligned rectangles
//!
//! A rect is stored as its top-left corner plus size, matching how the
//! games lay out blocks and food items on the canvas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::{Crossing, chord_crossing};

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect centered on `center` with the given size
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    /// Smallest rect containing both points (any corner order)
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Half the diagonal length: the farthest any interior point sits from the center
    #[inline]
    pub fn half_diagonal(&self) -> f32 {
        self.size().length() / 2.0
    }

    /// Zero or negative area
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }

    /// Inclusive containment (edges count as inside)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    /// Corners in ring order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        let min = self.min();
        let max = self.max();
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
    }

    /// The four edges, wrapping last corner back to the first
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    /// Split into left and right halves of equal width
    pub fn split_vertical(&self) -> (Rect, Rect) {
        let half = self.w / 2.0;
        (
            Rect::new(self.x, self.y, half, self.h),
            Rect::new(self.x + half, self.y, half, self.h),
        )
    }

    /// Move by `offset`
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }
}

/// Inclusive AABB overlap test (touching edges overlap)
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.x <= b.x + b.w && b.x <= a.x + a.w && a.y <= b.y + b.h && b.y <= a.y + a.h
}

/// Clamp `p` into the rect; returns `p` itself when it is inside
pub fn closest_point_on_rect(p: Vec2, rect: &Rect) -> Vec2 {
    p.clamp(rect.min(), rect.min().max(rect.max()))
}

/// Cross the chord `p1→p2` against the rect's four edges
///
/// Returns `None` unless the chord passes all the way through: starting or
/// ending inside the rect, or only grazing a corner, is a miss.
pub fn segment_intersects_rect(p1: Vec2, p2: Vec2, rect: &Rect) -> Option<Crossing> {
    if rect.is_degenerate() {
        return None;
    }
    chord_crossing(p1, p2, rect.edges())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_basics() {
        let r = Rect::new(50.0, 0.0, 100.0, 100.0);
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
        assert!((r.half_diagonal() - 70.710_68).abs() < 1e-3);
        assert!(r.contains(Vec2::new(50.0, 0.0)));
        assert!(!r.contains(Vec2::new(49.9, 10.0)));
        assert!(!r.is_degenerate());
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
    }

    #[test]
    fn test_from_corners_any_order() {
        let r = Rect::from_corners(Vec2::new(10.0, 5.0), Vec2::new(0.0, 20.0));
        assert_eq!(r, Rect::new(0.0, 5.0, 10.0, 15.0));
    }

    #[test]
    fn test_split_vertical_keeps_width() {
        let (left, right) = Rect::new(10.0, 0.0, 40.0, 20.0).split_vertical();
        assert_eq!(left.w + right.w, 40.0);
        assert_eq!(right.x, 30.0);
        assert_eq!(left.h, 20.0);
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(aabb_overlap(&a, &Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(aabb_overlap(&a, &Rect::new(10.0, 0.0, 5.0, 5.0))); // Touching
        assert!(!aabb_overlap(&a, &Rect::new(11.0, 0.0, 5.0, 5.0)));
        assert!(!aabb_overlap(&a, &Rect::new(0.0, -6.0, 5.0, 5.0)));
    }

    #[test]
    fn test_closest_point_on_rect() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(closest_point_on_rect(Vec2::new(200.0, 50.0), &r), Vec2::new(100.0, 50.0));
        assert_eq!(closest_point_on_rect(Vec2::new(-5.0, -5.0), &r), Vec2::ZERO);
        assert_eq!(closest_point_on_rect(Vec2::new(30.0, 40.0), &r), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_segment_through_rect() {
        let r = Rect::new(50.0, 0.0, 100.0, 100.0);
        let c = segment_intersects_rect(Vec2::new(0.0, 50.0), Vec2::new(200.0, 50.0), &r).unwrap();
        assert!((c.entry - Vec2::new(50.0, 50.0)).length() < 1e-3);
        assert!((c.exit - Vec2::new(150.0, 50.0)).length() < 1e-3);
    }

    #[test]
    fn test_segment_reversed_swaps_entry_exit() {
        let r = Rect::new(50.0, 0.0, 100.0, 100.0);
        let c = segment_intersects_rect(Vec2::new(200.0, 50.0), Vec2::new(0.0, 50.0), &r).unwrap();
        assert!((c.entry.x - 150.0).abs() < 1e-3);
        assert!((c.exit.x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_segment_starting_inside_is_miss() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(segment_intersects_rect(Vec2::new(50.0, 50.0), Vec2::new(200.0, 50.0), &r).is_none());
        assert!(segment_intersects_rect(Vec2::new(10.0, 10.0), Vec2::new(90.0, 90.0), &r).is_none());
    }

    #[test]
    fn test_segment_diagonal_through_corners() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let c = segment_intersects_rect(Vec2::new(-10.0, -10.0), Vec2::new(110.0, 110.0), &r).unwrap();
        assert!(c.entry.length() < 1e-3);
        assert!((c.exit - Vec2::new(100.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn test_segment_corner_graze_is_miss() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Passes through the top-right corner only
        let c = segment_intersects_rect(Vec2::new(90.0, -10.0), Vec2::new(110.0, 10.0), &r);
        assert!(c.is_none());
    }

    #[test]
    fn test_degenerate_rect_never_crossed() {
        let r = Rect::new(50.0, 0.0, 0.0, 100.0);
        assert!(segment_intersects_rect(Vec2::new(0.0, 50.0), Vec2::new(100.0, 50.0), &r).is_none());
    }
}
