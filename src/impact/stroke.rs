//! Pointer strokes
//!
//! A `StrokeRecorder` collects samples while the pointer is down and is
//! frozen into an immutable `Stroke` on release.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// One pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub pos: Vec2,
    /// Milliseconds since an arbitrary epoch (only differences matter)
    pub t_ms: f64,
}

impl StrokePoint {
    pub fn new(x: f32, y: f32, t_ms: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            t_ms,
        }
    }
}

/// A finished drag gesture; samples are in non-decreasing time order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<StrokePoint>,
}

impl Stroke {
    /// Build a stroke from raw samples, dropping any that go back in time
    pub fn from_points(samples: impl IntoIterator<Item = StrokePoint>) -> Self {
        let mut recorder = StrokeRecorder::default();
        for sample in samples {
            recorder.extend(sample);
        }
        recorder.finish()
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fewer than 2 samples is a tap, not a swipe
    #[inline]
    pub fn is_swipe(&self) -> bool {
        self.points.len() >= 2
    }

    /// First→last chord used for hit testing
    pub fn chord(&self) -> Option<(Vec2, Vec2)> {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.is_swipe() => Some((a.pos, b.pos)),
            _ => None,
        }
    }

    /// Bounding box of the chord
    pub fn chord_bounds(&self) -> Option<Rect> {
        self.chord().map(|(a, b)| Rect::from_corners(a, b))
    }

    /// Elapsed time between first and last sample (seconds)
    pub fn duration_secs(&self) -> f32 {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => ((b.t_ms - a.t_ms) / 1000.0) as f32,
            _ => 0.0,
        }
    }

    /// Average velocity over the whole gesture (pixels/s)
    ///
    /// Zero when the stroke has no measurable duration.
    pub fn velocity(&self) -> Vec2 {
        let Some((a, b)) = self.chord() else {
            return Vec2::ZERO;
        };
        let duration = self.duration_secs();
        if duration <= 0.0 {
            return Vec2::ZERO;
        }
        (b - a) / duration
    }

    /// Total displacement divided by total duration (pixels/s)
    pub fn speed(&self) -> f32 {
        self.velocity().length()
    }
}

/// Accumulates samples between pointer-down and pointer-up
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    points: Vec<StrokePoint>,
}

impl StrokeRecorder {
    /// Pointer down; a non-finite first sample leaves the recorder empty
    pub fn begin(pos: Vec2, t_ms: f64) -> Self {
        let mut recorder = Self::default();
        recorder.push(pos, t_ms);
        recorder
    }

    /// Pointer move; samples older than the last one are dropped
    pub fn extend(&mut self, sample: StrokePoint) {
        if let Some(last) = self.points.last() {
            if sample.t_ms < last.t_ms {
                log::trace!(
                    "Dropping out-of-order stroke sample ({} < {})",
                    sample.t_ms,
                    last.t_ms
                );
                return;
            }
        }
        if !(sample.pos.is_finite() && sample.t_ms.is_finite()) {
            log::trace!("Dropping non-finite stroke sample");
            return;
        }
        self.points.push(sample);
    }

    /// Convenience for `extend(StrokePoint { .. })`
    pub fn push(&mut self, pos: Vec2, t_ms: f64) {
        self.extend(StrokePoint { pos, t_ms });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pointer up: freeze into an immutable stroke
    pub fn finish(self) -> Stroke {
        Stroke {
            points: self.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_lifecycle() {
        let mut rec = StrokeRecorder::begin(Vec2::new(0.0, 50.0), 0.0);
        rec.push(Vec2::new(100.0, 50.0), 50.0);
        rec.push(Vec2::new(200.0, 50.0), 100.0);
        let stroke = rec.finish();

        assert_eq!(stroke.len(), 3);
        assert!(stroke.is_swipe());
        assert_eq!(stroke.chord(), Some((Vec2::new(0.0, 50.0), Vec2::new(200.0, 50.0))));
        assert!((stroke.duration_secs() - 0.1).abs() < 1e-6);
        assert!((stroke.speed() - 2000.0).abs() < 1e-2);
    }

    #[test]
    fn test_out_of_order_samples_dropped() {
        let stroke = Stroke::from_points([
            StrokePoint::new(0.0, 0.0, 10.0),
            StrokePoint::new(5.0, 0.0, 5.0),
            StrokePoint::new(10.0, 0.0, 20.0),
        ]);
        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.points()[1].pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_non_finite_samples_dropped() {
        let stroke = Stroke::from_points([
            StrokePoint::new(0.0, 0.0, 0.0),
            StrokePoint::new(f32::NAN, 0.0, 5.0),
        ]);
        assert_eq!(stroke.len(), 1);
    }

    #[test]
    fn test_tap_is_not_swipe() {
        let tap = StrokeRecorder::begin(Vec2::new(3.0, 4.0), 0.0).finish();
        assert!(!tap.is_swipe());
        assert!(tap.chord().is_none());
        assert_eq!(tap.velocity(), Vec2::ZERO);
        assert!(Stroke::default().chord_bounds().is_none());
    }

    #[test]
    fn test_zero_duration_has_no_speed() {
        let stroke = Stroke::from_points([
            StrokePoint::new(0.0, 0.0, 0.0),
            StrokePoint::new(100.0, 0.0, 0.0),
        ]);
        assert_eq!(stroke.speed(), 0.0);
    }

    #[test]
    fn test_begin_rejects_non_finite_sample() {
        let mut rec = StrokeRecorder::begin(Vec2::new(f32::NAN, 0.0), 0.0);
        assert!(rec.is_empty());
        rec.push(Vec2::new(10.0, 0.0), 5.0);
        rec.push(Vec2::new(20.0, 0.0), 10.0);
        assert_eq!(rec.len(), 2);

        let rec = StrokeRecorder::begin(Vec2::ZERO, f64::INFINITY);
        assert!(rec.finish().is_empty());
    }
}
