//! Impact resolution and damage
//!
//! Resolution is read-only: it reports where and how hard a stroke hit a
//! target. Damage is a separate step so each game decides what one hit is
//! worth.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::stroke::Stroke;
use super::target::{Shape, TargetShape};
use crate::geom::{Rect, aabb_overlap, segment_intersects_polygon, segment_intersects_rect};
use crate::non_negative;
use crate::tuning::ImpulseModel;

/// Outcome of testing one stroke against one target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Whether the chord passed through the target
    pub hit: bool,
    /// Where the chord entered the target
    pub entry: Vec2,
    /// Where the chord left the target
    pub exit: Vec2,
    /// Cut direction (radians, entry→exit)
    pub angle: f32,
    /// 1.0 for a cut through the center, falling to 0.0 at the half-diagonal
    pub precision: f32,
    /// Velocity to impart on fragments (perpendicular to the cut)
    pub impulse: Vec2,
    /// Average stroke velocity, for fragments to inherit a little drift
    pub stroke_velocity: Vec2,
}

impl ImpactResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            entry: Vec2::ZERO,
            exit: Vec2::ZERO,
            angle: 0.0,
            precision: 0.0,
            impulse: Vec2::ZERO,
            stroke_velocity: Vec2::ZERO,
        }
    }

    /// Midpoint of the cut
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.entry + self.exit) * 0.5
    }
}

/// Precision score of a cut whose midpoint is `midpoint`
pub fn precision_score(midpoint: Vec2, center: Vec2, half_diagonal: f32) -> f32 {
    if !(half_diagonal > 0.0) {
        return 0.0;
    }
    (1.0 - midpoint.distance(center) / half_diagonal).clamp(0.0, 1.0)
}

/// Resolve a stroke against a target using the default impulse model
pub fn resolve_impact(stroke: &Stroke, target: &TargetShape) -> ImpactResult {
    resolve_impact_with(stroke, target, &ImpulseModel::default())
}

/// Resolve a stroke against a target
///
/// Only the first and last samples matter: a curved drag is approximated
/// by its straight chord.
pub fn resolve_impact_with(stroke: &Stroke, target: &TargetShape, model: &ImpulseModel) -> ImpactResult {
    let Some((start, end)) = stroke.chord() else {
        return ImpactResult::miss();
    };

    let bounds = target.bounds();
    if !aabb_overlap(&Rect::from_corners(start, end), &bounds) {
        return ImpactResult::miss();
    }

    let crossing = match &target.shape {
        Shape::Rect(rect) => segment_intersects_rect(start, end, rect),
        Shape::Polygon(poly) => segment_intersects_polygon(start, end, poly),
    };
    let Some(crossing) = crossing else {
        return ImpactResult::miss();
    };

    let angle = crossing.angle();
    let precision = precision_score(crossing.midpoint(), target.center(), bounds.half_diagonal());

    let duration = stroke.duration_secs();
    let magnitude = model.magnitude(stroke.speed(), duration);
    let impulse = Vec2::from_angle(angle).perp() * magnitude;

    log::debug!(
        "Stroke hit target {} (angle {:.2}, precision {:.2}, impulse {:.0})",
        target.id,
        angle,
        precision,
        magnitude
    );

    ImpactResult {
        hit: true,
        entry: crossing.entry,
        exit: crossing.exit,
        angle,
        precision,
        impulse,
        stroke_velocity: stroke.velocity(),
    }
}

/// Remove `amount` health from a target
///
/// Returns `true` only on the call that takes health to zero. Targets that
/// are already destroyed are left untouched.
pub fn apply_damage(target: &mut TargetShape, amount: f32) -> bool {
    if target.is_destroyed() {
        return false;
    }
    target.health = (target.health - non_negative(amount)).max(0.0);
    target.is_destroyed()
}

/// Area damage from a blast at `impact_point`
///
/// Damage falls off linearly with the distance from the blast to the
/// nearest point of the target, so a point on or inside the target takes
/// the full `power`. Returns the damage dealt (0 for destroyed or
/// degenerate targets).
pub fn apply_radial_damage(target: &mut TargetShape, impact_point: Vec2, power: f32, radius: f32) -> f32 {
    if target.is_destroyed() || target.shape.is_degenerate() {
        return 0.0;
    }

    let power = non_negative(power);
    let radius = non_negative(radius);
    let distance = target.shape.closest_point(impact_point).distance(impact_point);

    let falloff = if distance <= 0.0 {
        1.0
    } else if distance >= radius {
        0.0
    } else {
        (1.0 - distance / radius).max(0.0)
    };

    let damage = power * falloff;
    if damage > 0.0 {
        target.health = (target.health - damage).max(0.0);
        log::debug!(
            "Blast dealt {:.1} to target {} ({:.1} left)",
            damage,
            target.id,
            target.health
        );
    }
    damage
}

/// Whether a tap at `point` lands on the target
pub fn tap_hits(target: &TargetShape, point: Vec2) -> bool {
    !target.is_destroyed() && !target.shape.is_degenerate() && target.shape.contains(point)
}
