//! A single debris fragment and its projectile physics
//!
//! Fragments are cosmetic: they never collide with each other or with
//! targets. Each one runs a small life cycle:
//!
//! - `Alive` until its remaining life drops below the fade threshold
//! - `Fading` while alpha and scale ease toward 0 and 0.8
//! - `Expired` once life runs out, it falls past the floor, or it is collected

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::impact::TargetShape;
use crate::lerp;
use crate::tuning::FragmentPhysics;

/// Visual outline for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FragmentShape {
    /// Half of a sliced target
    #[default]
    Slab,
    /// Small dust/rubble chip
    Chip,
}

/// Render hint attached to every fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FragmentTag {
    /// 0xRRGGBB
    pub color: u32,
    pub shape: FragmentShape,
}

/// Life cycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentPhase {
    Alive,
    Fading,
    Expired,
}

/// A spawned piece of debris
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radians
    pub rotation: f32,
    /// Radians per second
    pub angular_vel: f32,
    /// Remaining life (seconds)
    pub life: f32,
    /// Life at spawn (seconds)
    pub max_life: f32,
    /// Unscaled width and height
    pub size: Vec2,
    pub alpha: f32,
    pub scale: f32,
    pub tag: FragmentTag,
}

impl Fragment {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2, life: f32, tag: FragmentTag) -> Self {
        Self {
            pos,
            vel,
            rotation: 0.0,
            angular_vel: 0.0,
            life,
            max_life: life,
            size,
            alpha: 1.0,
            scale: 1.0,
            tag,
        }
    }

    /// Replace the lifetime (resets the countdown)
    pub fn with_lifetime(mut self, life: f32) -> Self {
        self.life = life;
        self.max_life = life;
        self
    }

    pub fn with_spin(mut self, angular_vel: f32) -> Self {
        self.angular_vel = angular_vel;
        self
    }

    /// Current phase for the given fade threshold
    pub fn phase(&self, fade_threshold: f32) -> FragmentPhase {
        if self.life <= 0.0 || self.alpha <= 0.0 {
            FragmentPhase::Expired
        } else if self.life < fade_threshold {
            FragmentPhase::Fading
        } else {
            FragmentPhase::Alive
        }
    }

    /// Advance one frame with the default physics constants
    pub fn step(&mut self, dt: f32) {
        self.step_with(dt, &FragmentPhysics::default());
    }

    /// Advance one frame
    pub fn step_with(&mut self, dt: f32, physics: &FragmentPhysics) {
        self.vel.y += physics.gravity * dt;
        self.pos += self.vel * dt;
        self.vel.x *= physics.air_drag;
        self.rotation += self.angular_vel * dt;
        self.life = (self.life - dt).max(0.0);

        if self.life < physics.fade_threshold {
            let t = if physics.fade_threshold > 0.0 {
                (self.life / physics.fade_threshold).clamp(0.0, 1.0)
            } else {
                0.0
            };
            self.alpha = t;
            self.scale = lerp(FADE_MIN_SCALE, 1.0, t);
        }
    }

    /// Size after fade scaling
    pub fn display_size(&self) -> Vec2 {
        self.size * self.scale
    }
}

/// Advance a fragment one frame with the default physics constants
pub fn step(fragment: &mut Fragment, dt: f32) {
    fragment.step(dt);
}

/// True once the fragment has faded out or dropped below `floor_y`
pub fn is_expired(fragment: &Fragment, floor_y: f32) -> bool {
    fragment.alpha <= 0.0 || fragment.life <= 0.0 || fragment.pos.y > floor_y
}

/// Split a cut target into its two halves
///
/// The bounds are divided into left and right halves of equal width. The
/// half on the side the impulse points to takes `+impulse`, the other
/// `-impulse`; both inherit a little of the stroke's velocity and spin in
/// opposite directions, clockwise-first for left-to-right cuts.
pub fn spawn_fragment_pair(
    target: &TargetShape,
    cut_angle: f32,
    impulse: Vec2,
    stroke_velocity: Vec2,
) -> [Fragment; 2] {
    let bounds = target.bounds();
    let (left, right) = bounds.split_vertical();
    let tag = FragmentTag {
        color: target.material.debris_color(),
        shape: FragmentShape::Slab,
    };
    let carry = stroke_velocity * LATERAL_CARRY;

    let (left_push, right_push) = if impulse.x >= 0.0 {
        (-impulse, impulse)
    } else {
        (impulse, -impulse)
    };

    let sense = if cut_angle.cos() >= 0.0 { 1.0 } else { -1.0 };
    let spin = impulse.length() * SPIN_PER_IMPULSE * sense;

    [
        Fragment::new(left.center(), left_push + carry, left.size(), FRAGMENT_LIFETIME, tag)
            .with_spin(-spin),
        Fragment::new(right.center(), right_push + carry, right.size(), FRAGMENT_LIFETIME, tag)
            .with_spin(spin),
    ]
}
