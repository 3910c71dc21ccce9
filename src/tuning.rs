//! Data-driven balance values
//!
//! Every field has a default matching the constants in `crate::consts`, so
//! a tuning file only needs to list what it changes.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How stroke speed turns into fragment impulse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpulseModel {
    /// Impulse per unit of stroke speed
    pub speed_factor: f32,
    /// Lower clamp (also used for strokes with no measurable duration)
    pub min: f32,
    /// Upper clamp
    pub max: f32,
}

impl Default for ImpulseModel {
    fn default() -> Self {
        Self {
            speed_factor: IMPULSE_SPEED_FACTOR,
            min: IMPULSE_MIN,
            max: IMPULSE_MAX,
        }
    }
}

impl ImpulseModel {
    /// Impulse magnitude for a stroke of the given speed and duration
    pub fn magnitude(&self, speed: f32, duration_secs: f32) -> f32 {
        if !(duration_secs > 0.0) || !speed.is_finite() {
            return self.min;
        }
        (speed * self.speed_factor).clamp(self.min, self.max.max(self.min))
    }
}

/// Integration constants for debris
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentPhysics {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Horizontal velocity multiplier applied each step
    pub air_drag: f32,
    /// Seconds of life left when fading starts
    pub fade_threshold: f32,
}

impl Default for FragmentPhysics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            air_drag: AIR_DRAG,
            fade_threshold: FADE_THRESHOLD,
        }
    }
}

/// Complete tuning set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub impulse: ImpulseModel,
    pub physics: FragmentPhysics,
    /// Lifetime of each sliced half (seconds)
    pub fragment_lifetime: f32,
    /// Lifetime of each demolition chip (seconds)
    pub debris_lifetime: f32,
    /// Chips spawned when a structural target breaks
    pub debris_per_break: usize,
    /// Fragments below this y are gone for good
    pub floor_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            impulse: ImpulseModel::default(),
            physics: FragmentPhysics::default(),
            fragment_lifetime: FRAGMENT_LIFETIME,
            debris_lifetime: DEBRIS_LIFETIME,
            debris_per_break: 8,
            floor_y: 1080.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("invalid tuning JSON")?;
        log::debug!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize tuning")
    }
}
