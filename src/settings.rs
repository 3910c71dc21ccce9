//! Player effect preferences
//!
//! Saved inside `SaveData`; missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAGMENTS;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live fragments for this preset
    pub fn max_fragments(&self) -> usize {
        match self {
            QualityPreset::Low => 32,
            QualityPreset::Medium => 128,
            QualityPreset::High => MAX_FRAGMENTS,
        }
    }

    /// Debris count multiplier (1.0 = full)
    pub fn debris_density(&self) -> f32 {
        match self {
            QualityPreset::Low => 0.25,
            QualityPreset::Medium => 0.6,
            QualityPreset::High => 1.0,
        }
    }
}

/// Effect settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Debris chips on demolition breaks (sliced halves are always shown)
    pub particles: bool,
    /// Reduced motion (fewer, calmer fragments)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective fragment cap
    pub fn max_fragments(&self) -> usize {
        self.quality.max_fragments()
    }

    /// Scale a tuned debris count by quality and accessibility settings
    pub fn debris_count(&self, base: usize) -> usize {
        if !self.particles {
            return 0;
        }
        let mut density = self.quality.debris_density();
        if self.reduced_motion {
            density *= 0.5;
        }
        (base as f32 * density).round() as usize
    }
}
