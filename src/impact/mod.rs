//! Impact resolution
//!
//! Turns a finished pointer stroke (or tap) into hit data for a target,
//! and applies line or area damage.

pub mod resolve;
pub mod stroke;
pub mod target;

pub use resolve::{
    ImpactResult, apply_damage, apply_radial_damage, precision_score, resolve_impact,
    resolve_impact_with, tap_hits,
};
pub use stroke::{Stroke, StrokePoint, StrokeRecorder};
pub use target::{Material, Shape, TargetShape};
