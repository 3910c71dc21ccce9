//! Slice Impact - cut and demolition mechanics for arcade games
//!
//! Core modules:
//! - `geom`: Pure 2D geometry kernel (segments, rects, polygons)
//! - `impact`: Strokes, target shapes, impact resolution and damage
//! - `fragment`: Cosmetic debris simulation
//! - `playfield`: Scene-level owner that runs the per-frame data flow
//! - `persistence`: Save/load behind a swappable repository
//! - `tuning`: Data-driven physics balance

pub mod fragment;
pub mod geom;
pub mod impact;
pub mod persistence;
pub mod playfield;
pub mod progress;
pub mod settings;
pub mod tuning;

pub use playfield::{DamageMode, FieldEvent, PlayerInput, Playfield};
pub use progress::{Progress, RunStats};
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Physics and balance constants
pub mod consts {
    /// Fixed simulation timestep used by the demo loop (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Segment denominators below this are treated as parallel
    pub const PARALLEL_EPSILON: f32 = 1e-4;

    /// Downward acceleration applied to fragments (pixels/s²)
    pub const GRAVITY: f32 = 800.0;
    /// Multiplicative horizontal drag applied once per step
    pub const AIR_DRAG: f32 = 0.99;
    /// Remaining life (seconds) below which fragments start fading
    pub const FADE_THRESHOLD: f32 = 0.5;
    /// Scale a fragment shrinks toward while fading
    pub const FADE_MIN_SCALE: f32 = 0.8;
    /// Default lifetime of a sliced half (seconds)
    pub const FRAGMENT_LIFETIME: f32 = 2.0;
    /// Default lifetime of a demolition chip (seconds)
    pub const DEBRIS_LIFETIME: f32 = 1.2;

    /// Impulse magnitude = stroke speed * factor, clamped to [MIN, MAX]
    pub const IMPULSE_SPEED_FACTOR: f32 = 0.3;
    pub const IMPULSE_MIN: f32 = 150.0;
    pub const IMPULSE_MAX: f32 = 400.0;

    /// Share of the stroke velocity carried by each sliced half
    pub const LATERAL_CARRY: f32 = 0.1;
    /// Angular velocity (rad/s) per unit of impulse magnitude
    pub const SPIN_PER_IMPULSE: f32 = 0.01;

    /// Hard cap on live fragments regardless of settings
    pub const MAX_FRAGMENTS: usize = 512;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Replace NaN and negative values with zero
#[inline]
pub fn non_negative(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

/// Browser entry point: route `log` to the console and panics to `console.error`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("slice-impact core loaded");
}
