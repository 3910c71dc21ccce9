//! Debris simulation
//!
//! Frame-driven, single-threaded, owned by whoever owns the scene.

pub mod field;
pub mod piece;

pub use field::{Collector, CollectorId, FieldUpdate, FragmentField};
pub use piece::{
    Fragment, FragmentPhase, FragmentShape, FragmentTag, is_expired, spawn_fragment_pair, step,
};
