//! Save/load behind a swappable repository
//!
//! Features:
//! - Versioned JSON envelope
//! - In-memory backend for tests and headless runs
//! - File backend with tmp-file writes and backup rotation (native)
//! - LocalStorage backend (wasm32)
//!
//! A save with an unknown version is ignored rather than migrated.

pub mod envelope;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use envelope::{SAVE_VERSION, decode, encode};
#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileRepository;
pub use memory::MemoryRepository;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageRepository;

use crate::progress::SaveData;

/// Where a game keeps its `SaveData`
pub trait SaveRepository {
    /// Load the last save, or defaults when there is none or it can't be read
    fn load(&self) -> SaveData;

    /// Persist `data`, replacing the previous save
    fn save(&mut self, data: &SaveData) -> anyhow::Result<()>;
}
