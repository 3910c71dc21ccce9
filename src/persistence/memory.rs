//! In-memory save backend

use super::SaveRepository;
use super::envelope::{decode, encode};
use crate::progress::SaveData;

/// Keeps the encoded save in memory (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    stored: Option<String>,
    saves: usize,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored text, e.g. to simulate a corrupt save
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            stored: Some(raw.into()),
            saves: 0,
        }
    }

    /// Number of successful `save` calls
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn raw(&self) -> Option<&str> {
        self.stored.as_deref()
    }
}

impl SaveRepository for MemoryRepository {
    fn load(&self) -> SaveData {
        let Some(raw) = &self.stored else {
            return SaveData::default();
        };
        match decode(raw) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("Discarding in-memory save: {:#}", err);
                SaveData::default()
            }
        }
    }

    fn save(&mut self, data: &SaveData) -> anyhow::Result<()> {
        self.stored = Some(encode(data)?);
        self.saves += 1;
        Ok(())
    }
}
