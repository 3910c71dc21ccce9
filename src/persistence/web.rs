//! LocalStorage save backend (wasm32)

use anyhow::anyhow;

use super::SaveRepository;
use super::envelope::{decode, encode};
use crate::progress::SaveData;

/// Stores the save under one LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub const DEFAULT_KEY: &'static str = "slice_impact_save";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl Default for LocalStorageRepository {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl SaveRepository for LocalStorageRepository {
    fn load(&self) -> SaveData {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, using defaults");
            return SaveData::default();
        };

        match storage.get_item(&self.key) {
            Ok(Some(json)) => match decode(&json) {
                Ok(data) => {
                    log::info!("Loaded save from LocalStorage");
                    data
                }
                Err(err) => {
                    log::warn!("{:#}; using defaults", err);
                    SaveData::default()
                }
            },
            _ => {
                log::info!("No save found, starting fresh");
                SaveData::default()
            }
        }
    }

    fn save(&mut self, data: &SaveData) -> anyhow::Result<()> {
        let storage = Self::storage().ok_or_else(|| anyhow!("LocalStorage unavailable"))?;
        let json = encode(data)?;
        storage
            .set_item(&self.key, &json)
            .map_err(|err| anyhow!("LocalStorage write failed: {:?}", err))?;
        log::info!("Save written to LocalStorage");
        Ok(())
    }
}
