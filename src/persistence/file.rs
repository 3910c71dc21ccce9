//! JSON file save backend (native)
//!
//! Writes go to `<path>.tmp` first and are renamed into place; the
//! previous save is kept as `<path>.bak` and used when the main file is
//! unreadable.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::SaveRepository;
use super::envelope::{decode, encode};
use crate::progress::SaveData;

#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn backup_path(&self) -> PathBuf {
        self.path.with_extension("bak")
    }

    /// Read and decode one file; `Ok(None)` when it does not exist
    fn read(path: &Path) -> anyhow::Result<Option<SaveData>> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        decode(&json)
            .with_context(|| format!("failed to decode {}", path.display()))
            .map(Some)
    }
}

impl SaveRepository for JsonFileRepository {
    fn load(&self) -> SaveData {
        match Self::read(&self.path) {
            Ok(Some(data)) => {
                log::info!("Loaded save from {}", self.path.display());
                return data;
            }
            Ok(None) => {
                log::info!("No save at {}, starting fresh", self.path.display());
                return SaveData::default();
            }
            Err(err) => log::warn!("{:#}; trying backup", err),
        }

        match Self::read(&self.backup_path()) {
            Ok(Some(data)) => {
                log::info!("Recovered save from backup");
                data
            }
            Ok(None) => SaveData::default(),
            Err(err) => {
                log::warn!("{:#}; using defaults", err);
                SaveData::default()
            }
        }
    }

    fn save(&mut self, data: &SaveData) -> anyhow::Result<()> {
        let json = encode(data)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;

        if self.path.exists() {
            fs::rename(&self.path, self.backup_path()).context("failed to rotate backup")?;
        }
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to move save into {}", self.path.display()))?;

        log::debug!("Saved to {}", self.path.display());
        Ok(())
    }
}
