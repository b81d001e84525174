//! Plugin configuration, loaded from a small toml file. Every field has a
//! default so a missing file or key is not an error.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegionGuardConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub wand: WandConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StorageConfig {
    /// Path of the regions snapshot document.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WandConfig {
    /// Item id the host's interact handler treats as the region wand.
    #[serde(default = "default_wand_item")]
    pub item: String,
}

fn default_data_file() -> PathBuf {
    "regions.json".into()
}

fn default_wand_item() -> String {
    "minecraft:wooden_axe".into()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl Default for WandConfig {
    fn default() -> Self {
        Self {
            item: default_wand_item(),
        }
    }
}

impl Default for RegionGuardConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            wand: WandConfig::default(),
        }
    }
}

impl RegionGuardConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let s = std::fs::read_to_string(path).map_err(|e| format!("read config: {e}"))?;
        toml::from_str(&s).map_err(|e| format!("parse config: {e}"))
    }
}
