use crate::error::{CraftzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Path configuration, stored as config.json in the craftz config dir.
///
/// Both paths are optional: a fresh install has neither, and every
/// command that needs one reports a status message instead of failing
/// when it is unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CraftzConfig {
    /// Plain-text item list, one identifier per line.
    #[serde(default)]
    pub items_file_path: Option<String>,

    /// The backing recipe script this session reads and overwrites.
    #[serde(default)]
    pub recipes_file_path: Option<String>,
}

impl CraftzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CraftzError::Io)?;
        let config: CraftzConfig =
            serde_json::from_str(&content).map_err(CraftzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CraftzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CraftzError::Serialization)?;
        fs::write(config_path, content).map_err(CraftzError::Io)?;
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "(unset)".to_string());
        vec![
            ("items-file", show(&self.items_file_path)),
            ("recipes-file", show(&self.recipes_file_path)),
        ]
    }
}
