use crate::DEFAULT_DATA_FILENAME;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data file. Relative paths resolve against the config directory;
    /// `~/` expands to the home directory.
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATA_FILENAME),
        }
    }
}
