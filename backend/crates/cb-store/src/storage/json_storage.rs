//! Flat JSON-array file backing the project list.
//!
//! Reads never fail: a missing, unreadable or malformed file is an empty
//! collection. Writes replace the whole file in place, with no temp file,
//! rename or lock, so two processes writing at once lose one of the writes.

use crate::{Result as StoreErrorResult, StoreError};

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::Value;

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Items of the top-level JSON array, or an empty list.
    pub fn load(&self) -> Vec<Value> {
        if !self.path.exists() {
            debug!("No data file at {:?}, starting empty", self.path);
            return Vec::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Cannot read data file {:?}: {e}", self.path);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                warn!(
                    "Data file {:?} does not hold a JSON array (found {}), treating as empty",
                    self.path,
                    json_kind(&other)
                );
                Vec::new()
            }
            Err(e) => {
                warn!("Data file {:?} is corrupted: {e}", self.path);
                Vec::new()
            }
        }
    }

    /// Overwrite the file with `items`, creating parent directories first.
    pub fn save(&self, items: &[Value]) -> StoreErrorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json).map_err(|e| StoreError::io(self.path.clone(), e))?;

        debug!("Wrote {} records to {:?}", items.len(), self.path);
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
