//! Filesystem-backed schema lookup

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dinero_core::SchemaSource;
use dinero_domain::constants::SCHEMA_FILE_EXTENSION;
use dinero_domain::{DineroError, Result};
use serde_json::Value;
use tracing::debug;

/// Reads schema documents from `{root}/{name}.json` on every lookup
#[derive(Debug, Clone)]
pub struct SchemaDirectory {
    root: PathBuf,
}

impl SchemaDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{SCHEMA_FILE_EXTENSION}"))
    }
}

impl SchemaSource for SchemaDirectory {
    fn load(&self, name: &str) -> Result<Option<Value>> {
        let path = self.path_for(name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Schema file not found");
                return Ok(None);
            }
            Err(err) => {
                return Err(DineroError::Io(format!(
                    "Failed to read schema {}: {err}",
                    path.display()
                )))
            }
        };

        serde_json::from_str(&contents).map(Some).map_err(|err| {
            DineroError::Config(format!("Schema {} is not valid JSON: {err}", path.display()))
        })
    }
}
