//! Permission table source.
//!
//! The permission table is loaded once at startup. When
//! `PERMISSION_TABLE_PATH` is set the table is read from that JSON file,
//! otherwise the built-in table is used.

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessConfig {
    /// JSON permission table to load instead of the built-in one.
    pub permission_table_path: Option<PathBuf>,
}

impl AccessConfig {
    pub fn from_env() -> Self {
        Self {
            permission_table_path: env::var("PERMISSION_TABLE_PATH")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn with_table_path(path: impl Into<PathBuf>) -> Self {
        Self {
            permission_table_path: Some(path.into()),
        }
    }
}
