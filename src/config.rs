//! Session configuration.

use std::path::PathBuf;
use std::sync::Arc;

use crate::ingestion::{LoadOptions, LogObserver};

/// Environment variable naming the directory that holds the city CSV files.
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

/// Rows shown per batch by the raw row viewer.
pub const DEFAULT_ROWS_PER_BATCH: usize = 5;

/// Options for one interactive run.
///
/// Use [`Default`] for tests and [`SessionOptions::from_env`] for the binary.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Where and how trip files are loaded.
    pub load: LoadOptions,
    /// Batch size of the raw row viewer.
    pub rows_per_batch: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            load: LoadOptions::default(),
            rows_per_batch: DEFAULT_ROWS_PER_BATCH,
        }
    }
}

impl SessionOptions {
    /// Read the data directory from `BIKESHARE_DATA_DIR` (default: the working directory) and
    /// report load outcomes through [`LogObserver`].
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            load: LoadOptions {
                data_dir,
                observer: Some(Arc::new(LogObserver)),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
