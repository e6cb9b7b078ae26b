//! Loading trip files.
//!
//! Most callers should use [`load_trips`] (from [`loader`]) which:
//!
//! - resolves the city's CSV file under a data directory
//! - ingests it into an in-memory [`crate::types::DataSet`] using [`crate::columns::trip_schema`]
//! - appends the derived `month`, `day`, `hour` and `Route` columns and applies month/day filters
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The schema-driven CSV reader itself lives in [`csv`].

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{load_trips, prepare_trips, LoadOptions};
pub use observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver};
