//! City loader.
//!
//! [`load_trips`] reads one city's trip file into an in-memory [`crate::types::DataSet`],
//! appends the derived `month`, `day`, `hour` and `Route` columns, and applies the requested
//! month/day filters.
//!
//! - The city's file is resolved against [`LoadOptions::data_dir`].
//! - If a [`super::observability::LoadObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Datelike, Timelike};

use crate::columns;
use crate::error::{ExploreError, ExploreResult};
use crate::processing::filter_eq;
use crate::types::{DataSet, DataType, Field, Value};
use crate::vocab::{City, DayOfWeek, FilterSelection, Month};

use super::csv::ingest_csv_from_path;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling where and how trip files are loaded.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    pub data_dir: PathBuf,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("data_dir", &self.data_dir)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

impl LoadOptions {
    /// Path of the trip file for `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

/// Load the trips of `selection.city`, filtered by its month and day.
///
/// Missing files, missing required columns and unparsable values are returned as errors;
/// nothing is retried.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use bikeshare_explorer::ingestion::{load_trips, LoadOptions};
/// use bikeshare_explorer::vocab::{City, DayOfWeek, FilterSelection, TimeFilter};
///
/// # fn main() -> Result<(), bikeshare_explorer::ExploreError> {
/// let selection = FilterSelection {
///     city: City::Chicago,
///     month: None,
///     day: Some(DayOfWeek::Monday),
///     mode: TimeFilter::Day,
/// };
/// let trips = load_trips(&selection, &LoadOptions::default())?;
/// println!("rows={}", trips.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_trips(selection: &FilterSelection, options: &LoadOptions) -> ExploreResult<DataSet> {
    let path = options.path_for(selection.city);
    let ctx = LoadContext {
        city: selection.city,
        path: path.clone(),
    };

    let result = read_and_filter(&path, selection);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((rows_read, ds)) => obs.on_success(
                &ctx,
                LoadStats {
                    rows_read: *rows_read,
                    rows_kept: ds.row_count(),
                },
            ),
            Err(e) => {
                let sev = LoadSeverity::of(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.map(|(_, ds)| ds)
}

fn read_and_filter(path: &Path, selection: &FilterSelection) -> ExploreResult<(usize, DataSet)> {
    let raw = ingest_csv_from_path(path, &columns::trip_schema())?;
    let rows_read = raw.row_count();
    let trips = prepare_trips(raw, selection.month, selection.day)?;
    Ok((rows_read, trips))
}

/// Derive the time and route columns of freshly ingested trips, then filter them.
///
/// `raw` must carry the `Start Time`, `Start Station` and `End Station` columns. Filters are
/// exact matches on the derived `month` and `day` columns; `None` keeps every row.
pub fn prepare_trips(
    raw: DataSet,
    month: Option<Month>,
    day: Option<DayOfWeek>,
) -> ExploreResult<DataSet> {
    let trips = derive_columns(raw)?;

    let trips = match month {
        Some(m) => {
            log::debug!("filtering by month {} ({})", m.number(), m);
            filter_eq(&trips, columns::MONTH, &Value::Int64(i64::from(m.number())))
                .ok_or_else(|| ExploreError::missing_column(columns::MONTH))?
        }
        None => trips,
    };

    match day {
        Some(d) => {
            log::debug!("filtering by day {d}");
            filter_eq(&trips, columns::DAY, &Value::Utf8(d.name().to_owned()))
                .ok_or_else(|| ExploreError::missing_column(columns::DAY))
        }
        None => Ok(trips),
    }
}

fn derive_columns(raw: DataSet) -> ExploreResult<DataSet> {
    let index = |name: &str| {
        raw.schema
            .index_of(name)
            .ok_or_else(|| ExploreError::missing_column(name))
    };
    let start = index(columns::START_TIME)?;
    let from = index(columns::START_STATION)?;
    let to = index(columns::END_STATION)?;

    let trips = raw
        .with_column(Field::new(columns::MONTH, DataType::Int64), |row| match &row[start] {
            Value::Timestamp(ts) => Value::Int64(i64::from(ts.month())),
            _ => Value::Null,
        })
        .with_column(Field::new(columns::DAY, DataType::Utf8), |row| match &row[start] {
            Value::Timestamp(ts) => Value::Utf8(DayOfWeek::from(ts.weekday()).name().to_owned()),
            _ => Value::Null,
        })
        .with_column(Field::new(columns::HOUR, DataType::Int64), |row| match &row[start] {
            Value::Timestamp(ts) => Value::Int64(i64::from(ts.hour())),
            _ => Value::Null,
        })
        .with_column(Field::new(columns::ROUTE, DataType::Utf8), |row| {
            match (&row[from], &row[to]) {
                (Value::Utf8(a), Value::Utf8(b)) => Value::Utf8(format!("{a} to {b}")),
                _ => Value::Null,
            }
        });
    Ok(trips)
}
