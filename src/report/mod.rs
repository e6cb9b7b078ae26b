//! Statistics reporters.
//!
//! Each reporter reads the filtered trips and prints a titled, timed section of plain text.
//! None of them modify the dataset. A missing column or a column with nothing to aggregate
//! aborts the report with an [`crate::ExploreError`].

mod duration;
mod station;
mod time;
mod user;

use std::io::Write;
use std::time::Instant;

use crate::error::{ExploreError, ExploreResult};
use crate::processing::{mode, reduce, value_counts, ReduceOp};
use crate::types::{DataSet, Value};

pub use duration::{trip_duration_stats, TripDurationSummary};
pub use station::station_stats;
pub use time::time_stats;
pub use user::user_stats;

/// Print `title`, run `body`, then report how long it took and close with a rule.
fn section<W, F>(out: &mut W, title: &str, body: F) -> ExploreResult<()>
where
    W: Write,
    F: FnOnce(&mut W) -> ExploreResult<()>,
{
    writeln!(out, "\n{title}\n")?;
    let start = Instant::now();
    body(&mut *out)?;
    writeln!(out, "\nThis took {} seconds.", start.elapsed().as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(40))?;
    Ok(())
}

fn require(value: Option<Value>, column: &str) -> ExploreResult<Value> {
    match value {
        None => Err(ExploreError::missing_column(column)),
        Some(Value::Null) => Err(ExploreError::empty_column(column)),
        Some(v) => Ok(v),
    }
}

fn most_common(dataset: &DataSet, column: &str) -> ExploreResult<Value> {
    require(mode(dataset, column), column)
}

fn aggregate(dataset: &DataSet, column: &str, op: ReduceOp) -> ExploreResult<Value> {
    require(reduce(dataset, column, op), column)
}

fn write_counts<W: Write>(out: &mut W, dataset: &DataSet, column: &str) -> ExploreResult<()> {
    let counts = value_counts(dataset, column).ok_or_else(|| ExploreError::missing_column(column))?;
    let width = counts
        .iter()
        .map(|(v, _)| v.to_string().len())
        .max()
        .unwrap_or(0);
    for (value, n) in counts {
        writeln!(out, "{:<width$}    {n}", value.to_string())?;
    }
    Ok(())
}
