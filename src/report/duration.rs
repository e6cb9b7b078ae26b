use std::io::Write;

use crate::columns;
use crate::error::{ExploreError, ExploreResult};
use crate::processing::ReduceOp;
use crate::types::DataSet;

use super::{aggregate, section};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripDurationSummary {
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl TripDurationSummary {
    pub fn compute(dataset: &DataSet) -> ExploreResult<Self> {
        let seconds = |op: ReduceOp| -> ExploreResult<f64> {
            aggregate(dataset, columns::TRIP_DURATION, op)?
                .as_f64()
                .ok_or_else(|| ExploreError::empty_column(columns::TRIP_DURATION))
        };
        Ok(Self {
            total_seconds: seconds(ReduceOp::Sum)?,
            mean_seconds: seconds(ReduceOp::Mean)?,
        })
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds / SECONDS_PER_HOUR
    }

    pub fn mean_hours(&self) -> f64 {
        self.mean_seconds / SECONDS_PER_HOUR
    }
}

/// Total and average travel time, each in seconds and in hours.
pub fn trip_duration_stats<W: Write>(dataset: &DataSet, out: &mut W) -> ExploreResult<()> {
    section(out, "Calculating Trip Duration...", |out| {
        let summary = TripDurationSummary::compute(dataset)?;
        writeln!(
            out,
            "The total travel time is : {} seconds or : {} hours.",
            summary.total_seconds,
            summary.total_hours()
        )?;
        writeln!(
            out,
            "The average travel time is : {} seconds or : {} hours.",
            summary.mean_seconds,
            summary.mean_hours()
        )?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::{trip_duration_stats, TripDurationSummary};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn durations(values: &[f64]) -> DataSet {
        let schema = Schema::new(vec![Field::new("Trip Duration", DataType::Float64)]);
        DataSet::new(schema, values.iter().map(|v| vec![Value::Float64(*v)]).collect())
    }

    #[test]
    fn sums_and_averages_durations() {
        let summary = TripDurationSummary::compute(&durations(&[100.0, 200.0, 300.0])).unwrap();
        assert_eq!(summary.total_seconds, 600.0);
        assert_eq!(summary.mean_seconds, 200.0);
        assert_eq!(summary.total_hours(), 600.0 / 3600.0);
        assert_eq!(summary.mean_hours(), 200.0 / 3600.0);
    }

    #[test]
    fn prints_seconds_and_hours() {
        let mut out = Vec::new();
        trip_duration_stats(&durations(&[1800.0, 5400.0]), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("The total travel time is : 7200 seconds or : 2 hours."));
        assert!(out.contains("The average travel time is : 3600 seconds or : 1 hours."));
    }

    #[test]
    fn empty_dataset_has_no_average() {
        assert!(TripDurationSummary::compute(&durations(&[])).is_err());
    }
}
