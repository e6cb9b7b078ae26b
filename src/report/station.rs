use std::io::Write;

use crate::columns;
use crate::error::ExploreResult;
use crate::types::DataSet;

use super::{most_common, section};

/// Most common start station, end station and start-to-end route.
pub fn station_stats<W: Write>(dataset: &DataSet, out: &mut W) -> ExploreResult<()> {
    section(out, "Calculating The Most Popular Stations and Trip...", |out| {
        let start = most_common(dataset, columns::START_STATION)?;
        writeln!(out, "Most common start station is : {start}")?;
        let end = most_common(dataset, columns::END_STATION)?;
        writeln!(out, "Most common end station is : {end}")?;
        let route = most_common(dataset, columns::ROUTE)?;
        writeln!(out, "Most common route is : {route}")?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::station_stats;
    use crate::error::ExploreError;
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn utf8(s: &str) -> Value {
        Value::Utf8(s.to_string())
    }

    #[test]
    fn reports_most_common_stations_and_route() {
        let schema = Schema::new(vec![
            Field::new("Start Station", DataType::Utf8),
            Field::new("End Station", DataType::Utf8),
            Field::new("Route", DataType::Utf8),
        ]);
        let ds = DataSet::new(
            schema,
            vec![
                vec![utf8("A"), utf8("B"), utf8("A to B")],
                vec![utf8("A"), utf8("C"), utf8("A to C")],
                vec![utf8("C"), utf8("C"), utf8("C to C")],
                vec![utf8("C"), utf8("B"), utf8("C to B")],
                vec![utf8("A"), utf8("C"), utf8("A to C")],
            ],
        );

        let mut out = Vec::new();
        station_stats(&ds, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Most common start station is : A\n"));
        assert!(out.contains("Most common end station is : C\n"));
        assert!(out.contains("Most common route is : A to C\n"));
    }

    #[test]
    fn missing_route_column_is_an_error() {
        let schema = Schema::new(vec![
            Field::new("Start Station", DataType::Utf8),
            Field::new("End Station", DataType::Utf8),
        ]);
        let ds = DataSet::new(schema, vec![vec![utf8("A"), utf8("B")]]);

        let err = station_stats(&ds, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ExploreError::MissingColumn { ref column } if column == "Route"));
    }
}
