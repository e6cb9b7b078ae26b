//! Column names used by the trip files and the columns derived from them at load time.

use crate::types::{DataType, Field, Schema};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Derived: month number (1-12) of `Start Time`.
pub const MONTH: &str = "month";
/// Derived: full weekday name of `Start Time`.
pub const DAY: &str = "day";
/// Derived: hour of day (0-23) of `Start Time`.
pub const HOUR: &str = "hour";
/// Derived: `"<start station> to <end station>"`.
pub const ROUTE: &str = "Route";

/// Schema of a city trip file. Gender and birth year are only recorded by some cities.
pub fn trip_schema() -> Schema {
    Schema::new(vec![
        Field::new(START_TIME, DataType::Timestamp),
        Field::optional(END_TIME, DataType::Utf8),
        Field::new(TRIP_DURATION, DataType::Float64),
        Field::new(START_STATION, DataType::Utf8),
        Field::new(END_STATION, DataType::Utf8),
        Field::new(USER_TYPE, DataType::Utf8),
        Field::optional(GENDER, DataType::Utf8),
        Field::optional(BIRTH_YEAR, DataType::Float64),
    ])
}
