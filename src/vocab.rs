//! Fixed vocabularies: cities, time-filter modes, months and weekdays.
//!
//! Every set is an enum with a case-insensitive, whitespace-trimming [`FromStr`] impl. A
//! rejected input yields a [`VocabularyError`] listing the allowed values, which is what the
//! interactive prompts print before asking again.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Input that is not a member of a fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid {kind}; expected one of ({allowed})")]
pub struct VocabularyError {
    /// What was being parsed ("city", "month", ...).
    pub kind: &'static str,
    /// The raw input, as given.
    pub input: String,
    /// Allowed values joined with " - ".
    pub allowed: String,
}

impl VocabularyError {
    fn new(kind: &'static str, input: &str, allowed: &[&str]) -> Self {
        Self {
            kind,
            input: input.to_owned(),
            allowed: allowed.join(" - "),
        }
    }
}

fn lookup<T: Copy>(
    kind: &'static str,
    input: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T, VocabularyError> {
    let needle = input.trim();
    all.iter()
        .copied()
        .find(|v| name(*v).eq_ignore_ascii_case(needle))
        .ok_or_else(|| {
            let names: Vec<&str> = all.iter().map(|v| name(*v)).collect();
            VocabularyError::new(kind, input, &names)
        })
}

/// One of the three cities with trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYork => "new york",
            City::Washington => "washington",
        }
    }

    /// Name of the CSV file holding this city's trips.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl FromStr for City {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("city", s, &Self::ALL, Self::name)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which time dimensions the user asked to filter by.
///
/// This only decides which travel-time statistics are printed; the actual row filtering is
/// driven by the month/day values in [`FilterSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFilter {
    Month,
    Day,
    Both,
    NoFilter,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 4] = [
        TimeFilter::Month,
        TimeFilter::Day,
        TimeFilter::Both,
        TimeFilter::NoFilter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimeFilter::Month => "month",
            TimeFilter::Day => "day",
            TimeFilter::Both => "both",
            TimeFilter::NoFilter => "none",
        }
    }

    /// Whether a month must be asked for.
    pub fn wants_month(self) -> bool {
        matches!(self, TimeFilter::Month | TimeFilter::Both)
    }

    /// Whether a day of week must be asked for.
    pub fn wants_day(self) -> bool {
        matches!(self, TimeFilter::Day | TimeFilter::Both)
    }
}

impl FromStr for TimeFilter {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("time filter", s, &Self::ALL, Self::name)
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Months covered by the trip data. Later months are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }

    /// 1-based month number, as used in the derived `month` column.
    pub fn number(self) -> u32 {
        self as u32
    }
}

impl FromStr for Month {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("month", s, &Self::ALL, Self::name)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Day of the week, by full English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => DayOfWeek::Sunday,
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("day", s, &Self::ALL, Self::name)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated choice of city and optional month/day filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    /// `None` means all months.
    pub month: Option<Month>,
    /// `None` means all days.
    pub day: Option<DayOfWeek>,
    pub mode: TimeFilter,
}

impl FilterSelection {
    /// Selection over a whole city, without time filters.
    pub fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
            mode: TimeFilter::NoFilter,
        }
    }
}
