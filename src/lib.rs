//! `bikeshare-explorer` is an interactive tool for exploring US bike-share trip data.
//!
//! A session asks for a city (Chicago, New York or Washington) and optional month / day-of-week
//! filters, loads that city's trips into an in-memory [`types::DataSet`], offers the raw rows
//! five at a time, and prints four reports:
//!
//! - most frequent times of travel (month, day, hour)
//! - most popular start station, end station and route
//! - total and average trip duration
//! - user types, and where the city records them, gender and birth years
//!
//! The primary entrypoint is [`session::run`], which drives everything through a
//! [`prompt::Console`]. The pieces are usable on their own:
//!
//! ```rust
//! use bikeshare_explorer::ingestion::{csv::ingest_csv_from_reader, prepare_trips};
//! use bikeshare_explorer::report::TripDurationSummary;
//! use bikeshare_explorer::vocab::Month;
//! use bikeshare_explorer::columns::trip_schema;
//!
//! let input = "\
//! Start Time,Trip Duration,Start Station,End Station,User Type
//! 2017-03-06 17:05:00,300,Lake St,Clark St,Subscriber
//! 2017-04-03 09:00:00,500,State St,Lake St,Customer
//! ";
//! let mut rdr = csv::ReaderBuilder::new().from_reader(input.as_bytes());
//! let raw = ingest_csv_from_reader(&mut rdr, &trip_schema()).unwrap();
//!
//! let march = prepare_trips(raw, Some("march".parse::<Month>().unwrap()), None).unwrap();
//! let summary = TripDurationSummary::compute(&march).unwrap();
//! assert_eq!(summary.total_seconds, 300.0);
//! ```
//!
//! ## Modules
//!
//! - [`vocab`]: fixed vocabularies (cities, filter modes, months, weekdays)
//! - [`prompt`]: console I/O and the filter collector
//! - [`ingestion`]: loading a city's trips with derived columns and filters
//! - [`viewer`]: paging through raw rows
//! - [`report`]: the four statistics reports
//! - [`session`]: the interactive loop
//! - [`types`] / [`processing`]: the in-memory table and its column operations
//! - [`config`] / [`error`]: options and the shared error type

pub mod columns;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod prompt;
pub mod report;
pub mod session;
pub mod types;
pub mod viewer;
pub mod vocab;

pub use error::{ExploreError, ExploreResult};
