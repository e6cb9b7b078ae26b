//! In-memory column operations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion.
//!
//! - [`filter()`] / [`filter_eq()`]: row filtering by predicate or exact column match
//! - [`reduce()`]: count/sum/min/max/mean over a numeric column
//! - [`value_counts()`] / [`mode()`]: frequency statistics over any column
//!
//! ## Example: filter → reduce → mode
//!
//! ```rust
//! use bikeshare_explorer::processing::{filter_eq, mode, reduce, ReduceOp};
//! use bikeshare_explorer::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("month", DataType::Int64),
//!     Field::new("Trip Duration", DataType::Float64),
//!     Field::new("User Type", DataType::Utf8),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(3), Value::Float64(100.0), Value::Utf8("Subscriber".into())],
//!         vec![Value::Int64(4), Value::Float64(900.0), Value::Utf8("Customer".into())],
//!         vec![Value::Int64(3), Value::Float64(300.0), Value::Utf8("Subscriber".into())],
//!     ],
//! );
//!
//! let march = filter_eq(&ds, "month", &Value::Int64(3)).unwrap();
//! assert_eq!(reduce(&march, "Trip Duration", ReduceOp::Mean), Some(Value::Float64(200.0)));
//! assert_eq!(mode(&march, "User Type"), Some(Value::Utf8("Subscriber".into())));
//! ```

pub mod filter;
pub mod frequency;
pub mod reduce;

pub use filter::{filter, filter_eq};
pub use frequency::{mode, value_counts};
pub use reduce::{reduce, ReduceOp};
