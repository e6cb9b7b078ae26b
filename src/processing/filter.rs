//! Row filtering for [`crate::types::DataSet`].

use crate::types::{DataSet, Value};

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[Value]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Keep only rows whose `column` value equals `expected` exactly.
///
/// Returns `None` if `column` does not exist in the schema. Row order is preserved.
pub fn filter_eq(dataset: &DataSet, column: &str, expected: &Value) -> Option<DataSet> {
    let idx = dataset.schema.index_of(column)?;
    Some(dataset.filter_rows(|row| row.get(idx) == Some(expected)))
}
