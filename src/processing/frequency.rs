//! Frequency statistics over a single column: value counts and mode.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::types::{DataSet, Value};

/// Borrowed value ordered by [`Value::total_cmp`], so it can key a `BTreeMap`.
struct Key<'a>(&'a Value);

impl PartialEq for Key<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key<'_> {}

impl PartialOrd for Key<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(other.0)
    }
}

fn tally<'a>(values: impl Iterator<Item = &'a Value>) -> BTreeMap<Key<'a>, usize> {
    let mut counts = BTreeMap::new();
    for v in values.filter(|v| !v.is_null()) {
        *counts.entry(Key(v)).or_insert(0) += 1;
    }
    counts
}

/// Count occurrences of each distinct non-null value in `column`.
///
/// Sorted by descending count; ties keep ascending value order. Returns `None` if the column
/// does not exist.
pub fn value_counts(dataset: &DataSet, column: &str) -> Option<Vec<(Value, usize)>> {
    let counts = tally(dataset.column(column)?);
    let mut out: Vec<(Value, usize)> = counts
        .into_iter()
        .map(|(key, n)| (key.0.clone(), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    Some(out)
}

/// Most frequent non-null value of `column`.
///
/// When several values share the highest count the smallest one wins. Returns `None` if the
/// column does not exist and `Some(Value::Null)` if it holds no non-null values.
pub fn mode(dataset: &DataSet, column: &str) -> Option<Value> {
    let counts = tally(dataset.column(column)?);
    let mut best: Option<(&Value, usize)> = None;
    for (key, n) in counts {
        // Keys arrive in ascending order, so strict `>` keeps the smallest on ties.
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((key.0, n));
        }
    }
    Some(best.map(|(v, _)| v.clone()).unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::{mode, value_counts};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn user_types(values: &[Option<&str>]) -> DataSet {
        let schema = Schema::new(vec![Field::new("User Type", DataType::Utf8)]);
        let rows = values
            .iter()
            .map(|v| vec![v.map(|s| Value::Utf8(s.to_string())).unwrap_or(Value::Null)])
            .collect();
        DataSet::new(schema, rows)
    }

    fn utf8(s: &str) -> Value {
        Value::Utf8(s.to_string())
    }

    #[test]
    fn value_counts_of_user_types() {
        let ds = user_types(&[Some("Subscriber"), Some("Customer"), Some("Subscriber")]);
        assert_eq!(
            value_counts(&ds, "User Type"),
            Some(vec![(utf8("Subscriber"), 2), (utf8("Customer"), 1)])
        );
    }

    #[test]
    fn value_counts_skip_nulls_and_order_ties_by_value() {
        let ds = user_types(&[Some("Male"), None, Some("Female"), None]);
        assert_eq!(
            value_counts(&ds, "User Type"),
            Some(vec![(utf8("Female"), 1), (utf8("Male"), 1)])
        );
    }

    #[test]
    fn mode_picks_most_frequent() {
        let ds = user_types(&[Some("b"), Some("a"), Some("b"), None, None, None]);
        assert_eq!(mode(&ds, "User Type"), Some(utf8("b")));
    }

    #[test]
    fn mode_breaks_ties_with_smallest_value() {
        let ds = user_types(&[Some("Tuesday"), Some("Monday"), Some("Tuesday"), Some("Monday")]);
        assert_eq!(mode(&ds, "User Type"), Some(utf8("Monday")));

        let schema = Schema::new(vec![Field::new("Birth Year", DataType::Float64)]);
        let years = DataSet::new(
            schema,
            vec![
                vec![Value::Float64(1992.0)],
                vec![Value::Float64(1980.0)],
                vec![Value::Float64(1992.0)],
                vec![Value::Float64(1980.0)],
            ],
        );
        assert_eq!(mode(&years, "Birth Year"), Some(Value::Float64(1980.0)));
    }

    #[test]
    fn mode_of_empty_or_missing_column() {
        let ds = user_types(&[]);
        assert_eq!(mode(&ds, "User Type"), Some(Value::Null));
        assert_eq!(mode(&ds, "Gender"), None);
        assert_eq!(value_counts(&ds, "Gender"), None);
        assert_eq!(value_counts(&ds, "User Type"), Some(Vec::new()));
    }
}
