//! Core data model types.
//!
//! Trip files are loaded into an in-memory [`DataSet`] shaped by a [`Schema`] (a list of typed
//! [`Field`]s). Derived columns are appended with [`DataSet::with_column`]; row subsets are
//! copies made by [`DataSet::filter_rows`].

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;

/// Display format for [`Value::Timestamp`], matching the source files.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static NULL: Value = Value::Null;

/// Logical data type for a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string.
    Utf8,
    /// Date and time without a timezone.
    Timestamp,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
    /// Whether ingestion fails when the column is missing from the source.
    pub required: bool,
}

impl Field {
    /// Create a new required field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: true,
        }
    }

    /// Create a field that is kept when present and silently dropped when absent.
    pub fn optional(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            required: false,
            ..Self::new(name, data_type)
        }
    }
}

/// A list of fields describing the expected shape of incoming data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Whether a column with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Date and time.
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Total order over values, used for grouping and tie-breaking.
    ///
    /// Values of different variants order by variant (`Null` first); floats use
    /// [`f64::total_cmp`].
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Float64(a), Value::Float64(b)) => a.total_cmp(b),
            (Value::Utf8(a), Value::Utf8(b)) => a.cmp(b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Int64(_) => 1,
            Value::Float64(_) => 2,
            Value::Utf8(_) => 3,
            Value::Timestamp(_) => 4,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NaN"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
            Value::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the values of one column, in row order. `None` if the column does not exist.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value>> {
        let idx = self.schema.index_of(name)?;
        Some(self.rows.iter().map(move |row| row.get(idx).unwrap_or(&NULL)))
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original schema and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Append a derived column computed from each existing row.
    ///
    /// Existing values are never touched; `derive` sees the row before the new value is pushed.
    ///
    /// # Panics
    ///
    /// Panics if a column named `field.name` already exists.
    pub fn with_column<F>(mut self, field: Field, mut derive: F) -> Self
    where
        F: FnMut(&[Value]) -> Value,
    {
        assert!(
            !self.schema.contains(&field.name),
            "column '{}' already exists",
            field.name
        );
        for row in &mut self.rows {
            let value = derive(row.as_slice());
            row.push(value);
        }
        self.schema.fields.push(field);
        self
    }

    /// Reduce (fold) all rows into an accumulator value.
    ///
    /// This is similar to `Iterator::fold`, but provides each row as `&[Value]`.
    pub fn reduce_rows<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &[Value]) -> A,
    {
        self.rows
            .iter()
            .fold(init, |acc, row| reducer(acc, row.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSet, DataType, Field, Schema, Value};

    fn sample() -> DataSet {
        DataSet::new(
            Schema::new(vec![
                Field::new("Start Station", DataType::Utf8),
                Field::new("End Station", DataType::Utf8),
            ]),
            vec![
                vec![Value::Utf8("A".to_string()), Value::Utf8("B".to_string())],
                vec![Value::Utf8("B".to_string()), Value::Null],
            ],
        )
    }

    #[test]
    fn with_column_appends_derived_values() {
        let ds = sample().with_column(Field::new("Route", DataType::Utf8), |row| {
            match (&row[0], &row[1]) {
                (Value::Utf8(a), Value::Utf8(b)) => Value::Utf8(format!("{a} to {b}")),
                _ => Value::Null,
            }
        });

        assert_eq!(ds.schema.index_of("Route"), Some(2));
        assert_eq!(ds.rows[0][2], Value::Utf8("A to B".to_string()));
        assert_eq!(ds.rows[1][2], Value::Null);
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn with_column_rejects_duplicate_names() {
        let _ = sample().with_column(Field::new("End Station", DataType::Utf8), |_| Value::Null);
    }

    #[test]
    fn column_iterates_in_row_order() {
        let ds = sample();
        let values: Vec<&Value> = ds.column("Start Station").unwrap().collect();
        assert_eq!(
            values,
            vec![&Value::Utf8("A".to_string()), &Value::Utf8("B".to_string())]
        );
        assert!(ds.column("Gender").is_none());
    }

    #[test]
    fn total_cmp_orders_within_and_across_variants() {
        use std::cmp::Ordering;

        assert_eq!(Value::Int64(1).total_cmp(&Value::Int64(2)), Ordering::Less);
        assert_eq!(
            Value::Float64(1985.0).total_cmp(&Value::Float64(1985.0)),
            Ordering::Equal
        );
        assert_eq!(Value::Null.total_cmp(&Value::Int64(0)), Ordering::Less);
        assert_eq!(
            Value::Utf8("Monday".into()).total_cmp(&Value::Utf8("Friday".into())),
            Ordering::Greater
        );
    }

    #[test]
    fn display_prints_whole_floats_without_fraction() {
        assert_eq!(Value::Float64(1992.0).to_string(), "1992");
        assert_eq!(Value::Float64(100.5).to_string(), "100.5");
        assert_eq!(Value::Null.to_string(), "NaN");
    }
}
