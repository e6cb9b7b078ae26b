//! Raw row viewer: pages through the filtered trips on request.

use std::io::{BufRead, Write};

use crate::error::ExploreResult;
use crate::prompt::Console;
use crate::types::{DataSet, Value};

pub const ROWS_HINT: &str = "You can only choose from (y - n).";

pub fn rows_prompt(batch: usize) -> String {
    format!("Do you want to see {batch} rows of data (y - n)?")
}

/// Offer the rows of `dataset` in batches of `batch` until the user answers `n`.
///
/// Prompting stops as soon as fewer than `batch` unseen rows remain, so a trailing partial
/// batch is never shown. Returns the number of rows printed.
pub fn show_raw_rows<R: BufRead, W: Write>(
    dataset: &DataSet,
    console: &mut Console<R, W>,
    batch: usize,
) -> ExploreResult<usize> {
    let prompt = rows_prompt(batch);
    let mut shown = 0;

    while batch > 0 && shown + batch <= dataset.row_count() {
        let answer = console.ask(&prompt)?.trim().to_lowercase();
        match answer.as_str() {
            "y" => {
                write_rows(dataset, shown, shown + batch, console.output())?;
                shown += batch;
            }
            "n" => break,
            _ => writeln!(console.output(), "{ROWS_HINT}\n")?,
        }
    }

    writeln!(console.output(), "\n{}", "*".repeat(100))?;
    Ok(shown)
}

/// Print rows `start..end` as an aligned table, headed by the column names.
fn write_rows<W: Write>(dataset: &DataSet, start: usize, end: usize, out: &mut W) -> ExploreResult<()> {
    let rows = &dataset.rows[start..end];
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(Value::to_string).collect())
        .collect();

    let index_width = end.to_string().len();
    let widths: Vec<usize> = dataset
        .schema
        .field_names()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(String::len)
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write!(out, "{:index_width$}", "")?;
    for (name, &width) in dataset.schema.field_names().zip(&widths) {
        write!(out, "  {name:>width$}")?;
    }
    writeln!(out)?;

    for (offset, row) in cells.iter().enumerate() {
        write!(out, "{:<index_width$}", start + offset)?;
        for (cell, &width) in row.iter().zip(&widths) {
            write!(out, "  {cell:>width$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataType, Field, Schema};

    fn numbered(n: i64) -> DataSet {
        let schema = Schema::new(vec![Field::new("id", DataType::Int64)]);
        DataSet::new(schema, (0..n).map(|i| vec![Value::Int64(i * 100)]).collect())
    }

    fn view(n: i64, input: &str) -> (usize, String, String) {
        let ds = numbered(n);
        let mut input = input.as_bytes();
        let mut console = Console::new(&mut input, Vec::new());
        let shown = show_raw_rows(&ds, &mut console, 5).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        (shown, out, String::from_utf8_lossy(input).into_owned())
    }

    #[test]
    fn seven_rows_show_one_batch_then_stop() {
        let (shown, out, unread) = view(7, "y\ny\ny\n");
        assert_eq!(shown, 5);
        assert!(out.contains("400"));
        assert!(!out.contains("500"));
        assert_eq!(out.matches(&rows_prompt(5)).count(), 1);
        // Later answers are left for whoever reads next.
        assert_eq!(unread, "y\ny\n");
    }

    #[test]
    fn ten_rows_show_two_batches() {
        let (shown, out, _) = view(10, "Y\n y \n");
        assert_eq!(shown, 10);
        assert!(out.contains("900"));
    }

    #[test]
    fn answering_n_stops_immediately() {
        let (shown, out, _) = view(12, "n\ny\n");
        assert_eq!(shown, 0);
        assert!(!out.contains("100"));
    }

    #[test]
    fn invalid_answers_are_reprompted() {
        let (shown, out, _) = view(6, "maybe\nyes\ny\n");
        assert_eq!(shown, 5);
        assert_eq!(out.matches(ROWS_HINT).count(), 2);
        assert_eq!(out.matches(&rows_prompt(5)).count(), 3);
    }

    #[test]
    fn fewer_rows_than_a_batch_are_never_offered() {
        let (shown, out, unread) = view(4, "y\n");
        assert_eq!(shown, 0);
        assert!(!out.contains(&rows_prompt(5)));
        assert_eq!(unread, "y\n");
    }
}
