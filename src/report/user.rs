use std::io::Write;

use crate::columns;
use crate::error::ExploreResult;
use crate::processing::ReduceOp;
use crate::types::DataSet;

use super::{aggregate, most_common, section, write_counts};

/// Rider breakdown: user types always; gender and birth years only where the city records them.
pub fn user_stats<W: Write>(dataset: &DataSet, out: &mut W) -> ExploreResult<()> {
    section(out, "Calculating User Stats...", |out| {
        writeln!(out, "The count of user type is :")?;
        write_counts(out, dataset, columns::USER_TYPE)?;

        if dataset.schema.contains(columns::GENDER) {
            writeln!(out, "The count of user gender is :")?;
            write_counts(out, dataset, columns::GENDER)?;
        }

        if dataset.schema.contains(columns::BIRTH_YEAR) {
            let earliest = aggregate(dataset, columns::BIRTH_YEAR, ReduceOp::Min)?;
            writeln!(out, "The earliest user's year of birth is : {earliest}")?;
            let latest = aggregate(dataset, columns::BIRTH_YEAR, ReduceOp::Max)?;
            writeln!(out, "The most recent user's year of birth is : {latest}")?;
            let common = most_common(dataset, columns::BIRTH_YEAR)?;
            writeln!(out, "The most common user's year of birth is : {common}")?;
        }
        Ok(())
    })
}
