use std::io::Write;

use crate::columns;
use crate::error::ExploreResult;
use crate::types::DataSet;
use crate::vocab::TimeFilter;

use super::{most_common, section};

/// Most frequent month, day and hour of travel.
///
/// A dimension the user filtered on is not reported, since it would only echo the filter:
/// `month` reports day and hour, `day` reports month and hour, `both` reports the hour, `none`
/// reports all three.
pub fn time_stats<W: Write>(dataset: &DataSet, filter: TimeFilter, out: &mut W) -> ExploreResult<()> {
    section(out, "Calculating The Most Frequent Times of Travel...", |out| {
        if !filter.wants_month() {
            let month = most_common(dataset, columns::MONTH)?;
            writeln!(out, "The most frequent month is : {month}")?;
        }
        if !filter.wants_day() {
            let day = most_common(dataset, columns::DAY)?;
            writeln!(out, "The most frequent day is : {day}")?;
        }
        let hour = most_common(dataset, columns::HOUR)?;
        writeln!(out, "The most frequent hour is : {hour}")?;
        writeln!(out, "   Your filter is : {filter}")?;
        Ok(())
    })
}
