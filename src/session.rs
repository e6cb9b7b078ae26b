//! The interactive session loop.

use std::io::{BufRead, Write};

use crate::config::SessionOptions;
use crate::error::ExploreResult;
use crate::ingestion::load_trips;
use crate::prompt::{collect_filters, Console};
use crate::report::{station_stats, time_stats, trip_duration_stats, user_stats};
use crate::viewer::show_raw_rows;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

/// Run exploration rounds until the user declines to restart.
///
/// Each round collects filters, loads the city's trips, offers raw rows, and prints the time,
/// station, duration and user reports in that order. Nothing carries over between rounds.
/// Any load or report failure ends the session with that error.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: &SessionOptions,
) -> ExploreResult<()> {
    let mut round = 1;
    loop {
        log::debug!("starting round {round}");
        writeln!(console.output(), "{GREETING}\n")?;

        let selection = collect_filters(console)?;
        let trips = load_trips(&selection, &options.load)?;

        show_raw_rows(&trips, console, options.rows_per_batch)?;
        time_stats(&trips, selection.mode, console.output())?;
        station_stats(&trips, console.output())?;
        trip_duration_stats(&trips, console.output())?;
        user_stats(&trips, console.output())?;

        if !wants_restart(console.read_answer(RESTART_PROMPT)?.as_deref()) {
            log::debug!("session finished after {round} round(s)");
            return Ok(());
        }
        writeln!(console.output(), "\n{}\n", "*".repeat(100))?;
        round += 1;
    }
}

/// Only `yes` (any case, surrounding whitespace ignored) restarts; end of input does not.
fn wants_restart(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("yes"))
}
