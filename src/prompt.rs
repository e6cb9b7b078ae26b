//! Interactive console and the filter collector.
//!
//! [`Console`] pairs a line-oriented input with an output sink so the whole session can be
//! driven from stdin/stdout or, in tests, from byte slices. [`collect_filters`] asks for a
//! city, a time-filter mode and (when needed) a month and a day, re-asking until each answer
//! is valid.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{ExploreError, ExploreResult};
use crate::vocab::{City, DayOfWeek, FilterSelection, Month, TimeFilter, VocabularyError};

pub const CITY_PROMPT: &str =
    "Which city do you want to see data from (chicago - new york - washington)?";
pub const CITY_HINT: &str = "You can only choose from (chicago - new york - washington).";
pub const MODE_PROMPT: &str = "Do you want to filter your data by month, day, both or none of them (month - day - both - none)?";
pub const MODE_HINT: &str = "You can only choose from (month - day - both - none).";
pub const MONTH_PROMPT: &str =
    "Which month do you want to filter by (January - February - March - April - May - June)?";
pub const MONTH_HINT: &str =
    "You can only choose from (January - February - March - April - May - June).";
pub const DAY_PROMPT: &str = "Which day do you want to filter by?";
pub const DAY_HINT: &str = "You can only choose from week days.";

/// Line-oriented console over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Sink for report output.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line, without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn read_answer(&mut self, prompt: &str) -> ExploreResult<Option<String>> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Like [`Self::read_answer`], but end of input is an error.
    pub fn ask(&mut self, prompt: &str) -> ExploreResult<String> {
        self.read_answer(prompt)?.ok_or(ExploreError::InputClosed)
    }

    /// Ask until `parse` accepts the answer, printing `hint` after every rejection.
    pub fn ask_until<T, F>(&mut self, prompt: &str, hint: &str, parse: F) -> ExploreResult<T>
    where
        F: Fn(&str) -> Result<T, VocabularyError>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("rejected answer: {e}");
                    writeln!(self.output, "{hint}\n")?;
                }
            }
        }
    }

    /// Ask for a member of a fixed vocabulary.
    pub fn choose<T>(&mut self, prompt: &str, hint: &str) -> ExploreResult<T>
    where
        T: FromStr<Err = VocabularyError>,
    {
        self.ask_until(prompt, hint, str::parse::<T>)
    }
}

/// Ask for a city, a time-filter mode, and the month and/or day that mode calls for.
///
/// Every question is repeated until answered with a member of its vocabulary; only a closed
/// input stream ends the loop early, as [`ExploreError::InputClosed`].
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> ExploreResult<FilterSelection> {
    let city: City = console.choose(CITY_PROMPT, CITY_HINT)?;
    let mode: TimeFilter = console.choose(MODE_PROMPT, MODE_HINT)?;

    let month = if mode.wants_month() {
        Some(console.choose::<Month>(MONTH_PROMPT, MONTH_HINT)?)
    } else {
        None
    };
    let day = if mode.wants_day() {
        Some(console.choose::<DayOfWeek>(DAY_PROMPT, DAY_HINT)?)
    } else {
        None
    };

    let selection = FilterSelection {
        city,
        month,
        day,
        mode,
    };
    log::debug!("filters collected: {selection:?}");
    Ok(selection)
}
