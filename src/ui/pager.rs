use std::io::{self, BufRead, Write};
use std::ops::Range;

use super::prompt::{Answer, Prompter};
use super::table::rows_table;
use crate::data::model::TripDataset;

/// Rows revealed per accepted "yes".
pub const PAGE_SIZE: usize = 5;

const FIRST_PAGE_PROMPT: &str =
    "\nWould you like to see the first 5 rows of raw data? Enter yes or no.\n";
const NEXT_PAGE_PROMPT: &str =
    "\nWould you like to see the next 5 rows of raw data? Enter yes or no.\n";

/// Show the unfiltered dataset five rows at a time while the user keeps
/// answering "yes". Returns the windows that were shown.
///
/// The first question is repeated until it gets a yes or no; after a page
/// has been shown any answer other than "yes" stops paging. Paging also
/// stops once the next window would start at or beyond the last row.
pub fn page_raw_data<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    dataset: &TripDataset,
) -> io::Result<Vec<Range<usize>>> {
    prompter.say(format!("\nReviewing raw bikeshare data for {}.", dataset.city))?;

    let mut answer = loop {
        match prompter.ask_yes_no(FIRST_PAGE_PROMPT)? {
            Answer::Other(raw) => {
                prompter.say(format!("\n{raw} is invalid input. Expected response is yes or no."))?;
            }
            answer => break answer,
        }
    };

    let rows = dataset.len();
    let mut start = 0;
    let mut shown = Vec::new();

    while answer == Answer::Yes && start + 1 < rows {
        let window = start..(start + PAGE_SIZE).min(rows);
        prompter.say(rows_table(dataset, window.clone()))?;
        shown.push(window);
        start += PAGE_SIZE;
        answer = prompter.ask_yes_no(NEXT_PAGE_PROMPT)?;
    }

    log::debug!("raw data paging stopped after {} page(s)", shown.len());
    Ok(shown)
}
