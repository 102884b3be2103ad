use std::fmt::Display;
use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::SessionConfig;
use crate::data::filter::resolve_filters;
use crate::state::Session;
use crate::stats::duration::{duration_gate, duration_stats};
use crate::stats::station::station_stats;
use crate::stats::time::time_stats;
use crate::stats::user::user_stats;
use crate::ui::pager::page_raw_data;
use crate::ui::prompt::{is_end_of_input, Answer, Prompter};
use crate::ui::table::SEPARATOR;

const CITY_PROMPT: &str = "Enter the city you are interested in viewing bike share data for. \
You can review data for Chicago, Washington, or New York City: ";
const MONTH_PROMPT: &str = "Enter which month of data you would like to analyze. \
The options are: All or any month from January through June: ";
const DAY_PROMPT: &str = "Enter which day of the week to perform the analysis on. \
The options are: All or a specific day from Monday through Sunday: ";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

// ---------------------------------------------------------------------------
// Interactive explorer
// ---------------------------------------------------------------------------

pub struct BikeshareApp<R, W> {
    prompter: Prompter<R, W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> BikeshareApp<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            config,
        }
    }

    /// Run sessions until the user declines to restart or input runs out.
    pub fn run(&mut self) -> Result<()> {
        match self.run_loop() {
            Err(e) if is_end_of_input(&e) => {
                log::debug!("input closed, exiting");
                Ok(())
            }
            other => other,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            self.run_session()?;

            match self.prompter.ask_yes_no(RESTART_PROMPT)? {
                Answer::Yes => self.prompter.say("Restarting..........")?,
                Answer::No => return Ok(()),
                // Unlike the raw-data prompt, a bad answer here ends the
                // program instead of asking again.
                Answer::Other(raw) => {
                    self.prompter
                        .say(format!("\n{raw} is invalid input. Next time enter yes or no.\n"))?;
                    return Ok(());
                }
            }
        }
    }

    /// One pass: filter dialog, load, the four reports, raw-data paging.
    fn run_session(&mut self) -> Result<()> {
        self.prompter.say("Hello! Let's explore some US bikeshare data!")?;
        let city = self.prompter.ask(CITY_PROMPT)?;
        let month = self.prompter.ask(MONTH_PROMPT)?;
        let day = self.prompter.ask(DAY_PROMPT)?;

        let filters = resolve_filters(&city, &month, &day);
        for warning in &filters.warnings {
            self.prompter.say(format!("\n{warning}\n"))?;
        }
        self.prompter.say(SEPARATOR)?;

        let session = match Session::load(&self.config, &filters) {
            Ok(session) => session,
            Err(e) if e.is_recoverable() => {
                log::warn!("{e}");
                self.prompter.say(&e)?;
                return Ok(());
            }
            Err(e) => return Err(e).context("loading trip data"),
        };

        self.report(&session)?;
        page_raw_data(&mut self.prompter, &session.dataset)?;
        Ok(())
    }

    fn report(&mut self, session: &Session) -> Result<()> {
        let city = session.city();
        let selection = &session.selection;
        let view = session.view();
        let (month, day) = (selection.month_label(), selection.day_label());

        self.section(
            format!("\nCalculating The Most Frequent Times of Travel in {city}...\n"),
            || time_stats(&session.dataset, &view, selection),
        )?;

        self.section(
            format!(
                "\nCalculating The Most Popular Stations and Trip in {city} \
                 in the month of: {month} on day(s): {day}...\n"
            ),
            || station_stats(&view),
        )?;

        if duration_gate(selection).total {
            self.section(
                format!(
                    "\nCalculating Trip Duration in {city} \
                     in the month of: {month} on day(s): {day}...\n"
                ),
                || duration_stats(&view, selection),
            )?;
        } else {
            // Nothing is computed without a month filter, only the notice.
            self.prompter
                .say(format!("\n{}", duration_stats(&view, selection)))?;
            self.prompter.say(SEPARATOR)?;
        }

        let current_year = self.config.current_year;
        self.section(
            format!(
                "\nCalculating User Stats in {city} in the month of: {month} on day: {day}...\n"
            ),
            || user_stats(&view, city, current_year),
        )?;
        Ok(())
    }

    /// Print a heading, the computed report, its timing and a separator.
    fn section<T: Display>(&mut self, heading: String, compute: impl FnOnce() -> T) -> Result<()> {
        self.prompter.say(heading)?;
        let started = Instant::now();
        let report = compute();
        let elapsed = started.elapsed().as_secs_f64();
        log::debug!("report computed in {elapsed:.6}s");

        self.prompter.say(report)?;
        self.prompter.say(format!("This took {elapsed} seconds."))?;
        self.prompter.say(SEPARATOR)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 08:00:00,2017-01-02 08:10:00,100,Clark St,Lake St,Subscriber,Male,1980.0
2,2017-01-02 08:30:00,2017-01-02 08:40:00,50,Clark St,Lake St,Subscriber,Female,1990.0
3,2017-01-03 17:00:00,2017-01-03 17:20:00,20,Lake St,Clark St,Customer,,
4,2017-02-06 09:00:00,2017-02-06 09:10:00,10,State St,Clark St,Subscriber,Male,1990.0
";

    const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-03-01 07:00:00,2017-03-01 07:10:00,10,Union Station,Capitol,Subscriber
2,2017-03-02 07:00:00,2017-03-02 07:10:00,10,Union Station,Capitol,Customer
";

    fn run(input: &str) -> (Result<()>, String) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("chicago.csv"), CHICAGO_CSV).unwrap();
        std::fs::write(dir.path().join("washington.csv"), WASHINGTON_CSV).unwrap();

        let mut app = BikeshareApp::new(
            input.as_bytes(),
            Vec::new(),
            SessionConfig::new(dir.path(), 2026),
        );
        let result = app.run();
        (result, String::from_utf8(app.into_output()).unwrap())
    }

    #[test]
    fn test_full_session_with_month_and_day() {
        let (result, output) = run("chicago\nJanuary\nMonday\nyes\nno\nno\n");
        result.unwrap();

        assert!(output.contains("Calculating The Most Frequent Times of Travel in Chicago..."));
        assert!(output.contains("The most common start station for bike travel is...\n Clark St"));
        assert!(output.contains("Clark St to Lake St"));
        assert!(output.contains(
            "The total travel time for bike travel for this day is...\n 0 days, 2 hours, and 30 minutes"
        ));
        assert!(output.contains(
            "The average travel time for bike travel is...\n 0 days, 1 hours, and 15 minutes"
        ));
        assert!(output.contains(
            "The oldest user on this day is 46 years old and was born in 1980."
        ));
        assert!(output.contains("Reviewing raw bikeshare data for Chicago."));
        assert!(output.contains("State St"));
        assert!(output.contains("This took"));
        assert!(!output.contains("Restarting"));
    }

    #[test]
    fn test_month_all_skips_durations() {
        let (result, output) = run("chicago\nall\nall\nno\nno\n");
        result.unwrap();
        assert!(output.contains(
            "To review trip duration statistics a specific month must be selected."
        ));
        assert!(!output.contains("Calculating Trip Duration"));
    }

    #[test]
    fn test_duration_section_timing() {
        let (result, output) = run("chicago\nall\nall\nno\nno\n");
        result.unwrap();
        let notice = output
            .split("To review trip duration statistics")
            .nth(1)
            .unwrap();
        let notice = notice.split(SEPARATOR).next().unwrap();
        assert!(!notice.contains("This took"));

        let (result, output) = run("chicago\njanuary\nall\nno\nno\n");
        result.unwrap();
        let section = output.split("Calculating Trip Duration").nth(1).unwrap();
        let section = section.split(SEPARATOR).next().unwrap();
        let total = section.find("The total travel time").unwrap();
        let timing = section.find("This took").unwrap();
        assert!(total < timing);
    }

    #[test]
    fn test_invalid_filters_warn_and_continue() {
        let (result, output) = run("chicago\njuly\nfunday\nno\nno\n");
        result.unwrap();
        assert!(output.contains("Incorrect value entered for the month (July)"));
        assert!(output.contains("Incorrect value entered for the day (Funday)"));
        assert!(output.contains("in the month of: All on day(s): All"));
    }

    #[test]
    fn test_washington_has_no_demographics() {
        let (result, output) = run("washington\nmarch\nall\nno\nno\n");
        result.unwrap();
        assert!(output.contains("The summary count for each User Type is..."));
        assert!(!output.contains("gender"));
        assert!(output.contains("need to be performed on a specific month and day"));
    }

    #[test]
    fn test_unknown_city_goes_to_restart() {
        let (result, output) = run("boston\nall\nall\nyes\nchicago\nall\nall\nno\nno\n");
        result.unwrap();
        assert!(output.contains(
            "Boston is not a valid city. The city must be Chicago, Washington, or New York City."
        ));
        assert!(output.contains("Restarting.........."));
        assert!(output.contains("Calculating User Stats in Chicago"));
    }

    #[test]
    fn test_missing_file_goes_to_restart() {
        let (result, output) = run("new york city\nall\nall\nno\n");
        result.unwrap();
        assert!(output.contains(
            "File 'new_york_city.csv', for selected city: New York City, is not found"
        ));
        assert_eq!(output.matches("Would you like to restart?").count(), 1);
    }

    #[test]
    fn test_invalid_restart_answer_exits() {
        let (result, output) = run("boston\nall\nall\nperhaps\nchicago\n");
        result.unwrap();
        assert!(output.contains("perhaps is invalid input. Next time enter yes or no."));
        assert_eq!(output.matches("Hello!").count(), 1);
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (result, _) = run("chicago\n");
        result.unwrap();
    }

    #[test]
    fn test_bad_timestamp_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("chicago.csv"),
            ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
             1,soon,,1,A,B,Customer\n",
        )
        .unwrap();

        let mut app = BikeshareApp::new(
            "chicago\nall\nall\n".as_bytes(),
            Vec::new(),
            SessionConfig::new(dir.path(), 2026),
        );
        let err = app.run().unwrap_err();
        assert!(format!("{err:#}").contains("cannot parse Start Time 'soon'"));
    }
}
