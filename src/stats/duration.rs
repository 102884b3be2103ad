use std::fmt;

use crate::data::filter::{FilterSelection, FilteredView};

const MINUTES_PER_DAY: f64 = 1440.0;
const MINUTES_PER_HOUR: f64 = 60.0;

// ---------------------------------------------------------------------------
// Gating – which aggregates the active filters allow
// ---------------------------------------------------------------------------

/// Duration aggregates enabled for a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationGate {
    pub total: bool,
    pub average: bool,
}

/// Decision table keyed by (month is "all", day is "all").
///
/// | month | day  | total | average |
/// |-------|------|-------|---------|
/// | all   | any  | no    | no      |
/// | set   | all  | yes   | no      |
/// | set   | set  | yes   | yes     |
pub fn duration_gate(selection: &FilterSelection) -> DurationGate {
    match (selection.month.is_none(), selection.day.is_none()) {
        (true, _) => DurationGate {
            total: false,
            average: false,
        },
        (false, true) => DurationGate {
            total: true,
            average: false,
        },
        (false, false) => DurationGate {
            total: true,
            average: true,
        },
    }
}

// ---------------------------------------------------------------------------
// Day / hour / minute breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl DurationBreakdown {
    /// Split a (non-negative) number of minutes, flooring at each step.
    pub fn from_minutes(total: f64) -> Self {
        let total = total.max(0.0);
        let days = (total / MINUTES_PER_DAY).floor();
        let rest = total - days * MINUTES_PER_DAY;
        let hours = (rest / MINUTES_PER_HOUR).floor();
        let minutes = (rest - hours * MINUTES_PER_HOUR).floor();
        DurationBreakdown {
            days: days as u64,
            hours: hours as u64,
            minutes: minutes as u64,
        }
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, and {} minutes",
            self.days, self.hours, self.minutes
        )
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    pub gate: DurationGate,
    /// Present whenever the gate allows a total.
    pub total: Option<DurationBreakdown>,
    /// Present when the gate allows an average and the view is non-empty.
    pub average: Option<DurationBreakdown>,
}

/// Total and mean trip duration, as far as the active filters permit.
pub fn duration_stats(view: &FilteredView<'_>, selection: &FilterSelection) -> DurationStats {
    let gate = duration_gate(selection);

    let total = gate
        .total
        .then(|| view.trips().map(|t| t.record.trip_duration).sum::<f64>());
    let average = if gate.average && !view.is_empty() {
        total.map(|sum| sum / view.len() as f64)
    } else {
        None
    };

    DurationStats {
        gate,
        total: total.map(DurationBreakdown::from_minutes),
        average: average.map(DurationBreakdown::from_minutes),
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(total) = self.total else {
            return writeln!(
                f,
                "To review trip duration statistics a specific month must be selected."
            );
        };
        writeln!(f, "The total travel time for bike travel for this day is...\n {total}")?;

        if !self.gate.average {
            return writeln!(
                f,
                "\nThe average trip duration statistics need to be performed \
                 on a specific month and day."
            );
        }
        match self.average {
            Some(average) => {
                writeln!(f, "\nThe average travel time for bike travel is...\n {average}")
            }
            None => writeln!(f, "\nNo trips match the selected month and day."),
        }
    }
}
