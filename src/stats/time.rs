use std::fmt;

use chrono::{Month, Weekday};

use super::counts::{distinct_count, mode, value_counts};
use crate::data::filter::{FilterSelection, FilteredView};
use crate::data::model::{weekday_name, HourBucket, TripDataset};
use crate::ui::table::counts_table;

/// Where a "most common" value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Busiest<T> {
    /// Computed from the unfiltered dataset because the filtered view
    /// still spans several values.
    Computed(T),
    /// The filtered view is already narrowed; this is the active filter
    /// value (`None` = "all").
    FromFilter(Option<T>),
}

impl<T: Copy> Busiest<T> {
    pub fn value(&self) -> Option<T> {
        match *self {
            Busiest::Computed(v) => Some(v),
            Busiest::FromFilter(v) => v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// Trips per month over the unfiltered dataset.
    pub trips_per_month: Vec<(Month, usize)>,
    pub month: Busiest<Month>,
    pub day: Busiest<Weekday>,
    /// Most common start hour within the filtered view.
    pub hour: Option<HourBucket>,
}

impl TimeStats {
    fn month_label(&self) -> &'static str {
        self.month.value().map_or("All", |m| m.name())
    }

    fn day_label(&self) -> &'static str {
        self.day.value().map_or("All", weekday_name)
    }
}

/// Busiest month, weekday and hour.
///
/// Month and weekday are only computed (over the whole dataset) while the
/// filtered view still contains more than one distinct value; otherwise the
/// active filter is reported as-is. The hour always comes from the view.
pub fn time_stats(
    dataset: &TripDataset,
    view: &FilteredView<'_>,
    selection: &FilterSelection,
) -> TimeStats {
    let everything = FilteredView::all(dataset);

    let trips_per_month = value_counts(everything.trips().map(|t| t.time.month));

    let month = if distinct_count(view.trips().map(|t| t.time.month)) > 1 {
        mode(everything.trips().map(|t| t.time.month))
            .map_or(Busiest::FromFilter(selection.month), Busiest::Computed)
    } else {
        Busiest::FromFilter(selection.month)
    };

    let day = if distinct_count(view.trips().map(|t| t.time.weekday)) > 1 {
        mode(everything.trips().map(|t| t.time.weekday))
            .map_or(Busiest::FromFilter(selection.day), Busiest::Computed)
    } else {
        Busiest::FromFilter(selection.day)
    };

    let hour = mode(view.trips().map(|t| t.time.hour));

    TimeStats {
        trips_per_month,
        month,
        day,
        hour,
    }
}

struct MonthName(Month);

impl fmt::Display for MonthName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count of trips by month:")?;
        let by_month: Vec<(MonthName, usize)> = self
            .trips_per_month
            .iter()
            .map(|&(m, count)| (MonthName(m), count))
            .collect();
        writeln!(f, "{}", counts_table("Month", &by_month))?;

        if let Busiest::Computed(month) = self.month {
            writeln!(f, "\nThe most common month for bike travel is...\n {}", month.name())?;
        }
        if let Busiest::Computed(day) = self.day {
            writeln!(
                f,
                "\nThe most common day of the week in {} for bike travel is...\n {}",
                self.month_label(),
                weekday_name(day)
            )?;
        }
        match self.hour {
            Some(hour) => writeln!(
                f,
                "\nThe most common hour of the day on a {} in {} for bike travel is...\n {hour}",
                self.day_label(),
                self.month_label()
            ),
            None => writeln!(f, "\nNo trips match the selected month and day."),
        }
    }
}
