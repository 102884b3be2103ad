use std::fmt;

use chrono::{Month, Weekday};

use super::model::{title_case, weekday_name, Trip, TripDataset};

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Months covered by the bikeshare data.
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

const ALL: &str = "all";

// ---------------------------------------------------------------------------
// FilterSelection – the resolved month/day pair
// ---------------------------------------------------------------------------

/// Active month and day filters. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSelection {
    pub fn new(month: Option<Month>, day: Option<Weekday>) -> Self {
        FilterSelection { month, day }
    }

    /// `January` or `All`.
    pub fn month_label(&self) -> &'static str {
        self.month.map_or("All", |m| m.name())
    }

    /// `Monday` or `All`.
    pub fn day_label(&self) -> &'static str {
        self.day.map_or("All", weekday_name)
    }

    /// Whether a trip passes both filters.
    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.is_none_or(|m| trip.time.month == m)
            && self.day.is_none_or(|d| trip.time.weekday == d)
    }
}

// ---------------------------------------------------------------------------
// Filter Resolver
// ---------------------------------------------------------------------------

/// A month or day entry outside its vocabulary, downgraded to "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterWarning {
    Month(String),
    Day(String),
}

impl fmt::Display for FilterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterWarning::Month(raw) => write!(
                f,
                "***Incorrect value entered for the month ({}). \
                 No month filter applied to subsequent analysis.***",
                title_case(raw)
            ),
            FilterWarning::Day(raw) => write!(
                f,
                "***Incorrect value entered for the day ({}). \
                 No day of the week filter applied to subsequent analysis.***",
                title_case(raw)
            ),
        }
    }
}

/// Normalised user input: city lower-cased (validated later by the loader),
/// month/day always members of their vocabularies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilters {
    pub city: String,
    pub selection: FilterSelection,
    pub warnings: Vec<FilterWarning>,
}

/// `Ok(None)` for "all", `Ok(Some(..))` for a known month name.
pub fn lookup_month(raw: &str) -> Result<Option<Month>, FilterWarning> {
    let key = raw.trim().to_lowercase();
    if key == ALL {
        return Ok(None);
    }
    MONTHS
        .into_iter()
        .find(|m| m.name().to_lowercase() == key)
        .map(Some)
        .ok_or(FilterWarning::Month(key))
}

/// `Ok(None)` for "all", `Ok(Some(..))` for a known weekday name.
pub fn lookup_day(raw: &str) -> Result<Option<Weekday>, FilterWarning> {
    let key = raw.trim().to_lowercase();
    if key == ALL {
        return Ok(None);
    }
    WEEKDAYS
        .into_iter()
        .find(|d| weekday_name(*d).to_lowercase() == key)
        .map(Some)
        .ok_or(FilterWarning::Day(key))
}

/// Normalise raw city/month/day answers. Invalid month or day values never
/// fail: they fall back to "all" and leave a warning for the user.
pub fn resolve_filters(city: &str, month: &str, day: &str) -> ResolvedFilters {
    let mut warnings = Vec::new();

    let month = lookup_month(month).unwrap_or_else(|warning| {
        log::warn!("month filter fell back to all: {warning:?}");
        warnings.push(warning);
        None
    });
    let day = lookup_day(day).unwrap_or_else(|warning| {
        log::warn!("day filter fell back to all: {warning:?}");
        warnings.push(warning);
        None
    });

    ResolvedFilters {
        city: city.trim().to_lowercase(),
        selection: FilterSelection::new(month, day),
        warnings,
    }
}

// ---------------------------------------------------------------------------
// Filter Applier
// ---------------------------------------------------------------------------

/// Return indices of trips passing the month and day filters, in file order.
pub fn filtered_indices(dataset: &TripDataset, selection: &FilterSelection) -> Vec<usize> {
    let indices: Vec<usize> = dataset
        .trips
        .iter()
        .enumerate()
        .filter(|(_, trip)| selection.matches(trip))
        .map(|(i, _)| i)
        .collect();
    log::debug!(
        "{} of {} trips match month={} day={}",
        indices.len(),
        dataset.len(),
        selection.month_label(),
        selection.day_label()
    );
    indices
}

/// A read-only subset of a dataset's trips.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a TripDataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Apply `selection` to the whole dataset.
    pub fn new(dataset: &'a TripDataset, selection: &FilterSelection) -> Self {
        FilteredView {
            dataset,
            indices: filtered_indices(dataset, selection),
        }
    }

    /// Every trip in the dataset.
    pub fn all(dataset: &'a TripDataset) -> Self {
        FilteredView {
            dataset,
            indices: (0..dataset.len()).collect(),
        }
    }

    pub fn from_indices(dataset: &'a TripDataset, indices: Vec<usize>) -> Self {
        FilteredView { dataset, indices }
    }

    #[cfg(test)]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn trips(&self) -> impl Iterator<Item = &'a Trip> + '_ {
        self.indices.iter().map(move |&i| &self.dataset.trips[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
