use std::fmt;

use chrono::{Month, NaiveDateTime, Weekday};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// City – the fixed registry of supported datasets
// ---------------------------------------------------------------------------

/// One of the three cities with bikeshare data on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Registry order, as presented to the user.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Look up a city by its lower-case registry key (`"new york city"`).
    pub fn from_key(key: &str) -> Option<City> {
        City::ALL.into_iter().find(|city| city.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Source file for this city, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Whether the source data carries the `Gender` and `Birth Year` columns.
    pub fn supports_demographics(self) -> bool {
        match self {
            City::Chicago | City::NewYorkCity => true,
            City::Washington => false,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Capitalise the first letter of every whitespace-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// TripRecord – one CSV row as stored on disk
// ---------------------------------------------------------------------------

/// A single trip exactly as read from the city CSV.
///
/// `Gender` and `Birth Year` only exist for cities where
/// [`City::supports_demographics`] holds; empty cells become `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    /// Minutes.
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    /// Stored as a float in the source files (`1989.0`).
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

impl TripRecord {
    /// Birth year truncated to a whole year.
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_year
            .filter(|year| year.is_finite())
            .map(|year| year.trunc() as i32)
    }
}

// ---------------------------------------------------------------------------
// Derived time fields
// ---------------------------------------------------------------------------

/// Hour of day (0–23), displayed on a 12-hour clock as `09:00 AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourBucket(u32);

impl HourBucket {
    pub fn new(hour: u32) -> Self {
        HourBucket(hour % 24)
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.0 < 12 { "AM" } else { "PM" };
        let clock = match self.0 % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{clock:02}:00 {suffix}")
    }
}

/// Calendar fields computed from a trip's start timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    pub month: Month,
    pub weekday: Weekday,
    pub hour: HourBucket,
}

/// Full English weekday name (`Monday`).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// Trip / TripDataset – the loaded, time-augmented data
// ---------------------------------------------------------------------------

/// A trip record together with its parsed start time and derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub record: TripRecord,
    pub start: NaiveDateTime,
    pub time: TimeFields,
}

/// All trips for one city, in file order.
#[derive(Debug, Clone)]
pub struct TripDataset {
    pub city: City,
    pub trips: Vec<Trip>,
}

impl TripDataset {
    pub fn new(city: City, trips: Vec<Trip>) -> Self {
        TripDataset { city, trips }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_registry_lookup() {
        assert_eq!(City::from_key("chicago"), Some(City::Chicago));
        assert_eq!(City::from_key("new york city"), Some(City::NewYorkCity));
        assert_eq!(City::from_key("boston"), None);
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
    }

    #[test]
    fn test_demographics_capability() {
        assert!(City::Chicago.supports_demographics());
        assert!(City::NewYorkCity.supports_demographics());
        assert!(!City::Washington.supports_demographics());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("new york city"), "New York City");
        assert_eq!(title_case("bOSTON"), "Boston");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_hour_bucket_display() {
        assert_eq!(HourBucket::new(0).to_string(), "12:00 AM");
        assert_eq!(HourBucket::new(9).to_string(), "09:00 AM");
        assert_eq!(HourBucket::new(12).to_string(), "12:00 PM");
        assert_eq!(HourBucket::new(17).to_string(), "05:00 PM");
    }

    #[test]
    fn test_birth_year_truncates() {
        let record = TripRecord {
            start_time: "2017-01-01 00:00:00".to_string(),
            end_time: None,
            trip_duration: 1.0,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: None,
            gender: None,
            birth_year: Some(1989.0),
        };
        assert_eq!(record.birth_year(), Some(1989));
    }
}
