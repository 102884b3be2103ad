use std::fmt;

use super::counts::{mode_with_count, value_counts};
use crate::data::filter::FilteredView;
use crate::data::model::City;
use crate::ui::table::counts_table;

/// Bucket for trips with no recorded gender.
pub const UNKNOWN_GENDER: &str = "Unknown";

/// A birth year and the age it implies this calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYear {
    pub year: i32,
    pub age: i32,
}

impl BirthYear {
    fn new(year: i32, current_year: i32) -> Self {
        BirthYear {
            year,
            age: current_year - year,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: BirthYear,
    pub latest: BirthYear,
    pub most_common: BirthYear,
    /// Riders born in `most_common.year`.
    pub most_common_count: usize,
}

/// Gender and birth-year statistics; only for cities with those columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: Vec<(String, usize)>,
    /// `None` when no trip in the view has a birth year.
    pub birth_years: Option<BirthYearStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub demographics: Option<Demographics>,
}

/// User-type counts, plus the demographic block when `city` has the data.
pub fn user_stats(view: &FilteredView<'_>, city: City, current_year: i32) -> UserStats {
    let user_types = value_counts(view.trips().filter_map(|t| t.record.user_type.clone()));

    let demographics = city.supports_demographics().then(|| {
        let genders = value_counts(view.trips().map(|t| {
            t.record
                .gender
                .clone()
                .unwrap_or_else(|| UNKNOWN_GENDER.to_string())
        }));
        Demographics {
            genders,
            birth_years: birth_year_stats(view, current_year),
        }
    });

    UserStats {
        user_types,
        demographics,
    }
}

fn birth_year_stats(view: &FilteredView<'_>, current_year: i32) -> Option<BirthYearStats> {
    let years: Vec<i32> = view.trips().filter_map(|t| t.record.birth_year()).collect();

    let earliest = *years.iter().min()?;
    let latest = *years.iter().max()?;
    let (most_common, count) = mode_with_count(years.iter().copied())?;

    Some(BirthYearStats {
        earliest: BirthYear::new(earliest, current_year),
        latest: BirthYear::new(latest, current_year),
        most_common: BirthYear::new(most_common, current_year),
        most_common_count: count,
    })
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The summary count for each User Type is...")?;
        writeln!(f, "{}", counts_table("User Type", &self.user_types))?;

        let Some(demographics) = &self.demographics else {
            return Ok(());
        };

        writeln!(f, "\nThe summary count for gender of each user is...")?;
        writeln!(f, "{}", counts_table("Gender", &demographics.genders))?;

        if let Some(years) = &demographics.birth_years {
            writeln!(
                f,
                "\nThe oldest user on this day is {} years old and was born in {}.",
                years.earliest.age, years.earliest.year
            )?;
            writeln!(
                f,
                "\nThe youngest user on this day is {} years old and was born in {}.",
                years.latest.age, years.latest.year
            )?;
            writeln!(
                f,
                "\nThe most common age of users on this day is {} and born in {}.",
                years.most_common.age, years.most_common.year
            )?;
            writeln!(
                f,
                "\nThe number of {} year old users for this day is: {}",
                years.most_common.age, years.most_common_count
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::derive::derive_trips;
    use crate::data::model::{TripDataset, TripRecord};

    fn dataset(city: City, riders: &[(&str, Option<&str>, Option<f64>)]) -> TripDataset {
        let records = riders
            .iter()
            .map(|(user_type, gender, birth_year)| TripRecord {
                start_time: "2017-05-01 07:00:00".to_string(),
                end_time: None,
                trip_duration: 5.0,
                start_station: "A".to_string(),
                end_station: "B".to_string(),
                user_type: Some(user_type.to_string()),
                gender: gender.map(str::to_string),
                birth_year: *birth_year,
            })
            .collect();
        TripDataset::new(city, derive_trips(records).unwrap())
    }

    #[test]
    fn test_chicago_has_demographics() {
        let ds = dataset(
            City::Chicago,
            &[
                ("Subscriber", Some("Male"), Some(1990.0)),
                ("Customer", None, None),
                ("Subscriber", Some("Female"), Some(1985.0)),
                ("Subscriber", Some("Male"), Some(1990.0)),
                ("Customer", Some("Female"), Some(2000.0)),
            ],
        );
        let stats = user_stats(&FilteredView::all(&ds), City::Chicago, 2026);

        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 2)]
        );
        let demographics = stats.demographics.as_ref().unwrap();
        assert_eq!(
            demographics.genders,
            vec![
                ("Male".to_string(), 2),
                ("Female".to_string(), 2),
                ("Unknown".to_string(), 1)
            ]
        );
        let years = demographics.birth_years.unwrap();
        assert_eq!(years.earliest, BirthYear { year: 1985, age: 41 });
        assert_eq!(years.latest, BirthYear { year: 2000, age: 26 });
        assert_eq!(years.most_common, BirthYear { year: 1990, age: 36 });
        assert_eq!(years.most_common_count, 2);

        let text = stats.to_string();
        assert!(text.contains("The oldest user on this day is 41 years old and was born in 1985."));
        assert!(text.contains("The number of 36 year old users for this day is: 2"));
    }

    #[test]
    fn test_washington_skips_demographics() {
        let ds = dataset(City::Washington, &[("Subscriber", None, None), ("Customer", None, None)]);
        let stats = user_stats(&FilteredView::all(&ds), City::Washington, 2026);

        assert_eq!(stats.user_types.len(), 2);
        assert_eq!(stats.demographics, None);
        let text = stats.to_string();
        assert!(!text.contains("gender"));
        assert!(!text.contains("born in"));
    }

    #[test]
    fn test_no_birth_years() {
        let ds = dataset(City::NewYorkCity, &[("Subscriber", Some("Male"), None)]);
        let stats = user_stats(&FilteredView::all(&ds), City::NewYorkCity, 2026);

        let demographics = stats.demographics.unwrap();
        assert_eq!(demographics.genders, vec![("Male".to_string(), 1)]);
        assert_eq!(demographics.birth_years, None);
    }
}
