use std::fmt;

use super::counts::mode;
use crate::data::filter::FilteredView;

/// Joins start and end station into a single trip key.
pub const ROUTE_SEPARATOR: &str = " to ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// `"<start> to <end>"`.
    pub route: Option<String>,
}

pub fn route_key(start: &str, end: &str) -> String {
    format!("{start}{ROUTE_SEPARATOR}{end}")
}

/// Most popular start station, end station and start/end combination.
pub fn station_stats(view: &FilteredView<'_>) -> StationStats {
    StationStats {
        start_station: mode(view.trips().map(|t| t.record.start_station.as_str()))
            .map(str::to_string),
        end_station: mode(view.trips().map(|t| t.record.end_station.as_str())).map(str::to_string),
        route: mode(
            view.trips()
                .map(|t| route_key(&t.record.start_station, &t.record.end_station)),
        ),
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(start), Some(end), Some(route)) =
            (&self.start_station, &self.end_station, &self.route)
        else {
            return writeln!(f, "No trips match the selected month and day.");
        };
        writeln!(f, "The most common start station for bike travel is...\n {start}")?;
        writeln!(f, "\nThe most common end station for bike travel is...\n {end}")?;
        writeln!(
            f,
            "\nThe most common combination of start and end stations \
             in a trip for bike travel is...\n {route}"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::derive::derive_trips;
    use crate::data::model::{City, TripDataset, TripRecord};

    fn dataset(trips: &[(&str, &str)]) -> TripDataset {
        let records = trips
            .iter()
            .map(|(start, end)| TripRecord {
                start_time: "2017-04-01 12:00:00".to_string(),
                end_time: None,
                trip_duration: 5.0,
                start_station: start.to_string(),
                end_station: end.to_string(),
                user_type: None,
                gender: None,
                birth_year: None,
            })
            .collect();
        TripDataset::new(City::NewYorkCity, derive_trips(records).unwrap())
    }

    #[test]
    fn test_route_key() {
        assert_eq!(route_key("5th Ave", "Main St"), "5th Ave to Main St");
    }

    #[test]
    fn test_station_stats() {
        let ds = dataset(&[
            ("Canal St", "Pier 40"),
            ("Broadway", "Pier 40"),
            ("Broadway", "Canal St"),
            ("Canal St", "Pier 40"),
            ("Broadway", "Union Sq"),
        ]);
        let stats = station_stats(&FilteredView::all(&ds));
        assert_eq!(stats.start_station.as_deref(), Some("Broadway"));
        assert_eq!(stats.end_station.as_deref(), Some("Pier 40"));
        assert_eq!(stats.route.as_deref(), Some("Canal St to Pier 40"));
    }

    #[test]
    fn test_station_stats_ties_resolve_to_first_seen() {
        let ds = dataset(&[("A", "B"), ("B", "A"), ("A", "B"), ("B", "A")]);
        let stats = station_stats(&FilteredView::all(&ds));
        assert_eq!(stats.start_station.as_deref(), Some("A"));
        assert_eq!(stats.end_station.as_deref(), Some("B"));
        assert_eq!(stats.route.as_deref(), Some("A to B"));
    }

    #[test]
    fn test_station_stats_empty_view() {
        let ds = dataset(&[]);
        let stats = station_stats(&FilteredView::all(&ds));
        assert_eq!(stats.start_station, None);
        assert!(stats.to_string().contains("No trips"));
    }
}
