use std::fmt::Display;
use std::ops::Range;

use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::data::model::{weekday_name, TripDataset};

/// Section separator printed after every report.
pub const SEPARATOR: &str = "----------------------------------------";

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Frequency tables
// ---------------------------------------------------------------------------

/// Two-column `value | Count` table, in the order given.
pub fn counts_table<K: Display>(label: &str, counts: &[(K, usize)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![Cell::new(label), Cell::new("Count")]);
    for (value, count) in counts {
        table.add_row(vec![Cell::new(value), Cell::new(count)]);
    }
    table
}

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// A window of raw trips, including the derived `month` and `day_of_week`
/// columns. Demographic columns only appear for cities that have them.
pub fn rows_table(dataset: &TripDataset, range: Range<usize>) -> Table {
    let demographics = dataset.city.supports_demographics();

    let mut headers = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if demographics {
        headers.extend(["Gender", "Birth Year"]);
    }
    headers.extend(["month", "day_of_week"]);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers.into_iter().map(Cell::new).collect::<Vec<_>>());

    let end = range.end.min(dataset.len());
    let start = range.start.min(end);

    for (offset, trip) in dataset.trips[start..end].iter().enumerate() {
        let record = &trip.record;
        let mut row = vec![
            Cell::new(start + offset),
            Cell::new(trip.start.format(START_TIME_FORMAT)),
            Cell::new(record.end_time.as_deref().unwrap_or_default()),
            Cell::new(record.trip_duration),
            Cell::new(&record.start_station),
            Cell::new(&record.end_station),
            Cell::new(record.user_type.as_deref().unwrap_or_default()),
        ];
        if demographics {
            row.push(Cell::new(record.gender.as_deref().unwrap_or_default()));
            row.push(Cell::new(
                record.birth_year().map(|y| y.to_string()).unwrap_or_default(),
            ));
        }
        row.push(Cell::new(trip.time.month.name()));
        row.push(Cell::new(weekday_name(trip.time.weekday)));
        table.add_row(row);
    }
    table
}
