use chrono::{Datelike, Month, NaiveDateTime, Timelike};

use super::loader::LoadError;
use super::model::{HourBucket, TimeFields, Trip, TripRecord};

/// Timestamp layouts accepted for `Start Time`. `%.f` also matches an
/// absent fractional part.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a `Start Time` cell.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Month name, weekday and hour bucket for a start timestamp.
pub fn time_fields(start: NaiveDateTime) -> TimeFields {
    let month = Month::try_from(start.month() as u8).unwrap_or(Month::January);
    TimeFields {
        month,
        weekday: start.weekday(),
        hour: HourBucket::new(start.hour()),
    }
}

/// Attach parsed start times and derived fields to every record.
///
/// Any unparseable `Start Time` aborts the whole load: every report
/// downstream depends on the derived fields.
pub fn derive_trips(records: Vec<TripRecord>) -> Result<Vec<Trip>, LoadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(row, record)| {
            let start = parse_timestamp(&record.start_time).ok_or_else(|| LoadError::Timestamp {
                row,
                value: record.start_time.clone(),
            })?;
            Ok(Trip {
                time: time_fields(start),
                start,
                record,
            })
        })
        .collect()
}
