/// Descriptive statistics over a filtered view of trips.
///
/// Each reporter returns a plain struct whose `Display` impl renders the
/// user-facing text, so the numbers can be checked without any terminal I/O.

pub mod counts;
pub mod duration;
pub mod station;
pub mod time;
pub mod user;
