//! Interactive explorer for US bikeshare trip data.
//!
//! Loads one city's trips, applies optional month/day filters and reports
//! the busiest times, popular stations, trip durations and rider
//! demographics, then pages through the raw rows on request.

pub mod app;
pub mod config;
pub mod data;
pub mod state;
pub mod stats;
pub mod ui;
