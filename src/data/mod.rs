/// Data layer: core types, loading, time derivation and filtering.
///
/// Architecture:
/// ```text
///  city name ──► registry ──► <city>.csv
///                                │
///                                ▼
///                          ┌──────────┐
///                          │  loader  │  parse CSV → Vec<TripRecord>
///                          └──────────┘
///                                │
///                                ▼
///                          ┌──────────┐
///                          │  derive  │  Start Time → month / weekday / hour
///                          └──────────┘
///                                │
///                                ▼
///                          ┌──────────┐
///                          │  filter  │  month ∧ day → FilteredView
///                          └──────────┘
/// ```

pub mod derive;
pub mod filter;
pub mod loader;
pub mod model;
