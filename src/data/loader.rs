use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

use super::derive::derive_trips;
use super::model::{title_case, City, TripDataset, TripRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(
        "{} is not a valid city. The city must be Chicago, Washington, or New York City.",
        title_case(.name)
    )]
    UnknownCity { name: String },

    #[error("File '{file}', for selected city: {city}, is not found in the current directory.")]
    MissingFile { city: City, file: &'static str },

    #[error("reading trip data")]
    Io(#[from] io::Error),

    #[error("malformed trip data")]
    Csv(#[from] csv::Error),

    #[error("row {row}: cannot parse Start Time '{value}'")]
    Timestamp { row: usize, value: String },
}

impl LoadError {
    /// Unknown cities and missing files are reported to the user and the
    /// session carries on; anything else means the data itself is broken.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LoadError::UnknownCity { .. } | LoadError::MissingFile { .. })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Map a (lower-cased) city name onto the registry.
pub fn resolve_city(name: &str) -> Result<City, LoadError> {
    City::from_key(name).ok_or_else(|| LoadError::UnknownCity {
        name: name.to_string(),
    })
}

/// Load the dataset for `city_name` from `data_dir`, with derived time
/// fields attached.
pub fn load_city(data_dir: &Path, city_name: &str) -> Result<TripDataset, LoadError> {
    let city = resolve_city(city_name)?;
    let path = data_dir.join(city.file_name());

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::MissingFile {
                city,
                file: city.file_name(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let records = read_records(file)?;
    let trips = derive_trips(records)?;
    log::info!("loaded {} trips for {city} from {}", trips.len(), path.display());

    Ok(TripDataset::new(city, trips))
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: header row with the bikeshare column names. The unnamed
/// leading index column and any unknown columns are ignored. Only header
/// names are trimmed; cell values are kept verbatim.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TripRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.deserialize::<TripRecord>() {
        records.push(result?);
    }
    Ok(records)
}
