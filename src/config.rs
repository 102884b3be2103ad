use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;

/// Inputs a session needs from its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory holding the city CSV files.
    pub data_dir: PathBuf,
    /// Calendar year used to turn birth years into ages.
    pub current_year: i32,
}

impl SessionConfig {
    pub fn new(data_dir: impl Into<PathBuf>, current_year: i32) -> Self {
        SessionConfig {
            data_dir: data_dir.into(),
            current_year,
        }
    }

    /// Data files in the working directory, ages relative to today.
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::current_dir().context("resolving current directory")?;
        Ok(SessionConfig::new(data_dir, chrono::Local::now().year()))
    }
}
