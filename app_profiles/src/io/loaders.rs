use polars::prelude::*;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::domain::Marketplace;
use crate::core::error::{ProfileError, ProfileResult};
use crate::parsing::csv_parser;

/// Where a dataset is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interpret a configured location; `http://` and `https://` prefixes mean a URL.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

/// Distinct-value survey of one raw column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub non_null: usize,
    pub unique: usize,
}

/// Result of loading one raw dataset
#[derive(Debug)]
pub struct DatasetLoadResult {
    pub dataframe: DataFrame,
    pub marketplace: Marketplace,
    pub source: DataSource,
    /// SHA-256 of the source bytes, hex encoded
    pub checksum: String,
}

impl DatasetLoadResult {
    /// `(rows, columns)` of the raw table
    pub fn shape(&self) -> (usize, usize) {
        self.dataframe.shape()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.dataframe
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Count distinct non-missing values per column.
    pub fn column_summaries(&self) -> ProfileResult<Vec<ColumnSummary>> {
        self.dataframe
            .get_columns()
            .iter()
            .map(|column| -> ProfileResult<ColumnSummary> {
                let nulls = column.null_count();
                // n_unique counts null as a value
                let mut unique = column.n_unique()?;
                if nulls > 0 {
                    unique -= 1;
                }
                Ok(ColumnSummary {
                    name: column.name().to_string(),
                    non_null: column.len() - nulls,
                    unique,
                })
            })
            .collect()
    }
}

/// Unified interface for loading the two marketplace datasets
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load the Google Play dataset
    pub fn load_play_store(source: &DataSource) -> ProfileResult<DatasetLoadResult> {
        Self::load(source, Marketplace::PlayStore)
    }

    /// Load the App Store dataset; its leading row-index column is dropped
    pub fn load_app_store(source: &DataSource) -> ProfileResult<DatasetLoadResult> {
        Self::load(source, Marketplace::AppStore)
    }

    /// Read a source fully into memory and parse it for the given marketplace
    pub fn load(source: &DataSource, marketplace: Marketplace) -> ProfileResult<DatasetLoadResult> {
        log::info!("Loading {} dataset from {}", marketplace, source);
        let bytes = read_source(source)?;
        Self::load_from_bytes(bytes, source.clone(), marketplace)
    }

    /// Parse already-fetched bytes for the given marketplace
    pub fn load_from_bytes(
        bytes: Vec<u8>,
        source: DataSource,
        marketplace: Marketplace,
    ) -> ProfileResult<DatasetLoadResult> {
        let checksum = calculate_checksum(&bytes);

        let raw = csv_parser::parse_raw_csv(bytes)
            .map_err(|e| ProfileError::Load(format!("failed to parse {}: {}", source, e)))?;

        let dataframe = match marketplace {
            Marketplace::PlayStore => raw,
            Marketplace::AppStore => csv_parser::drop_index_column(&raw)?,
        };

        let (rows, columns) = dataframe.shape();
        log::info!(
            "Loaded {} dataset: {} rows x {} columns (sha256 {})",
            marketplace,
            rows,
            columns,
            checksum
        );

        Ok(DatasetLoadResult {
            dataframe,
            marketplace,
            source,
            checksum,
        })
    }
}

/// Calculate SHA-256 checksum of raw dataset bytes.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

fn read_source(source: &DataSource) -> ProfileResult<Vec<u8>> {
    match source {
        DataSource::File(path) => fs::read(path)
            .map_err(|e| ProfileError::Load(format!("failed to read {}: {}", path.display(), e))),
        DataSource::Url(url) => fetch_url(url),
    }
}

#[cfg(feature = "remote-sources")]
fn fetch_url(url: &str) -> ProfileResult<Vec<u8>> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

#[cfg(not(feature = "remote-sources"))]
fn fetch_url(url: &str) -> ProfileResult<Vec<u8>> {
    Err(ProfileError::Load(format!(
        "cannot fetch {}: built without the `remote-sources` feature",
        url
    )))
}
