use polars::prelude::DataFrame;
use serde::Serialize;

use crate::config::CleaningSettings;
use crate::core::domain::{AppStoreProfile, PlayStoreProfile};
use crate::core::error::ProfileResult;
use crate::parsing::csv_parser::{self, play_store_columns};
use crate::preprocessing::enricher::FeatureDeriver;
use crate::transformations::{cleaning, filtering};

/// Row count of the snapshot produced by one named stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageShape {
    pub stage: &'static str,
    pub rows: usize,
}

/// Result of cleaning one marketplace dataset
#[derive(Debug, Clone)]
pub struct CleanResult<T> {
    pub records: Vec<T>,
    pub stages: Vec<StageShape>,
}

impl<T> CleanResult<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            stages: Vec::new(),
        }
    }

    fn record_stage(&mut self, stage: &'static str, rows: usize) {
        log::info!("{:<18} {} rows", stage, rows);
        self.stages.push(StageShape { stage, rows });
    }
}

/// Ordered cleaning pipelines for both marketplaces
pub struct CleaningPipeline {
    settings: CleaningSettings,
}

impl CleaningPipeline {
    /// Create a new pipeline with default cleaning rules
    pub fn new() -> Self {
        Self {
            settings: CleaningSettings::default(),
        }
    }

    /// Create a pipeline with custom cleaning rules
    pub fn with_settings(settings: CleaningSettings) -> Self {
        Self { settings }
    }

    /// Clean the raw Google Play table.
    ///
    /// Stages: sanitize, typed conversion, dedup by review count, free filter,
    /// English filter, feature derivation.
    pub fn clean_play_store(&self, raw: &DataFrame) -> ProfileResult<CleanResult<PlayStoreProfile>> {
        let mut result = CleanResult::new();
        result.record_stage("raw", raw.height());

        let sanitized = cleaning::sanitize_rows(
            raw,
            play_store_columns::APP,
            &self.settings.corrupt_identities,
        )?;
        result.record_stage("sanitized", sanitized.height());

        let apps = csv_parser::dataframe_to_play_store_apps(&sanitized)?;

        let unique = cleaning::deduplicate_play_store(apps);
        result.record_stage("deduplicated", unique.len());

        let free = filtering::filter_free(unique);
        result.record_stage("free", free.len());

        let english = filtering::filter_english(free, self.settings.max_non_english_chars);
        result.record_stage("english", english.len());

        let profiles = FeatureDeriver::with_policy(self.settings.installs_policy)
            .derive_play_store(english)?;
        result.record_stage("derived", profiles.len());

        result.records = profiles;
        Ok(result)
    }

    /// Clean the raw App Store table (index column already dropped).
    ///
    /// Stages: typed conversion, English filter, free filter, dedup by
    /// version, feature derivation.
    pub fn clean_app_store(&self, raw: &DataFrame) -> ProfileResult<CleanResult<AppStoreProfile>> {
        let mut result = CleanResult::new();
        result.record_stage("raw", raw.height());

        let apps = csv_parser::dataframe_to_app_store_apps(raw)?;

        let english = filtering::filter_english(apps, self.settings.max_non_english_chars);
        result.record_stage("english", english.len());

        let free = filtering::filter_free(english);
        result.record_stage("free", free.len());

        let unique = cleaning::deduplicate_app_store(free);
        result.record_stage("deduplicated", unique.len());

        let profiles = FeatureDeriver::new().derive_app_store(unique);
        result.record_stage("derived", profiles.len());

        result.records = profiles;
        Ok(result)
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}
