//! The fixed analysis sequence over both marketplaces.

use crate::config::AnalysisConfig;
use crate::core::domain::Marketplace;
use crate::core::error::ProfileResult;
use crate::io::loaders::DatasetLoadResult;
use crate::parsing::csv_parser::play_store_columns;
use crate::preprocessing::pipeline::CleaningPipeline;
use crate::services::distributions::{
    app_store_genre_distribution, average_installs_in_millions, average_rating_count,
    play_store_distribution, PlayStoreColumn,
};
use crate::services::insights::{
    app_names_in, genre_category_relationship, genre_distribution_within,
    naive_duplicate_survivors, recommend,
};
use crate::services::report::{AnalysisReport, DatasetOverview};
use crate::transformations::cleaning;

fn overview(dataset: &DatasetLoadResult) -> ProfileResult<DatasetOverview> {
    let (rows, columns) = dataset.shape();
    Ok(DatasetOverview {
        marketplace: dataset.marketplace,
        source: dataset.source.to_string(),
        checksum: dataset.checksum.clone(),
        rows,
        columns,
        column_summaries: dataset.column_summaries()?,
    })
}

/// Clean both raw datasets and compute every report table.
pub fn analyze(
    play_store: &DatasetLoadResult,
    app_store: &DatasetLoadResult,
    config: &AnalysisConfig,
) -> ProfileResult<AnalysisReport> {
    let pipeline = CleaningPipeline::with_settings(config.cleaning.clone());

    let play = pipeline.clean_play_store(&play_store.dataframe)?;
    let app = pipeline.clean_app_store(&app_store.dataframe)?;

    let sanitized = cleaning::sanitize_rows(
        &play_store.dataframe,
        play_store_columns::APP,
        &config.cleaning.corrupt_identities,
    )?;
    let naive_dedup_rows = naive_duplicate_survivors(&sanitized, play_store_columns::REVIEWS)?;
    log::info!(
        "Naive full-row dedup keeps {} rows, review tie-break keeps {}",
        naive_dedup_rows,
        play.stages
            .iter()
            .find(|s| s.stage == "deduplicated")
            .map(|s| s.rows)
            .unwrap_or_default()
    );

    let play_store_genres = play_store_distribution(&play.records, PlayStoreColumn::Genres);
    let play_store_categories = play_store_distribution(&play.records, PlayStoreColumn::Category);
    let app_store_genres = app_store_genre_distribution(&app.records);

    let focus = &config.report;
    let focus_genres = genre_distribution_within(&play.records, &focus.focus_category);
    let focus_apps = app_names_in(&play.records, &focus.focus_category, &focus.focus_genre);

    let installs_by_genre = average_installs_in_millions(&play.records, PlayStoreColumn::Genres);
    let installs_by_category =
        average_installs_in_millions(&play.records, PlayStoreColumn::Category);
    let ratings_by_genre = average_rating_count(&app.records);

    let recommendations = vec![
        recommend(
            Marketplace::PlayStore,
            &play_store_categories,
            &installs_by_category,
        ),
        recommend(Marketplace::AppStore, &app_store_genres, &ratings_by_genre),
    ];

    Ok(AnalysisReport {
        play_store_overview: overview(play_store)?,
        app_store_overview: overview(app_store)?,
        play_store_stages: play.stages,
        app_store_stages: app.stages,
        naive_dedup_rows,
        genre_categories: genre_category_relationship(&play.records),
        play_store_genres,
        play_store_categories,
        app_store_genres,
        focus_category: focus.focus_category.clone(),
        focus_genre: focus.focus_genre.clone(),
        focus_genres,
        focus_apps,
        installs_by_genre,
        installs_by_category,
        ratings_by_genre,
        recommendations,
    })
}
