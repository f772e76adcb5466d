//! Printable summaries of a full analysis run.
//!
//! The report is the only output of the system: shape diagnostics, cleaning
//! stage row counts, distribution tables and mean-metric tables. It renders
//! as plain-text tables through `Display`, or as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::domain::Marketplace;
use crate::io::loaders::ColumnSummary;
use crate::preprocessing::pipeline::StageShape;
use crate::services::distributions::{Frequency, GroupMean};
use crate::services::insights::{GenreCategoryRelationship, Recommendation};

/// How the report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Shape diagnostics of one raw dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetOverview {
    pub marketplace: Marketplace,
    pub source: String,
    pub checksum: String,
    pub rows: usize,
    pub columns: usize,
    pub column_summaries: Vec<ColumnSummary>,
}

/// Everything one analysis run produces
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub play_store_overview: DatasetOverview,
    pub app_store_overview: DatasetOverview,
    pub play_store_stages: Vec<StageShape>,
    pub app_store_stages: Vec<StageShape>,
    /// Rows left by naive full-row deduplication that ignores review counts
    pub naive_dedup_rows: usize,
    pub play_store_genres: Vec<Frequency>,
    pub play_store_categories: Vec<Frequency>,
    pub app_store_genres: Vec<Frequency>,
    pub focus_category: String,
    pub focus_genre: String,
    pub focus_genres: Vec<Frequency>,
    pub focus_apps: Vec<String>,
    pub genre_categories: GenreCategoryRelationship,
    pub installs_by_genre: Vec<GroupMean>,
    pub installs_by_category: Vec<GroupMean>,
    pub ratings_by_genre: Vec<GroupMean>,
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Number formatting of a mean-metric column
#[derive(Clone, Copy)]
enum MeanStyle {
    Decimal,
    /// Truncated towards zero
    Integer,
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "=".repeat(title.chars().count()))
}

fn write_overview(f: &mut fmt::Formatter<'_>, overview: &DatasetOverview) -> fmt::Result {
    heading(f, &format!("{} dataset", overview.marketplace))?;
    writeln!(f, "source:   {}", overview.source)?;
    writeln!(f, "sha256:   {}", overview.checksum)?;
    writeln!(f, "shape:    ({}, {})", overview.rows, overview.columns)?;
    writeln!(f, "{:<24} {:>10} {:>10}", "column", "non-null", "unique")?;
    for summary in &overview.column_summaries {
        writeln!(f, "{:<24} {:>10} {:>10}", summary.name, summary.non_null, summary.unique)?;
    }
    Ok(())
}

fn write_stages(f: &mut fmt::Formatter<'_>, title: &str, stages: &[StageShape]) -> fmt::Result {
    heading(f, title)?;
    for stage in stages {
        writeln!(f, "{:<18} {:>8}", stage.stage, stage.rows)?;
    }
    Ok(())
}

fn write_frequencies(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    column: &str,
    rows: &[Frequency],
) -> fmt::Result {
    heading(f, title)?;
    writeln!(f, "{:<32} {:>8} {:>10}", column, "count", "fraction")?;
    for row in rows {
        writeln!(f, "{:<32} {:>8} {:>10.6}", row.value, row.count, row.fraction)?;
    }
    Ok(())
}

fn write_means(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    group: &str,
    metric: &str,
    rows: &[GroupMean],
    style: MeanStyle,
) -> fmt::Result {
    heading(f, title)?;
    writeln!(f, "{:<32} {:>8} {:>36}", group, "apps", metric)?;
    for row in rows {
        match style {
            MeanStyle::Decimal => {
                writeln!(f, "{:<32} {:>8} {:>36.6}", row.group, row.count, row.mean)?
            }
            MeanStyle::Integer => {
                writeln!(f, "{:<32} {:>8} {:>36}", row.group, row.count, row.mean.trunc() as u64)?
            }
        }
    }
    Ok(())
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_overview(f, &self.play_store_overview)?;
        write_overview(f, &self.app_store_overview)?;

        write_stages(f, "Google Play cleaning", &self.play_store_stages)?;
        writeln!(
            f,
            "(naive full-row dedup ignoring Reviews would keep {} rows)",
            self.naive_dedup_rows
        )?;
        write_stages(f, "App Store cleaning", &self.app_store_stages)?;

        write_frequencies(f, "Google Play genres", "Genres", &self.play_store_genres)?;
        write_frequencies(f, "Google Play categories", "Category", &self.play_store_categories)?;
        write_frequencies(f, "App Store genres", "prime_genre", &self.app_store_genres)?;

        write_frequencies(
            f,
            &format!("Genres within {}", self.focus_category),
            "Genres",
            &self.focus_genres,
        )?;
        heading(
            f,
            &format!("{} / {} apps", self.focus_category, self.focus_genre),
        )?;
        writeln!(f, "{}", self.focus_apps.join(", "))?;

        heading(f, "Genre to category relationship")?;
        writeln!(
            f,
            "{} genre/category pairs across {} genres; {} genres span several categories",
            self.genre_categories.pair_count,
            self.genre_categories.genre_count,
            self.genre_categories.shared_genres.len()
        )?;
        for shared in &self.genre_categories.shared_genres {
            writeln!(f, "{:<32} {}", shared.genre, shared.categories.join(", "))?;
        }

        write_means(
            f,
            "Average installs by genre (Google Play)",
            "Genres",
            "average_installs_in_millions",
            &self.installs_by_genre,
            MeanStyle::Decimal,
        )?;
        write_means(
            f,
            "Average installs by category (Google Play)",
            "Category",
            "average_installs_in_millions",
            &self.installs_by_category,
            MeanStyle::Decimal,
        )?;
        write_means(
            f,
            "Average rating count by genre (App Store)",
            "prime_genre",
            "rating_count_tot",
            &self.ratings_by_genre,
            MeanStyle::Integer,
        )?;

        heading(f, "Recommendation")?;
        for recommendation in &self.recommendations {
            let common = recommendation
                .most_common
                .as_ref()
                .map(|c| format!("{} ({:.1}% of apps)", c.value, c.fraction * 100.0))
                .unwrap_or_else(|| "-".to_string());
            let popular = recommendation
                .most_popular
                .as_ref()
                .map(|p| p.group.clone())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<12} most common: {}; most popular: {}",
                recommendation.marketplace.label(),
                common,
                popular
            )?;
        }
        Ok(())
    }
}
