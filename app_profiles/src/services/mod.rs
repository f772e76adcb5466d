//! Service layer for analysis and reporting.
//!
//! Services sit on top of the cleaned collections produced by
//! [`crate::preprocessing`]: grouped statistics, follow-up insights, and the
//! orchestration that turns two loaded datasets into an [`AnalysisReport`].

pub mod analysis;
pub mod distributions;
pub mod insights;
pub mod report;

pub use analysis::analyze;
pub use distributions::{
    app_store_genre_distribution, average_installs_in_millions, average_rating_count,
    mean_by_group, play_store_distribution, value_distribution, Frequency, GroupMean,
    PlayStoreColumn,
};
pub use insights::{
    app_names_in, genre_category_relationship, genre_distribution_within,
    naive_duplicate_survivors, recommend, GenreCategoryRelationship, Recommendation, SharedGenre,
};
pub use report::{AnalysisReport, DatasetOverview, ReportFormat};
