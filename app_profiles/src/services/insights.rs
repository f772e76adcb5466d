//! Follow-up analyses that support the final category recommendation.
//!
//! These reuse the aggregate primitives in [`super::distributions`]: a
//! drill-down into one category, the genre-to-category mapping of the Google
//! Play data, a comparison with naive full-row deduplication, and the
//! per-marketplace recommendation summary.

use polars::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::domain::{Marketplace, PlayStoreProfile};
use crate::core::error::ProfileResult;
use crate::services::distributions::{value_distribution, Frequency, GroupMean};

/// A genre that appears under more than one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedGenre {
    pub genre: String,
    pub categories: Vec<String>,
}

/// How Google Play genres map onto categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCategoryRelationship {
    /// Distinct (genre, category) pairs
    pub pair_count: usize,
    /// Distinct genres
    pub genre_count: usize,
    /// Genres assigned to two or more categories, sorted by genre
    pub shared_genres: Vec<SharedGenre>,
}

/// Most common and most popular group of one marketplace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub marketplace: Marketplace,
    pub most_common: Option<Frequency>,
    pub most_popular: Option<GroupMean>,
}

/// Number of raw rows left after dropping rows identical on every column except `ignored_column`.
///
/// This is the naive deduplication the review-count tie-break replaces: rows
/// of the same app collected on different dates survive it.
pub fn naive_duplicate_survivors(df: &DataFrame, ignored_column: &str) -> ProfileResult<usize> {
    let subset: Vec<String> = df
        .get_column_names()
        .iter()
        .filter(|name| name.as_str() != ignored_column)
        .map(|name| name.to_string())
        .collect();

    let unique = df.unique_stable(Some(&subset), UniqueKeepStrategy::First, None)?;
    Ok(unique.height())
}

/// Distribution of genres within one category
pub fn genre_distribution_within(profiles: &[PlayStoreProfile], category: &str) -> Vec<Frequency> {
    let focus: Vec<&PlayStoreProfile> = profiles
        .iter()
        .filter(|p| p.app.category == category)
        .collect();
    value_distribution(&focus, |p| p.app.genres.as_str())
}

/// Sorted, distinct names of the apps in `category` with genre `genre`
pub fn app_names_in(profiles: &[PlayStoreProfile], category: &str, genre: &str) -> Vec<String> {
    profiles
        .iter()
        .filter(|p| p.app.category == category && p.app.genres == genre)
        .map(|p| p.app.app.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Map each genre to the set of categories it appears under
pub fn genre_category_relationship(profiles: &[PlayStoreProfile]) -> GenreCategoryRelationship {
    let mut categories_by_genre: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for profile in profiles {
        categories_by_genre
            .entry(profile.app.genres.as_str())
            .or_default()
            .insert(profile.app.category.as_str());
    }

    let pair_count = categories_by_genre.values().map(BTreeSet::len).sum();
    let shared_genres = categories_by_genre
        .iter()
        .filter(|(_, categories)| categories.len() >= 2)
        .map(|(genre, categories)| SharedGenre {
            genre: genre.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        })
        .collect();

    GenreCategoryRelationship {
        pair_count,
        genre_count: categories_by_genre.len(),
        shared_genres,
    }
}

/// Summarise a marketplace from its distribution and mean-metric tables
pub fn recommend(
    marketplace: Marketplace,
    distribution: &[Frequency],
    means: &[GroupMean],
) -> Recommendation {
    Recommendation {
        marketplace,
        most_common: distribution.first().cloned(),
        most_popular: means.first().cloned(),
    }
}
