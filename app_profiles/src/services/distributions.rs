//! Grouped descriptive statistics over cleaned app collections.
//!
//! Two query shapes are supported: relative frequency of a categorical column
//! and the per-group mean of a numeric column. Both recompute from the full
//! collection on every call.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::core::domain::{AppStoreProfile, PlayStoreApp, PlayStoreProfile};

/// Relative frequency of one categorical value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frequency {
    pub value: String,
    pub count: usize,
    pub fraction: f64,
}

/// Mean of a numeric column within one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub group: String,
    pub count: usize,
    pub mean: f64,
}

/// Categorical Google Play columns that queries can group by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayStoreColumn {
    Category,
    Genres,
}

impl PlayStoreColumn {
    pub fn name(&self) -> &'static str {
        match self {
            PlayStoreColumn::Category => "Category",
            PlayStoreColumn::Genres => "Genres",
        }
    }

    pub fn value<'a>(&self, app: &'a PlayStoreApp) -> &'a str {
        match self {
            PlayStoreColumn::Category => &app.category,
            PlayStoreColumn::Genres => &app.genres,
        }
    }
}

/// Relative frequency of each value of `key`, most frequent first.
///
/// Fractions sum to 1.0 for a non-empty input; ties are ordered by value.
pub fn value_distribution<T, K>(records: &[T], key: K) -> Vec<Frequency>
where
    K: Fn(&T) -> &str,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }

    let total = records.len() as f64;
    let mut frequencies: Vec<Frequency> = counts
        .into_iter()
        .map(|(value, count)| Frequency {
            value: value.to_string(),
            count,
            fraction: count as f64 / total,
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

/// Arithmetic mean of `value` per group of `key`, highest mean first.
///
/// Ties are ordered by group name.
pub fn mean_by_group<T, K, V>(records: &[T], key: K, value: V) -> Vec<GroupMean>
where
    K: Fn(&T) -> &str,
    V: Fn(&T) -> f64,
{
    let mut sums: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(key(record)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += value(record);
    }

    let mut means: Vec<GroupMean> = sums
        .into_iter()
        .map(|(group, (count, sum))| GroupMean {
            group: group.to_string(),
            count,
            mean: sum / count as f64,
        })
        .collect();
    means.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(Ordering::Equal));
    means
}

/// Distribution of a Google Play column
pub fn play_store_distribution(profiles: &[PlayStoreProfile], by: PlayStoreColumn) -> Vec<Frequency> {
    value_distribution(profiles, |p| by.value(&p.app))
}

/// Distribution of App Store `prime_genre`
pub fn app_store_genre_distribution(profiles: &[AppStoreProfile]) -> Vec<Frequency> {
    value_distribution(profiles, |p| p.app.prime_genre.as_str())
}

/// Mean install count in millions per Google Play group
pub fn average_installs_in_millions(
    profiles: &[PlayStoreProfile],
    by: PlayStoreColumn,
) -> Vec<GroupMean> {
    mean_by_group(
        profiles,
        |p| by.value(&p.app),
        |p| p.installs_in_millions(),
    )
}

/// Mean total rating count per App Store `prime_genre`
pub fn average_rating_count(profiles: &[AppStoreProfile]) -> Vec<GroupMean> {
    mean_by_group(
        profiles,
        |p| p.app.prime_genre.as_str(),
        |p| p.app.rating_count_tot as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::fixtures::{app_store_app, play_store_app};
    use proptest::prelude::*;

    fn profile(name: &str, category: &str, genres: &str, installs: u64) -> PlayStoreProfile {
        let mut app = play_store_app(name, 1, "0");
        app.category = category.to_string();
        app.genres = genres.to_string();
        PlayStoreProfile {
            app,
            non_eng_chars: 0,
            installs_count: installs,
        }
    }

    fn sample_profiles() -> Vec<PlayStoreProfile> {
        vec![
            profile("a", "GAME", "Action", 1_000_000),
            profile("b", "GAME", "Casual", 3_000_000),
            profile("c", "FAMILY", "Casual", 500_000),
            profile("d", "TOOLS", "Tools", 10_000_000),
        ]
    }

    #[test]
    fn test_play_store_distribution() {
        let dist = play_store_distribution(&sample_profiles(), PlayStoreColumn::Category);

        assert_eq!(dist.len(), 3);
        assert_eq!(dist[0].value, "GAME");
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[0].fraction, 0.5);
        // ties ordered by value
        assert_eq!(dist[1].value, "FAMILY");
        assert_eq!(dist[2].value, "TOOLS");
    }

    #[test]
    fn test_distribution_empty() {
        let dist = play_store_distribution(&[], PlayStoreColumn::Genres);
        assert!(dist.is_empty());
    }

    #[test]
    fn test_average_installs_in_millions() {
        let means = average_installs_in_millions(&sample_profiles(), PlayStoreColumn::Category);

        assert_eq!(means[0].group, "TOOLS");
        assert_eq!(means[0].mean, 10.0);
        assert_eq!(means[1].group, "GAME");
        assert_eq!(means[1].mean, 2.0);
        assert_eq!(means[1].count, 2);
        assert_eq!(means[2].group, "FAMILY");
        assert_eq!(means[2].mean, 0.5);
    }

    #[test]
    fn test_average_rating_count() {
        let mut social = app_store_app("Facebook", None, 0.0);
        social.prime_genre = "Social Networking".to_string();
        social.rating_count_tot = 2_974_676;
        let mut game = app_store_app("Clash", None, 0.0);
        game.rating_count_tot = 1_000;
        let mut game2 = app_store_app("Pac", None, 0.0);
        game2.rating_count_tot = 3_000;

        let profiles: Vec<AppStoreProfile> = vec![social, game, game2]
            .into_iter()
            .map(|app| AppStoreProfile { app, non_eng_chars: 0 })
            .collect();

        let means = average_rating_count(&profiles);
        assert_eq!(means[0].group, "Social Networking");
        assert_eq!(means[0].mean, 2_974_676.0);
        assert_eq!(means[1].group, "Games");
        assert_eq!(means[1].mean, 2_000.0);

        let dist = app_store_genre_distribution(&profiles);
        assert_eq!(dist[0].value, "Games");
        assert!((dist[0].fraction - 2.0 / 3.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_distribution_sums_to_one(picks in prop::collection::vec(0usize..6, 1..60)) {
            let values: Vec<String> = picks.iter().map(|i| format!("genre-{i}")).collect();
            let dist = value_distribution(&values, |v: &String| v.as_str());

            let total: f64 = dist.iter().map(|f| f.fraction).sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
            let counted: usize = dist.iter().map(|f| f.count).sum();
            prop_assert_eq!(counted, values.len());
        }

        #[test]
        fn prop_means_are_non_increasing(
            rows in prop::collection::vec((0usize..6, 0u64..5_000_000), 1..60)
        ) {
            let values: Vec<(String, f64)> = rows
                .iter()
                .map(|(g, v)| (format!("group-{g}"), *v as f64))
                .collect();
            let means = mean_by_group(&values, |r: &(String, f64)| r.0.as_str(), |r: &(String, f64)| r.1);

            for pair in means.windows(2) {
                prop_assert!(pair[0].mean >= pair[1].mean);
            }
        }
    }
}
