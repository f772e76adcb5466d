//! Domain models for marketplace app records.
//!
//! Each marketplace gets its own record type with named, typed fields. Raw
//! rows are converted into these records by validated parsing (see
//! [`crate::parsing::csv_parser`]); the cleaning stages then pass owned
//! collections of them from one stage to the next.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The app marketplace a dataset was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marketplace {
    /// Google-Play-like marketplace (marketplace A).
    PlayStore,
    /// App-Store-like marketplace (marketplace B).
    AppStore,
}

impl Marketplace {
    /// Human readable label used in logs and report headings.
    pub fn label(&self) -> &'static str {
        match self {
            Marketplace::PlayStore => "Google Play",
            Marketplace::AppStore => "App Store",
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Behaviour shared by the records of both marketplaces.
///
/// The identity is the display name of the app; it is the deduplication key
/// and the input of the English-name heuristic.
pub trait AppRecord {
    /// The unique key of the app within its marketplace.
    fn identity(&self) -> &str;

    /// Whether the app is free of charge.
    fn is_free(&self) -> bool;
}

/// A single Google Play app row.
///
/// `installs` and `price` keep their raw text: the free predicate compares the
/// price text against `"0"`, and installs are normalised later by the feature
/// deriver.
///
/// # Examples
///
/// ```
/// use app_profiles::core::domain::{AppRecord, PlayStoreApp};
///
/// let app = PlayStoreApp {
///     app: "Sample App".to_string(),
///     category: "GAME".to_string(),
///     rating: Some(4.5),
///     reviews: 250,
///     size: Some("19M".to_string()),
///     installs: "10,000+".to_string(),
///     app_type: Some("Free".to_string()),
///     price: "0".to_string(),
///     content_rating: Some("Everyone".to_string()),
///     genres: "Action".to_string(),
///     last_updated: None,
///     current_ver: None,
///     android_ver: None,
/// };
///
/// assert_eq!(app.identity(), "Sample App");
/// assert!(app.is_free());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayStoreApp {
    pub app: String,
    pub category: String,
    pub rating: Option<f64>,
    pub reviews: u64,
    pub size: Option<String>,
    pub installs: String,
    pub app_type: Option<String>,
    pub price: String,
    pub content_rating: Option<String>,
    pub genres: String,
    pub last_updated: Option<NaiveDate>,
    pub current_ver: Option<String>,
    pub android_ver: Option<String>,
}

impl AppRecord for PlayStoreApp {
    fn identity(&self) -> &str {
        &self.app
    }

    fn is_free(&self) -> bool {
        self.price == "0"
    }
}

/// A single App Store app row.
///
/// The leading row-index column of the source file is not part of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppStoreApp {
    pub id: Option<i64>,
    pub track_name: String,
    pub size_bytes: Option<u64>,
    pub currency: Option<String>,
    pub price: f64,
    pub rating_count_tot: u64,
    pub rating_count_ver: Option<u64>,
    pub user_rating: f64,
    pub user_rating_ver: Option<f64>,
    pub ver: Option<String>,
    pub cont_rating: Option<String>,
    pub prime_genre: String,
    pub sup_devices_num: Option<u32>,
    pub ipad_sc_urls_num: Option<u32>,
    pub lang_num: Option<u32>,
}

impl AppRecord for AppStoreApp {
    fn identity(&self) -> &str {
        &self.track_name
    }

    fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

/// A cleaned Google Play app with its derived features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayStoreProfile {
    pub app: PlayStoreApp,
    /// Number of characters in the app name with a code point above 127.
    pub non_eng_chars: usize,
    /// Install count with separators and the trailing `+` removed.
    pub installs_count: u64,
}

impl PlayStoreProfile {
    /// Install count scaled to millions.
    pub fn installs_in_millions(&self) -> f64 {
        self.installs_count as f64 / 1_000_000.0
    }
}

impl AppRecord for PlayStoreProfile {
    fn identity(&self) -> &str {
        self.app.identity()
    }

    fn is_free(&self) -> bool {
        self.app.is_free()
    }
}

/// A cleaned App Store app with its derived features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppStoreProfile {
    pub app: AppStoreApp,
    pub non_eng_chars: usize,
}

impl AppRecord for AppStoreProfile {
    fn identity(&self) -> &str {
        self.app.identity()
    }

    fn is_free(&self) -> bool {
        self.app.is_free()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_play_store_free_requires_literal_zero() {
        assert!(play_store_app("A", 1, "0").is_free());
        assert!(!play_store_app("A", 1, "$0.99").is_free());
        assert!(!play_store_app("A", 1, "0.0").is_free());
    }

    #[test]
    fn test_app_store_free_is_numeric_zero() {
        assert!(app_store_app("A", None, 0.0).is_free());
        assert!(!app_store_app("A", None, 0.99).is_free());
    }

    #[test]
    fn test_installs_in_millions() {
        let profile = PlayStoreProfile {
            app: play_store_app("A", 1, "0"),
            non_eng_chars: 0,
            installs_count: 5_000_000,
        };
        assert_eq!(profile.installs_in_millions(), 5.0);
    }

    #[test]
    fn test_marketplace_label() {
        assert_eq!(Marketplace::PlayStore.to_string(), "Google Play");
        assert_eq!(Marketplace::AppStore.label(), "App Store");
    }
}
