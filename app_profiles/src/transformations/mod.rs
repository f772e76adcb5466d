//! Cleaning and filtering transformations.
//!
//! Every operation takes its input snapshot and returns a new collection, so
//! the stages compose in any pipeline and can be tested in isolation.
//!
//! # Modules
//!
//! - [`cleaning`]: Remove structurally corrupt rows, collapse duplicate apps
//! - [`filtering`]: Keep free apps with predominantly English names
//!
//! # Example
//!
//! ```no_run
//! use app_profiles::transformations::{deduplicate_play_store, filter_english, filter_free};
//! use app_profiles::core::domain::PlayStoreApp;
//!
//! # fn example(apps: Vec<PlayStoreApp>) {
//! let unique = deduplicate_play_store(apps);
//! let free = filter_free(unique);
//! let english = filter_english(free, 3);
//! # }
//! ```

pub mod cleaning;
pub mod filtering;

pub use cleaning::{
    deduplicate_app_store, deduplicate_play_store, keep_first_by_identity,
    remove_rows_by_identity, sanitize_rows,
};
pub use filtering::{filter_english, filter_free, is_english_name, non_eng_char_count};
