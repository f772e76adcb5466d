use polars::prelude::*;
use std::collections::HashSet;

use crate::core::domain::{AppRecord, AppStoreApp, PlayStoreApp};
use crate::core::error::ProfileResult;

/// Remove every row whose identity column equals `identity`.
///
/// Removing an identity that is already absent returns an equal table, so the
/// operation is idempotent. Rows with a missing identity are kept.
pub fn remove_rows_by_identity(
    df: &DataFrame,
    identity_column: &str,
    identity: &str,
) -> ProfileResult<DataFrame> {
    let cleaned = df
        .clone()
        .lazy()
        .filter(col(identity_column).neq_missing(lit(identity)))
        .collect()?;

    let removed = df.height() - cleaned.height();
    if removed == 0 {
        log::debug!("Row sanitizer: no rows with {} = '{}'", identity_column, identity);
    } else {
        log::info!(
            "Row sanitizer: removed {} row(s) with {} = '{}'",
            removed,
            identity_column,
            identity
        );
    }

    Ok(cleaned)
}

/// Remove the rows of every listed corrupt identity.
pub fn sanitize_rows(
    df: &DataFrame,
    identity_column: &str,
    identities: &[String],
) -> ProfileResult<DataFrame> {
    let mut cleaned = df.clone();
    for identity in identities {
        cleaned = remove_rows_by_identity(&cleaned, identity_column, identity)?;
    }
    Ok(cleaned)
}

/// Keep the first record seen for each identity, preserving order.
pub fn keep_first_by_identity<T: AppRecord>(records: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.identity().to_string()))
        .collect()
}

/// Collapse Google Play duplicates, keeping the row with the most reviews.
///
/// Sorts by review count descending with a stable sort (ties keep their
/// original order), then keeps the first row per app name. Review counts
/// compare as numbers, not as the raw text, which would order "99" above "250".
pub fn deduplicate_play_store(apps: Vec<PlayStoreApp>) -> Vec<PlayStoreApp> {
    let mut sorted = apps;
    sorted.sort_by(|a, b| b.reviews.cmp(&a.reviews));
    let unique = keep_first_by_identity(sorted);
    log::debug!("Deduplicated Google Play apps to {} rows", unique.len());
    unique
}

/// Collapse App Store duplicates, keeping the row with the highest version string.
///
/// Versions compare lexicographically; a missing version sorts after every
/// populated one.
pub fn deduplicate_app_store(apps: Vec<AppStoreApp>) -> Vec<AppStoreApp> {
    let mut sorted = apps;
    sorted.sort_by(|a, b| b.ver.cmp(&a.ver));
    let unique = keep_first_by_identity(sorted);
    log::debug!("Deduplicated App Store apps to {} rows", unique.len());
    unique
}
