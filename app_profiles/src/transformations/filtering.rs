use crate::core::domain::AppRecord;

/// Names with more non-ASCII characters than this are treated as non-English.
pub const DEFAULT_MAX_NON_ENGLISH_CHARS: usize = 3;

/// Count the characters of `name` whose code point is above 127.
///
/// This is an approximate proxy for a non-English name: emoji, accented Latin
/// letters and symbols such as `™` all count.
pub fn non_eng_char_count(name: &str) -> usize {
    name.chars().filter(|c| u32::from(*c) > 127).count()
}

/// Whether `name` passes the English-name heuristic.
pub fn is_english_name(name: &str, max_non_english_chars: usize) -> bool {
    non_eng_char_count(name) <= max_non_english_chars
}

/// Keep only free apps.
pub fn filter_free<T: AppRecord>(records: Vec<T>) -> Vec<T> {
    let before = records.len();
    let free: Vec<T> = records.into_iter().filter(|r| r.is_free()).collect();
    log::debug!("Free filter kept {} of {} apps", free.len(), before);
    free
}

/// Keep only apps whose name passes the English-name heuristic.
pub fn filter_english<T: AppRecord>(records: Vec<T>, max_non_english_chars: usize) -> Vec<T> {
    let before = records.len();
    let english: Vec<T> = records
        .into_iter()
        .filter(|r| is_english_name(r.identity(), max_non_english_chars))
        .collect();
    log::debug!("English filter kept {} of {} apps", english.len(), before);
    english
}
