use chrono::NaiveDate;
use polars::prelude::*;
use std::fmt::Display;
use std::io::Cursor;
use std::str::FromStr;

use crate::core::domain::{AppStoreApp, PlayStoreApp};
use crate::core::error::{ProfileError, ProfileResult};

/// Column names of the Google Play dataset.
pub mod play_store_columns {
    pub const APP: &str = "App";
    pub const CATEGORY: &str = "Category";
    pub const RATING: &str = "Rating";
    pub const REVIEWS: &str = "Reviews";
    pub const SIZE: &str = "Size";
    pub const INSTALLS: &str = "Installs";
    pub const TYPE: &str = "Type";
    pub const PRICE: &str = "Price";
    pub const CONTENT_RATING: &str = "Content Rating";
    pub const GENRES: &str = "Genres";
    pub const LAST_UPDATED: &str = "Last Updated";
    pub const CURRENT_VER: &str = "Current Ver";
    pub const ANDROID_VER: &str = "Android Ver";
}

/// Column names of the App Store dataset.
pub mod app_store_columns {
    pub const ID: &str = "id";
    pub const TRACK_NAME: &str = "track_name";
    pub const SIZE_BYTES: &str = "size_bytes";
    pub const CURRENCY: &str = "currency";
    pub const PRICE: &str = "price";
    pub const RATING_COUNT_TOT: &str = "rating_count_tot";
    pub const RATING_COUNT_VER: &str = "rating_count_ver";
    pub const USER_RATING: &str = "user_rating";
    pub const USER_RATING_VER: &str = "user_rating_ver";
    pub const VER: &str = "ver";
    pub const CONT_RATING: &str = "cont_rating";
    pub const PRIME_GENRE: &str = "prime_genre";
    pub const SUP_DEVICES_NUM: &str = "sup_devices.num";
    pub const IPAD_SC_URLS_NUM: &str = "ipadSc_urls.num";
    pub const LANG_NUM: &str = "lang.num";
}

/// Date format of the Play Store "Last Updated" column, e.g. `January 7, 2018`.
const LAST_UPDATED_FORMAT: &str = "%B %d, %Y";

/// Parse comma-separated bytes with a header row into a DataFrame.
///
/// Schema inference is disabled so every column is read as text; raw
/// formatting (`"10,000+"`, `"1.10"`, shifted cells) survives until typed
/// conversion.
pub fn parse_raw_csv(bytes: Vec<u8>) -> ProfileResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;
    Ok(df)
}

/// Drop the leading row-index column.
pub fn drop_index_column(df: &DataFrame) -> ProfileResult<DataFrame> {
    let first = df
        .get_column_names()
        .first()
        .map(|name| name.to_string())
        .ok_or_else(|| ProfileError::Load("table has no columns".to_string()))?;
    Ok(df.drop(&first)?)
}

/// Convert a raw Google Play DataFrame into typed records.
pub fn dataframe_to_play_store_apps(df: &DataFrame) -> ProfileResult<Vec<PlayStoreApp>> {
    use play_store_columns::*;

    let apps = text_column(df, APP)?;
    let categories = text_column(df, CATEGORY)?;
    let reviews = text_column(df, REVIEWS)?;
    let installs = text_column(df, INSTALLS)?;
    let prices = text_column(df, PRICE)?;
    let genres = text_column(df, GENRES)?;

    let ratings = optional_text_column(df, RATING);
    let sizes = optional_text_column(df, SIZE);
    let types = optional_text_column(df, TYPE);
    let content_ratings = optional_text_column(df, CONTENT_RATING);
    let last_updated = optional_text_column(df, LAST_UPDATED);
    let current_vers = optional_text_column(df, CURRENT_VER);
    let android_vers = optional_text_column(df, ANDROID_VER);

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        records.push(PlayStoreApp {
            app: required_text(apps, row, APP)?,
            category: required_text(categories, row, CATEGORY)?,
            rating: parse_optional(ratings, row, RATING)?,
            reviews: parse_required(reviews, row, REVIEWS)?,
            size: optional_text(sizes, row),
            installs: required_text(installs, row, INSTALLS)?,
            app_type: optional_text(types, row),
            price: required_text(prices, row, PRICE)?,
            content_rating: optional_text(content_ratings, row),
            genres: required_text(genres, row, GENRES)?,
            last_updated: parse_date(last_updated, row, LAST_UPDATED)?,
            current_ver: optional_text(current_vers, row),
            android_ver: optional_text(android_vers, row),
        });
    }

    Ok(records)
}

/// Convert a raw App Store DataFrame (index column already dropped) into typed records.
pub fn dataframe_to_app_store_apps(df: &DataFrame) -> ProfileResult<Vec<AppStoreApp>> {
    use app_store_columns::*;

    let track_names = text_column(df, TRACK_NAME)?;
    let prices = text_column(df, PRICE)?;
    let rating_counts = text_column(df, RATING_COUNT_TOT)?;
    let user_ratings = text_column(df, USER_RATING)?;
    let prime_genres = text_column(df, PRIME_GENRE)?;

    let ids = optional_text_column(df, ID);
    let size_bytes = optional_text_column(df, SIZE_BYTES);
    let currencies = optional_text_column(df, CURRENCY);
    let rating_counts_ver = optional_text_column(df, RATING_COUNT_VER);
    let user_ratings_ver = optional_text_column(df, USER_RATING_VER);
    let vers = optional_text_column(df, VER);
    let cont_ratings = optional_text_column(df, CONT_RATING);
    let sup_devices = optional_text_column(df, SUP_DEVICES_NUM);
    let ipad_urls = optional_text_column(df, IPAD_SC_URLS_NUM);
    let langs = optional_text_column(df, LANG_NUM);

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        records.push(AppStoreApp {
            id: parse_optional(ids, row, ID)?,
            track_name: required_text(track_names, row, TRACK_NAME)?,
            size_bytes: parse_optional(size_bytes, row, SIZE_BYTES)?,
            currency: optional_text(currencies, row),
            price: parse_required(prices, row, PRICE)?,
            rating_count_tot: parse_required(rating_counts, row, RATING_COUNT_TOT)?,
            rating_count_ver: parse_optional(rating_counts_ver, row, RATING_COUNT_VER)?,
            user_rating: parse_required(user_ratings, row, USER_RATING)?,
            user_rating_ver: parse_optional(user_ratings_ver, row, USER_RATING_VER)?,
            ver: optional_text(vers, row),
            cont_rating: optional_text(cont_ratings, row),
            prime_genre: required_text(prime_genres, row, PRIME_GENRE)?,
            sup_devices_num: parse_optional(sup_devices, row, SUP_DEVICES_NUM)?,
            ipad_sc_urls_num: parse_optional(ipad_urls, row, IPAD_SC_URLS_NUM)?,
            lang_num: parse_optional(langs, row, LANG_NUM)?,
        });
    }

    Ok(records)
}

fn text_column<'a>(df: &'a DataFrame, name: &str) -> ProfileResult<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| ProfileError::MissingColumn(name.to_string()))?;
    Ok(column.str()?)
}

fn optional_text_column<'a>(df: &'a DataFrame, name: &str) -> Option<&'a StringChunked> {
    df.column(name).ok().and_then(|c| c.str().ok())
}

/// Raw cell text; empty cells and the `NaN` marker count as missing.
fn cell(column: Option<&StringChunked>, row: usize) -> Option<&str> {
    column
        .and_then(|c| c.get(row))
        .filter(|s| !s.trim().is_empty() && *s != "NaN")
}

fn optional_text(column: Option<&StringChunked>, row: usize) -> Option<String> {
    cell(column, row).map(str::to_string)
}

fn required_text(column: &StringChunked, row: usize, name: &str) -> ProfileResult<String> {
    cell(Some(column), row)
        .map(str::to_string)
        .ok_or_else(|| schema_error(row, name, "missing value"))
}

fn parse_required<T>(column: &StringChunked, row: usize, name: &str) -> ProfileResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = cell(Some(column), row).ok_or_else(|| schema_error(row, name, "missing value"))?;
    parse_value(raw, row, name)
}

fn parse_optional<T>(column: Option<&StringChunked>, row: usize, name: &str) -> ProfileResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    cell(column, row)
        .map(|raw| parse_value(raw, row, name))
        .transpose()
}

fn parse_value<T>(raw: &str, row: usize, name: &str) -> ProfileResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| schema_error(row, name, &format!("cannot parse '{}': {}", raw, e)))
}

fn parse_date(column: Option<&StringChunked>, row: usize, name: &str) -> ProfileResult<Option<NaiveDate>> {
    cell(column, row)
        .map(|raw| {
            NaiveDate::parse_from_str(raw.trim(), LAST_UPDATED_FORMAT)
                .map_err(|e| schema_error(row, name, &format!("cannot parse date '{}': {}", raw, e)))
        })
        .transpose()
}

fn schema_error(row: usize, column: &str, message: &str) -> ProfileError {
    ProfileError::Schema {
        row,
        column: column.to_string(),
        message: message.to_string(),
    }
}
