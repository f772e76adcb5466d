//! App Profiles - profiling free, English-language apps across two marketplaces.
//!
//! The crate loads a Google-Play-like and an App-Store-like dataset, cleans each
//! through an ordered sequence of deterministic stages and aggregates the
//! cleaned collections into the tables used to recommend an app category.

pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod transformations;
