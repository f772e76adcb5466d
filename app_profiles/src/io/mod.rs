//! Dataset loading.
//!
//! The loader reads a whole source (local file or `http(s)://` URL) into
//! memory, parses it into a text-typed DataFrame and records the shape
//! diagnostics printed before cleaning starts.
//!
//! # Example
//!
//! ```no_run
//! use app_profiles::io::loaders::{DataSource, DatasetLoader};
//!
//! let source = DataSource::parse("googleplaystore.csv");
//! let result = DatasetLoader::load_play_store(&source).expect("Failed to load");
//! println!("Loaded {:?} (rows, columns)", result.shape());
//! ```

pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use loaders::{calculate_checksum, DataSource, DatasetLoadResult, DatasetLoader};
