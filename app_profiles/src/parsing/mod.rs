//! Parsers for raw marketplace datasets.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Parse delimited bytes into a text-typed DataFrame and
//!   convert DataFrames into typed app records
//! - [`installs`]: Normalise formatted install counts such as `"10,000+"`
//!
//! # Example
//!
//! ```no_run
//! use app_profiles::parsing::csv_parser::{dataframe_to_play_store_apps, parse_raw_csv};
//!
//! let bytes = std::fs::read("googleplaystore.csv").expect("Failed to read file");
//! let df = parse_raw_csv(bytes).expect("Failed to parse CSV");
//! let apps = dataframe_to_play_store_apps(&df).expect("Failed to convert rows");
//! ```

pub mod csv_parser;
pub mod installs;


pub use installs::parse_installs;
