//! Core domain models and error types.
//!
//! This module defines the typed per-marketplace app records that every
//! cleaning stage and aggregate query operates on.

pub mod domain;
pub mod error;

pub use domain::{
    AppRecord, AppStoreApp, AppStoreProfile, Marketplace, PlayStoreApp, PlayStoreProfile,
};
pub use error::{ConfigError, InstallsParseError, ProfileError, ProfileResult};
