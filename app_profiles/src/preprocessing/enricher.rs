use serde::{Deserialize, Serialize};

use crate::core::domain::{AppStoreApp, AppStoreProfile, PlayStoreApp, PlayStoreProfile};
use crate::core::error::{ProfileError, ProfileResult};
use crate::parsing::installs::parse_installs;
use crate::transformations::filtering::non_eng_char_count;

/// What to do with a record whose installs text cannot be normalised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    /// Fail the whole run
    #[default]
    Abort,
    /// Drop the record and log a warning
    Skip,
}

/// Computes the derived columns of cleaned records
pub struct FeatureDeriver {
    policy: CoercionPolicy,
}

impl FeatureDeriver {
    /// Create a deriver that aborts on the first malformed installs value
    pub fn new() -> Self {
        Self {
            policy: CoercionPolicy::Abort,
        }
    }

    /// Create a deriver with an explicit coercion policy
    pub fn with_policy(policy: CoercionPolicy) -> Self {
        Self { policy }
    }

    /// Derive `non_eng_chars` and the normalised install count for each app
    pub fn derive_play_store(&self, apps: Vec<PlayStoreApp>) -> ProfileResult<Vec<PlayStoreProfile>> {
        let mut profiles = Vec::with_capacity(apps.len());

        for app in apps {
            let installs_count = match parse_installs(&app.installs) {
                Ok(count) => count,
                Err(source) => match self.policy {
                    CoercionPolicy::Abort => {
                        return Err(ProfileError::Coercion {
                            identity: app.app,
                            source,
                        })
                    }
                    CoercionPolicy::Skip => {
                        log::warn!("Skipping '{}': {}", app.app, source);
                        continue;
                    }
                },
            };

            profiles.push(PlayStoreProfile {
                non_eng_chars: non_eng_char_count(&app.app),
                installs_count,
                app,
            });
        }

        Ok(profiles)
    }

    /// Derive `non_eng_chars` for each app
    pub fn derive_app_store(&self, apps: Vec<AppStoreApp>) -> Vec<AppStoreProfile> {
        apps.into_iter()
            .map(|app| AppStoreProfile {
                non_eng_chars: non_eng_char_count(&app.track_name),
                app,
            })
            .collect()
    }
}

impl Default for FeatureDeriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::fixtures::{app_store_app, play_store_app};
    use crate::core::error::InstallsParseError;

    fn with_installs(name: &str, installs: &str) -> PlayStoreApp {
        let mut app = play_store_app(name, 1, "0");
        app.installs = installs.to_string();
        app
    }

    #[test]
    fn test_derive_play_store() {
        let apps = vec![with_installs("Café", "10,000+"), with_installs("Zero", "0")];
        let profiles = FeatureDeriver::new().derive_play_store(apps).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].installs_count, 10_000);
        assert_eq!(profiles[0].non_eng_chars, 1);
        assert_eq!(profiles[1].installs_count, 0);
        assert_eq!(profiles[1].non_eng_chars, 0);
    }

    #[test]
    fn test_malformed_installs_aborts_by_default() {
        let apps = vec![with_installs("Good", "500+"), with_installs("Bad", "many")];
        let err = FeatureDeriver::default().derive_play_store(apps).unwrap_err();

        match err {
            ProfileError::Coercion { identity, source } => {
                assert_eq!(identity, "Bad");
                assert_eq!(source, InstallsParseError::Invalid("many".to_string()));
            }
            other => panic!("expected coercion error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_installs_skipped_with_skip_policy() {
        let apps = vec![with_installs("Good", "500+"), with_installs("Bad", "many")];
        let profiles = FeatureDeriver::with_policy(CoercionPolicy::Skip)
            .derive_play_store(apps)
            .unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].app.app, "Good");
    }

    #[test]
    fn test_derive_app_store() {
        let profiles = FeatureDeriver::new().derive_app_store(vec![app_store_app("Fotos 📷", None, 0.0)]);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].non_eng_chars, 1);
    }
}
