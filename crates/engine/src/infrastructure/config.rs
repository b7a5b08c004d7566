//! Engine configuration loaded from the environment.
//!
//! The binary loads `.env` with `dotenvy` before calling [`EngineConfig::from_env`].

use std::time::Duration;

use echona_domain::PointsPolicy;

/// Storage key used by every release of the challenges feature.
pub const DEFAULT_NAMESPACE: &str = "echona_music_challenges";

/// How long a completion reaction stays visible.
pub const DEFAULT_REACTION_MS: u64 = 2500;

/// How long the badge-unlocked notice stays visible.
pub const DEFAULT_BADGE_NOTICE_MS: u64 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            key,
            message: message.to_string(),
        }
    }
}

/// Runtime settings for a challenge session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// SQLite file holding the progress store
    pub db_path: String,
    /// Namespace key the progression record is stored under
    pub namespace: String,
    pub reaction_ttl: Duration,
    pub badge_notice_ttl: Duration,
    pub points_policy: PointsPolicy,
    /// Seed for a reproducible random source; `None` uses system randomness
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_path: "echona.db".to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            reaction_ttl: Duration::from_millis(DEFAULT_REACTION_MS),
            badge_notice_ttl: Duration::from_millis(DEFAULT_BADGE_NOTICE_MS),
            points_policy: PointsPolicy::default(),
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let db_path = lookup("ECHONA_DB_PATH").unwrap_or(defaults.db_path);

        let namespace = match lookup("ECHONA_PROGRESS_NAMESPACE") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::invalid(
                    "ECHONA_PROGRESS_NAMESPACE",
                    "namespace cannot be empty",
                ));
            }
            Some(value) => value,
            None => defaults.namespace,
        };

        let reaction_ttl = match lookup("ECHONA_REACTION_MS") {
            Some(value) => Duration::from_millis(
                value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::invalid("ECHONA_REACTION_MS", e))?,
            ),
            None => defaults.reaction_ttl,
        };

        let badge_notice_ttl = match lookup("ECHONA_BADGE_NOTICE_MS") {
            Some(value) => Duration::from_millis(
                value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::invalid("ECHONA_BADGE_NOTICE_MS", e))?,
            ),
            None => defaults.badge_notice_ttl,
        };

        let points_policy = match lookup("ECHONA_POINTS_POLICY") {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::invalid("ECHONA_POINTS_POLICY", e))?,
            None => defaults.points_policy,
        };

        let rng_seed = match lookup("ECHONA_RNG_SEED") {
            Some(value) => Some(
                value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::invalid("ECHONA_RNG_SEED", e))?,
            ),
            None => None,
        };

        Ok(Self {
            db_path,
            namespace,
            reaction_ttl,
            badge_notice_ttl,
            points_policy,
            rng_seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.namespace, "echona_music_challenges");
        assert_eq!(config.reaction_ttl, Duration::from_millis(2500));
    }

    #[test]
    fn reads_all_overrides() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("ECHONA_DB_PATH", "/tmp/progress.db"),
            ("ECHONA_PROGRESS_NAMESPACE", "custom"),
            ("ECHONA_REACTION_MS", "1000"),
            ("ECHONA_BADGE_NOTICE_MS", "4000"),
            ("ECHONA_POINTS_POLICY", "first_completion_only"),
            ("ECHONA_RNG_SEED", "42"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, "/tmp/progress.db");
        assert_eq!(config.namespace, "custom");
        assert_eq!(config.reaction_ttl, Duration::from_millis(1000));
        assert_eq!(config.badge_notice_ttl, Duration::from_millis(4000));
        assert_eq!(config.points_policy, PointsPolicy::FirstCompletionOnly);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn rejects_bad_values() {
        let err = EngineConfig::from_lookup(lookup(&[("ECHONA_REACTION_MS", "soon")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "ECHONA_REACTION_MS",
                ..
            }
        ));

        assert!(EngineConfig::from_lookup(lookup(&[("ECHONA_POINTS_POLICY", "never")])).is_err());
        assert!(EngineConfig::from_lookup(lookup(&[("ECHONA_PROGRESS_NAMESPACE", " ")])).is_err());
        assert!(EngineConfig::from_lookup(lookup(&[("ECHONA_RNG_SEED", "-1")])).is_err());
    }
}
