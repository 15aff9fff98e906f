//! Construction-time configuration for the array-backed containers.
//!
//! Policies are plain `serde` values so they can be embedded in a caller's
//! own configuration file or loaded from JSON directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Initial number of slots in an array-backed container.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Default multiplicative growth factor.
pub const DEFAULT_GROWTH_RATE: usize = 2;

/// Smallest growth factor that is honored; anything lower falls back to
/// [`DEFAULT_GROWTH_RATE`].
pub const MIN_GROWTH_RATE: usize = 2;

/// Largest `initial_capacity` accepted from configuration text.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid container configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("initial capacity {requested} exceeds the maximum of {max} slots")]
    CapacityTooLarge { requested: usize, max: usize },
}

/// Capacity and growth settings shared by [`crate::growable::GrowableArray`]
/// users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPolicy {
    pub initial_capacity: usize,
    pub growth_rate: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }
}

impl GrowthPolicy {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Growth factor actually applied when the buffer is enlarged.
    pub fn effective_growth_rate(&self) -> usize {
        if self.growth_rate < MIN_GROWTH_RATE {
            DEFAULT_GROWTH_RATE
        } else {
            self.growth_rate
        }
    }

    /// Capacity after one growth step from `capacity`.
    pub fn next_capacity(&self, capacity: usize) -> usize {
        capacity
            .saturating_mul(self.effective_growth_rate())
            .saturating_add(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                requested: self.initial_capacity,
                max: MAX_INITIAL_CAPACITY,
            });
        }
        Ok(())
    }

    /// Parses and validates a policy such as
    /// `{"initial_capacity": 16, "growth_rate": 3}`. Missing fields take
    /// their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let policy: Self = serde_json::from_str(text)?;
        policy.validate()?;
        Ok(policy)
    }
}

/// How [`crate::array_bst::ArrayBst`] restructures the array on removal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Lift the replacement's whole subtree into the vacated positions so
    /// no descendant is lost.
    #[default]
    Relocate,
    /// Copy only the replacement value up and clear its slot. Descendants
    /// of the cleared slot become unreachable.
    Shallow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayBstConfig {
    pub growth: GrowthPolicy,
    pub removal: RemovalPolicy,
}

impl ArrayBstConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.growth.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.initial_capacity, 10);
        assert_eq!(policy.growth_rate, 2);
        assert_eq!(ArrayBstConfig::default().removal, RemovalPolicy::Relocate);
    }

    #[test]
    fn low_growth_rate_is_normalized() {
        for rate in [0, 1] {
            let policy = GrowthPolicy {
                initial_capacity: 4,
                growth_rate: rate,
            };
            assert_eq!(policy.effective_growth_rate(), 2);
            assert_eq!(policy.next_capacity(4), 9);
        }
        let policy = GrowthPolicy {
            initial_capacity: 4,
            growth_rate: 3,
        };
        assert_eq!(policy.next_capacity(4), 13);
        assert_eq!(policy.next_capacity(0), 1);
    }

    #[test]
    fn next_capacity_saturates() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(usize::MAX), usize::MAX);
    }

    #[test]
    fn parse_growth_policy() {
        let policy =
            GrowthPolicy::from_json(r#"{"initial_capacity": 16, "growth_rate": 3}"#).unwrap();
        assert_eq!(
            policy,
            GrowthPolicy {
                initial_capacity: 16,
                growth_rate: 3
            }
        );
        let policy = GrowthPolicy::from_json(r#"{"growth_rate": 4}"#).unwrap();
        assert_eq!(policy.initial_capacity, DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn parse_array_bst_config() {
        let config = ArrayBstConfig::from_json(
            r#"{"removal": "shallow", "growth": {"initial_capacity": 1}}"#,
        )
        .unwrap();
        assert_eq!(config.removal, RemovalPolicy::Shallow);
        assert_eq!(config.growth.initial_capacity, 1);
        assert_eq!(config.growth.growth_rate, DEFAULT_GROWTH_RATE);
        assert_eq!(ArrayBstConfig::from_json("{}").unwrap(), ArrayBstConfig::default());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(GrowthPolicy::from_json("[1, 2"), Err(ConfigError::Json(_))));
        assert!(matches!(
            ArrayBstConfig::from_json(r#"{"removal": "deep"}"#),
            Err(ConfigError::Json(_))
        ));
        let err = GrowthPolicy::from_json(r#"{"initial_capacity": 999999999}"#).unwrap_err();
        assert!(matches!(err, ConfigError::CapacityTooLarge { requested: 999_999_999, .. }));
        assert!(err.to_string().contains("999999999"));
    }
}
