//! Query configuration
//!
//! One serde-deserializable record bundling parse, evaluate and cache
//! settings, with presets for common deployments.

pub mod validation;

use serde::{Deserialize, Serialize};

use crate::{compiler::ParseOptions, core_evaluator::EvaluateOptions};

pub use validation::{ConfigResult, ConfigurationError, Validator};

/// Default number of cached query results
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Settings for a [`QueryEngine`](crate::cache::QueryEngine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub parse: ParseOptions,
    pub evaluate: EvaluateOptions,
    /// Maximum cached results; must be non-zero
    pub cache_capacity: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            evaluate: EvaluateOptions::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl QueryConfig {
    /// Tight limits for untrusted paths
    #[must_use]
    pub fn strict() -> Self {
        Self {
            parse: ParseOptions {
                allow_partial: false,
                validate: true,
                max_recursive_descents: 2,
                max_filter_depth: 16,
            },
            evaluate: EvaluateOptions {
                max_depth: 32,
                max_recursive_descents: 2,
                max_filter_depth: 16,
            },
            cache_capacity: 64,
        }
    }

    /// Generous limits for trusted paths over deep documents
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            parse: ParseOptions {
                allow_partial: false,
                validate: true,
                max_recursive_descents: 64,
                max_filter_depth: 128,
            },
            evaluate: EvaluateOptions {
                max_depth: 1024,
                max_recursive_descents: 64,
                max_filter_depth: 128,
            },
            cache_capacity: 4096,
        }
    }
}

impl Validator for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.evaluate.max_depth == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "evaluate.max_depth cannot be zero".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(ConfigurationError::InvalidCacheCapacity(
                "cache_capacity cannot be zero".to_string(),
            ));
        }
        if self.parse.max_recursive_descents == 0 || self.evaluate.max_recursive_descents == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "max_recursive_descents cannot be zero".to_string(),
            ));
        }
        if self.parse.max_filter_depth == 0 || self.evaluate.max_filter_depth == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "max_filter_depth cannot be zero".to_string(),
            ));
        }
        if self.parse.max_recursive_descents > self.evaluate.max_recursive_descents {
            log::warn!(
                "parse ceiling {} exceeds evaluate ceiling {}; the evaluate ceiling applies",
                self.parse.max_recursive_descents,
                self.evaluate.max_recursive_descents
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        QueryConfig::default()
            .validate()
            .expect("Failed to validate default config");
        QueryConfig::strict()
            .validate()
            .expect("Failed to validate strict config");
        QueryConfig::permissive()
            .validate()
            .expect("Failed to validate permissive config");
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        let mut config = QueryConfig::default();
        config.evaluate.max_depth = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidParameter(_))
        ));

        let config = QueryConfig {
            cache_capacity: 0,
            ..QueryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidCacheCapacity(_))
        ));

        let mut config = QueryConfig::default();
        config.parse.max_recursive_descents = 0;
        assert!(config.validate().is_err());

        let mut config = QueryConfig::default();
        config.evaluate.max_filter_depth = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidParameter(message)) if message.contains("max_filter_depth")
        ));
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: QueryConfig = serde_json::from_value(serde_json::json!({
            "evaluate": {"max_depth": 7},
            "cache_capacity": 10
        }))
        .expect("Failed to deserialize config");
        assert_eq!(config.evaluate.max_depth, 7);
        assert_eq!(
            config.evaluate.max_recursive_descents,
            EvaluateOptions::default().max_recursive_descents
        );
        assert_eq!(config.parse, ParseOptions::default());
        assert_eq!(config.cache_capacity, 10);
    }
}
