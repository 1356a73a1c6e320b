//! Configuration validation

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid cache capacity: {0}")]
    InvalidCacheCapacity(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidCacheCapacity` - if the cache could hold nothing
    /// - `InvalidParameter` - if a depth or recursion limit is zero
    fn validate(&self) -> ConfigResult<()>;
}
