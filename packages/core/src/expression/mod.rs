//! Static analysis over parsed paths
//!
//! - `validation`: semantic checks run after parsing
//! - `analysis`: derived metadata (multiplicity, feature flags, complexity)
//! - `canonical`: canonical text used as the cache key

pub mod analysis;
pub mod canonical;
pub mod validation;

pub use analysis::PathMetadata;
pub use canonical::ast_to_string;
pub use validation::{MAX_SAFE_INTEGER, validate_path};
