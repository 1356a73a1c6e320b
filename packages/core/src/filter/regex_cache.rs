//! Bounded regular expression compile cache

use std::sync::RwLock;

use hashbrown::HashMap;
use regex::Regex;

/// Number of compiled patterns kept per cache
pub const REGEX_CACHE_CAPACITY: usize = 32;

/// Compiled pattern cache owned by one evaluator
///
/// Once full, new patterns are compiled but not retained.
pub struct RegexCache {
    cache: RwLock<HashMap<String, Regex>>,
}

impl RegexCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get compiled regex from cache or compile and cache if not present
    pub fn get_or_compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        if let Ok(cache) = self.cache.read()
            && let Some(regex) = cache.get(pattern)
        {
            return Ok(regex.clone());
        }

        let regex = Regex::new(pattern)?;

        if let Ok(mut cache) = self.cache.write()
            && cache.len() < REGEX_CACHE_CAPACITY
        {
            log::debug!("caching compiled regex '{pattern}'");
            cache.insert(pattern.to_string(), regex.clone());
        }

        Ok(regex)
    }

    /// Number of cached patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RegexCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexCache").field("len", &self.len()).finish()
    }
}
