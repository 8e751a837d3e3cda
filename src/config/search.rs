//! Configuration for the best-trade search.

use crate::error::AmmError;

/// Default maximum number of pairs a route may traverse.
pub const DEFAULT_MAX_HOPS: usize = 3;

/// Default number of ranked trades retained by the search.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Upper bound accepted for `max_hops`.
///
/// The search visits `O(pairs^max_hops)` paths, so the cap keeps a
/// misconfigured caller from requesting an unbounded enumeration.
pub const MAX_HOPS_LIMIT: usize = 6;

/// Bounds for the depth-first best-trade search.
///
/// # Validation
///
/// - `max_hops` must be in `1..=MAX_HOPS_LIMIT`.
/// - `max_results` must be non-zero.
///
/// # Examples
///
/// ```
/// use swap_router::config::SearchConfig;
///
/// let cfg = SearchConfig::default();
/// assert_eq!(cfg.max_hops(), 3);
/// assert_eq!(cfg.max_results(), 3);
///
/// assert!(SearchConfig::new(0, 3).is_err());
/// assert!(SearchConfig::new(2, 1).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    max_hops: usize,
    max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    /// Creates a new `SearchConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if either bound is out of
    /// range.
    pub fn new(max_hops: usize, max_results: usize) -> Result<Self, AmmError> {
        let config = Self {
            max_hops,
            max_results,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if either bound is out of
    /// range.
    pub const fn validate(&self) -> Result<(), AmmError> {
        if self.max_hops == 0 {
            return Err(AmmError::InvalidConfiguration("max_hops must be positive"));
        }
        if self.max_hops > MAX_HOPS_LIMIT {
            return Err(AmmError::InvalidConfiguration("max_hops exceeds the limit"));
        }
        if self.max_results == 0 {
            return Err(AmmError::InvalidConfiguration(
                "max_results must be positive",
            ));
        }
        Ok(())
    }

    /// Maximum number of pairs in a route.
    #[must_use]
    pub const fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Maximum number of ranked trades returned.
    #[must_use]
    pub const fn max_results(&self) -> usize {
        self.max_results
    }

    #[cfg(test)]
    pub(crate) const fn unchecked(max_hops: usize, max_results: usize) -> Self {
        Self {
            max_hops,
            max_results,
        }
    }
}
