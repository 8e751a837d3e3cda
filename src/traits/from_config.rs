//! Generic construction trait for building values from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating pairs (and any
//! future pool shape) from their declarative configuration structs.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed value is guaranteed to be in
//! a valid initial state.  Common validations include:
//!
//! - Token pair has two distinct addresses
//! - Reserve strings parse as non-negative decimals
//!
//! # No Generic Blanket Implementation
//!
//! There is no `impl<T> FromConfig<T>` blanket: each type explicitly
//! implements the trait for its specific config type.

use crate::error::AmmError;

/// Generic construction trait for building a value from a configuration.
///
/// # Type Parameters
///
/// - `C`: the configuration type that fully describes the value's
///   immutable parameters.
///
/// # Implementors
///
/// - `impl FromConfig<PairConfig> for Pair`
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is taken by reference because it may be reused
    /// (e.g., to rebuild a pair after a reserve refresh).
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if the token pair is invalid.
    /// - [`AmmError::InvalidDecimal`] or [`AmmError::InvalidQuantity`] if a
    ///   numeric parameter is malformed.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
