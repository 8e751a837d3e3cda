//! Declarative reserve snapshot for a constant-product pair.

use crate::domain::{Token, TokenAmount};
use crate::error::AmmError;

/// Configuration describing a pair's reserves as collaborators report them.
///
/// Reserves are whole-token decimal strings (`"1500.25"`), which is how
/// indexers and RPC adapters typically hand snapshots over.  They are
/// converted to raw units with each token's decimals, flooring any excess
/// precision.
///
/// # Validation
///
/// - The two tokens must have distinct addresses.
/// - Both reserves must parse as non-negative decimals.
///
/// Zero reserves are accepted: an empty pair is a valid snapshot and is
/// simply skipped by the best-trade search.
///
/// # Examples
///
/// ```
/// use swap_router::config::PairConfig;
/// use swap_router::domain::Token;
/// use swap_router::pools::Pair;
/// use swap_router::traits::FromConfig;
///
/// let a = Token::try_new("0x0a", 18).expect("valid");
/// let b = Token::try_new("0x0b", 6).expect("valid");
/// let cfg = PairConfig::new(a, b, "10", "20.5").expect("valid config");
///
/// let pair = Pair::from_config(&cfg).expect("pair");
/// assert_eq!(pair.reserve1().to_exact(), "20.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairConfig {
    token_a: Token,
    token_b: Token,
    reserve_a: String,
    reserve_b: String,
}

impl PairConfig {
    /// Creates a new `PairConfig`.
    ///
    /// # Errors
    ///
    /// See [`PairConfig::validate`].
    pub fn new(
        token_a: Token,
        token_b: Token,
        reserve_a: impl Into<String>,
        reserve_b: impl Into<String>,
    ) -> Result<Self, AmmError> {
        let config = Self {
            token_a,
            token_b,
            reserve_a: reserve_a.into(),
            reserve_b: reserve_b.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if both tokens share an address.
    /// - [`AmmError::InvalidDecimal`] or [`AmmError::InvalidQuantity`] if a
    ///   reserve is malformed or negative.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.token_a == self.token_b {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        self.reserve_amounts().map(|_| ())
    }

    /// Returns the first configured token.
    #[must_use]
    pub const fn token_a(&self) -> &Token {
        &self.token_a
    }

    /// Returns the second configured token.
    #[must_use]
    pub const fn token_b(&self) -> &Token {
        &self.token_b
    }

    /// Returns the reserve of `token_a` as configured.
    #[must_use]
    pub fn reserve_a(&self) -> &str {
        &self.reserve_a
    }

    /// Returns the reserve of `token_b` as configured.
    #[must_use]
    pub fn reserve_b(&self) -> &str {
        &self.reserve_b
    }

    /// Converts both reserves to raw token amounts.
    ///
    /// # Errors
    ///
    /// Propagates parse failures from [`TokenAmount::from_token_str`].
    pub fn reserve_amounts(&self) -> Result<(TokenAmount, TokenAmount), AmmError> {
        Ok((
            TokenAmount::from_token_str(self.token_a.clone(), &self.reserve_a)?,
            TokenAmount::from_token_str(self.token_b.clone(), &self.reserve_b)?,
        ))
    }
}
