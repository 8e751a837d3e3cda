//! Ordered pair of distinct tokens.

use super::Token;
use crate::error::AmmError;

/// An ordered pair of distinct tokens, canonically sorted by address.
///
/// The canonical ordering guarantees that `first().address() < second().address()`,
/// so `(A, B)` and `(B, A)` describe the same pair.  A [`Pair`](crate::pools::Pair)
/// uses this ordering to decide which reserve is `reserve0`.
///
/// # Examples
///
/// ```
/// use swap_router::domain::{Token, TokenPair};
///
/// let tok_a = Token::try_new("0x01", 6).expect("valid");
/// let tok_b = Token::try_new("0x02", 18).expect("valid");
///
/// // Order is enforced automatically:
/// let pair = TokenPair::new(tok_b.clone(), tok_a.clone()).expect("distinct tokens");
/// assert_eq!(pair.first(), &tok_a);
/// assert_eq!(pair.second(), &tok_b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token_a: Token,
    token_b: Token,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both tokens have the same address.
    pub fn new(token1: Token, token2: Token) -> Result<Self, AmmError> {
        if token1.address() == token2.address() {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }

        let (token_a, token_b) = if token1.sorts_before(&token2) {
            (token1, token2)
        } else {
            (token2, token1)
        };

        Ok(Self { token_a, token_b })
    }

    /// Returns the first token (lower address).
    #[must_use]
    pub const fn first(&self) -> &Token {
        &self.token_a
    }

    /// Returns the second token (higher address).
    #[must_use]
    pub const fn second(&self) -> &Token {
        &self.token_b
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Result<&Token, AmmError> {
        if *token == self.token_a {
            Ok(&self.token_b)
        } else if *token == self.token_b {
            Ok(&self.token_a)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }
}
