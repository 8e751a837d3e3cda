//! Unified error types for the swap router.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! Variants fall into two groups:
//!
//! - **Precondition violations**: malformed decimal strings, invalid
//!   tokens, negative slippage or broken routes.  These indicate a caller bug
//!   or untrusted input that failed validation.
//! - **Liquidity shortfalls**: [`AmmError::InsufficientLiquidity`],
//!   [`AmmError::InsufficientInputAmount`] and [`AmmError::ZeroReserve`].
//!   These are expected while exploring candidate routes and are pruned by
//!   the best-trade search instead of being surfaced.

use thiserror::Error;

/// Error returned by every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A decimal string could not be parsed.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(&'static str),

    /// A token decimal count is outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A token or token address is malformed or not part of a pair.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// Two amounts denominated in different tokens were combined.
    #[error("token mismatch: operands are denominated in different tokens")]
    TokenMismatch,

    /// A quantity is outside its valid domain.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A slippage tolerance failed validation.
    #[error("invalid slippage: {0}")]
    InvalidSlippage(&'static str),

    /// A sequence of pairs does not form a contiguous route.
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A subtraction would produce a negative amount.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// The pool cannot satisfy the requested amount.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The input is too small to produce any output.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// A price was requested from a pair with an empty reserve.
    #[error("zero reserve")]
    ZeroReserve,
}

impl AmmError {
    /// Returns `true` for the recoverable liquidity conditions that the
    /// best-trade search prunes locally.
    #[must_use]
    pub const fn is_liquidity_shortfall(&self) -> bool {
        matches!(
            self,
            Self::InsufficientLiquidity | Self::InsufficientInputAmount | Self::ZeroReserve
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
