//! Token identity type.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::{Amount, Decimals, TokenAddress};
use crate::error::AmmError;

/// A token on a given chain.
///
/// Combines a [`TokenAddress`] with its [`Decimals`] and optional display
/// metadata.  Identity is the address alone: equality, hashing and ordering
/// ignore the symbol, the name and the decimals, so the same token built
/// from two metadata sources still compares equal.
///
/// # Examples
///
/// ```
/// use swap_router::domain::{Decimals, Token, TokenAddress};
///
/// let addr = TokenAddress::new("0xA0b8").expect("valid");
/// let usdc = Token::new(addr.clone(), Decimals::new(6).expect("valid"))
///     .with_symbol("USDC")
///     .with_name("USD Coin");
///
/// assert_eq!(usdc.address(), &addr);
/// assert_eq!(usdc.symbol(), Some("USDC"));
/// assert_eq!(usdc.to_string(), "USDC");
/// assert_eq!(usdc, Token::try_new("0xa0B8", 6).expect("valid"));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    address: TokenAddress,
    decimals: Decimals,
    #[cfg_attr(feature = "serde", serde(default))]
    symbol: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    name: Option<String>,
}

impl Token {
    /// Creates a new `Token` without display metadata.
    ///
    /// Construction is infallible because both components are already
    /// validated at their own construction site.
    #[must_use]
    pub const fn new(address: TokenAddress, decimals: Decimals) -> Self {
        Self {
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    /// Validates an address string and a decimal count, then builds the token.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] for a malformed address.
    /// - [`AmmError::InvalidPrecision`] if `decimals > 18`.
    pub fn try_new(address: &str, decimals: u8) -> Result<Self, AmmError> {
        Ok(Self::new(TokenAddress::new(address)?, Decimals::new(decimals)?))
    }

    /// Attaches a ticker symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Attaches a human-readable name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> &TokenAddress {
        &self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns the ticker symbol, if known.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Returns the token name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if both tokens share an address.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.address == other.address
    }

    /// Returns `true` if this token sorts before `other` (by address).
    #[must_use]
    pub fn sorts_before(&self, other: &Self) -> bool {
        self.address < other.address
    }

    /// Converts a whole number of tokens to the smallest raw unit.
    ///
    /// For example, `1` USDC (decimals=6) becomes `1_000_000`.
    pub fn to_raw_amount(&self, whole: u64) -> Amount {
        self.decimals.scale_up(whole)
    }

    /// Parses a decimal quantity of this token into raw units (floored).
    ///
    /// # Errors
    ///
    /// See [`Amount::from_token`].
    pub fn parse_amount(&self, raw: &str) -> Result<Amount, AmmError> {
        Amount::from_token(self.decimals, raw)
    }

    /// Renders a raw amount of this token in whole-token units.
    #[must_use]
    pub fn format_amount(&self, amount: &Amount) -> String {
        amount.to_token(self.decimals)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.address.cmp(&other.address)
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Token {
    /// Symbol when known, address otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => f.write_str(symbol),
            None => write!(f, "{}", self.address),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sample_token(addr: &str, dec: u8) -> Token {
        let Ok(t) = Token::try_new(addr, dec) else {
            panic!("invalid token in test: {addr}/{dec}");
        };
        t
    }

    #[test]
    fn accessors() {
        let tok = sample_token("0x01", 6).with_symbol("USDC").with_name("USD Coin");
        assert_eq!(tok.address().as_str(), "0x01");
        assert_eq!(tok.decimals().get(), 6);
        assert_eq!(tok.symbol(), Some("USDC"));
        assert_eq!(tok.name(), Some("USD Coin"));
    }

    #[test]
    fn try_new_validates() {
        assert!(Token::try_new("", 6).is_err());
        assert!(Token::try_new("0x01", 19).is_err());
    }

    #[test]
    fn identity_is_address_only() {
        let a = sample_token("0xAA", 6).with_symbol("A");
        let b = sample_token("0xaa", 18).with_symbol("B");
        assert_eq!(a, b);
        assert_ne!(a, sample_token("0xab", 6));
    }

    #[test]
    fn hash_consistency() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(sample_token("0xaa", 6).with_symbol("A"));
        assert!(set.contains(&sample_token("0xAA", 0)));
    }

    #[test]
    fn ordering_by_address() {
        let lo = sample_token("0x01", 18);
        let hi = sample_token("0x02", 6);
        assert!(lo < hi);
        assert!(lo.sorts_before(&hi));
        assert!(!hi.sorts_before(&lo));
    }

    #[test]
    fn raw_amount_helpers() {
        let tok = sample_token("0x01", 6);
        assert_eq!(tok.to_raw_amount(5), Amount::new(5_000_000u32));
        assert_eq!(tok.parse_amount("0.25"), Ok(Amount::new(250_000u32)));
        assert_eq!(tok.format_amount(&Amount::new(250_000u32)), "0.25");
    }

    #[test]
    fn display_prefers_symbol() {
        assert_eq!(sample_token("0x01", 6).to_string(), "0x01");
        assert_eq!(sample_token("0x01", 6).with_symbol("DAI").to_string(), "DAI");
    }
}
