//! Chain-agnostic token address.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// A chain-agnostic address identifying a token.
///
/// The address is stored in canonical form: surrounding whitespace is
/// trimmed and ASCII letters are lower-cased, so two addresses compare
/// equal exactly when they match case-insensitively.  Only ASCII
/// alphanumerics and `_` are accepted, which covers hex (`0xabc…`),
/// base58 and plain symbolic identifiers used in tests.
///
/// # Examples
///
/// ```
/// use swap_router::domain::TokenAddress;
///
/// let a: TokenAddress = "0xC02aaA39".parse().expect("valid");
/// let b = TokenAddress::new(" 0xc02aaa39 ").expect("valid");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "0xc02aaa39");
///
/// let c = TokenAddress::from_bytes(&[0xab, 0x01]);
/// assert_eq!(c.as_str(), "0xab01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TokenAddress(String);

impl TokenAddress {
    /// Validates and canonicalizes an address string.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if the trimmed input is empty or
    /// contains characters outside `[0-9A-Za-z_]`.
    pub fn new(raw: &str) -> Result<Self, AmmError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AmmError::InvalidToken("address must not be empty"));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(AmmError::InvalidToken(
                "address may only contain ASCII alphanumerics and '_'",
            ));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Builds a `0x`-prefixed lower-hex address from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TokenAddress {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, AmmError> {
        Self::new(s)
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, AmmError> {
        Self::new(&value)
    }
}

impl From<TokenAddress> for String {
    fn from(value: TokenAddress) -> Self {
        value.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
