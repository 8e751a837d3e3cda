//! Contiguous chains of pairs.

use core::fmt;

use crate::domain::{Price, Token};
use crate::error::{AmmError, Result};
use crate::pools::Pair;

/// A non-empty sequence of pairs leading from `input` to `output`.
///
/// # Invariants
///
/// - `pairs` is non-empty.
/// - The first pair involves `input`, every consecutive pair shares the
///   token reached so far, and the walk ends at `output`.
/// - `path` lists the visited tokens: `path[0] == input`,
///   `path[hops] == output`, `path.len() == pairs.len() + 1`.
///
/// # Examples
///
/// ```
/// use swap_router::domain::{Amount, Token, TokenAmount};
/// use swap_router::pools::Pair;
/// use swap_router::routing::Route;
///
/// let t = |a: &str| Token::try_new(a, 18).expect("valid");
/// let (a, b, c) = (t("0x0a"), t("0x0b"), t("0x0c"));
/// let p = |x: &Token, y: &Token| {
///     Pair::new(
///         TokenAmount::from_wei(x.clone(), Amount::new(100u32)),
///         TokenAmount::from_wei(y.clone(), Amount::new(200u32)),
///     )
///     .expect("distinct")
/// };
///
/// let route = Route::new(vec![p(&a, &b), p(&b, &c)], a.clone(), c.clone()).expect("contiguous");
/// assert_eq!(route.path(), &[a.clone(), b.clone(), c.clone()]);
/// assert_eq!(route.hops(), 2);
///
/// // disconnected pairs are rejected
/// let d = t("0x0d");
/// assert!(Route::new(vec![p(&a, &b), p(&c, &d)], a, d).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pairs: Vec<Pair>,
    path: Vec<Token>,
    input: Token,
    output: Token,
}

impl Route {
    /// Validates contiguity and builds the route.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidRoute`] if `pairs` is empty, the first
    /// pair does not involve `input`, two consecutive pairs do not connect,
    /// or the walk does not end at `output`.
    pub fn new(pairs: Vec<Pair>, input: Token, output: Token) -> Result<Self> {
        let Some(first) = pairs.first() else {
            return Err(AmmError::InvalidRoute("route requires at least one pair"));
        };
        if !first.involves_token(&input) {
            return Err(AmmError::InvalidRoute(
                "first pair does not involve the input token",
            ));
        }

        let mut path = Vec::with_capacity(pairs.len() + 1);
        path.push(input.clone());
        for pair in &pairs {
            let current = path.last().unwrap_or(&input);
            let next = pair
                .other_token(current)
                .map_err(|_| AmmError::InvalidRoute("consecutive pairs are not connected"))?
                .clone();
            path.push(next);
        }

        if path.last() != Some(&output) {
            return Err(AmmError::InvalidRoute(
                "route does not end at the output token",
            ));
        }

        Ok(Self {
            pairs,
            path,
            input,
            output,
        })
    }

    /// The pairs in traversal order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// The visited tokens, input first.
    #[must_use]
    pub fn path(&self) -> &[Token] {
        &self.path
    }

    /// The token sold.
    #[must_use]
    pub const fn input(&self) -> &Token {
        &self.input
    }

    /// The token bought.
    #[must_use]
    pub const fn output(&self) -> &Token {
        &self.output
    }

    /// Number of pairs traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.pairs.len()
    }

    /// Product of each hop's directional mid price: the marginal price of
    /// `input` in units of `output` before any trade.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroReserve`] if any pair on the route is empty.
    pub fn mid_price(&self) -> Result<Price> {
        let mut hops = self.pairs.iter().zip(&self.path);
        let Some((first, token)) = hops.next() else {
            return Err(AmmError::InvalidRoute("route requires at least one pair"));
        };
        hops.try_fold(first.mid_price(token)?, |acc, (pair, token)| {
            acc.multiply(&pair.mid_price(token)?)
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
