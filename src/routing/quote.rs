//! Tri-state result of a best-trade lookup.

use super::Trade;

/// Outcome of asking for the best trade.
///
/// Callers that quote asynchronously need to tell "not computed yet" apart
/// from "computed, no route".  A plain `Option<Trade>` collapses the two.
///
/// # Examples
///
/// ```
/// use swap_router::routing::TradeQuote;
///
/// let pending = TradeQuote::default();
/// assert!(pending.is_pending());
///
/// let empty = TradeQuote::from(None);
/// assert!(!empty.is_pending());
/// assert!(empty.trade().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TradeQuote {
    /// The search has not run.
    #[default]
    Pending,
    /// The search ran and no route can carry the amount.
    Empty,
    /// The best trade found.
    Exist(Trade),
}

impl TradeQuote {
    /// Returns `true` until a search result has been recorded.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if a trade was found.
    #[must_use]
    pub const fn exists(&self) -> bool {
        matches!(self, Self::Exist(_))
    }

    /// The trade, if one was found.
    #[must_use]
    pub const fn trade(&self) -> Option<&Trade> {
        match self {
            Self::Exist(trade) => Some(trade),
            Self::Pending | Self::Empty => None,
        }
    }

    /// Consumes the quote, yielding the trade if one was found.
    #[must_use]
    pub fn into_trade(self) -> Option<Trade> {
        match self {
            Self::Exist(trade) => Some(trade),
            Self::Pending | Self::Empty => None,
        }
    }
}

impl From<Option<Trade>> for TradeQuote {
    fn from(trade: Option<Trade>) -> Self {
        trade.map_or(Self::Empty, Self::Exist)
    }
}
