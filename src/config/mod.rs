//! Declarative configuration structs.
//!
//! [`PairConfig`] describes a reserve snapshot from which a
//! [`Pair`](crate::pools::Pair) is built via
//! [`FromConfig`](crate::traits::FromConfig); [`SearchConfig`] bounds the
//! best-trade search.

mod pair;
mod search;

pub use pair::PairConfig;
pub use search::{DEFAULT_MAX_HOPS, DEFAULT_MAX_RESULTS, MAX_HOPS_LIMIT, SearchConfig};
