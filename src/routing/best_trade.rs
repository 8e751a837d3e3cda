//! Bounded depth-first search for the best trade across a set of pairs.
//!
//! The search walks every simple path (no pair used twice) of at most
//! `max_hops` pairs that starts at the input token, keeping each path that
//! reaches the output token as a candidate [`Trade`].  Candidates are
//! ranked with [`trade_comparator`] and the best `max_results` are kept.
//!
//! # Traversal
//!
//! The traversal uses an explicit stack of frames instead of recursion.
//! Each frame carries the frontier amount (token and running quantity),
//! the indices of the pairs already used on its path, and a cursor into
//! the pair list.  Advancing the cursor of the top frame before pushing a
//! child reproduces recursive pre-order exactly, so candidates are
//! discovered in a deterministic order and ties on amount and hop count
//! keep the earliest-discovered trade.
//!
//! Exact-output searches run the same traversal backwards from the output
//! token using `get_input_amount`.
//!
//! # Pruning
//!
//! A hop that fails with a liquidity shortfall (empty pair, output that
//! rounds to zero, output that would drain the pool) abandons that branch
//! only; the remaining branches are still explored.

use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::domain::{Token, TokenAmount};
use crate::error::{AmmError, Result};
use crate::pools::Pair;

use super::{Route, Trade, trade_comparator};

/// Direction of the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// From the input token towards the output token.
    Forward,
    /// From the output token back towards the input token.
    Backward,
}

/// One level of the explicit DFS stack.
#[derive(Debug)]
struct Frame {
    /// Amount held at the frontier of this path.
    amount: TokenAmount,
    /// Indices into the pair list, in traversal order.
    used: Vec<usize>,
    /// Next pair index to consider from this frame.
    cursor: usize,
}

/// Best exact-input trade from `amount_in` to `token_out`.
///
/// Returns `Ok(None)` when no route of at most `max_hops` pairs can carry
/// the amount.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
///
/// # Examples
///
/// ```
/// use swap_router::config::SearchConfig;
/// use swap_router::domain::{Amount, Token, TokenAmount};
/// use swap_router::pools::Pair;
/// use swap_router::routing::best_trade_exact_in;
///
/// let a = Token::try_new("0x0a", 18).expect("valid");
/// let b = Token::try_new("0x0b", 18).expect("valid");
/// let pair = Pair::new(
///     TokenAmount::from_wei(a.clone(), Amount::new(10u32)),
///     TokenAmount::from_wei(b.clone(), Amount::new(20u32)),
/// )
/// .expect("distinct");
///
/// let trade = best_trade_exact_in(
///     &[pair],
///     &TokenAmount::from_wei(a, Amount::new(1u32)),
///     &b,
///     &SearchConfig::default(),
/// )
/// .expect("valid config")
/// .expect("a route exists");
/// assert_eq!(trade.output_amount().amount(), &Amount::new(1u32));
/// ```
pub fn best_trade_exact_in(
    pairs: &[Pair],
    amount_in: &TokenAmount,
    token_out: &Token,
    config: &SearchConfig,
) -> Result<Option<Trade>> {
    Ok(best_trades_exact_in(pairs, amount_in, token_out, config)?
        .into_iter()
        .next())
}

/// Best exact-output trade from `token_in` to `amount_out`.
///
/// Returns `Ok(None)` when no route of at most `max_hops` pairs can supply
/// the amount.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
pub fn best_trade_exact_out(
    pairs: &[Pair],
    token_in: &Token,
    amount_out: &TokenAmount,
    config: &SearchConfig,
) -> Result<Option<Trade>> {
    Ok(best_trades_exact_out(pairs, token_in, amount_out, config)?
        .into_iter()
        .next())
}

/// Up to `max_results` exact-input trades, best first.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
pub fn best_trades_exact_in(
    pairs: &[Pair],
    amount_in: &TokenAmount,
    token_out: &Token,
    config: &SearchConfig,
) -> Result<Vec<Trade>> {
    config.validate()?;
    let mut trades = Vec::new();
    for used in search(pairs, amount_in, token_out, config, Direction::Forward) {
        let hops = pick(pairs, used.iter().copied());
        let built = Route::new(hops, amount_in.token().clone(), token_out.clone())
            .and_then(|route| Trade::exact_in(route, amount_in.clone()));
        match built {
            Ok(trade) => trades.push(trade),
            Err(e) => prune(used.last().copied(), &e),
        }
    }
    Ok(rank(trades, config))
}

/// Up to `max_results` exact-output trades, best first.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
pub fn best_trades_exact_out(
    pairs: &[Pair],
    token_in: &Token,
    amount_out: &TokenAmount,
    config: &SearchConfig,
) -> Result<Vec<Trade>> {
    config.validate()?;
    let mut trades = Vec::new();
    for used in search(pairs, amount_out, token_in, config, Direction::Backward) {
        // discovered output-first; routes run input-first
        let hops = pick(pairs, used.iter().rev().copied());
        let built = Route::new(hops, token_in.clone(), amount_out.token().clone())
            .and_then(|route| Trade::exact_out(route, amount_out.clone()));
        match built {
            Ok(trade) => trades.push(trade),
            Err(e) => prune(used.last().copied(), &e),
        }
    }
    Ok(rank(trades, config))
}

/// Stable sort by [`trade_comparator`] and truncate to `max_results`.
fn rank(mut trades: Vec<Trade>, config: &SearchConfig) -> Vec<Trade> {
    trades.sort_by(trade_comparator);
    trades.truncate(config.max_results());
    if let Some(best) = trades.first() {
        debug!(
            kept = trades.len(),
            hops = best.route().hops(),
            input = %best.input_amount(),
            output = %best.output_amount(),
            "best trade selected"
        );
    }
    trades
}

/// Walks every simple path from `start` of at most `max_hops` pairs and
/// returns, in discovery order, the pair indices of each path that
/// reaches `target`.
fn search(
    pairs: &[Pair],
    start: &TokenAmount,
    target: &Token,
    config: &SearchConfig,
    direction: Direction,
) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    if start.token() == target {
        trace!(token = %target, "input and output token are identical");
        return found;
    }

    let mut explored = 0usize;
    let mut stack = vec![Frame {
        amount: start.clone(),
        used: Vec::new(),
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some((index, pair)) = next_candidate(pairs, frame) else {
            stack.pop();
            continue;
        };
        frame.cursor = index + 1;
        explored += 1;

        let hop = match direction {
            Direction::Forward => pair.get_output_amount(&frame.amount),
            Direction::Backward => pair.get_input_amount(&frame.amount),
        };
        let reached = match hop {
            Ok((amount, _)) => amount,
            Err(e) => {
                prune(Some(index), &e);
                continue;
            }
        };

        let mut used = frame.used.clone();
        used.push(index);

        if reached.token() == target {
            found.push(used);
        } else if used.len() < config.max_hops() {
            stack.push(Frame {
                amount: reached,
                used,
                cursor: 0,
            });
        }
    }

    debug!(
        pairs = pairs.len(),
        explored,
        candidates = found.len(),
        max_hops = config.max_hops(),
        ?direction,
        "best trade search finished"
    );
    found
}

/// Next pair at or after the frame's cursor that is unused on this path
/// and touches the frontier token.
fn next_candidate<'a>(pairs: &'a [Pair], frame: &Frame) -> Option<(usize, &'a Pair)> {
    pairs
        .iter()
        .enumerate()
        .skip(frame.cursor)
        .find(|(i, pair)| !frame.used.contains(i) && pair.involves_token(frame.amount.token()))
}

/// Clones the pairs at `indices`, in iteration order.
fn pick(pairs: &[Pair], indices: impl Iterator<Item = usize>) -> Vec<Pair> {
    indices.filter_map(|i| pairs.get(i)).cloned().collect()
}

fn prune(pair: Option<usize>, error: &AmmError) {
    if error.is_liquidity_shortfall() {
        trace!(?pair, %error, "branch pruned");
    } else {
        debug!(?pair, %error, "branch abandoned");
    }
}
