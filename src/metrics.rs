//! Summary metrics derived from a loaded notification collection.
//!
//! These are plain reductions recomputed from the current collection on
//! every render. Nothing here is stored or incrementally maintained; the
//! dashboard shows the all-zero [`Summary`] while data is still loading.

use std::collections::HashSet;

use crate::models::WhaleNotification;

/// Aggregate metrics over one fetched collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Count of distinct token symbols.
    pub unique_tokens: usize,
    /// Sum of buyer counts across all records.
    pub total_buys: u64,
    /// Sum of seller counts across all records.
    pub total_sells: u64,
}

impl Summary {
    /// Computes the summary for a collection. Pure: the same input always
    /// yields the same output.
    pub fn compute(records: &[WhaleNotification]) -> Self {
        let unique_tokens = records
            .iter()
            .map(|r| r.symbol.as_str())
            .collect::<HashSet<_>>()
            .len();
        Self {
            unique_tokens,
            total_buys: records.iter().map(|r| r.buyer_count).sum(),
            total_sells: records.iter().map(|r| r.seller_count).sum(),
        }
    }

    /// Total buys minus total sells, exact integer arithmetic.
    pub fn net_activity(&self) -> i64 {
        self.total_buys as i64 - self.total_sells as i64
    }
}
