//! Aggregate dashboard metrics derived from customer records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Derived aggregate counts and sums over the current record set.
///
/// Never persisted: a snapshot is recomputed from scratch on every fetch and
/// discarded with the view that requested it.
///
/// `pending_orders` and `new_users` are aliases of `total_orders` and
/// `total_users`: the snapshot stays fully derivable from its input rather
/// than carrying placeholder constants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Number of customer records.
    pub total_users: usize,
    /// Sum of line-item counts across all records.
    pub total_products: usize,
    /// Number of orders; one order per record, by convention.
    pub total_orders: usize,
    /// Sum of all line-item prices across all records.
    pub total_revenue: Decimal,
    /// Alias of `total_orders`.
    pub pending_orders: usize,
    /// Alias of `total_users`.
    pub new_users: usize,
}

/// Reduces a record set to its [`MetricsSnapshot`].
///
/// Pure and total: no input fails, and the empty slice yields the all-zero
/// snapshot. Prices were already coerced leniently at the record boundary,
/// so the revenue sum cannot be poisoned by malformed documents.
#[must_use]
pub fn aggregate(records: &[Record]) -> MetricsSnapshot {
    let total_users = records.len();
    let total_orders = records.len();
    let total_products = records.iter().map(|r| r.items.len()).sum();
    let total_revenue = records
        .iter()
        .flat_map(|r| &r.items)
        .map(|item| item.price)
        .sum();

    MetricsSnapshot {
        total_users,
        total_products,
        total_orders,
        total_revenue,
        pending_orders: total_orders,
        new_users: total_users,
    }
}
