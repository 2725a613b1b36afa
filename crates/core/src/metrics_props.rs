//! Property-based tests for metric aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::metrics::aggregate;
use crate::record::{LineItem, Record};

fn arb_item() -> impl Strategy<Value = LineItem> {
    (0i64..1_000_000, "[a-z]{1,8}").prop_map(|(price, id)| LineItem {
        name: id.clone(),
        id,
        description: String::new(),
        price: Decimal::from(price),
    })
}

fn arb_record() -> impl Strategy<Value = Record> {
    prop::collection::vec(arb_item(), 0..6).prop_map(|items| Record {
        items,
        ..Record::default()
    })
}

proptest! {
    /// Users and orders are both the record count, for any record set.
    #[test]
    fn users_equal_orders_equal_len(records in prop::collection::vec(arb_record(), 0..20)) {
        let snapshot = aggregate(&records);
        prop_assert_eq!(snapshot.total_users, records.len());
        prop_assert_eq!(snapshot.total_orders, records.len());
        prop_assert_eq!(snapshot.pending_orders, records.len());
        prop_assert_eq!(snapshot.new_users, records.len());
    }

    /// Product count is the sum of per-record item counts.
    #[test]
    fn products_sum_item_counts(records in prop::collection::vec(arb_record(), 0..20)) {
        let expected: usize = records.iter().map(|r| r.items.len()).sum();
        prop_assert_eq!(aggregate(&records).total_products, expected);
    }

    /// Revenue equals the sum over every item price, in any grouping.
    #[test]
    fn revenue_is_grouping_invariant(records in prop::collection::vec(arb_record(), 0..20)) {
        let flat: Decimal = records.iter().flat_map(|r| &r.items).map(|i| i.price).sum();
        prop_assert_eq!(aggregate(&records).total_revenue, flat);

        // Collapsing all items onto one record must not change the total.
        let merged = Record {
            items: records.iter().flat_map(|r| r.items.clone()).collect(),
            ..Record::default()
        };
        prop_assert_eq!(aggregate(&[merged]).total_revenue, flat);
    }

    /// Aggregation never panics and never goes negative on store-shaped input.
    #[test]
    fn snapshot_is_total(records in prop::collection::vec(arb_record(), 0..20)) {
        let snapshot = aggregate(&records);
        prop_assert!(snapshot.total_revenue >= Decimal::ZERO);
    }
}
