// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Property-based tests for the points calculator and store.
//!
//! These tests verify invariants that should hold for any receipt,
//! including receipts full of unparsable garbage.

use proptest::prelude::*;
use receipt_points_rs::{
    Item, Receipt, ReceiptStore, RuleScore, compute_points, date_time_points, description_points,
    item_pair_points, retailer_points, total_points,
};

// =============================================================================
// Arbitrary Strategies
// =============================================================================

fn arb_item() -> impl Strategy<Value = Item> {
    (any::<String>(), any::<String>()).prop_map(|(short_description, price)| Item {
        short_description,
        price,
    })
}

fn arb_receipt() -> impl Strategy<Value = Receipt> {
    (
        any::<String>(),
        any::<String>(),
        any::<String>(),
        prop::collection::vec(arb_item(), 0..6),
        any::<String>(),
    )
        .prop_map(|(retailer, purchase_date, purchase_time, items, total)| Receipt {
            id: None,
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
}

// =============================================================================
// Calculator Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// The calculator is a pure function: same receipt, same score.
    #[test]
    fn calculator_is_idempotent(receipt in arb_receipt()) {
        prop_assert_eq!(compute_points(&receipt), compute_points(&receipt));
    }

    /// The calculator never panics, whatever the input looks like.
    #[test]
    fn calculator_total_is_sum_of_rules(receipt in arb_receipt()) {
        let score = compute_points(&receipt);

        let mut expected = retailer_points(&receipt.retailer);
        expected += total_points(&receipt.total).or_zero();
        expected += item_pair_points(receipt.items.len());
        for item in &receipt.items {
            expected += description_points(item).or_zero();
        }
        expected += date_time_points(&receipt.purchase_date, &receipt.purchase_time).or_zero();

        prop_assert_eq!(score, expected);
    }

    /// Punctuation and whitespace never change the retailer score.
    #[test]
    fn retailer_score_ignores_punctuation(name in "[A-Za-z0-9_]{0,20}", noise in "[ &!,.-]{0,10}") {
        let spiked = format!("{noise}{name}{noise}");
        prop_assert_eq!(retailer_points(&spiked), name.len() as i64);
    }

    /// The pair rule follows floor(n / 2) * 5 exactly.
    #[test]
    fn pair_rule_is_floor_division(n in 0usize..100) {
        prop_assert_eq!(item_pair_points(n), (n / 2) as i64 * 5);
    }

    /// Rounding law: the per-item contribution is ceil(price * 0.2) when
    /// plain rounding would understate the product, else round(price * 0.2).
    #[test]
    fn description_rounding_law(cents in 0i64..=1_000_000) {
        let price = format!("{}.{:02}", cents / 100, cents % 100);
        let item = Item {
            short_description: "abc".to_string(),
            price,
        };

        // price * 0.2 == cents / 500, computed in integer arithmetic:
        // half-away-from-zero rounding for non-negative values, then the
        // +1 correction whenever the rounded value understates.
        let rounded = (cents + 250) / 500;
        let expected = rounded + i64::from(rounded * 500 < cents);

        prop_assert_eq!(description_points(&item), RuleScore::Scored(expected));
    }

    /// Items whose trimmed length is not a multiple of 3 score zero and
    /// never report degradation, even with garbage prices.
    #[test]
    fn non_qualifying_lengths_score_zero(price in any::<String>()) {
        let item = Item {
            short_description: "ab".to_string(),
            price,
        };
        prop_assert_eq!(description_points(&item), RuleScore::Scored(0));
    }
}

// =============================================================================
// Store Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any receipt with a populated retailer is accepted, and lookup
    /// immediately agrees with the direct calculation.
    #[test]
    fn accept_then_lookup_agrees_with_calculator(
        retailer in "[a-zA-Z0-9 &]{1,20}",
        receipt in arb_receipt(),
    ) {
        let mut receipt = receipt;
        receipt.retailer = retailer;
        let expected = compute_points(&receipt);

        let store = ReceiptStore::new();
        let id = store.accept(receipt).unwrap();
        prop_assert_eq!(store.lookup(id.as_str()), Some(expected));
    }

    /// Identifiers never collide within a store.
    #[test]
    fn ids_are_distinct(count in 1usize..20) {
        let store = ReceiptStore::new();
        let mut ids = std::collections::HashSet::new();

        for _ in 0..count {
            let receipt = Receipt {
                id: None,
                retailer: "Shop".to_string(),
                purchase_date: String::new(),
                purchase_time: String::new(),
                items: Vec::new(),
                total: String::new(),
            };
            let id = store.accept(receipt).unwrap();
            prop_assert!(ids.insert(id.as_str().to_string()));
        }
    }
}
