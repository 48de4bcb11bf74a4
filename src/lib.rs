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

//! # Receipt Points
//!
//! This library scores purchase receipts against a fixed set of
//! reward-points rules and stores the results for lookup by an identifier
//! issued at acceptance time.
//!
//! ## Core Components
//!
//! - [`compute_points`]: Pure calculator summing five independent scoring rules
//! - [`ReceiptStore`]: Identifier-indexed store of accepted receipts and scores
//! - [`Receipt`] / [`Item`]: The submitted data model
//! - [`ReceiptError`]: Error types for rejection and lookup misses
//!
//! ## Example
//!
//! ```
//! use receipt_points_rs::{Item, Receipt, ReceiptStore, compute_points};
//!
//! let store = ReceiptStore::new();
//! let receipt = Receipt {
//!     id: None,
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:13".to_string(),
//!     items: vec![Item {
//!         short_description: "Pepsi - 12-oz".to_string(),
//!         price: "1.25".to_string(),
//!     }],
//!     total: "1.25".to_string(),
//! };
//!
//! let points = compute_points(&receipt);
//! let id = store.accept(receipt).unwrap();
//! assert_eq!(store.lookup(id.as_str()), Some(points));
//! ```
//!
//! ## Thread Safety
//!
//! The store handles concurrent access from multiple request workers;
//! accepts and lookups never block each other beyond brief map and log
//! operations. The calculator itself is a pure function with no shared
//! state.

mod base;
pub mod error;
pub mod http;
mod points;
mod receipt;
mod store;

pub use base::ReceiptId;
pub use error::ReceiptError;
pub use points::{
    RuleScore, compute_points, date_time_points, description_points, item_pair_points,
    retailer_points, total_points,
};
pub use receipt::{Item, Receipt};
pub use store::ReceiptStore;
