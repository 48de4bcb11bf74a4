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

//! Receipt data model.
//!
//! Receipts arrive as JSON with camelCase field names. Numeric fields
//! (`price`, `total`) stay as strings; the points calculator parses them
//! rule by rule so a malformed value degrades only the rule that needs it.

use crate::base::ReceiptId;
use serde::{Deserialize, Serialize};

/// A single purchased line within a receipt.
///
/// Items have no identity beyond their position in the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description; surrounding whitespace is trimmed before scoring.
    #[serde(default)]
    pub short_description: String,
    /// Decimal price string, dollars.cents (e.g. `"2.25"`).
    #[serde(default)]
    pub price: String,
}

/// A purchase receipt submitted for scoring.
///
/// All fields take serde defaults so partial JSON bodies deserialize;
/// missing fields simply score nothing under the rules that read them.
/// The `id` field is accepted on input but always overwritten when the
/// store accepts the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReceiptId>,
    #[serde(default)]
    pub retailer: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub purchase_date: String,
    /// 24-hour time, `HH:MM`.
    #[serde(default)]
    pub purchase_time: String,
    #[serde(default)]
    pub items: Vec<Item>,
    /// Decimal total string, dollars.cents.
    #[serde(default)]
    pub total: String,
}

impl Receipt {
    /// Returns true if every field of the receipt is blank. An explicit
    /// empty-string `id` counts as blank.
    ///
    /// This is the acceptance guard: only a fully blank submission is
    /// rejected. A receipt with any single field populated (even just a
    /// retailer name) is accepted and scored as-is.
    pub fn is_empty(&self) -> bool {
        self.id.as_ref().map_or(true, |id| id.as_str().is_empty())
            && self.items.is_empty()
            && self.purchase_date.is_empty()
            && self.purchase_time.is_empty()
            && self.retailer.is_empty()
            && self.total.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> Receipt {
        Receipt {
            id: None,
            retailer: String::new(),
            purchase_date: String::new(),
            purchase_time: String::new(),
            items: Vec::new(),
            total: String::new(),
        }
    }

    #[test]
    fn blank_receipt_is_empty() {
        assert!(blank().is_empty());
    }

    #[test]
    fn single_populated_field_is_not_empty() {
        let mut r = blank();
        r.retailer = "Target".to_string();
        assert!(!r.is_empty());

        let mut r = blank();
        r.total = "1.25".to_string();
        assert!(!r.is_empty());

        let mut r = blank();
        r.items.push(Item {
            short_description: String::new(),
            price: String::new(),
        });
        assert!(!r.is_empty());

        let mut r = blank();
        r.id = Some(ReceiptId::generate());
        assert!(!r.is_empty());
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [{"shortDescription": "Gatorade", "price": "2.25"}],
            "total": "9.00"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "M&M Corner Market");
        assert_eq!(receipt.purchase_date, "2022-03-20");
        assert_eq!(receipt.purchase_time, "14:33");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Gatorade");
        assert_eq!(receipt.items[0].price, "2.25");
        assert_eq!(receipt.total, "9.00");
        assert!(receipt.id.is_none());
    }

    #[test]
    fn explicit_blank_id_still_counts_as_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"id": ""}"#).unwrap();
        assert!(receipt.is_empty());
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let receipt: Receipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.is_empty());

        let receipt: Receipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert!(!receipt.is_empty());
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn serializes_assigned_id_in_camel_case() {
        let mut receipt: Receipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        receipt.id = Some(ReceiptId::generate());

        let value = serde_json::to_value(&receipt).unwrap();
        assert!(value["id"].is_string());
        assert_eq!(value["retailer"], "Target");
        assert!(value.get("purchaseDate").is_some());
        assert!(value.get("purchase_date").is_none());
    }
}
