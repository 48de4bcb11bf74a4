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

//! Receipt store.
//!
//! The [`ReceiptStore`] assigns identifiers to accepted receipts and
//! records their computed scores for later lookup. It is constructed once
//! at process start and shared by reference across request handlers; all
//! state is in-memory and lives for the life of the process.
//!
//! # Thread Safety
//!
//! The score map is a [`DashMap`] and the ordered receipt log a
//! [`Mutex`]-guarded `Vec`, so `accept` and `lookup` may run concurrently
//! from any number of threads. Concurrent `accept` calls produce distinct
//! identifiers; the log's append order reflects completion order.

use crate::base::ReceiptId;
use crate::error::ReceiptError;
use crate::points::compute_points;
use crate::receipt::Receipt;
use dashmap::DashMap;
use parking_lot::Mutex;

/// Identifier-indexed store of accepted receipts and their scores.
///
/// # Invariants
///
/// - Every identifier in the score map corresponds to exactly one receipt
///   that passed the emptiness guard.
/// - The score map is append-only: entries are never mutated or removed.
/// - Identifiers are never reused.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    /// Computed scores indexed by receipt identifier.
    scores: DashMap<ReceiptId, i64>,
    /// Accepted receipts in acceptance order, ids attached.
    log: Mutex<Vec<Receipt>>,
}

impl ReceiptStore {
    /// Creates a new store with no receipts.
    pub fn new() -> Self {
        ReceiptStore {
            scores: DashMap::new(),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Accepts a receipt: validates, scores, and records it.
    ///
    /// Any identifier supplied by the caller is discarded and replaced by
    /// a freshly generated one, which becomes the sole key for later
    /// lookup.
    ///
    /// # Errors
    ///
    /// [`ReceiptError::EmptyPayload`] if every field of the receipt is
    /// blank. Partial receipts are accepted and scored as-is.
    pub fn accept(&self, mut receipt: Receipt) -> Result<ReceiptId, ReceiptError> {
        if receipt.is_empty() {
            return Err(ReceiptError::EmptyPayload);
        }

        let id = ReceiptId::generate();
        receipt.id = Some(id.clone());

        let points = compute_points(&receipt);
        tracing::debug!(%id, points, retailer = %receipt.retailer, "receipt accepted");

        // Record the score before the log entry so a lookup racing with
        // this accept never sees a logged receipt without a score.
        self.scores.insert(id.clone(), points);
        self.log.lock().push(receipt);

        Ok(id)
    }

    /// Returns the recorded score for an identifier, or `None` if the
    /// identifier was never issued (including the empty string).
    pub fn lookup(&self, id: &str) -> Option<i64> {
        self.scores.get(id).map(|score| *score)
    }

    /// Snapshot of all accepted receipts, in acceptance order.
    pub fn receipts(&self) -> Vec<Receipt> {
        self.log.lock().clone()
    }

    /// Number of accepted receipts.
    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
