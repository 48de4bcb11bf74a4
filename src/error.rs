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

//! Error types for receipt processing.

use thiserror::Error;

/// Receipt processing errors.
///
/// Display strings are the exact messages returned to API clients. Parse
/// failures inside an accepted receipt are not errors: they degrade the
/// affected scoring rule to zero and are never surfaced here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    /// Submission failed the blank-receipt guard: every field was empty.
    #[error("Empty Payload")]
    EmptyPayload,

    /// No score is recorded under the requested identifier. The id is
    /// echoed back verbatim, including the empty string.
    #[error("No receipt found with id: {0}")]
    NotFound(String),
}
