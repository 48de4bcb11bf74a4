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

//! REST API plumbing around the receipt store.
//!
//! ## Endpoints
//!
//! - `POST /receipts/process` - Submit a receipt for scoring, returns its id
//! - `GET /receipts/{id}/points` - Look up the score of an accepted receipt
//! - `GET /receipts` - List all accepted receipts in acceptance order
//!
//! ## Example Usage
//!
//! ```bash
//! curl -X POST http://localhost:8080/receipts/process \
//!   -H "Content-Type: application/json" \
//!   -d '{"retailer": "Target", "purchaseDate": "2022-01-02", "purchaseTime": "13:13",
//!        "items": [{"shortDescription": "Pepsi - 12-oz", "price": "1.25"}], "total": "1.25"}'
//!
//! curl http://localhost:8080/receipts/<id>/points
//! curl http://localhost:8080/receipts
//! ```

use crate::error::ReceiptError;
use crate::receipt::Receipt;
use crate::store::ReceiptStore;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// === Response DTOs ===

/// Response body for an accepted receipt.
#[derive(Debug, Serialize)]
struct IdResponse {
    id: String,
}

/// Response body for a points lookup. The score travels as a string.
#[derive(Debug, Serialize)]
struct PointsResponse {
    points: String,
}

/// Response body for the full receipt log.
#[derive(Debug, Serialize)]
struct ReceiptsResponse {
    receipts: Vec<Receipt>,
}

/// Response body for errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// === Application State ===

/// Shared application state containing the receipt store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReceiptStore>,
}

// === Error Handling ===

/// Wrapper for converting [`ReceiptError`] into HTTP responses.
pub struct AppError(ReceiptError);

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ReceiptError::EmptyPayload => StatusCode::BAD_REQUEST,
            ReceiptError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

// === Handlers ===

/// POST /receipts/process - Score a receipt and return its identifier.
async fn process_receipt(
    State(state): State<AppState>,
    Json(receipt): Json<Receipt>,
) -> Result<(StatusCode, Json<IdResponse>), AppError> {
    let id = state.store.accept(receipt)?;
    Ok((StatusCode::CREATED, Json(IdResponse { id: id.to_string() })))
}

/// GET /receipts/{id}/points - Look up a recorded score.
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    match state.store.lookup(&id) {
        Some(points) => Ok(Json(PointsResponse {
            points: points.to_string(),
        })),
        None => Err(ReceiptError::NotFound(id).into()),
    }
}

/// GET /receipts - List all accepted receipts.
async fn list_receipts(State(state): State<AppState>) -> Json<ReceiptsResponse> {
    Json(ReceiptsResponse {
        receipts: state.store.receipts(),
    })
}

// === Router ===

/// Builds the API router over a shared store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/receipts", get(list_receipts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
