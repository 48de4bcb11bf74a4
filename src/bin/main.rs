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

use clap::Parser;
use receipt_points_rs::ReceiptStore;
use receipt_points_rs::http::{AppState, router};
use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Receipt Points - HTTP service scoring purchase receipts
///
/// Receipts posted to /receipts/process are scored against the fixed
/// reward-points rules; the returned id retrieves the score from
/// /receipts/{id}/points. All state is in-memory and resets on restart.
#[derive(Parser, Debug)]
#[command(name = "receipt-points-rs")]
#[command(about = "A receipt scoring service with reward-points lookup", long_about = None)]
struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:8080", value_name = "ADDR")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState {
        store: Arc::new(ReceiptStore::new()),
    };
    let app = router(state);

    let listener = match TcpListener::bind(args.listen).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error binding to {}: {}", args.listen, e);
            process::exit(1);
        }
    };

    tracing::info!(addr = %args.listen, "receipt points server listening");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        process::exit(1);
    }
}
