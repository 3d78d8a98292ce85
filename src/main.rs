use std::sync::Arc;

use railbook::{
    services::build::build_network,
    structures::{BookingLedger, Config},
    web::app::{AppState, server},
};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yml".to_string());

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let state = Arc::new(AppState {
        graph: build_network(&config.network),
        ledger: Mutex::new(BookingLedger::new()),
    });

    if let Err(e) = server(state, &config.server.address).await {
        eprintln!("Server failed: {e}");
    }
}
