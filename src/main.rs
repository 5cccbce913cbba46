//! duty-pharmacy CLI entry point
//!
//! On-duty pharmacy finder - CLI + HTTP API

use duty_pharmacy::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
