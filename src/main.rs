use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stock_control::config;
use stock_control::http::{self, state::AppState};
use stock_control::AsyncStockControl;

/// Inventory-tracking HTTP service backed by DuckDB.
#[derive(Parser)]
#[command(name = "stock-control", version, about)]
struct Args {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = config::DEFAULT_BIND_ADDR)]
    addr: String,

    /// Database file location. Defaults to the platform data directory.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Use a transient in-memory database (data is lost on exit).
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut builder = AsyncStockControl::builder().in_memory(args.in_memory);
    if let Some(db) = args.db {
        builder = builder.db_path(db);
    }
    let stock = builder.build().await.expect("Failed to open the database");

    let state = Arc::new(AppState { stock });
    let app = http::router(state);

    tracing::info!(addr = %args.addr, "listening");
    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
