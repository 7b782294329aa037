use crate::async_client::AsyncStockControl;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async store instance. Handles dispatching blocking DuckDB
    /// operations to a thread pool internally.
    pub stock: AsyncStockControl,
}
