use std::path::PathBuf;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "stock.duckdb";

/// Platform-appropriate default database location.
pub fn default_db_path() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("stock-control").join(DB_FILE_NAME)
    } else {
        PathBuf::from(DB_FILE_NAME)
    }
}
