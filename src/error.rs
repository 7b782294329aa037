#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StockError {
    /// Reclassify a DuckDB failure as a `ConstraintViolation` when the
    /// underlying message indicates a unique-index breach. DuckDB reports
    /// these as `Constraint Error: Duplicate key "..." violates unique
    /// constraint`, which duckdb-rs surfaces only as message text.
    pub fn from_duckdb(e: duckdb::Error) -> Self {
        let msg = e.to_string();
        if msg.contains("Duplicate key") || msg.contains("unique constraint") {
            StockError::ConstraintViolation(msg)
        } else {
            StockError::DuckDb(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
