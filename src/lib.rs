//! Stock control service library.
//!
//! Stores product records (name, brand, expiration date, product code) in an
//! embedded DuckDB database and exposes create, list, filter, and delete
//! operations. The HTTP layer in [`http`] serves these over JSON.
//!
//! # Quick start
//!
//! ```no_run
//! use stock_control::StockControl;
//!
//! let stock = StockControl::builder().in_memory(true).build().unwrap();
//!
//! let products = stock.products().list_all().unwrap();
//! ```

pub mod async_client;
pub mod config;
pub mod connection;
pub mod dates;
pub mod error;
pub mod http;
pub mod models;
pub mod sql_builder;
pub mod store;

pub use async_client::AsyncStockControl;
pub use connection::Connection;
pub use error::{Result, StockError};
pub use models::{NewProduct, Product, ProductFilter};
pub use sql_builder::SqlBuilder;
pub use store::ProductStore;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// StockControlBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StockControl`] instance.
///
/// Use [`StockControl::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StockControlBuilder::build).
#[derive(Default)]
pub struct StockControlBuilder {
    db_path: Option<PathBuf>,
    in_memory: bool,
}

impl StockControlBuilder {
    /// Set the database file location.
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/stock-control/stock.duckdb` on Linux).
    pub fn db_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.db_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a transient in-memory database instead of a file.
    ///
    /// Data is lost when the instance is dropped. Defaults to `false`.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Build the instance, opening the database and applying the schema.
    pub fn build(self) -> Result<StockControl> {
        if self.in_memory {
            return Ok(StockControl {
                conn: Connection::open_in_memory()?,
            });
        }

        let path = self.db_path.unwrap_or_else(config::default_db_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(StockControl {
            conn: Connection::open(path)?,
        })
    }
}

// ---------------------------------------------------------------------------
// StockControl
// ---------------------------------------------------------------------------

/// The main entry point for the stock control library.
///
/// Wraps a [`Connection`] (which owns the DuckDB database and its schema)
/// and exposes the product store as a lightweight borrowing wrapper.
///
/// Created via [`StockControl::builder()`].
pub struct StockControl {
    conn: Connection,
}

impl StockControl {
    /// Create a new builder for configuring the instance.
    pub fn builder() -> StockControlBuilder {
        StockControlBuilder::default()
    }

    /// Access the product store interface.
    ///
    /// Returns a lightweight wrapper that borrows from the underlying
    /// connection and provides the CRUD and filter operations.
    pub fn products(&self) -> ProductStore<'_> {
        ProductStore::new(&self.conn)
    }

    /// Execute a raw SQL query against the database.
    ///
    /// Provides escape-hatch access for queries not covered by the store
    /// interface.
    ///
    /// # Arguments
    ///
    /// * `query` - SQL string with `?` positional placeholders.
    /// * `params` - Parameter values corresponding to the placeholders.
    pub fn sql(
        &self,
        query: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        self.conn.execute(query, params)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
