//! Async wrapper around [`StockControl`] for use from the HTTP handlers.
//!
//! Runs all store operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! DuckDB queries are CPU-bound but fast, making this approach efficient.
//!
//! # Example
//!
//! ```no_run
//! use stock_control::AsyncStockControl;
//!
//! #[tokio::main]
//! async fn main() {
//!     let stock = AsyncStockControl::builder().in_memory(true).build().await.unwrap();
//!
//!     // Run any sync store method via closure
//!     let products = stock.run(|s| s.products().list_all()).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{Result, StockError};
use crate::StockControl;

// ---------------------------------------------------------------------------
// AsyncStockControlBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStockControl`] instance.
#[derive(Default)]
pub struct AsyncStockControlBuilder {
    db_path: Option<PathBuf>,
    in_memory: bool,
}

impl AsyncStockControlBuilder {
    /// Set the database file location.
    pub fn db_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.db_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a transient in-memory database instead of a file.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Build the async instance, opening the database on the blocking pool
    /// so initialization won't block the async event loop.
    pub async fn build(self) -> Result<AsyncStockControl> {
        tokio::task::spawn_blocking(move || {
            let mut builder = StockControl::builder();
            if let Some(path) = self.db_path {
                builder = builder.db_path(path);
            }
            builder = builder.in_memory(self.in_memory);
            let stock = builder.build()?;
            Ok(AsyncStockControl {
                inner: Arc::new(Mutex::new(stock)),
            })
        })
        .await
        .map_err(|e| StockError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncStockControl
// ---------------------------------------------------------------------------

/// Async wrapper around [`StockControl`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`StockControl`] is
/// protected by a [`Mutex`] since the DuckDB connection is not `Sync`.
pub struct AsyncStockControl {
    inner: Arc<Mutex<StockControl>>,
}

impl AsyncStockControl {
    /// Create a new builder for configuring the async instance.
    pub fn builder() -> AsyncStockControlBuilder {
        AsyncStockControlBuilder::default()
    }

    /// Run a sync store operation on the blocking thread pool.
    ///
    /// The closure receives a `&StockControl` reference and should return a
    /// `Result<T>`. The operation runs on a dedicated blocking thread,
    /// keeping the async event loop free.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use stock_control::AsyncStockControl;
    /// # async fn example() -> stock_control::Result<()> {
    /// # let stock = AsyncStockControl::builder().in_memory(true).build().await?;
    /// let products = stock.run(|s| s.products().list_all()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StockControl) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let stock = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = stock
                .lock()
                .map_err(|_| StockError::InvalidArgument("Store lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StockError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
