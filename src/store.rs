//! Product store operations backed by the DuckDB `products` table.
//!
//! `ProductStore` borrows from a [`Connection`] and exposes the CRUD and
//! filter methods. Every operation is a single SQL statement, so each either
//! fully succeeds or fails with no side effects.

use crate::connection::Connection;
use crate::error::{Result, StockError};
use crate::models::{NewProduct, Product, ProductFilter};
use crate::sql_builder::SqlBuilder;

/// Timestamp format used for binding datetime parameters.
const SQL_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S";

// ---------------------------------------------------------------------------
// ProductStore
// ---------------------------------------------------------------------------

/// Store interface for product records, bound to a live connection.
pub struct ProductStore<'a> {
    conn: &'a Connection,
}

impl<'a> ProductStore<'a> {
    /// Create a new `ProductStore` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a product, returning the stored record with its assigned id.
    ///
    /// Fails with `ConstraintViolation` if a record with the same
    /// `(productCode, date-part of expirationDate)` already exists. The
    /// unique index performs the check atomically, so of two racing inserts
    /// with the same key at most one succeeds.
    pub fn insert(&self, new: &NewProduct) -> Result<Product> {
        let rows: Vec<Product> = self.conn.execute_into(
            "INSERT INTO products (name, brand, productCode, expirationDate) \
             VALUES (?, ?, ?, CAST(? AS TIMESTAMP)) \
             RETURNING *",
            &[
                new.name.clone(),
                new.brand.clone(),
                new.product_code.clone(),
                new.expiration_date.format(SQL_TIMESTAMP).to_string(),
            ],
        )?;

        let product = rows
            .into_iter()
            .next()
            .ok_or(StockError::DuckDb(duckdb::Error::QueryReturnedNoRows))?;
        tracing::debug!(id = product.id, code = %product.product_code, "inserted product");
        Ok(product)
    }

    /// Fetch a product by id, or `None` if no such record exists.
    pub fn get(&self, id: i64) -> Result<Option<Product>> {
        let rows: Vec<Product> = self.conn.execute_into(
            "SELECT * FROM products WHERE id = CAST(? AS BIGINT)",
            &[id.to_string()],
        )?;
        Ok(rows.into_iter().next())
    }

    /// Delete a product by id.
    ///
    /// Fails with `NotFound` if no record has that id.
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.conn.execute_update(
            "DELETE FROM products WHERE id = CAST(? AS BIGINT)",
            &[id.to_string()],
        )?;
        if affected == 0 {
            return Err(StockError::NotFound(format!("No product with id {id}")));
        }
        tracing::debug!(id, "deleted product");
        Ok(())
    }

    /// List every stored product in insertion (id) order.
    pub fn list_all(&self) -> Result<Vec<Product>> {
        let (sql, params) = SqlBuilder::new("products").order_by(&["id ASC"]).build();
        self.conn.execute_into(&sql, &params)
    }

    /// List products matching all supplied filter criteria.
    ///
    /// Criteria combine with AND; absent or empty criteria are skipped, so
    /// an empty filter is equivalent to [`list_all`](Self::list_all). The
    /// expiration date criterion compares calendar date only, ignoring
    /// time-of-day. Read-only: never mutates the store.
    pub fn filter(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let mut builder = SqlBuilder::new("products");
        Self::apply_filter(&mut builder, filter);
        let (sql, params) = builder.order_by(&["id ASC"]).build();
        self.conn.execute_into(&sql, &params)
    }

    /// Count products matching all supplied filter criteria.
    pub fn count(&self, filter: &ProductFilter) -> Result<usize> {
        let mut builder = SqlBuilder::new("products");
        builder.select(&["COUNT(*)"]);
        Self::apply_filter(&mut builder, filter);
        let (sql, params) = builder.build();

        let value = self.conn.execute_scalar(&sql, &params)?;
        Ok(value
            .and_then(|v| v.as_i64())
            .map(|n| n as usize)
            .unwrap_or(0))
    }

    fn apply_filter(builder: &mut SqlBuilder, filter: &ProductFilter) {
        if let Some(brand) = filter.brand.as_deref().filter(|s| !s.is_empty()) {
            builder.where_eq("brand", brand);
        }
        if let Some(code) = filter.product_code.as_deref().filter(|s| !s.is_empty()) {
            builder.where_eq("productCode", code);
        }
        if let Some(date) = filter.expiration_date {
            // Date-part comparison: a stored timestamp matches regardless of
            // its time-of-day component.
            let day = date.format("%Y-%m-%d").to_string();
            builder.where_clause("CAST(expirationDate AS DATE) = CAST(? AS DATE)", &[day.as_str()]);
        }
    }
}
