//! DuckDB connection wrapper with schema bootstrap and query execution.
//!
//! Owns the `products` table and its compound unique index. All SQL goes
//! through parameter binding; result rows are converted to
//! `serde_json::Value` maps so callers can deserialize into typed models.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use duckdb::types::{TimeUnit, ValueRef};
use duckdb::Connection as DuckDbConnection;
use serde::de::DeserializeOwned;

use crate::error::{Result, StockError};

/// Schema applied on every open. `IF NOT EXISTS` keeps reopening an existing
/// database file idempotent. The unique index over
/// `(productCode, CAST(expirationDate AS DATE))` is the single arbiter of
/// the compound uniqueness invariant: of two racing inserts with the same
/// key, at most one succeeds.
const SCHEMA: &str = "
    CREATE SEQUENCE IF NOT EXISTS products_id_seq;
    CREATE TABLE IF NOT EXISTS products (
        id BIGINT PRIMARY KEY DEFAULT nextval('products_id_seq'),
        name VARCHAR NOT NULL,
        brand VARCHAR NOT NULL,
        productCode VARCHAR NOT NULL,
        expirationDate TIMESTAMP NOT NULL
    );
    CREATE UNIQUE INDEX IF NOT EXISTS idx_products_code_date
        ON products (productCode, (CAST(expirationDate AS DATE)));
";

/// Wraps a DuckDB connection holding the product table.
pub struct Connection {
    conn: DuckDbConnection,
}

impl Connection {
    /// Open a database at the given path, creating the schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = DuckDbConnection::open(path.as_ref())?;
        Self::with_schema(conn)
    }

    /// Open a transient in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Self::with_schema(conn)
    }

    fn with_schema(conn: DuckDbConnection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    /// Automatically converts DuckDB types to `serde_json::Value`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql).map_err(StockError::from_duckdb)?;

        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        let mut rows_result = stmt
            .query(param_values.as_slice())
            .map_err(StockError::from_duckdb)?;

        // Get column metadata AFTER query execution (calling before panics in duckdb-rs)
        let column_names: Vec<String> = rows_result
            .as_ref()
            .ok_or_else(|| StockError::InvalidArgument("Statement yielded no rows handle".into()))?
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        let column_count = column_names.len();

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();

        while let Some(row) = rows_result.next().map_err(StockError::from_duckdb)? {
            let mut map = HashMap::new();
            for i in 0..column_count {
                let col_name = &column_names[i];
                let value = convert_value_ref(row.get_ref(i)?);
                map.insert(col_name.clone(), value);
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    ///
    /// First executes the query as `HashMap` rows, then deserializes each
    /// row using `serde_json`.
    pub fn execute_into<T: DeserializeOwned>(&self, sql: &str, params: &[String]) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(
                row.into_iter()
                    .collect::<serde_json::Map<String, serde_json::Value>>(),
            );
            let item: T = serde_json::from_value(value)?;
            results.push(item);
        }
        Ok(results)
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(&self, sql: &str, params: &[String]) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql).map_err(StockError::from_duckdb)?;
        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        let mut rows = stmt
            .query(param_values.as_slice())
            .map_err(StockError::from_duckdb)?;

        if let Some(row) = rows.next().map_err(StockError::from_duckdb)? {
            let value = convert_value_ref(row.get_ref(0)?);
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// Execute a statement and return the number of affected rows.
    pub fn execute_update(&self, sql: &str, params: &[String]) -> Result<usize> {
        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();
        self.conn
            .execute(sql, param_values.as_slice())
            .map_err(StockError::from_duckdb)
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
///
/// Timestamps and dates become ISO strings, which the permissive date codec
/// accepts when rows are deserialized into models.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => {
            // HugeInt may not fit in i64; try i64, fallback to string
            if let Ok(i) = i64::try_from(n) {
                serde_json::Value::Number(i.into())
            } else {
                serde_json::Value::String(n.to_string())
            }
        }
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Timestamp(unit, v) => {
            let micros = match unit {
                TimeUnit::Second => v.saturating_mul(1_000_000),
                TimeUnit::Millisecond => v.saturating_mul(1_000),
                TimeUnit::Microsecond => v,
                TimeUnit::Nanosecond => v / 1_000,
            };
            DateTime::from_timestamp_micros(micros)
                .map(|dt| {
                    serde_json::Value::String(
                        dt.naive_utc().format("%Y-%m-%dT%H:%M:%S").to_string(),
                    )
                })
                .unwrap_or(serde_json::Value::Null)
        }
        ValueRef::Date32(days) => NaiveDate::from_ymd_opt(1970, 1, 1)
            .and_then(|epoch| epoch.checked_add_signed(chrono::Duration::days(days as i64)))
            .map(|d| serde_json::Value::String(d.format("%Y-%m-%d").to_string()))
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => {
            serde_json::Value::String(String::from_utf8_lossy(bytes).to_string())
        }
        ValueRef::Blob(bytes) => serde_json::Value::String(format!(
            "blob:{}",
            bytes.iter().map(|b| format!("{:02x}", b)).collect::<String>()
        )),
        _ => {
            // Remaining types (Time, Interval, List, etc.) are not stored by
            // this service
            serde_json::Value::Null
        }
    }
}
