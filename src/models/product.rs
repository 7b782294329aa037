use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product — a stored inventory record
// ---------------------------------------------------------------------------

/// A product record as persisted in the store.
///
/// `id` is assigned by the store on insert and never changes. No two records
/// may share the same `(productCode, date-part of expirationDate)` pair; the
/// store's unique index enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub product_code: String,
    #[serde(with = "crate::dates::wire")]
    pub expiration_date: NaiveDateTime,
}

// ---------------------------------------------------------------------------
// NewProduct — the create payload (no id yet)
// ---------------------------------------------------------------------------

/// Payload for creating a product. The store assigns the `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub product_code: String,
    #[serde(with = "crate::dates::wire")]
    pub expiration_date: NaiveDateTime,
}

// ---------------------------------------------------------------------------
// ProductFilter — optional AND-combined criteria
// ---------------------------------------------------------------------------

/// Optional filter criteria for product queries.
///
/// Supplied criteria combine with logical AND; absent or empty criteria are
/// not applied, so an empty filter matches everything. `expiration_date`
/// matches by calendar date only, ignoring time-of-day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default, with = "crate::dates::wire_opt")]
    pub expiration_date: Option<NaiveDateTime>,
}
