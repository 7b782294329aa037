//! Shared test fixtures for the stock-control integration tests.
//!
//! Provides `setup_store()` which creates an in-memory DuckDB-backed
//! `StockControl`, plus helpers for building products and seeding the sample
//! inventory used across test files.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use stock_control::{NewProduct, StockControl};

/// Create a `StockControl` backed by a transient in-memory database with the
/// schema applied.
pub fn setup_store() -> StockControl {
    StockControl::builder().in_memory(true).build().unwrap()
}

/// Build a `NaiveDateTime` at midnight for the given calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Build a `NaiveDateTime` with an explicit time-of-day.
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

/// Build a create payload.
pub fn new_product(name: &str, brand: &str, code: &str, expiration: NaiveDateTime) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        brand: brand.to_string(),
        product_code: code.to_string(),
        expiration_date: expiration,
    }
}

/// Seed the sample inventory: two Natura products and one Boticario product,
/// all expiring 2024-01-01.
pub fn seed_sample_products(stock: &StockControl) {
    let products = [
        new_product("Natura Essence", "Natura", "123", date(2024, 1, 1)),
        new_product("Natura Homem Sagaz", "Natura", "456", date(2024, 1, 1)),
        new_product("Quasar Vision", "Boticario", "789", date(2024, 1, 1)),
    ];
    for p in &products {
        stock.products().insert(p).unwrap();
    }
}
