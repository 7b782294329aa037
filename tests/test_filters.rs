//! Filter integration tests: AND-combined criteria, empty criteria, and
//! date-part matching.

mod common;

use stock_control::ProductFilter;

fn brand_filter(brand: &str) -> ProductFilter {
    ProductFilter {
        brand: Some(brand.to_string()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// single criteria
// ---------------------------------------------------------------------------

#[test]
fn filter_by_brand_returns_exact_subset() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    let natura = stock.products().filter(&brand_filter("Natura")).unwrap();
    assert_eq!(natura.len(), 2);
    assert!(natura.iter().all(|p| p.brand == "Natura"));

    let boticario = stock.products().filter(&brand_filter("Boticario")).unwrap();
    assert_eq!(boticario.len(), 1);
    assert_eq!(boticario[0].product_code, "789");
}

#[test]
fn filter_by_product_code() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    let filter = ProductFilter {
        product_code: Some("456".to_string()),
        ..Default::default()
    };
    let matched = stock.products().filter(&filter).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Natura Homem Sagaz");
}

#[test]
fn filter_by_unknown_brand_returns_empty() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    let matched = stock.products().filter(&brand_filter("Avon")).unwrap();
    assert!(matched.is_empty());
}

// ---------------------------------------------------------------------------
// combined criteria (AND)
// ---------------------------------------------------------------------------

#[test]
fn combined_criteria_are_anded() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    let filter = ProductFilter {
        brand: Some("Natura".to_string()),
        product_code: Some("123".to_string()),
        ..Default::default()
    };
    let matched = stock.products().filter(&filter).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Natura Essence");
}

#[test]
fn conflicting_criteria_return_empty() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    // Brand and code belong to different records
    let filter = ProductFilter {
        brand: Some("Boticario".to_string()),
        product_code: Some("123".to_string()),
        ..Default::default()
    };
    assert!(stock.products().filter(&filter).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// date-part matching
// ---------------------------------------------------------------------------

#[test]
fn date_filter_ignores_time_of_day() {
    let stock = common::setup_store();

    stock
        .products()
        .insert(&common::new_product(
            "Natura Essence",
            "Natura",
            "123",
            common::datetime(2024, 1, 1, 14, 45, 10),
        ))
        .unwrap();

    // Midnight criterion still matches the afternoon timestamp
    let filter = ProductFilter {
        expiration_date: Some(common::date(2024, 1, 1)),
        ..Default::default()
    };
    assert_eq!(stock.products().filter(&filter).unwrap().len(), 1);

    // And a criterion carrying its own time-of-day matches too
    let filter = ProductFilter {
        expiration_date: Some(common::datetime(2024, 1, 1, 3, 0, 0)),
        ..Default::default()
    };
    assert_eq!(stock.products().filter(&filter).unwrap().len(), 1);
}

#[test]
fn date_filter_excludes_other_days() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    let filter = ProductFilter {
        expiration_date: Some(common::date(2024, 1, 2)),
        ..Default::default()
    };
    assert!(stock.products().filter(&filter).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// absent / empty criteria
// ---------------------------------------------------------------------------

#[test]
fn empty_filter_is_equivalent_to_list_all() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    let filtered = stock.products().filter(&ProductFilter::default()).unwrap();
    let all = stock.products().list_all().unwrap();
    assert_eq!(filtered, all);
}

#[test]
fn empty_string_criteria_are_not_applied() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    let filter = ProductFilter {
        brand: Some(String::new()),
        product_code: Some(String::new()),
        expiration_date: None,
    };
    assert_eq!(stock.products().filter(&filter).unwrap().len(), 3);
}

#[test]
fn filtering_does_not_mutate_the_store() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    stock.products().filter(&brand_filter("Natura")).unwrap();
    stock.products().filter(&brand_filter("Avon")).unwrap();

    assert_eq!(stock.products().list_all().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// count
// ---------------------------------------------------------------------------

#[test]
fn count_matches_filter_results() {
    let stock = common::setup_store();
    common::seed_sample_products(&stock);

    assert_eq!(stock.products().count(&ProductFilter::default()).unwrap(), 3);
    assert_eq!(stock.products().count(&brand_filter("Natura")).unwrap(), 2);
    assert_eq!(stock.products().count(&brand_filter("Avon")).unwrap(), 0);
}
