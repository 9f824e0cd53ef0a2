//! Checks on the catalog file the storefront ships with.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use sole_core::{Variant, classify};
use sole_integration_tests::{reference_time, shipped_catalog_path};
use sole_storefront::{Catalog, render_card};

#[test]
fn test_shipped_catalog_loads() {
    let catalog = Catalog::load(&shipped_catalog_path()).unwrap();
    assert_eq!(catalog.len(), 8);
}

#[test]
fn test_shipped_catalog_covers_every_variant() {
    let catalog = Catalog::load(&shipped_catalog_path()).unwrap();

    let mut counts: HashMap<Variant, usize> = HashMap::new();
    for shoe in catalog.all() {
        *counts.entry(classify(shoe, reference_time())).or_default() += 1;
    }

    assert_eq!(counts.get(&Variant::OnSale), Some(&3));
    assert_eq!(counts.get(&Variant::NewRelease), Some(&2));
    assert_eq!(counts.get(&Variant::Default), Some(&3));
}

#[test]
fn test_sale_prices_are_discounts() {
    let catalog = Catalog::load(&shipped_catalog_path()).unwrap();

    for shoe in catalog.all() {
        if let Some(sale_price) = shoe.sale_price {
            assert!(sale_price < shoe.price, "{} sale price is not lower", shoe.slug);
        }
    }
}

#[test]
fn test_every_shoe_renders_one_badge_at_most() {
    let catalog = Catalog::load(&shipped_catalog_path()).unwrap();

    for shoe in catalog.all() {
        let html = render_card(shoe, reference_time()).unwrap();
        assert!(html.matches(r#"class="shoe-card__tag "#).count() <= 1);
        assert_eq!(
            html.contains("shoe-card__price--struck"),
            html.contains("shoe-card__sale-price"),
            "{}",
            shoe.slug
        );
    }
}
