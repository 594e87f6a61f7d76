//! End-to-end storefront scenarios: a shopper browsing, opening products
//! and editing the cart.

use pretty_assertions::assert_eq;
use shopfront_core::navigation::{CATEGORY_PARAM, PRODUCT_PARAM};
use shopfront_core::prelude::*;
use std::sync::Arc;

fn home_catalog() -> Arc<Catalog> {
    let products = vec![
        Product::new("p1", "Minimal Desk Lamp", "Lighting", Money::new(8900)).with_description(
            "A sleek and modern desk lamp with adjustable brightness and color temperature.",
        ),
        Product::new("p2", "Ceramic Coffee Set", "Kitchenware", Money::new(6500)).with_description(
            "Handcrafted ceramic coffee set including 4 cups and a matching pour-over dripper.",
        ),
        Product::new("p3", "Linen Throw Pillow", "Home Decor", Money::new(4500))
            .with_description("Soft linen throw pillow with minimalist pattern design."),
        Product::new("p5", "Concrete Planter", "Plants", Money::new(3400))
            .with_description("Minimalist concrete planter perfect for succulents."),
        Product::new("p7", "Bamboo Organizer", "Office", Money::new(4200))
            .with_description("Desk organizer made from sustainable bamboo."),
        Product::new("p9", "Marble Coasters", "Kitchenware", Money::new(3800))
            .with_description("Set of 4 marble coasters with cork backing."),
    ];
    Arc::new(Catalog::new(products).unwrap())
}

fn ids(products: &FilteredProducts<'_>) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn first_add_sets_count_and_total() {
    let catalog = home_catalog();
    let mut shop = Storefront::new(Arc::clone(&catalog));
    let lamp = catalog.find_by_id("p1").unwrap();

    shop.add(lamp, 1);

    assert_eq!(shop.cart_total_item_count(), 1);
    assert_eq!(shop.cart_total_price(), Money::new(8900));
}

#[test]
fn repeated_add_merges_into_one_line() {
    let catalog = home_catalog();
    let mut shop = Storefront::new(Arc::clone(&catalog));
    let lamp = catalog.find_by_id("p1").unwrap();

    shop.add(lamp, 1);
    shop.add(lamp, 2);

    assert_eq!(shop.cart_lines().len(), 1);
    assert_eq!(shop.cart_lines()[0].quantity, 3);
}

#[test]
fn update_above_limit_clamps_to_99() {
    let mut shop = Storefront::new(home_catalog());
    shop.add_by_id("p1", 1);

    assert_eq!(shop.update_quantity("p1", 150), QuantityUpdate::Updated(99));
    assert_eq!(shop.cart().get("p1").unwrap().quantity, 99);
}

#[test]
fn update_to_zero_removes_line() {
    let mut shop = Storefront::new(home_catalog());
    shop.add_by_id("p1", 1);
    shop.add_by_id("p3", 1);

    assert_eq!(shop.update_quantity("p1", 0), QuantityUpdate::Removed);

    let remaining: Vec<_> = shop.cart_lines().iter().map(|l| l.id().to_string()).collect();
    assert_eq!(remaining, vec!["p3".to_string()]);
}

#[test]
fn category_filter_keeps_catalog_order() {
    let mut shop = Storefront::new(home_catalog());
    shop.set_category("Kitchenware");

    assert_eq!(ids(&shop.filtered_products()), vec!["p2", "p9"]);
}

#[test]
fn stale_selection_resolves_to_nothing() {
    let mut shop = Storefront::new(home_catalog());
    shop.select("p5");
    assert_eq!(shop.selected_product().map(|p| p.name.as_str()), Some("Concrete Planter"));

    // Same shared link opened against a catalog snapshot without p5.
    let smaller = Catalog::new(
        home_catalog()
            .products()
            .iter()
            .filter(|p| p.id.as_str() != "p5")
            .cloned()
            .collect(),
    )
    .unwrap();
    let shop = Storefront::with_params(Arc::new(smaller), shop.params().clone());

    assert_eq!(shop.selection(), Selection::Selecting(ProductId::new("p5")));
    assert!(shop.selected_product().is_none());
}

#[test]
fn browsing_session_from_shared_link() {
    let params = QueryParams::parse("?category=Kitchenware&product=p9");
    let mut shop = Storefront::with_params(home_catalog(), params);

    assert_eq!(shop.category(), CategoryFilter::from("Kitchenware"));
    assert_eq!(shop.selected_product().unwrap().name, "Marble Coasters");

    // Modal "add to cart" with quantity 4, then the modal closes.
    assert_eq!(shop.add_selected_to_cart(4), Some(4));
    assert!(shop.selected_product().is_none());
    assert_eq!(shop.params().get(CATEGORY_PARAM).as_deref(), Some("Kitchenware"));
    assert_eq!(shop.params().get(PRODUCT_PARAM), None);

    // Search narrows within the category.
    shop.set_search("ceramic");
    assert_eq!(ids(&shop.filtered_products()), vec!["p2"]);

    shop.add_by_id("p2", 1);
    shop.increment("p2");
    assert_eq!(shop.cart_total_item_count(), 6);
    assert_eq!(shop.cart_total_price(), Money::new(4 * 3800 + 2 * 6500));
    assert_eq!(shop.cart_total_price().display(), "$282.00");

    assert_eq!(shop.params().to_query_string(), "category=Kitchenware");
}

#[test]
fn no_results_message_names_search_and_category() {
    let mut shop = Storefront::new(home_catalog());
    shop.set_category("Plants");
    shop.set_search("lamp");

    let results = shop.filtered_products();
    assert!(results.is_empty());
    assert_eq!(results.empty_message(), "No products found for \"lamp\" in Plants");
}

#[test]
fn search_is_case_insensitive_and_multi_term() {
    let shop = Storefront::new(home_catalog());

    let results = shop.filtered_products_for(CategoryFilter::All, "DESK  minimal");
    assert_eq!(ids(&results), vec!["p1"]);

    let results = shop.filtered_products_for(CategoryFilter::All, "desk");
    assert_eq!(ids(&results), vec!["p1", "p7"]);
}

#[test]
fn drawer_buttons_walk_quantity_down_to_removal() {
    let mut shop = Storefront::new(home_catalog());
    shop.add_by_id("p7", 2);

    assert_eq!(shop.decrement("p7"), QuantityUpdate::Updated(1));
    assert_eq!(shop.decrement("p7"), QuantityUpdate::Removed);
    assert!(shop.cart().is_empty());
    assert_eq!(shop.cart().summary().badge(), "");
}
