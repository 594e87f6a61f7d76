//! Text and JSON views of storefront state.

use console::style;
use serde::Serialize;
use shopfront_core::cart::{Cart, CartSummary};
use shopfront_core::catalog::{Catalog, CategoryFilter, Product, STANDARD_CATEGORIES};
use shopfront_core::search::FilteredProducts;

use crate::config::DisplayConfig;
use crate::output::Output;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 10;

/// JSON view of a filtered listing.
#[derive(Serialize)]
pub struct ListingView<'r> {
    pub category: &'r str,
    pub search: &'r str,
    pub count: usize,
    pub products: Vec<&'r Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'r> ListingView<'r> {
    pub fn new(results: &'r FilteredProducts<'_>) -> Self {
        let filter = results.filter();
        Self {
            category: filter.category.as_str(),
            search: filter.query.raw(),
            count: results.len(),
            products: results.iter().collect(),
            message: results.is_empty().then(|| results.empty_message()),
        }
    }
}

/// Print the product grid, or the "no results" message.
pub fn print_listing(output: &Output, results: &FilteredProducts<'_>, display: &DisplayConfig) {
    if output.is_json() {
        output.json(&ListingView::new(results));
        return;
    }

    if results.is_empty() {
        output.info(&results.empty_message());
        return;
    }

    let widths = [ID_WIDTH, NAME_WIDTH, CATEGORY_WIDTH, PRICE_WIDTH];
    output.table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &widths);
    for product in results.iter() {
        let name = truncate(&product.name, NAME_WIDTH);
        let price = product.price.display();
        output.table_row(
            &[product.id.as_str(), &name, &product.category, &price],
            &widths,
        );
        if display.show_descriptions && !product.description.is_empty() {
            let width = display.description_width.min(output.term_width().saturating_sub(ID_WIDTH + 4));
            output.line(&format!(
                "  {:id$}  {}",
                "",
                style(truncate(&product.description, width)).dim(),
                id = ID_WIDTH
            ));
        }
    }
    output.line(&format!(
        "  {}",
        style(format!("{} product(s)", results.len())).dim()
    ));
}

/// Print a product's detail view.
pub fn print_product(output: &Output, product: &Product) {
    if output.is_json() {
        output.json(product);
        return;
    }

    output.header(&product.name);
    output.kv("id", product.id.as_str());
    output.kv("category", &product.category);
    output.kv("price", &product.price.display());
    if !product.image.is_empty() {
        output.kv("image", &product.image);
    }
    if !product.description.is_empty() {
        output.line("");
        output.line(&format!("  {}", product.description));
    }
}

/// Print the cart drawer.
pub fn print_cart(output: &Output, cart: &Cart) {
    let summary = cart.summary();
    if output.is_json() {
        output.json(&summary);
        return;
    }

    output.header(&cart_title(&summary));
    if summary.is_empty() {
        output.info("Your cart is empty");
        return;
    }

    let widths = [ID_WIDTH, NAME_WIDTH, 4, PRICE_WIDTH, PRICE_WIDTH];
    output.table_row(&["ID", "NAME", "QTY", "EACH", "SUBTOTAL"], &widths);
    for line in cart.lines() {
        let name = truncate(&line.product.name, NAME_WIDTH);
        output.table_row(
            &[
                line.id().as_str(),
                &name,
                &line.quantity.to_string(),
                &line.product.price.display(),
                &line.subtotal().display(),
            ],
            &widths,
        );
    }
    output.line("");
    output.kv("Total", &style(summary.total.display()).bold().to_string());
}

/// Title for the cart drawer, with the item-count badge.
pub fn cart_title(summary: &CartSummary) -> String {
    match summary.badge().as_str() {
        "" => "Cart".to_string(),
        badge => format!("Cart ({})", badge),
    }
}

/// The standard category bar followed by any catalog categories it lacks.
pub fn category_names(catalog: &Catalog) -> Vec<&str> {
    let mut names: Vec<&str> = STANDARD_CATEGORIES.to_vec();
    for category in catalog.categories() {
        if !names.contains(&category) {
            names.push(category);
        }
    }
    names
}

/// One-line category bar with the active category highlighted.
pub fn category_bar(categories: &[&str], active: &CategoryFilter) -> String {
    categories
        .iter()
        .map(|name| category_chip(name, active.as_str() == *name))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A category chip; the active one is shown inverted.
fn category_chip(name: &str, active: bool) -> String {
    let chip = style(format!(" {} ", name));
    if active {
        chip.reverse().bold().to_string()
    } else {
        chip.dim().to_string()
    }
}

/// Shorten text to at most `width` characters, ending with `…` when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    match width {
        0 => String::new(),
        _ => text.chars().take(width - 1).chain(std::iter::once('…')).collect(),
    }
}
