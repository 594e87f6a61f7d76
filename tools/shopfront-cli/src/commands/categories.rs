//! Category bar listing.

use anyhow::Result;
use serde::Serialize;
use shopfront_core::catalog::{Catalog, CategoryFilter};

use crate::context::Context;
use crate::render;

#[derive(Debug, Serialize, PartialEq)]
struct CategoryEntry<'a> {
    name: &'a str,
    products: usize,
}

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let entries = category_entries(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&entries);
        return Ok(());
    }

    ctx.output.header("Categories");
    for entry in &entries {
        ctx.output.table_row(&[entry.name, &entry.products.to_string()], &[14, 4]);
    }

    Ok(())
}

/// The standard bar followed by any catalog categories it lacks, with
/// product counts.
fn category_entries(catalog: &Catalog) -> Vec<CategoryEntry<'_>> {
    render::category_names(catalog)
        .into_iter()
        .map(|name| {
            let filter = CategoryFilter::parse(name);
            let products = catalog
                .products()
                .iter()
                .filter(|product| filter.matches(&product.category))
                .count();
            CategoryEntry { name, products }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::catalog::Product;
    use shopfront_core::money::Money;

    #[test]
    fn test_extra_categories_are_appended() {
        let catalog = Catalog::new(vec![
            Product::new("p1", "Desk Lamp", "Lighting", Money::new(8900)),
            Product::new("p2", "Wool Socks", "Apparel", Money::new(1200)),
        ])
        .unwrap();

        let entries = category_entries(&catalog);
        let names: Vec<&str> = entries.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec!["All", "Lighting", "Kitchenware", "Home Decor", "Plants", "Office", "Textiles", "Apparel"]
        );
        assert_eq!(entries[0], CategoryEntry { name: "All", products: 2 });
        assert_eq!(entries[1].products, 1);
        assert_eq!(entries[2].products, 0);
    }
}
