//! Filter engine: category plus multi-term text search.

use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::search::{FilteredProducts, SearchQuery};
use serde::{Deserialize, Serialize};

/// The criteria a product list is filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Category criterion.
    pub category: CategoryFilter,
    /// Free-text criterion.
    pub query: SearchQuery,
}

impl ProductFilter {
    /// Create a filter from a category and raw search text.
    pub fn new(category: impl Into<CategoryFilter>, query: impl Into<SearchQuery>) -> Self {
        Self {
            category: category.into(),
            query: query.into(),
        }
    }

    /// Check whether a single product passes both criteria.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(&product.category) {
            return false;
        }
        self.query.is_empty() || self.query.matches_text(&product.search_text())
    }

    /// Catalog indices of matching products, in catalog order.
    pub(crate) fn matching_positions(&self, catalog: &Catalog) -> Vec<usize> {
        catalog
            .products()
            .iter()
            .enumerate()
            .filter(|(_, product)| self.matches(product))
            .map(|(position, _)| position)
            .collect()
    }

    /// Filter the catalog, preserving catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> FilteredProducts<'a> {
        let products = catalog
            .products()
            .iter()
            .filter(|product| self.matches(product))
            .collect();
        FilteredProducts::new(products, self.clone())
    }
}

/// Filter `catalog` by category and raw search text.
pub fn filter_products<'a>(
    catalog: &'a Catalog,
    category: &CategoryFilter,
    search: &str,
) -> Vec<&'a Product> {
    ProductFilter::new(category.clone(), search)
        .apply(catalog)
        .into_products()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("p1", "Minimal Desk Lamp", "Lighting", Money::new(8900))
                .with_description("Adjustable brightness and color temperature."),
            Product::new("p2", "Ceramic Coffee Set", "Kitchenware", Money::new(6500))
                .with_description("Handcrafted ceramic set with a pour-over dripper."),
            Product::new("p7", "Bamboo Organizer", "Office", Money::new(4200))
                .with_description("Desk organizer made from sustainable bamboo."),
            Product::new("p9", "Marble Coasters", "Kitchenware", Money::new(3800))
                .with_description("Set of 4 marble coasters with cork backing."),
        ])
        .unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_category_only() {
        let catalog = catalog();
        let result = filter_products(&catalog, &CategoryFilter::from("Kitchenware"), "");
        assert_eq!(ids(&result), ["p2", "p9"]);
    }

    #[test]
    fn test_all_with_empty_search_returns_everything() {
        let catalog = catalog();
        let result = filter_products(&catalog, &CategoryFilter::All, "   ");
        assert_eq!(ids(&result), ["p1", "p2", "p7", "p9"]);
    }

    #[test]
    fn test_search_matches_description_and_category() {
        let catalog = catalog();
        let result = filter_products(&catalog, &CategoryFilter::All, "desk");
        assert_eq!(ids(&result), ["p1", "p7"]);

        let result = filter_products(&catalog, &CategoryFilter::All, "kitchen");
        assert_eq!(ids(&result), ["p2", "p9"]);
    }

    #[test]
    fn test_search_terms_and_category_combine() {
        let catalog = catalog();
        let result = filter_products(&catalog, &CategoryFilter::from("Office"), "DESK bamboo");
        assert_eq!(ids(&result), ["p7"]);

        let result = filter_products(&catalog, &CategoryFilter::from("Lighting"), "bamboo");
        assert!(result.is_empty());
    }

    #[test]
    fn test_terms_may_span_fields() {
        let catalog = catalog();
        // "lamp" is in the name, "lighting" is the category.
        let result = filter_products(&catalog, &CategoryFilter::All, "lighting lamp");
        assert_eq!(ids(&result), ["p1"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(filter_products(&catalog, &CategoryFilter::All, "lamp").is_empty());
    }
}
