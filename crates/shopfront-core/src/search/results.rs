//! Filter results and memoization.

use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::ids::ProductId;
use crate::search::ProductFilter;

/// The visible product list for one set of filter criteria.
#[derive(Debug, Clone)]
pub struct FilteredProducts<'a> {
    products: Vec<&'a Product>,
    filter: ProductFilter,
}

impl<'a> FilteredProducts<'a> {
    pub(crate) fn new(products: Vec<&'a Product>, filter: ProductFilter) -> Self {
        Self { products, filter }
    }

    /// Matching products in catalog order.
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// Consume into the product list.
    pub fn into_products(self) -> Vec<&'a Product> {
        self.products
    }

    /// The criteria that produced this list.
    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    /// Ids of matching products, in order.
    pub fn ids(&self) -> Vec<&'a ProductId> {
        self.products.iter().map(|product| &product.id).collect()
    }

    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over matching products.
    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }

    /// The "no results" line, naming the active search and category.
    pub fn empty_message(&self) -> String {
        let mut message = String::from("No products found");
        let raw = self.filter.query.raw();
        if !raw.is_empty() {
            message.push_str(&format!(" for \"{}\"", raw));
        }
        if !self.filter.category.is_all() {
            message.push_str(&format!(" in {}", self.filter.category));
        }
        message
    }
}

/// Remembers the result of the last filter run.
///
/// The key is the category plus the normalized search terms, so queries
/// that differ only in case or spacing share an entry. Entries hold
/// catalog positions, valid only for the catalog they were computed
/// against.
#[derive(Debug, Default)]
pub struct FilterCache {
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    key: (CategoryFilter, String),
    positions: Vec<usize>,
}

impl FilterCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the filtered list, recomputing only when the criteria changed.
    pub fn get_or_compute<'a>(
        &mut self,
        catalog: &'a Catalog,
        filter: &ProductFilter,
    ) -> FilteredProducts<'a> {
        let key = (filter.category.clone(), filter.query.normalized());

        let hit = matches!(&self.entry, Some(entry) if entry.key == key);
        if hit {
            tracing::trace!(category = %key.0, query = %key.1, "filter cache hit");
        } else {
            tracing::trace!(category = %key.0, query = %key.1, "filter cache miss");
            let positions = filter.matching_positions(catalog);
            self.entry = Some(CacheEntry { key, positions });
        }

        let products: Vec<&Product> = self
            .entry
            .as_ref()
            .map(|entry| {
                entry
                    .positions
                    .iter()
                    .filter_map(|&position| catalog.products().get(position))
                    .collect()
            })
            .unwrap_or_default();
        FilteredProducts::new(products, filter.clone())
    }

    /// Drop the remembered result.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("p1", "Minimal Desk Lamp", "Lighting", Money::new(8900)),
            Product::new("p4", "Wooden Wall Clock", "Home Decor", Money::new(7900)),
            Product::new("p12", "Wall Mirror", "Home Decor", Money::new(12000)),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_message_variants() {
        let catalog = catalog();

        let result = ProductFilter::new("Lighting", "mirror").apply(&catalog);
        assert!(result.is_empty());
        assert_eq!(result.empty_message(), "No products found for \"mirror\" in Lighting");

        let result = ProductFilter::new(CategoryFilter::All, "sofa").apply(&catalog);
        assert_eq!(result.empty_message(), "No products found for \"sofa\"");

        let result = ProductFilter::new("Plants", "").apply(&catalog);
        assert_eq!(result.empty_message(), "No products found in Plants");
    }

    #[test]
    fn test_cache_matches_direct_filter() {
        let catalog = catalog();
        let mut cache = FilterCache::new();
        let filter = ProductFilter::new("Home Decor", "wall");

        let cached = cache.get_or_compute(&catalog, &filter);
        let direct = filter.apply(&catalog);
        assert_eq!(cached.ids(), direct.ids());
        assert_eq!(cached.len(), 2);
    }

    #[test]
    fn test_cache_recomputes_on_new_criteria() {
        let catalog = catalog();
        let mut cache = FilterCache::new();

        let first = cache.get_or_compute(&catalog, &ProductFilter::new(CategoryFilter::All, "wall"));
        assert_eq!(first.len(), 2);

        let second = cache.get_or_compute(&catalog, &ProductFilter::new(CategoryFilter::All, "lamp"));
        assert_eq!(second.ids(), vec![&ProductId::new("p1")]);
    }

    #[test]
    fn test_cache_shares_normalized_queries() {
        let catalog = catalog();
        let mut cache = FilterCache::new();

        cache.get_or_compute(&catalog, &ProductFilter::new(CategoryFilter::All, "Wall"));
        let again = cache.get_or_compute(&catalog, &ProductFilter::new(CategoryFilter::All, " wall "));
        assert_eq!(again.len(), 2);
        assert_eq!(again.filter().query.raw(), " wall ");
    }

    #[test]
    fn test_cache_keeps_all_apart_from_literal_all_category() {
        let catalog = Catalog::new(vec![
            Product::new("p1", "Minimal Desk Lamp", "Lighting", Money::new(8900)),
            Product::new("p2", "Gift Card", "All", Money::new(2500)),
        ])
        .unwrap();
        let mut cache = FilterCache::new();

        let every = cache.get_or_compute(&catalog, &ProductFilter::new(CategoryFilter::All, ""));
        assert_eq!(every.len(), 2);

        let literal = ProductFilter::new(CategoryFilter::Only("All".into()), "");
        let only = cache.get_or_compute(&catalog, &literal);
        assert_eq!(only.ids(), vec![&ProductId::new("p2")]);
    }
}
