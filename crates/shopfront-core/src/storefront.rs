//! Storefront state: the one object the view layer talks to.

use crate::cart::{Cart, CartLine, QuantityUpdate};
use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::ids::ProductId;
use crate::money::Money;
use crate::navigation::{NavState, ParamStore, QueryParams, Selection};
use crate::search::{FilterCache, FilteredProducts, ProductFilter, SearchQuery};
use std::sync::Arc;

/// Session state for one shopper: catalog handle, cart, shareable
/// navigation parameters and the current search text.
///
/// Every mutation is an explicit method call; derived values (filtered
/// list, totals, open product) are recomputed from this state on read.
#[derive(Debug)]
pub struct Storefront<P = QueryParams> {
    catalog: Arc<Catalog>,
    cart: Cart,
    nav: NavState<P>,
    search: SearchQuery,
    filter_cache: FilterCache,
}

impl Storefront<QueryParams> {
    /// Start a session with no shareable parameters set.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_params(catalog, QueryParams::new())
    }
}

impl<P: ParamStore> Storefront<P> {
    /// Start a session from an existing parameter store (e.g. a shared
    /// link).
    pub fn with_params(catalog: Arc<Catalog>, params: P) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            nav: NavState::new(params),
            search: SearchQuery::default(),
            filter_cache: FilterCache::new(),
        }
    }

    /// The catalog this session browses.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ----- filtering -----

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = SearchQuery::new(text);
    }

    /// The current search query.
    pub fn search_query(&self) -> &SearchQuery {
        &self.search
    }

    /// The active category.
    pub fn category(&self) -> CategoryFilter {
        self.nav.category()
    }

    /// Change the active category without touching the selection.
    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.nav.set_category(&category.into());
    }

    /// The current filter criteria.
    pub fn current_filter(&self) -> ProductFilter {
        ProductFilter {
            category: self.category(),
            query: self.search.clone(),
        }
    }

    /// Products visible under the current category and search.
    pub fn filtered_products(&mut self) -> FilteredProducts<'_> {
        let filter = self.current_filter();
        self.filter_cache.get_or_compute(&self.catalog, &filter)
    }

    /// Products visible under arbitrary criteria. Does not touch the
    /// session's criteria or cache.
    pub fn filtered_products_for(
        &self,
        category: impl Into<CategoryFilter>,
        search: &str,
    ) -> FilteredProducts<'_> {
        ProductFilter::new(category, search).apply(&self.catalog)
    }

    // ----- cart -----

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart lines in first-added order.
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum of cart quantities.
    pub fn cart_total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    /// Sum of cart line subtotals.
    pub fn cart_total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Add `quantity` of a product to the cart.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Option<&CartLine> {
        self.cart.add(product, quantity)
    }

    /// Add one unit of a product to the cart.
    pub fn add_one(&mut self, product: &Product) -> Option<&CartLine> {
        self.cart.add_one(product)
    }

    /// Add a catalog product by id. Unknown ids are ignored.
    pub fn add_by_id(&mut self, product_id: &str, quantity: u32) -> Option<&CartLine> {
        let product = self.catalog.find_by_id(product_id)?;
        self.cart.add(product, quantity)
    }

    /// Remove a product's line.
    pub fn remove(&mut self, product_id: &str) -> bool {
        self.cart.remove(product_id)
    }

    /// Set a line's quantity (clamped, or removed below one).
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> QuantityUpdate {
        self.cart.update_quantity(product_id, quantity)
    }

    /// Raise a line's quantity by one.
    pub fn increment(&mut self, product_id: &str) -> QuantityUpdate {
        self.cart.increment(product_id)
    }

    /// Lower a line's quantity by one.
    pub fn decrement(&mut self, product_id: &str) -> QuantityUpdate {
        self.cart.decrement(product_id)
    }

    // ----- selection -----

    /// Open a product for detail viewing.
    pub fn select(&mut self, product_id: impl Into<ProductId>) {
        self.nav.select(&product_id.into());
    }

    /// Close the open product.
    pub fn clear_selection(&mut self) {
        self.nav.clear_selection();
    }

    /// The raw selection state.
    pub fn selection(&self) -> Selection {
        self.nav.selection()
    }

    /// The open product, if the selected id exists in the catalog.
    pub fn selected_product(&self) -> Option<&Product> {
        self.nav.resolve(&self.catalog)
    }

    /// Add the open product to the cart and close it.
    ///
    /// Returns the line's quantity afterwards. With nothing resolvable
    /// open, or a zero quantity, nothing changes and `None` is returned.
    pub fn add_selected_to_cart(&mut self, quantity: u32) -> Option<u32> {
        let product = self.nav.resolve(&self.catalog)?;
        let line_quantity = self.cart.add(product, quantity)?.quantity;
        self.nav.clear_selection();
        Some(line_quantity)
    }

    // ----- shareable state -----

    /// The shareable parameters (for building a link).
    pub fn params(&self) -> &P {
        self.nav.params()
    }

    /// Navigation state.
    pub fn nav(&self) -> &NavState<P> {
        &self.nav
    }
}
