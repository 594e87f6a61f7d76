//! Category and selection kept in one shareable parameter set.

use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::ids::ProductId;
use crate::navigation::{ParamStore, QueryParams, Selection};

/// Parameter key for the active category.
pub const CATEGORY_PARAM: &str = "category";

/// Parameter key for the open product.
pub const PRODUCT_PARAM: &str = "product";

/// Navigation state backed by a [`ParamStore`].
///
/// The store is the single source of truth: category and selection are
/// read from it on every call, and each setter touches only its own key.
#[derive(Debug, Clone, Default)]
pub struct NavState<P = QueryParams> {
    params: P,
}

impl<P: ParamStore> NavState<P> {
    /// Wrap an existing parameter store.
    pub fn new(params: P) -> Self {
        Self { params }
    }

    /// The active category; missing or empty means `All`.
    pub fn category(&self) -> CategoryFilter {
        self.params
            .get(CATEGORY_PARAM)
            .map(CategoryFilter::from)
            .unwrap_or_default()
    }

    /// Change the category. `All` is the default and is stored by removing
    /// the key.
    pub fn set_category(&mut self, category: &CategoryFilter) {
        match category {
            CategoryFilter::All => self.params.clear(CATEGORY_PARAM),
            CategoryFilter::Only(name) => self.params.set(CATEGORY_PARAM, name),
        }
        tracing::debug!(category = %category, "category changed");
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        Selection::from_param(self.params.get(PRODUCT_PARAM).as_deref())
    }

    /// Open a product. The id is not checked against the catalog.
    pub fn select(&mut self, id: &ProductId) {
        let mut selection = self.selection();
        selection.select(id.clone());
        self.write_selection(&selection);
        tracing::debug!(product_id = %id, "product selected");
    }

    /// Close the open product.
    pub fn clear_selection(&mut self) {
        let mut selection = self.selection();
        selection.clear();
        self.write_selection(&selection);
        tracing::debug!("selection cleared");
    }

    /// The open product, if its id exists in `catalog`.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        self.selection().resolve(catalog)
    }

    /// The underlying parameter store.
    pub fn params(&self) -> &P {
        &self.params
    }

    /// Consume and return the parameter store.
    pub fn into_params(self) -> P {
        self.params
    }

    fn write_selection(&mut self, selection: &Selection) {
        match selection.id() {
            Some(id) => self.params.set(PRODUCT_PARAM, id.as_str()),
            None => self.params.clear(PRODUCT_PARAM),
        }
    }
}
