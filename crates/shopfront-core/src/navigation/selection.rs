//! The single "open product" selection.

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Which product, if any, is open for detail viewing.
///
/// Writes are unchecked; the id is validated against the catalog only when
/// resolved, so a shared link naming an unknown product degrades to
/// nothing being open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selection {
    /// No product is open.
    #[default]
    Empty,
    /// A product id has been selected.
    Selecting(ProductId),
}

impl Selection {
    /// Build from an optional stored value; a missing or empty value is
    /// `Empty`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(id) if !id.is_empty() => Selection::Selecting(ProductId::new(id)),
            _ => Selection::Empty,
        }
    }

    /// Select a product, replacing any current selection.
    pub fn select(&mut self, id: impl Into<ProductId>) {
        *self = Selection::Selecting(id.into());
    }

    /// Close the open product.
    pub fn clear(&mut self) {
        *self = Selection::Empty;
    }

    /// The selected id, if any.
    pub fn id(&self) -> Option<&ProductId> {
        match self {
            Selection::Empty => None,
            Selection::Selecting(id) => Some(id),
        }
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// The selected product if it exists in the catalog.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        let id = self.id()?;
        let product = catalog.find_by_id(id.as_str());
        if product.is_none() {
            tracing::debug!(product_id = %id, "selected product not in catalog");
        }
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("p5", "Concrete Planter", "Plants", Money::new(3400)),
            Product::new("p11", "Ceramic Plant Pot", "Plants", Money::new(4800)),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let selection = Selection::default();
        assert!(selection.is_empty());
        assert!(selection.resolve(&catalog()).is_none());
    }

    #[test]
    fn test_transitions() {
        let mut selection = Selection::Empty;
        selection.select("p5");
        assert_eq!(selection, Selection::Selecting(ProductId::new("p5")));

        selection.select("p11");
        assert_eq!(selection.id().map(ProductId::as_str), Some("p11"));

        selection.clear();
        assert_eq!(selection, Selection::Empty);
    }

    #[test]
    fn test_resolve() {
        let catalog = catalog();
        let mut selection = Selection::Empty;

        selection.select("p11");
        assert_eq!(selection.resolve(&catalog).unwrap().name, "Ceramic Plant Pot");

        selection.select("p404");
        assert!(!selection.is_empty());
        assert!(selection.resolve(&catalog).is_none());
    }

    #[test]
    fn test_from_param() {
        assert_eq!(Selection::from_param(None), Selection::Empty);
        assert_eq!(Selection::from_param(Some("")), Selection::Empty);
        assert_eq!(
            Selection::from_param(Some("p5")),
            Selection::Selecting(ProductId::new("p5"))
        );
    }
}
