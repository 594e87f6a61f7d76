//! Category filter values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the universal category sentinel.
pub const ALL_CATEGORIES: &str = "All";

/// The category bar shown by the storefront, sentinel first.
pub const STANDARD_CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "Lighting",
    "Kitchenware",
    "Home Decor",
    "Plants",
    "Office",
    "Textiles",
];

/// Category criterion for the filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every category matches.
    #[default]
    All,
    /// Only products whose category equals this name (case-sensitive).
    Only(String),
}

impl CategoryFilter {
    /// Parse a category name. `"All"` and the empty string both mean
    /// every category.
    pub fn parse(name: &str) -> Self {
        if name.is_empty() || name == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(name.to_string())
        }
    }

    /// The name as shown in the category bar and stored in shareable state.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(name) => name,
        }
    }

    /// Whether this is the `All` sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Check whether a product category passes this criterion.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        CategoryFilter::parse(name)
    }
}

impl From<String> for CategoryFilter {
    fn from(name: String) -> Self {
        CategoryFilter::parse(&name)
    }
}

impl From<CategoryFilter> for String {
    fn from(category: CategoryFilter) -> String {
        category.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Lighting"),
            CategoryFilter::Only("Lighting".to_string())
        );
    }

    #[test]
    fn test_match_is_exact() {
        let lighting = CategoryFilter::from("Lighting");
        assert!(lighting.matches("Lighting"));
        assert!(!lighting.matches("lighting"));
        assert!(!lighting.matches("Lighting "));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn test_standard_categories_start_with_sentinel() {
        assert_eq!(STANDARD_CATEGORIES[0], ALL_CATEGORIES);
        assert!(STANDARD_CATEGORIES.contains(&"Home Decor"));
    }
}
