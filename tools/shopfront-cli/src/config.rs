//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Names searched for when no `--config` path is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing display options.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Starting navigation state.
    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text, picking the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Listing display options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print product descriptions in listings.
    #[serde(default = "default_true")]
    pub show_descriptions: bool,

    /// Maximum description width in listings.
    #[serde(default = "default_description_width")]
    pub description_width: usize,
}

fn default_true() -> bool {
    true
}

fn default_description_width() -> usize {
    60
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            description_width: default_description_width(),
        }
    }
}

/// Starting navigation state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Query string applied when no `--url` is given,
    /// e.g. `category=Lighting`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    r#"# Shop CLI configuration

[catalog]
# JSON array of {id, name, description, price, image, category}.
# Leave unset to use the built-in catalog.
# path = "catalog.json"

[display]
show_descriptions = true
description_width = 60

[navigation]
# Starting view, in shareable query-string form.
# initial = "category=Lighting"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_take_defaults() {
        let config = CliConfig::parse("shop.toml", "").unwrap();
        assert!(config.catalog.path.is_none());
        assert!(config.display.show_descriptions);
        assert_eq!(config.display.description_width, 60);
        assert!(config.navigation.initial.is_none());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = CliConfig::parse("shop.toml", &generate_default_config()).unwrap();
        assert_eq!(config.display.description_width, 60);
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            "shop.json",
            r#"{"catalog": {"path": "items.json"}, "navigation": {"initial": "category=Plants"}}"#,
        )
        .unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("items.json"));
        assert_eq!(config.navigation.initial.as_deref(), Some("category=Plants"));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = CliConfig::parse("shop.toml", "[display]\ndescription_width = \"wide\"").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
