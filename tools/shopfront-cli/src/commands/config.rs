//! Configuration management commands.

use std::fs;
use std::io::IsTerminal;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use shopfront_core::catalog::{Catalog, STANDARD_CATEGORIES};
use shopfront_core::navigation::{ParamStore, QueryParams, CATEGORY_PARAM, PRODUCT_PARAM};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::{CatalogSource, Context};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in)"),
    );
    match ctx.catalog() {
        Ok(catalog) => ctx
            .output
            .kv("loaded", &format!("{} products from {}", catalog.len(), ctx.catalog_source)),
        Err(e) => ctx.output.kv("loaded", &format!("failed: {:#}", e)),
    }

    ctx.output.info("[display]");
    ctx.output.kv("show_descriptions", &ctx.config.display.show_descriptions.to_string());
    ctx.output.kv("description_width", &ctx.config.display.description_width.to_string());

    ctx.output.info("[navigation]");
    ctx.output.kv(
        "initial",
        ctx.config.navigation.initial.as_deref().unwrap_or("(none)"),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        if !std::io::stdin().is_terminal() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Init cancelled");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    // Reads the catalog itself so a broken source is reported, not fatal.
    let (errors, warnings) = check_config(&ctx.config, &ctx.catalog_source);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect errors and warnings for a config whose catalog resolves to
/// `source`.
fn check_config(config: &CliConfig, source: &CatalogSource) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    // Catalog file must exist and parse
    let catalog = match source.load() {
        Ok(catalog) => {
            if catalog.is_empty() {
                warnings.push(format!("catalog.path '{}' has no products", source));
            }
            Some(catalog)
        }
        Err(e) => {
            errors.push(format!("catalog.path: {:#}", e));
            None
        }
    };

    if config.display.description_width == 0 && config.display.show_descriptions {
        warnings.push("display.description_width is 0; descriptions will be blank".to_string());
    }

    // Initial view should point at something that exists
    if let Some(ref initial) = config.navigation.initial {
        check_initial_view(initial, catalog.as_ref(), &mut warnings);
    }

    (errors, warnings)
}

fn check_initial_view(initial: &str, catalog: Option<&Catalog>, warnings: &mut Vec<String>) {
    let params = QueryParams::parse(initial);
    for (key, _) in params.iter() {
        if key != CATEGORY_PARAM && key != PRODUCT_PARAM {
            warnings.push(format!("navigation.initial: unknown parameter '{}'", key));
        }
    }

    // Without a readable catalog there is nothing to check ids against.
    let Some(catalog) = catalog else {
        return;
    };

    if let Some(category) = params.get(CATEGORY_PARAM) {
        let known = STANDARD_CATEGORIES.contains(&category.as_str())
            || catalog.categories().contains(&category.as_str());
        if !known {
            warnings.push(format!("navigation.initial: category '{}' has no products", category));
        }
    }
    if let Some(product) = params.get(PRODUCT_PARAM) {
        if !product.is_empty() && !catalog.contains(&product) {
            warnings.push(format!("navigation.initial: product '{}' is not in the catalog", product));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, NavigationConfig};
    use crate::context::configured_catalog;
    use std::path::Path;

    #[test]
    fn test_missing_catalog_path_is_a_validation_error() {
        let config = CliConfig {
            catalog: CatalogConfig {
                path: Some("missing.json".to_string()),
            },
            ..CliConfig::default()
        };
        let dir = std::env::temp_dir().join("shop-validate-missing");
        let source = configured_catalog(&config, Some(&dir.join("shop.toml")), Path::new("/"));

        let (errors, warnings) = check_config(&config, &source);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("catalog.path: Failed to read catalog file"));
        assert!(errors[0].contains("missing.json"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_default_config_is_clean() {
        let (errors, warnings) = check_config(&CliConfig::default(), &CatalogSource::Builtin);
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_initial_view_warnings() {
        let config = CliConfig {
            navigation: NavigationConfig {
                initial: Some("category=Garden&product=p8&sort=price".to_string()),
            },
            ..CliConfig::default()
        };

        let (errors, warnings) = check_config(&config, &CatalogSource::Builtin);
        assert!(errors.is_empty());
        assert_eq!(
            warnings,
            vec![
                "navigation.initial: unknown parameter 'sort'".to_string(),
                "navigation.initial: category 'Garden' has no products".to_string(),
                "navigation.initial: product 'p8' is not in the catalog".to_string(),
            ]
        );
    }
}
