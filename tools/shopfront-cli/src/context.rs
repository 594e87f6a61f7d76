//! CLI execution context.

use std::cell::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shopfront_core::catalog::Catalog;
use shopfront_core::navigation::QueryParams;
use shopfront_core::Storefront;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    /// The catalog embedded in the binary.
    Builtin,
    /// A JSON catalog file.
    File(PathBuf),
}

impl CatalogSource {
    /// Read and validate the catalog.
    pub fn load(&self) -> Result<Catalog> {
        match self {
            CatalogSource::Builtin => {
                Catalog::from_json(BUILTIN_CATALOG).context("Built-in catalog is invalid")
            }
            CatalogSource::File(path) => load_catalog_file(path),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "built-in catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Catalog source, read on first use.
    pub catalog_source: CatalogSource,
    catalog: OnceCell<Arc<Catalog>>,
}

impl Context {
    /// Load context from config file. The catalog is not read yet.
    pub fn load(config_path: Option<&str>, catalog_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "using config file");
        }

        // --catalog beats the config file.
        let catalog_source = match catalog_path {
            Some(path) => CatalogSource::File(resolve_from(&cwd, path)),
            None => configured_catalog(&config, config_path.as_deref(), &cwd),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog_source,
            catalog: OnceCell::new(),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), "skipping config: {:#}", e)
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The catalog, read from its source on the first call.
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(self.catalog_source.load()?);
        tracing::debug!(source = %self.catalog_source, products = catalog.len(), "catalog loaded");
        Ok(Arc::clone(self.catalog.get_or_init(|| catalog)))
    }

    /// Build a storefront, starting from `url` or the configured initial
    /// view.
    pub fn storefront(&self, url: Option<&str>) -> Result<Storefront> {
        let query = url.or(self.config.navigation.initial.as_deref()).unwrap_or("");
        Ok(Storefront::with_params(self.catalog()?, QueryParams::parse(query)))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_from(&self.cwd, path)
    }
}

/// Catalog named by a config. Relative paths are taken from the config
/// file's directory, or `cwd` when there is no file.
pub fn configured_catalog(config: &CliConfig, config_path: Option<&Path>, cwd: &Path) -> CatalogSource {
    match config.catalog.path.as_deref() {
        Some(path) => {
            let base = config_path
                .and_then(Path::parent)
                .map(|dir| resolve_from(cwd, &dir.to_string_lossy()))
                .unwrap_or_else(|| cwd.to_path_buf());
            CatalogSource::File(resolve_from(&base, path))
        }
        None => CatalogSource::Builtin,
    }
}

fn resolve_from(base: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        base.join(path)
    }
}

/// Read and validate a JSON catalog file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    Catalog::from_json(&content).with_context(|| format!("Invalid catalog: {}", path.display()))
}
