use crate::core::snapshot::CART_SNAPSHOT_KEY;
use crate::domain::catalog::Catalog;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AutomartError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog source name meaning "use the built-in demo catalog".
pub const SAMPLE_CATALOG_SOURCE: &str = "sample";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub storefront: StorefrontSection,
    pub store: StoreSection,
    pub catalog: CatalogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub data_dir: String,
    pub snapshot_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Either `"sample"` or a path to a JSON listings file.
    pub source: String,
}

impl StorefrontConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AutomartError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AutomartError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute `${VAR_NAME}` references from the environment, leaving
    /// unresolved references intact.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("storefront.name", &self.storefront.name)?;
        validation::validate_path("store.data_dir", &self.store.data_dir)?;

        if let Some(key) = &self.store.snapshot_key {
            validation::validate_non_empty_string("store.snapshot_key", key)?;
        }

        if self.catalog.source != SAMPLE_CATALOG_SOURCE {
            validation::validate_path("catalog.source", &self.catalog.source)?;
            if !self.catalog.source.ends_with(".json") {
                return Err(AutomartError::InvalidConfigValueError {
                    field: "catalog.source".to_string(),
                    value: self.catalog.source.clone(),
                    reason: format!(
                        "Catalog source must be {:?} or a .json file",
                        SAMPLE_CATALOG_SOURCE
                    ),
                });
            }
        }

        Ok(())
    }

    /// The snapshot key to persist the cart under.
    pub fn snapshot_key(&self) -> &str {
        self.store.snapshot_key.as_deref().unwrap_or(CART_SNAPSHOT_KEY)
    }

    /// Load the configured catalog: the built-in sample or a JSON file.
    pub fn load_catalog(&self) -> Result<Catalog> {
        if self.catalog.source == SAMPLE_CATALOG_SOURCE {
            tracing::debug!("loading built-in sample catalog");
            Ok(Catalog::sample())
        } else {
            tracing::debug!("loading catalog from {}", self.catalog.source);
            Catalog::from_file(&self.catalog.source)
        }
    }
}

impl ConfigProvider for StorefrontConfig {
    fn data_dir(&self) -> &str {
        &self.store.data_dir
    }

    fn snapshot_key(&self) -> &str {
        self.snapshot_key()
    }
}

impl Validate for StorefrontConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
