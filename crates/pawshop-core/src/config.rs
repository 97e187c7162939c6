//! Site configuration.

use pawshop_cache::CART_KEY;
use pawshop_commerce::checkout::CheckoutMode;
use pawshop_observability::LogConfig;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Storefront configuration.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name used in the page title.
    pub site_name: String,

    /// Local storage key of the cart slot.
    pub storage_key: String,

    /// What the cart drawer's checkout button does.
    pub checkout: CheckoutMode,

    /// Navigation targets.
    pub routes: NavRoutes,

    /// Logging.
    pub logging: LogConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Pawshop".to_string(),
            storage_key: CART_KEY.to_string(),
            checkout: CheckoutMode::default(),
            routes: NavRoutes::default(),
            logging: LogConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        let config: Self =
            toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, CoreError> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file; `.json` files are parsed as JSON, anything else as TOML.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::Config("storage_key must not be empty".to_string()));
        }
        for (name, href) in self.routes.entries() {
            if !href.starts_with('/') {
                return Err(CoreError::Config(format!(
                    "route {} must start with '/', got {:?}",
                    name, href
                )));
            }
        }
        Ok(())
    }
}

/// Where the navbar links point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavRoutes {
    pub home: String,
    pub products: String,
    pub contact: String,
}

impl Default for NavRoutes {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            products: "/product".to_string(),
            contact: "/contactuspage".to_string(),
        }
    }
}

/// A navbar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

impl NavRoutes {
    fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("home", self.home.as_str()),
            ("products", self.products.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }

    /// Links in menu order.
    pub fn links(&self) -> Vec<NavLink> {
        vec![
            NavLink {
                label: "Home",
                href: self.home.clone(),
            },
            NavLink {
                label: "Products",
                href: self.products.clone(),
            },
            NavLink {
                label: "Contact Us",
                href: self.contact.clone(),
            },
        ]
    }
}
