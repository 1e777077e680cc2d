//! Navigation configuration
//!
//! The brand label and route table are declared in `nav.json` at the crate root
//! and embedded at compile time. The table is fixed for the process lifetime.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::routes::{default_routes, RouteDescriptor};

/// Embedded navigation config document
const EMBEDDED_NAV_CONFIG: &str = include_str!("../../nav.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_brand")]
    pub brand: String,

    #[serde(default = "default_routes")]
    pub routes: Vec<RouteDescriptor>,
}

fn default_brand() -> String {
    "StockAI".to_string()
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            routes: default_routes(),
        }
    }
}

impl NavConfig {
    /// Parse and validate a config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Config shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_NAV_CONFIG)
    }

    /// Embedded config, or the built-in table if the document is broken
    pub fn embedded_or_default() -> Self {
        match Self::embedded() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default navigation config: {}", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.routes.is_empty() {
            return Err(ConfigError::NoRoutes);
        }

        let mut seen = HashSet::new();
        for route in &self.routes {
            if !route.href.starts_with('/') {
                return Err(ConfigError::InvalidHref(route.href.clone()));
            }
            if !seen.insert(route.href.as_str()) {
                return Err(ConfigError::DuplicateHref(route.href.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::NavIcon;

    #[test]
    fn test_embedded_config_matches_default_table() {
        let config = NavConfig::embedded().expect("embedded config should parse");
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = NavConfig::from_json("{}").expect("empty object is valid");
        assert_eq!(config.brand, "StockAI");
        assert_eq!(config.routes.len(), 3);
    }

    #[test]
    fn test_custom_routes_keep_declared_order() {
        let config = NavConfig::from_json(
            r#"{"brand": "Desk", "routes": [
                {"name": "About", "href": "/about", "icon": "info"},
                {"name": "Home", "href": "/", "icon": "trending_up"}
            ]}"#,
        )
        .expect("config should parse");

        assert_eq!(config.brand, "Desk");
        assert_eq!(config.routes[0].href, "/about");
        assert_eq!(config.routes[1].icon, NavIcon::TrendingUp);
    }

    #[test]
    fn test_empty_route_table_rejected() {
        let err = NavConfig::from_json(r#"{"routes": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoRoutes));
    }

    #[test]
    fn test_relative_href_rejected() {
        let err = NavConfig::from_json(
            r#"{"routes": [{"name": "About", "href": "about", "icon": "info"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHref(h) if h == "about"));
    }

    #[test]
    fn test_duplicate_href_rejected() {
        let err = NavConfig::from_json(
            r#"{"routes": [
                {"name": "Home", "href": "/", "icon": "trending_up"},
                {"name": "Start", "href": "/", "icon": "info"}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateHref(h) if h == "/"));
    }

    #[test]
    fn test_unknown_icon_is_parse_error() {
        let err = NavConfig::from_json(
            r#"{"routes": [{"name": "Home", "href": "/", "icon": "rocket"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
