// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Language Service Configuration
//!
//! The configuration selects a dialect (builtin or custom) and a few
//! presentation options.
//!
//! ## Sources
//!
//! - LSP client settings, under the `dbdl` key:
//!
//! ```json
//! {
//!   "dbdl": {
//!     "dialect": "MySQL",
//!     "upperCaseKeywords": true,
//!     "snippetSupport": true,
//!     "customDialects": [{ "name": "Acme", "hashComments": true }]
//!   }
//! }
//! ```
//!
//! - A YAML file with the same fields at the top level.
//!
//! ## Example
//!
//! ```rust
//! use dbdl_lsp::ServiceConfig;
//! use serde_json::json;
//!
//! let config = ServiceConfig::from_lsp_settings(&json!({
//!     "dbdl": { "dialect": "postgres" }
//! }))
//! .unwrap();
//! assert_eq!(config.resolve_dialect().unwrap().name, "PostgreSQL");
//! ```

use std::collections::HashSet;

use dbdl_dialect::{Dialect, DialectError, DialectSpec, builtin_dialect};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Settings key the client nests our configuration under
pub const SETTINGS_SECTION: &str = "dbdl";

/// Dialect used when none is configured
pub const DEFAULT_DIALECT: &str = "Standard SQL";

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    /// Dialect name, matched case-insensitively against custom dialects
    /// first and then the builtin table
    pub dialect: String,

    /// Render vocabulary keywords in upper case
    pub upper_case_keywords: bool,

    /// Client understands snippet placeholders
    pub snippet_support: bool,

    pub custom_dialects: Vec<DialectSpec>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            dialect: DEFAULT_DIALECT.to_string(),
            upper_case_keywords: false,
            snippet_support: true,
            custom_dialects: Vec::new(),
        }
    }
}

impl ServiceConfig {
    pub fn new(dialect: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            ..Default::default()
        }
    }

    pub fn with_upper_case_keywords(mut self, upper_case: bool) -> Self {
        self.upper_case_keywords = upper_case;
        self
    }

    pub fn with_snippet_support(mut self, snippet_support: bool) -> Self {
        self.snippet_support = snippet_support;
        self
    }

    pub fn with_custom_dialect(mut self, spec: DialectSpec) -> Self {
        self.custom_dialects.push(spec);
        self
    }

    /// Parse configuration from an LSP client settings payload
    ///
    /// A payload without the `dbdl` section yields the defaults. The result
    /// is validated.
    pub fn from_lsp_settings(settings: &Value) -> ConfigResult<Self> {
        let config = match settings.get(SETTINGS_SECTION) {
            Some(section) => Self::deserialize(section)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from YAML
    pub fn from_yaml(source: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Checks that:
    /// - Custom dialects have non-empty, distinct names
    /// - The selected dialect exists
    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for spec in &self.custom_dialects {
            if spec.name.trim().is_empty() {
                return Err(DialectError::MissingName.into());
            }
            if !seen.insert(spec.name.to_lowercase()) {
                return Err(ConfigError::DuplicateDialect(spec.name.clone()));
            }
        }
        self.resolve_dialect().map(|_| ())
    }

    /// Build the selected dialect
    pub fn resolve_dialect(&self) -> ConfigResult<Dialect> {
        if let Some(spec) = self
            .custom_dialects
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(&self.dialect))
        {
            return Ok(Dialect::try_define(spec)?);
        }
        builtin_dialect(&self.dialect)
            .cloned()
            .map_err(|_| ConfigError::UnknownDialect(self.dialect.clone()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Client settings could not be decoded
    #[error("Invalid settings: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be decoded
    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Selected dialect is neither builtin nor custom
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    /// Two custom dialects share a name
    #[error("Duplicate custom dialect: {0}")]
    DuplicateDialect(String),

    /// A custom dialect descriptor is invalid
    #[error("Invalid custom dialect: {0}")]
    Dialect(#[from] DialectError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.dialect, DEFAULT_DIALECT);
        assert!(config.snippet_support);
        assert!(!config.upper_case_keywords);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = ServiceConfig::from_lsp_settings(&json!({ "other": {} })).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let config = ServiceConfig::from_lsp_settings(&json!({
            "dbdl": { "dialect": "sqlite", "upperCaseKeywords": true }
        }))
        .unwrap();
        assert!(config.upper_case_keywords);
        assert!(config.snippet_support);
        assert_eq!(config.resolve_dialect().unwrap().name, "SQLite");
    }

    #[test]
    fn test_unknown_dialect() {
        let err = ServiceConfig::from_lsp_settings(&json!({ "dbdl": { "dialect": "db2" } }))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDialect(name) if name == "db2"));
    }

    #[test]
    fn test_bad_settings_type() {
        let err = ServiceConfig::from_lsp_settings(&json!({ "dbdl": { "dialect": 3 } }))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_custom_dialect_wins() {
        let config = ServiceConfig::new("mysql").with_custom_dialect(DialectSpec {
            hash_comments: Some(false),
            ..DialectSpec::named("MySQL")
        });
        let dialect = config.resolve_dialect().unwrap();
        assert!(!dialect.hash_comments);
    }

    #[test]
    fn test_duplicate_custom_dialects() {
        let config = ServiceConfig::new("acme")
            .with_custom_dialect(DialectSpec::named("Acme"))
            .with_custom_dialect(DialectSpec::named("ACME"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateDialect(name)) if name == "ACME"
        ));
    }

    #[test]
    fn test_nameless_custom_dialect() {
        let config = ServiceConfig::default().with_custom_dialect(DialectSpec::named(" "));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Dialect(DialectError::MissingName))
        ));
    }
}
