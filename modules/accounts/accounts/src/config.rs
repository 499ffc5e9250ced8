//! Typed configuration for the accounts module.
//!
//! Configuration is read leniently from the module's JSON section
//! (`modules.accounts = { config: { ... } }`): a missing module or a missing
//! `config` key falls back to defaults, a present but malformed section is an
//! error.

use modkit_security::Principal;
use modkit_security::constants::DEFAULT_ACCOUNT_PREFIX;
use serde::Deserialize;

use crate::domain::service::ServiceConfig;

/// Configuration error for typed config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid principal_prefix '{prefix}': must be non-empty and must not contain ':'")]
    InvalidPrincipalPrefix { prefix: String },
}

/// Provider of module-specific configuration (raw JSON sections only).
pub trait ConfigProvider: Send + Sync {
    /// Returns raw JSON section for the module, if any.
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value>;
}

impl ConfigProvider for serde_json::Map<String, serde_json::Value> {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.get(module_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountsConfig {
    /// Namespace of per-account principals (`<prefix>:<id>`).
    pub principal_prefix: String,
    /// Principals granted `write` on the whole collection. Callers holding any
    /// of them are administrators.
    pub write_grantees: Vec<String>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            principal_prefix: DEFAULT_ACCOUNT_PREFIX.to_owned(),
            write_grantees: Vec::new(),
        }
    }
}

impl AccountsConfig {
    /// Load the module configuration, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns `ConfigError` if the section exists but cannot be deserialized
    /// or does not validate.
    pub fn load(provider: &dyn ConfigProvider, module_name: &str) -> Result<Self, ConfigError> {
        let Some(section) = provider
            .get_module_config(module_name)
            .and_then(serde_json::Value::as_object)
            .and_then(|obj| obj.get("config"))
        else {
            tracing::debug!(module = module_name, "no config section, using defaults");
            return Ok(Self::default());
        };

        let config: Self =
            serde_json::from_value(section.clone()).map_err(|e| ConfigError::InvalidConfig {
                module: module_name.to_owned(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::InvalidPrincipalPrefix` for an empty prefix or one containing `:`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.principal_prefix.trim().is_empty() || self.principal_prefix.contains(':') {
            return Err(ConfigError::InvalidPrincipalPrefix {
                prefix: self.principal_prefix.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            principal_prefix: self.principal_prefix.clone(),
            write_grantees: self
                .write_grantees
                .iter()
                .map(|g| Principal::new(g.as_str()))
                .collect(),
        }
    }
}
