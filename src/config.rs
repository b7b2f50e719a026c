//! Tenant scope configuration.
//!
//! The organization-name table and default tenant used by the resolver's last
//! fallback step live here rather than in code, so new special-cased
//! organizations can be added by editing configuration.
//!
//! # Example
//!
//! ```rust
//! use tenant_scope::config::ScopeConfig;
//!
//! let config = ScopeConfig::from_json_str(r#"{
//!     "default_tenant_id": 1,
//!     "organization_tenants": { "Globex LLC": 4, "Initech": 9 }
//! }"#).unwrap();
//!
//! assert_eq!(config.organization_tenant("Initech"), Some(9));
//! assert_eq!(config.admin_capability, "admin");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Tenant id used when nothing else resolves.
pub const DEFAULT_TENANT_ID: u64 = 1;

/// Capability name that grants unrestricted assignment visibility.
pub const DEFAULT_ADMIN_CAPABILITY: &str = "admin";

/// Errors raised while loading or validating a [`ScopeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this schema
    #[error("Failed to parse scope configuration: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    /// The configuration file could not be read
    #[error("Failed to read scope configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The configuration parsed but violates a constraint
    #[error("Invalid scope configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Configuration for tenant resolution and assignment visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    /// Tenant returned when a principal carries no usable identifiers.
    pub default_tenant_id: u64,

    /// Exact, case-sensitive organization name to tenant id overrides.
    pub organization_tenants: BTreeMap<String, u64>,

    /// Capability that marks a principal as an administrator.
    pub admin_capability: String,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        let mut organization_tenants = BTreeMap::new();
        organization_tenants.insert("Globex LLC".to_string(), 4);

        Self {
            default_tenant_id: DEFAULT_TENANT_ID,
            organization_tenants,
            admin_capability: DEFAULT_ADMIN_CAPABILITY.to_string(),
        }
    }
}

impl ScopeConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: ScopeConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Add or replace an organization override.
    pub fn with_organization(mut self, name: impl Into<String>, tenant_id: u64) -> Self {
        self.organization_tenants.insert(name.into(), tenant_id);
        self
    }

    /// Replace the default tenant.
    pub fn with_default_tenant(mut self, tenant_id: u64) -> Self {
        self.default_tenant_id = tenant_id;
        self
    }

    /// Look up an organization override.
    pub fn organization_tenant(&self, organization_name: &str) -> Option<u64> {
        self.organization_tenants.get(organization_name).copied()
    }

    /// Check the configuration for values the resolver cannot honour.
    ///
    /// Resolution must never produce a zero tenant, so both the default and
    /// every override have to be non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_tenant_id == 0 {
            return Err(ConfigError::invalid("default_tenant_id must be non-zero"));
        }

        if self.admin_capability.trim().is_empty() {
            return Err(ConfigError::invalid("admin_capability cannot be blank"));
        }

        for (name, tenant_id) in &self.organization_tenants {
            if name.trim().is_empty() {
                return Err(ConfigError::invalid("organization names cannot be blank"));
            }
            if *tenant_id == 0 {
                return Err(ConfigError::invalid(format!(
                    "organization '{}' maps to tenant 0",
                    name
                )));
            }
        }

        Ok(())
    }
}
