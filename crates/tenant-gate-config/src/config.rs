// crates/tenant-gate-config/src/config.rs
// ============================================================================
// Module: Tenant Gate Configuration
// Description: Configuration loading and validation for Tenant Gate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: tenant-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed: no partially-validated
//! config is ever returned. The parsed model converts into the core snapshot
//! types the interception engine consumes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use tenant_gate_core::DEFAULT_SERVICE_USERNAME;
use tenant_gate_core::DEFAULT_SHARED_INDEX;
use tenant_gate_core::IndexName;
use tenant_gate_core::MultitenancyConfig;
use tenant_gate_core::PermissionTable;
use tenant_gate_core::TenantAccess;
use tenant_gate_core::TenantId;
use tenant_gate_core::USER_TENANT;
use tenant_gate_core::UserName;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "tenant-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "TENANT_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of tenant entries.
pub(crate) const MAX_TENANT_ENTRIES: usize = 4096;
/// Maximum length of a tenant identifier.
pub(crate) const MAX_TENANT_NAME_LENGTH: usize = 256;
/// Maximum length of the service username.
pub(crate) const MAX_SERVICE_USERNAME_LENGTH: usize = 256;
/// Maximum length of the shared index name.
pub(crate) const MAX_INDEX_NAME_LENGTH: usize = 255;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Canonical Tenant Gate configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    /// Multitenancy settings consumed by the interception engine.
    #[serde(default)]
    pub multitenancy: MultitenancySection,
    /// Tenant permission entries, keyed by tenant identifier.
    #[serde(default)]
    pub tenants: BTreeMap<String, TenantEntry>,
}

/// Multitenancy section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultitenancySection {
    /// Whether tenant isolation is enforced.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Distinguished backend-internal account exempt from rewriting.
    #[serde(default = "default_service_username")]
    pub service_username: String,
    /// Shared index name that rewriting retargets.
    #[serde(default = "default_shared_index")]
    pub shared_index: String,
}

impl Default for MultitenancySection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            service_username: default_service_username(),
            shared_index: default_shared_index(),
        }
    }
}

/// One tenant permission entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantEntry {
    /// Access level granted to the tenant.
    pub access: TenantAccess,
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default for the enabled flag.
const fn default_enabled() -> bool {
    true
}

/// Default service username.
fn default_service_username() -> String {
    DEFAULT_SERVICE_USERNAME.to_string()
}

/// Default shared index name.
fn default_shared_index() -> String {
    DEFAULT_SHARED_INDEX.to_string()
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl GateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.multitenancy.validate()?;
        if self.tenants.len() > MAX_TENANT_ENTRIES {
            return Err(ConfigError::Invalid("too many tenant entries".to_string()));
        }
        for tenant in self.tenants.keys() {
            validate_tenant_name(tenant)?;
        }
        Ok(())
    }

    /// Returns the engine configuration snapshot.
    #[must_use]
    pub fn multitenancy_config(&self) -> MultitenancyConfig {
        MultitenancyConfig {
            enabled: self.multitenancy.enabled,
            service_username: UserName::new(self.multitenancy.service_username.as_str()),
            shared_index: IndexName::new(self.multitenancy.shared_index.as_str()),
        }
    }

    /// Returns the tenant permission table snapshot.
    #[must_use]
    pub fn permission_table(&self) -> PermissionTable {
        self.tenants
            .iter()
            .map(|(tenant, entry)| (TenantId::new(tenant.as_str()), entry.access))
            .collect()
    }
}

impl MultitenancySection {
    /// Validates the multitenancy section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a field is empty or malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_username.is_empty() {
            return Err(ConfigError::Invalid("service_username must not be empty".to_string()));
        }
        if self.service_username.len() > MAX_SERVICE_USERNAME_LENGTH {
            return Err(ConfigError::Invalid("service_username exceeds max length".to_string()));
        }
        validate_index_name(&self.shared_index)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against size limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if let Component::Normal(part) = component {
            if part.len() > MAX_PATH_COMPONENT_LENGTH {
                return Err(ConfigError::Invalid(
                    "config path component exceeds max length".to_string(),
                ));
            }
        }
    }
    Ok(())
}

/// Validates a shared index name.
fn validate_index_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Invalid("shared_index must not be empty".to_string()));
    }
    if name.len() > MAX_INDEX_NAME_LENGTH {
        return Err(ConfigError::Invalid("shared_index exceeds max length".to_string()));
    }
    if name.starts_with('_') {
        return Err(ConfigError::Invalid("shared_index must not start with '_'".to_string()));
    }
    let valid =
        name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "._-".contains(c));
    if !valid {
        return Err(ConfigError::Invalid(format!(
            "shared_index '{name}' contains characters outside [a-z0-9._-]"
        )));
    }
    Ok(())
}

/// Validates a configured tenant identifier.
fn validate_tenant_name(tenant: &str) -> Result<(), ConfigError> {
    if tenant.is_empty() {
        return Err(ConfigError::Invalid("tenant name must not be empty".to_string()));
    }
    if tenant.len() > MAX_TENANT_NAME_LENGTH {
        return Err(ConfigError::Invalid("tenant name exceeds max length".to_string()));
    }
    if tenant == USER_TENANT {
        return Err(ConfigError::Invalid(format!(
            "'{USER_TENANT}' is reserved and cannot be configured as a tenant"
        )));
    }
    Ok(())
}
