// crates/tenant-gate-core/src/core/settings.rs
// ============================================================================
// Module: Tenant Gate Multitenancy Settings
// Description: Configuration snapshot consumed by the interception engine.
// Purpose: Carry the enabled flag, service identity, and shared index name.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The multitenancy settings are a point-in-time snapshot of the three
//! configuration values the engine consumes. Loading and refreshing them is
//! the configuration layer's concern; the engine only reads the snapshot it
//! was constructed with.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IndexName;
use crate::core::identifiers::UserName;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default service account issuing dashboard backend requests.
pub const DEFAULT_SERVICE_USERNAME: &str = "dashboardserver";

/// Default shared dashboard index name.
pub const DEFAULT_SHARED_INDEX: &str = ".dashboard";

// ============================================================================
// SECTION: Multitenancy Settings
// ============================================================================

/// Configuration snapshot for the interception engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultitenancyConfig {
    /// Whether tenant isolation is enforced at all.
    pub enabled: bool,
    /// Distinguished backend-internal account exempt from rewriting.
    pub service_username: UserName,
    /// Shared index name that rewriting retargets.
    pub shared_index: IndexName,
}

impl Default for MultitenancyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            service_username: UserName::new(DEFAULT_SERVICE_USERNAME),
            shared_index: IndexName::new(DEFAULT_SHARED_INDEX),
        }
    }
}
