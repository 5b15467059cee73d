// crates/tenant-gate-core/src/core/provision.rs
// ============================================================================
// Module: Tenant Gate Provisioning Types
// Description: Index-creation specification and fixed tenant index settings.
// Purpose: Describe the creation request the caller executes for absent tenant indices.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A tenant index is created under a suffixed primary name with the unsuffixed
//! name attached as an alias, so the physical index can later be swapped
//! behind the alias. Settings are fixed: one shard, replicas auto-expanded
//! between zero and one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IndexName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Suffix appended to a tenant index alias to form the primary physical name.
pub const TENANT_INDEX_SUFFIX: &str = "_1";

/// Shard count for tenant indices.
const TENANT_INDEX_SHARDS: u32 = 1;

/// Replica auto-expand range for tenant indices.
const TENANT_INDEX_AUTO_EXPAND_REPLICAS: &str = "0-1";

// ============================================================================
// SECTION: Index Settings
// ============================================================================

/// Settings applied when creating an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSettings {
    /// Number of primary shards.
    pub number_of_shards: u32,
    /// Replica auto-expand range.
    pub auto_expand_replicas: String,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            number_of_shards: TENANT_INDEX_SHARDS,
            auto_expand_replicas: TENANT_INDEX_AUTO_EXPAND_REPLICAS.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Creation Specification
// ============================================================================

/// Idempotent index-creation specification produced for the caller to execute.
///
/// # Invariants
/// - `index` is `alias` plus [`TENANT_INDEX_SUFFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexCreationSpec {
    /// Primary physical index name.
    pub index: IndexName,
    /// Alias pointing at the primary index.
    pub alias: IndexName,
    /// Fixed settings for the new index.
    pub settings: IndexSettings,
}

// ============================================================================
// SECTION: Naming Helpers
// ============================================================================

/// Returns the primary physical name for a tenant index alias.
#[must_use]
pub fn primary_index_name(alias: &IndexName) -> IndexName {
    IndexName::new(format!("{alias}{TENANT_INDEX_SUFFIX}"))
}
