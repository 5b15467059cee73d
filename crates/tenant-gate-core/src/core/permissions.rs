// crates/tenant-gate-core/src/core/permissions.rs
// ============================================================================
// Module: Tenant Gate Permissions
// Description: Per-tenant access levels and the permission table.
// Purpose: Provide the caller-supplied permission snapshot consumed by checks.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The permission table maps tenant identifiers to an access level. Absence of
//! a tenant means "not permitted at all". The table is a point-in-time
//! snapshot supplied by the caller; this core never loads or refreshes it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::TenantId;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Reserved tenant representing shared state not bound to a specific tenant.
pub const GLOBAL_TENANT: &str = "global_tenant";

/// Action-name prefix identifying write operations.
pub const WRITE_ACTION_PREFIX: &str = "indices:data/write";

// ============================================================================
// SECTION: Access Level
// ============================================================================

/// Access level granted to a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantAccess {
    /// Tenant may read but not write.
    ReadOnly,
    /// Tenant may read and write.
    ReadWrite,
}

// ============================================================================
// SECTION: Permission Table
// ============================================================================

/// Point-in-time tenant permission snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionTable {
    /// Access level per tenant.
    entries: BTreeMap<TenantId, TenantAccess>,
}

impl PermissionTable {
    /// Creates an empty permission table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Records an access level for a tenant.
    pub fn insert(&mut self, tenant: impl Into<TenantId>, access: TenantAccess) {
        self.entries.insert(tenant.into(), access);
    }

    /// Returns the access level for a tenant, or `None` when absent.
    #[must_use]
    pub fn access(&self, tenant: &TenantId) -> Option<TenantAccess> {
        self.entries.get(tenant).copied()
    }

    /// Returns the number of tenants in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table holds no tenants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(TenantId, TenantAccess)> for PermissionTable {
    fn from_iter<I: IntoIterator<Item = (TenantId, TenantAccess)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
