// crates/tenant-gate-core/src/runtime/checker.rs
// ============================================================================
// Module: Tenant Gate Access Checker
// Description: Tenant permission evaluation against the permission table.
// Purpose: Decide whether a tenant may perform an action, warning on denial.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! A tenant absent from the permission table is denied for every action. A
//! read-only tenant is denied for actions whose name carries the well-known
//! write prefix. Every denial is reported through the injected decision log.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::PermissionTable;
use crate::core::TenantAccess;
use crate::core::TenantId;
use crate::core::User;
use crate::core::WRITE_ACTION_PREFIX;
use crate::interfaces::DecisionLog;

// ============================================================================
// SECTION: Access Check
// ============================================================================

/// Returns true when the tenant may perform the action.
pub fn is_tenant_allowed<L: DecisionLog>(
    table: &PermissionTable,
    tenant: &TenantId,
    action: &str,
    user: &User,
    log: &L,
) -> bool {
    let Some(access) = table.access(tenant) else {
        log.warn(&format!("tenant {tenant} is not allowed for user {}", user.name));
        return false;
    };

    if access == TenantAccess::ReadOnly && action.starts_with(WRITE_ACTION_PREFIX) {
        log.warn(&format!("tenant {tenant} is not allowed to write (user: {})", user.name));
        return false;
    }

    true
}
