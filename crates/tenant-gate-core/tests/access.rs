// crates/tenant-gate-core/tests/access.rs
// ============================================================================
// Module: Access Tests
// Description: Validate tenant permission checks and shared-index detection.
// Purpose: Ensure denial rules and exclusive-target classification hold.
// Dependencies: tenant-gate-core
// ============================================================================

//! Permission-check and detector behavior tests.

use tenant_gate_core::IndexName;
use tenant_gate_core::NoopLog;
use tenant_gate_core::PermissionTable;
use tenant_gate_core::ResolvedTargets;
use tenant_gate_core::TenantAccess;
use tenant_gate_core::TenantId;
use tenant_gate_core::User;
use tenant_gate_core::runtime::is_exclusive_target;
use tenant_gate_core::runtime::is_tenant_allowed;

/// Actions exercised by the checker tests.
const WRITE_ACTION: &str = "indices:data/write/index";
/// Read action without the write prefix.
const READ_ACTION: &str = "indices:data/read/search";

#[test]
fn absent_tenant_is_denied_for_every_action() -> Result<(), Box<dyn std::error::Error>> {
    let table = PermissionTable::new();
    let tenant = TenantId::new("sales");
    let user = User::new("alice");

    for action in [READ_ACTION, WRITE_ACTION, "indices:admin/create"] {
        if is_tenant_allowed(&table, &tenant, action, &user, &NoopLog) {
            return Err(format!("expected denial for absent tenant on {action}").into());
        }
    }
    Ok(())
}

#[test]
fn read_only_tenant_is_denied_writes_only() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = PermissionTable::new();
    table.insert("ops", TenantAccess::ReadOnly);
    let tenant = TenantId::new("ops");
    let user = User::new("alice");

    if is_tenant_allowed(&table, &tenant, WRITE_ACTION, &user, &NoopLog) {
        return Err("expected write denial for read-only tenant".into());
    }
    if !is_tenant_allowed(&table, &tenant, READ_ACTION, &user, &NoopLog) {
        return Err("expected read access for read-only tenant".into());
    }
    Ok(())
}

#[test]
fn read_write_tenant_is_allowed_writes() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = PermissionTable::new();
    table.insert("sales", TenantAccess::ReadWrite);
    let tenant = TenantId::new("sales");
    let user = User::new("alice");

    if !is_tenant_allowed(&table, &tenant, WRITE_ACTION, &user, &NoopLog) {
        return Err("expected write access for read-write tenant".into());
    }
    Ok(())
}

#[test]
fn sole_shared_index_is_exclusive() -> Result<(), Box<dyn std::error::Error>> {
    let shared = IndexName::new("main_idx");
    let resolved = ResolvedTargets::new([IndexName::new("main_idx")], []);

    if !is_exclusive_target(&resolved, &shared) {
        return Err("expected exclusive detection for sole shared index".into());
    }
    Ok(())
}

#[test]
fn sole_shared_alias_is_exclusive() -> Result<(), Box<dyn std::error::Error>> {
    let shared = IndexName::new("main_idx");
    let resolved =
        ResolvedTargets::new([IndexName::new("main_idx_1")], [IndexName::new("main_idx")]);

    if !is_exclusive_target(&resolved, &shared) {
        return Err("expected exclusive detection for sole shared alias".into());
    }
    Ok(())
}

#[test]
fn mixed_or_foreign_sets_are_not_exclusive() -> Result<(), Box<dyn std::error::Error>> {
    let shared = IndexName::new("main_idx");

    let mixed = ResolvedTargets::new(
        [IndexName::new("main_idx"), IndexName::new("other_idx")],
        [],
    );
    if is_exclusive_target(&mixed, &shared) {
        return Err("expected mixed index set to be non-exclusive".into());
    }

    let foreign = ResolvedTargets::new([IndexName::new("other_idx")], []);
    if is_exclusive_target(&foreign, &shared) {
        return Err("expected foreign index to be non-exclusive".into());
    }

    let mixed_aliases = ResolvedTargets::new(
        [],
        [IndexName::new("main_idx"), IndexName::new("other_alias")],
    );
    if is_exclusive_target(&mixed_aliases, &shared) {
        return Err("expected mixed alias set to be non-exclusive".into());
    }

    let empty = ResolvedTargets::default();
    if is_exclusive_target(&empty, &shared) {
        return Err("expected empty resolution to be non-exclusive".into());
    }
    Ok(())
}
