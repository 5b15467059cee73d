// crates/tenant-gate-config/tests/config.rs
// ============================================================================
// Module: Config Tests
// Description: Validate configuration parsing, defaults, and fail-closed limits.
// Purpose: Ensure invalid configuration is rejected rather than defaulted.
// Dependencies: tenant-gate-config, tenant-gate-core, tempfile
// ============================================================================

//! Configuration loading and validation tests.

use std::fs;

use tenant_gate_config::ConfigError;
use tenant_gate_config::GateConfig;
use tenant_gate_core::TenantAccess;
use tenant_gate_core::TenantId;

#[test]
fn empty_config_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let config = GateConfig::from_toml_str("")?;

    let snapshot = config.multitenancy_config();
    if !snapshot.enabled {
        return Err("expected multitenancy enabled by default".into());
    }
    if snapshot.service_username.as_str() != "dashboardserver" {
        return Err(format!("unexpected default service user: {}", snapshot.service_username)
            .into());
    }
    if snapshot.shared_index.as_str() != ".dashboard" {
        return Err(format!("unexpected default shared index: {}", snapshot.shared_index).into());
    }
    if !config.permission_table().is_empty() {
        return Err("expected no default tenants".into());
    }
    Ok(())
}

#[test]
fn full_config_round_trips_into_snapshots() -> Result<(), Box<dyn std::error::Error>> {
    let content = r#"
[multitenancy]
enabled = true
service_username = "dashboardserver"
shared_index = "main_idx"

[tenants.sales]
access = "read_write"

[tenants.ops]
access = "read_only"
"#;
    let config = GateConfig::from_toml_str(content)?;

    let snapshot = config.multitenancy_config();
    if snapshot.shared_index.as_str() != "main_idx" {
        return Err(format!("unexpected shared index: {}", snapshot.shared_index).into());
    }

    let table = config.permission_table();
    if table.access(&TenantId::new("sales")) != Some(TenantAccess::ReadWrite) {
        return Err("expected read-write access for sales".into());
    }
    if table.access(&TenantId::new("ops")) != Some(TenantAccess::ReadOnly) {
        return Err("expected read-only access for ops".into());
    }
    if table.access(&TenantId::new("absent")).is_some() {
        return Err("expected no access entry for unknown tenant".into());
    }
    Ok(())
}

#[test]
fn unknown_fields_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let content = r#"
[multitenancy]
shared_index = "main_idx"
surprise = true
"#;
    match GateConfig::from_toml_str(content) {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("expected parse error, got {other}").into()),
        Ok(_) => Err("expected unknown field to be rejected".into()),
    }
}

#[test]
fn empty_service_username_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let content = r#"
[multitenancy]
service_username = ""
"#;
    match GateConfig::from_toml_str(content) {
        Err(ConfigError::Invalid(_)) => Ok(()),
        Err(other) => Err(format!("expected invalid-config error, got {other}").into()),
        Ok(_) => Err("expected empty service username to be rejected".into()),
    }
}

#[test]
fn malformed_shared_index_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    for shared_index in ["", "_leading", "Has Spaces", "UPPER"] {
        let content = format!("[multitenancy]\nshared_index = \"{shared_index}\"\n");
        if GateConfig::from_toml_str(&content).is_ok() {
            return Err(format!("expected shared index '{shared_index}' to be rejected").into());
        }
    }
    Ok(())
}

#[test]
fn reserved_tenant_name_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let content = r#"
[tenants."__user__"]
access = "read_write"
"#;
    match GateConfig::from_toml_str(content) {
        Err(ConfigError::Invalid(_)) => Ok(()),
        Err(other) => Err(format!("expected invalid-config error, got {other}").into()),
        Ok(_) => Err("expected reserved tenant to be rejected".into()),
    }
}

#[test]
fn load_reads_configuration_from_disk() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tenant-gate.toml");
    fs::write(
        &path,
        "[multitenancy]\nshared_index = \"main_idx\"\n\n[tenants.sales]\naccess = \"read_write\"\n",
    )?;

    let config = GateConfig::load(Some(path.as_path()))?;
    if config.multitenancy_config().shared_index.as_str() != "main_idx" {
        return Err("unexpected shared index after disk load".into());
    }
    Ok(())
}

#[test]
fn oversized_config_file_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tenant-gate.toml");
    let mut content = String::from("[multitenancy]\nshared_index = \"main_idx\"\n");
    content.push_str(&"# padding\n".repeat(200_000));
    fs::write(&path, content)?;

    match GateConfig::load(Some(path.as_path())) {
        Err(ConfigError::Invalid(message)) => {
            if !message.contains("size limit") {
                return Err(format!("unexpected rejection reason: {message}").into());
            }
            Ok(())
        }
        Err(other) => Err(format!("expected size rejection, got {other}").into()),
        Ok(_) => Err("expected oversized file to be rejected".into()),
    }
}

#[test]
fn missing_file_is_an_io_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent.toml");

    match GateConfig::load(Some(path.as_path())) {
        Err(ConfigError::Io(_)) => Ok(()),
        Err(other) => Err(format!("expected io error, got {other}").into()),
        Ok(_) => Err("expected missing file to fail".into()),
    }
}
