// crates/tenant-gate-core/src/runtime/mapper.rs
// ============================================================================
// Module: Tenant Gate Index Name Mapper
// Description: Deterministic tenant to physical index name mapping.
// Purpose: Derive the tenant-private index name from the shared index name.
// Dependencies: crate::core, sha2
// ============================================================================

//! ## Overview
//! The mapper is a pure, total function: identical inputs yield the identical
//! physical name, across calls and across process restarts. The name carries
//! both a sanitized form of the tenant (readable) and a stable hash component
//! (disambiguates tenants whose sanitized forms coincide). The hash is
//! SHA-256 truncated to four bytes, hex-encoded — never a per-process or
//! per-runtime hash.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

use crate::core::IndexName;
use crate::core::TenantId;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Bytes of the SHA-256 digest kept for the name's hash component.
const TENANT_HASH_BYTES: usize = 4;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when mapping a tenant to a physical index name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapperError {
    /// The tenant identifier was empty. Upstream checks make this
    /// unreachable; reaching it indicates a caller bug.
    #[error("tenant must not be empty here")]
    EmptyTenant,
}

// ============================================================================
// SECTION: Mapping
// ============================================================================

/// Maps a shared index name and tenant to the tenant-private physical name.
///
/// # Errors
///
/// Returns [`MapperError::EmptyTenant`] when the tenant carries no characters.
pub fn tenant_index_name(
    shared: &IndexName,
    tenant: &TenantId,
) -> Result<IndexName, MapperError> {
    if tenant.is_empty() {
        return Err(MapperError::EmptyTenant);
    }

    let hash = stable_tenant_hash(tenant);
    let sanitized = sanitize_tenant(tenant);
    Ok(IndexName::new(format!("{shared}_{hash}_{sanitized}")))
}

/// Returns the stable hash component for a tenant.
fn stable_tenant_hash(tenant: &TenantId) -> String {
    let mut hasher = Sha256::new();
    hasher.update(tenant.as_str().as_bytes());
    let digest = hasher.finalize();
    hex_encode(&digest[.. TENANT_HASH_BYTES])
}

/// Lowercases a tenant and strips every character outside `[a-z0-9]`.
fn sanitize_tenant(tenant: &TenantId) -> String {
    tenant
        .as_str()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
