// crates/tenant-gate-core/src/runtime/provision.rs
// ============================================================================
// Module: Tenant Gate Index Provisioner
// Description: Idempotent creation spec for absent tenant indices.
// Purpose: Decide whether the caller must create the tenant index first.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The provisioner inspects the caller-supplied namespace snapshot for the
//! tenant index alias and its primary physical name. When either exists no
//! creation is needed. Two concurrent requests may both observe an absent
//! index and both produce a creation spec; the executor treats the resulting
//! "already exists" outcome as success, not as an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ClusterNamespace;
use crate::core::IndexCreationSpec;
use crate::core::IndexName;
use crate::core::IndexSettings;
use crate::core::primary_index_name;
use crate::interfaces::DecisionLog;

// ============================================================================
// SECTION: Provisioning
// ============================================================================

/// Returns a creation spec when neither the tenant index alias nor its
/// primary physical name exists in the namespace snapshot.
pub fn creation_spec_if_absent<L: DecisionLog>(
    namespace: &ClusterNamespace,
    tenant_index: &IndexName,
    log: &L,
) -> Option<IndexCreationSpec> {
    let primary = primary_index_name(tenant_index);

    for candidate in [tenant_index, &primary] {
        if let Some(entry) = namespace.entry(candidate) {
            log.debug(&format!("{entry} {candidate} already exists"));
            return None;
        }
    }

    Some(IndexCreationSpec {
        index: primary,
        alias: tenant_index.clone(),
        settings: IndexSettings::default(),
    })
}
