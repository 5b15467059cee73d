// crates/tenant-gate-core/src/runtime/engine.rs
// ============================================================================
// Module: Tenant Gate Interception Engine
// Description: Ordered decision evaluation for intercepted requests.
// Purpose: Deny, rewrite, or pass through each request exactly once.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! The engine is the single decision path for every intercepted request. It
//! holds only the configuration snapshot and the injected log; it is a pure
//! function of its inputs plus the caller-supplied permission and namespace
//! snapshots, and is safe for concurrent invocation from multiple
//! request-handling threads without locking.
//!
//! Decision steps, first match wins: disabled multitenancy passes through;
//! an empty requested tenant is gated on the global tenant when the shared
//! index is the sole target; a request already aimed at the correctly-mapped
//! tenant index is granted as-is; an exclusive shared-index request is denied
//! or rewritten per the permission table; anything else (mixed targets,
//! service identity) passes through unmodified.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::ClusterNamespace;
use crate::core::Decision;
use crate::core::GLOBAL_TENANT;
use crate::core::MultitenancyConfig;
use crate::core::PermissionTable;
use crate::core::ResolvedTargets;
use crate::core::StorageRequest;
use crate::core::TenantId;
use crate::core::USER_TENANT;
use crate::core::User;
use crate::interfaces::DecisionLog;
use crate::runtime::checker::is_tenant_allowed;
use crate::runtime::detector::is_exclusive_target;
use crate::runtime::mapper::MapperError;
use crate::runtime::mapper::tenant_index_name;
use crate::runtime::rewriter::rewrite_request;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised during interception evaluation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Tenant-to-index mapping failed. The empty-tenant case is defensive
    /// and indicates malformed identity input, not a deniable request.
    #[error("tenant index mapping failed: {0}")]
    Mapping(#[from] MapperError),
}

// ============================================================================
// SECTION: Interception Engine
// ============================================================================

/// Interception engine deciding and rewriting intercepted requests.
pub struct InterceptionEngine<L> {
    /// Multitenancy configuration snapshot.
    config: MultitenancyConfig,
    /// Injected decision log.
    log: L,
}

impl<L> InterceptionEngine<L>
where
    L: DecisionLog,
{
    /// Creates an engine over a configuration snapshot and log.
    #[must_use]
    pub const fn new(config: MultitenancyConfig, log: L) -> Self {
        Self {
            config,
            log,
        }
    }

    /// Returns the configuration snapshot the engine was built with.
    #[must_use]
    pub const fn config(&self) -> &MultitenancyConfig {
        &self.config
    }

    /// Evaluates one intercepted request, rewriting it in place when access
    /// is granted against a tenant-private index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Mapping`] when an empty tenant reaches the
    /// index name mapper; upstream identity checks make this unreachable.
    pub fn intercept(
        &self,
        request: &mut StorageRequest,
        action: &str,
        user: &User,
        resolved: &ResolvedTargets,
        tenants: &PermissionTable,
        namespace: &ClusterNamespace,
    ) -> Result<Decision, EngineError> {
        if !self.config.enabled {
            return Ok(Decision::ContinueEvaluation);
        }

        let shared = &self.config.shared_index;
        let is_service = user.name == self.config.service_username;

        // Rewriting only applies to non-service requests whose resolved
        // targets are exclusively the shared index or its alias.
        let shared_index_only = !is_service && is_exclusive_target(resolved, shared);

        let Some(requested) = user.requested_tenant() else {
            self.log.debug(&format!("no tenant requested, will resolve to {shared}"));
            if shared_index_only {
                let global = TenantId::new(GLOBAL_TENANT);
                if !is_tenant_allowed(tenants, &global, action, user, &self.log) {
                    return Ok(Decision::AccessDenied);
                }
            }
            return Ok(Decision::ContinueEvaluation);
        };

        let tenant = if requested.as_str() == USER_TENANT {
            TenantId::new(user.name.as_str())
        } else {
            requested.clone()
        };

        if !is_service {
            self.log.debug(&format!("requested tenant {tenant} resolved against {resolved}"));
            let tenant_index = tenant_index_name(shared, &tenant)?;

            // The request may already target the correctly-mapped tenant
            // index; grant it without rewriting or provisioning.
            if let Some(sole) = resolved.sole_index() {
                if sole.as_str().starts_with(tenant_index.as_str())
                    && is_tenant_allowed(tenants, &tenant, action, user, &self.log)
                {
                    return Ok(Decision::AccessGranted {
                        create: None,
                    });
                }
            }

            if shared_index_only {
                if !is_tenant_allowed(tenants, &tenant, action, user, &self.log) {
                    return Ok(Decision::AccessDenied);
                }

                let create = rewrite_request(request, shared, &tenant_index, namespace, &self.log);
                return Ok(Decision::AccessGranted {
                    create,
                });
            }

            self.log.debug(&format!("{resolved} does not contain only {shared}"));
        }

        Ok(Decision::ContinueEvaluation)
    }
}
