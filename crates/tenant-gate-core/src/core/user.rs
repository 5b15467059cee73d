// crates/tenant-gate-core/src/core/user.rs
// ============================================================================
// Module: Tenant Gate User Context
// Description: Requesting user identity and requested tenant.
// Purpose: Carry the authenticated identity attached to an intercepted request.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The user context is produced by an external authentication layer and
//! consumed read-only by the interception engine. The reserved tenant value
//! [`USER_TENANT`] stands for "the user's private tenant" and is substituted
//! with the user's own identity before any other processing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::TenantId;
use crate::core::identifiers::UserName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Reserved tenant value denoting the requesting user's private tenant.
pub const USER_TENANT: &str = "__user__";

// ============================================================================
// SECTION: User Context
// ============================================================================

/// Authenticated user attached to an intercepted request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identity.
    pub name: UserName,
    /// Tenant requested for this request, if any.
    pub requested_tenant: Option<TenantId>,
}

impl User {
    /// Creates a user context with no requested tenant.
    #[must_use]
    pub fn new(name: impl Into<UserName>) -> Self {
        Self {
            name: name.into(),
            requested_tenant: None,
        }
    }

    /// Returns the same user with the given requested tenant.
    #[must_use]
    pub fn with_requested_tenant(mut self, tenant: impl Into<TenantId>) -> Self {
        self.requested_tenant = Some(tenant.into());
        self
    }

    /// Returns the requested tenant when present and non-empty.
    #[must_use]
    pub fn requested_tenant(&self) -> Option<&TenantId> {
        self.requested_tenant.as_ref().filter(|tenant| !tenant.is_empty())
    }
}
