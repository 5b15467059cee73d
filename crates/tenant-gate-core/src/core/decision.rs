// crates/tenant-gate-core/src/core/decision.rs
// ============================================================================
// Module: Tenant Gate Decisions
// Description: Interception decision returned to the caller.
// Purpose: Express deny, grant-with-rewrite, or pass-through outcomes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! One decision is produced per intercepted request. `ContinueEvaluation`
//! hands the request back to the caller's normal evaluation flow unmodified;
//! `AccessDenied` is surfaced as an authorization failure; `AccessGranted`
//! means the request (possibly rewritten in place) may proceed, optionally
//! preceded by the contained index creation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::provision::IndexCreationSpec;

// ============================================================================
// SECTION: Decision
// ============================================================================

/// Outcome of one interception evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Proceed through the caller's original evaluation flow.
    ContinueEvaluation,
    /// Deny the request outright.
    AccessDenied,
    /// Allow the request, possibly after an in-place rewrite.
    AccessGranted {
        /// Index creation the caller must execute first, when the tenant
        /// index does not exist yet.
        create: Option<IndexCreationSpec>,
    },
}

impl Decision {
    /// Returns true when the decision grants access.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::AccessGranted { .. })
    }
}
