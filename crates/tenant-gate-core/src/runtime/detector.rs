// crates/tenant-gate-core/src/runtime/detector.rs
// ============================================================================
// Module: Tenant Gate Shared Index Detector
// Description: Exclusive shared-index detection over resolved target sets.
// Purpose: Decide whether a request touches the shared index and nothing else.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A request qualifies for rewriting only when the resolver determined it
//! touches exclusively the shared index — either the concrete-index set or
//! the alias set is exactly the shared name. Mixed sets, larger sets, and
//! sets naming anything else do not qualify.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::IndexName;
use crate::core::ResolvedTargets;

// ============================================================================
// SECTION: Detection
// ============================================================================

/// Returns true when the resolved sets denote exclusively the shared index.
#[must_use]
pub fn is_exclusive_target(resolved: &ResolvedTargets, shared: &IndexName) -> bool {
    is_sole_member(resolved.indices(), shared) || is_sole_member(resolved.aliases(), shared)
}

/// Returns true when the set contains exactly the given name.
fn is_sole_member(set: &BTreeSet<IndexName>, name: &IndexName) -> bool {
    set.len() == 1 && set.iter().next().is_some_and(|member| member == name)
}
