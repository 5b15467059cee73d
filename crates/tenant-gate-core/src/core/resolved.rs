// crates/tenant-gate-core/src/core/resolved.rs
// ============================================================================
// Module: Tenant Gate Resolved Targets
// Description: Concrete index and alias sets a request resolves to.
// Purpose: Carry the resolver's output consumed by the interception engine.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Resolved targets are computed by an external resolver from a request's raw
//! index patterns. Only the resolved sets are known to this core, not the
//! request's full semantic intent; set size and membership drive every
//! interception decision.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IndexName;

// ============================================================================
// SECTION: Resolved Targets
// ============================================================================

/// Concrete index and alias sets a request is determined to touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTargets {
    /// Concrete index names.
    indices: BTreeSet<IndexName>,
    /// Alias names.
    aliases: BTreeSet<IndexName>,
}

impl ResolvedTargets {
    /// Creates resolved targets from index and alias sets.
    #[must_use]
    pub fn new(
        indices: impl IntoIterator<Item = IndexName>,
        aliases: impl IntoIterator<Item = IndexName>,
    ) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            aliases: aliases.into_iter().collect(),
        }
    }

    /// Returns the resolved concrete index names.
    #[must_use]
    pub const fn indices(&self) -> &BTreeSet<IndexName> {
        &self.indices
    }

    /// Returns the resolved alias names.
    #[must_use]
    pub const fn aliases(&self) -> &BTreeSet<IndexName> {
        &self.aliases
    }

    /// Returns the single resolved concrete index, if there is exactly one.
    #[must_use]
    pub fn sole_index(&self) -> Option<&IndexName> {
        if self.indices.len() == 1 { self.indices.iter().next() } else { None }
    }
}

impl fmt::Display for ResolvedTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("indices=[")?;
        write_names(f, &self.indices)?;
        f.write_str("] aliases=[")?;
        write_names(f, &self.aliases)?;
        f.write_str("]")
    }
}

/// Writes a comma-separated name list.
fn write_names(f: &mut fmt::Formatter<'_>, names: &BTreeSet<IndexName>) -> fmt::Result {
    for (position, name) in names.iter().enumerate() {
        if position > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}")?;
    }
    Ok(())
}
