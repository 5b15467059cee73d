// crates/tenant-gate-core/src/core/namespace.rs
// ============================================================================
// Module: Tenant Gate Cluster Namespace
// Description: Point-in-time snapshot of the backend index/alias namespace.
// Purpose: Let provisioning decide existence without touching cluster state.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The cluster namespace is a read-only snapshot of every index and alias
//! name known to the backend at interception time. It is supplied by the
//! caller as an already-read value; this core never queries the cluster.
//! Concurrent requests may observe the same snapshot and both decide that a
//! tenant index needs creation — the downstream executor treats a concurrent
//! "already exists" outcome as success.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IndexName;

// ============================================================================
// SECTION: Namespace Entry
// ============================================================================

/// Kind of a name present in the cluster namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamespaceEntry {
    /// The name denotes a concrete index.
    ConcreteIndex,
    /// The name denotes an alias.
    Alias,
}

impl fmt::Display for NamespaceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConcreteIndex => f.write_str("index"),
            Self::Alias => f.write_str("alias"),
        }
    }
}

// ============================================================================
// SECTION: Cluster Namespace
// ============================================================================

/// Read-only index/alias namespace snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterNamespace {
    /// Entry kind per known name.
    entries: BTreeMap<IndexName, NamespaceEntry>,
}

impl ClusterNamespace {
    /// Creates an empty namespace snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the same snapshot with a concrete index recorded.
    #[must_use]
    pub fn with_index(mut self, name: impl Into<IndexName>) -> Self {
        self.entries.insert(name.into(), NamespaceEntry::ConcreteIndex);
        self
    }

    /// Returns the same snapshot with an alias recorded.
    #[must_use]
    pub fn with_alias(mut self, name: impl Into<IndexName>) -> Self {
        self.entries.insert(name.into(), NamespaceEntry::Alias);
        self
    }

    /// Returns the entry kind for a name, or `None` when absent.
    #[must_use]
    pub fn entry(&self, name: &IndexName) -> Option<NamespaceEntry> {
        self.entries.get(name).copied()
    }

    /// Returns true when the name exists as an index or alias.
    #[must_use]
    pub fn contains(&self, name: &IndexName) -> bool {
        self.entries.contains_key(name)
    }
}
