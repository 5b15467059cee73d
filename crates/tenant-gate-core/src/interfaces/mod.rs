// crates/tenant-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Tenant Gate Interfaces
// Description: Backend-agnostic interfaces injected into the engine.
// Purpose: Define the contract surfaces used by the interception runtime.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Interfaces define how Tenant Gate integrates with external systems without
//! embedding backend-specific details. The decision log is injected as an
//! explicit dependency rather than reached through a process-global logger.

// ============================================================================
// SECTION: Decision Log
// ============================================================================

/// Injected sink for decision diagnostics.
///
/// Denials and existing-index hits are reported here; implementations decide
/// where the lines go. [`crate::runtime::TracingLog`] forwards to `tracing`,
/// [`crate::runtime::NoopLog`] discards everything.
pub trait DecisionLog {
    /// Records a warning, such as a denied tenant.
    fn warn(&self, message: &str);

    /// Records a debug detail, such as an existing tenant index.
    fn debug(&self, message: &str);
}
