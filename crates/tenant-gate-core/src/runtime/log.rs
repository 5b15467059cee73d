// crates/tenant-gate-core/src/runtime/log.rs
// ============================================================================
// Module: Tenant Gate Log Implementations
// Description: Provided implementations of the decision log interface.
// Purpose: Forward decision diagnostics to tracing, or discard them.
// Dependencies: crate::interfaces, tracing
// ============================================================================

//! ## Overview
//! Embedders that already run a `tracing` subscriber use [`TracingLog`];
//! tests and hosts with their own diagnostics pipeline use [`NoopLog`] or
//! implement [`DecisionLog`] themselves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::interfaces::DecisionLog;

// ============================================================================
// SECTION: Tracing Log
// ============================================================================

/// Decision log forwarding to the `tracing` ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DecisionLog for TracingLog {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "tenant_gate", "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "tenant_gate", "{message}");
    }
}

// ============================================================================
// SECTION: Noop Log
// ============================================================================

/// Decision log that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl DecisionLog for NoopLog {
    fn warn(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}
}
