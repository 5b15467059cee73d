// crates/tenant-gate-core/src/core/request.rs
// ============================================================================
// Module: Tenant Gate Storage Requests
// Description: Closed sum type over every supported backend request shape.
// Purpose: Make request-shape dispatch exhaustive at compile time.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! `StorageRequest` enumerates the heterogeneous request shapes the backend
//! exposes: single-target document operations, batched writes, composite
//! reads, refresh, generic indices-settable requests, index creation, and
//! read-only field-mapping metadata requests. The rewriter matches over this
//! enum exhaustively, so an unhandled shape is a compile error rather than a
//! runtime gap.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::IndexName;
use crate::core::provision::IndexSettings;

// ============================================================================
// SECTION: Single-Target Requests
// ============================================================================

/// Single-document write request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocWriteRequest {
    /// Target index.
    pub index: IndexName,
    /// Document identifier, or `None` for auto-assignment.
    pub id: Option<String>,
    /// Document source.
    pub source: Value,
}

/// Single-document delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocDeleteRequest {
    /// Target index.
    pub index: IndexName,
    /// Document identifier.
    pub id: String,
}

/// Single-document update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocUpdateRequest {
    /// Target index.
    pub index: IndexName,
    /// Document identifier.
    pub id: String,
    /// Partial document applied to the existing source.
    pub patch: Value,
}

/// Shard-targeted single-index read, such as a document get or explain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardReadRequest {
    /// Target index.
    pub index: IndexName,
    /// Document identifier.
    pub id: String,
}

/// Replication-group write targeting a single index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicatedWriteRequest {
    /// Target index.
    pub index: IndexName,
}

/// Generic request whose index list can be replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicesRequest {
    /// Target indices.
    pub indices: Vec<IndexName>,
}

// ============================================================================
// SECTION: Batched Writes
// ============================================================================

/// One sub-operation inside a batched write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkOperation {
    /// Create-style document write.
    Write(DocWriteRequest),
    /// Document delete.
    Delete(DocDeleteRequest),
    /// Document update.
    Update(DocUpdateRequest),
}

/// Batched write request containing heterogeneous sub-operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkRequest {
    /// Contained sub-operations, in submission order.
    pub operations: Vec<BulkOperation>,
}

// ============================================================================
// SECTION: Composite Reads
// ============================================================================

/// One item of a multi-get request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiGetItem {
    /// Target index.
    pub index: IndexName,
    /// Document identifier.
    pub id: String,
}

/// Multi-get request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiGetRequest {
    /// Contained get items.
    pub items: Vec<MultiGetItem>,
}

/// One search of a multi-search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSlice {
    /// Target indices for this search.
    pub indices: Vec<IndexName>,
    /// Search body.
    pub query: Value,
}

/// Multi-search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiSearchRequest {
    /// Contained searches.
    pub searches: Vec<SearchSlice>,
}

/// One item of a multi-term-vectors request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermVectorsItem {
    /// Target index.
    pub index: IndexName,
    /// Document identifier.
    pub id: String,
}

/// Multi-term-vectors request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiTermVectorsRequest {
    /// Contained term-vector items.
    pub items: Vec<TermVectorsItem>,
}

// ============================================================================
// SECTION: Index-Level Requests
// ============================================================================

/// Refresh request over a set of indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Target indices.
    pub indices: Vec<IndexName>,
}

/// Index-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIndexRequest {
    /// Name of the index to create.
    pub index: IndexName,
    /// Aliases pointing at the new index.
    pub aliases: Vec<IndexName>,
    /// Index settings.
    pub settings: IndexSettings,
}

/// Read-only field-mappings metadata request. Targets are already resolved
/// by the time this shape is intercepted, so no rewrite applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMappingsRequest {
    /// Indices the mappings are read from.
    pub indices: Vec<IndexName>,
    /// Field name patterns.
    pub fields: Vec<String>,
}

// ============================================================================
// SECTION: Request Sum Type
// ============================================================================

/// Every request shape the interception engine can rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageRequest {
    /// Single-document write.
    DocWrite(DocWriteRequest),
    /// Single-document delete.
    DocDelete(DocDeleteRequest),
    /// Single-document update.
    DocUpdate(DocUpdateRequest),
    /// Batched writes.
    Bulk(BulkRequest),
    /// Multi-get.
    MultiGet(MultiGetRequest),
    /// Multi-search.
    MultiSearch(MultiSearchRequest),
    /// Multi-term-vectors.
    MultiTermVectors(MultiTermVectorsRequest),
    /// Refresh.
    Refresh(RefreshRequest),
    /// Shard-targeted single-index read.
    ShardRead(ShardReadRequest),
    /// Replication-group write.
    ReplicatedWrite(ReplicatedWriteRequest),
    /// Generic indices-settable request.
    Indices(IndicesRequest),
    /// Index creation.
    CreateIndex(CreateIndexRequest),
    /// Read-only field-mappings metadata.
    FieldMappings(FieldMappingsRequest),
}
