// crates/tenant-gate-core/src/core/mod.rs
// ============================================================================
// Module: Tenant Gate Core Types
// Description: Canonical request, permission, and namespace structures.
// Purpose: Provide stable, serializable types for interception decisions.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types define the request shapes, permission snapshot, resolved target
//! sets, and decision values exchanged with the caller. These types are the
//! canonical source of truth for any derived API surface.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod decision;
pub mod identifiers;
pub mod namespace;
pub mod permissions;
pub mod provision;
pub mod request;
pub mod resolved;
pub mod settings;
pub mod user;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use decision::Decision;
pub use identifiers::IndexName;
pub use identifiers::TenantId;
pub use identifiers::UserName;
pub use namespace::ClusterNamespace;
pub use namespace::NamespaceEntry;
pub use permissions::GLOBAL_TENANT;
pub use permissions::PermissionTable;
pub use permissions::TenantAccess;
pub use permissions::WRITE_ACTION_PREFIX;
pub use provision::IndexCreationSpec;
pub use provision::IndexSettings;
pub use provision::TENANT_INDEX_SUFFIX;
pub use provision::primary_index_name;
pub use request::BulkOperation;
pub use request::BulkRequest;
pub use request::CreateIndexRequest;
pub use request::DocDeleteRequest;
pub use request::DocUpdateRequest;
pub use request::DocWriteRequest;
pub use request::FieldMappingsRequest;
pub use request::IndicesRequest;
pub use request::MultiGetItem;
pub use request::MultiGetRequest;
pub use request::MultiSearchRequest;
pub use request::MultiTermVectorsRequest;
pub use request::RefreshRequest;
pub use request::ReplicatedWriteRequest;
pub use request::SearchSlice;
pub use request::ShardReadRequest;
pub use request::StorageRequest;
pub use request::TermVectorsItem;
pub use resolved::ResolvedTargets;
pub use settings::DEFAULT_SERVICE_USERNAME;
pub use settings::DEFAULT_SHARED_INDEX;
pub use settings::MultitenancyConfig;
pub use user::USER_TENANT;
pub use user::User;
