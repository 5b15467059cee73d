// crates/tenant-gate-core/src/runtime/rewriter.rs
// ============================================================================
// Module: Tenant Gate Request Rewriter
// Description: In-place retargeting of intercepted requests.
// Purpose: Replace shared-index targets with the tenant-private index name.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! The rewriter dispatches exhaustively over [`StorageRequest`], so every
//! request shape has a compile-time-checked rewrite case; an unhandled shape
//! cannot slip through as a silently unrewritten request. Create-style writes
//! additionally consult the provisioner so the caller can create an absent
//! tenant index before executing the rewritten request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::BulkOperation;
use crate::core::ClusterNamespace;
use crate::core::IndexCreationSpec;
use crate::core::IndexName;
use crate::core::StorageRequest;
use crate::core::primary_index_name;
use crate::interfaces::DecisionLog;
use crate::runtime::provision::creation_spec_if_absent;

// ============================================================================
// SECTION: Rewriting
// ============================================================================

/// Replaces the index target(s) embedded in the request with `new_index`.
///
/// Returns the creation spec for the tenant index when a create-style write
/// was rewritten and the index does not exist in the namespace snapshot.
pub fn rewrite_request<L: DecisionLog>(
    request: &mut StorageRequest,
    old_index: &IndexName,
    new_index: &IndexName,
    namespace: &ClusterNamespace,
    log: &L,
) -> Option<IndexCreationSpec> {
    log.debug(&format!("{old_index} index will be replaced with {new_index} in this request"));

    match request {
        StorageRequest::DocWrite(write) => {
            let create = creation_spec_if_absent(namespace, new_index, log);
            write.index = new_index.clone();
            create
        }
        StorageRequest::DocDelete(delete) => {
            delete.index = new_index.clone();
            None
        }
        StorageRequest::DocUpdate(update) => {
            update.index = new_index.clone();
            None
        }
        StorageRequest::Bulk(bulk) => {
            let mut create = None;
            for operation in &mut bulk.operations {
                match operation {
                    BulkOperation::Write(write) => {
                        if create.is_none() {
                            create = creation_spec_if_absent(namespace, new_index, log);
                        }
                        write.index = new_index.clone();
                    }
                    BulkOperation::Delete(delete) => {
                        delete.index = new_index.clone();
                    }
                    BulkOperation::Update(update) => {
                        update.index = new_index.clone();
                    }
                }
            }
            create
        }
        StorageRequest::MultiGet(multi_get) => {
            for item in &mut multi_get.items {
                item.index = new_index.clone();
            }
            None
        }
        StorageRequest::MultiSearch(multi_search) => {
            for search in &mut multi_search.searches {
                search.indices = vec![new_index.clone()];
            }
            None
        }
        StorageRequest::MultiTermVectors(multi_term_vectors) => {
            for item in &mut multi_term_vectors.items {
                item.index = new_index.clone();
            }
            None
        }
        StorageRequest::Refresh(refresh) => {
            refresh.indices = vec![new_index.clone()];
            None
        }
        StorageRequest::ShardRead(read) => {
            read.index = new_index.clone();
            None
        }
        StorageRequest::ReplicatedWrite(write) => {
            write.index = new_index.clone();
            None
        }
        StorageRequest::Indices(indices) => {
            indices.indices = vec![new_index.clone()];
            None
        }
        StorageRequest::CreateIndex(create_index) => {
            // The tenant alias fronts a suffixed physical index.
            create_index.index = primary_index_name(new_index);
            create_index.aliases.push(new_index.clone());
            None
        }
        StorageRequest::FieldMappings(_) => None,
    }
}
