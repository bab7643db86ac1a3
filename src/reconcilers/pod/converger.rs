// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! The converger: applies a [`LabelDelta`] with one conditional write.

use super::types::{Convergence, LabelDelta};
use crate::errors::{ReconcileError, StoreError};
use crate::projection::ProjectionKind;
use crate::store::PodStore;
use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Apply a delta to a Pod and issue the conditional write.
///
/// An empty delta returns [`Convergence::Unchanged`] without touching the
/// store, avoiding needless traffic and resourceVersion churn. Otherwise all
/// additions and removals are merged into a single write, conditional on the
/// resourceVersion captured when `pod` was read.
///
/// Store failures are classified, never retried here:
///
/// - not-found -> [`Convergence::Stale`]: the Pod was deleted concurrently,
///   a normal race, not an error
/// - conflict -> [`Convergence::Conflict`]: another writer won; the caller
///   re-reads and recomputes
/// - anything else -> [`ReconcileError::Transient`] with the full cause
///
/// # Errors
///
/// [`ReconcileError::InvariantViolation`] if the delta references a label
/// key outside the managed set; [`ReconcileError::Transient`] on
/// unclassified store failures.
pub async fn apply<S: PodStore + ?Sized>(
    store: &S,
    pod: &Pod,
    delta: &LabelDelta,
) -> Result<Convergence, ReconcileError> {
    let namespace = pod.namespace().unwrap_or_default();
    let name = pod.name_any();

    if delta.is_empty() {
        debug!(%namespace, %name, "pod labels already converged");
        return Ok(Convergence::Unchanged);
    }

    for key in delta.add.keys().chain(delta.remove.iter()) {
        if !ProjectionKind::is_managed_key(key) {
            return Err(ReconcileError::InvariantViolation { key: key.clone() });
        }
    }

    let mut desired = pod.clone();
    let labels = desired.metadata.labels.get_or_insert_with(BTreeMap::new);
    for (key, value) in &delta.add {
        labels.insert(key.clone(), value.clone());
    }
    for key in &delta.remove {
        labels.remove(key);
    }

    info!(
        %namespace,
        %name,
        adding = delta.add.len(),
        removing = delta.remove.len(),
        "updating pod labels"
    );

    match store.conditional_update(&desired).await {
        Ok(()) => {
            info!(%namespace, %name, "pod labels updated");
            Ok(Convergence::Converged)
        }
        Err(StoreError::NotFound) => {
            debug!(%namespace, %name, "pod deleted before write, dropping");
            Ok(Convergence::Stale)
        }
        Err(StoreError::Conflict) => {
            debug!(%namespace, %name, "pod changed since read, will recompute");
            Ok(Convergence::Conflict)
        }
        Err(StoreError::Other(cause)) => Err(ReconcileError::Transient(cause)),
    }
}

#[cfg(test)]
#[path = "converger_tests.rs"]
mod converger_tests;
