// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! The Pod label reconciliation pass.

mod comparator;
mod converger;
mod types;

pub use comparator::compute;
pub use converger::apply;
pub use types::{Convergence, LabelDelta};

use crate::errors::{ReconcileError, StoreError};
use crate::store::PodStore;
use tracing::debug;

/// Run one reconciliation pass for a Pod identity.
///
/// Fetches the current object, computes the delta, and applies it. A Pod
/// that is already gone at read time returns [`Convergence::Stale`]: the
/// object was deleted and there is nothing left to converge, so the caller
/// has no reason to requeue.
///
/// The pass is level-triggered and stateless: it tolerates redundant and
/// out-of-order invocations because desired state is recomputed from the
/// store's current view every time.
///
/// # Errors
///
/// [`ReconcileError::Transient`] when the store fails for a reason other
/// than the expected races; [`ReconcileError::InvariantViolation`] never
/// escapes this path in practice since [`compute`] only emits managed keys.
pub async fn reconcile_pod<S: PodStore + ?Sized>(
    store: &S,
    namespace: &str,
    name: &str,
) -> Result<Convergence, ReconcileError> {
    debug!(namespace, name, "reconciling pod");

    let pod = match store.get(namespace, name).await {
        Ok(pod) => pod,
        Err(StoreError::NotFound) => {
            debug!(namespace, name, "pod gone before pass started, dropping");
            return Ok(Convergence::Stale);
        }
        Err(err) => return Err(ReconcileError::Transient(err.into())),
    };

    let delta = compute(&pod);
    apply(store, &pod, &delta).await
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod mod_tests;
