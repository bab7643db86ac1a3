// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! Error taxonomy for store access and reconciliation.
//!
//! All API server errors are classified at the [`store`](crate::store)
//! boundary into [`StoreError`] and never leak past it as raw transport
//! errors. The reconciliation pass itself can only fail with a
//! [`ReconcileError`]: either a transient store failure (retried by the
//! scheduler) or an invariant violation (a programmer error, surfaced
//! loudly).
//!
//! Not-found and conflict outcomes are *not* errors from the reconciler's
//! point of view: they are expected races under concurrent mutation and are
//! reported as [`Convergence`](crate::reconcilers::Convergence) directives.

use thiserror::Error;

/// Errors surfaced by the object store.
///
/// `NotFound` and `Conflict` are expected steady-state events; only `Other`
/// carries an underlying cause worth logging at error level.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The object does not exist (HTTP 404).
    ///
    /// On read this means the object vanished before the pass started; on
    /// write it means the object was deleted between read and write. Both
    /// are normal races.
    #[error("object not found")]
    NotFound,

    /// The object's version token no longer matches (HTTP 409).
    ///
    /// Another writer updated the object between read and write. The caller
    /// must re-read and recompute; the stale in-memory copy must never be
    /// retried.
    #[error("version conflict")]
    Conflict,

    /// Any other store failure (API server unavailable, network errors).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors surfaced by a reconciliation pass.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The store failed for a reason other than the expected
    /// not-found/conflict races. The scheduler retries after an interval.
    #[error("transient store failure: {0}")]
    Transient(#[source] anyhow::Error),

    /// A delta referenced a label key outside the managed set.
    ///
    /// This is a programmer error: the comparator only emits managed keys,
    /// so a violating delta was built by hand. Never swallowed.
    #[error("delta references unmanaged label key '{key}'")]
    InvariantViolation {
        /// The offending label key
        key: String,
    },
}
