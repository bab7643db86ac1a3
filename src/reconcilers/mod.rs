// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! Reconciliation logic for Pod label projection.
//!
//! Podlabeler follows the standard Kubernetes controller pattern:
//!
//! 1. **Watch** - Monitor Pod changes via the Kubernetes API
//! 2. **Reconcile** - Compare the intent annotation with the owned labels
//! 3. **Update** - Issue at most one conditional write to converge
//! 4. **Directive** - Report the outcome back to the scheduler
//!
//! The pass is split into two components:
//!
//! - [`pod::compute`] - the state comparator: a pure function from observed
//!   Pod state to the [`LabelDelta`] needed to converge
//! - [`pod::apply`] - the converger: applies a delta with a single
//!   conditional write and classifies store failures into directives
//!
//! The reconciler owns no scheduling: every failure outcome is translated
//! into a [`Convergence`] directive (or a
//! [`ReconcileError`](crate::errors::ReconcileError)) and handed back to the
//! caller, which owns backoff and interval policy. Passes re-read current
//! state and recompute the delta from scratch, so they are commutative and
//! convergent under arbitrary reordering and duplication of invocations.

pub mod pod;

pub use pod::{apply, compute, reconcile_pod, Convergence, LabelDelta};
