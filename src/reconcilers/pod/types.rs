// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! Types shared by the comparator and converger.

use std::collections::{BTreeMap, BTreeSet};

/// The label mutations needed to converge one Pod, for one pass.
///
/// Computed fresh on every reconciliation and consumed immediately; it has
/// no lifecycle of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelDelta {
    /// Labels to set (key -> projected value). Overwrites a stale value.
    pub add: BTreeMap<String, String>,
    /// Label keys to remove.
    pub remove: BTreeSet<String>,
}

impl LabelDelta {
    /// Whether the Pod is already converged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Outcome of one reconciliation pass, handed back to the scheduler.
///
/// The scheduler derives its requeue decision from this: `Conflict` means
/// re-read and recompute (immediately); everything else needs no requeue for
/// this cause. Transient store failures travel on the pass's error channel
/// instead, so the underlying cause stays available for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convergence {
    /// A conditional write was issued and accepted.
    Converged,
    /// Desired and observed state already match; no write was issued.
    Unchanged,
    /// The Pod vanished mid-pass; nothing left to converge, drop the item.
    Stale,
    /// Another writer updated the Pod between read and write; the caller
    /// must re-read and recompute, never retry the stale in-memory copy.
    Conflict,
}

impl Convergence {
    /// Stable lowercase name, used as a metrics label value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Convergence::Converged => "converged",
            Convergence::Unchanged => "unchanged",
            Convergence::Stale => "stale",
            Convergence::Conflict => "conflict",
        }
    }
}
