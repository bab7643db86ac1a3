// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! The state comparator: observed Pod state -> [`LabelDelta`].

use super::types::LabelDelta;
use crate::labels::ADD_LABEL_ANNOTATION;
use crate::projection::ProjectionKind;
use k8s_openapi::api::core::v1::Pod;

/// Compute the delta needed to converge a Pod's owned labels.
///
/// For each [`ProjectionKind`], independently:
///
/// - `wanted`: the intent annotation equals the kind's value. An absent
///   annotation means nothing is wanted.
/// - `present`: the owned label's value equals the current projected value.
///   Both sides default to `""`, so a stale label counts as not present and
///   is overwritten via the add path; there is no separate update action.
///
/// A removal is recorded only when the label key actually exists: the delta
/// describes real mutation, and an empty delta means no write at all.
///
/// Pure and total: deterministic, no I/O, no error channel. Safe to call
/// repeatedly with identical output for identical input.
#[must_use]
pub fn compute(pod: &Pod) -> LabelDelta {
    let annotation = pod
        .metadata
        .annotations
        .as_ref()
        .and_then(|annotations| annotations.get(ADD_LABEL_ANNOTATION))
        .map(String::as_str);
    let labels = pod.metadata.labels.as_ref();

    let mut delta = LabelDelta::default();
    for kind in ProjectionKind::ALL {
        let wanted = annotation == Some(kind.annotation_value());
        let projected = kind.project(pod);
        let current = labels.and_then(|labels| labels.get(kind.label_key()));
        let present = current.map(String::as_str).unwrap_or_default() == projected;

        if wanted && !present {
            delta
                .add
                .insert(kind.label_key().to_string(), projected.to_string());
        } else if !wanted && present && current.is_some() {
            delta.remove.insert(kind.label_key().to_string());
        }
    }
    delta
}

#[cfg(test)]
#[path = "comparator_tests.rs"]
mod comparator_tests;
