// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! The closed table of projection kinds.
//!
//! A projection kind is one named rule mapping an annotation value to an
//! owned label key and a read-only Pod field to copy into it. The reconciler
//! iterates [`ProjectionKind::ALL`] instead of branching per kind, so adding
//! a projected field is a one-variant change.

use crate::labels::{
    ANNOTATION_VALUE_NODE_NAME, ANNOTATION_VALUE_POD_IP, ANNOTATION_VALUE_POD_NAME,
    NODE_NAME_LABEL, POD_IP_LABEL, POD_NAME_LABEL,
};
use k8s_openapi::api::core::v1::Pod;

/// One projected label managed by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Project `metadata.name` into [`POD_NAME_LABEL`]
    PodName,
    /// Project `spec.nodeName` into [`NODE_NAME_LABEL`]
    NodeName,
    /// Project `status.podIP` into [`POD_IP_LABEL`]
    PodIp,
}

impl ProjectionKind {
    /// Every projection kind the controller manages.
    pub const ALL: [ProjectionKind; 3] = [
        ProjectionKind::PodName,
        ProjectionKind::NodeName,
        ProjectionKind::PodIp,
    ];

    /// The annotation value that selects this kind.
    #[must_use]
    pub fn annotation_value(self) -> &'static str {
        match self {
            ProjectionKind::PodName => ANNOTATION_VALUE_POD_NAME,
            ProjectionKind::NodeName => ANNOTATION_VALUE_NODE_NAME,
            ProjectionKind::PodIp => ANNOTATION_VALUE_POD_IP,
        }
    }

    /// The owned label key this kind writes.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ProjectionKind::PodName => POD_NAME_LABEL,
            ProjectionKind::NodeName => NODE_NAME_LABEL,
            ProjectionKind::PodIp => POD_IP_LABEL,
        }
    }

    /// The current projected value for this kind.
    ///
    /// An unset source field projects as the empty string, matching the
    /// label-map default used when comparing.
    #[must_use]
    pub fn project(self, pod: &Pod) -> &str {
        match self {
            ProjectionKind::PodName => pod.metadata.name.as_deref().unwrap_or_default(),
            ProjectionKind::NodeName => pod
                .spec
                .as_ref()
                .and_then(|spec| spec.node_name.as_deref())
                .unwrap_or_default(),
            ProjectionKind::PodIp => pod
                .status
                .as_ref()
                .and_then(|status| status.pod_ip.as_deref())
                .unwrap_or_default(),
        }
    }

    /// Whether `key` is one of the label keys the controller owns.
    #[must_use]
    pub fn is_managed_key(key: &str) -> bool {
        Self::ALL.iter().any(|kind| kind.label_key() == key)
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod projection_tests;
