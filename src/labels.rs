// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! Reserved annotation and label keys owned by the controller.
//!
//! This module defines the intent annotation and the label keys podlabeler
//! manages on Pods. The controller never mutates a label key outside this
//! set.

// ============================================================================
// Intent Annotation
// ============================================================================

/// Annotation selecting which projected label a Pod wants.
///
/// Recognized values are [`ANNOTATION_VALUE_POD_NAME`],
/// [`ANNOTATION_VALUE_NODE_NAME`] and [`ANNOTATION_VALUE_POD_IP`]. An absent
/// key means "no label wanted".
pub const ADD_LABEL_ANNOTATION: &str = "podlabeler.io/add-label";

// ============================================================================
// Recognized Annotation Values
// ============================================================================

/// Annotation value requesting the Pod's own name as a label
pub const ANNOTATION_VALUE_POD_NAME: &str = "pod-name";

/// Annotation value requesting the assigned node's name as a label
pub const ANNOTATION_VALUE_NODE_NAME: &str = "node-name";

/// Annotation value requesting the Pod's assigned IP as a label
pub const ANNOTATION_VALUE_POD_IP: &str = "pod-ip";

// ============================================================================
// Owned Labels
// ============================================================================

/// Label carrying the Pod's own name
pub const POD_NAME_LABEL: &str = "podlabeler.io/pod-name";

/// Label carrying the name of the node the Pod is scheduled on
pub const NODE_NAME_LABEL: &str = "podlabeler.io/node-name";

/// Label carrying the Pod's assigned IP address
pub const POD_IP_LABEL: &str = "podlabeler.io/pod-ip";
