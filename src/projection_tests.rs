// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! Unit tests for the projection kind table.

use super::ProjectionKind;
use crate::labels::{NODE_NAME_LABEL, POD_IP_LABEL, POD_NAME_LABEL};
use k8s_openapi::api::core::v1::{Pod, PodSpec, PodStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

fn pod(name: &str, node_name: Option<&str>, pod_ip: Option<&str>) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("default".to_string()),
            ..ObjectMeta::default()
        },
        spec: Some(PodSpec {
            node_name: node_name.map(str::to_string),
            ..PodSpec::default()
        }),
        status: Some(PodStatus {
            pod_ip: pod_ip.map(str::to_string),
            ..PodStatus::default()
        }),
    }
}

#[test]
fn test_table_is_closed_and_distinct() {
    assert_eq!(ProjectionKind::ALL.len(), 3);

    let mut annotation_values: Vec<_> = ProjectionKind::ALL
        .iter()
        .map(|kind| kind.annotation_value())
        .collect();
    annotation_values.sort_unstable();
    annotation_values.dedup();
    assert_eq!(annotation_values.len(), 3);

    let mut label_keys: Vec<_> = ProjectionKind::ALL
        .iter()
        .map(|kind| kind.label_key())
        .collect();
    label_keys.sort_unstable();
    label_keys.dedup();
    assert_eq!(label_keys.len(), 3);
}

#[test]
fn test_annotation_values() {
    assert_eq!(ProjectionKind::PodName.annotation_value(), "pod-name");
    assert_eq!(ProjectionKind::NodeName.annotation_value(), "node-name");
    assert_eq!(ProjectionKind::PodIp.annotation_value(), "pod-ip");
}

#[test]
fn test_label_keys() {
    assert_eq!(ProjectionKind::PodName.label_key(), POD_NAME_LABEL);
    assert_eq!(ProjectionKind::NodeName.label_key(), NODE_NAME_LABEL);
    assert_eq!(ProjectionKind::PodIp.label_key(), POD_IP_LABEL);
}

#[test]
fn test_project_populated_fields() {
    let pod = pod("web-1", Some("node-a"), Some("10.0.0.7"));

    assert_eq!(ProjectionKind::PodName.project(&pod), "web-1");
    assert_eq!(ProjectionKind::NodeName.project(&pod), "node-a");
    assert_eq!(ProjectionKind::PodIp.project(&pod), "10.0.0.7");
}

#[test]
fn test_project_unset_fields_as_empty() {
    let pod = pod("web-1", None, None);

    assert_eq!(ProjectionKind::NodeName.project(&pod), "");
    assert_eq!(ProjectionKind::PodIp.project(&pod), "");
}

#[test]
fn test_project_missing_spec_and_status() {
    let pod = Pod::default();

    assert_eq!(ProjectionKind::PodName.project(&pod), "");
    assert_eq!(ProjectionKind::NodeName.project(&pod), "");
    assert_eq!(ProjectionKind::PodIp.project(&pod), "");
}

#[test]
fn test_is_managed_key() {
    assert!(ProjectionKind::is_managed_key(POD_NAME_LABEL));
    assert!(ProjectionKind::is_managed_key(NODE_NAME_LABEL));
    assert!(ProjectionKind::is_managed_key(POD_IP_LABEL));

    assert!(!ProjectionKind::is_managed_key("app"));
    assert!(!ProjectionKind::is_managed_key("podlabeler.io/other"));
    assert!(!ProjectionKind::is_managed_key(""));
}
