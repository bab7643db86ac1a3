// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! Full reconciliation pass tests against the in-memory fake store.

use super::{compute, reconcile_pod, Convergence};
use crate::errors::ReconcileError;
use crate::labels::{ADD_LABEL_ANNOTATION, POD_IP_LABEL, POD_NAME_LABEL};
use crate::store::fake::{FailureMode, FakePodStore};
use crate::store::PodStore;
use k8s_openapi::api::core::v1::{Pod, PodSpec, PodStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

fn pod(annotation: Option<&str>, labels: &[(&str, &str)]) -> Pod {
    let annotations = annotation.map(|value| {
        let mut map = BTreeMap::new();
        map.insert(ADD_LABEL_ANNOTATION.to_string(), value.to_string());
        map
    });
    let labels: BTreeMap<String, String> = labels
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    Pod {
        metadata: ObjectMeta {
            name: Some("web-1".to_string()),
            namespace: Some("default".to_string()),
            annotations,
            labels: (!labels.is_empty()).then_some(labels),
            ..ObjectMeta::default()
        },
        spec: Some(PodSpec {
            node_name: Some("node-a".to_string()),
            ..PodSpec::default()
        }),
        status: Some(PodStatus {
            pod_ip: Some("10.0.0.7".to_string()),
            ..PodStatus::default()
        }),
    }
}

#[tokio::test]
async fn test_add_pass_converges() {
    let store = FakePodStore::new();
    store.insert(pod(Some("pod-name"), &[]));

    let outcome = reconcile_pod(&store, "default", "web-1").await.unwrap();

    assert_eq!(outcome, Convergence::Converged);
    let stored = store.stored("default", "web-1").unwrap();
    assert_eq!(
        stored.metadata.labels.unwrap().get(POD_NAME_LABEL),
        Some(&"web-1".to_string())
    );
}

#[tokio::test]
async fn test_remove_pass_converges() {
    let store = FakePodStore::new();
    store.insert(pod(None, &[(POD_NAME_LABEL, "web-1")]));

    let outcome = reconcile_pod(&store, "default", "web-1").await.unwrap();

    assert_eq!(outcome, Convergence::Converged);
    let stored = store.stored("default", "web-1").unwrap();
    assert!(stored
        .metadata
        .labels
        .is_none_or(|labels| !labels.contains_key(POD_NAME_LABEL)));
}

#[tokio::test]
async fn test_pass_reaches_fixed_point_in_one_write() {
    let store = FakePodStore::new();
    store.insert(pod(Some("pod-ip"), &[]));

    // Converge, then re-read: the delta must be empty after one pass.
    let first = reconcile_pod(&store, "default", "web-1").await.unwrap();
    assert_eq!(first, Convergence::Converged);

    let converged = store.get("default", "web-1").await.unwrap();
    assert!(compute(&converged).is_empty());
}

#[tokio::test]
async fn test_duplicate_trigger_converges_then_unchanged() {
    let store = FakePodStore::new();
    store.insert(pod(Some("pod-name"), &[]));

    let first = reconcile_pod(&store, "default", "web-1").await.unwrap();
    let second = reconcile_pod(&store, "default", "web-1").await.unwrap();

    assert_eq!(first, Convergence::Converged);
    assert_eq!(second, Convergence::Unchanged);
    assert_eq!(store.write_count(), 1);
}

#[tokio::test]
async fn test_noop_pass_issues_zero_writes() {
    let store = FakePodStore::new();
    store.insert(pod(Some("pod-ip"), &[(POD_IP_LABEL, "10.0.0.7")]));

    let outcome = reconcile_pod(&store, "default", "web-1").await.unwrap();

    assert_eq!(outcome, Convergence::Unchanged);
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_missing_annotation_cleanup_end_to_end() {
    let store = FakePodStore::new();
    store.insert(pod(None, &[(POD_IP_LABEL, "10.0.0.7"), ("app", "web")]));

    let outcome = reconcile_pod(&store, "default", "web-1").await.unwrap();

    assert_eq!(outcome, Convergence::Converged);
    let stored_labels = store
        .stored("default", "web-1")
        .unwrap()
        .metadata
        .labels
        .unwrap();
    assert!(!stored_labels.contains_key(POD_IP_LABEL));
    assert_eq!(stored_labels.get("app"), Some(&"web".to_string()));
}

#[tokio::test]
async fn test_gone_before_read_is_stale_without_requeue_cause() {
    let store = FakePodStore::new();

    let outcome = reconcile_pod(&store, "default", "web-1").await.unwrap();

    assert_eq!(outcome, Convergence::Stale);
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_deleted_between_read_and_write_is_stale() {
    let store = FakePodStore::new();
    store.insert(pod(Some("pod-name"), &[]));
    store.fail_next_update(FailureMode::NotFound);

    let outcome = reconcile_pod(&store, "default", "web-1").await.unwrap();

    assert_eq!(outcome, Convergence::Stale);
}

#[tokio::test]
async fn test_conflicting_writer_is_reported_for_recompute() {
    let store = FakePodStore::new();
    store.insert(pod(Some("pod-name"), &[]));
    store.fail_next_update(FailureMode::Conflict);

    let outcome = reconcile_pod(&store, "default", "web-1").await.unwrap();

    assert_eq!(outcome, Convergence::Conflict);
    // The pass hands the directive back instead of retrying: the next
    // invocation re-reads and converges.
    let retry = reconcile_pod(&store, "default", "web-1").await.unwrap();
    assert_eq!(retry, Convergence::Converged);
}

#[tokio::test]
async fn test_transient_read_failure_surfaces_error() {
    let store = FakePodStore::new();
    store.insert(pod(Some("pod-name"), &[]));
    store.fail_next_get(FailureMode::Transient);

    let err = reconcile_pod(&store, "default", "web-1").await.unwrap_err();

    assert!(matches!(err, ReconcileError::Transient(_)));
}

#[tokio::test]
async fn test_transient_write_failure_surfaces_error() {
    let store = FakePodStore::new();
    store.insert(pod(Some("pod-name"), &[]));
    store.fail_next_update(FailureMode::Transient);

    let err = reconcile_pod(&store, "default", "web-1").await.unwrap_err();

    assert!(matches!(err, ReconcileError::Transient(_)));
}
