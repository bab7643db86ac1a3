// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! The versioned object store abstraction.
//!
//! The reconciler never talks to the API server directly; it is handed a
//! [`PodStore`] capability. This keeps the comparator and converger
//! constructible and testable without a live cluster; tests inject an
//! in-memory fake implementing the same read/conditional-update contract.
//!
//! [`KubeStore`] is the production implementation over [`kube::Client`].
//! All kube transport errors are classified here into [`StoreError`] and
//! never leak past this boundary.

use crate::errors::StoreError;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::api::PostParams;
use kube::{Api, Client, ResourceExt};
use tracing::debug;

/// Read and conditional-write access to Pods.
///
/// `conditional_update` succeeds only if the object's version token still
/// matches the one carried in `pod.metadata.resource_version`, otherwise it
/// fails with [`StoreError::Conflict`].
#[async_trait]
pub trait PodStore: Send + Sync {
    /// Fetch the current state of a Pod.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when the Pod does not exist,
    /// [`StoreError::Other`] for any other store failure.
    async fn get(&self, namespace: &str, name: &str) -> Result<Pod, StoreError>;

    /// Replace the Pod, conditional on the resourceVersion captured at read
    /// time.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when the Pod was deleted since the read,
    /// [`StoreError::Conflict`] when another writer updated it first,
    /// [`StoreError::Other`] for any other store failure.
    async fn conditional_update(&self, pod: &Pod) -> Result<(), StoreError>;
}

/// Production [`PodStore`] backed by the Kubernetes API server.
#[derive(Clone)]
pub struct KubeStore {
    client: Client,
}

impl KubeStore {
    /// Wrap a Kubernetes client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl PodStore for KubeStore {
    async fn get(&self, namespace: &str, name: &str) -> Result<Pod, StoreError> {
        debug!(%namespace, %name, "fetching pod");
        self.pods(namespace).get(name).await.map_err(classify)
    }

    async fn conditional_update(&self, pod: &Pod) -> Result<(), StoreError> {
        let namespace = pod.namespace().unwrap_or_default();
        let name = pod.name_any();
        debug!(%namespace, %name, "updating pod");
        // replace is the conditional write: the API server rejects it with
        // 409 when metadata.resourceVersion no longer matches.
        self.pods(&namespace)
            .replace(&name, &PostParams::default(), pod)
            .await
            .map(|_| ())
            .map_err(classify)
    }
}

/// Classify a kube transport error into the store taxonomy.
fn classify(err: kube::Error) -> StoreError {
    match err {
        kube::Error::Api(ref response) if response.code == 404 => StoreError::NotFound,
        kube::Error::Api(ref response) if response.code == 409 => StoreError::Conflict,
        other => StoreError::Other(other.into()),
    }
}


#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
