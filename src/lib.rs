// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

//! # Podlabeler - Label Projection Operator for Kubernetes Pods
//!
//! Podlabeler is a Kubernetes operator written in Rust that keeps a small set
//! of derived labels on Pods synchronized with an intent annotation.
//!
//! ## Overview
//!
//! A Pod opts in by carrying the `podlabeler.io/add-label` annotation with
//! one of the recognized projection values (`pod-name`, `node-name`,
//! `pod-ip`). The controller projects the named read-only field into the
//! corresponding owned label and removes owned labels whose intent is gone.
//! All other labels on the Pod are left untouched.
//!
//! ## Modules
//!
//! - [`projection`] - The closed table of projection kinds
//! - [`reconcilers`] - Reconciliation logic (comparator, converger, pass)
//! - [`store`] - The versioned object store abstraction over the API server
//! - [`errors`] - Store and reconciliation error taxonomy
//! - [`labels`] - Reserved annotation and label keys
//! - [`metrics`] - Prometheus metrics for observability
//!
//! ## Example
//!
//! ```rust,no_run
//! use podlabeler::reconcilers::reconcile_pod;
//! use podlabeler::store::KubeStore;
//!
//! # async fn example(client: kube::Client) -> anyhow::Result<()> {
//! let store = KubeStore::new(client);
//! let outcome = reconcile_pod(&store, "default", "web-1").await?;
//! println!("pass finished: {outcome:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! The reconciler is stateless between invocations: every pass re-reads the
//! Pod, recomputes the desired label set from scratch, and issues at most one
//! conditional write. Conflicts and concurrent deletions are normal races
//! and are reported as scheduling directives, never as errors.

pub mod constants;
pub mod errors;
pub mod labels;
pub mod metrics;
pub mod projection;
pub mod reconcilers;
pub mod store;
