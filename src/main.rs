// Copyright (c) 2026 The podlabeler authors
// SPDX-License-Identifier: MIT

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use clap::{Parser, ValueEnum};
use futures::StreamExt;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    runtime::{controller::Action, watcher::Config, Controller},
    Api, Client, ResourceExt,
};
use podlabeler::constants::{
    ERROR_REQUEUE_DURATION_SECS, METRICS_SERVER_BIND_ADDRESS, METRICS_SERVER_PATH,
    METRICS_SERVER_PORT, TOKIO_WORKER_THREADS,
};
use podlabeler::errors::ReconcileError;
use podlabeler::metrics::{gather_metrics, record_reconciliation, record_requeue};
use podlabeler::reconcilers::{reconcile_pod, Convergence};
use podlabeler::store::KubeStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Output format for log events.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    /// Human-readable single-line output
    Text,
    /// Structured JSON output
    Json,
}

/// Label projection operator for Kubernetes Pods.
#[derive(Debug, Parser)]
#[command(name = "podlabeler", version, about)]
struct Args {
    /// Log output format
    #[arg(long, env = "RUST_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Bind address for the Prometheus metrics endpoint
    #[arg(long, default_value_t = format!("{METRICS_SERVER_BIND_ADDRESS}:{METRICS_SERVER_PORT}"))]
    metrics_addr: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(TOKIO_WORKER_THREADS)
        .thread_name("podlabeler-controller")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<()> {
    // Respects RUST_LOG environment variable if set, otherwise defaults to
    // INFO level. Example: RUST_LOG=debug podlabeler
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match args.log_format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .json()
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    info!("Starting podlabeler operator");

    let metrics_addr: SocketAddr = args.metrics_addr.parse()?;

    debug!("Initializing Kubernetes client");
    let client = Client::try_default().await?;
    debug!("Kubernetes client initialized successfully");

    let store = Arc::new(KubeStore::new(client.clone()));

    tokio::select! {
        result = run_pod_controller(client, store) => {
            info!("Pod controller exited");
            result
        }
        result = serve_metrics(metrics_addr) => {
            error!("CRITICAL: metrics server exited unexpectedly: {:?}", result);
            result?;
            anyhow::bail!("metrics server exited unexpectedly without error")
        }
    }
}

/// Run the Pod controller until shutdown is signalled.
async fn run_pod_controller(client: Client, store: Arc<KubeStore>) -> Result<()> {
    info!("Starting Pod controller");

    let api = Api::<Pod>::all(client);

    Controller::new(api, Config::default())
        .shutdown_on_signal()
        .run(reconcile_pod_wrapper, error_policy, store)
        .for_each(|_| futures::future::ready(()))
        .await;

    Ok(())
}

async fn reconcile_pod_wrapper(
    pod: Arc<Pod>,
    store: Arc<KubeStore>,
) -> Result<Action, ReconcileError> {
    let namespace = pod.namespace().unwrap_or_default();
    let name = pod.name_any();
    let started = Instant::now();

    match reconcile_pod(store.as_ref(), &namespace, &name).await {
        Ok(outcome) => {
            record_reconciliation(outcome.as_str(), started.elapsed());
            Ok(action_for(outcome))
        }
        Err(err) => {
            record_reconciliation("error", started.elapsed());
            Err(err)
        }
    }
}

/// Map a pass outcome to the scheduler directive.
///
/// A conflict means another writer won the race: requeue immediately so the
/// next pass re-reads and recomputes. Everything else needs no requeue for
/// this cause; the watch stream delivers the next level change.
fn action_for(outcome: Convergence) -> Action {
    match outcome {
        Convergence::Conflict => {
            record_requeue("conflict");
            Action::requeue(Duration::ZERO)
        }
        Convergence::Converged | Convergence::Unchanged | Convergence::Stale => {
            Action::await_change()
        }
    }
}

/// Error policy for the Pod controller.
///
/// Only transient store failures and invariant violations reach this point;
/// expected races (not-found, conflict) are directives, not errors.
#[allow(clippy::needless_pass_by_value)] // Signature required by kube::runtime::Controller
fn error_policy(pod: Arc<Pod>, err: &ReconcileError, _store: Arc<KubeStore>) -> Action {
    record_requeue("error");
    error!(
        namespace = %pod.namespace().unwrap_or_default(),
        pod = %pod.name_any(),
        error = %err,
        "Reconciliation failed - will retry in {}s",
        ERROR_REQUEUE_DURATION_SECS
    );
    Action::requeue(Duration::from_secs(ERROR_REQUEUE_DURATION_SECS))
}

/// Serve Prometheus metrics over HTTP.
async fn serve_metrics(addr: SocketAddr) -> Result<()> {
    let app = Router::new().route(METRICS_SERVER_PATH, get(metrics_handler));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Serving metrics");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn metrics_handler() -> Response {
    match gather_metrics() {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to encode metrics: {err}"),
        )
            .into_response(),
    }
}
