//! HTTP gateway (Axum) over the classification engine.
//!
//! This module is primarily used by the `hots` server binary.
//!
//! | Route | Body | Response |
//! |-------|------|----------|
//! | `GET /healthz` | | `{"status":"ok"}` |
//! | `GET /ready` | | anchor counts and embedder mode |
//! | `POST /v1/classify` | `{"text"}` | `{"classification","confidence"}` |
//! | `POST /v1/classify/batch` | `{"texts"}` | `{"results":[..]}` |
//! | `POST /v1/classify/detailed` | `{"text"}` | full score record |

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod probe;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{classify_batch_handler, classify_detailed_handler, classify_handler};
pub use probe::{check_health, probe_health};
pub use state::HandlerState;

use crate::embedding::EmbeddingProvider;

pub fn create_router_with_state<E>(state: HandlerState<E>) -> Router
where
    E: EmbeddingProvider + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<E>))
        .route("/v1/classify", post(classify_handler::<E>))
        .route("/v1/classify/batch", post(classify_batch_handler::<E>))
        .route("/v1/classify/detailed", post(classify_detailed_handler::<E>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub lots_anchors: usize,
    pub hots_anchors: usize,
    pub embedding_dim: usize,
    pub embedder_mode: &'static str,
    pub max_batch: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// The anchor store is built before the router exists, so a served request is always ready.
#[tracing::instrument(skip(state))]
pub async fn ready_handler<E>(State(state): State<HandlerState<E>>) -> Json<ReadyResponse>
where
    E: EmbeddingProvider + 'static,
{
    let anchors = state.classifier.anchors();
    let embedder_mode = if state.classifier.is_embedder_stub() {
        "stub"
    } else {
        "real"
    };

    Json(ReadyResponse {
        status: "ready",
        lots_anchors: anchors.lots().len(),
        hots_anchors: anchors.hots().len(),
        embedding_dim: anchors.embedding_dim(),
        embedder_mode,
        max_batch: state.max_batch,
    })
}
