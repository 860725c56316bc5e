use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{
    Classification, ClassificationResult, ClassifierResult, QuestionClassifier,
};
use crate::embedding::EmbeddingProvider;

use super::error::GatewayError;
use super::state::HandlerState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchClassifyRequest {
    pub texts: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchClassifyResponse {
    pub results: Vec<Classification>,
}

/// Runs a classifier call on the blocking pool; inference is CPU/GPU bound.
async fn run_blocking<E, T, F>(
    classifier: &Arc<QuestionClassifier<E>>,
    f: F,
) -> Result<T, GatewayError>
where
    E: EmbeddingProvider + 'static,
    T: Send + 'static,
    F: FnOnce(&QuestionClassifier<E>) -> ClassifierResult<T> + Send + 'static,
{
    let classifier = Arc::clone(classifier);
    let result = tokio::task::spawn_blocking(move || f(&classifier))
        .await
        .map_err(|e| GatewayError::InternalError(format!("classification task failed: {e}")))?;
    Ok(result?)
}

#[tracing::instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn classify_handler<E>(
    State(state): State<HandlerState<E>>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<Classification>, GatewayError>
where
    E: EmbeddingProvider + 'static,
{
    let result = run_blocking(&state.classifier, move |c| c.classify(&request.text)).await?;
    Ok(Json(result))
}

#[tracing::instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn classify_detailed_handler<E>(
    State(state): State<HandlerState<E>>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassificationResult>, GatewayError>
where
    E: EmbeddingProvider + 'static,
{
    let result =
        run_blocking(&state.classifier, move |c| c.classify_detailed(&request.text)).await?;
    Ok(Json(result))
}

#[tracing::instrument(skip(state, request), fields(batch_len = request.texts.len()))]
pub async fn classify_batch_handler<E>(
    State(state): State<HandlerState<E>>,
    Json(request): Json<BatchClassifyRequest>,
) -> Result<Json<BatchClassifyResponse>, GatewayError>
where
    E: EmbeddingProvider + 'static,
{
    if request.texts.len() > state.max_batch {
        return Err(GatewayError::InvalidRequest(format!(
            "batch of {} texts exceeds the limit of {}",
            request.texts.len(),
            state.max_batch
        )));
    }

    if request.texts.is_empty() {
        debug!("Empty batch request");
        return Ok(Json(BatchClassifyResponse { results: vec![] }));
    }

    let results = run_blocking(&state.classifier, move |c| {
        let texts: Vec<&str> = request.texts.iter().map(String::as_str).collect();
        c.classify_batch(&texts)
    })
    .await?;

    Ok(Json(BatchClassifyResponse { results }))
}
