//! HOTS classifier HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use hots::classifier::QuestionClassifier;
use hots::config::Config;
use hots::embedding::{EmbeddingProvider, MiniLmConfig, MiniLmEmbedder};
use hots::gateway::{HandlerState, check_health, create_router_with_state};
use hots::keywords::KeywordSet;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    // The probe owns its runtime, so it must run before the server runtime exists.
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve())
}

async fn serve() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        max_batch = config.max_batch,
        api_keys = config.api_keys.as_ref().map_or(0, |ring| ring.len()),
        "HOTS classifier starting"
    );

    let keywords = match &config.keywords_path {
        Some(path) => KeywordSet::from_json_file(path)?,
        None => {
            tracing::info!("No HOTS_KEYWORDS_PATH configured, using built-in Bloom's taxonomy lists");
            KeywordSet::builtin()
        }
    };

    let embedder_config = if let Some(path) = &config.model_path {
        MiniLmConfig::new(path.clone())
    } else {
        tracing::warn!("No HOTS_MODEL_PATH configured, running embedder in stub mode");
        MiniLmConfig::stub()
    };

    // Model load and keyword embedding are blocking; finish both before accepting requests.
    let classifier = tokio::task::spawn_blocking(move || {
        let embedder = MiniLmEmbedder::load(embedder_config)?;
        tracing::info!(
            embedding_dim = embedder.embedding_dim(),
            backend = embedder.backend().as_str(),
            "Embedder ready"
        );
        QuestionClassifier::new(embedder, &keywords).map_err(anyhow::Error::from)
    })
    .await??;

    let state = HandlerState::new(Arc::new(classifier), config.max_batch);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HOTS classifier shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var(Config::ENV_PORT)
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    if check_health(port) { 0 } else { 1 }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
