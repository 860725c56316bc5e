//! Client side of `GET /healthz`, used by the binary's `--health-check` flag.

use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Returns `true` if `GET /healthz` on `127.0.0.1:port` answers with a success status.
///
/// Builds its own current-thread runtime, so call it from synchronous code only (never
/// from inside a Tokio runtime).
pub fn check_health(port: u16) -> bool {
    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return false;
    };

    rt.block_on(probe_health(port))
}

/// Async form of [`check_health`].
pub async fn probe_health(port: u16) -> bool {
    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build() else {
        return false;
    };

    match client.get(&url).send().await {
        Ok(res) => res.status().is_success(),
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "Health probe failed");
            false
        }
    }
}
