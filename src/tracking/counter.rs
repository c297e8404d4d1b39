use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("counter request failed: {0}")]
    Transport(String),
    #[error("counter responded with status {0}")]
    Status(u16),
}

/// One-way availability flag for the remote counter. Starts available and
/// trips on the first failed request; it stays tripped until the next page
/// load. Cloning shares the underlying flag.
#[derive(Clone)]
pub struct TelemetryBreaker {
    available: Rc<Cell<bool>>,
}

impl TelemetryBreaker {
    pub fn new() -> Self {
        Self {
            available: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available.get()
    }

    pub fn trip(&self) {
        self.available.set(false);
    }
}

impl Default for TelemetryBreaker {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport seam for counter increments. The wasm implementation fires the
/// request in the background and trips the breaker itself on failure, since
/// the outcome is only known asynchronously.
pub trait CounterTransport {
    fn submit_hit(&self, namespace: &str, key: &str, breaker: TelemetryBreaker);
}

/// Best-effort client for the namespaced hit counter. `hit` never blocks,
/// never returns an error, and stops reaching the transport entirely once
/// the breaker has tripped.
pub struct CounterClient<T> {
    namespace: String,
    transport: T,
    breaker: TelemetryBreaker,
}

impl<T: CounterTransport> CounterClient<T> {
    pub fn new(namespace: &str, transport: T) -> Self {
        Self {
            namespace: namespace.to_string(),
            transport,
            breaker: TelemetryBreaker::new(),
        }
    }

    pub fn hit(&self, key: &str) {
        if !self.breaker.is_available() {
            return;
        }
        self.transport.submit_hit(&self.namespace, key, self.breaker.clone());
    }
}

/// Fire-and-forget transport over the public counter API.
pub struct FetchTransport;

impl CounterTransport for FetchTransport {
    fn submit_hit(&self, namespace: &str, key: &str, breaker: TelemetryBreaker) {
        let url = format!(
            "{}/hit/{}/{}",
            config::get_counter_api_url(),
            urlencoding::encode(namespace),
            urlencoding::encode(key)
        );
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = request_hit(&url).await {
                // One failure disables the counter for the rest of the
                // session instead of retrying into a dead service.
                breaker.trip();
                log::debug!("counter disabled for this session: {}", err);
            }
        });
    }
}

async fn request_hit(url: &str) -> Result<(), CounterError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CounterError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(CounterError::Status(response.status()));
    }
    Ok(())
}

/// Read the current value of one counter. Best effort: any failure is `None`.
pub async fn fetch_count(namespace: &str, key: &str) -> Option<u64> {
    let url = format!(
        "{}/get/{}/{}",
        config::get_counter_api_url(),
        urlencoding::encode(namespace),
        urlencoding::encode(key)
    );
    let response = Request::get(&url).send().await.ok()?;
    if !response.ok() {
        return None;
    }
    let body: serde_json::Value = response.json().await.ok()?;
    body.get("value")?.as_u64()
}
