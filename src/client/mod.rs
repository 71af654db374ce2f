//! Typed HTTP resource clients.
//!
//! One client per backend resource, one method per logical operation, all
//! built on [`ApiClient`]: a thin reqwest wrapper owning the base URL, the
//! path-parameter formatting, the status-to-error mapping, and the
//! foreground loading counter that drives the host UI's loading indicator.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

pub mod endpoints;
pub mod groups;
pub mod registries;
pub mod settings;
pub mod stacks;

pub use endpoints::EndpointClient;
pub use groups::GroupClient;
pub use registries::RegistryManifestClient;
pub use settings::SettingsClient;
pub use stacks::StackClient;

// ── loading indicator ─────────────────────────────────────────────────────────

/// Counts foreground requests currently in flight.
///
/// The host UI polls [`LoadingIndicator::active`] to decide whether to show
/// a global progress bar. Background requests (stack create/update) never
/// touch the counter, so they run without blocking the whole UI.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator(Arc<AtomicUsize>);

impl LoadingIndicator {
    pub fn active(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn enter(&self) -> LoadingGuard {
        self.0.fetch_add(1, Ordering::SeqCst);
        LoadingGuard(Arc::clone(&self.0))
    }
}

struct LoadingGuard(Arc<AtomicUsize>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Whether a request participates in the global loading indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Foreground,
    Background,
}

// ── path formatting ───────────────────────────────────────────────────────────

/// Formats one caller-supplied path parameter.
///
/// Empty values are rejected before any request is formed; everything
/// outside the URL-unreserved set is percent-encoded so values like an
/// image repository ("library/nginx") land in a single path segment.
pub(crate) fn path_param(name: &'static str, value: &str) -> Result<String, ApiError> {
    if value.is_empty() {
        return Err(ApiError::InvalidPathParam { name, reason: "must not be empty" });
    }

    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            other => {
                let _ = write!(encoded, "%{other:02X}");
            }
        }
    }
    Ok(encoded)
}

// ── client ────────────────────────────────────────────────────────────────────

/// Shared transport for all resource clients. Cheap to clone; clones share
/// the connection pool and the loading indicator.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    loading: LoadingIndicator,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            loading: LoadingIndicator::default(),
        })
    }

    pub fn loading_indicator(&self) -> &LoadingIndicator {
        &self.loading
    }

    /// Joins pre-validated path segments onto the base URL.
    pub(crate) fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }

    fn track(&self, dispatch: Dispatch) -> Option<LoadingGuard> {
        match dispatch {
            Dispatch::Foreground => Some(self.loading.enter()),
            Dispatch::Background => None,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let _guard = self.track(Dispatch::Foreground);
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        dispatch: Dispatch,
    ) -> Result<T, ApiError> {
        let _guard = self.track(dispatch);
        let response = self.http.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        dispatch: Dispatch,
    ) -> Result<(), ApiError> {
        let _guard = self.track(dispatch);
        let response = self.http.put(url).json(body).send().await?;
        Self::expect_success(response).await.map(drop)
    }

    pub(crate) async fn post_empty(&self, url: &str) -> Result<(), ApiError> {
        let _guard = self.track(Dispatch::Foreground);
        let response = self.http.post(url).send().await?;
        Self::expect_success(response).await.map(drop)
    }

    pub(crate) async fn delete(&self, url: &str) -> Result<(), ApiError> {
        let _guard = self.track(Dispatch::Foreground);
        let response = self.http.delete(url).send().await?;
        Self::expect_success(response).await.map(drop)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        Self::expect_success(response).await?.json().await.map_err(ApiError::from)
    }

    /// Returns the response untouched on 2xx; otherwise consumes it into an
    /// [`ApiError::Status`] carrying the body as the error detail.
    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message })
    }
}
