use crate::client::ApiClient;
use crate::controllers::EndpointService;
use crate::error::ApiError;
use crate::models::Endpoint;

/// Client for the endpoint listing and the on-demand snapshot
/// (`GET /endpoints`, `POST /endpoints/snapshot`).
#[derive(Debug, Clone)]
pub struct EndpointClient {
    api: ApiClient,
}

impl EndpointClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Endpoint>, ApiError> {
        self.api.get_json(&self.api.url(&["endpoints"])).await
    }

    /// Asks the server to re-discover the state of every endpoint.
    pub async fn snapshot_all(&self) -> Result<(), ApiError> {
        log::info!("endpoints: triggering snapshot of all endpoints");
        self.api.post_empty(&self.api.url(&["endpoints", "snapshot"])).await
    }
}

impl EndpointService for EndpointClient {
    async fn endpoints(&self) -> Result<Vec<Endpoint>, ApiError> {
        self.list().await
    }

    async fn snapshot(&self) -> Result<(), ApiError> {
        self.snapshot_all().await
    }
}
