use crate::client::ApiClient;
use crate::controllers::GroupService;
use crate::error::ApiError;
use crate::models::EndpointGroup;

/// Client for the endpoint-group listing (`GET /endpoint_groups`).
#[derive(Debug, Clone)]
pub struct GroupClient {
    api: ApiClient,
}

impl GroupClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<EndpointGroup>, ApiError> {
        self.api.get_json(&self.api.url(&["endpoint_groups"])).await
    }
}

impl GroupService for GroupClient {
    async fn groups(&self) -> Result<Vec<EndpointGroup>, ApiError> {
        self.list().await
    }
}
