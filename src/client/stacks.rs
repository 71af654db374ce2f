use crate::client::{ApiClient, Dispatch};
use crate::error::ApiError;
use crate::models::{Stack, StackFile, StackSpec};

/// Client for the stack resource (`/stacks`).
///
/// create/update run as background requests so a long deployment does not
/// freeze the whole UI behind the global loading indicator.
#[derive(Debug, Clone)]
pub struct StackClient {
    api: ApiClient,
}

impl StackClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn stack_url(&self, id: u32) -> String {
        self.api.url(&["stacks", &id.to_string()])
    }

    pub async fn get(&self, id: u32) -> Result<Stack, ApiError> {
        self.api.get_json(&self.stack_url(id)).await
    }

    pub async fn query(&self) -> Result<Vec<Stack>, ApiError> {
        self.api.get_json(&self.api.url(&["stacks"])).await
    }

    pub async fn create(&self, spec: &StackSpec) -> Result<Stack, ApiError> {
        log::info!("stacks: creating stack {:?}", spec.name);
        self.api
            .post_json(&self.api.url(&["stacks"]), spec, Dispatch::Background)
            .await
    }

    pub async fn update(&self, id: u32, stack: &Stack) -> Result<(), ApiError> {
        log::info!("stacks: updating stack {id}");
        self.api
            .put_json(&self.stack_url(id), stack, Dispatch::Background)
            .await
    }

    pub async fn remove(&self, id: u32) -> Result<(), ApiError> {
        log::info!("stacks: removing stack {id}");
        self.api.delete(&self.stack_url(id)).await
    }

    /// Fetches the compose file backing a stack (`GET /stacks/:id/file`).
    pub async fn stack_file(&self, id: u32) -> Result<StackFile, ApiError> {
        self.api
            .get_json(&self.api.url(&["stacks", &id.to_string(), "file"]))
            .await
    }
}
