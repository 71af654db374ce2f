use crate::client::{ApiClient, Dispatch};
use crate::controllers::SettingsService;
use crate::error::ApiError;
use crate::models::Settings;

/// Client for the singleton settings record (`GET/PUT /settings`).
#[derive(Debug, Clone)]
pub struct SettingsClient {
    api: ApiClient,
}

impl SettingsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn fetch(&self) -> Result<Settings, ApiError> {
        self.api.get_json(&self.api.url(&["settings"])).await
    }

    /// Persists the full record wholesale; there is no partial update.
    pub async fn update(&self, settings: &Settings) -> Result<(), ApiError> {
        self.api
            .put_json(&self.api.url(&["settings"]), settings, Dispatch::Foreground)
            .await
    }
}

impl SettingsService for SettingsClient {
    async fn settings(&self) -> Result<Settings, ApiError> {
        self.fetch().await
    }

    async fn update_settings(&self, settings: &Settings) -> Result<(), ApiError> {
        self.update(settings).await
    }
}
