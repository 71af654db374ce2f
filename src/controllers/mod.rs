//! View controllers and the typed seams they consume.
//!
//! Each trait stands in for one collaborator service of the host
//! application. Controllers are generic over them (static dispatch), which
//! keeps the seams mockable without any dynamic machinery.

use crate::error::ApiError;
use crate::models::{Endpoint, EndpointGroup, EndpointType, Extension, Settings};

pub mod home;
pub mod settings;

pub use home::HomeController;
pub use settings::SettingsController;

/// Loads and persists the singleton application settings record.
pub trait SettingsService {
    async fn settings(&self) -> Result<Settings, ApiError>;
    async fn update_settings(&self, settings: &Settings) -> Result<(), ApiError>;
}

/// Lists endpoints and triggers a server-side re-discovery of all of them.
pub trait EndpointService {
    async fn endpoints(&self) -> Result<Vec<Endpoint>, ApiError>;
    async fn snapshot(&self) -> Result<(), ApiError>;
}

/// Lists endpoint groups, fetched alongside endpoints for the name join.
pub trait GroupService {
    async fn groups(&self) -> Result<Vec<EndpointGroup>, ApiError>;
}

/// Initializes endpoint-scoped extensions before entering a Docker-class
/// management context.
pub trait ExtensionService {
    async fn init_endpoint_extensions(&self, endpoint_id: u32) -> Result<Vec<Extension>, ApiError>;
}

/// Resets application state for the endpoint being entered.
pub trait StateService {
    async fn activate_endpoint(
        &self,
        name: &str,
        endpoint_type: EndpointType,
        extensions: &[Extension],
    ) -> Result<(), ApiError>;
}

/// Asks the user to confirm an endpoint snapshot. A declined prompt is a
/// no-op path, not an error.
pub trait ConfirmationPrompt {
    async fn confirm_endpoint_snapshot(&self) -> bool;
}

/// View transitions, owned by the host's router.
pub trait Navigator {
    fn go(&self, route: Route);
    /// Re-activates the current view so server-confirmed state is reloaded.
    fn reload(&self);
}

/// Named navigation targets and their string route identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AzureDashboard,
    DockerDashboard,
    EndpointEdit { id: u32 },
}

impl Route {
    pub fn state_name(&self) -> &'static str {
        match self {
            Route::AzureDashboard => "azure.dashboard",
            Route::DockerDashboard => "docker.dashboard",
            Route::EndpointEdit { .. } => "portainer.endpoints.endpoint",
        }
    }
}
