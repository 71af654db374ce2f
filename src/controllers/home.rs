use crate::controllers::{
    ConfirmationPrompt, EndpointService, ExtensionService, GroupService, Navigator, Route,
    StateService,
};
use crate::error::ApiError;
use crate::models::{map_group_names, Endpoint, EndpointType, UserDetails};
use crate::notifications::{notify_failure, Notifier};
use crate::session::Session;

/// Controller for the home view: lists endpoints, dispatches the user into
/// the management context matching the endpoint type, and triggers the
/// on-demand endpoint snapshot.
pub struct HomeController<E, G, X, S, C, N, U> {
    endpoint_service: E,
    group_service: G,
    extension_service: X,
    state_service: S,
    prompt: C,
    navigator: N,
    notifier: U,
    session: Session,
    current_user: UserDetails,
    endpoints: Option<Vec<Endpoint>>,
    is_admin: bool,
}

impl<E, G, X, S, C, N, U> HomeController<E, G, X, S, C, N, U>
where
    E: EndpointService,
    G: GroupService,
    X: ExtensionService,
    S: StateService,
    C: ConfirmationPrompt,
    N: Navigator,
    U: Notifier,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        endpoint_service: E,
        group_service: G,
        extension_service: X,
        state_service: S,
        prompt: C,
        navigator: N,
        notifier: U,
        session: Session,
        current_user: UserDetails,
    ) -> Self {
        Self {
            endpoint_service,
            group_service,
            extension_service,
            state_service,
            prompt,
            navigator,
            notifier,
            session,
            current_user,
            endpoints: None,
            is_admin: false,
        }
    }

    /// The merged endpoint list, or `None` until a successful fetch. Never
    /// partially populated: a failed fetch leaves it unset.
    pub fn endpoints(&self) -> Option<&[Endpoint]> {
        self.endpoints.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Fetches endpoints and groups concurrently, joins group names onto
    /// the endpoints, and publishes the merged list.
    pub async fn init_view(&mut self) {
        self.is_admin = self.current_user.is_admin();

        let (endpoints, groups) = tokio::join!(
            self.endpoint_service.endpoints(),
            self.group_service.groups()
        );

        match (endpoints, groups) {
            (Ok(mut endpoints), Ok(groups)) => {
                map_group_names(&mut endpoints, &groups);
                log::info!("home: loaded {} endpoint(s)", endpoints.len());
                self.endpoints = Some(endpoints);
            }
            (Err(err), _) | (_, Err(err)) => {
                notify_failure(&self.notifier, "Unable to retrieve endpoint information", &err);
            }
        }
    }

    /// Records the chosen endpoint in the session, then enters the
    /// management context matching its type. Any failure aborts navigation.
    pub async fn go_to_dashboard(&self, endpoint: &Endpoint) {
        self.session.set_endpoint_id(endpoint.id);
        self.session.set_endpoint_public_url(endpoint.public_url.clone());

        if endpoint.endpoint_type == EndpointType::Azure {
            self.switch_to_azure_endpoint(endpoint).await;
        } else {
            self.switch_to_docker_endpoint(endpoint).await;
        }
    }

    async fn switch_to_azure_endpoint(&self, endpoint: &Endpoint) {
        let activated = self
            .state_service
            .activate_endpoint(&endpoint.name, endpoint.endpoint_type, &[])
            .await;

        match activated {
            Ok(()) => self.navigator.go(Route::AzureDashboard),
            Err(err) => {
                notify_failure(&self.notifier, "Unable to connect to the Azure endpoint", &err);
            }
        }
    }

    async fn switch_to_docker_endpoint(&self, endpoint: &Endpoint) {
        let activated: Result<(), ApiError> = async {
            let extensions = self
                .extension_service
                .init_endpoint_extensions(endpoint.id)
                .await?;
            self.state_service
                .activate_endpoint(&endpoint.name, endpoint.endpoint_type, &extensions)
                .await
        }
        .await;

        match activated {
            Ok(()) => self.navigator.go(Route::DockerDashboard),
            Err(err) => {
                notify_failure(&self.notifier, "Unable to connect to the Docker endpoint", &err);
            }
        }
    }

    /// Asks for confirmation, then requests a snapshot of all endpoints.
    /// A declined prompt issues no request at all.
    pub async fn trigger_snapshot(&self) {
        if !self.prompt.confirm_endpoint_snapshot().await {
            return;
        }

        match self.endpoint_service.snapshot().await {
            Ok(()) => {
                self.notifier.success("Success", "Endpoints updated");
                self.navigator.reload();
            }
            Err(err) => {
                notify_failure(&self.notifier, "An error occurred during endpoint snapshot", &err);
            }
        }
    }

    pub fn go_to_edit(&self, id: u32) {
        self.navigator.go(Route::EndpointEdit { id });
    }
}
