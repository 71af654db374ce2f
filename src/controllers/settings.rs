use std::sync::atomic::{AtomicBool, Ordering};

use crate::controllers::{Navigator, SettingsService};
use crate::error::ControllerError;
use crate::models::{LabelFilter, Settings, SettingsForm};
use crate::notifications::{notify_failure, Notifier};
use crate::session::Session;

/// Controller for the settings view: loads the singleton settings record,
/// keeps the derived form state in sync, and persists the record wholesale.
///
/// Server and transport failures surface as notifications and are not
/// returned to the caller; [`ControllerError`] covers only client-side
/// rejections (nothing loaded, invalid index, overlapping save).
pub struct SettingsController<S, N, U> {
    service: S,
    navigator: N,
    notifier: U,
    session: Session,
    settings: Option<Settings>,
    /// Form bindings owned by the view; mutated directly by the host UI.
    pub form: SettingsForm,
    action_in_progress: AtomicBool,
}

impl<S, N, U> SettingsController<S, N, U>
where
    S: SettingsService,
    N: Navigator,
    U: Notifier,
{
    pub fn new(service: S, navigator: N, notifier: U, session: Session) -> Self {
        Self {
            service,
            navigator,
            notifier,
            session,
            settings: None,
            form: SettingsForm::default(),
            action_in_progress: AtomicBool::new(false),
        }
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn action_in_progress(&self) -> bool {
        self.action_in_progress.load(Ordering::SeqCst)
    }

    /// Fetches the settings record and derives the form state from it. On
    /// failure the record stays unset and one notification is raised.
    pub async fn init_view(&mut self) {
        match self.service.settings().await {
            Ok(settings) => {
                self.form = SettingsForm::from_settings(&settings);
                self.settings = Some(settings);
            }
            Err(err) => {
                notify_failure(&self.notifier, "Unable to retrieve application settings", &err);
            }
        }
    }

    /// Appends a `{name, value}` filter built from the form inputs, then
    /// persists the whole record.
    pub async fn add_filtered_container_label(&mut self) -> Result<(), ControllerError> {
        let settings = self.settings.as_mut().ok_or(ControllerError::SettingsNotLoaded)?;

        settings.black_listed_labels.push(LabelFilter {
            name: self.form.label_name.clone(),
            value: self.form.label_value.clone(),
        });

        let snapshot = settings.clone();
        self.persist(snapshot).await
    }

    /// Removes the filter at `index`, then persists. An out-of-range index
    /// is rejected and leaves the list untouched.
    pub async fn remove_filtered_container_label(
        &mut self,
        index: usize,
    ) -> Result<(), ControllerError> {
        let settings = self.settings.as_mut().ok_or(ControllerError::SettingsNotLoaded)?;

        let len = settings.black_listed_labels.len();
        if index >= len {
            return Err(ControllerError::IndexOutOfRange { index, len });
        }
        settings.black_listed_labels.remove(index);

        let snapshot = settings.clone();
        self.persist(snapshot).await
    }

    /// Applies the save-direction form transform and persists the record.
    pub async fn save_application_settings(&mut self) -> Result<(), ControllerError> {
        let form = self.form.clone();
        let settings = self.settings.as_mut().ok_or(ControllerError::SettingsNotLoaded)?;

        form.apply_to(settings);

        let snapshot = settings.clone();
        self.persist(snapshot).await
    }

    /// Shared persist path. Rejects overlapping saves, and in all other
    /// cases clears the in-progress flag when the round trip finishes.
    ///
    /// On success the logo and snapshot interval are propagated into the
    /// shared session, then the view is reloaded to pick up
    /// server-confirmed state.
    async fn persist(&self, settings: Settings) -> Result<(), ControllerError> {
        if self.action_in_progress.swap(true, Ordering::SeqCst) {
            return Err(ControllerError::SaveInProgress);
        }

        match self.service.update_settings(&settings).await {
            Ok(()) => {
                self.notifier.success("Success", "Settings updated");
                self.session.update_logo(settings.logo_url.clone());
                self.session.update_snapshot_interval(settings.snapshot_interval.clone());
                self.navigator.reload();
            }
            Err(err) => {
                notify_failure(&self.notifier, "Unable to update settings", &err);
            }
        }

        self.action_in_progress.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use http::StatusCode;

    use super::*;
    use crate::controllers::testing::{RecordingNavigator, Transition};
    use crate::error::ApiError;
    use crate::notifications::testing::RecordingNotifier;

    #[derive(Clone, Default)]
    struct FakeSettings {
        settings: Option<Settings>,
        fail_update: bool,
        updates: Arc<Mutex<Vec<Settings>>>,
    }

    impl SettingsService for FakeSettings {
        async fn settings(&self) -> Result<Settings, ApiError> {
            self.settings.clone().ok_or(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "boom".to_string(),
            })
        }

        async fn update_settings(&self, settings: &Settings) -> Result<(), ApiError> {
            self.updates.lock().unwrap().push(settings.clone());
            if self.fail_update {
                return Err(ApiError::Status {
                    status: StatusCode::BAD_REQUEST,
                    message: "rejected".to_string(),
                });
            }
            Ok(())
        }
    }

    fn settings() -> Settings {
        Settings {
            logo_url: "http://logo".to_string(),
            templates_url: String::new(),
            default_ownership: 1,
            allow_bind_mounts_for_regular_users: true,
            allow_privileged_mode_for_regular_users: true,
            snapshot_interval: "5m".to_string(),
            black_listed_labels: vec![],
        }
    }

    struct Harness {
        service: FakeSettings,
        navigator: RecordingNavigator,
        notifier: RecordingNotifier,
        session: Session,
    }

    impl Harness {
        fn with_settings(settings: Settings) -> Self {
            Self {
                service: FakeSettings { settings: Some(settings), ..FakeSettings::default() },
                navigator: RecordingNavigator::default(),
                notifier: RecordingNotifier::default(),
                session: Session::new(),
            }
        }

        async fn loaded_controller(
            &self,
        ) -> SettingsController<FakeSettings, RecordingNavigator, RecordingNotifier> {
            let mut controller = SettingsController::new(
                self.service.clone(),
                self.navigator.clone(),
                self.notifier.clone(),
                self.session.clone(),
            );
            controller.init_view().await;
            controller
        }

        fn persisted(&self) -> Vec<Settings> {
            self.service.updates.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn init_view_derives_form_state() {
        let mut record = settings();
        record.allow_bind_mounts_for_regular_users = false;

        let harness = Harness::with_settings(record);
        let controller = harness.loaded_controller().await;

        assert!(controller.form.custom_logo);
        assert!(!controller.form.external_templates);
        assert!(controller.form.restrict_bind_mounts);
        assert!(!controller.form.restrict_privileged_mode);
        assert!(controller.settings().is_some());
    }

    #[tokio::test]
    async fn init_view_failure_leaves_settings_unset() {
        let harness = Harness {
            service: FakeSettings::default(),
            navigator: RecordingNavigator::default(),
            notifier: RecordingNotifier::default(),
            session: Session::new(),
        };

        let controller = harness.loaded_controller().await;

        assert!(controller.settings().is_none());
        assert_eq!(harness.notifier.error_count(), 1);
    }

    #[tokio::test]
    async fn save_persists_cleared_logo_when_toggle_is_off() {
        let harness = Harness::with_settings(settings());
        let mut controller = harness.loaded_controller().await;
        controller.form.custom_logo = false;

        controller.save_application_settings().await.unwrap();

        let persisted = harness.persisted();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].logo_url, "");
        assert_eq!(harness.session.logo_url(), "");
        assert_eq!(harness.navigator.transitions(), vec![Transition::Reload]);
    }

    #[tokio::test]
    async fn save_re_inverts_restrict_flags_into_allow_flags() {
        let harness = Harness::with_settings(settings());
        let mut controller = harness.loaded_controller().await;
        controller.form.restrict_bind_mounts = true;
        controller.form.restrict_privileged_mode = true;

        controller.save_application_settings().await.unwrap();

        let persisted = harness.persisted();
        assert!(!persisted[0].allow_bind_mounts_for_regular_users);
        assert!(!persisted[0].allow_privileged_mode_for_regular_users);
    }

    #[tokio::test]
    async fn successful_save_propagates_session_state_and_reloads() {
        let harness = Harness::with_settings(settings());
        let mut controller = harness.loaded_controller().await;

        controller.save_application_settings().await.unwrap();

        assert_eq!(harness.session.logo_url(), "http://logo");
        assert_eq!(harness.session.snapshot_interval(), "5m");
        assert_eq!(harness.navigator.transitions(), vec![Transition::Reload]);
        assert!(!controller.action_in_progress());
    }

    #[tokio::test]
    async fn failed_save_notifies_and_clears_the_in_progress_flag() {
        let mut harness = Harness::with_settings(settings());
        harness.service.fail_update = true;

        let mut controller = harness.loaded_controller().await;
        controller.save_application_settings().await.unwrap();

        assert_eq!(harness.notifier.error_count(), 1);
        assert!(harness.navigator.transitions().is_empty());
        assert!(!controller.action_in_progress());
    }

    #[tokio::test]
    async fn add_label_appends_and_persists() {
        let harness = Harness::with_settings(settings());
        let mut controller = harness.loaded_controller().await;
        controller.form.label_name = "env".to_string();
        controller.form.label_value = "prod".to_string();

        controller.add_filtered_container_label().await.unwrap();

        let expected = vec![LabelFilter { name: "env".to_string(), value: "prod".to_string() }];
        assert_eq!(controller.settings().unwrap().black_listed_labels, expected);
        assert_eq!(harness.persisted()[0].black_listed_labels, expected);
    }

    #[tokio::test]
    async fn remove_label_drops_the_entry_at_the_index() {
        let mut record = settings();
        record.black_listed_labels = ["a", "b", "c"]
            .map(|name| LabelFilter { name: name.to_string(), value: String::new() })
            .to_vec();

        let harness = Harness::with_settings(record);
        let mut controller = harness.loaded_controller().await;

        controller.remove_filtered_container_label(1).await.unwrap();

        let persisted = harness.persisted();
        let names: Vec<_> = persisted[0]
            .black_listed_labels
            .iter()
            .map(|label| label.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn out_of_range_removal_is_rejected_without_persisting() {
        let mut record = settings();
        record.black_listed_labels =
            vec![LabelFilter { name: "a".to_string(), value: String::new() }];

        let harness = Harness::with_settings(record);
        let mut controller = harness.loaded_controller().await;

        let err = controller.remove_filtered_container_label(5).await.unwrap_err();

        assert_eq!(err, ControllerError::IndexOutOfRange { index: 5, len: 1 });
        assert_eq!(controller.settings().unwrap().black_listed_labels.len(), 1);
        assert!(harness.persisted().is_empty());
    }

    #[tokio::test]
    async fn overlapping_saves_are_rejected() {
        let harness = Harness::with_settings(settings());
        let mut controller = harness.loaded_controller().await;

        // Simulate a save still in flight.
        controller.action_in_progress.store(true, Ordering::SeqCst);

        let err = controller.save_application_settings().await.unwrap_err();

        assert_eq!(err, ControllerError::SaveInProgress);
        assert!(harness.persisted().is_empty());
    }

    #[tokio::test]
    async fn mutations_before_load_are_rejected() {
        let harness = Harness {
            service: FakeSettings::default(),
            navigator: RecordingNavigator::default(),
            notifier: RecordingNotifier::default(),
            session: Session::new(),
        };
        let mut controller = harness.loaded_controller().await;

        let err = controller.add_filtered_container_label().await.unwrap_err();
        assert_eq!(err, ControllerError::SettingsNotLoaded);
    }
}
