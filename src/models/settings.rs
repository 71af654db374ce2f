use serde::{Deserialize, Serialize};

/// Singleton server-side application configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    #[serde(rename = "LogoURL")]
    pub logo_url: String,
    #[serde(rename = "TemplatesURL")]
    pub templates_url: String,
    pub default_ownership: i32,
    pub allow_bind_mounts_for_regular_users: bool,
    pub allow_privileged_mode_for_regular_users: bool,
    pub snapshot_interval: String,
    #[serde(default)]
    pub black_listed_labels: Vec<LabelFilter>,
}

/// One label-based container filter rule. Duplicates are allowed; the
/// backend treats the list as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFilter {
    pub name: String,
    pub value: String,
}

/// Transient form state for the settings view.
///
/// The two transforms below are deliberately kept adjacent: `from_settings`
/// is the load direction, `apply_to` the save direction, and the round-trip
/// tests pin them to each other so they cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    pub custom_logo: bool,
    pub external_templates: bool,
    pub default_ownership: i32,
    pub restrict_bind_mounts: bool,
    pub restrict_privileged_mode: bool,
    pub label_name: String,
    pub label_value: String,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            custom_logo: false,
            external_templates: false,
            default_ownership: 1,
            restrict_bind_mounts: false,
            restrict_privileged_mode: false,
            label_name: String::new(),
            label_value: String::new(),
        }
    }
}

impl SettingsForm {
    /// Load-direction transform: derives the checkbox state from the raw
    /// record. The "allow" flags are inverted into "restrict" flags for
    /// display.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            custom_logo: !settings.logo_url.is_empty(),
            external_templates: !settings.templates_url.is_empty(),
            default_ownership: settings.default_ownership,
            restrict_bind_mounts: !settings.allow_bind_mounts_for_regular_users,
            restrict_privileged_mode: !settings.allow_privileged_mode_for_regular_users,
            label_name: String::new(),
            label_value: String::new(),
        }
    }

    /// Save-direction transform, inverse of [`SettingsForm::from_settings`].
    ///
    /// Enforces the consistency invariant: a disabled toggle force-clears
    /// its URL so the record is never persisted with a stale value behind
    /// an off switch.
    pub fn apply_to(&self, settings: &mut Settings) {
        if !self.custom_logo {
            settings.logo_url.clear();
        }
        if !self.external_templates {
            settings.templates_url.clear();
        }
        settings.default_ownership = self.default_ownership;
        settings.allow_bind_mounts_for_regular_users = !self.restrict_bind_mounts;
        settings.allow_privileged_mode_for_regular_users = !self.restrict_privileged_mode;
    }
}
