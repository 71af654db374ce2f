// Rust structs mirroring the dashboard's wire types. The backend serializes
// with PascalCase field names; renames below follow that convention.

pub mod endpoint;
pub mod ldap;
pub mod settings;
pub mod stack;
pub mod user;

pub use endpoint::{map_group_names, Endpoint, EndpointGroup, EndpointType, Extension};
pub use ldap::{LdapSearchSettings, LdapSettings};
pub use settings::{LabelFilter, Settings, SettingsForm};
pub use stack::{Stack, StackEnv, StackFile, StackSpec};
pub use user::{UserDetails, UserRole};
