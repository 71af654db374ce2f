use serde::{Deserialize, Serialize};

/// LDAP connection settings as shaped for the UI: a plain copy of the
/// server payload with no validation and no defaulting. Absent fields stay
/// absent in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapSettings {
    #[serde(rename = "ReaderDN", skip_serializing_if = "Option::is_none")]
    pub reader_dn: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "SearchSettings", skip_serializing_if = "Option::is_none")]
    pub search_settings: Option<Vec<LdapSearchSettings>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapSearchSettings {
    #[serde(rename = "BaseDN", skip_serializing_if = "Option::is_none")]
    pub base_dn: Option<String>,
    #[serde(rename = "UsernameAttribute", skip_serializing_if = "Option::is_none")]
    pub username_attribute: Option<String>,
    #[serde(rename = "Filter", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(rename = "GroupBaseDN", skip_serializing_if = "Option::is_none")]
    pub group_base_dn: Option<String>,
    #[serde(rename = "GroupAttribute", skip_serializing_if = "Option::is_none")]
    pub group_attribute: Option<String>,
    #[serde(rename = "GroupFilter", skip_serializing_if = "Option::is_none")]
    pub group_filter: Option<String>,
}
