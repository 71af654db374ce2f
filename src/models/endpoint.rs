use serde::{Deserialize, Serialize};

/// Deployment backend class behind an endpoint.
///
/// The wire format is the raw numeric discriminator; values this client does
/// not know about round-trip unchanged as `Other` and are managed through
/// the generic Docker-class dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum EndpointType {
    Docker,
    AgentOnDocker,
    Azure,
    Other(u8),
}

impl From<u8> for EndpointType {
    fn from(value: u8) -> Self {
        match value {
            1 => EndpointType::Docker,
            2 => EndpointType::AgentOnDocker,
            3 => EndpointType::Azure,
            other => EndpointType::Other(other),
        }
    }
}

impl From<EndpointType> for u8 {
    fn from(value: EndpointType) -> Self {
        match value {
            EndpointType::Docker => 1,
            EndpointType::AgentOnDocker => 2,
            EndpointType::Azure => 3,
            EndpointType::Other(other) => other,
        }
    }
}

/// A registered managed target (container host, cluster, or cloud
/// subscription) the dashboard can connect to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    pub id: u32,
    pub name: String,
    #[serde(rename = "Type")]
    pub endpoint_type: EndpointType,
    #[serde(rename = "PublicURL", default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    #[serde(default)]
    pub group_id: u32,
    /// Joined client-side from the group listing; never sent on the wire.
    #[serde(skip)]
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointGroup {
    pub id: u32,
    pub name: String,
}

/// Optional capability module associated with an endpoint, initialized
/// before entering its management context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Extension {
    #[serde(rename = "Type")]
    pub extension_type: u8,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Joins group names onto endpoints by group id. Endpoints whose group is
/// missing from `groups` keep `group_name = None`.
pub fn map_group_names(endpoints: &mut [Endpoint], groups: &[EndpointGroup]) {
    for endpoint in endpoints {
        endpoint.group_name = groups
            .iter()
            .find(|group| group.id == endpoint.group_id)
            .map(|group| group.name.clone());
    }
}
