use serde::{Deserialize, Serialize};

/// User role, numeric on the wire (1 = administrator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum UserRole {
    Admin,
    Standard,
    Other(u8),
}

impl From<u8> for UserRole {
    fn from(value: u8) -> Self {
        match value {
            1 => UserRole::Admin,
            2 => UserRole::Standard,
            other => UserRole::Other(other),
        }
    }
}

impl From<UserRole> for u8 {
    fn from(value: UserRole) -> Self {
        match value {
            UserRole::Admin => 1,
            UserRole::Standard => 2,
            UserRole::Other(other) => other,
        }
    }
}

/// Details of the authenticated user, as provided by the host's
/// authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub username: String,
    pub role: UserRole,
}

impl UserDetails {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
