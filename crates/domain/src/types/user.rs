//! User shapes for the cluster-admin and per-database user endpoints.

use serde::{Deserialize, Serialize};

/// A user record as sent to or received from the service.
///
/// Every field is optional and omitted from JSON when unset. The update
/// endpoints rely on this: `update_database_user` sends password and
/// permissions, `alter_database_privilege` sends the admin flag and
/// permissions and must never include a password. Constructing the exact
/// body per operation keeps an accidental credential overwrite impossible.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "isAdmin", skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// Permission strings, ordered; opaque to the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl User {
    /// Body for creating a cluster admin: name and password only.
    pub fn credentials(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self { name: Some(name.into()), password: Some(password.into()), ..Self::default() }
    }

    /// Body for updating a password in place: the named user's other
    /// fields are left unset.
    pub fn password_only(password: impl Into<String>) -> Self {
        Self { password: Some(password.into()), ..Self::default() }
    }
}
