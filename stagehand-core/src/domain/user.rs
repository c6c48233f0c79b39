//! Platform user types

use serde::{Deserialize, Serialize};

/// Account record returned when a credential is validated against the
/// platform. The relay forwards it to the caller and keeps nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
