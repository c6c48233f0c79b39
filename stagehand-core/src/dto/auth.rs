//! Credential validation DTOs

use serde::{Deserialize, Serialize};

use crate::domain::user::UserInfo;

/// Body of `POST /api/validate-key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateKeyRequest {
    #[serde(default)]
    pub api_key: String,
}

/// Response of `POST /api/validate-key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl KeyValidation {
    pub fn accepted(user: UserInfo) -> Self {
        Self {
            valid: true,
            user: Some(user),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            user: None,
            error: Some(error.into()),
        }
    }
}
