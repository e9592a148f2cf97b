// src/validation/models.rs

use serde::{Deserialize, Serialize};

/// Registration form as submitted by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

/// Post creation form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostCreation {
    pub title: String,
    pub content: String,
}
