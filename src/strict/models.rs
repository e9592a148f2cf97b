// src/strict/models.rs

use serde::{Deserialize, Serialize};

use super::sanitizer::{
    sanitize_string, validate_email, validate_name, validate_password, validate_post_content,
    validate_post_title, validate_username, USERNAME_MAX_LENGTH,
};
use crate::common::ApiError;

// ============================================================================
// Registration
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Normalized registration, ready for persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRegistration {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegistrationRequest {
    /// Fields are checked in declaration order; the first failure wins
    pub fn validate(&self) -> Result<ValidatedRegistration, ApiError> {
        Ok(ValidatedRegistration {
            username: validate_username(&self.username)?,
            email: validate_email(&self.email)?,
            password: validate_password(&self.password)?,
            first_name: validate_name(&self.first_name, "First name")?,
            last_name: validate_name(&self.last_name, "Last name")?,
        })
    }
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedPost {
    pub title: String,
    pub content: String,
}

impl PostRequest {
    pub fn validate(&self) -> Result<ValidatedPost, ApiError> {
        Ok(ValidatedPost {
            title: validate_post_title(&self.title)?,
            content: validate_post_content(&self.content)?,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedLogin {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl LoginRequest {
    /// The password is only checked for presence; it is never sanitized
    pub fn validate(&self) -> Result<ValidatedLogin, ApiError> {
        let username = sanitize_string(&self.username, Some(USERNAME_MAX_LENGTH))?;

        if self.password.is_empty() {
            return Err(ApiError::BadRequest("Password is required".to_string()));
        }

        Ok(ValidatedLogin {
            username,
            password: self.password.clone(),
        })
    }
}
