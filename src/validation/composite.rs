// src/validation/composite.rs

use super::fields::{
    validate_email, validate_name, validate_password, validate_post_content,
    validate_post_title, validate_username,
};
use super::models::{PostCreation, UserRegistration};
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Composite Validators
// ============================================================================

/// Runs every registration field validator and concatenates their errors
/// in form order, then checks the password confirmation.
pub fn validate_user_registration(data: &UserRegistration) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(validate_username(data.username.as_str()));
    result.merge(validate_email(data.email.as_str()));
    result.merge(validate_name(data.first_name.as_str(), "First name"));
    result.merge(validate_name(data.last_name.as_str(), "Last name"));
    result.merge(validate_password(data.password.as_str()));

    if let Some(confirm) = &data.confirm_password {
        if confirm != &data.password {
            result.add_error("Passwords do not match");
        }
    }

    result
}

pub fn validate_post_creation(data: &PostCreation) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(validate_post_title(data.title.as_str()));
    result.merge(validate_post_content(data.content.as_str()));

    result
}

pub struct RegistrationValidator;

impl Validator<UserRegistration> for RegistrationValidator {
    fn validate(&self, data: &UserRegistration) -> ValidationResult {
        validate_user_registration(data)
    }
}

pub struct PostValidator;

impl Validator<PostCreation> for PostValidator {
    fn validate(&self, data: &PostCreation) -> ValidationResult {
        validate_post_creation(data)
    }
}
