// src/validation/fields.rs

use std::fmt;
use std::str::FromStr;

use super::detection::has_sql_injection_content;
use super::patterns::{EMAIL_PATTERN, NAME_PATTERN, USERNAME_PATTERN};
use super::sanitizer::is_clean;
use crate::common::ValidationResult;

// ============================================================================
// Field Limits
// ============================================================================

pub const EMAIL_MAX_LENGTH: usize = 100;
pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 50;
pub const NAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;
pub const TITLE_MIN_LENGTH: usize = 5;
pub const TITLE_MAX_LENGTH: usize = 200;
pub const CONTENT_MIN_LENGTH: usize = 10;
pub const CONTENT_MAX_LENGTH: usize = 10000;

pub const DEFAULT_NAME_LABEL: &str = "Name";

// ============================================================================
// Field Validators
// ============================================================================

pub fn validate_email<'a>(value: impl Into<Option<&'a str>>) -> ValidationResult {
    let Some(email) = required(value.into()) else {
        return ValidationResult::invalid("Email is required");
    };

    let mut result = ValidationResult::new();

    if char_len(email) > EMAIL_MAX_LENGTH {
        result.add_error(format!(
            "Email must be less than {} characters",
            EMAIL_MAX_LENGTH
        ));
    }

    if !EMAIL_PATTERN.is_match(email) {
        result.add_error("Please enter a valid email address");
    }

    if !is_clean(email) {
        result.add_error("Email contains invalid characters");
    }

    result
}

pub fn validate_username<'a>(value: impl Into<Option<&'a str>>) -> ValidationResult {
    let Some(username) = required(value.into()) else {
        return ValidationResult::invalid("Username is required");
    };

    let mut result = ValidationResult::new();
    let len = char_len(username);

    if len < USERNAME_MIN_LENGTH {
        result.add_error(format!(
            "Username must be at least {} characters long",
            USERNAME_MIN_LENGTH
        ));
    }

    if len > USERNAME_MAX_LENGTH {
        result.add_error(format!(
            "Username must be less than {} characters",
            USERNAME_MAX_LENGTH
        ));
    }

    if !USERNAME_PATTERN.is_match(username) {
        result.add_error("Username can only contain letters, numbers, and underscores");
    }

    result
}

/// First/last name; `label` names the field in every message
pub fn validate_name<'a>(value: impl Into<Option<&'a str>>, label: &str) -> ValidationResult {
    let Some(name) = required(value.into()) else {
        return ValidationResult::invalid(format!("{} is required", label));
    };

    let mut result = ValidationResult::new();

    if char_len(name) > NAME_MAX_LENGTH {
        result.add_error(format!(
            "{} must be less than {} characters",
            label, NAME_MAX_LENGTH
        ));
    }

    if !NAME_PATTERN.is_match(name) {
        result.add_error(format!(
            "{} can only contain letters, spaces, hyphens, and apostrophes",
            label
        ));
    }

    result
}

/// Passwords are never rendered, so there is no sanitization check
pub fn validate_password<'a>(value: impl Into<Option<&'a str>>) -> ValidationResult {
    let Some(password) = required(value.into()) else {
        return ValidationResult::invalid("Password is required");
    };

    let mut result = ValidationResult::new();
    let len = char_len(password);

    if len < PASSWORD_MIN_LENGTH {
        result.add_error(format!(
            "Password must be at least {} characters long",
            PASSWORD_MIN_LENGTH
        ));
    }

    if len > PASSWORD_MAX_LENGTH {
        result.add_error(format!(
            "Password must be less than {} characters",
            PASSWORD_MAX_LENGTH
        ));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        result.add_error("Password must contain at least one letter and one number");
    }

    result
}

pub fn validate_post_title<'a>(value: impl Into<Option<&'a str>>) -> ValidationResult {
    validate_free_text(
        value.into(),
        "Title",
        TITLE_MIN_LENGTH,
        TITLE_MAX_LENGTH,
    )
}

pub fn validate_post_content<'a>(value: impl Into<Option<&'a str>>) -> ValidationResult {
    validate_free_text(
        value.into(),
        "Content",
        CONTENT_MIN_LENGTH,
        CONTENT_MAX_LENGTH,
    )
}

/// Shared rules for displayed free text (post title and content)
fn validate_free_text(
    value: Option<&str>,
    label: &str,
    min: usize,
    max: usize,
) -> ValidationResult {
    let Some(text) = required(value) else {
        return ValidationResult::invalid(format!("{} is required", label));
    };

    let mut result = ValidationResult::new();
    let len = char_len(text);

    if len < min {
        result.add_error(format!("{} must be at least {} characters long", label, min));
    }

    if len > max {
        result.add_error(format!("{} must be less than {} characters", label, max));
    }

    if !is_clean(text) {
        result.add_error(format!("{} contains invalid characters", label));
    }

    if has_sql_injection_content(text) {
        result.add_error(format!("{} contains invalid content", label));
    }

    result
}

// ============================================================================
// Field Dispatch
// ============================================================================

/// Form field kinds addressable by their wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Username,
    FirstName,
    LastName,
    Name,
    Password,
    Title,
    Content,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Username => "username",
            FieldKind::FirstName => "firstName",
            FieldKind::LastName => "lastName",
            FieldKind::Name => "name",
            FieldKind::Password => "password",
            FieldKind::Title => "title",
            FieldKind::Content => "content",
        }
    }

    /// Label used in name messages when the caller supplies none
    pub fn default_label(&self) -> &'static str {
        match self {
            FieldKind::FirstName => "First name",
            FieldKind::LastName => "Last name",
            _ => DEFAULT_NAME_LABEL,
        }
    }

    /// Runs the validator for this field. `label` only affects name fields.
    pub fn validate(&self, value: Option<&str>, label: Option<&str>) -> ValidationResult {
        match self {
            FieldKind::Email => validate_email(value),
            FieldKind::Username => validate_username(value),
            FieldKind::FirstName | FieldKind::LastName | FieldKind::Name => {
                validate_name(value, label.unwrap_or(self.default_label()))
            }
            FieldKind::Password => validate_password(value),
            FieldKind::Title => validate_post_title(value),
            FieldKind::Content => validate_post_content(value),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(FieldKind::Email),
            "username" => Ok(FieldKind::Username),
            "firstName" | "first_name" => Ok(FieldKind::FirstName),
            "lastName" | "last_name" => Ok(FieldKind::LastName),
            "name" => Ok(FieldKind::Name),
            "password" => Ok(FieldKind::Password),
            "title" => Ok(FieldKind::Title),
            "content" => Ok(FieldKind::Content),
            other => Err(format!("Unknown field '{}'", other)),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Trimmed value, or `None` when missing or blank
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
