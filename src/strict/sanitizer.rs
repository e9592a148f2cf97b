// src/strict/sanitizer.rs
//! Reject-or-normalize input rules applied before anything is persisted
//!
//! Unlike the form engine these rules stop at the first violation and
//! return an HTTP 400 error. Accepted values come back trimmed and
//! HTML-escaped, with per-field normalization (lowercase identifiers,
//! title-cased names).

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::common::{safe_text_log, ApiError};
use crate::services::monitoring::record_rejection;

pub const EMAIL_MAX_LENGTH: usize = 100;
pub const USERNAME_MAX_LENGTH: usize = 50;
pub const USERNAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 50;
pub const TITLE_MAX_LENGTH: usize = 200;
pub const TITLE_MIN_LENGTH: usize = 5;
pub const CONTENT_MAX_LENGTH: usize = 10000;
pub const CONTENT_MIN_LENGTH: usize = 10;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

lazy_static! {
    static ref SQL_INJECTION_PATTERNS: Vec<Regex> = [
        r"(?i)\b(?:union|select|insert|delete|update|drop|create|alter|exec|execute)\b",
        r"--|#|/\*|\*/",
        r"(?i)\b(?:or|and)\b\s+\d+\s*=\s*\d+",
        r"(?i)'\s*(?:or|and)\s*'\w*'\s*=\s*'\w*",
        r"\d+\s*(?:=|<|>)\s*\d+",
        r"(?i)xp_|sp_|fn_",
        r"(?i)script|javascript|vbscript|onload|onerror",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Failed to compile strict SQL pattern"))
    .collect();

    static ref XSS_PATTERNS: Vec<Regex> = [
        r"(?i)<script[^>]*>.*?</script>",
        r"(?i)javascript:",
        r"(?i)vbscript:",
        r"(?i)onload\s*=",
        r"(?i)onerror\s*=",
        r"(?i)onclick\s*=",
        r"(?i)onmouseover\s*=",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Failed to compile strict XSS pattern"))
    .collect();

    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex");

    static ref USERNAME_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to compile username regex");

    static ref NAME_REGEX: Regex =
        Regex::new(r"^[a-zA-Z\s\-']+$").expect("Failed to compile name regex");
}

// ==================== Sanitization ====================

/// Trims, bounds, screens and HTML-escapes a string.
pub fn sanitize_string(value: &str, max_length: Option<usize>) -> Result<String, ApiError> {
    let screened = screen(value, max_length)?;
    Ok(escape_html(&screened))
}

/// Everything `sanitize_string` does except the final escaping
fn screen(value: &str, max_length: Option<usize>) -> Result<String, ApiError> {
    let value = value.trim();

    if let Some(max) = max_length {
        if value.chars().count() > max {
            return Err(ApiError::BadRequest(format!(
                "Input exceeds maximum length of {} characters",
                max
            )));
        }
    }

    if SQL_INJECTION_PATTERNS.iter().any(|p| p.is_match(value)) {
        warn!(preview = %safe_text_log(value, 40), "Rejected input with SQL content");
        record_rejection("sql", value);
        return Err(ApiError::BadRequest(
            "Potentially malicious SQL content detected".to_string(),
        ));
    }

    if XSS_PATTERNS.iter().any(|p| p.is_match(value)) {
        warn!(preview = %safe_text_log(value, 40), "Rejected input with script content");
        record_rejection("xss", value);
        return Err(ApiError::BadRequest(
            "Potentially malicious script content detected".to_string(),
        ));
    }

    Ok(value.to_string())
}

/// Escapes `& < > " '` for safe inclusion in HTML
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ==================== Field Rules ====================

/// Returns the lowercased address
pub fn validate_email(email: &str) -> Result<String, ApiError> {
    let email = sanitize_string(email, Some(EMAIL_MAX_LENGTH))?;

    if !EMAIL_REGEX.is_match(&email) {
        return Err(ApiError::BadRequest("Invalid email format".to_string()));
    }

    Ok(email.to_lowercase())
}

/// Returns the lowercased username
pub fn validate_username(username: &str) -> Result<String, ApiError> {
    let username = sanitize_string(username, Some(USERNAME_MAX_LENGTH))?;

    if !USERNAME_REGEX.is_match(&username) {
        return Err(ApiError::BadRequest(
            "Username can only contain letters, numbers, and underscores".to_string(),
        ));
    }

    if username.chars().count() < USERNAME_MIN_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Username must be at least {} characters long",
            USERNAME_MIN_LENGTH
        )));
    }

    Ok(username.to_lowercase())
}

/// First/last name. The character check runs before escaping so that
/// apostrophes are accepted; the returned value is title-cased and escaped.
pub fn validate_name(name: &str, field_name: &str) -> Result<String, ApiError> {
    let name = screen(name, Some(NAME_MAX_LENGTH))?;

    if name.is_empty() {
        return Err(ApiError::BadRequest(format!("{} is required", field_name)));
    }

    if !NAME_REGEX.is_match(&name) {
        return Err(ApiError::BadRequest(format!(
            "{} can only contain letters, spaces, hyphens, and apostrophes",
            field_name
        )));
    }

    Ok(escape_html(&title_case(&name)))
}

pub fn validate_post_title(title: &str) -> Result<String, ApiError> {
    let title = sanitize_string(title, Some(TITLE_MAX_LENGTH))?;

    if title.chars().count() < TITLE_MIN_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Title must be at least {} characters long",
            TITLE_MIN_LENGTH
        )));
    }

    Ok(title)
}

pub fn validate_post_content(content: &str) -> Result<String, ApiError> {
    let content = sanitize_string(content, Some(CONTENT_MAX_LENGTH))?;

    if content.chars().count() < CONTENT_MIN_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Content must be at least {} characters long",
            CONTENT_MIN_LENGTH
        )));
    }

    Ok(content)
}

/// Strength check only; the password itself is returned untouched
pub fn validate_password(password: &str) -> Result<String, ApiError> {
    let len = password.chars().count();

    if len < PASSWORD_MIN_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Password must be at least {} characters long",
            PASSWORD_MIN_LENGTH
        )));
    }

    if len > PASSWORD_MAX_LENGTH {
        return Err(ApiError::BadRequest("Password is too long".to_string()));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(ApiError::BadRequest(
            "Password must contain at least one letter and one number".to_string(),
        ));
    }

    Ok(password.to_string())
}

// ==================== Helpers ====================

/// Uppercases the first letter of every alphabetic run, lowercases the rest
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_is_alpha = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }

    out
}
