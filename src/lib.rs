//! Input validation and sanitization for form-driven web applications.
//!
//! Two layers share one crate:
//!
//! - [`validation`]: the form engine. Pure per-field and composite
//!   validators that report every violated rule, a denylist
//!   [`Sanitizer`](validation::Sanitizer), and XSS/SQL-injection
//!   predicates.
//! - [`strict`]: the server-side rules. They reject on the first
//!   violation and return normalized, HTML-escaped values.
//!
//! The [`api`] module exposes both over HTTP.
//!
//! ```
//! use formguard::validation::{validate_email, has_xss_content};
//!
//! assert!(validate_email("user@example.com").is_valid);
//! assert!(has_xss_content("<script>alert(1)</script>"));
//! ```

pub mod api;
pub mod common;
pub mod logging_middleware;
pub mod services;
pub mod strict;
pub mod validation;

pub use common::{ApiError, ValidationResult, Validator};
