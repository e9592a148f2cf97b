// src/validation/mod.rs
//! Form validation engine
//!
//! Pure, stateless rules shared by every form: per-field validators,
//! composite validators for registration and post creation, a denylist
//! sanitizer, and XSS/SQL-injection predicates. Validators never fail;
//! they return a [`ValidationResult`](crate::common::ValidationResult)
//! listing every violated rule in a fixed order.

pub mod composite;
pub mod detection;
pub mod fields;
pub mod models;
pub mod patterns;
pub mod sanitizer;


pub use composite::{
    validate_post_creation, validate_user_registration, PostValidator, RegistrationValidator,
};
pub use detection::{has_sql_injection_content, has_xss_content};
pub use fields::{
    validate_email, validate_name, validate_password, validate_post_content,
    validate_post_title, validate_username, FieldKind,
};
pub use models::{PostCreation, UserRegistration};
pub use sanitizer::{sanitize_input, PatternSanitizer, Sanitizer};
