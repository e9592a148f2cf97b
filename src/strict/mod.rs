// src/strict/mod.rs
//! Authoritative server-side input rules
//!
//! The form engine in [`crate::validation`] is a UX aid; these rules are
//! what every value must pass before it is accepted.

pub mod models;
pub mod params;
pub mod sanitizer;


pub use models::{
    LoginRequest, PostRequest, RegistrationRequest, ValidatedLogin, ValidatedPost,
    ValidatedRegistration,
};
pub use params::{
    parse_integer_param, validate_integer_id, validate_pagination_params, DEFAULT_PAGE_LIMIT,
};
pub use sanitizer::{escape_html, sanitize_string};
