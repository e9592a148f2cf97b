// src/validation/detection.rs
//! Standalone content predicates, usable for flagging without blocking

use super::patterns::{SQL_INJECTION_PATTERNS, XSS_PATTERNS};

/// True if any XSS pattern matches; non-text input is never flagged
pub fn has_xss_content<'a>(text: impl Into<Option<&'a str>>) -> bool {
    text.into()
        .map(|t| XSS_PATTERNS.iter().any(|p| p.is_match(t)))
        .unwrap_or(false)
}

/// True if any SQL-injection pattern matches; non-text input is never flagged
pub fn has_sql_injection_content<'a>(text: impl Into<Option<&'a str>>) -> bool {
    text.into()
        .map(|t| SQL_INJECTION_PATTERNS.iter().any(|p| p.is_match(t)))
        .unwrap_or(false)
}
