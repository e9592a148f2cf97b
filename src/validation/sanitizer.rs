// src/validation/sanitizer.rs
//! Denylist sanitizer for free-text form input
//!
//! Strips script blocks, inline event handlers, `javascript:`/`vbscript:`
//! prefixes and embedded-content elements. Each substitution runs on the
//! output of the previous one, so crafted nested markup can survive. This
//! is a convenience filter for form state; the server re-checks everything.

use super::patterns::{DANGEROUS_ELEMENTS, DANGEROUS_SCHEME, EVENT_HANDLER_ATTR, SCRIPT_BLOCK};

/// Cleans free text before it is stored or echoed back.
pub trait Sanitizer {
    fn sanitize(&self, input: &str) -> String;
}

/// Regex denylist implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternSanitizer;

impl Sanitizer for PatternSanitizer {
    fn sanitize(&self, input: &str) -> String {
        let mut sanitized = SCRIPT_BLOCK.replace_all(input, "").into_owned();
        sanitized = EVENT_HANDLER_ATTR.replace_all(&sanitized, "").into_owned();
        sanitized = DANGEROUS_SCHEME.replace_all(&sanitized, "").into_owned();
        for element in DANGEROUS_ELEMENTS.iter() {
            sanitized = element.replace_all(&sanitized, "").into_owned();
        }

        sanitized.trim().to_string()
    }
}

/// Sanitizes a possibly missing value; non-text input becomes `""`
pub fn sanitize_input<'a>(input: impl Into<Option<&'a str>>) -> String {
    match input.into() {
        Some(text) => PatternSanitizer.sanitize(text),
        None => String::new(),
    }
}

/// True when sanitizing would leave the (already trimmed) value untouched
pub(crate) fn is_clean(value: &str) -> bool {
    PatternSanitizer.sanitize(value) == value
}
