// src/validation/patterns.rs
//! Static pattern tables for the form validation engine
//!
//! Compiled once on first use and never mutated afterwards.

use lazy_static::lazy_static;
use regex::Regex;

/// Tags whose whole element (including content) is stripped by the sanitizer
pub const DANGEROUS_TAGS: [&str; 4] = ["iframe", "object", "embed", "form"];

lazy_static! {
    // ==================== Detection ====================

    /// Markers of script injection into rendered markup
    pub static ref XSS_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)<\s*/?\s*script\b").expect("Failed to compile script tag regex"),
        Regex::new(r#"(?i)\bon[a-z]+\s*=\s*["']"#).expect("Failed to compile event handler regex"),
        // Unquoted handler values only count inside a tag
        Regex::new(r"(?i)<[a-z][^>]*\son[a-z]+\s*=\s*[^\s>]")
            .expect("Failed to compile unquoted event handler regex"),
        Regex::new(r"(?i)\b(?:javascript|vbscript)\s*:").expect("Failed to compile URI scheme regex"),
        Regex::new(r"(?i)<\s*(?:iframe|object|embed|form)\b").expect("Failed to compile embed tag regex"),
    ];

    /// Markers of SQL syntax smuggled into free text
    pub static ref SQL_INJECTION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:select|insert|update|delete|drop|create|alter|exec|execute|union)\b")
            .expect("Failed to compile SQL keyword regex"),
        Regex::new(r"--|/\*|\*/").expect("Failed to compile SQL comment regex"),
        Regex::new(r"(?i)\b(?:or|and)\s+\d+\s*=\s*\d+").expect("Failed to compile boolean tautology regex"),
        Regex::new(r"\b\d+\s*=\s*\d+\b").expect("Failed to compile numeric tautology regex"),
        Regex::new(r"(?i)'\s*(?:or|and)\s*'[^']*'\s*=\s*'").expect("Failed to compile quote tautology regex"),
    ];

    // ==================== Sanitization ====================

    pub static ref SCRIPT_BLOCK: Regex =
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("Failed to compile script block regex");

    pub static ref EVENT_HANDLER_ATTR: Regex =
        Regex::new(r#"(?i)\s*\bon\w+\s*=\s*(?:"[^"]*"|'[^']*')"#)
            .expect("Failed to compile event handler attribute regex");

    pub static ref DANGEROUS_SCHEME: Regex =
        Regex::new(r"(?i)(?:javascript|vbscript):").expect("Failed to compile dangerous scheme regex");

    /// One paired open/close pattern per tag, in `DANGEROUS_TAGS` order
    pub static ref DANGEROUS_ELEMENTS: Vec<Regex> = DANGEROUS_TAGS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>"))
                .expect("Failed to compile dangerous element regex")
        })
        .collect();

    // ==================== Field structure ====================

    pub static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex");

    pub static ref USERNAME_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9_]+$").expect("Failed to compile username regex");

    pub static ref NAME_PATTERN: Regex =
        Regex::new(r"^[A-Za-z\s\-']+$").expect("Failed to compile name regex");
}
