// Helper functions for safe logging

use serde_json::Value;

const REDACTED: &str = "[REDACTED]";

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// use formguard::common::safe_email_log;
///
/// assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            let first = parts[0].chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Shortens free text for log lines, keeping the first `max_chars` characters
pub fn safe_text_log(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}... ({} chars)", head, count)
    }
}

/// Replaces every password-like value in a JSON document before it is logged
pub fn redact_secrets(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                if is_secret_key(key) {
                    *v = Value::String(REDACTED.to_string());
                } else {
                    redact_secrets(v);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                redact_secrets(item);
            }
        }
        _ => {}
    }
}

fn is_secret_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.contains("password") || key.contains("token") || key.contains("secret")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safe_email_log() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
        assert_eq!(safe_email_log("abc"), "***@***.***");
        assert_eq!(safe_email_log("not-an-email"), "***@***.***");
    }

    #[test]
    fn test_safe_text_log_truncates() {
        assert_eq!(safe_text_log("short", 10), "short");
        assert_eq!(safe_text_log("abcdefghij", 4), "abcd... (10 chars)");
    }

    #[test]
    fn test_redact_secrets_nested() {
        let mut body = json!({
            "username": "alice",
            "password": "hunter22",
            "confirmPassword": "hunter22",
            "nested": [{ "access_token": "abc" }]
        });

        redact_secrets(&mut body);

        assert_eq!(body["username"], "alice");
        assert_eq!(body["password"], REDACTED);
        assert_eq!(body["confirmPassword"], REDACTED);
        assert_eq!(body["nested"][0]["access_token"], REDACTED);
    }
}
