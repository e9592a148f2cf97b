// Common validation types and traits

use serde::Serialize;

/// Outcome of running one or more validation rules.
///
/// `is_valid` is true exactly when `errors` is empty. Messages keep the
/// order in which the rules were evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Result carrying a single failure
    pub fn invalid(message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.add_error(message);
        result
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut result = ValidationResult::invalid("first");
        let mut other = ValidationResult::new();
        other.add_error("second");
        other.add_error("third");

        result.merge(other);
        result.merge(ValidationResult::new());

        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ValidationResult::invalid("Email is required"))
            .expect("serialize");
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"][0], "Email is required");
    }
}
