// src/strict/params.rs
//! Numeric parameter checks for ids and pagination

use std::num::IntErrorKind;

use crate::common::ApiError;

/// Largest value a PostgreSQL `integer` column can hold
pub const MAX_DB_INTEGER: i64 = 2_147_483_647;
pub const MAX_PAGE_LIMIT: i64 = 100;
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Parses a raw id (path segment, query value) into a positive database id
pub fn validate_integer_id(raw: &str, field_name: &str) -> Result<i64, ApiError> {
    let value = parse_integer_param(raw, field_name)?;
    check_id_range(value, field_name)
}

/// Parses a raw numeric parameter without range checks
pub fn parse_integer_param(raw: &str, field_name: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => too_large(field_name),
        IntErrorKind::NegOverflow => not_positive(field_name),
        _ => ApiError::BadRequest(format!("{} must be a valid integer", field_name)),
    })
}

pub fn check_id_range(value: i64, field_name: &str) -> Result<i64, ApiError> {
    if value <= 0 {
        return Err(not_positive(field_name));
    }

    if value > MAX_DB_INTEGER {
        return Err(too_large(field_name));
    }

    Ok(value)
}

/// Returns the accepted `(limit, offset)` pair; non-positive offsets become 0
pub fn validate_pagination_params(limit: i64, offset: i64) -> Result<(i64, i64), ApiError> {
    let limit = check_id_range(limit, "Limit")?;
    let offset = if offset > 0 {
        check_id_range(offset, "Offset")?
    } else {
        0
    };

    if limit > MAX_PAGE_LIMIT {
        return Err(ApiError::BadRequest(format!(
            "Limit cannot exceed {}",
            MAX_PAGE_LIMIT
        )));
    }

    Ok((limit, offset))
}

fn not_positive(field_name: &str) -> ApiError {
    ApiError::BadRequest(format!("{} must be a positive integer", field_name))
}

fn too_large(field_name: &str) -> ApiError {
    ApiError::BadRequest(format!("{} value is too large", field_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_id() {
        assert_eq!(validate_integer_id("42", "Post ID"), Ok(42));
        assert_eq!(validate_integer_id(" 7 ", "Post ID"), Ok(7));
        assert_eq!(
            validate_integer_id("abc", "Post ID"),
            Err(ApiError::BadRequest("Post ID must be a valid integer".to_string()))
        );
        assert_eq!(
            validate_integer_id("0", "User ID"),
            Err(ApiError::BadRequest("User ID must be a positive integer".to_string()))
        );
        assert_eq!(
            validate_integer_id("2147483648", "User ID"),
            Err(ApiError::BadRequest("User ID value is too large".to_string()))
        );
        assert_eq!(
            validate_integer_id("99999999999999999999999", "ID"),
            Err(ApiError::BadRequest("ID value is too large".to_string()))
        );
    }

    #[test]
    fn test_parse_integer_param_skips_range_checks() {
        assert_eq!(parse_integer_param("-5", "Offset"), Ok(-5));
        assert_eq!(parse_integer_param("0", "Limit"), Ok(0));
        assert_eq!(
            parse_integer_param("abc", "Limit"),
            Err(ApiError::BadRequest("Limit must be a valid integer".to_string()))
        );
        assert_eq!(
            parse_integer_param("99999999999999999999999", "Limit"),
            Err(ApiError::BadRequest("Limit value is too large".to_string()))
        );
    }

    #[test]
    fn test_pagination() {
        assert_eq!(validate_pagination_params(20, 0), Ok((20, 0)));
        assert_eq!(validate_pagination_params(100, 40), Ok((100, 40)));
        assert_eq!(validate_pagination_params(10, -5), Ok((10, 0)));
        assert_eq!(
            validate_pagination_params(101, 0),
            Err(ApiError::BadRequest("Limit cannot exceed 100".to_string()))
        );
        assert_eq!(
            validate_pagination_params(0, 0),
            Err(ApiError::BadRequest("Limit must be a positive integer".to_string()))
        );
    }
}
