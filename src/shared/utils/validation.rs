use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

fn unsafe_filename_chars() -> &'static Regex {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE.get_or_init(|| {
        Regex::new(r#"[\\/:*?"<>|\s]+"#).expect("valid filename regex")
    })
}

pub struct Validator;

impl Validator {
    /// Returns the trimmed query, or a validation error for blank input.
    pub fn validate_search_query(query: &str) -> Result<&str, AppError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > 200 {
            return Err(AppError::ValidationError(
                "Search query too long (max 200 characters)".to_string(),
            ));
        }
        Ok(trimmed)
    }

    pub fn validate_year_range(min_year: i32, max_year: i32) -> Result<(), AppError> {
        if min_year > max_year {
            return Err(AppError::ValidationError(format!(
                "Minimum year {} is after maximum year {}",
                min_year, max_year
            )));
        }
        Ok(())
    }

    pub fn validate_timeout_secs(timeout: u64) -> Result<(), AppError> {
        if timeout == 0 {
            return Err(AppError::ValidationError(
                "Timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Makes free text usable inside a file name.
    pub fn sanitize_filename_part(part: &str) -> String {
        unsafe_filename_chars()
            .replace_all(part.trim(), "_")
            .trim_matches('_')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_rejected() {
        assert!(Validator::validate_search_query("   ").is_err());
        assert_eq!(Validator::validate_search_query("  Dune ").unwrap(), "Dune");
    }

    #[test]
    fn test_year_range() {
        assert!(Validator::validate_year_range(1990, 2024).is_ok());
        assert!(Validator::validate_year_range(2024, 1990).is_err());
    }

    #[test]
    fn test_sanitize_filename_part() {
        assert_eq!(
            Validator::sanitize_filename_part("Spider Man"),
            "Spider_Man"
        );
        assert_eq!(Validator::sanitize_filename_part(" a/b:c "), "a_b_c");
        assert_eq!(Validator::sanitize_filename_part(""), "");
    }
}
