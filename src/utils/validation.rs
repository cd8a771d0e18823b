//! Centralized input validation.

/// Longest breed query accepted, in characters.
///
/// Fuzzy scoring is quadratic in query length, so unbounded input is refused.
pub const MAX_QUERY_CHARS: usize = 200;

/// Query validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Breed name is required")]
    EmptyQuery,
    #[error("Breed name too long: exceeds {MAX_QUERY_CHARS} characters")]
    QueryTooLong,
}

/// Trim a breed query and check it is usable.
///
/// Case is preserved; the matcher lower-cases on its own.
///
/// # Errors
///
/// Returns `ValidationError::EmptyQuery` if nothing is left after trimming,
/// or `ValidationError::QueryTooLong` if it exceeds [`MAX_QUERY_CHARS`].
///
/// # Examples
///
/// ```
/// use breed_resolver::utils::validation::validate_query;
///
/// assert_eq!(validate_query("  Beagle ").unwrap(), "Beagle");
/// assert!(validate_query("   ").is_err());
/// ```
pub fn validate_query(query: &str) -> Result<&str, ValidationError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }
    if trimmed.chars().count() > MAX_QUERY_CHARS {
        return Err(ValidationError::QueryTooLong);
    }
    Ok(trimmed)
}
