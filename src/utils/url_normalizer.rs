//! Submitted URL normalization.
//!
//! Submitted strings are stored nearly verbatim: surrounding whitespace is
//! trimmed and a `https://` scheme is prefixed when none is present. No
//! further validation or canonicalization is applied.

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,
}

/// Normalizes a submitted URL for storage.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed.
/// 2. If the result has no `http://` / `https://` prefix (compared
///    case-insensitively), `https://` is prepended.
/// 3. Everything else is preserved as submitted.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] if the input is empty after
/// trimming.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("https://{trimmed}"))
    }
}
