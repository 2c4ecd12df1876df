//! Short code generation.
//!
//! Codes must be unpredictable so shortened links cannot be enumerated, so
//! generation draws from the operating system CSPRNG rather than a seeded
//! PRNG. Uniqueness is *not* guaranteed here; the database's UNIQUE
//! constraint is the authority and the service retries on collision.

/// Length of random bytes before base64 encoding.
///
/// Four bytes encode to exactly six URL-safe characters without padding.
const CODE_LENGTH_BYTES: usize = 4;

/// Length of a generated short code in characters.
pub const CODE_LENGTH: usize = 6;

/// Source of short code candidates.
///
/// Abstracted behind a trait so the allocation retry logic can be exercised
/// with a scripted generator in tests.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces one code candidate.
    fn generate(&self) -> String;
}

/// Production generator backed by the system randomness source.
#[derive(Debug, Clone, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 6-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare and
/// not recoverable by retrying).
pub fn generate_code() -> String {
    use base64::Engine as _;

    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_not_empty() {
        let code = generate_code();
        assert!(!code.is_empty());
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        let code = generate_code();
        assert!(
            code.chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_code_no_padding() {
        let code = generate_code();
        assert!(!code.contains('='));
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 32 bits of entropy; 1000 draws colliding would be a broken RNG.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_random_generator_matches_free_function_format() {
        let generator = RandomCodeGenerator;
        let code = generator.generate();
        assert_eq!(code.len(), CODE_LENGTH);
    }
}
