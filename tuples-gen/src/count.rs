use std::num::NonZeroUsize;

use thiserror::Error;

/// Largest accepted arity. The generated text grows quadratically with the
/// count, so anything beyond this is rejected before generation.
pub const MAX_COUNT: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("invalid count '{value}': N must be a positive integer")]
    NotAnInteger { value: String },
    #[error("invalid count '{value}': N must be positive")]
    NotPositive { value: String },
    #[error("invalid count '{value}': N must be at most {MAX_COUNT}")]
    TooLarge { value: String },
}

/// Parse the maximum tuple arity from a command-line value.
pub fn parse_count(raw: &str) -> Result<NonZeroUsize, CountError> {
    let value = || raw.to_string();
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CountError::NotAnInteger { value: value() });
    }
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(CountError::NotPositive { value: value() });
    }

    // All digits and non-zero: the only remaining failure is magnitude.
    digits
        .parse::<usize>()
        .ok()
        .filter(|&count| count <= MAX_COUNT)
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| CountError::TooLarge { value: value() })
}
