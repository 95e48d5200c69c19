use std::ops::RangeInclusive;

use crate::dictionary::Dictionary;
use crate::error::ValidationError;

/// Trims and lowercases a raw query word so it matches dictionary storage.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Checks a query before any search: equal lengths, length inside `bounds`,
/// then dictionary membership. The first failing check is reported.
pub fn validate(
    start: &str,
    end: &str,
    bounds: &RangeInclusive<usize>,
    dictionary: &Dictionary,
) -> Result<(), ValidationError> {
    let start_len = start.chars().count();
    let end_len = end.chars().count();

    if start_len != end_len {
        return Err(ValidationError::LengthMismatch {
            start: start_len,
            end: end_len,
        });
    }

    if !bounds.contains(&start_len) {
        return Err(ValidationError::OutOfRange {
            length: start_len,
            min: *bounds.start(),
            max: *bounds.end(),
        });
    }

    let mut unrecognized: Vec<String> = Vec::new();
    for word in [start, end] {
        if !dictionary.contains(word) && !unrecognized.iter().any(|w| w == word) {
            unrecognized.push(word.to_string());
        }
    }
    if !unrecognized.is_empty() {
        return Err(ValidationError::UnrecognizedWords(unrecognized));
    }

    Ok(())
}
