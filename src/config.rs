use std::ops::RangeInclusive;

use crate::dictionary::Dictionary;
use crate::error::LadderError;

/// Optional limits on which word lengths get a graph and may be queried.
/// Unset limits fall back to what the dictionary contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LadderConfig {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl LadderConfig {
    pub fn new(min_length: Option<usize>, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Intersects the configured limits with the dictionary's own bounds.
    pub fn length_bounds(&self, dictionary: &Dictionary) -> Result<RangeInclusive<usize>, LadderError> {
        let min = self
            .min_length
            .map_or(dictionary.min_length(), |m| m.max(dictionary.min_length()));
        let max = self
            .max_length
            .map_or(dictionary.max_length(), |m| m.min(dictionary.max_length()));

        let populated = dictionary
            .words()
            .any(|w| (min..=max).contains(&w.chars().count()));
        if !populated {
            return Err(LadderError::EmptyLengthWindow { min, max });
        }
        Ok(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::load(["ab", "abc", "abcd", "abcdef"]).unwrap()
    }

    #[test]
    fn test_default_uses_dictionary_bounds() {
        let bounds = LadderConfig::default().length_bounds(&dict()).unwrap();
        assert_eq!(bounds, 2..=6);
    }

    #[test]
    fn test_limits_clamp_bounds() {
        let bounds = LadderConfig::new(Some(3), Some(5)).length_bounds(&dict()).unwrap();
        assert_eq!(bounds, 3..=5);

        // limits wider than the dictionary don't widen anything
        let bounds = LadderConfig::new(Some(1), Some(10)).length_bounds(&dict()).unwrap();
        assert_eq!(bounds, 2..=6);
    }

    #[test]
    fn test_empty_window() {
        let err = LadderConfig::new(Some(7), None).length_bounds(&dict()).unwrap_err();
        assert!(matches!(err, LadderError::EmptyLengthWindow { min: 7, max: 6 }));

        // window inside the dictionary's range but with no words of those lengths
        let dict = Dictionary::load(["ab", "abcdef"]).unwrap();
        let err = LadderConfig::new(Some(3), Some(5)).length_bounds(&dict).unwrap_err();
        assert!(matches!(err, LadderError::EmptyLengthWindow { min: 3, max: 5 }));
    }
}
