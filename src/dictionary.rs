use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::DictionaryError;

/// Deduplicated set of lowercase words plus the shortest and longest
/// word lengths seen. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    min_length: usize,
    max_length: usize,
}

impl Dictionary {
    /// Builds the index from raw lines, one word per line.
    pub fn load<I, S>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = HashSet::new();
        let mut min_length = usize::MAX;
        let mut max_length = 0;

        for line in lines {
            let word = line.as_ref().trim(); // strips \n and \r\n leftovers
            if word.is_empty() {
                continue;
            }
            let word = word.to_lowercase();
            let length = word.chars().count();
            min_length = min_length.min(length);
            max_length = max_length.max(length);
            words.insert(word);
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        debug!(words = words.len(), min_length, max_length, "dictionary loaded");
        Ok(Self {
            words,
            min_length,
            max_length,
        })
    }

    /// Reads a newline-separated word list from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let io_err = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let reader = BufReader::new(file);
        let lines = reader.lines().collect::<Result<Vec<_>, _>>().map_err(io_err)?;
        Self::load(lines)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.words().filter(move |w| w.chars().count() == length)
    }
}
