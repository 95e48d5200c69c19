use std::ops::RangeInclusive;

use tracing::{debug, info};

use crate::config::LadderConfig;
use crate::dictionary::Dictionary;
use crate::error::{LadderError, ValidationError};
use crate::search::shortest_path;
use crate::validate::{normalize, validate};
use crate::word_graph::WordGraph;

/// Dictionary, word graphs and length bounds, built once and shared
/// read-only by every query.
#[derive(Debug, Clone)]
pub struct Solver {
    dictionary: Dictionary,
    graph: WordGraph,
    bounds: RangeInclusive<usize>,
}

impl Solver {
    pub fn new(dictionary: Dictionary, config: &LadderConfig) -> Result<Self, LadderError> {
        let bounds = config.length_bounds(&dictionary)?;
        info!(
            words = dictionary.len(),
            min_length = *bounds.start(),
            max_length = *bounds.end(),
            "building word graphs"
        );
        let graph = WordGraph::build_within(&dictionary, bounds.clone());
        Ok(Self {
            dictionary,
            graph,
            bounds,
        })
    }

    /// Loads the dictionary file and builds a solver over it.
    pub fn from_path(
        path: impl AsRef<std::path::Path>,
        config: &LadderConfig,
    ) -> Result<Self, LadderError> {
        let dictionary = Dictionary::from_path(path)?;
        Self::new(dictionary, config)
    }

    /// Validates raw words (after normalising them) without searching.
    pub fn validate(&self, start: &str, end: &str) -> Result<(), ValidationError> {
        validate(&normalize(start), &normalize(end), &self.bounds, &self.dictionary)
    }

    /// Normalises, validates, then searches. `Ok` with an empty vector
    /// means both words are valid but no ladder connects them.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<Vec<String>, ValidationError> {
        let start = normalize(start);
        let end = normalize(end);
        validate(&start, &end, &self.bounds, &self.dictionary)?;

        let path = shortest_path(&self.graph, &start, &end);
        debug!(%start, %end, found = !path.is_empty(), "query resolved");
        Ok(path)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    pub fn min_length(&self) -> usize {
        *self.bounds.start()
    }

    pub fn max_length(&self) -> usize {
        *self.bounds.end()
    }
}
