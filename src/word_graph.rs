use std::collections::HashMap;
use std::ops::RangeInclusive;

use tracing::{debug, info};

use crate::dictionary::Dictionary;

/// Letters tried at every position, in the order neighbours are generated.
pub const ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Word -> one-substitution neighbours, for words of a single length.
pub type AdjacencyList = HashMap<String, Vec<String>>;

/// One adjacency list per word length present in the dictionary.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    graphs: HashMap<usize, AdjacencyList>,
}

impl WordGraph {
    /// Builds graphs for every length the dictionary contains.
    pub fn build(dictionary: &Dictionary) -> Self {
        Self::build_within(dictionary, dictionary.min_length()..=dictionary.max_length())
    }

    /// Builds graphs only for lengths inside `lengths`. Lengths with no
    /// words get no entry.
    pub fn build_within(dictionary: &Dictionary, lengths: RangeInclusive<usize>) -> Self {
        let mut graphs: HashMap<usize, AdjacencyList> = HashMap::new();

        for word in dictionary.words() {
            let length = word.chars().count();
            if !lengths.contains(&length) {
                continue;
            }
            let neighbors = substitution_neighbors(word, dictionary);
            graphs
                .entry(length)
                .or_default()
                .insert(word.to_string(), neighbors);
        }

        let graph = Self { graphs };
        for length in graph.lengths() {
            debug!(length, words = graph.graphs[&length].len(), "built word graph");
        }
        info!(
            words = graph.word_count(),
            edges = graph.edge_count(),
            "done building word graphs"
        );
        graph
    }

    /// Neighbours of `word`, empty when the word isn't in any graph.
    pub fn neighbors(&self, word: &str) -> &[String] {
        self.graphs
            .get(&word.chars().count())
            .and_then(|graph| graph.get(word))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn graph_for_length(&self, length: usize) -> Option<&AdjacencyList> {
        self.graphs.get(&length)
    }

    /// Lengths that have a graph, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.graphs.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    pub fn word_count(&self) -> usize {
        self.graphs.values().map(HashMap::len).sum()
    }

    /// Directed neighbour entries across all graphs (each undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.graphs
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }
}

/// Every dictionary word reachable from `word` by changing one letter,
/// position by position, trying letters in alphabet order.
fn substitution_neighbors(word: &str, dictionary: &Dictionary) -> Vec<String> {
    let mut letters: Vec<char> = word.chars().collect();
    let mut neighbors = Vec::new();

    for index in 0..letters.len() {
        let original = letters[index];
        for letter in ALPHABET.filter(|&l| l != original) {
            letters[index] = letter;
            let candidate: String = letters.iter().collect();
            if dictionary.contains(&candidate) {
                neighbors.push(candidate);
            }
        }
        letters[index] = original; // restore before moving to the next position
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::load(words.iter().copied()).unwrap()
    }

    #[test]
    fn test_neighbors_in_generation_order() {
        let d = dict(&["cat", "bat", "hat", "cot", "cab", "dog"]);
        let graph = WordGraph::build(&d);
        // position 0 first (b, h), then position 1 (o), then position 2 (b)
        assert_eq!(graph.neighbors("cat"), ["bat", "hat", "cot", "cab"]);
        assert!(graph.neighbors("dog").is_empty());
    }

    #[test]
    fn test_edges_are_symmetric() {
        let d = dict(&["cold", "cord", "card", "ward", "warm", "word", "worm"]);
        let graph = WordGraph::build(&d);
        for word in d.words() {
            for neighbor in graph.neighbors(word) {
                assert!(
                    graph.neighbors(neighbor).iter().any(|n| n == word),
                    "{neighbor} should link back to {word}"
                );
            }
        }
    }

    #[test]
    fn test_partitioned_by_length() {
        let d = dict(&["at", "it", "cat", "cot", "coat"]);
        let graph = WordGraph::build(&d);
        assert_eq!(graph.lengths(), vec![2, 3, 4]);
        assert_eq!(graph.graph_for_length(2).unwrap().len(), 2);
        assert!(graph.neighbors("coat").is_empty());
        // "cat" and "coat" differ by an insertion, not a substitution
        assert!(!graph.neighbors("cat").iter().any(|n| n == "coat"));
    }

    #[test]
    fn test_no_graph_for_missing_lengths() {
        let d = dict(&["ab", "abcde"]);
        let graph = WordGraph::build(&d);
        assert_eq!(graph.lengths(), vec![2, 5]);
        assert!(graph.graph_for_length(3).is_none());
    }

    #[test]
    fn test_build_within_bounds() {
        let d = dict(&["at", "it", "cat", "cot", "coat", "boat"]);
        let graph = WordGraph::build_within(&d, 3..=3);
        assert_eq!(graph.lengths(), vec![3]);
        assert!(graph.neighbors("coat").is_empty());
        assert_eq!(graph.neighbors("cat"), ["cot"]);
    }

    #[test]
    fn test_counts() {
        let d = dict(&["cat", "cot", "dot", "xyz"]);
        let graph = WordGraph::build(&d);
        assert_eq!(graph.word_count(), 4);
        assert_eq!(graph.edge_count(), 4); // cat-cot and cot-dot, both directions
    }

    #[test]
    fn test_unknown_word_has_no_neighbors() {
        let graph = WordGraph::build(&dict(&["cat", "cot"]));
        assert!(graph.neighbors("cut").is_empty());
        assert!(graph.neighbors("").is_empty());
    }
}
