use std::collections::{HashMap, HashSet, VecDeque};

use tracing::trace;

use crate::word_graph::WordGraph;

/// Per-query BFS bookkeeping. Lives only for one call to [`shortest_path`].
struct SearchState<'g> {
    queue: VecDeque<&'g str>,
    queued: HashSet<&'g str>,
    visited: HashSet<&'g str>,
    breadcrumbs: HashMap<&'g str, Option<&'g str>>,
}

impl<'g> SearchState<'g> {
    fn new(start: &'g str) -> Self {
        let mut state = Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            breadcrumbs: HashMap::new(),
        };
        state.breadcrumbs.insert(start, None);
        state.enqueue(start);
        state
    }

    fn enqueue(&mut self, word: &'g str) {
        self.queue.push_back(word);
        self.queued.insert(word);
    }

    fn dequeue(&mut self) -> Option<&'g str> {
        let word = self.queue.pop_front()?;
        self.queued.remove(word);
        Some(word)
    }

    fn is_known(&self, word: &str) -> bool {
        self.visited.contains(word) || self.queued.contains(word)
    }

    /// Walks predecessors back from `end` and returns the path start-first.
    fn backtrack(&self, end: &'g str) -> Vec<String> {
        let mut path = Vec::new();
        let mut cur = Some(end);
        while let Some(word) = cur {
            path.push(word.to_string());
            cur = self.breadcrumbs.get(word).copied().flatten();
        }
        path.reverse();
        path
    }
}

/// Breadth-first search from `start` to `end` over the graph for their
/// length. Returns the ladder with both ends included, or an empty vector
/// when `end` is unreachable.
///
/// Both words are expected to have passed [`crate::validate::validate`].
/// Among several shortest ladders the one returned follows neighbour
/// generation order, so results are deterministic for a given dictionary.
pub fn shortest_path<'g>(graph: &'g WordGraph, start: &'g str, end: &str) -> Vec<String> {
    let mut state = SearchState::new(start);

    while let Some(cur) = state.dequeue() {
        if cur == end {
            let path = state.backtrack(cur);
            trace!(visited = state.visited.len(), steps = path.len() - 1, "ladder found");
            return path;
        }

        state.visited.insert(cur);

        for neighbor in graph.neighbors(cur) {
            let neighbor = neighbor.as_str();
            if state.is_known(neighbor) {
                continue; // keeps the earlier, shorter breadcrumb
            }
            state.breadcrumbs.insert(neighbor, Some(cur));
            state.enqueue(neighbor);
        }
    }

    trace!(visited = state.visited.len(), "queue exhausted");
    Vec::new()
}

/// Number of single-letter changes in a ladder.
pub fn steps(path: &[String]) -> Option<usize> {
    path.len().checked_sub(1)
}
