//! Shortest word ladders: transform one word into another of the same
//! length by changing a single letter per step, where every step must be
//! a dictionary word.
//!
//! A [`Solver`] loads the dictionary, builds one substitution graph per
//! word length up front, then answers queries with breadth-first search.

pub mod batch;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod search;
pub mod solver;
pub mod validate;
pub mod word_graph;

pub use config::LadderConfig;
pub use dictionary::Dictionary;
pub use error::{BatchError, DictionaryError, LadderError, ValidationError};
pub use search::shortest_path;
pub use solver::Solver;
pub use word_graph::WordGraph;
