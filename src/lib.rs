//! # Lexigraph
//!
//! Semantic relatedness over WordNet-style hypernym hierarchies.
//!
//! ## Features
//!
//! - Multi-source BFS over a dense hypernym digraph
//! - Shortest common ancestor over single synsets and synset sets
//! - WordNet loading from synset and hypernym text files
//! - Outcast detection for groups of nouns
//! - A command line front end

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod outcast;
pub mod wordnet;

pub mod prelude {
    pub use crate::config::WordNetConfig;
    pub use crate::error::{LexigraphError, Result};
    pub use crate::graph::{Ancestry, Digraph, NodeId, ShortestCommonAncestor};
    pub use crate::outcast::{Outcast, SemanticDistance};
    pub use crate::wordnet::WordNet;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
