//! Error types for the Lexigraph library.
//!
//! All fallible operations return [`LexigraphError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use lexigraph::error::{LexigraphError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexigraphError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::graph::NodeId;

/// The main error type for Lexigraph operations.
#[derive(Error, Debug)]
pub enum LexigraphError {
    /// I/O errors (reading synset or hypernym files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A source node outside the graph's node range
    #[error("Invalid node id {id}: graph has {node_count} nodes")]
    InvalidNodeId { id: NodeId, node_count: usize },

    /// A traversal was requested with no source nodes
    #[error("Empty input set: at least one source node is required")]
    EmptyInputSet,

    /// No node is reachable from both query sets
    #[error("No common ancestor")]
    NoCommonAncestor,

    /// A term that is not present in the dictionary
    #[error("Unknown term: {0}")]
    UnknownTerm(String),

    /// Malformed input data
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexigraphError.
pub type Result<T> = std::result::Result<T, LexigraphError>;

impl LexigraphError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Parse(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Config(msg.into())
    }

    /// Create a new unknown-term error.
    pub fn unknown_term<S: Into<String>>(term: S) -> Self {
        LexigraphError::UnknownTerm(term.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Other(format!("Not found: {}", msg.into()))
    }
}
