//! Configuration for loading a WordNet from its synset and hypernym files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LexigraphError, Result};
use crate::graph::NodeId;

/// Largest synset id accepted by default.
///
/// Node storage is dense, so the largest id sets the size of the graph.
pub const DEFAULT_MAX_NODE_ID: NodeId = 10_000_000;

/// Where the input files live and how to parse them.
///
/// Serialized as JSON, for example:
///
/// ```json
/// {
///   "synsets_path": "data/synsets.txt",
///   "hypernyms_path": "data/hypernyms.txt",
///   "field_delimiter": ",",
///   "skip_malformed_lines": false,
///   "max_node_id": 10000000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNetConfig {
    /// Path to the synsets file (`id,terms,gloss` per line).
    pub synsets_path: PathBuf,

    /// Path to the hypernyms file (`id,hypernym,...` per line).
    pub hypernyms_path: PathBuf,

    /// Field separator used by both files.
    #[serde(default = "default_field_delimiter")]
    pub field_delimiter: char,

    /// Log and skip malformed lines instead of failing the load.
    #[serde(default)]
    pub skip_malformed_lines: bool,

    /// Largest synset id either file may use. Larger ids are parse errors.
    #[serde(default = "default_max_node_id")]
    pub max_node_id: NodeId,
}

fn default_field_delimiter() -> char {
    ','
}

fn default_max_node_id() -> NodeId {
    DEFAULT_MAX_NODE_ID
}

impl WordNetConfig {
    /// Create a configuration for the given files with default parsing options.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(synsets_path: P, hypernyms_path: Q) -> Self {
        WordNetConfig {
            synsets_path: synsets_path.into(),
            hypernyms_path: hypernyms_path.into(),
            field_delimiter: default_field_delimiter(),
            skip_malformed_lines: false,
            max_node_id: default_max_node_id(),
        }
    }

    /// Set the field delimiter.
    pub fn with_field_delimiter(mut self, delimiter: char) -> Self {
        self.field_delimiter = delimiter;
        self
    }

    /// Enable or disable lenient parsing.
    pub fn with_skip_malformed_lines(mut self, skip: bool) -> Self {
        self.skip_malformed_lines = skip;
        self
    }

    /// Set the largest accepted synset id.
    pub fn with_max_node_id(mut self, max_node_id: NodeId) -> Self {
        self.max_node_id = max_node_id;
        self
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexigraphError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: WordNetConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check that the configuration can be used to load a WordNet.
    pub fn validate(&self) -> Result<()> {
        if self.synsets_path.as_os_str().is_empty() {
            return Err(LexigraphError::config("synsets_path must not be empty"));
        }
        if self.hypernyms_path.as_os_str().is_empty() {
            return Err(LexigraphError::config("hypernyms_path must not be empty"));
        }
        // Terms inside a synset are whitespace separated.
        if self.field_delimiter.is_whitespace() {
            return Err(LexigraphError::config(format!(
                "field_delimiter {:?} must not be whitespace",
                self.field_delimiter
            )));
        }
        // One past the largest id must still be a valid node count.
        if self.max_node_id == NodeId::MAX {
            return Err(LexigraphError::config(format!(
                "max_node_id must be below {}",
                NodeId::MAX
            )));
        }
        Ok(())
    }
}
