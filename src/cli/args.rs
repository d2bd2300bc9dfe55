//! Command line argument parsing for the Lexigraph CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::WordNetConfig;
use crate::error::{LexigraphError, Result};

/// Lexigraph - semantic relatedness over WordNet hypernym graphs
#[derive(Parser, Debug, Clone)]
#[command(name = "lexigraph")]
#[command(about = "Shortest common ancestors and outcast detection over WordNet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexigraphArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Synsets file (id,terms,gloss per line)
    #[arg(long, value_name = "SYNSETS_FILE", env = "LEXIGRAPH_SYNSETS")]
    pub synsets: Option<PathBuf>,

    /// Hypernyms file (id,hypernym,... per line)
    #[arg(long, value_name = "HYPERNYMS_FILE", env = "LEXIGRAPH_HYPERNYMS")]
    pub hypernyms: Option<PathBuf>,

    /// WordNet configuration file (JSON); path flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Field delimiter used by both input files
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Skip malformed input lines instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Largest synset id accepted in the input files
    #[arg(long, value_name = "ID")]
    pub max_node_id: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexigraphArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Resolve the WordNet configuration from the config file and flags.
    pub fn wordnet_config(&self) -> Result<WordNetConfig> {
        let mut config = match &self.config {
            Some(path) => WordNetConfig::load_from_file(path)?,
            None => {
                let (Some(synsets), Some(hypernyms)) = (&self.synsets, &self.hypernyms) else {
                    return Err(LexigraphError::config(
                        "--synsets and --hypernyms are required when no --config is given",
                    ));
                };
                WordNetConfig::new(synsets.clone(), hypernyms.clone())
            }
        };

        if let Some(synsets) = &self.synsets {
            config.synsets_path = synsets.clone();
        }
        if let Some(hypernyms) = &self.hypernyms {
            config.hypernyms_path = hypernyms.clone();
        }
        if let Some(delimiter) = self.delimiter {
            config.field_delimiter = delimiter;
        }
        if self.skip_malformed {
            config.skip_malformed_lines = true;
        }
        if let Some(max_node_id) = self.max_node_id {
            config.max_node_id = max_node_id;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Distance between two nouns
    Distance(PairArgs),

    /// Shortest common ancestor of two nouns
    Sca(PairArgs),

    /// Find the outcast in a group of nouns
    Outcast(OutcastArgs),

    /// List known nouns
    Nouns(NounsArgs),

    /// Check whether a word is a known noun
    #[command(name = "is-noun")]
    IsNoun(IsNounArgs),

    /// Show WordNet statistics
    Stats,
}

/// Arguments for commands that take two nouns
#[derive(Parser, Debug, Clone)]
pub struct PairArgs {
    /// First noun
    #[arg(value_name = "NOUN1")]
    pub noun1: String,

    /// Second noun
    #[arg(value_name = "NOUN2")]
    pub noun2: String,
}

/// Arguments for outcast detection
#[derive(Parser, Debug, Clone)]
pub struct OutcastArgs {
    /// Nouns to compare
    #[arg(value_name = "NOUN")]
    pub nouns: Vec<String>,

    /// Read additional whitespace-separated nouns from a file
    #[arg(long, value_name = "NOUNS_FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for listing nouns
#[derive(Parser, Debug, Clone)]
pub struct NounsArgs {
    /// Maximum number of nouns to list
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Sort nouns alphabetically
    #[arg(short, long)]
    pub sorted: bool,
}

/// Arguments for noun membership checks
#[derive(Parser, Debug, Clone)]
pub struct IsNounArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
