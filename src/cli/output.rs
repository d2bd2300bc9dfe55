//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexigraphArgs, OutputFormat};
use crate::error::Result;
use crate::graph::NodeId;
use crate::outcast::NounDistance;

/// Result structure for distance queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub noun1: String,
    pub noun2: String,
    pub distance: usize,
}

/// Result structure for shortest-common-ancestor queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScaResult {
    pub noun1: String,
    pub noun2: String,
    pub ancestor_id: NodeId,
    pub ancestor_terms: Vec<String>,
    pub gloss: String,
    pub distance: usize,
}

/// Result structure for outcast detection.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutcastResult {
    pub nouns: Vec<NounDistance>,
    pub outcast: Option<String>,
}

/// Result structure for noun listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct NounListResult {
    pub nouns: Vec<String>,
    pub total_nouns: usize,
}

/// Result structure for noun membership checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct IsNounResult {
    pub word: String,
    pub is_noun: bool,
    pub synsets: Vec<NodeId>,
}

/// WordNet statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordNetStats {
    pub nouns: usize,
    pub synsets: usize,
    pub nodes: usize,
    pub edges: usize,
    pub roots: usize,
    pub load_duration_ms: u64,
}

/// Command outputs that know how to render themselves for humans.
pub trait HumanOutput: Serialize {
    fn render_human(&self) -> Vec<String>;
}

impl HumanOutput for DistanceResult {
    fn render_human(&self) -> Vec<String> {
        vec![format!(
            "distance({}, {}) = {}",
            self.noun1, self.noun2, self.distance
        )]
    }
}

impl HumanOutput for ScaResult {
    fn render_human(&self) -> Vec<String> {
        vec![
            format!("Shortest common ancestor of {} and {}:", self.noun1, self.noun2),
            format!("  synset:   {}", self.ancestor_id),
            format!("  terms:    {}", self.ancestor_terms.join(", ")),
            format!("  gloss:    {}", self.gloss),
            format!("  distance: {}", self.distance),
        ]
    }
}

impl HumanOutput for OutcastResult {
    fn render_human(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .nouns
            .iter()
            .map(|entry| format!("  {:<24} {}", entry.noun, entry.total_distance))
            .collect();
        match &self.outcast {
            Some(noun) => lines.push(format!("Outcast: {noun}")),
            None => lines.push("No outcast (need at least three nouns)".to_string()),
        }
        lines
    }
}

impl HumanOutput for NounListResult {
    fn render_human(&self) -> Vec<String> {
        let mut lines = self.nouns.clone();
        if self.nouns.len() < self.total_nouns {
            lines.push(format!(
                "... {} of {} nouns shown",
                self.nouns.len(),
                self.total_nouns
            ));
        }
        lines
    }
}

impl HumanOutput for IsNounResult {
    fn render_human(&self) -> Vec<String> {
        if self.is_noun {
            let ids: Vec<String> = self.synsets.iter().map(ToString::to_string).collect();
            vec![format!("{} is a noun (synsets: {})", self.word, ids.join(", "))]
        } else {
            vec![format!("{} is not a noun", self.word)]
        }
    }
}

impl HumanOutput for WordNetStats {
    fn render_human(&self) -> Vec<String> {
        vec![
            "WordNet Statistics:".to_string(),
            "═══════════════════".to_string(),
            format!("Nouns:          {}", self.nouns),
            format!("Synsets:        {}", self.synsets),
            format!("Graph nodes:    {}", self.nodes),
            format!("Hypernym edges: {}", self.edges),
            format!("Roots:          {}", self.roots),
            format!("Load time:      {}ms", self.load_duration_ms),
        ]
    }
}

/// Output a result in the specified format.
pub fn output_result<T: HumanOutput>(result: &T, args: &LexigraphArgs) -> Result<()> {
    for line in format_result(result, args)? {
        println!("{line}");
    }
    Ok(())
}

/// Render a result to output lines without printing.
pub fn format_result<T: HumanOutput>(result: &T, args: &LexigraphArgs) -> Result<Vec<String>> {
    match args.output_format {
        OutputFormat::Human => Ok(result.render_human()),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(vec![json])
        }
    }
}
