//! Line parsers for the synset and hypernym input files.
//!
//! Synset lines look like `36,AND_circuit AND_gate,a circuit in a computer`:
//! an id, whitespace-separated terms, and a gloss that runs to the end of
//! the line (so it may itself contain the delimiter). Hypernym lines look
//! like `34,47569,48084`: a synset id followed by the ids of its hypernyms.

use std::io::BufRead;
use std::str::FromStr;

use log::warn;

use crate::config::{DEFAULT_MAX_NODE_ID, WordNetConfig};
use crate::error::{LexigraphError, Result};
use crate::graph::NodeId;

/// One parsed line of the synsets file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynsetRecord {
    pub id: NodeId,
    pub terms: Vec<String>,
    pub gloss: String,
}

/// One parsed line of the hypernyms file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypernymRecord {
    pub id: NodeId,
    pub hypernyms: Vec<NodeId>,
}

/// Options shared by both parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub field_delimiter: char,
    pub skip_malformed_lines: bool,
    /// Largest id accepted in either file.
    pub max_node_id: NodeId,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            field_delimiter: ',',
            skip_malformed_lines: false,
            max_node_id: DEFAULT_MAX_NODE_ID,
        }
    }
}

impl From<&WordNetConfig> for ParseOptions {
    fn from(config: &WordNetConfig) -> Self {
        ParseOptions {
            field_delimiter: config.field_delimiter,
            skip_malformed_lines: config.skip_malformed_lines,
            max_node_id: config.max_node_id,
        }
    }
}

/// Parse a single synsets line.
pub fn parse_synset_line(line: &str, delimiter: char) -> Result<SynsetRecord> {
    let mut fields = line.splitn(3, delimiter);

    let id = parse_id(fields.next().unwrap_or_default())?;
    let terms = fields
        .next()
        .ok_or_else(|| LexigraphError::parse("missing terms field"))?
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let gloss = fields.next().unwrap_or_default().to_string();

    Ok(SynsetRecord { id, terms, gloss })
}

/// Parse a single hypernyms line.
pub fn parse_hypernym_line(line: &str, delimiter: char) -> Result<HypernymRecord> {
    let mut fields = line.split(delimiter);

    let id = parse_id(fields.next().unwrap_or_default())?;
    let hypernyms = fields
        .filter(|field| !field.trim().is_empty())
        .map(parse_id)
        .collect::<Result<Vec<_>>>()?;

    Ok(HypernymRecord { id, hypernyms })
}

/// Read every record of a synsets file.
///
/// `source` names the input in error messages.
pub fn read_synsets<R: BufRead>(
    reader: R,
    source: &str,
    options: &ParseOptions,
) -> Result<Vec<SynsetRecord>> {
    read_records(reader, source, options, |line, options| {
        let record = parse_synset_line(line, options.field_delimiter)?;
        check_id(record.id, options.max_node_id)?;
        Ok(record)
    })
}

/// Read every record of a hypernyms file.
pub fn read_hypernyms<R: BufRead>(
    reader: R,
    source: &str,
    options: &ParseOptions,
) -> Result<Vec<HypernymRecord>> {
    read_records(reader, source, options, |line, options| {
        let record = parse_hypernym_line(line, options.field_delimiter)?;
        check_id(record.id, options.max_node_id)?;
        for &hypernym in &record.hypernyms {
            check_id(hypernym, options.max_node_id)?;
        }
        Ok(record)
    })
}

fn read_records<R, T, F>(reader: R, source: &str, options: &ParseOptions, parse: F) -> Result<Vec<T>>
where
    R: BufRead,
    F: Fn(&str, &ParseOptions) -> Result<T>,
{
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        match parse(line, options) {
            Ok(record) => records.push(record),
            Err(e) if options.skip_malformed_lines => {
                warn!("Skipping {}:{}: {}", source, line_num + 1, e);
            }
            Err(LexigraphError::Parse(message)) => {
                return Err(LexigraphError::parse(format!(
                    "{}:{}: {}",
                    source,
                    line_num + 1,
                    message
                )));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(records)
}

fn parse_id(field: &str) -> Result<NodeId> {
    let field = field.trim();
    NodeId::from_str(field)
        .map_err(|e| LexigraphError::parse(format!("invalid synset id {field:?}: {e}")))
}

fn check_id(id: NodeId, max_node_id: NodeId) -> Result<()> {
    if id > max_node_id {
        return Err(LexigraphError::parse(format!(
            "synset id {id} exceeds the maximum of {max_node_id}"
        )));
    }
    Ok(())
}
