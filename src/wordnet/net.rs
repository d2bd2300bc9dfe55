//! Term-space query surface over a hypernym graph.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use log::{debug, warn};

use crate::config::WordNetConfig;
use crate::error::{LexigraphError, Result};
use crate::graph::{Ancestry, Digraph, NodeId, ShortestCommonAncestor};
use crate::wordnet::loader::{self, HypernymRecord, ParseOptions, SynsetRecord};

/// A dictionary of nouns organised by synset, with SCA queries in term space.
///
/// A noun may belong to several synsets (one per sense); distance and
/// ancestor queries consider all of them at once.
#[derive(Debug, Clone)]
pub struct WordNet {
    noun_synsets: AHashMap<String, BTreeSet<NodeId>>,
    synset_glosses: AHashMap<NodeId, String>,
    synset_terms: AHashMap<NodeId, Vec<String>>,
    sca: ShortestCommonAncestor,
}

impl WordNet {
    /// Load a WordNet as described by `config`.
    pub fn open(config: &WordNetConfig) -> Result<Self> {
        config.validate()?;

        let synsets = open_file(&config.synsets_path)?;
        let hypernyms = open_file(&config.hypernyms_path)?;

        Self::build(
            loader::read_synsets(
                synsets,
                &config.synsets_path.display().to_string(),
                &ParseOptions::from(config),
            )?,
            loader::read_hypernyms(
                hypernyms,
                &config.hypernyms_path.display().to_string(),
                &ParseOptions::from(config),
            )?,
        )
    }

    /// Load a WordNet from the two files using default parsing options.
    pub fn from_files<P: Into<PathBuf>, Q: Into<PathBuf>>(
        synsets_path: P,
        hypernyms_path: Q,
    ) -> Result<Self> {
        Self::open(&WordNetConfig::new(synsets_path, hypernyms_path))
    }

    /// Load a WordNet from already opened readers.
    pub fn from_readers<S: BufRead, H: BufRead>(synsets: S, hypernyms: H) -> Result<Self> {
        Self::from_readers_with(synsets, hypernyms, &ParseOptions::default())
    }

    /// Load a WordNet from already opened readers with explicit options.
    pub fn from_readers_with<S: BufRead, H: BufRead>(
        synsets: S,
        hypernyms: H,
        options: &ParseOptions,
    ) -> Result<Self> {
        Self::build(
            loader::read_synsets(synsets, "synsets", options)?,
            loader::read_hypernyms(hypernyms, "hypernyms", options)?,
        )
    }

    fn build(synsets: Vec<SynsetRecord>, hypernyms: Vec<HypernymRecord>) -> Result<Self> {
        let mut graph = Digraph::new();
        for record in hypernyms {
            graph.try_add_node(record.id)?;
            for hypernym in record.hypernyms {
                graph.try_add_edge(record.id, hypernym)?;
            }
        }

        let mut noun_synsets: AHashMap<String, BTreeSet<NodeId>> = AHashMap::new();
        let mut synset_glosses = AHashMap::with_capacity(synsets.len());
        let mut synset_terms = AHashMap::with_capacity(synsets.len());

        for record in synsets {
            graph.try_add_node(record.id)?;
            for term in &record.terms {
                noun_synsets
                    .entry(term.clone())
                    .or_default()
                    .insert(record.id);
            }
            if synset_glosses.insert(record.id, record.gloss).is_some() {
                warn!("Synset {} defined more than once; keeping the last gloss", record.id);
            }
            synset_terms.insert(record.id, record.terms);
        }

        debug!(
            "Loaded {} synsets, {} nouns, {} nodes, {} hypernym edges",
            synset_glosses.len(),
            noun_synsets.len(),
            graph.node_count(),
            graph.edge_count()
        );

        Ok(WordNet {
            noun_synsets,
            synset_glosses,
            synset_terms,
            sca: ShortestCommonAncestor::new(graph),
        })
    }

    /// All known nouns, in no particular order.
    ///
    /// The iterator is lazy and can be cloned to restart the enumeration.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.noun_synsets.keys().map(String::as_str)
    }

    /// Check whether `word` is a known noun.
    pub fn is_noun(&self, word: &str) -> bool {
        self.noun_synsets.contains_key(word)
    }

    /// Synsets containing `noun`.
    pub fn synsets(&self, noun: &str) -> Result<&BTreeSet<NodeId>> {
        self.noun_synsets
            .get(noun)
            .ok_or_else(|| LexigraphError::unknown_term(noun))
    }

    /// Length of the shortest ancestral path between any senses of the two nouns.
    pub fn distance(&self, noun1: &str, noun2: &str) -> Result<usize> {
        self.sca
            .length_subset(self.synsets(noun1)?, self.synsets(noun2)?)
    }

    /// Synset id of the shortest common ancestor of the two nouns.
    pub fn sca_synset(&self, noun1: &str, noun2: &str) -> Result<NodeId> {
        self.sca
            .ancestor_subset(self.synsets(noun1)?, self.synsets(noun2)?)
    }

    /// Gloss of the shortest common ancestor of the two nouns.
    pub fn sca(&self, noun1: &str, noun2: &str) -> Result<&str> {
        let id = self.sca_synset(noun1, noun2)?;
        self.gloss(id)
            .ok_or_else(|| LexigraphError::not_found(format!("gloss for synset {id}")))
    }

    /// Ancestor and distance from a single query, or `None` when the nouns
    /// share no ancestor.
    pub fn ancestry(&self, noun1: &str, noun2: &str) -> Result<Option<Ancestry>> {
        self.sca
            .ancestry_subset(self.synsets(noun1)?, self.synsets(noun2)?)
    }

    /// Definition of synset `id`.
    pub fn gloss(&self, id: NodeId) -> Option<&str> {
        self.synset_glosses.get(&id).map(String::as_str)
    }

    /// Terms that make up synset `id`.
    pub fn synset_terms(&self, id: NodeId) -> Option<&[String]> {
        self.synset_terms.get(&id).map(Vec::as_slice)
    }

    pub fn noun_count(&self) -> usize {
        self.noun_synsets.len()
    }

    pub fn synset_count(&self) -> usize {
        self.synset_glosses.len()
    }

    /// The underlying SCA engine, for queries in synset-id space.
    pub fn sca_engine(&self) -> &ShortestCommonAncestor {
        &self.sca
    }
}

fn open_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        LexigraphError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to open '{}': {}", path.display(), e),
        ))
    })?;
    Ok(BufReader::new(file))
}
