//! Outcast detection: the noun least related to the rest of a group.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::wordnet::WordNet;

/// Anything that can measure the semantic distance between two nouns.
pub trait SemanticDistance {
    fn distance(&self, noun1: &str, noun2: &str) -> Result<usize>;
}

impl SemanticDistance for WordNet {
    fn distance(&self, noun1: &str, noun2: &str) -> Result<usize> {
        WordNet::distance(self, noun1, noun2)
    }
}

/// Finds the outcast among a group of nouns.
///
/// Holds a borrowed distance capability rather than its own copy of the
/// dictionary.
pub struct Outcast<'a, D: SemanticDistance + ?Sized> {
    distances: &'a D,
}

impl<'a, D: SemanticDistance + ?Sized> Outcast<'a, D> {
    pub fn new(distances: &'a D) -> Self {
        Outcast { distances }
    }

    /// The noun with the largest total distance to all the others.
    ///
    /// Returns `None` for groups of two or fewer nouns, and for groups whose
    /// totals are all zero (repeats or synonyms of one synset). When several
    /// nouns share the largest total, the first of them wins.
    pub fn outcast<S: AsRef<str>>(&self, nouns: &[S]) -> Result<Option<String>> {
        Ok(self.report(nouns)?.outcast)
    }

    /// Per-noun totals together with the chosen outcast.
    ///
    /// Groups of two or fewer nouns produce an empty report without any
    /// distance queries.
    pub fn report<S: AsRef<str>>(&self, nouns: &[S]) -> Result<OutcastReport> {
        if nouns.len() <= 2 {
            return Ok(OutcastReport::default());
        }

        let totals = self.total_distances(nouns)?;

        let mut max_total = 0;
        let mut outcast = None;
        for entry in &totals {
            if entry.total_distance > max_total {
                max_total = entry.total_distance;
                outcast = Some(entry.noun.clone());
            }
        }

        debug!("outcast of {} nouns = {:?}", totals.len(), outcast);
        Ok(OutcastReport { totals, outcast })
    }

    /// Each noun with the sum of its distances to every other noun, in
    /// input order.
    pub fn total_distances<S: AsRef<str>>(&self, nouns: &[S]) -> Result<Vec<NounDistance>> {
        let mut totals = Vec::with_capacity(nouns.len());
        for (i, noun) in nouns.iter().enumerate() {
            let mut total_distance = 0;
            for (j, other) in nouns.iter().enumerate() {
                if i != j {
                    total_distance += self.distances.distance(noun.as_ref(), other.as_ref())?;
                }
            }
            totals.push(NounDistance {
                noun: noun.as_ref().to_string(),
                total_distance,
            });
        }
        Ok(totals)
    }
}

/// A noun and its summed distance to the rest of its group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounDistance {
    pub noun: String,
    pub total_distance: usize,
}

/// The outcome of an outcast query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcastReport {
    pub totals: Vec<NounDistance>,
    pub outcast: Option<String>,
}
