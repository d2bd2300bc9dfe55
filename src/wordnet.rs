//! WordNet loading and term-level relatedness queries.
//!
//! A WordNet is read from two delimited text files: a synsets file mapping
//! synset ids to their terms and gloss, and a hypernyms file listing the
//! more general synsets of each synset. The hypernym edges form the graph
//! that [`crate::graph::ShortestCommonAncestor`] searches.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//!
//! use lexigraph::wordnet::WordNet;
//!
//! let synsets = "0,cat,a feline\n1,dog,a canine\n2,animal,a living creature\n";
//! let hypernyms = "0,2\n1,2\n";
//!
//! let wordnet = WordNet::from_readers(Cursor::new(synsets), Cursor::new(hypernyms)).unwrap();
//! assert_eq!(wordnet.distance("cat", "dog").unwrap(), 2);
//! assert_eq!(wordnet.sca("cat", "dog").unwrap(), "a living creature");
//! ```

pub mod loader;
pub mod net;

pub use net::WordNet;
