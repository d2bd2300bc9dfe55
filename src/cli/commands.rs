//! Command implementations for the Lexigraph CLI.

use std::fs;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexigraphError, Result};
use crate::outcast::Outcast;
use crate::wordnet::WordNet;

/// Execute a CLI command.
pub fn execute_command(args: LexigraphArgs) -> Result<()> {
    let config = args.wordnet_config()?;

    info!(
        "Loading WordNet from {} and {}",
        config.synsets_path.display(),
        config.hypernyms_path.display()
    );
    let start_time = Instant::now();
    let wordnet = WordNet::open(&config)?;
    let load_duration = start_time.elapsed();
    info!(
        "Loaded {} nouns in {}ms",
        wordnet.noun_count(),
        load_duration.as_millis()
    );

    match &args.command {
        Command::Distance(pair) => output_result(&distance(&wordnet, pair)?, &args),
        Command::Sca(pair) => output_result(&sca(&wordnet, pair)?, &args),
        Command::Outcast(outcast_args) => {
            output_result(&outcast(&wordnet, outcast_args)?, &args)
        }
        Command::Nouns(nouns_args) => output_result(&list_nouns(&wordnet, nouns_args), &args),
        Command::IsNoun(is_noun_args) => {
            output_result(&is_noun(&wordnet, is_noun_args), &args)
        }
        Command::Stats => {
            let load_time_ms = u64::try_from(load_duration.as_millis()).unwrap_or(u64::MAX);
            output_result(&stats(&wordnet, load_time_ms), &args)
        }
    }
}

/// Distance between two nouns.
pub fn distance(wordnet: &WordNet, args: &PairArgs) -> Result<DistanceResult> {
    Ok(DistanceResult {
        noun1: args.noun1.clone(),
        noun2: args.noun2.clone(),
        distance: wordnet.distance(&args.noun1, &args.noun2)?,
    })
}

/// Shortest common ancestor of two nouns.
pub fn sca(wordnet: &WordNet, args: &PairArgs) -> Result<ScaResult> {
    let ancestry = wordnet
        .ancestry(&args.noun1, &args.noun2)?
        .ok_or(LexigraphError::NoCommonAncestor)?;

    Ok(ScaResult {
        noun1: args.noun1.clone(),
        noun2: args.noun2.clone(),
        ancestor_id: ancestry.ancestor,
        ancestor_terms: wordnet
            .synset_terms(ancestry.ancestor)
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
        gloss: wordnet
            .gloss(ancestry.ancestor)
            .unwrap_or_default()
            .to_string(),
        distance: ancestry.length,
    })
}

/// Outcast among the nouns given on the command line and in `--file`.
pub fn outcast(wordnet: &WordNet, args: &OutcastArgs) -> Result<OutcastResult> {
    let mut nouns = args.nouns.clone();
    if let Some(path) = &args.file {
        let content = fs::read_to_string(path)?;
        nouns.extend(content.split_whitespace().map(str::to_string));
    }

    if nouns.is_empty() {
        return Err(LexigraphError::invalid_argument(
            "no nouns given; pass nouns or --file",
        ));
    }

    let report = Outcast::new(wordnet).report(&nouns)?;
    Ok(OutcastResult {
        nouns: report.totals,
        outcast: report.outcast,
    })
}

/// Known nouns, optionally sorted and truncated.
pub fn list_nouns(wordnet: &WordNet, args: &NounsArgs) -> NounListResult {
    let limit = args.limit.unwrap_or(usize::MAX);
    let nouns: Vec<String> = if args.sorted {
        let mut all: Vec<&str> = wordnet.nouns().collect();
        all.sort_unstable();
        all.into_iter().take(limit).map(str::to_string).collect()
    } else {
        wordnet.nouns().take(limit).map(str::to_string).collect()
    };

    NounListResult {
        nouns,
        total_nouns: wordnet.noun_count(),
    }
}

/// Membership check for a single word.
pub fn is_noun(wordnet: &WordNet, args: &IsNounArgs) -> IsNounResult {
    let synsets: Vec<_> = wordnet
        .synsets(&args.word)
        .map(|ids| ids.iter().copied().collect())
        .unwrap_or_default();

    IsNounResult {
        word: args.word.clone(),
        is_noun: wordnet.is_noun(&args.word),
        synsets,
    }
}

/// Summary statistics of a loaded WordNet.
pub fn stats(wordnet: &WordNet, load_duration_ms: u64) -> WordNetStats {
    let graph = wordnet.sca_engine().graph();
    WordNetStats {
        nouns: wordnet.noun_count(),
        synsets: wordnet.synset_count(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        roots: graph.roots().count(),
        load_duration_ms,
    }
}
