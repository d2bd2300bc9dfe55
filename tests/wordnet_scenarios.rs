//! Integration tests loading a small WordNet from files.

use std::io::Write;

use lexigraph::config::WordNetConfig;
use lexigraph::error::{LexigraphError, Result};
use lexigraph::outcast::Outcast;
use lexigraph::wordnet::WordNet;
use tempfile::NamedTempFile;

const SYNSETS: &str = "\
0,cat true_cat,feline mammal usually having thick soft fur and no ability to roar
1,dog domestic_dog Canis_familiaris,a member of the genus Canis
2,feline felid,any of various lithe-bodied roundheaded fissiped mammals
3,canine canid,any of various fissiped mammals with nonretractile claws
4,carnivore,a terrestrial or aquatic flesh-eating mammal
5,mammal mammalian,any warm-blooded vertebrate having the skin more or less covered with hair
6,animal animate_being beast,a living organism characterized by voluntary movement
7,organism being,a living thing that has (or can develop) the ability to act or function independently
8,bicycle bike wheel cycle,a wheeled vehicle that has two wheels and is moved by foot pedals
9,wheeled_vehicle,a vehicle that moves on wheels and usually has a container for transporting things
10,vehicle,a conveyance that transports people or objects
11,artifact artefact,a man-made object taken as a whole
12,whole unit,an assemblage of parts that is regarded as a single entity
13,physical_entity,an entity that has physical existence
14,entity,that which is perceived or known or inferred to have its own distinct existence
15,horse Equus_caballus,solid-hoofed herbivorous quadruped domesticated since prehistoric times
16,equine equid,hoofed mammals having slender legs and a flat coat with a narrow mane
";

const HYPERNYMS: &str = "\
0,2
1,3
2,4
3,4
4,5
5,6
6,7
7,12
8,9
9,10
10,11
11,12
12,13
13,14
15,16
16,5
";

fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn load() -> Result<WordNet> {
    let synsets = write_fixture(SYNSETS);
    let hypernyms = write_fixture(HYPERNYMS);
    WordNet::from_files(synsets.path(), hypernyms.path())
}

#[test]
fn test_load_from_files() -> Result<()> {
    let wordnet = load()?;

    assert_eq!(wordnet.synset_count(), 17);
    assert!(wordnet.is_noun("Canis_familiaris"));
    assert!(wordnet.is_noun("entity"));
    assert!(!wordnet.is_noun("unicorn"));
    assert_eq!(wordnet.nouns().count(), wordnet.noun_count());
    assert_eq!(wordnet.sca_engine().graph().roots().collect::<Vec<_>>(), vec![14]);

    Ok(())
}

#[test]
fn test_distances() -> Result<()> {
    let wordnet = load()?;

    assert_eq!(wordnet.distance("cat", "dog")?, 4);
    assert_eq!(wordnet.sca("cat", "dog")?, "a terrestrial or aquatic flesh-eating mammal");

    assert_eq!(wordnet.distance("cat", "horse")?, 5);
    assert_eq!(wordnet.sca_synset("cat", "horse")?, 5);

    // cat -> ... -> organism -> whole <- artifact <- ... <- bicycle
    assert_eq!(wordnet.distance("cat", "bicycle")?, 10);
    assert_eq!(wordnet.sca("cat", "bike")?, "an assemblage of parts that is regarded as a single entity");

    assert_eq!(wordnet.distance("beast", "animate_being")?, 0);

    Ok(())
}

#[test]
fn test_distance_is_symmetric() -> Result<()> {
    let wordnet = load()?;
    let nouns: Vec<&str> = wordnet.nouns().collect();

    for a in &nouns {
        assert_eq!(wordnet.distance(a, a)?, 0);
        for b in &nouns {
            assert_eq!(wordnet.distance(a, b)?, wordnet.distance(b, a)?);
        }
    }

    Ok(())
}

#[test]
fn test_outcast_scenarios() -> Result<()> {
    let wordnet = load()?;
    let outcast = Outcast::new(&wordnet);

    assert_eq!(
        outcast.outcast(&["cat", "dog", "bicycle"])?,
        Some("bicycle".to_string())
    );
    assert_eq!(
        outcast.outcast(&["horse", "cat", "dog", "cycle"])?,
        Some("cycle".to_string())
    );
    assert_eq!(outcast.outcast(&["cat", "bicycle"])?, None);

    // Synonyms of one synset are all at distance 0 from each other.
    assert_eq!(outcast.outcast(&["cat", "true_cat", "cat"])?, None);
    assert_eq!(outcast.outcast(&["bike", "cycle", "wheel", "bicycle"])?, None);

    Ok(())
}

#[test]
fn test_unknown_noun_is_reported() -> Result<()> {
    let wordnet = load()?;

    let result = Outcast::new(&wordnet).outcast(&["cat", "dog", "unicorn"]);
    assert!(matches!(result, Err(LexigraphError::UnknownTerm(ref t)) if t == "unicorn"));

    Ok(())
}

#[test]
fn test_malformed_input() {
    let synsets = write_fixture("0,cat,a cat\nnot-a-number,dog,a dog\n");
    let hypernyms = write_fixture("");

    let result = WordNet::from_files(synsets.path(), hypernyms.path());
    match result {
        Err(LexigraphError::Parse(message)) => {
            assert!(message.contains(":2: invalid synset id"), "{message}");
            assert!(message.contains("not-a-number"), "{message}");
        }
        other => panic!("Expected parse error, got {other:?}"),
    }

    let config = WordNetConfig::new(synsets.path(), hypernyms.path()).with_skip_malformed_lines(true);
    let wordnet = WordNet::open(&config).unwrap();
    assert!(wordnet.is_noun("cat"));
    assert!(!wordnet.is_noun("dog"));
}

#[test]
fn test_ids_above_configured_maximum_are_rejected() {
    let synsets = write_fixture("0,cat,a cat\n1,dog,a dog\n2,animal,a creature\n");
    let hypernyms = write_fixture("0,2\n1,18446744073709551615\n");

    match WordNet::from_files(synsets.path(), hypernyms.path()) {
        Err(LexigraphError::Parse(message)) => {
            assert!(message.contains(":2: synset id"), "{message}");
        }
        other => panic!("Expected parse error, got {other:?}"),
    }

    let hypernyms = write_fixture("0,2\n1,2\n");
    let config = WordNetConfig::new(synsets.path(), hypernyms.path()).with_max_node_id(1);
    assert!(matches!(WordNet::open(&config), Err(LexigraphError::Parse(_))));

    let config = config.with_max_node_id(2);
    assert_eq!(WordNet::open(&config).unwrap().distance("cat", "dog").unwrap(), 2);
}

#[test]
fn test_custom_delimiter_from_config_file() -> Result<()> {
    let synsets = write_fixture("0|cat|a feline, small\n1|dog|a canine\n2|animal|a creature\n");
    let hypernyms = write_fixture("0|2\n1|2\n");

    let config_file = NamedTempFile::new()?;
    WordNetConfig::new(synsets.path(), hypernyms.path())
        .with_field_delimiter('|')
        .save_to_file(config_file.path())?;

    let config = WordNetConfig::load_from_file(config_file.path())?;
    let wordnet = WordNet::open(&config)?;
    assert_eq!(wordnet.gloss(0), Some("a feline, small"));
    assert_eq!(wordnet.distance("cat", "dog")?, 2);
    assert_eq!(wordnet.sca("cat", "dog")?, "a creature");

    Ok(())
}
