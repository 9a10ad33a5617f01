//! End-to-end scenarios for the state-set index.
//!
//! The first group reproduces the worked example from the state-set index
//! paper: five surnames, a four-symbol alphabet and index length 6.

use super::common::{init_tracing, paper_index, strings, utf8_index, PAPER_WORDS};
use state_set_index::{Config, DataStore, QueryMode, StateSetIndex, Utf8Alphabet};
use std::collections::BTreeMap;

const LEV: QueryMode = QueryMode::Levenshtein;
const DAMERAU: QueryMode = QueryMode::Damerau;

// ============================================================================
// PAPER SCENARIO
// ============================================================================

#[test]
fn test_paper_assigned_states() {
    init_tracing();
    let mut index = paper_index().unwrap();
    let assigned = index.index(PAPER_WORDS).unwrap();

    assert_eq!(assigned["Mueller"], 1811);
    assert_eq!(assigned["Müller"], 1869);
    assert_eq!(assigned["Muentner"], 1795);
    assert_eq!(assigned["Muster"], 1677);
    assert_eq!(assigned["Mustermann"], 1677);
}

#[test]
fn test_paper_matching_states() {
    init_tracing();
    let mut index = paper_index().unwrap();

    assert_eq!(
        index.find_matching_states("Mustre", 2, LEV).unwrap(),
        vec![104, 419, 467, 1677, 1811]
    );
    assert_eq!(
        index.find_matching_states("Mustre", 2, DAMERAU).unwrap(),
        vec![104, 419, 467, 1677, 1811, 1869]
    );
    assert_eq!(
        index.find_matching_states("Mustremann", 2, LEV).unwrap(),
        vec![1677, 1811]
    );
    assert_eq!(index.find_matching_states("Mustremann", 1, LEV).unwrap(), vec![1677]);
    assert_eq!(index.find_matching_states("Mustre", 1, DAMERAU).unwrap(), vec![419, 1677]);
}

#[test]
fn test_paper_accepted_strings() {
    let mut index = paper_index().unwrap();
    let accepted = index.find_accepted_strings("Mustre", 2, LEV).unwrap();

    assert_eq!(
        accepted,
        BTreeMap::from([
            (1677, strings(&["Muster", "Mustermann"])),
            (1811, strings(&["Mueller"])),
        ])
    );
}

#[test]
fn test_paper_find() {
    init_tracing();
    let mut index = paper_index().unwrap();

    assert_eq!(index.find("Mustre", 2, LEV).unwrap(), strings(&["Muster"]));
    assert_eq!(index.find("Mustre", 2, DAMERAU).unwrap(), strings(&["Muster"]));
    assert_eq!(index.find("Mustre", 1, DAMERAU).unwrap(), strings(&["Muster"]));
    assert_eq!(index.find("Mustremann", 2, LEV).unwrap(), strings(&["Mustermann"]));
    assert_eq!(index.find("Mueler", 1, LEV).unwrap(), strings(&["Mueller"]));
    assert_eq!(index.find("Müller", 1, LEV).unwrap(), strings(&["Müller"]));
}

#[test]
fn test_paper_transposed_long_query() {
    let mut index = paper_index().unwrap();

    // "re" for "er" costs two edits unless transpositions are on
    assert!(index.find("Mustremann", 1, LEV).unwrap().is_empty());
    assert_eq!(index.find("Mustremann", 1, DAMERAU).unwrap(), strings(&["Mustermann"]));
}

// ============================================================================
// UTF-8 ALPHABET
// ============================================================================

#[test]
fn test_utf8_alphabet_scenario() {
    let config = Config::new(6, 4).unwrap();
    let mut index = utf8_index(config).unwrap();
    let assigned = index.index(PAPER_WORDS).unwrap();

    assert_eq!(assigned["Mueller"], 2710);
    assert_eq!(assigned["Müller"], 2395);
    assert_eq!(assigned["Muentner"], 2743);
    assert_eq!(assigned["Muster"], 2843);
    assert_eq!(assigned["Mustermann"], 2843);

    assert_eq!(
        index.find_matching_states("Mustre", 2, LEV).unwrap(),
        vec![177, 710, 2710, 2743, 2843]
    );
    assert_eq!(index.find_matching_states("Mustremann", 1, LEV).unwrap(), vec![2843]);
    assert_eq!(index.find_matching_states("Mustremann", 1, DAMERAU).unwrap(), vec![2843]);
    assert_eq!(index.find("Mustremann", 1, DAMERAU).unwrap(), strings(&["Mustermann"]));
}

#[test]
fn test_transposition_scenario() {
    let mut index = StateSetIndex::in_memory(Config::new(6, 32).unwrap(), Utf8Alphabet);
    index.index(["abcdefg"]).unwrap();

    assert_eq!(index.find("abdcefg", 1, DAMERAU).unwrap(), strings(&["abcdefg"]));
    assert!(index.find("abdcefg", 1, LEV).unwrap().is_empty());
    assert_eq!(index.find("abdcefg", 2, LEV).unwrap(), strings(&["abcdefg"]));
}

// ============================================================================
// BOUNDARIES
// ============================================================================

#[test]
fn test_zero_distance_is_exact_match() {
    let mut index = paper_index().unwrap();

    assert_eq!(index.find("Muster", 0, LEV).unwrap(), strings(&["Muster"]));
    assert_eq!(index.find("Mustermann", 0, LEV).unwrap(), strings(&["Mustermann"]));
    assert!(index.find("Mustre", 0, LEV).unwrap().is_empty());
    assert!(index.find_matching_states("Mustre", 0, LEV).unwrap().is_empty());
}

#[test]
fn test_empty_index_finds_nothing() {
    let mut index = StateSetIndex::in_memory(Config::new(4, 8).unwrap(), Utf8Alphabet);
    assert!(index.find("anything", 3, LEV).unwrap().is_empty());
    assert!(index.find_accepted_strings("", 0, LEV).unwrap().is_empty());
}

#[test]
fn test_duplicate_inputs_are_deduplicated() {
    let mut index = paper_index().unwrap();
    index.index(["Muster", "Muster"]).unwrap();

    assert_eq!(index.data_store().len(), PAPER_WORDS.len());
    assert_eq!(index.find("Muster", 1, LEV).unwrap(), strings(&["Muster"]));
}

// ============================================================================
// REMOVAL
// ============================================================================

#[test]
fn test_remove_restores_trie() {
    let mut index = paper_index().unwrap();
    let before = index.state_set().clone();

    // 'Z' is not in the paper's table and opens a fresh branch
    index.index(["Zebra"]).unwrap();
    assert!(index.state_set().len() > before.len());

    index.remove_from_index(["Zebra"]).unwrap();
    assert_eq!(index.state_set(), &before);
    assert!(index.find("Zebra", 1, LEV).unwrap().is_empty());
}

#[test]
fn test_remove_keeps_words_sharing_a_state() {
    let mut index = paper_index().unwrap();
    index.remove_from_index(["Mustermann"]).unwrap();

    assert_eq!(index.find("Muster", 0, LEV).unwrap(), strings(&["Muster"]));
    assert!(index.find("Mustermann", 0, LEV).unwrap().is_empty());
    assert_eq!(index.data_store().get_for_states(&[1677]).len(), 1);

    index.remove_from_index(["Muster"]).unwrap();
    assert!(!index.state_set().contains(1677));
    assert_eq!(index.find("Mueller", 0, LEV).unwrap(), strings(&["Mueller"]));
}

#[test]
fn test_reset_keeps_the_index() {
    let mut index = paper_index().unwrap();
    let before = index.find("Mustre", 2, LEV).unwrap();
    index.reset();
    assert_eq!(index.find("Mustre", 2, LEV).unwrap(), before);
    assert_eq!(index.data_store().len(), PAPER_WORDS.len());
}
