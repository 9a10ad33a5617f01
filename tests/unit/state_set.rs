//! Tests for the trie and frontier sets through the public API.

use super::common::paper_index;
use state_set_index::{CostAnnotatedStateSet, Error, StateSet, ROOT};

#[test]
fn test_paper_trie_shape() {
    let index = paper_index().unwrap();
    let trie = index.state_set();

    // 'u' and 'ü' share a symbol, so "Mu" and "Mü" are both state 6
    assert_eq!(trie.children_of(ROOT).collect::<Vec<_>>(), vec![1]);
    assert_eq!(trie.children_of(1).collect::<Vec<_>>(), vec![6]);
    assert_eq!(trie.children_of(6).collect::<Vec<_>>(), vec![25, 27, 28]);
    assert_eq!(trie.char_for_state(1677).unwrap(), 1);
    assert_eq!(trie.parent_of(1677), Some(419));
    assert!(matches!(trie.char_for_state(5), Err(Error::UnknownState(5))));
}

#[test]
fn test_reachable_states_from_paper_root() {
    let index = paper_index().unwrap();
    let reachable = index.state_set().reachable_states(ROOT, 2, 0);
    assert_eq!(reachable.states(), vec![0, 1, 6]);
    assert_eq!(reachable.cost(6), Some(2));

    let deeper = index.state_set().reachable_states(104, 2, 1);
    assert_eq!(deeper.states(), vec![104, 419]);
}

#[test]
fn test_frontier_merge() {
    let a: CostAnnotatedStateSet = [(1, 3), (2, 1)].into_iter().collect();
    let b: CostAnnotatedStateSet = [(1, 0), (7, 2)].into_iter().collect();
    let merged = a.merge_with(&b);

    assert_eq!(merged.states(), vec![1, 2, 7]);
    assert_eq!(merged.cost(1), Some(0));
    assert_eq!(merged, b.merge_with(&a));
}

#[test]
fn test_standalone_trie_round_trip() {
    let mut trie = StateSet::new();
    trie.add(3, ROOT, 3);
    trie.add(3 * 4 + 2, 3, 2);
    assert_eq!(trie.states(), vec![3, 14]);
    assert_eq!(trie.remove(3), 2);
    assert!(trie.is_empty());
    assert!(trie.contains(ROOT));
}
