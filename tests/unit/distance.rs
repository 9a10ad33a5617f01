//! Tests for the bounded Damerau-Levenshtein distance.

use state_set_index::fuzzy::bounded_distance_utf8;
use state_set_index::{bounded_distance, damerau_levenshtein, levenshtein, EditCosts};

const UNBOUNDED: usize = usize::MAX;

/// (expected Damerau distance, a, b)
fn damerau_table() -> Vec<(usize, String, String)> {
    let cases: &[(usize, &str, &str)] = &[
        (0, "abc", "abc"),
        (1, "abcd", "abcx"),
        (2, "abcd", "abxx"),
        (3, "abcd", "axxx"),
        (4, "abcd", "xxxx"),
        (1, "abcd", "abc"),
        (2, "abcd", "ab"),
        (3, "abcd", "a"),
        (4, "abcd", ""),
        (1, "abcd", "abcdx"),
        (2, "abcd", "xxabcd"),
        (6, "abcd", "xxxxxxabcd"),
        (6, "abcd", "xxxxxabcdx"),
        (6, "abcd", "xxxabcdxxx"),
        (6, "abcd", "xabcdxxxxx"),
        (1, "abcdefg", "bacdefg"),
        (1, "abcdefg", "abdcefg"),
        (1, "abcdefg", "abcdegf"),
        (1, "ab", "ba"),
        (2, "ab", "xba"),
        (2, "ab", "bax"),
        (2, "abab", "baba"),
        (2, "abba", "baab"),
        (3, "abba", "xbaab"),
        (3, "abab", "baxba"),
        (4, "abba", "bxaab"),
        (4, "abba", "baaxb"),
        (1, "", "a"),
        (1, "héllo", "hello"),
        (2, "garçonnière", "garconniere"),
        (2, "Ñörbärm", "Üörbarm"),
        (1, "пожар", "пажар"),
        (2, "слово", "слива"),
        (4, "стул", "вода"),
        (1, "aaäaa", "aaöaa"),
    ];
    let mut table: Vec<(usize, String, String)> = cases
        .iter()
        .map(|&(d, a, b)| (d, a.to_string(), b.to_string()))
        .collect();
    table.push((1, "x".repeat(1024), format!("{}_", "x".repeat(1023))));
    table.push((3, "x".repeat(1024), format!("_{}__", "x".repeat(1021))));
    table
}

#[test]
fn test_damerau_table_in_both_directions() {
    for (expected, a, b) in damerau_table() {
        assert_eq!(damerau_levenshtein(&a, &b), expected, "{a:?} -> {b:?}");
        assert_eq!(damerau_levenshtein(&b, &a), expected, "{b:?} -> {a:?}");
    }
}

#[test]
fn test_damerau_table_is_clamped() {
    for (expected, a, b) in damerau_table() {
        let mut budgets = vec![expected, expected + 1];
        if expected > 0 {
            budgets.push(expected - 1);
        }
        for max in budgets {
            assert_eq!(
                bounded_distance(&a, &b, max, EditCosts::DAMERAU),
                expected.min(max),
                "{a:?} -> {b:?} within {max}"
            );
        }
    }
}

#[test]
fn test_doubled_costs_double_the_distance() {
    let doubled = EditCosts::DAMERAU.scaled(2);
    for (expected, a, b) in damerau_table() {
        assert_eq!(bounded_distance(&a, &b, expected * 2 + 2, doubled), expected * 2, "{a:?} -> {b:?}");
    }
}

#[test]
fn test_bounded_table() {
    let cases = [
        (1, "abc", "abcd", 1),
        (2, "abc", "abcde", 2),
        (3, "aaaaaaaaaa", "bbbbbbbbbb", 3),
        (0, "aaaaaaaaaa", "bbbbbbbbbb", 0),
        (1, "xxxxxxxxxx", "xxxxxxxxx_", 2),
        (3, "xxxxxxxxxx", "xxxxxxx___", 4),
    ];
    for (expected, a, b, max) in cases {
        assert_eq!(bounded_distance(a, b, max, EditCosts::DAMERAU), expected, "{a:?} -> {b:?}");
        assert_eq!(bounded_distance(b, a, max, EditCosts::DAMERAU), expected, "{b:?} -> {a:?}");
    }
}

#[test]
fn test_weighted_costs() {
    // (expected, a, b, insertion, replacement, deletion, transposition)
    let cases = [
        (7, "abc", "bcd", 3, 8, 4, 1),
        (3, "abc", "bcd", 2, 1, 3, 1),
        (4, "abcd", "acbd", 1, 2, 3, 4),
        (4, "abcd", "acbd", 2, 2, 3, 5),
        (4, "abcd", "acbd", 1, 3, 3, 5),
        (4, "abcd", "acbd", 2, 3, 3, 4),
        (5, "abcd", "acbd", 2, 3, 3, 5),
        (5, "abcd", "acbd", 2, 3, 3, 6),
        (6, "abcd", "acbd", 2, 3, 4, 6),
        (1, "abcd", "abcde", 1, 2, 2, 2),
        (1, "abcd", "abcde", 1, 99, 99, 99),
        (1, "abcd", "aXcd", 2, 1, 2, 2),
        (1, "abcd", "abc", 2, 2, 1, 2),
        (1, "abcd", "acbd", 99, 99, 99, 1),
        (2, "abcd", "abcde", 2, 3, 3, 3),
        (2, "abcd", "acbd", 3, 3, 3, 2),
        (13, "aaaa", "bbbbb", 1, 99, 2, 99),
        (14, "aaaaa", "bbbb", 1, 99, 2, 99),
        (14, "aaaa", "bbbbb", 2, 99, 1, 99),
        (13, "aaaaa", "bbbb", 2, 99, 1, 99),
    ];
    for (expected, a, b, ins, rep, del, trans) in cases {
        let costs = EditCosts::new(ins, rep, del, Some(trans)).unwrap();
        for max in [UNBOUNDED, expected, expected + 1] {
            assert_eq!(bounded_distance(a, b, max, costs), expected, "{a:?} -> {b:?}");
            assert_eq!(bounded_distance(b, a, max, costs.reversed()), expected, "{b:?} -> {a:?}");
        }
        assert_eq!(bounded_distance(a, b, expected - 1, costs), expected - 1);
    }
}

#[test]
fn test_levenshtein_counts_transposition_twice() {
    assert_eq!(levenshtein("abcdefg", "abdcefg"), 2);
    assert_eq!(damerau_levenshtein("abcdefg", "abdcefg"), 1);
    assert_eq!(bounded_distance("abcdefg", "abdcefg", 1, EditCosts::LEVENSHTEIN), 1);
}

#[test]
fn test_byte_entry_point_validates_utf8() {
    assert!(bounded_distance_utf8(&[0xc3, 0x28], b"ok", 2, EditCosts::DAMERAU).is_err());
    assert_eq!(
        bounded_distance_utf8("пожар".as_bytes(), "пажар".as_bytes(), 2, EditCosts::DAMERAU).unwrap(),
        1
    );
}
