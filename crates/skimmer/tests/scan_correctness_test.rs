// Scanner correctness against known answers and a brute-force reference.

use skimmer::{Matcher, SkimmerError};

/// Naive reference search over character offsets
fn brute_force(text: &str, pattern: &str) -> Vec<usize> {
    let t: Vec<char> = text.chars().collect();
    let p: Vec<char> = pattern.chars().collect();
    if p.is_empty() || p.len() > t.len() {
        return Vec::new();
    }
    (0..=t.len() - p.len())
        .filter(|&i| t[i..i + p.len()] == p[..])
        .collect()
}

fn assert_matches_brute_force(patterns: &[&str], text: &str) {
    let matcher = Matcher::build(patterns).unwrap();
    let results = matcher.scan(text);

    for pattern in matcher.patterns() {
        assert_eq!(
            results[pattern.as_str()],
            brute_force(text, pattern),
            "pattern {:?} against text {:?}",
            pattern,
            text
        );
    }
}

#[test]
fn test_overlapping_matches_in_ushers() {
    let matcher = Matcher::build(&["he", "she", "e"]).unwrap();
    let results = matcher.scan("ushers");

    assert_eq!(results["she"], vec![1]);
    assert_eq!(results["he"], vec![2]);
    assert_eq!(results["e"], vec![3]);
}

#[test]
fn test_textbook_suffix_chain_matches() {
    // The canonical Aho-Corasick example: suffix-chain-derived matches must
    // all be reported.
    let patterns = ["a", "ab", "bab", "bc", "bca", "c", "caa"];
    let matcher = Matcher::build(&patterns).unwrap();
    let results = matcher.scan("abccab");

    assert_eq!(results["a"], vec![0, 4]);
    assert_eq!(results["ab"], vec![0, 4]);
    assert_eq!(results["bab"], Vec::<usize>::new());
    assert_eq!(results["bc"], vec![1]);
    assert_eq!(results["bca"], Vec::<usize>::new());
    assert_eq!(results["c"], vec![2, 3]);
    assert_eq!(results["caa"], Vec::<usize>::new());
}

#[test]
fn test_nested_patterns_report_all_occurrences() {
    let matcher = Matcher::build(&["a", "banana"]).unwrap();
    let results = matcher.scan("banana");

    assert_eq!(results["a"], vec![1, 3, 5]);
    assert_eq!(results["banana"], vec![0]);
}

#[test]
fn test_agrees_with_brute_force() {
    assert_matches_brute_force(&["he", "she", "his", "hers"], "ushers hiss her herself");
    assert_matches_brute_force(&["a", "aa", "aaa"], "aaaaaa");
    assert_matches_brute_force(&["ab", "ba"], "abababab");
    assert_matches_brute_force(&["abc", "bcd", "cde"], "abcdeabcde");
    assert_matches_brute_force(&["x"], "no occurrences here at all");
}

#[test]
fn test_repeated_self_overlapping_pattern() {
    let matcher = Matcher::build(&["aa"]).unwrap();
    let results = matcher.scan("aaaa");

    assert_eq!(results["aa"], vec![0, 1, 2]);
}

#[test]
fn test_text_with_no_pattern_characters_scans_to_completion() {
    let matcher = Matcher::build(&["he", "she"]).unwrap();
    let results = matcher.scan("0123456789!@#$%");

    assert!(results.values().all(|positions| positions.is_empty()));
}

#[test]
fn test_empty_text_yields_empty_entries() {
    let matcher = Matcher::build(&["he"]).unwrap();
    let results = matcher.scan("");

    assert_eq!(results["he"], Vec::<usize>::new());
}

#[test]
fn test_unicode_offsets_count_characters() {
    let matcher = Matcher::build(&["aña", "a"]).unwrap();
    let results = matcher.scan("mañana");

    assert_eq!(results["aña"], vec![1]);
    assert_eq!(results["a"], vec![1, 3, 5]);
}

#[test]
fn test_deterministic_across_rebuilds() {
    let patterns = ["he", "she", "his", "hers"];
    let text = "ushers and her heirs";

    let first = Matcher::build(&patterns).unwrap().scan(text);
    let second = Matcher::build(&patterns).unwrap().scan(text);
    assert_eq!(first, second);
}

#[test]
fn test_empty_pattern_rejected() {
    let err = Matcher::build(&["he", ""]).unwrap_err();
    assert!(matches!(err, SkimmerError::Automaton(_)));
    assert_eq!(err.to_string(), "Invalid pattern: empty pattern");
}

#[test]
fn test_empty_pattern_list_rejected() {
    let patterns: Vec<String> = Vec::new();
    assert!(Matcher::build(&patterns).is_err());
}
