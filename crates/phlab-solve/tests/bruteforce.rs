//! End-to-end tests of the transform search through the `Lab` handle, using
//! the default transforms and validators over the word lists in
//! `tests/data`.
//!
//! Run: cargo test -p phlab-solve --features handle --test bruteforce

use std::path::PathBuf;
use std::time::Duration;

use phlab_core::character::count_wildcards;
use phlab_solve::lab::Lab;
use phlab_solve::search::{SearchOptions, VisitedScope};

const INPUTS: &[&str] = &["olleh", "4 9", "8 5 12 12 15", "... --- ...", "uryyb", "dlrow olleh"];

fn create_lab() -> Lab {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    Lab::load(&dir).unwrap_or_else(|e| panic!("failed to load test dictionaries: {}", e))
}

fn candidate_set(lab: &Lab, input: &str, options: &SearchOptions) -> Vec<(String, usize)> {
    let mut set: Vec<(String, usize)> = lab
        .bruteforce_with(input, options)
        .results
        .into_iter()
        .map(|r| (r.candidate, r.depth))
        .collect();
    set.sort();
    set
}

#[test]
fn numbers_decode_is_found_at_depth_one() {
    let lab = create_lab();
    let options = SearchOptions::default().with_visited_scope(VisitedScope::Branch);
    let report = lab.bruteforce_with("4 9", &options);
    let first = &report.results[0];
    assert_eq!(first.candidate, "di");
    assert_eq!(first.depth, 1);
    assert_eq!(first.path, vec!["numbers"]);
    assert_eq!(first.validator_name(), Some("word"));
    assert!(report.to_string().starts_with("di <- numbers [word]"));
}

#[test]
fn shared_visited_set_keeps_first_discovery() {
    // Depth-first order reaches "4 9" again through reverse > reverse before
    // the root's own numbers decode runs, so "di" is recorded deeper.
    let lab = create_lab();
    let report = lab.bruteforce("4 9");
    let di = report
        .results
        .iter()
        .find(|r| r.candidate == "di")
        .expect("di is reached");
    assert_eq!(di.path, vec!["reverse", "reverse", "numbers"]);
    assert_eq!(report.results.iter().filter(|r| r.candidate == "di").count(), 1);
}

#[test]
fn decodes_classic_ciphers() {
    let lab = create_lab();
    let expectations = [
        ("olleh", "reverse"),
        ("8 5 12 12 15", "numbers"),
        ("uryyb", "caesar 13"),
        ("23 15 31 31 34", "tap"),
        ("44 33 555 555 666", "sms"),
        ("43556", "t9"),
        ("lehol", "anagram"),
    ];
    for (input, last_step) in expectations {
        let report = lab.bruteforce(input);
        let hit = report
            .results
            .iter()
            .find(|r| r.candidate == "hello")
            .unwrap_or_else(|| panic!("'hello' not found from '{input}'"));
        assert_eq!(
            hit.path.last().map(String::as_str),
            Some(last_step),
            "path from '{input}'"
        );
        assert_eq!(hit.validator_name(), Some("word"));
    }
}

#[test]
fn zero_depth_finds_nothing() {
    let lab = create_lab();
    let options = SearchOptions::default().with_max_depth(0);
    for input in INPUTS {
        let report = lab.bruteforce_with(input, &options);
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "No results found");
    }
}

#[test]
fn results_respect_filters_and_depth() {
    let lab = create_lab();
    for max_depth in 1..=3 {
        let options = SearchOptions::default().with_max_depth(max_depth);
        for input in INPUTS {
            for r in lab.bruteforce_with(input, &options).results {
                assert!(r.candidate.chars().count() < 200, "{r}");
                assert!(count_wildcards(&r.candidate) < 5, "{r}");
                assert!(r.candidate.chars().any(char::is_alphanumeric), "{r}");
                assert!(r.depth >= 1 && r.depth <= max_depth, "{r}");
                assert_eq!(r.depth, r.path.len());
                assert!(r.is_validated());
            }
        }
    }
}

#[test]
fn presentation_keeps_one_entry_per_candidate() {
    let lab = create_lab();
    for input in INPUTS {
        let report = lab.bruteforce(input);
        let mut seen = std::collections::HashSet::new();
        for r in &report.results {
            assert!(seen.insert(r.candidate.clone()), "duplicate {}", r.candidate);
        }
        let priorities: Vec<usize> = report
            .results
            .iter()
            .filter_map(|r| r.validator.as_ref().map(|v| v.priority))
            .collect();
        assert!(priorities.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn repeated_searches_agree() {
    let lab = create_lab();
    let options = SearchOptions::default();
    for input in INPUTS {
        assert_eq!(
            candidate_set(&lab, input, &options),
            candidate_set(&lab, input, &options),
            "'{input}'"
        );
    }
}

#[test]
fn branch_scope_finds_at_least_as_much() {
    let lab = create_lab();
    let shared = SearchOptions::default();
    let branch = SearchOptions::default().with_visited_scope(VisitedScope::Branch);
    for input in ["olleh", "4 9"] {
        // The branch scope never revisits the input itself.
        let shared_words: Vec<String> = candidate_set(&lab, input, &shared)
            .into_iter()
            .map(|(c, _)| c)
            .filter(|c| c != input)
            .collect();
        let branch_words: Vec<String> = candidate_set(&lab, input, &branch)
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        for word in &shared_words {
            assert!(branch_words.contains(word), "'{word}' lost from '{input}'");
        }
    }
}

#[test]
fn expired_timeout_is_reported() {
    let mut lab = create_lab();
    lab.set_timeout(Duration::ZERO);
    let report = lab.bruteforce("olleh");
    assert!(report.timed_out);
    assert!(
        report
            .to_string()
            .starts_with("Maximum computation time exceeded!\n\n")
    );
}

#[test]
fn concurrent_searches_share_one_lab() {
    let lab = create_lab();
    let expected = candidate_set(&lab, "olleh", &SearchOptions::default());
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| candidate_set(&lab, "olleh", &SearchOptions::default())))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
