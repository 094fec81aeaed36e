// Depth-first transform search.
//
// One `SearchStatus` lives for the duration of a top-level call. It carries
// the visited set, the reached results and the deadline bookkeeping; the
// engine itself holds only the registries and is shared read-only.

use hashbrown::HashSet;
use log::debug;
use phlab_core::BruteforceResult;
use phlab_core::character::{count_wildcards, has_alphanumeric};

use super::{SearchOptions, SearchReport, VisitedScope};
use crate::transform::TransformRegistry;
use crate::validator::ValidatorRegistry;

/// Transforms and validators bundled for repeated searches.
pub struct SearchEngine {
    transforms: TransformRegistry,
    validators: ValidatorRegistry,
}

impl SearchEngine {
    pub fn new(transforms: TransformRegistry, validators: ValidatorRegistry) -> Self {
        Self {
            transforms,
            validators,
        }
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }

    /// Search from `input`. See [`search`].
    pub fn search(&self, input: &str, options: &SearchOptions) -> SearchReport {
        search(input, &self.transforms, &self.validators, options)
    }
}

/// Explore every transform chain of up to `options.max_depth` steps from
/// `input` and return the reached candidates accepted by a validator.
///
/// Results come back in discovery order; use
/// [`filter_sort`](super::filter_sort) for presentation order. When the
/// deadline expires the results gathered so far are still validated and the
/// report is flagged `timed_out`.
pub fn search(
    input: &str,
    transforms: &TransformRegistry,
    validators: &ValidatorRegistry,
    options: &SearchOptions,
) -> SearchReport {
    let mut status = SearchStatus::new(options);
    if options.max_depth > 0 {
        if options.visited_scope == VisitedScope::Branch {
            status.visited.insert(input.to_lowercase());
        }
        status.explore(input, &[], 0, transforms);
    }

    let explored = status.results.len();
    let results: Vec<BruteforceResult> = status
        .results
        .into_iter()
        .filter_map(|mut r| {
            r.validator = Some(validators.first_accepting(&r.candidate)?);
            Some(r)
        })
        .collect();

    debug!(
        "search '{}': {} nodes, {} candidates, {} accepted{}",
        input,
        status.nodes,
        explored,
        results.len(),
        if status.timed_out { ", timed out" } else { "" }
    );

    SearchReport {
        results,
        explored,
        nodes: status.nodes,
        timed_out: status.timed_out,
    }
}

/// Mutable state of one top-level search.
struct SearchStatus<'a> {
    options: &'a SearchOptions,
    /// Strings that may not be recorded again (see [`VisitedScope`]).
    visited: HashSet<String>,
    /// Reached candidates in discovery order, not yet validated.
    results: Vec<BruteforceResult>,
    /// Expanded node count.
    nodes: usize,
    timed_out: bool,
}

impl<'a> SearchStatus<'a> {
    fn new(options: &'a SearchOptions) -> Self {
        Self {
            options,
            visited: HashSet::new(),
            results: Vec::new(),
            nodes: 0,
            timed_out: false,
        }
    }

    /// Returns `true` once the deadline has passed. Sticky.
    fn should_abort(&mut self) -> bool {
        if !self.timed_out && self.options.deadline_expired() {
            self.timed_out = true;
        }
        self.timed_out
    }

    /// Whether a candidate passes the per-node filters, in order: not yet
    /// visited, shorter than the length cap, fewer wildcards than the cap,
    /// and carrying at least one alphanumeric character.
    fn admits(&self, text: &str) -> bool {
        !self.visited.contains(text)
            && text.chars().count() < self.options.max_candidate_len
            && count_wildcards(text) < self.options.max_wildcards
            && has_alphanumeric(text)
    }

    fn explore(
        &mut self,
        current: &str,
        path: &[String],
        depth: usize,
        transforms: &TransformRegistry,
    ) {
        if depth >= self.options.max_depth || self.should_abort() {
            return;
        }
        self.nodes += 1;
        let current = current.to_lowercase();

        for transform in transforms.iter() {
            if self.should_abort() {
                return;
            }
            for candidate in transform.apply(&current) {
                if !self.admits(&candidate.text) {
                    continue;
                }
                let result = BruteforceResult::new(candidate.text, path, candidate.label);
                let text = result.candidate.clone();
                let child_path = result.path.clone();
                self.results.push(result);

                let descend = depth + 1 < self.options.max_depth;
                match self.options.visited_scope {
                    VisitedScope::Search => {
                        self.visited.insert(text.clone());
                        if descend {
                            self.explore(&text, &child_path, depth + 1, transforms);
                        }
                    }
                    VisitedScope::Branch => {
                        if descend {
                            self.visited.insert(text.clone());
                            self.explore(&text, &child_path, depth + 1, transforms);
                            self.visited.remove(&text);
                        }
                    }
                }
            }
        }
    }
}
