// Search module: bounded depth-first exploration of the transform space.
//
// A search starts from one input string, applies every registered transform
// at every node up to `max_depth` steps, filters and deduplicates the
// candidates, and finally binds each reached candidate to the first
// validator that accepts it.

mod engine;

use std::fmt;
use std::time::Duration;

use hashbrown::HashSet;
use instant::Instant;
use phlab_core::BruteforceResult;
use phlab_core::character::MAX_SEARCH_WILDCARDS;

pub use engine::{SearchEngine, search};

/// Default number of transform steps explored from the input.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Candidates this long (in characters) or longer are discarded.
pub const MAX_CANDIDATE_LEN: usize = 200;

/// Default wall-clock budget of an interactive bruteforce run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Line prepended to the rendered report when the deadline expired.
pub const TIMEOUT_NOTICE: &str = "Maximum computation time exceeded!";

/// Rendered report when nothing was accepted.
pub const NO_RESULTS: &str = "No results found";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Which candidates count as already visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitedScope {
    /// Every candidate recorded anywhere in the current search. A string
    /// reached in one branch is never explored again in a sibling branch.
    #[default]
    Search,
    /// Only the input and the strings on the path to the current node.
    /// Siblings may rediscover each other's candidates.
    Branch,
}

/// Per-search configuration.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of transforms applied in sequence. `0` explores
    /// nothing.
    pub max_depth: usize,
    /// Exploration stops once this instant has passed.
    pub deadline: Option<Instant>,
    pub visited_scope: VisitedScope,
    /// Candidates with at least this many characters are dropped.
    pub max_candidate_len: usize,
    /// Candidates with at least this many `?` markers are dropped.
    pub max_wildcards: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            deadline: None,
            visited_scope: VisitedScope::default(),
            max_candidate_len: MAX_CANDIDATE_LEN,
            max_wildcards: MAX_SEARCH_WILDCARDS,
        }
    }
}

impl SearchOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the deadline to `timeout` from now. A timeout past the clock's
    /// range leaves the search without a deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    pub fn with_visited_scope(mut self, visited_scope: VisitedScope) -> Self {
        self.visited_scope = visited_scope;
        self
    }

    /// Whether the deadline, if any, has passed.
    pub fn deadline_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Outcome of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Accepted results, each bound to its validator.
    pub results: Vec<BruteforceResult>,
    /// Number of candidates reached before validation.
    pub explored: usize,
    /// Number of nodes expanded.
    pub nodes: usize,
    /// Whether the deadline cut the exploration short.
    pub timed_out: bool,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Put the results into presentation order. See [`filter_sort`].
    pub fn sorted(mut self) -> Self {
        self.results = filter_sort(self.results);
        self
    }
}

/// Renders one result per line, "No results found" when empty, and the
/// timeout notice above everything when the deadline expired.
impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.timed_out {
            write!(f, "{TIMEOUT_NOTICE}\n\n")?;
        }
        if self.results.is_empty() {
            return f.write_str(NO_RESULTS);
        }
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{result}")?;
        }
        Ok(())
    }
}

/// Presentation order for validated results.
///
/// Results are grouped by validator priority (lowest first), shallower
/// results come first within a group, and only the first (shallowest)
/// occurrence of each distinct candidate is kept. Unvalidated results sort
/// last.
pub fn filter_sort(mut results: Vec<BruteforceResult>) -> Vec<BruteforceResult> {
    results.sort_by(|a, b| {
        let pa = a.validator.as_ref().map_or(usize::MAX, |v| v.priority);
        let pb = b.validator.as_ref().map_or(usize::MAX, |v| v.priority);
        pa.cmp(&pb)
            .then(a.depth.cmp(&b.depth))
            .then_with(|| a.candidate.cmp(&b.candidate))
            .then_with(|| a.path.cmp(&b.path))
    });
    let mut seen: HashSet<String> = HashSet::new();
    results.retain(|r| seen.insert(r.candidate.clone()));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use phlab_core::ValidatorRef;

    fn result(candidate: &str, path: &[&str], validator: Option<(usize, &str)>) -> BruteforceResult {
        let parent: Vec<String> = path[..path.len() - 1]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut r = BruteforceResult::new(
            candidate.to_string(),
            &parent,
            path[path.len() - 1].to_string(),
        );
        r.validator = validator.map(|(priority, name)| ValidatorRef {
            priority,
            name: name.to_string(),
        });
        r
    }

    #[test]
    fn default_options() {
        let o = SearchOptions::default();
        assert_eq!(o.max_depth, 3);
        assert_eq!(o.max_candidate_len, 200);
        assert_eq!(o.max_wildcards, 5);
        assert_eq!(o.visited_scope, VisitedScope::Search);
        assert!(o.deadline.is_none());
        assert!(!o.deadline_expired());
    }

    #[test]
    fn timeout_sets_future_deadline() {
        let o = SearchOptions::default().with_timeout(Duration::from_secs(60));
        assert!(o.deadline.is_some());
        assert!(!o.deadline_expired());
        let past = SearchOptions::default().with_deadline(Instant::now());
        assert!(past.deadline_expired());
    }

    #[test]
    fn unrepresentable_timeout_means_no_deadline() {
        let o = SearchOptions::default().with_timeout(Duration::MAX);
        assert!(o.deadline.is_none());
        assert!(!o.deadline_expired());
        let o = SearchOptions::default().with_timeout(Duration::from_secs_f64(1e19));
        assert!(!o.deadline_expired());
    }

    #[test]
    fn filter_sort_groups_by_priority_then_depth() {
        let results = vec![
            result("zeta", &["reverse"], Some((1, "part word"))),
            result("beta", &["reverse", "caesar 3"], Some((0, "word"))),
            result("alpha", &["numbers"], Some((0, "word"))),
        ];
        let sorted = filter_sort(results);
        let names: Vec<&str> = sorted.iter().map(|r| r.candidate.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "zeta"]);
    }

    #[test]
    fn filter_sort_keeps_shallowest_duplicate() {
        let results = vec![
            result("hello", &["reverse", "caesar 1", "caesar 25"], Some((0, "word"))),
            result("hello", &["reverse"], Some((0, "word"))),
        ];
        let sorted = filter_sort(results);
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].depth, 1);
    }

    #[test]
    fn report_rendering() {
        let empty = SearchReport::default();
        assert_eq!(empty.to_string(), "No results found");

        let timed_out = SearchReport {
            timed_out: true,
            ..SearchReport::default()
        };
        assert_eq!(
            timed_out.to_string(),
            "Maximum computation time exceeded!\n\nNo results found"
        );

        let report = SearchReport {
            results: vec![
                result("di", &["numbers"], Some((0, "word"))),
                result("id", &["numbers", "reverse"], Some((0, "word"))),
            ],
            explored: 2,
            nodes: 2,
            timed_out: false,
        };
        assert_eq!(
            report.to_string(),
            "di <- numbers [word]\nid <- numbers > reverse [word]"
        );
    }
}
