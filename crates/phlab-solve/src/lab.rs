// Lab: top-level handle for the puzzle toolkit.
//
// Owns both word lists (the full list and the common-words list), the
// anagram index and keypad trie built over each, and a search engine wired
// with the default transforms and validators. Every tool is exposed as a
// `&self` method so one handle can serve concurrent callers.
//
// Design notes:
// - Indexes are built once at construction and shared through `Arc` with the
//   dictionary-backed transforms and validators.
// - The search runs over the common-words indexes; user lookups choose
//   between the two lists per call.
// - Search options live in the handle; `bruteforce` stamps a fresh deadline
//   from the configured timeout on every call.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use phlab_core::character::count_wildcards;
use phlab_core::{Key, LookupError};
use phlab_index::{AnagramIndex, DictionaryError, T9Output, T9Trie, WordList};

use crate::analysis::{self, TextStatistics};
use crate::base;
use crate::cipher::{self, Cipher};
use crate::find;
use crate::grid::{self, GridMatch, GridOptions};
use crate::search::{DEFAULT_TIMEOUT, SearchEngine, SearchOptions, SearchReport, VisitedScope};
use crate::transform::default_transforms;
use crate::validator::default_validators;

/// File name of the full word list inside a dictionary directory.
pub const ALL_WORDS_FILE: &str = "words_sorted.txt";

/// File name of the common-words list inside a dictionary directory.
pub const COMMON_WORDS_FILE: &str = "words_popular.txt";

/// Wildcards accepted in a user anagram query.
pub const MAX_QUERY_WILDCARDS: usize = 5;

/// Error type for Lab construction failures.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// A word list could not be read.
    #[error("failed to load dictionary: {0}")]
    Dictionary(#[from] DictionaryError),

    /// A word list was read but holds no words.
    #[error("word list {0} is empty")]
    EmptyWordList(String),
}

/// One word list with the indexes built over it.
struct Lexicon {
    words: Arc<WordList>,
    anagrams: Arc<AnagramIndex>,
    keypad: Arc<T9Trie>,
}

impl Lexicon {
    fn new(words: WordList) -> Self {
        let anagrams = Arc::new(AnagramIndex::from_word_list(&words));
        let keypad = Arc::new(T9Trie::from_word_list(&words));
        Self {
            words: Arc::new(words),
            anagrams,
            keypad,
        }
    }
}

/// Top-level handle owning the dictionaries, indexes and search engine.
pub struct Lab {
    /// Full word list and its indexes.
    all: Lexicon,
    /// Common-words list and its indexes. Backs the search.
    common: Lexicon,

    engine: SearchEngine,

    // -- Options --
    /// Options for `bruteforce`; the deadline is set per call.
    search_options: SearchOptions,

    /// Wall-clock budget of one `bruteforce` call.
    timeout: Duration,
}

impl Lab {
    /// Build a handle over the full and common word lists.
    pub fn new(all: WordList, common: WordList) -> Self {
        let all = Lexicon::new(all);
        let common = Lexicon::new(common);
        let engine = SearchEngine::new(
            default_transforms(Arc::clone(&common.keypad), Arc::clone(&common.anagrams)),
            default_validators(Arc::clone(&common.words), Arc::clone(&common.anagrams)),
        );
        log::info!(
            "lab ready: {} words, {} common words",
            all.words.len(),
            common.words.len()
        );
        Self {
            all,
            common,
            engine,
            search_options: SearchOptions::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a handle from newline-delimited word list contents.
    pub fn from_contents(all: &str, common: &str) -> Self {
        Self::new(WordList::parse(all), WordList::parse(common))
    }

    /// Load `words_sorted.txt` and `words_popular.txt` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, LabError> {
        let all = load_nonempty(&dir.join(ALL_WORDS_FILE))?;
        let common = load_nonempty(&dir.join(COMMON_WORDS_FILE))?;
        Ok(Self::new(all, common))
    }

    fn lexicon(&self, common: bool) -> &Lexicon {
        if common { &self.common } else { &self.all }
    }

    // =========================================================================
    // Dictionary tools
    // =========================================================================

    /// Anagrams of `query` with spaces removed. `?` stands for any letter.
    ///
    /// Returns `Ok(None)` when nothing matches; queries with more than
    /// five wildcards are rejected.
    pub fn anagram(&self, query: &str, common: bool) -> Result<Option<Vec<String>>, LookupError> {
        let query: String = query.chars().filter(|&c| c != ' ').collect();
        let wildcards = count_wildcards(&query);
        if wildcards > MAX_QUERY_WILDCARDS {
            return Err(LookupError::InvalidInput(format!(
                "{wildcards} wildcards, at most {MAX_QUERY_WILDCARDS} allowed"
            )));
        }
        Ok(self.lexicon(common).anagrams.lookup(&query))
    }

    /// Keypad lookup: one token yields its words one per line, several
    /// space-separated tokens yield one `[w1, w2]` list per token.
    pub fn t9(&self, digits: &str, common: bool) -> Result<T9Output, LookupError> {
        self.lexicon(common).keypad.lookup(digits, false)
    }

    /// Words matched in full by a case-insensitive regular expression.
    pub fn find_words(&self, pattern: &str, common: bool) -> Result<Vec<&str>, LookupError> {
        find::find_words(pattern, &self.lexicon(common).words)
    }

    /// Dictionary words hidden in the rows and columns of a letter grid.
    /// Uses the common-words list.
    pub fn grid_search(
        &self,
        grid: &str,
        options: &GridOptions,
    ) -> Result<Vec<GridMatch>, LookupError> {
        grid::find_grid_words(grid, &self.common.words, options)
    }

    pub fn words(&self, common: bool) -> &WordList {
        &self.lexicon(common).words
    }

    // =========================================================================
    // Decoding tools
    // =========================================================================

    /// Run the transform search with the handle's options and a deadline
    /// `timeout` from now. Results are in presentation order.
    pub fn bruteforce(&self, input: &str) -> SearchReport {
        let options = self.search_options.clone().with_timeout(self.timeout);
        self.engine.search(input, &options).sorted()
    }

    /// Run the transform search with explicit options. Results are in
    /// presentation order.
    pub fn bruteforce_with(&self, input: &str, options: &SearchOptions) -> SearchReport {
        self.engine.search(input, options).sorted()
    }

    /// Decode with one cipher and re-encode with another.
    pub fn run_cipher(
        &self,
        input: Cipher,
        input_key: Key,
        output: Cipher,
        output_key: Key,
        text: &str,
    ) -> Result<String, LookupError> {
        cipher::run_cipher(input, input_key, output, output_key, text)
    }

    /// Symbol frequencies and entropy of `text`.
    pub fn analyze(&self, text: &str) -> TextStatistics {
        analysis::analyze(text)
    }

    /// Convert whitespace-separated numbers between bases.
    pub fn convert_base(&self, input: &str, from: u32, to: u32) -> Result<String, LookupError> {
        base::convert_base(input, from, to)
    }

    pub fn search_engine(&self) -> &SearchEngine {
        &self.engine
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the number of transform steps explored by `bruteforce`.
    pub fn set_max_depth(&mut self, value: usize) {
        self.search_options.max_depth = value;
    }

    /// Set the wall-clock budget of one `bruteforce` call.
    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = value;
    }

    /// Set how far the visited set reaches during `bruteforce`.
    pub fn set_visited_scope(&mut self, value: VisitedScope) {
        self.search_options.visited_scope = value;
    }

    pub fn search_options(&self) -> &SearchOptions {
        &self.search_options
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn load_nonempty(path: &Path) -> Result<WordList, LabError> {
    let list = WordList::load(path)?;
    if list.is_empty() {
        return Err(LabError::EmptyWordList(path.display().to_string()));
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &str = "cat\nact\ntac\ncot\ncut\nsilent\nlisten\nenlist\ngood\nhome\ngone\nhello\ndi\n";
    const COMMON: &str = "cat\nact\nsilent\nlisten\ngood\nhome\nhello\ndi\n";

    fn lab() -> Lab {
        Lab::from_contents(ALL, COMMON)
    }

    #[test]
    fn anagram_lists() {
        let lab = lab();
        assert_eq!(
            lab.anagram("t a c", false).unwrap(),
            Some(vec!["cat".to_string(), "act".to_string(), "tac".to_string()])
        );
        assert_eq!(
            lab.anagram("tca", true).unwrap(),
            Some(vec!["cat".to_string(), "act".to_string()])
        );
        assert_eq!(lab.anagram("zzz", false).unwrap(), None);
    }

    #[test]
    fn anagram_wildcard_cap() {
        let lab = lab();
        assert!(lab.anagram("c?t", false).unwrap().is_some());
        assert!(lab.anagram("??????", false).is_err());
    }

    #[test]
    fn t9_per_list() {
        let lab = lab();
        assert_eq!(
            lab.t9("4663", false).unwrap(),
            T9Output::Text("good\nhome\ngone".to_string())
        );
        assert_eq!(
            lab.t9("4663", true).unwrap(),
            T9Output::Text("good\nhome".to_string())
        );
        assert!(matches!(lab.t9("abc", false), Err(LookupError::InvalidInput(_))));
    }

    #[test]
    fn find_words_per_list() {
        let lab = lab();
        assert_eq!(lab.find_words("c.t", false).unwrap(), vec!["cat", "cot", "cut"]);
        assert_eq!(lab.find_words("c.t", true).unwrap(), vec!["cat"]);
    }

    #[test]
    fn bruteforce_finds_numbers_decode() {
        let mut lab = lab();
        lab.set_visited_scope(VisitedScope::Branch);
        let report = lab.bruteforce("4 9");
        assert!(!report.timed_out);
        let di = report
            .results
            .iter()
            .find(|r| r.candidate == "di")
            .expect("di decoded");
        assert_eq!(di.depth, 1);
        assert_eq!(di.path, vec!["numbers"]);
        assert_eq!(di.validator_name(), Some("word"));
    }

    #[test]
    fn bruteforce_respects_depth_setting() {
        let mut lab = lab();
        lab.set_max_depth(0);
        assert!(lab.bruteforce("olleh").is_empty());
        lab.set_max_depth(1);
        let report = lab.bruteforce("olleh");
        assert_eq!(report.results[0].candidate, "hello");
        assert_eq!(report.results[0].path, vec!["reverse"]);
    }

    #[test]
    fn unbounded_timeout_still_searches() {
        let mut lab = lab();
        lab.set_timeout(Duration::MAX);
        lab.set_max_depth(1);
        let report = lab.bruteforce("olleh");
        assert!(!report.timed_out);
        assert_eq!(report.results[0].candidate, "hello");
    }

    #[test]
    fn setters() {
        let mut lab = lab();
        lab.set_timeout(Duration::from_secs(5));
        lab.set_visited_scope(VisitedScope::Branch);
        assert_eq!(lab.timeout(), Duration::from_secs(5));
        assert_eq!(lab.search_options().visited_scope, VisitedScope::Branch);
        assert_eq!(lab.search_engine().transforms().len(), 9);
        assert_eq!(lab.search_engine().validators().len(), 6);
    }

    #[test]
    fn utilities_delegate() {
        let lab = lab();
        assert_eq!(
            lab.run_cipher(Cipher::Text, Key::All, Cipher::Numbers, Key::All, "di")
                .unwrap(),
            "4 9"
        );
        assert_eq!(lab.convert_base("255", 10, 16).unwrap(), "FF");
        assert_eq!(lab.analyze("aa").symbols, 2);
        let found = lab.grid_search("xgood\nqqqqq", &GridOptions::default()).unwrap();
        assert_eq!(found[0].word, "good");
        assert_eq!(lab.words(true).len(), 8);
    }

    #[test]
    fn load_missing_directory() {
        let err = Lab::load(Path::new("/nonexistent/phlab")).err().unwrap();
        assert!(matches!(err, LabError::Dictionary(DictionaryError::NotFound(_))));
    }
}
