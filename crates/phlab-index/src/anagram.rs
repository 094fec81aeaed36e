// Anagram index: canonical sorted-letter key -> words sharing that key.

use hashbrown::{HashMap, HashSet};
use phlab_core::character::{WILDCARD, canonical_key};

use crate::WordList;

/// Immutable anagram lookup table.
///
/// Every source word is stored under exactly one key (its own canonical
/// form), in source order. Keys never map to an empty group.
#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    table: HashMap<String, Vec<String>>,
    word_count: usize,
}

impl AnagramIndex {
    /// Build the index from a sequence of words.
    pub fn build<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table: HashMap<String, Vec<String>> = HashMap::new();
        let mut word_count = 0;
        for word in words {
            table
                .entry(canonical_key(word))
                .or_default()
                .push(word.to_string());
            word_count += 1;
        }
        log::info!(
            "anagram index built for {word_count} words, {} entries",
            table.len()
        );
        Self { table, word_count }
    }

    /// Build the index over a loaded word list.
    pub fn from_word_list(list: &WordList) -> Self {
        Self::build(list.iter())
    }

    /// Exact lookup without wildcard expansion.
    ///
    /// `?` is treated as an ordinary character here, so a query containing
    /// one never matches a dictionary word made of letters.
    pub fn get(&self, query: &str) -> Option<&[String]> {
        self.table.get(&canonical_key(query)).map(Vec::as_slice)
    }

    /// Look up all words that are anagrams of `query`.
    ///
    /// Each `?` in the query stands for any letter `a`..=`z`. Results of the
    /// substitutions are unioned and deduplicated, keeping first occurrence.
    /// Returns `None` when nothing matches.
    ///
    /// The cost grows exponentially with the number of wildcards; callers are
    /// expected to bound it.
    pub fn lookup(&self, query: &str) -> Option<Vec<String>> {
        let query = query.to_lowercase();
        let wildcards = query.chars().filter(|&c| c == WILDCARD).count();
        if wildcards == 0 {
            return self.get(&query).map(<[String]>::to_vec);
        }

        // Position is irrelevant once letters are sorted, so enumerate
        // multisets of substituted letters instead of every ordering.
        let fixed: String = query.chars().filter(|&c| c != WILDCARD).collect();
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut buffer = fixed;
        self.expand(&mut buffer, wildcards, b'a', &mut seen, &mut found);

        if found.is_empty() { None } else { Some(found) }
    }

    /// Substitute `remaining` wildcards with letters `>= min_letter`
    /// (non-decreasing) and collect matching groups.
    fn expand(
        &self,
        buffer: &mut String,
        remaining: usize,
        min_letter: u8,
        seen: &mut HashSet<String>,
        found: &mut Vec<String>,
    ) {
        if remaining == 0 {
            if let Some(group) = self.get(buffer) {
                for word in group {
                    if seen.insert(word.clone()) {
                        found.push(word.clone());
                    }
                }
            }
            return;
        }
        for letter in min_letter..=b'z' {
            buffer.push(char::from(letter));
            self.expand(buffer, remaining - 1, letter, seen, found);
            buffer.pop();
        }
    }

    /// Number of distinct canonical keys.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of words indexed.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(words: &[&str]) -> AnagramIndex {
        AnagramIndex::build(words.iter().copied())
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn exact_lookup_returns_group_in_source_order() {
        let idx = index(&["listen", "enlist", "silent", "tinsel", "google"]);
        assert_eq!(
            idx.lookup("silent").unwrap(),
            vec!["listen", "enlist", "silent", "tinsel"]
        );
    }

    #[test]
    fn every_word_finds_exactly_its_key_group() {
        let words = ["stop", "pots", "tops", "opts", "spot", "post", "cat", "act", "dog"];
        let idx = index(&words);
        for w in words {
            let group = idx.lookup(w).unwrap();
            assert!(group.iter().any(|g| g == w));
            let key = canonical_key(w);
            let expected: Vec<&str> = words
                .iter()
                .copied()
                .filter(|o| canonical_key(o) == key)
                .collect();
            assert_eq!(group, expected);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let idx = index(&["tab", "bat"]);
        assert_eq!(idx.lookup("ABT").unwrap(), vec!["tab", "bat"]);
    }

    #[test]
    fn absent_key_is_none() {
        let idx = index(&["cat"]);
        assert!(idx.lookup("dog").is_none());
        assert!(idx.get("dog").is_none());
    }

    #[test]
    fn single_wildcard_finds_all_fillings() {
        let idx = index(&["cat", "cot", "cut", "dog", "cart"]);
        assert_eq!(sorted(idx.lookup("c?t").unwrap()), vec!["cat", "cot", "cut"]);
    }

    #[test]
    fn multiple_wildcards() {
        let idx = index(&["cat", "act", "dog", "god", "cow"]);
        let found = sorted(idx.lookup("?a?").unwrap());
        assert_eq!(found, vec!["act", "cat"]);
        let all_three = sorted(idx.lookup("???").unwrap());
        assert_eq!(all_three, vec!["act", "cat", "cow", "dog", "god"]);
    }

    #[test]
    fn wildcard_results_are_deduplicated() {
        let idx = index(&["aa"]);
        assert_eq!(idx.lookup("??").unwrap(), vec!["aa"]);
    }

    #[test]
    fn wildcard_without_match_is_none() {
        let idx = index(&["cat"]);
        assert!(idx.lookup("x?z").is_none());
    }

    #[test]
    fn exact_get_treats_wildcard_literally() {
        let idx = index(&["cat"]);
        assert!(idx.get("c?t").is_none());
    }

    #[test]
    fn counts() {
        let idx = index(&["cat", "act", "dog"]);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.word_count(), 3);
        assert!(!idx.is_empty());
        assert!(AnagramIndex::default().is_empty());
    }

    #[test]
    fn from_word_list_matches_build() {
        let list = WordList::parse("Stop\npots\n");
        let idx = AnagramIndex::from_word_list(&list);
        assert_eq!(idx.lookup("opts").unwrap(), vec!["stop", "pots"]);
    }
}
