// Immutable word lists loaded from newline-delimited files.

use std::path::Path;

use hashbrown::HashSet;

use crate::DictionaryError;

/// An ordered, immutable list of lowercase words with O(1) membership.
///
/// Source order is preserved (duplicates included) because the indexes built
/// on top of it keep words in list order.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    members: HashSet<String>,
}

impl WordList {
    /// Build a word list from an iterator of words.
    ///
    /// Each word is trimmed and lowercased; empty entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let members = words.iter().cloned().collect();
        Self { words, members }
    }

    /// Parse newline-delimited contents (`\n` or `\r\n`).
    pub fn parse(contents: &str) -> Self {
        Self::from_words(contents.lines())
    }

    /// Read and parse a word list file.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        if !path.is_file() {
            return Err(DictionaryError::NotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let list = Self::parse(&contents);
        log::info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Whether `word` (already lowercase) is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
