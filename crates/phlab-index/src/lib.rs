//! Dictionary indexes for the Puzzle Hunt Laboratory.
//!
//! Both indexes are built once from an immutable [`WordList`] and are
//! read-only afterwards, so they can be shared freely between threads.
//!
//! - [`wordlist`] -- newline-delimited word list loading and membership
//! - [`anagram`] -- canonical-key anagram index with wildcard expansion
//! - [`t9`] -- telephone keypad digit-trie

pub mod anagram;
pub mod t9;
pub mod wordlist;

pub use anagram::AnagramIndex;
pub use t9::{T9Output, T9Trie};
pub use wordlist::WordList;

/// Error type for word list loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {0} not found")]
    NotFound(String),
}
