// Built-in transforms: reversal, Caesar rotations, cipher decodes and the
// dictionary-backed keypad and anagram expansions.

use std::sync::Arc;

use phlab_core::character::{MAX_SEARCH_WILDCARDS, count_wildcards, is_wildcard};
use phlab_core::{Candidate, Key};
use phlab_index::{AnagramIndex, T9Trie};

use super::Transform;
use crate::cipher::{Cipher, Decoded, caesar};

// ---------------------------------------------------------------------------
// Reverse
// ---------------------------------------------------------------------------

/// Reverse the character order.
pub struct Reverse;

impl Transform for Reverse {
    fn name(&self) -> &str {
        "reverse"
    }

    fn apply(&self, input: &str) -> Vec<Candidate> {
        let reversed: String = input.chars().rev().collect();
        if reversed == input {
            return Vec::new();
        }
        vec![Candidate::new(reversed, "reverse")]
    }
}

// ---------------------------------------------------------------------------
// CaesarShifts
// ---------------------------------------------------------------------------

/// Every non-trivial Caesar rotation (1..=25), labelled `caesar {shift}`.
pub struct CaesarShifts;

impl Transform for CaesarShifts {
    fn name(&self) -> &str {
        "caesar"
    }

    fn apply(&self, input: &str) -> Vec<Candidate> {
        if !input.chars().any(|c| c.is_ascii_alphabetic()) {
            return Vec::new();
        }
        (1..caesar::SHIFTS)
            .map(|shift| {
                Candidate::new(caesar::shift_text(input, shift), format!("caesar {shift}"))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// CipherDecode
// ---------------------------------------------------------------------------

/// Decode the input with one cipher, labelled with the cipher's name.
///
/// Inputs that do not look like the cipher's ciphertext are skipped, as are
/// decodes that are empty, not UTF-8, or unchanged.
pub struct CipherDecode {
    cipher: Cipher,
    label: String,
}

impl CipherDecode {
    pub fn new(cipher: Cipher) -> Self {
        Self {
            cipher,
            label: cipher.name().to_lowercase(),
        }
    }

    fn candidate(&self, input: &str, bytes: Vec<u8>) -> Option<Candidate> {
        let text = String::from_utf8(bytes).ok()?;
        if text.is_empty() || text == input {
            return None;
        }
        Some(Candidate::new(text, self.label.as_str()))
    }
}

impl Transform for CipherDecode {
    fn name(&self) -> &str {
        &self.label
    }

    fn apply(&self, input: &str) -> Vec<Candidate> {
        if !self.cipher.accepts_ciphertext(input) {
            return Vec::new();
        }
        match self.cipher.decode(input, Key::All) {
            Decoded::One(bytes) => self.candidate(input, bytes).into_iter().collect(),
            Decoded::Many(all) => all
                .into_iter()
                .filter_map(|bytes| self.candidate(input, bytes))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// KeypadWords
// ---------------------------------------------------------------------------

/// Default cap on the number of word combinations for multi-token input.
pub const DEFAULT_MAX_COMBINATIONS: usize = 64;

/// Resolve keypad digits to dictionary words through the digit-trie.
///
/// Multi-token input yields space-joined combinations of the token words,
/// capped at `max_combinations`. Any token without a match yields nothing.
pub struct KeypadWords {
    trie: Arc<T9Trie>,
    max_combinations: usize,
}

impl KeypadWords {
    pub fn new(trie: Arc<T9Trie>) -> Self {
        Self {
            trie,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }

    pub fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }
}

impl Transform for KeypadWords {
    fn name(&self) -> &str {
        "t9"
    }

    fn apply(&self, input: &str) -> Vec<Candidate> {
        if !Cipher::T9.accepts_ciphertext(input) {
            return Vec::new();
        }
        let mut combinations = vec![String::new()];
        for token in input.split_whitespace() {
            let Ok(words) = self.trie.resolve(token) else {
                return Vec::new();
            };
            let mut next = Vec::new();
            'outer: for prefix in &combinations {
                for word in words {
                    if next.len() >= self.max_combinations {
                        break 'outer;
                    }
                    next.push(if prefix.is_empty() {
                        word.clone()
                    } else {
                        format!("{prefix} {word}")
                    });
                }
            }
            combinations = next;
        }
        combinations
            .into_iter()
            .filter(|c| !c.is_empty())
            .map(|c| Candidate::new(c, "t9"))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Anagrams
// ---------------------------------------------------------------------------

/// Default maximum letter count for anagram expansion.
pub const DEFAULT_MAX_ANAGRAM_LEN: usize = 12;

/// Rearrange the letters of the input into dictionary words.
///
/// Whitespace is ignored; input must otherwise be letters and wildcards,
/// between 3 and `max_len` characters, with fewer wildcards than the
/// search admits.
pub struct Anagrams {
    index: Arc<AnagramIndex>,
    max_len: usize,
}

impl Anagrams {
    pub fn new(index: Arc<AnagramIndex>) -> Self {
        Self {
            index,
            max_len: DEFAULT_MAX_ANAGRAM_LEN,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}

impl Transform for Anagrams {
    fn name(&self) -> &str {
        "anagram"
    }

    fn apply(&self, input: &str) -> Vec<Candidate> {
        let letters: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let len = letters.chars().count();
        if len < 3 || len > self.max_len {
            return Vec::new();
        }
        if !letters
            .chars()
            .all(|c| c.is_ascii_alphabetic() || is_wildcard(c))
        {
            return Vec::new();
        }
        if count_wildcards(&letters) >= MAX_SEARCH_WILDCARDS {
            return Vec::new();
        }
        self.index
            .lookup(&letters)
            .unwrap_or_default()
            .into_iter()
            .filter(|word| *word != letters)
            .map(|word| Candidate::new(word, "anagram"))
            .collect()
    }
}
