// Telephone keypad digit-trie.
//
// Nodes live in a flat arena; each node has one child slot per
// letter-carrying digit (2..=9) plus the words that end there.

use std::fmt;

use phlab_core::LookupError;
use phlab_core::character::{FIRST_LETTER_DIGIT, LETTER_DIGIT_COUNT, digit_slot, keypad_digit};

use crate::WordList;

/// Index of a node within the trie arena.
type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; LETTER_DIGIT_COUNT],
    words: Vec<String>,
}

/// Result of a keypad lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum T9Output {
    /// Rendered text: newline-joined words for a single token, or the
    /// space-joined token renderings for multi-token input.
    Text(String),
    /// The word list of one token, kept as a list so an outer multi-token
    /// lookup can recombine it.
    Words(Vec<String>),
}

impl fmt::Display for T9Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            T9Output::Text(text) => f.write_str(text),
            T9Output::Words(words) => write!(f, "[{}]", words.join(", ")),
        }
    }
}

/// Digit-keyed trie over a dictionary.
///
/// Every word's path is the sequence of keypad digits of its letters, so the
/// shape of the trie is fully determined by the dictionary. Several words
/// can end at the same node (`home`, `good`, `gone` all type as `4663`).
#[derive(Debug, Clone)]
pub struct T9Trie {
    nodes: Vec<Node>,
    word_count: usize,
}

impl Default for T9Trie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }
}

impl T9Trie {
    /// Build the trie from a sequence of words.
    ///
    /// Words containing a character without a keypad digit (anything other
    /// than `a`..=`z`, case-folded) cannot be typed and are skipped.
    pub fn build<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut trie = Self::default();
        let mut skipped = 0usize;
        for word in words {
            if !trie.insert(word) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            log::debug!("t9 trie skipped {skipped} words without a keypad spelling");
        }
        log::info!(
            "t9 trie built for {} words, {} nodes",
            trie.word_count,
            trie.nodes.len()
        );
        trie
    }

    /// Build the trie over a loaded word list.
    pub fn from_word_list(list: &WordList) -> Self {
        Self::build(list.iter())
    }

    /// Insert one word. Returns `false` if the word has no keypad spelling.
    fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let Some(slots) = word
            .chars()
            .map(|c| keypad_digit(c).map(|d| (d - FIRST_LETTER_DIGIT) as usize))
            .collect::<Option<Vec<usize>>>()
        else {
            return false;
        };

        let mut node = ROOT;
        for slot in slots {
            node = match self.nodes[node as usize].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len() as NodeId;
                    self.nodes.push(Node::default());
                    self.nodes[node as usize].children[slot] = Some(child);
                    child
                }
            };
        }
        self.nodes[node as usize].words.push(word.to_string());
        self.word_count += 1;
        true
    }

    /// Keypad digit encoding of a word, or `None` if a character has no key.
    pub fn encode(word: &str) -> Option<String> {
        word.chars()
            .map(|c| keypad_digit(c).map(|d| char::from(b'0' + d)))
            .collect()
    }

    /// Walk the trie along one digit token and return the words ending at
    /// the reached node.
    ///
    /// The walk is a single deterministic path: a missing child fails with
    /// [`LookupError::NoMatch`] immediately.
    pub fn resolve(&self, digits: &str) -> Result<&[String], LookupError> {
        if digits.is_empty() {
            return Err(LookupError::InvalidInput("empty keypad query".to_string()));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(LookupError::InvalidInput(format!(
                "'{bad}' in '{digits}' is not a digit"
            )));
        }

        let mut node = ROOT;
        for c in digits.chars() {
            let child = digit_slot(c).and_then(|slot| self.nodes[node as usize].children[slot]);
            match child {
                Some(child) => node = child,
                None => return Err(LookupError::NoMatch(digits.to_string())),
            }
        }

        let words = &self.nodes[node as usize].words;
        if words.is_empty() {
            Err(LookupError::NoMatch(digits.to_string()))
        } else {
            Ok(words)
        }
    }

    /// Look up keypad input.
    ///
    /// Input containing spaces is split into tokens, each resolved in
    /// multi-token mode and rendered as a `[w1, w2]` list, then re-joined
    /// with single spaces. A single token yields its words newline-joined,
    /// or the raw list when `multi_token` is set.
    pub fn lookup(&self, input: &str, multi_token: bool) -> Result<T9Output, LookupError> {
        if input.contains(' ') {
            let rendered = input
                .split_whitespace()
                .map(|token| self.lookup(token, true).map(|out| out.to_string()))
                .collect::<Result<Vec<String>, LookupError>>()?;
            if rendered.is_empty() {
                return Err(LookupError::InvalidInput("empty keypad query".to_string()));
            }
            return Ok(T9Output::Text(rendered.join(" ")));
        }

        let words = self.resolve(input)?;
        if multi_token {
            Ok(T9Output::Words(words.to_vec()))
        } else {
            Ok(T9Output::Text(words.join("\n")))
        }
    }

    /// Number of words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
