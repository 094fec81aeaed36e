// Built-in validators: dictionary membership, partial words, anagrams and
// the checksum/shape checks for identifiers.

use std::sync::Arc;

use phlab_index::{AnagramIndex, WordList};

use super::Validator;

/// Separators splitting a candidate into parts for [`PartWord`].
const PART_SEPARATORS: &[char] = &['-', ':', '.', ',', ';', '_'];

/// Minimum letter count of a dictionary part accepted by [`PartWord`].
const MIN_PART_LEN: usize = 3;

/// Minimum letter count for [`AnagramOf`].
const MIN_ANAGRAM_LEN: usize = 4;

// ---------------------------------------------------------------------------
// Word
// ---------------------------------------------------------------------------

/// The whole candidate (trimmed, lowercased) is a dictionary word.
pub struct Word;

impl Validator for Word {
    fn name(&self) -> &str {
        "word"
    }

    fn accepts(&self, candidate: &str, dictionary: &WordList) -> bool {
        let word = candidate.trim().to_lowercase();
        !word.is_empty() && dictionary.contains(&word)
    }
}

// ---------------------------------------------------------------------------
// PartWord
// ---------------------------------------------------------------------------

/// Some part of the candidate is a dictionary word of at least three
/// letters.
///
/// Parts are split on spaces and on `- : . , ; _`, then reduced to their
/// lowercase ASCII letters. A candidate without separators is checked as a
/// whole.
pub struct PartWord;

fn clean_part(part: &str) -> String {
    part.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

impl Validator for PartWord {
    fn name(&self) -> &str {
        "part word"
    }

    fn accepts(&self, candidate: &str, dictionary: &WordList) -> bool {
        let mut parts: Vec<String> = Vec::new();
        if candidate.contains(' ') {
            parts.extend(candidate.split(' ').map(clean_part));
        }
        if candidate.contains(PART_SEPARATORS) {
            parts.extend(
                candidate
                    .split(|c: char| c == ' ' || PART_SEPARATORS.contains(&c))
                    .map(clean_part),
            );
        }
        if parts.is_empty() {
            parts.push(candidate.to_string());
        }
        parts
            .iter()
            .filter(|p| p.chars().count() >= MIN_PART_LEN)
            .any(|p| dictionary.contains(p))
    }
}

// ---------------------------------------------------------------------------
// AnagramOf
// ---------------------------------------------------------------------------

/// The candidate's letters rearrange into a dictionary word.
///
/// Only purely alphabetic candidates of at least four letters qualify.
pub struct AnagramOf {
    index: Arc<AnagramIndex>,
}

impl AnagramOf {
    pub fn new(index: Arc<AnagramIndex>) -> Self {
        Self { index }
    }
}

impl Validator for AnagramOf {
    fn name(&self) -> &str {
        "anagram"
    }

    fn accepts(&self, candidate: &str, _dictionary: &WordList) -> bool {
        candidate.chars().count() >= MIN_ANAGRAM_LEN
            && candidate.chars().all(|c| c.is_ascii_alphabetic())
            && self.index.get(candidate).is_some()
    }
}

// ---------------------------------------------------------------------------
// Isbn
// ---------------------------------------------------------------------------

/// The candidate's digits (and a trailing `X`) form a valid ISBN-10 or
/// ISBN-13.
pub struct Isbn;

/// Validate an ISBN-10 or ISBN-13, ignoring every character other than
/// digits and `x`/`X`.
pub fn is_isbn(s: &str) -> bool {
    let digits: Vec<u32> = s
        .chars()
        .filter_map(|c| match c {
            'x' | 'X' => Some(10),
            c => c.to_digit(10),
        })
        .collect();

    match digits.len() {
        10 => {
            if digits[..9].contains(&10) {
                return false;
            }
            let sum: u32 = digits
                .iter()
                .enumerate()
                .map(|(i, d)| (10 - i as u32) * d)
                .sum();
            sum % 11 == 0
        }
        13 => {
            if digits.contains(&10) {
                return false;
            }
            let sum: u32 = digits
                .iter()
                .enumerate()
                .map(|(i, d)| if i % 2 == 0 { *d } else { 3 * d })
                .sum();
            sum % 10 == 0
        }
        _ => false,
    }
}

impl Validator for Isbn {
    fn name(&self) -> &str {
        "isbn"
    }

    fn accepts(&self, candidate: &str, _dictionary: &WordList) -> bool {
        is_isbn(candidate)
    }
}

// ---------------------------------------------------------------------------
// PhoneNumber
// ---------------------------------------------------------------------------

/// The candidate's digits start with the German country code `49`.
pub struct PhoneNumber;

impl Validator for PhoneNumber {
    fn name(&self) -> &str {
        "phone number"
    }

    fn accepts(&self, candidate: &str, _dictionary: &WordList) -> bool {
        let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
        digits.starts_with("49")
    }
}

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// The candidate has the shape of a geographic coordinate: a latitude
/// hemisphere (`N`/`S`), a longitude hemisphere (`E`/`W`) and a digit.
pub struct Coordinate;

impl Validator for Coordinate {
    fn name(&self) -> &str {
        "coordinate"
    }

    fn accepts(&self, candidate: &str, _dictionary: &WordList) -> bool {
        candidate.contains(['N', 'S'])
            && candidate.contains(['E', 'W'])
            && candidate.chars().any(|c| c.is_ascii_digit())
    }
}
