// Character classification, keypad mapping and anagram keys.

// ---------------------------------------------------------------------------
// Wildcards
// ---------------------------------------------------------------------------

/// Placeholder character accepted by anagram queries and counted by the
/// search filters.
pub const WILDCARD: char = '?';

/// Search candidates carrying this many wildcards or more are discarded.
pub const MAX_SEARCH_WILDCARDS: usize = 5;

/// Check whether a character is the wildcard placeholder.
pub fn is_wildcard(c: char) -> bool {
    c == WILDCARD
}

/// Count the wildcard placeholders in a string.
pub fn count_wildcards(s: &str) -> usize {
    s.chars().filter(|&c| is_wildcard(c)).count()
}

/// Returns `true` if at least one character of `s` is alphanumeric.
pub fn has_alphanumeric(s: &str) -> bool {
    s.chars().any(char::is_alphanumeric)
}

// ---------------------------------------------------------------------------
// Telephone keypad
// ---------------------------------------------------------------------------

/// Lowest keypad digit that carries letters.
pub const FIRST_LETTER_DIGIT: u8 = 2;

/// Number of keypad digits that carry letters (2 through 9).
pub const LETTER_DIGIT_COUNT: usize = 8;

/// Letter groups per keypad digit, starting at digit 2.
///
/// `q` and `z` sit on 7 and 9 together with three other letters each.
pub const KEYPAD_LETTERS: [&str; LETTER_DIGIT_COUNT] =
    ["abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz"];

/// Keypad digit for each letter `a`..=`z`.
const DIGIT_BY_LETTER: [u8; 26] = [
    2, 2, 2, // a b c
    3, 3, 3, // d e f
    4, 4, 4, // g h i
    5, 5, 5, // j k l
    6, 6, 6, // m n o
    7, 7, 7, 7, // p q r s
    8, 8, 8, // t u v
    9, 9, 9, 9, // w x y z
];

/// Map a letter to its telephone keypad digit.
///
/// Uppercase letters are folded. Returns `None` for anything outside `a`..=`z`.
pub fn keypad_digit(c: char) -> Option<u8> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(DIGIT_BY_LETTER[(lower as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Position (1-based) of a letter within its keypad group, i.e. the number of
/// presses needed on a multi-tap phone.
pub fn keypad_presses(c: char) -> Option<usize> {
    let digit = keypad_digit(c)?;
    let group = KEYPAD_LETTERS[(digit - FIRST_LETTER_DIGIT) as usize];
    let lower = c.to_ascii_lowercase();
    group.chars().position(|g| g == lower).map(|p| p + 1)
}

/// Letters printed on a keypad digit. Empty for digits without letters.
pub fn keypad_letters(digit: u8) -> &'static str {
    if (FIRST_LETTER_DIGIT..FIRST_LETTER_DIGIT + LETTER_DIGIT_COUNT as u8).contains(&digit) {
        KEYPAD_LETTERS[(digit - FIRST_LETTER_DIGIT) as usize]
    } else {
        ""
    }
}

/// Slot of a digit character among the eight letter-carrying digits.
///
/// `'2'` maps to slot 0, `'9'` to slot 7. Digits `0` and `1` and any
/// non-digit return `None`.
pub fn digit_slot(c: char) -> Option<usize> {
    let d = c.to_digit(10)? as u8;
    if d >= FIRST_LETTER_DIGIT {
        Some((d - FIRST_LETTER_DIGIT) as usize)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Anagram keys
// ---------------------------------------------------------------------------

/// Canonical anagram key: the lowercased characters sorted ascending.
///
/// Two words are anagrams of each other exactly when their keys are equal.
pub fn canonical_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Alphabet positions
// ---------------------------------------------------------------------------

/// Alphabet position modulo 32 (`a`/`A` = 1 .. `z`/`Z` = 26).
///
/// Works for both cases because ASCII upper and lower case letters differ by
/// 32. Returns `None` for non-letters.
pub fn alphabet_position(c: char) -> Option<u32> {
    if c.is_ascii_alphabetic() {
        Some(c as u32 % 32)
    } else {
        None
    }
}

/// Letter for a number using the modulo-32 mapping (`1` = `a`, `26` = `z`).
///
/// Values 27..=31 and 0 wrap onto the characters following `z` and preceding
/// `a` (`{|}~` and backtick), exactly as the arithmetic dictates.
pub fn letter_from_number(n: u64) -> char {
    char::from((n % 32) as u8 + 96)
}
