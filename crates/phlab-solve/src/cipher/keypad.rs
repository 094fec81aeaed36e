// Single-press phone keypad (T9): each letter is the digit of its key.
//
// Without a dictionary the digits are ambiguous, so decoding yields a
// character-class pattern (`43` -> `[ghi][def]`) suitable for a dictionary
// regex search. Dictionary-backed decoding lives in the keypad trie.

use phlab_core::character::{keypad_digit, keypad_letters};

/// Encode letters as keypad digits. Whitespace runs become one space;
/// other characters are dropped.
pub fn encode(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(keypad_digit)
                .map(|d| char::from(b'0' + d))
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode keypad digits into a letter-class pattern. Digits without
/// letters become `.`; non-digit input decodes to nothing.
pub fn decode(text: &str) -> String {
    if !super::numbers::is_digit_text(text) {
        return String::new();
    }
    text.split_whitespace()
        .map(|token| {
            token
                .chars()
                .map(|c| {
                    let letters = c.to_digit(10).map(|d| keypad_letters(d as u8)).unwrap_or("");
                    if letters.is_empty() {
                        ".".to_string()
                    } else {
                        format!("[{letters}]")
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_words() {
        assert_eq!(encode("Hello world"), "43556 96753");
        assert_eq!(encode("it's"), "487");
    }

    #[test]
    fn decode_to_pattern() {
        assert_eq!(decode("43"), "[ghi][def]");
        assert_eq!(decode("2 10"), "[abc] ..");
        assert_eq!(decode("abc"), "");
    }
}
