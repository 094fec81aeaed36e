// Alphabet positions: `a` = 1 .. `z` = 26, space separated.

use phlab_core::character::{alphabet_position, letter_from_number};

/// Encode the ASCII letters of `text` as their alphabet positions.
/// Non-letters are dropped.
pub fn encode(text: &str) -> String {
    text.chars()
        .filter_map(alphabet_position)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode whitespace-separated numbers with the modulo-32 mapping.
///
/// Any token that is not an integer makes the whole decode empty.
pub fn decode(text: &str) -> String {
    let mut out = String::new();
    for token in text.split_whitespace() {
        match token.parse::<i64>() {
            Ok(n) => out.push(letter_from_number(n.rem_euclid(32) as u64)),
            Err(_) => return String::new(),
        }
    }
    out
}

/// Whether `text` consists of digits and whitespace, with at least one digit.
pub fn is_digit_text(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_letters_only() {
        assert_eq!(encode("Hello, World"), "8 5 12 12 15 23 15 18 12 4");
        assert_eq!(encode("123"), "");
    }

    #[test]
    fn decode_positions() {
        assert_eq!(decode("8 5 12 12 15"), "hello");
        assert_eq!(decode("4 9"), "di");
        assert_eq!(decode("3 22 4 9"), "cvdi");
    }

    #[test]
    fn decode_wraps_modulo_32() {
        assert_eq!(decode("35"), "c");
        assert_eq!(decode("-29"), "c");
    }

    #[test]
    fn decode_malformed_is_empty() {
        assert_eq!(decode("8 five 12"), "");
        assert_eq!(decode("1.5"), "");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn digit_text_detection() {
        assert!(is_digit_text("3 22 4 9"));
        assert!(!is_digit_text("   "));
        assert!(!is_digit_text("3a"));
    }
}
