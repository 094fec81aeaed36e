// Multi-tap phone keypad: a letter is its key pressed once per position
// within the key's group (`c` = `222`). `0` stands for a space.

use phlab_core::character::{keypad_digit, keypad_letters, keypad_presses};

/// Encode letters as repeated key presses, space separated. Spaces become
/// `0`; other characters are dropped.
pub fn encode(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| {
            if c == ' ' {
                return Some("0".to_string());
            }
            let digit = keypad_digit(c)?;
            let presses = keypad_presses(c)?;
            Some(char::from(b'0' + digit).to_string().repeat(presses))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode space-separated press groups.
///
/// A group must repeat a single digit; presses beyond the group size wrap
/// around as on a real phone. Groups mixing digits or using `1` decode to
/// `?`. Non-digit input decodes to nothing.
pub fn decode(text: &str) -> String {
    if !super::numbers::is_digit_text(text) {
        return String::new();
    }
    text.split_whitespace().map(decode_group).collect()
}

fn decode_group(group: &str) -> char {
    let mut chars = group.chars();
    let Some(first) = chars.next() else {
        return '?';
    };
    if chars.any(|c| c != first) {
        return '?';
    }
    if first == '0' {
        return ' ';
    }
    let letters = first
        .to_digit(10)
        .map(|d| keypad_letters(d as u8))
        .unwrap_or("");
    if letters.is_empty() {
        return '?';
    }
    let presses = group.chars().count();
    letters
        .chars()
        .nth((presses - 1) % letters.len())
        .unwrap_or('?')
}
