// Caesar alphabet rotation.
//
// Decoding with key `k` rotates letters forward by `k`; encoding rotates
// them back. ASCII letters come out lowercase; everything else is kept.

use phlab_core::Key;
use phlab_core::character::alphabet_position;

use super::{Decoded, Encoded};

/// Number of distinct rotations.
pub const SHIFTS: i32 = 26;

/// Rotate every ASCII letter forward by `shift` (negative rotates back).
pub fn shift_text(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(SHIFTS);
    text.chars().map(|c| shift_char(c, shift)).collect()
}

fn shift_char(c: char, shift: i32) -> char {
    match alphabet_position(c) {
        Some(n) => {
            let rotated = (n as i32 - 1 + shift).rem_euclid(SHIFTS) + 1;
            char::from(rotated as u8 + 96)
        }
        None => c,
    }
}

/// Encode: rotate back by the key, or list all 26 rotations as
/// `"{shift}: {text}"`.
pub fn encode(text: &str, key: Key) -> Encoded {
    match key {
        Key::Specific(k) => Encoded::One(shift_text(text, -k.rem_euclid(SHIFTS))),
        Key::All => Encoded::Many(
            (0..SHIFTS)
                .map(|shift| format!("{shift}: {}", shift_text(text, -shift)))
                .collect(),
        ),
    }
}

/// Decode: rotate forward by the key, or list all 26 rotations as
/// `"{shift}: {text}"`.
pub fn decode(text: &str, key: Key) -> Decoded {
    match key {
        Key::Specific(k) => Decoded::One(shift_text(text, k).into_bytes()),
        Key::All => Decoded::Many(
            (0..SHIFTS)
                .map(|shift| format!("{shift}: {}", shift_text(text, shift)).into_bytes())
                .collect(),
        ),
    }
}
