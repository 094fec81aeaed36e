// Cipher module: a closed set of codecs behind one encode/decode interface.
//
// Every variant turns bytes into ciphertext (`encode`) and ciphertext back
// into bytes (`decode`). Keyed variants broadcast over every key when given
// `Key::All`; all variants degrade to empty output on malformed input
// instead of failing.

pub mod caesar;
pub mod hex;
pub mod keypad;
pub mod morse;
pub mod multitap;
pub mod numbers;
pub mod tap;

use std::fmt;

use phlab_core::{Key, LookupError};

/// Maximum input length accepted by [`run_cipher`].
pub const MAX_PIPELINE_INPUT: usize = 3000;

/// Maximum input length when the input cipher broadcasts over all keys.
pub const MAX_BROADCAST_INPUT: usize = 300;

/// Output of [`Cipher::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    One(String),
    /// One entry per key when broadcasting.
    Many(Vec<String>),
}

impl Encoded {
    /// Flatten to text, one entry per line.
    pub fn into_text(self) -> String {
        match self {
            Encoded::One(s) => s,
            Encoded::Many(v) => v.join("\n"),
        }
    }
}

/// Output of [`Cipher::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    One(Vec<u8>),
    /// One entry per key when broadcasting.
    Many(Vec<Vec<u8>>),
}

impl Decoded {
    /// Flatten to bytes, one entry per line.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Decoded::One(b) => b,
            Decoded::Many(v) => v.join(&b'\n'),
        }
    }

    /// Flatten to text, replacing invalid UTF-8.
    pub fn into_text(self) -> String {
        String::from_utf8_lossy(&self.into_bytes()).into_owned()
    }
}

/// The available ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cipher {
    /// Plain UTF-8 text.
    Text,
    /// Letters as alphabet positions (`a` = 1), space separated.
    Numbers,
    /// Alphabet rotation.
    Caesar,
    /// International Morse code.
    Morse,
    /// Polybius-square tap code (`k` shares `c`'s cell).
    Tap,
    /// Multi-tap phone keypad (`hello` = `44 33 555 555 666`).
    Sms,
    /// Bytes as hexadecimal pairs.
    Hex,
    /// Single-press phone keypad digits (`hello` = `43556`).
    T9,
}

impl Cipher {
    /// Every cipher, in presentation order.
    pub const ALL: [Cipher; 8] = [
        Cipher::Text,
        Cipher::Numbers,
        Cipher::Caesar,
        Cipher::Morse,
        Cipher::Tap,
        Cipher::Sms,
        Cipher::Hex,
        Cipher::T9,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Cipher::Text => "Text",
            Cipher::Numbers => "Numbers",
            Cipher::Caesar => "Caesar",
            Cipher::Morse => "Morse",
            Cipher::Tap => "Tap",
            Cipher::Sms => "SMS",
            Cipher::Hex => "Hex",
            Cipher::T9 => "T9",
        }
    }

    /// Find a cipher by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Cipher> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Whether the cipher uses its key (and broadcasts on `Key::All`).
    pub fn is_keyed(self) -> bool {
        matches!(self, Cipher::Caesar)
    }

    /// Encode bytes into ciphertext.
    pub fn encode(self, data: &[u8], key: Key) -> Encoded {
        let text = String::from_utf8_lossy(data);
        match self {
            Cipher::Text => Encoded::One(text.into_owned()),
            Cipher::Numbers => Encoded::One(numbers::encode(&text)),
            Cipher::Caesar => caesar::encode(&text, key),
            Cipher::Morse => Encoded::One(morse::encode(&text)),
            Cipher::Tap => Encoded::One(tap::encode(&text)),
            Cipher::Sms => Encoded::One(multitap::encode(&text)),
            Cipher::Hex => Encoded::One(hex::encode(data)),
            Cipher::T9 => Encoded::One(keypad::encode(&text)),
        }
    }

    /// Decode ciphertext into bytes.
    pub fn decode(self, text: &str, key: Key) -> Decoded {
        match self {
            Cipher::Text => Decoded::One(text.as_bytes().to_vec()),
            Cipher::Numbers => Decoded::One(numbers::decode(text).into_bytes()),
            Cipher::Caesar => caesar::decode(text, key),
            Cipher::Morse => Decoded::One(morse::decode(text).into_bytes()),
            Cipher::Tap => Decoded::One(tap::decode(text).into_bytes()),
            Cipher::Sms => Decoded::One(multitap::decode(text).into_bytes()),
            Cipher::Hex => Decoded::One(hex::decode(text)),
            Cipher::T9 => Decoded::One(keypad::decode(text).into_bytes()),
        }
    }

    /// Cheap check whether `text` has the alphabet of this cipher's
    /// ciphertext. Used to skip decodes that could only produce noise.
    pub fn accepts_ciphertext(self, text: &str) -> bool {
        match self {
            Cipher::Text | Cipher::Caesar => true,
            Cipher::Numbers | Cipher::Sms | Cipher::T9 => numbers::is_digit_text(text),
            Cipher::Morse => morse::is_morse_text(text),
            Cipher::Tap => tap::is_tap_text(text),
            Cipher::Hex => hex::is_hex_text(text),
        }
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode `text` with one cipher and re-encode the result with another.
///
/// Broadcast results are joined with newlines between the two stages.
/// Overlong input is rejected: more than 3000 characters, or more than 300
/// when a keyed input cipher broadcasts over every key.
pub fn run_cipher(
    input: Cipher,
    input_key: Key,
    output: Cipher,
    output_key: Key,
    text: &str,
) -> Result<String, LookupError> {
    let len = text.chars().count();
    if len > MAX_PIPELINE_INPUT
        || (len > MAX_BROADCAST_INPUT && input.is_keyed() && input_key == Key::All)
    {
        return Err(LookupError::InvalidInput("Input too long".to_string()));
    }

    let data = input.decode(text, input_key).into_bytes();
    Ok(output.encode(&data, output_key).into_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for cipher in Cipher::ALL {
            assert_eq!(Cipher::from_name(cipher.name()), Some(cipher));
        }
        assert_eq!(Cipher::from_name("sms"), Some(Cipher::Sms));
        assert_eq!(Cipher::from_name(" caesar "), Some(Cipher::Caesar));
        assert_eq!(Cipher::from_name("vigenere"), None);
    }

    #[test]
    fn only_caesar_is_keyed() {
        let keyed: Vec<Cipher> = Cipher::ALL.into_iter().filter(|c| c.is_keyed()).collect();
        assert_eq!(keyed, vec![Cipher::Caesar]);
    }

    #[test]
    fn text_cipher_is_identity() {
        assert_eq!(
            Cipher::Text.decode("hello", Key::All),
            Decoded::One(b"hello".to_vec())
        );
        assert_eq!(
            Cipher::Text.encode(b"hello", Key::All),
            Encoded::One("hello".to_string())
        );
    }

    #[test]
    fn pipeline_numbers_to_text() {
        let out = run_cipher(Cipher::Numbers, Key::All, Cipher::Text, Key::All, "8 5 12 12 15");
        assert_eq!(out.unwrap(), "hello");
    }

    #[test]
    fn pipeline_text_to_sms() {
        let out = run_cipher(Cipher::Text, Key::All, Cipher::Sms, Key::All, "hi");
        assert_eq!(out.unwrap(), "44 444");
    }

    #[test]
    fn pipeline_caesar_with_maximal_key() {
        let out = run_cipher(
            Cipher::Caesar,
            Key::parse(Some("2147483647")),
            Cipher::Text,
            Key::All,
            "bcd",
        );
        assert_eq!(out.unwrap(), "yza");
    }

    #[test]
    fn pipeline_caesar_broadcast_joins_lines() {
        let out = run_cipher(Cipher::Caesar, Key::All, Cipher::Text, Key::All, "a").unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "0: a");
        assert_eq!(lines[1], "1: b");
    }

    #[test]
    fn pipeline_rejects_overlong_input() {
        let long = "a".repeat(MAX_PIPELINE_INPUT + 1);
        assert!(run_cipher(Cipher::Text, Key::All, Cipher::Text, Key::All, &long).is_err());

        let medium = "a".repeat(MAX_BROADCAST_INPUT + 1);
        assert!(run_cipher(Cipher::Caesar, Key::All, Cipher::Text, Key::All, &medium).is_err());
        assert!(
            run_cipher(Cipher::Caesar, Key::Specific(1), Cipher::Text, Key::All, &medium).is_ok()
        );
        assert!(run_cipher(Cipher::Numbers, Key::All, Cipher::Text, Key::All, &medium).is_ok());
    }

    #[test]
    fn decoded_flattening() {
        let d = Decoded::Many(vec![b"ab".to_vec(), b"cd".to_vec()]);
        assert_eq!(d.into_text(), "ab\ncd");
        let e = Encoded::Many(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(e.into_text(), "x\ny");
    }
}
