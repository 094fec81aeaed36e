// Bytes as hexadecimal pairs.

/// Encode bytes as lowercase hex pairs separated by spaces.
pub fn encode(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode hex digits (whitespace ignored) into bytes.
///
/// An odd number of digits or a non-hex character yields empty output.
pub fn decode(text: &str) -> Vec<u8> {
    let digits: Vec<u8> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .unwrap_or_default();
    if digits.len() % 2 != 0 {
        return Vec::new();
    }
    digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect()
}

/// Whether `text` is an even-length run of hex digits (whitespace ignored)
/// containing at least one digit `0`-`9`.
///
/// The digit requirement keeps plain words such as `face` from being read
/// as hex.
pub fn is_hex_text(text: &str) -> bool {
    let mut count = 0usize;
    let mut has_decimal = false;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        if !c.is_ascii_hexdigit() {
            return false;
        }
        has_decimal |= c.is_ascii_digit();
        count += 1;
    }
    count > 0 && count % 2 == 0 && has_decimal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_pairs() {
        assert_eq!(encode(b"Hi!"), "48 69 21");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn decode_with_and_without_spaces() {
        assert_eq!(decode("48 69 21"), b"Hi!");
        assert_eq!(decode("486921"), b"Hi!");
        assert_eq!(decode("4A4b"), b"JK");
    }

    #[test]
    fn decode_malformed_is_empty() {
        assert!(decode("486").is_empty());
        assert!(decode("zz").is_empty());
    }

    #[test]
    fn hex_text_detection() {
        assert!(is_hex_text("68 65 6c 6c 6f"));
        assert!(!is_hex_text("face"));
        assert!(!is_hex_text("123"));
        assert!(!is_hex_text("12 g4"));
        assert!(!is_hex_text(""));
    }
}
