// Tap code: a 5x5 Polybius square without `k`, which shares `c`'s cell.

/// Square rows; cell `(row, col)` is written as the two digits `row col`.
const SQUARE: [&str; 5] = ["abcde", "fghij", "lmnop", "qrstu", "vwxyz"];

/// Marker written for characters that have no cell.
const UNKNOWN_CELL: &str = "??";

fn cell(c: char) -> Option<(usize, usize)> {
    let c = if c == 'k' { 'c' } else { c };
    SQUARE
        .iter()
        .enumerate()
        .find_map(|(row, letters)| letters.find(c).map(|col| (row + 1, col + 1)))
}

fn letter(row: u32, col: u32) -> Option<char> {
    if !(1..=5).contains(&row) || !(1..=5).contains(&col) {
        return None;
    }
    SQUARE[row as usize - 1].chars().nth(col as usize - 1)
}

/// Encode every character as a two-digit cell, space separated.
/// Characters outside the square become `??`.
pub fn encode(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match cell(c) {
            Some((row, col)) => format!("{row}{col}"),
            None => UNKNOWN_CELL.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode tap pairs.
///
/// Pairs are space separated, or a contiguous digit string read two at a
/// time. An unspaced string of odd length decodes to nothing; unknown pairs
/// decode to `?`.
pub fn decode(text: &str) -> String {
    let text = text.trim();
    let pairs: Vec<String> = if text.contains(' ') {
        text.split_whitespace().map(str::to_string).collect()
    } else {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() % 2 != 0 {
            return String::new();
        }
        chars.chunks(2).map(|p| p.iter().collect()).collect()
    };

    pairs
        .iter()
        .map(|pair| {
            let mut digits = pair.chars().map(|c| c.to_digit(10));
            match (digits.next(), digits.next(), digits.next()) {
                (Some(Some(row)), Some(Some(col)), None) => letter(row, col).unwrap_or('?'),
                _ => '?',
            }
        })
        .collect()
}

/// Whether `text` uses only tap digits `1`-`5` and whitespace.
pub fn is_tap_text(text: &str) -> bool {
    text.chars().any(|c| ('1'..='5').contains(&c))
        && text
            .chars()
            .all(|c| ('1'..='5').contains(&c) || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_letters() {
        assert_eq!(encode("hello"), "23 15 31 31 34");
        assert_eq!(encode("Kz"), "13 55");
        assert_eq!(encode("a b"), "11 ?? 12");
    }

    #[test]
    fn decode_spaced_and_unspaced() {
        assert_eq!(decode("23 15 31 31 34"), "hello");
        assert_eq!(decode("2315313134"), "hello");
    }

    #[test]
    fn k_decodes_as_c() {
        assert_eq!(decode("13"), "c");
    }

    #[test]
    fn decode_odd_unspaced_is_empty() {
        assert_eq!(decode("231"), "");
    }

    #[test]
    fn unknown_pairs_become_question_marks() {
        assert_eq!(decode("23 66 1"), "h??");
    }

    #[test]
    fn tap_text_detection() {
        assert!(is_tap_text("23 15"));
        assert!(!is_tap_text("23 16"));
        assert!(!is_tap_text("  "));
    }
}
