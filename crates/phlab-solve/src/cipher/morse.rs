// International Morse code.
//
// Letters are separated by spaces and words by " / ".

const TABLE: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    ('\'', ".----."),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    (':', "---..."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('@', ".--.-."),
];

const WORD_SEPARATOR: &str = "/";

fn code_for(c: char) -> Option<&'static str> {
    TABLE.iter().find(|(k, _)| *k == c).map(|(_, code)| *code)
}

fn char_for(code: &str) -> Option<char> {
    TABLE.iter().find(|(_, m)| *m == code).map(|(k, _)| *k)
}

/// Normalise the dot and dash look-alikes people paste into puzzles.
fn normalize(c: char) -> char {
    match c {
        '\u{00B7}' | '\u{2022}' | '*' => '.',
        '_' | '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
        '|' => '/',
        other => other,
    }
}

/// Encode text. Characters without a code are dropped.
pub fn encode(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .flat_map(char::to_lowercase)
                .filter_map(code_for)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(&format!(" {WORD_SEPARATOR} "))
}

/// Decode Morse. `/` separates words; unknown codes decode to `?`.
///
/// Text containing anything but dots, dashes, separators and whitespace
/// decodes to nothing.
pub fn decode(text: &str) -> String {
    if !is_morse_text(text) {
        return String::new();
    }
    let normalized: String = text.chars().map(normalize).collect();
    normalized
        .split(WORD_SEPARATOR)
        .map(|word| {
            word.split_whitespace()
                .map(|code| char_for(code).unwrap_or('?'))
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `text` consists only of Morse symbols, with at least one dot or
/// dash.
pub fn is_morse_text(text: &str) -> bool {
    let mut has_symbol = false;
    for c in text.chars().map(normalize) {
        match c {
            '.' | '-' => has_symbol = true,
            '/' => {}
            c if c.is_whitespace() => {}
            _ => return false,
        }
    }
    has_symbol
}
