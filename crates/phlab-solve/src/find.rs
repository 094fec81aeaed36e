// Regular-expression search over a word list.

use fancy_regex::Regex;
use phlab_core::LookupError;
use phlab_index::WordList;

/// Compile `pattern` so that it matches whole words, ignoring case.
pub fn compile_pattern(pattern: &str) -> Result<Regex, LookupError> {
    Regex::new(&format!("(?i)^(?:{pattern})$"))
        .map_err(|e| LookupError::InvalidInput(format!("bad pattern '{pattern}': {e}")))
}

/// Words of `words` matched in full by `pattern`, in list order.
///
/// Words on which the matcher gives up (backtracking limit) count as
/// non-matches.
pub fn find_words<'a>(pattern: &str, words: &'a WordList) -> Result<Vec<&'a str>, LookupError> {
    let regex = compile_pattern(pattern)?;
    Ok(words
        .iter()
        .filter(|w| regex.is_match(w).unwrap_or(false))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> WordList {
        WordList::from_words(["cat", "coat", "scat", "cot", "dog", "deed"])
    }

    #[test]
    fn full_match_only() {
        let w = words();
        assert_eq!(find_words("c.t", &w).unwrap(), vec!["cat", "cot"]);
        assert_eq!(find_words("c.*t", &w).unwrap(), vec!["cat", "coat", "cot"]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(find_words("DOG", &words()).unwrap(), vec!["dog"]);
    }

    #[test]
    fn alternation_is_anchored() {
        assert_eq!(find_words("dog|cat", &words()).unwrap(), vec!["cat", "dog"]);
    }

    #[test]
    fn backreferences() {
        assert_eq!(find_words(r"d(.)\1d", &words()).unwrap(), vec!["deed"]);
    }

    #[test]
    fn bad_pattern_is_invalid_input() {
        assert!(matches!(
            find_words("(", &words()),
            Err(LookupError::InvalidInput(_))
        ));
    }
}
