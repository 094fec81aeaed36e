// Symbol frequency analysis and Shannon entropy.

use std::fmt;

use hashbrown::HashMap;

/// Frequency profile of a text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStatistics {
    /// Each symbol with its share of all counted symbols, most frequent
    /// first (ties in symbol order).
    pub frequencies: Vec<(char, f64)>,
    /// Number of symbols counted.
    pub symbols: usize,
    /// Shannon entropy of the distribution, in bits.
    pub entropy: f64,
}

impl TextStatistics {
    pub fn is_empty(&self) -> bool {
        self.symbols == 0
    }

    /// Frequency of `symbol` (case-folded), or `0.0` if it never occurs.
    pub fn frequency(&self, symbol: char) -> f64 {
        let symbol = fold(symbol);
        self.frequencies
            .iter()
            .find(|(c, _)| *c == symbol)
            .map_or(0.0, |(_, f)| *f)
    }
}

impl fmt::Display for TextStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "symbols: {}", self.symbols)?;
        writeln!(f, "entropy: {:.3} bits", self.entropy)?;
        for (symbol, freq) in &self.frequencies {
            writeln!(f, "{symbol}  {:6.2}%", freq * 100.0)?;
        }
        Ok(())
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Count letters and digits, case-folded. Sorted by count descending, then
/// by symbol.
pub fn symbol_counts(text: &str) -> Vec<(char, usize)> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars().filter(|c| c.is_alphanumeric()) {
        *counts.entry(fold(c)).or_insert(0) += 1;
    }
    let mut counts: Vec<(char, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    counts
}

/// Shannon entropy (base 2) of a probability distribution. Zero
/// probabilities contribute nothing.
pub fn entropy(probabilities: &[f64]) -> f64 {
    -probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.log2())
        .sum::<f64>()
}

/// Normalised symbol frequencies and their entropy. Text without letters or
/// digits yields empty statistics.
pub fn analyze(text: &str) -> TextStatistics {
    let counts = symbol_counts(text);
    let symbols: usize = counts.iter().map(|(_, n)| n).sum();
    if symbols == 0 {
        return TextStatistics::default();
    }
    let frequencies: Vec<(char, f64)> = counts
        .into_iter()
        .map(|(c, n)| (c, n as f64 / symbols as f64))
        .collect();
    let probabilities: Vec<f64> = frequencies.iter().map(|(_, p)| *p).collect();
    TextStatistics {
        entropy: entropy(&probabilities),
        frequencies,
        symbols,
    }
}
