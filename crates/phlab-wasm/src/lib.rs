// WASM bindings for the Puzzle Hunt Laboratory.
//
// Provides a `WasmLab` class exported via wasm-bindgen that wraps the `Lab`
// handle from phlab-solve. Structured results (bruteforce reports, grid
// matches, text statistics) are serialized to JavaScript values using
// serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const lab = new WasmLab(allWordsText, commonWordsText);
//   lab.anagram("tca", false);          // => ["cat", "act"] or null
//   lab.t9("4663", false);              // => "good\nhome\ngone"
//   lab.bruteforce("uryyb");            // => { results: [{ candidate: "hello", ... }], timedOut: false }
//   lab.cipher("Numbers", null, "Text", null, "8 5 12 12 15");  // => "hello"
//   lab.findWords("c.t", true);         // => ["cat"]
//   lab.gridSearch("xgood qqqqq", false, false);  // => [{ word: "good", ... }]
//   lab.analyze("hello");               // => { symbols: 5, entropy: 1.922, ... }
//   lab.convertBase("255", 10, 16);     // => "FF"

use std::time::Duration;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use phlab_core::{BruteforceResult, Key, LookupError};
use phlab_solve::cipher::Cipher;
use phlab_solve::grid::{GridMatch, GridOptions};
use phlab_solve::lab::Lab;
use phlab_solve::search::{SearchReport, VisitedScope};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of one bruteforce hit.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsResult {
    candidate: String,
    path: Vec<String>,
    depth: usize,
    validator: Option<String>,
}

/// Serializable representation of a bruteforce report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsReport {
    results: Vec<JsResult>,
    explored: usize,
    nodes: usize,
    timed_out: bool,
    text: String,
}

/// Serializable representation of a word found in a grid.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsGridMatch {
    word: String,
    x: usize,
    y: usize,
    orientation: String,
    rotation: i32,
    reversed: bool,
}

/// Serializable representation of a symbol frequency.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFrequency {
    symbol: String,
    frequency: f64,
}

/// Serializable representation of text statistics.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStatistics {
    symbols: usize,
    entropy: f64,
    frequencies: Vec<JsFrequency>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn result_to_js(r: BruteforceResult) -> JsResult {
    let validator = r.validator.map(|v| v.name);
    JsResult {
        candidate: r.candidate,
        path: r.path,
        depth: r.depth,
        validator,
    }
}

fn report_to_js(report: SearchReport) -> JsReport {
    let text = report.to_string();
    JsReport {
        explored: report.explored,
        nodes: report.nodes,
        timed_out: report.timed_out,
        results: report.results.into_iter().map(result_to_js).collect(),
        text,
    }
}

fn grid_match_to_js(m: GridMatch) -> JsGridMatch {
    JsGridMatch {
        orientation: m.orientation.to_string(),
        word: m.word,
        x: m.x,
        y: m.y,
        rotation: m.rotation,
        reversed: m.reversed,
    }
}

fn cipher_from_js(name: &str) -> Result<Cipher, JsError> {
    Cipher::from_name(name).ok_or_else(|| JsError::new(&format!("unknown cipher '{name}'")))
}

fn lookup_error_to_js(e: LookupError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmLab
// ============================================================================

/// Puzzle toolkit for WebAssembly.
///
/// Provides anagram and keypad lookups, the cipher pipeline, the transform
/// bruteforce search, and the text utilities.
#[wasm_bindgen]
pub struct WasmLab {
    lab: Lab,
}

#[wasm_bindgen]
impl WasmLab {
    /// Create a new WasmLab from newline-delimited word lists.
    ///
    /// - `all_words`: contents of `words_sorted.txt` (full word list)
    /// - `common_words`: contents of `words_popular.txt` (common words)
    #[wasm_bindgen(constructor)]
    pub fn new(all_words: &str, common_words: &str) -> Result<WasmLab, JsError> {
        if all_words.trim().is_empty() || common_words.trim().is_empty() {
            return Err(JsError::new("word lists must not be empty"));
        }
        Ok(WasmLab {
            lab: Lab::from_contents(all_words, common_words),
        })
    }

    /// Anagrams of `query` (spaces ignored, `?` for any letter).
    ///
    /// Returns null when nothing matches.
    pub fn anagram(&self, query: &str, common: bool) -> Result<Option<Vec<String>>, JsError> {
        self.lab.anagram(query, common).map_err(lookup_error_to_js)
    }

    /// Keypad lookup. Returns the words one per line, or one `[w1, w2]` list
    /// per line when several digit strings are given.
    pub fn t9(&self, digits: &str, common: bool) -> Result<String, JsError> {
        self.lab
            .t9(digits, common)
            .map(|out| out.to_string())
            .map_err(lookup_error_to_js)
    }

    /// Search chains of transforms for validated decodings of `input`.
    ///
    /// Returns an object with fields `results` (array of `candidate`, `path`,
    /// `depth`, `validator`), `explored`, `nodes`, `timedOut` and the
    /// printable `text`.
    pub fn bruteforce(&self, input: &str) -> Result<JsValue, JsError> {
        to_js(&report_to_js(self.lab.bruteforce(input)))
    }

    /// Decode `text` with one cipher and encode it with another.
    ///
    /// Keys are optional; a missing or non-numeric key means every key.
    pub fn cipher(
        &self,
        input: &str,
        input_key: Option<String>,
        output: &str,
        output_key: Option<String>,
        text: &str,
    ) -> Result<String, JsError> {
        self.lab
            .run_cipher(
                cipher_from_js(input)?,
                Key::parse(input_key.as_deref()),
                cipher_from_js(output)?,
                Key::parse(output_key.as_deref()),
                text,
            )
            .map_err(lookup_error_to_js)
    }

    /// Words matched in full by a case-insensitive regular expression.
    #[wasm_bindgen(js_name = "findWords")]
    pub fn find_words(&self, pattern: &str, common: bool) -> Result<Vec<String>, JsError> {
        self.lab
            .find_words(pattern, common)
            .map(|words| words.into_iter().map(str::to_string).collect())
            .map_err(lookup_error_to_js)
    }

    /// Common words hidden in the rows and columns of a letter grid.
    #[wasm_bindgen(js_name = "gridSearch")]
    pub fn grid_search(&self, grid: &str, rotate: bool, reverse: bool) -> Result<JsValue, JsError> {
        let options = GridOptions {
            rotate,
            reverse,
            ..GridOptions::default()
        };
        let matches = self
            .lab
            .grid_search(grid, &options)
            .map_err(lookup_error_to_js)?;
        let js_matches: Vec<JsGridMatch> = matches.into_iter().map(grid_match_to_js).collect();
        to_js(&js_matches)
    }

    /// Symbol frequencies and Shannon entropy of `text`.
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsError> {
        let stats = self.lab.analyze(text);
        to_js(&JsStatistics {
            symbols: stats.symbols,
            entropy: stats.entropy,
            frequencies: stats
                .frequencies
                .into_iter()
                .map(|(symbol, frequency)| JsFrequency {
                    symbol: symbol.to_string(),
                    frequency,
                })
                .collect(),
        })
    }

    /// Convert whitespace-separated numbers between bases 2-36.
    ///
    /// Returns "Invalid" when a number does not parse.
    #[wasm_bindgen(js_name = "convertBase")]
    pub fn convert_base(&self, input: &str, from: u32, to: u32) -> String {
        self.lab
            .convert_base(input, from, to)
            .unwrap_or_else(|_| "Invalid".to_string())
    }

    /// Names of the available ciphers.
    pub fn ciphers() -> Vec<String> {
        Cipher::ALL.iter().map(|c| c.name().to_string()).collect()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the number of chained transforms explored by `bruteforce`.
    #[wasm_bindgen(js_name = "setMaxDepth")]
    pub fn set_max_depth(&mut self, value: usize) {
        self.lab.set_max_depth(value);
    }

    /// Set the wall-clock budget of one `bruteforce` call, in milliseconds.
    #[wasm_bindgen(js_name = "setTimeoutMs")]
    pub fn set_timeout_ms(&mut self, value: u32) {
        self.lab.set_timeout(Duration::from_millis(u64::from(value)));
    }

    /// Set whether strings may be revisited on different branches of the
    /// search (true), or only once per search (false, the default).
    #[wasm_bindgen(js_name = "setBranchVisited")]
    pub fn set_branch_visited(&mut self, value: bool) {
        let scope = if value {
            VisitedScope::Branch
        } else {
            VisitedScope::Search
        };
        self.lab.set_visited_scope(scope);
    }
}
