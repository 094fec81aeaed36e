// phlab-find: Regular-expression search over the word lists.
//
// The pattern must match a whole word and is case-insensitive.
//
// Usage:
//   phlab-find [-d DICT_PATH] [-c] PATTERN
//
// Options:
//   -d, --dict-path PATH   Directory containing words_sorted.txt and words_popular.txt
//   -c, --common           Search only the common-words list
//   -h, --help             Print help

use std::io::{self, Write};

fn main() {
    phlab_cli::init_logger();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = phlab_cli::parse_dict_path(&args);
    let (common, args) = phlab_cli::take_flag(&args, "--common", "-c");

    if phlab_cli::wants_help(&args) || args.is_empty() {
        println!("phlab-find: Find dictionary words matching a regular expression.");
        println!();
        println!("Usage: phlab-find [-d DICT_PATH] [-c] PATTERN");
        println!();
        println!("Example: phlab-find 'c.t'  (cat, cot, cut)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing the word lists");
        println!("  -c, --common           Search only the common-words list");
        println!("  -h, --help             Print this help");
        return;
    }

    let pattern = args.join(" ");
    let lab = phlab_cli::load_lab(dict_path.as_deref()).unwrap_or_else(|e| phlab_cli::fatal(&e));
    let words = lab
        .find_words(&pattern, common)
        .unwrap_or_else(|e| phlab_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if words.is_empty() {
        let _ = writeln!(out, "No results found for '{pattern}'");
        return;
    }
    let _ = writeln!(out, "{} words found:\n", words.len());
    for word in words {
        let _ = writeln!(out, "{word}");
    }
}
