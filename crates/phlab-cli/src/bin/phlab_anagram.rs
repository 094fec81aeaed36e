// phlab-anagram: Anagram lookup against the word lists.
//
// Each argument (or each stdin line) is one query. Spaces inside a query are
// ignored and `?` stands for any letter.
//
// Usage:
//   phlab-anagram [-d DICT_PATH] [-c] [QUERY...]
//
// Options:
//   -d, --dict-path PATH   Directory containing words_sorted.txt and words_popular.txt
//   -c, --common           Search only the common-words list
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use phlab_solve::lab::Lab;

fn print_anagrams(lab: &Lab, query: &str, common: bool, out: &mut impl Write) {
    match lab.anagram(query, common) {
        Ok(Some(words)) => {
            let _ = writeln!(out, "{} results found:\n", words.len());
            for word in &words {
                let _ = writeln!(out, "{word}");
            }
        }
        Ok(None) => {
            let _ = writeln!(out, "No results found for '{query}'");
        }
        Err(e) => {
            let _ = writeln!(out, "{query}: {e}");
        }
    }
}

fn main() {
    phlab_cli::init_logger();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = phlab_cli::parse_dict_path(&args);
    let (common, args) = phlab_cli::take_flag(&args, "--common", "-c");

    if phlab_cli::wants_help(&args) {
        println!("phlab-anagram: Find dictionary words made of the given letters.");
        println!();
        println!("Usage: phlab-anagram [-d DICT_PATH] [-c] [QUERY...]");
        println!();
        println!("If QUERY arguments are given, looks up each one.");
        println!("Otherwise reads queries from stdin (one per line).");
        println!("Use '?' for an unknown letter (at most 5).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing the word lists");
        println!("  -c, --common           Search only the common-words list");
        println!("  -h, --help             Print this help");
        return;
    }

    let lab = phlab_cli::load_lab(dict_path.as_deref()).unwrap_or_else(|e| phlab_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            print_anagrams(&lab, query, common, &mut out);
        }
    } else {
        for query in &args {
            print_anagrams(&lab, query, common, &mut out);
        }
    }
}
