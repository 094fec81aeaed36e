// phlab-t9: Resolve telephone keypad digits to dictionary words.
//
// A single digit string prints its words one per line; several
// space-separated digit strings print one bracketed list per string.
//
// Usage:
//   phlab-t9 [-d DICT_PATH] [-c] [DIGITS...]
//
// Options:
//   -d, --dict-path PATH   Directory containing words_sorted.txt and words_popular.txt
//   -c, --common           Search only the common-words list
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use phlab_index::T9Output;

fn main() {
    phlab_cli::init_logger();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = phlab_cli::parse_dict_path(&args);
    let (common, args) = phlab_cli::take_flag(&args, "--common", "-c");

    if phlab_cli::wants_help(&args) {
        println!("phlab-t9: Decode telephone keypad digits (2-9) into words.");
        println!();
        println!("Usage: phlab-t9 [-d DICT_PATH] [-c] [DIGITS...]");
        println!();
        println!("Arguments are joined into one query; otherwise each stdin line is a query.");
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

    let mut resolve = |query: &str| match lab.t9(query, common) {
        Ok(T9Output::Text(text)) => {
            let _ = writeln!(out, "{text}");
        }
        Ok(words @ T9Output::Words(_)) => {
            let _ = writeln!(out, "{words}");
        }
        Err(e) => {
            let _ = writeln!(out, "{query}: {e}");
        }
    };

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
            resolve(query);
        }
    } else {
        resolve(&args.join(" "));
    }
}
