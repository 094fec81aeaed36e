// phlab-grid: Find common words hidden in a letter grid.
//
// Rows are whitespace separated and must all have the same length. Words of
// at least four letters are searched along rows and columns.
//
// Usage:
//   phlab-grid [-d DICT_PATH] [-r] [-R] [-m LEN] [ROW...]
//
// Options:
//   -d, --dict-path PATH   Directory containing words_sorted.txt and words_popular.txt
//   -r, --reverse          Also read rows and columns backwards
//   -R, --rotate           Also search every Caesar rotation of the grid
//   -m, --min-len LEN      Shortest word reported (default 4)
//   -h, --help             Print help

use std::io::{self, Write};

use phlab_solve::grid::GridOptions;

fn main() {
    phlab_cli::init_logger();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = phlab_cli::parse_dict_path(&args);
    let (min_len, args) = phlab_cli::parse_option(&args, "--min-len", "-m");
    let (reverse, args) = phlab_cli::take_flag(&args, "--reverse", "-r");
    let (rotate, args) = phlab_cli::take_flag(&args, "--rotate", "-R");

    if phlab_cli::wants_help(&args) {
        println!("phlab-grid: Find common words hidden in a letter grid.");
        println!();
        println!("Usage: phlab-grid [-d DICT_PATH] [-r] [-R] [-m LEN] [ROW...]");
        println!();
        println!("Arguments are the grid rows; otherwise the grid is read from stdin.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing the word lists");
        println!("  -r, --reverse          Also read rows and columns backwards");
        println!("  -R, --rotate           Also search every Caesar rotation of the grid");
        println!("  -m, --min-len LEN      Shortest word reported (default 4)");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut options = GridOptions {
        rotate,
        reverse,
        ..GridOptions::default()
    };
    if let Some(len) = min_len {
        options.min_len = len
            .parse()
            .unwrap_or_else(|_| phlab_cli::fatal(&format!("invalid length '{len}'")));
    }

    let grid = phlab_cli::input_text(&args);
    let lab = phlab_cli::load_lab(dict_path.as_deref()).unwrap_or_else(|e| phlab_cli::fatal(&e));
    let matches = lab
        .grid_search(&grid, &options)
        .unwrap_or_else(|e| phlab_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if matches.is_empty() {
        let _ = writeln!(out, "No words found");
        return;
    }
    for m in &matches {
        let _ = writeln!(out, "{m}");
    }
}
