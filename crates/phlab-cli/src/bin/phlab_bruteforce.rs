// phlab-bruteforce: Search chains of transforms for meaningful decodings.
//
// Applies every transform (reverse, Caesar, numbers, tap, Morse, SMS, hex,
// T9, anagram) up to the given depth and prints the candidates accepted by a
// validator, best first.
//
// Usage:
//   phlab-bruteforce [-d DICT_PATH] [--depth N] [--timeout SECS] [--branch] [TEXT...]
//
// Options:
//   -d, --dict-path PATH   Directory containing words_sorted.txt and words_popular.txt
//   -n, --depth N          Maximum number of chained transforms (default 3)
//   -t, --timeout SECS     Wall-clock budget in seconds (default 30)
//   -b, --branch           Only forbid revisiting strings on the current chain
//   -h, --help             Print help

use std::time::Duration;

use phlab_solve::search::VisitedScope;

fn main() {
    phlab_cli::init_logger();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = phlab_cli::parse_dict_path(&args);
    let (depth, args) = phlab_cli::parse_option(&args, "--depth", "-n");
    let (timeout, args) = phlab_cli::parse_option(&args, "--timeout", "-t");
    let (branch, args) = phlab_cli::take_flag(&args, "--branch", "-b");

    if phlab_cli::wants_help(&args) {
        println!("phlab-bruteforce: Search transform chains for meaningful decodings.");
        println!();
        println!("Usage: phlab-bruteforce [-d DICT_PATH] [-n N] [-t SECS] [-b] [TEXT...]");
        println!();
        println!("Arguments are joined into one input; otherwise stdin is the input.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing the word lists");
        println!("  -n, --depth N          Maximum number of chained transforms (default 3)");
        println!("  -t, --timeout SECS     Wall-clock budget in seconds (default 30)");
        println!("  -b, --branch           Only forbid revisiting strings on the current chain");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut lab =
        phlab_cli::load_lab(dict_path.as_deref()).unwrap_or_else(|e| phlab_cli::fatal(&e));

    if let Some(depth) = depth {
        let depth = depth
            .parse()
            .unwrap_or_else(|_| phlab_cli::fatal(&format!("invalid depth '{depth}'")));
        lab.set_max_depth(depth);
    }
    if let Some(secs) = timeout {
        let timeout = secs
            .parse()
            .ok()
            .and_then(|s: f64| Duration::try_from_secs_f64(s).ok())
            .unwrap_or_else(|| phlab_cli::fatal(&format!("invalid timeout '{secs}'")));
        lab.set_timeout(timeout);
    }
    if branch {
        lab.set_visited_scope(VisitedScope::Branch);
    }

    let input = phlab_cli::input_text(&args);
    let report = lab.bruteforce(&input);
    log::debug!(
        "{} candidates explored in {} nodes",
        report.explored,
        report.nodes
    );
    println!("{report}");
}
