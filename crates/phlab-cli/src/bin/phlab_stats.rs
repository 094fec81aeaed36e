// phlab-stats: Symbol frequencies and Shannon entropy of a text.
//
// Letters and digits are counted case-insensitively; everything else is
// ignored.
//
// Usage:
//   phlab-stats [TEXT...]
//
// Options:
//   -h, --help             Print help

use phlab_solve::analysis;

fn main() {
    phlab_cli::init_logger();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if phlab_cli::wants_help(&args) {
        println!("phlab-stats: Symbol frequencies and entropy of a text.");
        println!();
        println!("Usage: phlab-stats [TEXT...]");
        println!();
        println!("Arguments are joined into one input; otherwise stdin is the input.");
        println!();
        println!("Options:");
        println!("  -h, --help             Print this help");
        return;
    }

    let text = phlab_cli::input_text(&args);
    let stats = analysis::analyze(&text);
    if stats.is_empty() {
        println!("No letters or digits found");
        return;
    }
    print!("{stats}");
}
