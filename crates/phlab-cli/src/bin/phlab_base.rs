// phlab-base: Convert whitespace-separated numbers between bases 2-36.
//
// Usage:
//   phlab-base [-f BASE] [-t BASE] [NUMBER...]
//
// Options:
//   -f, --from BASE        Base of the input numbers (default 10)
//   -t, --to BASE          Base of the output numbers (default 2)
//   -h, --help             Print help

use phlab_solve::base;

fn base_arg(value: Option<String>, default: u32) -> u32 {
    match value {
        Some(v) => v
            .parse()
            .unwrap_or_else(|_| phlab_cli::fatal(&format!("invalid base '{v}'"))),
        None => default,
    }
}

fn main() {
    phlab_cli::init_logger();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (from, args) = phlab_cli::parse_option(&args, "--from", "-f");
    let (to, args) = phlab_cli::parse_option(&args, "--to", "-t");

    if phlab_cli::wants_help(&args) {
        println!("phlab-base: Convert numbers between bases 2-36.");
        println!();
        println!("Usage: phlab-base [-f BASE] [-t BASE] [NUMBER...]");
        println!();
        println!("Arguments are the numbers; otherwise stdin is read.");
        println!();
        println!("Options:");
        println!("  -f, --from BASE        Base of the input numbers (default 10)");
        println!("  -t, --to BASE          Base of the output numbers (default 2)");
        println!("  -h, --help             Print this help");
        return;
    }

    let from = base_arg(from, 10);
    let to = base_arg(to, 2);
    let input = phlab_cli::input_text(&args);

    match base::convert_base(&input, from, to) {
        Ok(converted) => println!("{converted}"),
        Err(e) => {
            log::debug!("{e}");
            println!("Invalid");
        }
    }
}
