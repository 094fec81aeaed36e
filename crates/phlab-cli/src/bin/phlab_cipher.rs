// phlab-cipher: Decode text with one cipher and encode it with another.
//
// Usage:
//   phlab-cipher [-f CIPHER] [--from-key KEY] [-t CIPHER] [--to-key KEY] [TEXT...]
//
// Ciphers: Text, Numbers, Caesar, Morse, Tap, SMS, Hex, T9 (case-insensitive).
// A missing or non-numeric key means every key (Caesar prints all 26
// rotations).
//
// Options:
//   -f, --from CIPHER      Cipher of the input (default Numbers)
//       --from-key KEY     Key of the input cipher
//   -t, --to CIPHER        Cipher of the output (default Text)
//       --to-key KEY       Key of the output cipher
//   -l, --list             List the available ciphers
//   -h, --help             Print help

use phlab_core::Key;
use phlab_solve::cipher::{Cipher, run_cipher};

fn cipher_arg(name: Option<String>, default: Cipher) -> Cipher {
    match name {
        Some(name) => Cipher::from_name(&name)
            .unwrap_or_else(|| phlab_cli::fatal(&format!("unknown cipher '{name}'"))),
        None => default,
    }
}

fn main() {
    phlab_cli::init_logger();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (from, args) = phlab_cli::parse_option(&args, "--from", "-f");
    let (from_key, args) = phlab_cli::parse_option(&args, "--from-key", "--from-key");
    let (to, args) = phlab_cli::parse_option(&args, "--to", "-t");
    let (to_key, args) = phlab_cli::parse_option(&args, "--to-key", "--to-key");
    let (list, args) = phlab_cli::take_flag(&args, "--list", "-l");

    if phlab_cli::wants_help(&args) {
        println!("phlab-cipher: Decode text with one cipher and encode it with another.");
        println!();
        println!("Usage: phlab-cipher [-f CIPHER] [--from-key KEY] [-t CIPHER] [--to-key KEY] [TEXT...]");
        println!();
        println!("Arguments are joined into one input; otherwise stdin is the input.");
        println!();
        println!("Options:");
        println!("  -f, --from CIPHER      Cipher of the input (default Numbers)");
        println!("      --from-key KEY     Key of the input cipher");
        println!("  -t, --to CIPHER        Cipher of the output (default Text)");
        println!("      --to-key KEY       Key of the output cipher");
        println!("  -l, --list             List the available ciphers");
        println!("  -h, --help             Print this help");
        return;
    }

    if list {
        for cipher in Cipher::ALL {
            println!("{cipher}");
        }
        return;
    }

    let input = cipher_arg(from, Cipher::Numbers);
    let output = cipher_arg(to, Cipher::Text);
    let text = phlab_cli::input_text(&args);

    match run_cipher(
        input,
        Key::parse(from_key.as_deref()),
        output,
        Key::parse(to_key.as_deref()),
        &text,
    ) {
        Ok(result) => println!("{result}"),
        Err(e) => phlab_cli::fatal(&e.to_string()),
    }
}
