// phlab-cli: shared utilities for CLI tools.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use log::LevelFilter;
use phlab_solve::lab::{ALL_WORDS_FILE, COMMON_WORDS_FILE, Lab};

/// Environment variable naming the dictionary directory.
const DICT_PATH_ENV: &str = "PHLAB_DICT_PATH";

/// Environment variable enabling debug logging when set.
const DEBUG_ENV: &str = "PHLAB_DEBUG";

/// Search for the word lists and create a Lab.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `PHLAB_DICT_PATH` environment variable
/// 3. `~/.phlab`
/// 4. `/usr/share/phlab`
/// 5. Current working directory
pub fn load_lab(dict_path: Option<&str>) -> Result<Lab, String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        if dir.join(ALL_WORDS_FILE).is_file() && dir.join(COMMON_WORDS_FILE).is_file() {
            log::debug!("using dictionaries in {}", dir.display());
            return Lab::load(dir).map_err(|e| format!("failed to create Lab: {e}"));
        }
    }

    Err(format!(
        "could not find {} and {} in any of the search paths:\n{}",
        ALL_WORDS_FILE,
        COMMON_WORDS_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for the word lists.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".phlab"));
    }

    paths.push(PathBuf::from("/usr/share/phlab"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Initialise `env_logger` at `info`, or `debug` when `PHLAB_DEBUG` is set.
/// `RUST_LOG` overrides both.
pub fn init_logger() {
    let level = if std::env::var_os(DEBUG_ENV).is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}

/// Parse a `--name=VALUE`, `--name VALUE` or `-s VALUE` option.
///
/// Returns `(value, remaining_args)`. Exits if the option is given without
/// a value.
pub fn parse_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "--dict-path", "-d")
}

/// Remove a boolean flag from the args. Returns whether it was present.
pub fn take_flag(args: &[String], long: &str, short: &str) -> (bool, Vec<String>) {
    let present = args.iter().any(|a| a == long || a == short);
    let remaining = args
        .iter()
        .filter(|a| *a != long && *a != short)
        .cloned()
        .collect();
    (present, remaining)
}

/// The positional arguments joined with spaces, or all of stdin when there
/// are none. Trailing newlines are trimmed.
pub fn input_text(args: &[String]) -> String {
    if !args.is_empty() {
        return args.join(" ");
    }
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        fatal(&format!("error reading stdin: {e}"));
    }
    buf.trim_end_matches(['\n', '\r']).to_string()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dict_path_forms() {
        let (path, rest) = parse_dict_path(&args(&["-d", "/tmp/words", "abc"]));
        assert_eq!(path.as_deref(), Some("/tmp/words"));
        assert_eq!(rest, args(&["abc"]));

        let (path, rest) = parse_dict_path(&args(&["x", "--dict-path=/w"]));
        assert_eq!(path.as_deref(), Some("/w"));
        assert_eq!(rest, args(&["x"]));

        let (path, rest) = parse_dict_path(&args(&["x"]));
        assert!(path.is_none());
        assert_eq!(rest, args(&["x"]));
    }

    #[test]
    fn flags_are_removed() {
        let (common, rest) = take_flag(&args(&["-c", "tca"]), "--common", "-c");
        assert!(common);
        assert_eq!(rest, args(&["tca"]));
        let (common, _) = take_flag(&args(&["tca"]), "--common", "-c");
        assert!(!common);
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["a", "--help"])));
        assert!(!wants_help(&args(&["a"])));
    }

    #[test]
    fn explicit_path_searched_first() {
        let paths = build_search_paths(Some("/opt/words"));
        assert_eq!(paths[0], PathBuf::from("/opt/words"));
        assert!(paths.contains(&PathBuf::from("/usr/share/phlab")));
    }
}
