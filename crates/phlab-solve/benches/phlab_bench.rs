// Criterion benchmarks for phlab-solve.
//
// Uses the dictionaries in PHLAB_DICT_PATH when set (a directory holding
// words_sorted.txt and words_popular.txt), otherwise the small test word
// lists under tests/data.
//
// Run:
//   cargo bench -p phlab-solve --features handle
//   PHLAB_DICT_PATH=/path/to/dict cargo bench -p phlab-solve --features handle

use std::path::PathBuf;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use phlab_core::Key;
use phlab_index::{AnagramIndex, T9Trie};
use phlab_solve::cipher::{Cipher, run_cipher};
use phlab_solve::lab::Lab;
use phlab_solve::search::SearchOptions;

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

fn dict_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PHLAB_DICT_PATH") {
        let path = PathBuf::from(dir);
        if path.join("words_sorted.txt").is_file() {
            return path;
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn create_lab() -> Lab {
    Lab::load(&dict_dir()).expect("Lab")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Build both indexes over the full word list.
fn bench_build_indexes(c: &mut Criterion) {
    let lab = create_lab();
    let words = lab.words(false).clone();

    c.bench_function("build_anagram_index", |b| {
        b.iter(|| std::hint::black_box(AnagramIndex::from_word_list(&words)));
    });
    c.bench_function("build_t9_trie", |b| {
        b.iter(|| std::hint::black_box(T9Trie::from_word_list(&words)));
    });
}

/// Anagram lookups with and without wildcards.
fn bench_anagram_lookup(c: &mut Criterion) {
    let lab = create_lab();
    let queries = ["silent", "tca", "c?t", "l?st?n"];

    c.bench_function("anagram_4_queries", |b| {
        b.iter(|| {
            for q in &queries {
                std::hint::black_box(lab.anagram(q, false).ok());
            }
        });
    });
}

/// Bruteforce search at the default depth.
fn bench_bruteforce(c: &mut Criterion) {
    let lab = create_lab();
    let inputs = ["olleh", "8 5 12 12 15", "uryyb", "... --- ..."];
    let options = SearchOptions::default().with_timeout(Duration::from_secs(3600));

    c.bench_function("bruteforce_4_inputs", |b| {
        b.iter(|| {
            for input in &inputs {
                std::hint::black_box(lab.bruteforce_with(input, &options));
            }
        });
    });
}

/// Round trip a paragraph through every cipher.
fn bench_cipher_pipeline(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(6);

    c.bench_function("cipher_round_trips", |b| {
        b.iter(|| {
            for cipher in Cipher::ALL {
                let encoded = run_cipher(Cipher::Text, Key::All, cipher, Key::Specific(3), &text)
                    .unwrap_or_default();
                std::hint::black_box(run_cipher(
                    cipher,
                    Key::Specific(3),
                    Cipher::Text,
                    Key::All,
                    &encoded,
                ))
                .ok();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_indexes,
    bench_anagram_lookup,
    bench_bruteforce,
    bench_cipher_pipeline,
);
criterion_main!(benches);
