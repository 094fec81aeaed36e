// Word-grid search: dictionary words hidden in the rows and columns of a
// rectangular letter grid.

use std::fmt;

use phlab_core::LookupError;
use phlab_index::WordList;

use crate::cipher::caesar;

/// Default minimum word length reported by the grid search.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Direction a grid word is read in, before any reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

/// Grid search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Also search every Caesar rotation of the grid.
    pub rotate: bool,
    /// Also read every row and column backwards.
    pub reverse: bool,
    /// Shortest word reported.
    pub min_len: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            rotate: false,
            reverse: false,
            min_len: DEFAULT_MIN_WORD_LEN,
        }
    }
}

/// A dictionary word found in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMatch {
    pub word: String,
    /// Column of the first cell of the scanned run.
    pub x: usize,
    /// Row of the first cell of the scanned run.
    pub y: usize,
    pub orientation: Orientation,
    /// Caesar rotation applied to the grid (0 when not rotated).
    pub rotation: i32,
    /// Whether the word reads against the orientation.
    pub reversed: bool,
}

impl fmt::Display for GridMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {}) {}", self.word, self.x, self.y, self.orientation)?;
        if self.reversed {
            f.write_str(" reversed")?;
        }
        if self.rotation != 0 {
            write!(f, " rot {}", self.rotation)?;
        }
        Ok(())
    }
}

/// Find dictionary words in the rows and columns of `grid`.
///
/// Rows are the whitespace-separated tokens of `grid`, lowercased; all rows
/// must have the same length. Every run of at least `options.min_len` cells
/// is looked up in `dictionary`. Results are ordered by rotation, then rows
/// before columns, then position.
pub fn find_grid_words(
    grid: &str,
    dictionary: &WordList,
    options: &GridOptions,
) -> Result<Vec<GridMatch>, LookupError> {
    let rows = parse_grid(&grid.to_lowercase())?;
    let rotations = if options.rotate { 0..caesar::SHIFTS } else { 0..1 };

    let mut matches = Vec::new();
    for rotation in rotations {
        let rotated: Vec<Vec<char>> = if rotation == 0 {
            rows.clone()
        } else {
            rows.iter()
                .map(|row| {
                    let line: String = row.iter().collect();
                    caesar::shift_text(&line, -rotation).chars().collect()
                })
                .collect()
        };
        scan_grid(&rotated, rotation, dictionary, options, &mut matches);
    }
    Ok(matches)
}

fn parse_grid(grid: &str) -> Result<Vec<Vec<char>>, LookupError> {
    let rows: Vec<Vec<char>> = grid
        .split_whitespace()
        .map(|row| row.chars().collect())
        .collect();
    let width = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != width) {
        return Err(LookupError::InvalidInput("not a grid".to_string()));
    }
    Ok(rows)
}

fn scan_grid(
    rows: &[Vec<char>],
    rotation: i32,
    dictionary: &WordList,
    options: &GridOptions,
    out: &mut Vec<GridMatch>,
) {
    for (y, row) in rows.iter().enumerate() {
        for (x, word, reversed) in scan_line(row, dictionary, options) {
            out.push(GridMatch {
                word,
                x,
                y,
                orientation: Orientation::Horizontal,
                rotation,
                reversed,
            });
        }
    }

    let width = rows.first().map_or(0, Vec::len);
    for x in 0..width {
        let column: Vec<char> = rows.iter().map(|row| row[x]).collect();
        for (y, word, reversed) in scan_line(&column, dictionary, options) {
            out.push(GridMatch {
                word,
                x,
                y,
                orientation: Orientation::Vertical,
                rotation,
                reversed,
            });
        }
    }
}

/// Dictionary words among the runs of `line`, as `(start, word, reversed)`.
fn scan_line(line: &[char], dictionary: &WordList, options: &GridOptions) -> Vec<(usize, String, bool)> {
    let min_len = options.min_len.max(1);
    let mut found = Vec::new();
    for start in 0..line.len() {
        for end in (start + min_len)..=line.len() {
            let run: String = line[start..end].iter().collect();
            if dictionary.contains(&run) {
                found.push((start, run.clone(), false));
            }
            if options.reverse {
                let backwards: String = run.chars().rev().collect();
                if backwards != run && dictionary.contains(&backwards) {
                    found.push((start, backwards, true));
                }
            }
        }
    }
    found
}
