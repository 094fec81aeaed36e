//! Puzzle decoding engine.
//!
//! - [`cipher`] -- closed set of encode/decode ciphers and the cipher pipeline
//! - [`transform`] -- pluggable candidate generators used by the search
//! - [`validator`] -- pluggable predicates judging whether a candidate is meaningful
//! - [`search`] -- bounded depth-first transform search with deadline control
//! - `analysis`, `base`, `find`, `grid` -- stateless helper utilities
//! - `lab` -- the handle owning word lists, indexes and registries

pub mod cipher;
pub mod transform;
pub mod validator;

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "utilities")]
pub mod analysis;
#[cfg(feature = "utilities")]
pub mod base;
#[cfg(feature = "utilities")]
pub mod find;
#[cfg(feature = "utilities")]
pub mod grid;

#[cfg(feature = "handle")]
pub mod lab;
