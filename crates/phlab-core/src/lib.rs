//! Shared types for the Puzzle Hunt Laboratory.
//!
//! - [`character`] -- keypad table, anagram keys and candidate shape checks
//! - [`key`] -- cipher key resolution (`Specific` shift or `All`)
//! - [`result`] -- search candidates and annotated bruteforce results
//! - [`error`] -- lookup error taxonomy shared by the dictionary indexes

pub mod character;
pub mod error;
pub mod key;
pub mod result;

pub use error::LookupError;
pub use key::Key;
pub use result::{BruteforceResult, Candidate, ValidatorRef};
