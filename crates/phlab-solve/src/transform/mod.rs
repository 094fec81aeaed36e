// Transform module: pluggable candidate generators for the search.
//
// A transform turns one string into zero or more labelled candidates.
// Transforms never fail: input they cannot process yields no candidates.

pub mod builtin;

use std::sync::Arc;

use phlab_core::Candidate;
use phlab_index::{AnagramIndex, T9Trie};

use crate::cipher::Cipher;

pub use builtin::{Anagrams, CaesarShifts, CipherDecode, KeypadWords, Reverse};

/// A candidate generator.
///
/// Implementations must be cheap to call repeatedly and must not panic on
/// arbitrary input.
pub trait Transform: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Produce candidates for `input`. May be empty.
    fn apply(&self, input: &str) -> Vec<Candidate>;
}

/// Adapter turning a closure into a [`Transform`].
///
/// The closure returns the candidate texts; each is labelled with the
/// transform name.
pub struct FnTransform<F> {
    name: String,
    func: F,
}

impl<F> FnTransform<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Transform for FnTransform<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, input: &str) -> Vec<Candidate> {
        (self.func)(input)
            .into_iter()
            .map(|text| Candidate::new(text, self.name.as_str()))
            .collect()
    }
}

/// Ordered collection of transforms. Registration order is application
/// order.
#[derive(Default)]
pub struct TransformRegistry {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform.
    pub fn register(&mut self, transform: impl Transform + 'static) -> &mut Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, transform: impl Transform + 'static) -> Self {
        self.register(transform);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Transform> {
        self.transforms.iter().map(|t| t.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

/// The standard transform set: reversal, Caesar rotations, the numbers,
/// tap, Morse, SMS and hex decodes, then the dictionary-backed T9 and
/// anagram expansions.
pub fn default_transforms(trie: Arc<T9Trie>, index: Arc<AnagramIndex>) -> TransformRegistry {
    TransformRegistry::new()
        .with(Reverse)
        .with(CaesarShifts)
        .with(CipherDecode::new(Cipher::Numbers))
        .with(CipherDecode::new(Cipher::Tap))
        .with(CipherDecode::new(Cipher::Morse))
        .with(CipherDecode::new(Cipher::Sms))
        .with(CipherDecode::new(Cipher::Hex))
        .with(KeypadWords::new(trie))
        .with(Anagrams::new(index))
}
