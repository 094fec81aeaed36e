// Validator module: predicates judging whether a candidate is meaningful.
//
// Validators are tried in registration order; the first one that accepts a
// candidate is bound to it. A validator that cannot judge a candidate
// simply rejects it.

pub mod builtin;

use std::sync::Arc;

use phlab_core::ValidatorRef;
use phlab_index::{AnagramIndex, WordList};

pub use builtin::{AnagramOf, Coordinate, Isbn, PartWord, PhoneNumber, Word};

/// A candidate predicate.
pub trait Validator: Send + Sync {
    /// Name bound to accepted results.
    fn name(&self) -> &str;

    /// Whether `candidate` looks meaningful. `dictionary` is the registry's
    /// word list.
    fn accepts(&self, candidate: &str, dictionary: &WordList) -> bool;
}

/// Adapter turning a closure into a [`Validator`].
pub struct FnValidator<F> {
    name: String,
    func: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&str, &WordList) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&str, &WordList) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn accepts(&self, candidate: &str, dictionary: &WordList) -> bool {
        (self.func)(candidate, dictionary)
    }
}

/// Ordered validators sharing one dictionary. Registration order is
/// priority order.
pub struct ValidatorRegistry {
    dictionary: Arc<WordList>,
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorRegistry {
    pub fn new(dictionary: Arc<WordList>) -> Self {
        Self {
            dictionary,
            validators: Vec::new(),
        }
    }

    /// Append a validator with the next lower priority.
    pub fn register(&mut self, validator: impl Validator + 'static) -> &mut Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.register(validator);
        self
    }

    /// The first validator accepting `candidate`, if any.
    pub fn first_accepting(&self, candidate: &str) -> Option<ValidatorRef> {
        self.validators
            .iter()
            .enumerate()
            .find(|(_, v)| v.accepts(candidate, &self.dictionary))
            .map(|(priority, v)| ValidatorRef {
                priority,
                name: v.name().to_string(),
            })
    }

    pub fn dictionary(&self) -> &WordList {
        &self.dictionary
    }

    pub fn names(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

/// The standard validators in priority order: word, part word, anagram,
/// ISBN, phone number, coordinate.
pub fn default_validators(
    dictionary: Arc<WordList>,
    index: Arc<AnagramIndex>,
) -> ValidatorRegistry {
    ValidatorRegistry::new(dictionary)
        .with(Word)
        .with(PartWord)
        .with(AnagramOf::new(index))
        .with(Isbn)
        .with(PhoneNumber)
        .with(Coordinate)
}
