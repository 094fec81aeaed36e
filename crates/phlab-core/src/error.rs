// Lookup error taxonomy.

/// Error returned by deterministic dictionary lookups.
///
/// Keyed lookups that simply find nothing return `None` instead; these
/// variants are for inputs that cannot be looked up at all or whose walk
/// dead-ends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The input violates a structural precondition (e.g. a non-digit in a
    /// keypad query).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The lookup walk reached a dead end.
    #[error("no match for '{0}'")]
    NoMatch(String),
}
