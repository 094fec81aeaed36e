// Search candidates and annotated bruteforce results.

use std::fmt;

/// A string produced by a transform, together with the label describing the
/// step that produced it (e.g. `"caesar 3"`, `"reverse"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub text: String,
    pub label: String,
}

impl Candidate {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Reference to the validator that accepted a result.
///
/// `priority` is the validator's registration index; lower is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatorRef {
    pub priority: usize,
    pub name: String,
}

/// One candidate discovered during a bruteforce search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BruteforceResult {
    /// The candidate string as produced by the last transform.
    pub candidate: String,
    /// Labels of the transforms applied, outermost first.
    pub path: Vec<String>,
    /// Number of transforms applied (equals `path.len()`).
    pub depth: usize,
    /// Validator that accepted the candidate; unset until validation.
    pub validator: Option<ValidatorRef>,
}

impl BruteforceResult {
    /// Create an unvalidated result one step below `parent_path`.
    pub fn new(candidate: String, parent_path: &[String], label: String) -> Self {
        let mut path = Vec::with_capacity(parent_path.len() + 1);
        path.extend_from_slice(parent_path);
        path.push(label);
        let depth = path.len();
        Self {
            candidate,
            path,
            depth,
            validator: None,
        }
    }

    /// Whether a validator has accepted this result.
    pub fn is_validated(&self) -> bool {
        self.validator.is_some()
    }

    /// Name of the accepting validator, if any.
    pub fn validator_name(&self) -> Option<&str> {
        self.validator.as_ref().map(|v| v.name.as_str())
    }
}

impl fmt::Display for BruteforceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.candidate, self.path.join(" > "))?;
        if let Some(v) = &self.validator {
            write!(f, " [{}]", v.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_result_extends_parent_path() {
        let parent = vec!["reverse".to_string()];
        let r = BruteforceResult::new("olleh".to_string(), &parent, "caesar 1".to_string());
        assert_eq!(r.path, vec!["reverse", "caesar 1"]);
        assert_eq!(r.depth, 2);
        assert!(!r.is_validated());
        assert_eq!(r.validator_name(), None);
    }

    #[test]
    fn display_lists_path_and_validator() {
        let mut r = BruteforceResult::new("di".to_string(), &[], "numbers".to_string());
        assert_eq!(r.to_string(), "di <- numbers");
        r.validator = Some(ValidatorRef {
            priority: 0,
            name: "word".to_string(),
        });
        assert_eq!(r.to_string(), "di <- numbers [word]");
    }

    #[test]
    fn candidate_constructor() {
        let c = Candidate::new("abc", "reverse");
        assert_eq!(c.text, "abc");
        assert_eq!(c.label, "reverse");
    }
}
