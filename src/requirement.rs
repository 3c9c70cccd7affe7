//! Requirement descriptions and collections.
//!
//! A [`Requirement`] pairs a lazily evaluated check with the messages
//! shown when reporting it: the test message describes what was
//! verified, the help message tells the user how to fix a failure.

use std::fmt;

use once_cell::unsync::OnceCell;

/// A single environment requirement.
///
/// The check runs at most once; the verdict is cached on first use.
pub struct Requirement {
    check: Box<dyn Fn() -> bool>,
    fulfilled: OnceCell<bool>,
    test_message: String,
    help_message: String,
}

impl Requirement {
    /// Create a requirement from a check and its report messages.
    #[must_use]
    pub fn new(
        check: impl Fn() -> bool + 'static,
        test_message: impl Into<String>,
        help_message: impl Into<String>,
    ) -> Self {
        Self {
            check: Box::new(check),
            fulfilled: OnceCell::new(),
            test_message: test_message.into(),
            help_message: help_message.into(),
        }
    }

    /// Whether the requirement holds. Evaluated once, then cached.
    #[must_use]
    pub fn is_fulfilled(&self) -> bool {
        *self.fulfilled.get_or_init(|| (self.check)())
    }

    /// The explanatory text rendered when the requirement fails.
    #[must_use]
    pub fn test_message(&self) -> &str {
        &self.test_message
    }

    /// A remediation hint for the user.
    #[must_use]
    pub fn help_message(&self) -> &str {
        &self.help_message
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requirement")
            .field("fulfilled", &self.fulfilled.get())
            .field("test_message", &self.test_message)
            .field("help_message", &self.help_message)
            .finish_non_exhaustive()
    }
}

/// An ordered list of requirements.
#[derive(Debug, Default)]
pub struct RequirementCollection {
    requirements: Vec<Requirement>,
}

impl RequirementCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a requirement.
    pub fn add(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    /// Convenience for [`add`](Self::add) without building the
    /// [`Requirement`] by hand.
    pub fn add_requirement(
        &mut self,
        check: impl Fn() -> bool + 'static,
        test_message: impl Into<String>,
        help_message: impl Into<String>,
    ) {
        self.add(Requirement::new(check, test_message, help_message));
    }

    /// Number of requirements in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Iterate over the requirements in insertion order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Requirement> {
        self.requirements.iter()
    }

    /// Evaluate every requirement; `true` when all are fulfilled.
    ///
    /// Evaluation is not short-circuited, so every verdict is cached
    /// for the subsequent report.
    #[must_use]
    pub fn evaluate(&self) -> bool {
        self.requirements
            .iter()
            .fold(true, |all, requirement| requirement.is_fulfilled() && all)
    }
}

impl<'a> IntoIterator for &'a RequirementCollection {
    type Item = &'a Requirement;
    type IntoIter = std::slice::Iter<'a, Requirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
