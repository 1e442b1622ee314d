//! A service for greeting someone.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The text every greeting starts with.
const PREFIX: &str = "Hello ";

/// Errors from greeting someone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreetingError {
    /// No name was given.
    #[error("invalid input: missing name")]
    MissingName,
}

/// Returns a greeting based on someone's name.
///
/// ```rust
/// # use greeter::core::greeting::greeting_service::print_it;
/// assert_eq!("Hello Bob", print_it("Bob"));
/// ```
#[instrument(ret)]
pub fn print_it(name: &str) -> String {
    format!("{PREFIX}{name}")
}

/// Like [`print_it`], but fails if there is no name to greet.
#[instrument(ret)]
pub fn try_print_it(name: Option<&str>) -> Result<String, GreetingError> {
    name.map(print_it).ok_or(GreetingError::MissingName)
}

/// A greeting, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// A personal greeting.
    greeting: String,
}

impl Greeting {
    /// Constructs a new greeting.
    pub fn new(greeting: String) -> Self {
        Self { greeting }
    }

    /// Greets someone by name.
    pub fn for_name(name: &str) -> Self {
        Self::new(print_it(name))
    }

    /// Returns the greeting.
    pub fn greeting(&self) -> &str {
        self.greeting.as_ref()
    }
}
