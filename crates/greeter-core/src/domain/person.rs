//! The `Person` value object.
//!
//! A `Person` can only be obtained through [`Person::new`], so holding one is
//! proof that the name passed validation. There are no setters.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::ErrorType;
use super::result::GreetResult;

/// Maximum name length, counted in Unicode scalar values.
pub const MAX_NAME_LENGTH: usize = 100;

/// A validated person to greet.
///
/// Invariant: the name is not blank and holds at most [`MAX_NAME_LENGTH`]
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    name: String,
}

impl Person {
    /// Validate `name` and build a `Person`.
    ///
    /// Emptiness is checked before length, so a blank name always reports
    /// the empty-name error.
    pub fn new(name: impl Into<String>) -> GreetResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ErrorType::validation("name cannot be empty"));
        }

        // chars(), not len(): multibyte scripts count the same as ASCII
        let length = name.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ErrorType::validation(format!(
                "name too long: {length} characters (max {MAX_NAME_LENGTH})"
            )));
        }

        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The greeting for this person, e.g. `Hello, Alice!`.
    pub fn greeting_message(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Person {
    type Err = ErrorType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
