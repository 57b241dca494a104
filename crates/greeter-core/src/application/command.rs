//! Input DTOs for the application layer.

/// Request to greet someone.
///
/// There is no defaulting: a missing name is the empty string and fails
/// validation like any other blank name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GreetCommand {
    name: String,
}

impl GreetCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
