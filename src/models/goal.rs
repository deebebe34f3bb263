#[cfg(test)]
#[path = "goal_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// A single text goal. The description is the only identity a goal has;
/// duplicates are allowed and value-based operations affect every entry
/// with a matching description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    description: String,
    completed: bool,
}

impl Goal {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
