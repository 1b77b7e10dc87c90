//! Receiver semantics drill: method calls and by-value vs by-reference

use serde::{Deserialize, Serialize};

/// Dog model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub legs: u32,
    pub greeting: String,
    pub cuteness: u64,
}

impl Dog {
    /// Create a dog with the stock greeting
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            legs: 4,
            greeting: "Woof!".to_string(),
            cuteness: 0,
        }
    }

    /// Borrows the dog; callable as `d.greet()` or fully qualified as
    /// `Dog::greet(&d)` - both forms produce the same output.
    pub fn greet(&self) -> &str {
        &self.greeting
    }
}

/// Takes ownership of its argument. The caller hands over a copy (via
/// `clone`), so the caller's original is untouched.
pub fn rename(mut dog: Dog, name: impl Into<String>) -> Dog {
    dog.name = name.into();
    dog
}

/// Mutates through the reference; the caller's original changes.
pub fn rename_in_place(dog: &mut Dog, name: impl Into<String>) {
    dog.name = name.into();
}
