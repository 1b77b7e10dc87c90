//! Core library - logic for the language drills
//!
//! Each module is one self-contained drill: a fixed-list tally, receiver
//! semantics on a value type, and a generic numeric accumulator.

pub mod animals;
pub mod calc;
pub mod error;
pub mod roster;

pub use error::{DrillError, Result};
