//! Validator prelude for convenient imports
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//!
//! ```rust
//! use tripwire::validator::prelude::*;
//!
//! let v = pipeline![min_length(2), max_length(10)];
//! assert!(v.validate("hello").is_valid());
//! ```

// Core trait
pub use super::combinators::{Validator, ValidatorExt};

// Combinators
pub use super::combinators::{always, Always, Chained, Conditional, Either};

// Type erasure
pub use super::erased::BoxedValidator;

// Pipeline assembly
pub use super::pipeline::Pipeline;
pub use crate::pipeline;

// String leaf validators
pub use super::string::{
    contains, length_between, max_length, min_length, Contains, LengthBetween, MatchesPattern,
    MaxLength, MinLength, StringOutcome, ValidationError,
};

// The outcome type every validator returns
pub use crate::outcome::Outcome;
