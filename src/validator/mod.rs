//! Validator trait and short-circuiting combinators
//!
//! This module provides the core `Validator` capability and the combinators
//! for assembling small, independent rules into larger ones: sequencing
//! (`Chained`), alternation (`Either`), conditional selection
//! (`Conditional`), the identity (`Always`), and declarative pipeline
//! assembly (the [`pipeline!`](crate::pipeline) macro and the runtime
//! [`Pipeline`] builder).
//!
//! # Philosophy
//!
//! Evaluation is strictly short-circuiting: the first invalid result in a
//! composed tree becomes the overall result, unchanged. Combinators never
//! wrap or annotate a child's failure, so the failure observed at the root
//! is byte for byte the value some leaf produced. Validators are immutable
//! after construction and composition happens once, ahead of the
//! validation hot path.
//!
//! # Example
//!
//! ```rust
//! use tripwire::prelude::*;
//!
//! let username = pipeline![min_length(3), max_length(20)];
//!
//! assert!(username.validate("john_doe").is_valid());
//! assert_eq!(
//!     username.validate("jd"),
//!     Outcome::invalid(ValidationError::too_short())
//! );
//! ```

mod combinators;
mod erased;
mod pipeline;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{Validator, ValidatorExt};

// Re-export combinator types
pub use combinators::{always, Always, Chained, Conditional, Either};

// Re-export type erasure
pub use erased::BoxedValidator;

// Re-export pipeline assembly
pub use pipeline::Pipeline;

// Re-export string leaf validators
pub use string::{
    contains, length_between, max_length, min_length, Contains, LengthBetween, MatchesPattern,
    MaxLength, MinLength, StringOutcome, ValidationError,
};
