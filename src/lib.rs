//! # Tripwire
//!
//! > *One trip and the line goes dead*
//!
//! A Rust library for short-circuiting validator combinators.
//!
//! ## Philosophy
//!
//! **Tripwire** composes small, independent validation rules into larger
//! ones while keeping one guarantee absolute: the first failing rule ends
//! the evaluation, and its failure - untouched, unwrapped - is the result.
//! There is no error accumulation, no partial input consumption, and no
//! second error channel: invalid input is a normal, typed return value.
//!
//! Validators are pure and immutable after construction, so a composed
//! tree is built once and then shared freely across threads and calls.
//!
//! ## Quick Example
//!
//! ```rust
//! use tripwire::prelude::*;
//!
//! // Fold an ordered sequence of rules into one validator.
//! let username = pipeline![min_length(3), max_length(20), contains(0, "user-")];
//!
//! assert!(username.validate("user-joan").is_valid());
//!
//! // The leftmost failing rule reports; later rules never run.
//! assert_eq!(
//!     username.validate("u"),
//!     Outcome::invalid(ValidationError::too_short())
//! );
//! ```
//!
//! ## Combinators
//!
//! - [`Chained`] - sequential AND over one input, short-circuits on the
//!   first failure
//! - [`Either`] - alternative OR over a pair of inputs, short-circuits on
//!   the first success
//! - [`Conditional`] - one of two validators, selected once at
//!   construction time
//! - [`Always`] - the identity: every input is valid
//! - [`pipeline!`] / [`Pipeline`] - declarative assembly of an ordered
//!   sequence into one composed validator

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod outcome;
pub mod testing;
pub mod validator;

// Re-exports
pub use outcome::Outcome;
pub use validator::{
    always, contains, length_between, max_length, min_length, Always, BoxedValidator, Chained,
    Conditional, Contains, Either, LengthBetween, MatchesPattern, MaxLength, MinLength, Pipeline,
    StringOutcome, ValidationError, Validator, ValidatorExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::outcome::Outcome;
    pub use crate::pipeline;
    pub use crate::validator::{
        always, contains, length_between, max_length, min_length, Always, BoxedValidator, Chained,
        Conditional, Contains, Either, LengthBetween, MatchesPattern, MaxLength, MinLength,
        Pipeline, StringOutcome, ValidationError, Validator, ValidatorExt,
    };
}
