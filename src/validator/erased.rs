//! Type-erased validators
//!
//! Composition with the concrete combinators produces deeply nested types.
//! When heterogeneous validators need to share one type - storing stages in
//! a `Vec`, returning different compositions from different branches of
//! runtime configuration - the concrete validator can be erased behind
//! [`BoxedValidator`], which satisfies the same `Validator` contract.

use std::fmt;

use crate::outcome::Outcome;
use crate::validator::combinators::Validator;

/// A validator with its concrete type erased.
///
/// Stores any `Validator<I, Failure = F>` behind a box and forwards
/// `validate` to it, so the erased value participates in any combinator
/// exactly like the validator it wraps.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let stages: Vec<BoxedValidator<str, ValidationError>> = vec![
///     min_length(2).boxed(),
///     max_length(10).boxed(),
/// ];
///
/// for stage in &stages {
///     assert!(stage.validate("hello").is_valid());
/// }
/// ```
pub struct BoxedValidator<I: ?Sized, F> {
    inner: Box<dyn Validator<I, Failure = F>>,
}

impl<I: ?Sized, F> BoxedValidator<I, F> {
    /// Erase a concrete validator.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validator<I, Failure = F> + 'static,
    {
        BoxedValidator {
            inner: Box::new(validator),
        }
    }
}

impl<I: ?Sized, F> Validator<I> for BoxedValidator<I, F> {
    type Failure = F;

    #[inline]
    fn validate(&self, input: &I) -> Outcome<(), F> {
        self.inner.validate(input)
    }
}

impl<I: ?Sized, F> fmt::Debug for BoxedValidator<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedValidator").finish_non_exhaustive()
    }
}
