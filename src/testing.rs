//! Testing utilities and helpers for Tripwire
//!
//! This module provides ergonomic utilities for testing validators:
//! assertion macros, a call-counting spy for proving short-circuit
//! behavior, and property-based testing support.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use tripwire::{assert_invalid, assert_valid, Outcome};
//!
//! let valid = Outcome::<_, String>::valid(42);
//! assert_valid!(valid);
//!
//! let invalid = Outcome::<i32, _>::invalid("error".to_string());
//! assert_invalid!(invalid);
//! ```
//!
//! ## Spy
//!
//! ```rust
//! use tripwire::prelude::*;
//! use tripwire::testing::Spy;
//!
//! let second = Spy::new(max_length(10));
//! let probe = second.clone();
//!
//! let v = Chained(min_length(2), second);
//! assert!(v.validate("a").is_invalid());
//!
//! // the first stage failed, so the second was never invoked
//! assert_eq!(probe.calls(), 0);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::outcome::Outcome;
use crate::validator::Validator;

/// A validator wrapper that counts how often it is invoked.
///
/// The counter lives behind an `Arc`, so a clone of the spy kept outside a
/// combinator tree observes the calls made to the clone moved inside it.
/// This is how the never-invoked halves of the short-circuit properties
/// are proven.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
/// use tripwire::testing::Spy;
///
/// let spy = Spy::new(min_length(2));
/// let probe = spy.clone();
///
/// assert!(spy.validate("ab").is_valid());
/// assert!(spy.validate("a").is_invalid());
/// assert_eq!(probe.calls(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Spy<V> {
    inner: V,
    calls: Arc<AtomicUsize>,
}

impl<V> Spy<V> {
    /// Wrap a validator with a call counter starting at zero.
    pub fn new(inner: V) -> Self {
        Spy {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `validate` has been invoked, across all clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<I: ?Sized, V: Validator<I>> Validator<I> for Spy<V> {
    type Failure = V::Failure;

    fn validate(&self, input: &I) -> Outcome<(), V::Failure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.validate(input)
    }
}

/// Assert that an outcome is valid.
///
/// This macro will panic if the outcome is `Invalid`.
///
/// # Example
///
/// ```rust
/// use tripwire::{assert_valid, Outcome};
///
/// let val = Outcome::<_, Vec<String>>::valid(42);
/// assert_valid!(val);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Valid(_) => {}
            $crate::Outcome::Invalid(e) => {
                panic!("Expected Valid, got Invalid: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is invalid.
///
/// This macro will panic if the outcome is `Valid`.
///
/// # Example
///
/// ```rust
/// use tripwire::{assert_invalid, Outcome};
///
/// let val = Outcome::<i32, _>::invalid("error".to_string());
/// assert_invalid!(val);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Invalid(_) => {}
            $crate::Outcome::Valid(v) => {
                panic!("Expected Invalid, got Valid: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary,
    E: Arbitrary,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::valid),
            any_with::<E>(e_params).prop_map(Outcome::invalid),
        ]
        .boxed()
    }
}
