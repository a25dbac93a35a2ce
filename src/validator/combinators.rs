//! Core validator trait and short-circuiting combinators
//!
//! This module provides the foundational `Validator` trait and the
//! combinators for composing validators: sequencing, alternation, and
//! conditional branch selection.

use std::fmt;
use std::marker::PhantomData;

use crate::outcome::Outcome;
use crate::validator::erased::BoxedValidator;

/// A composable validation rule over inputs of type `I`.
///
/// A validator classifies an input as valid or invalid with a typed
/// failure. Failure is a normal return value, never a panic: the single
/// error channel is the `Invalid` variant of [`Outcome`].
///
/// Validators are immutable after construction and own only their
/// configuration, so a single instance can be invoked repeatedly and from
/// multiple threads at once (hence the `Send + Sync` supertrait).
///
/// Combinators are themselves validators - the contract is closed under
/// composition, so callers consume a composed tree through this same
/// single-method interface.
///
/// # Example
///
/// ```rust
/// use tripwire::{Outcome, Validator};
///
/// struct NonZero;
///
/// impl Validator<i32> for NonZero {
///     type Failure = String;
///
///     fn validate(&self, input: &i32) -> Outcome<(), String> {
///         if *input != 0 {
///             Outcome::valid(())
///         } else {
///             Outcome::invalid("must not be zero".to_string())
///         }
///     }
/// }
///
/// assert!(NonZero.validate(&7).is_valid());
/// assert!(NonZero.validate(&0).is_invalid());
/// ```
pub trait Validator<I: ?Sized>: Send + Sync {
    /// The type of failures this validator reports.
    type Failure;

    /// Check the input, returning `Valid(())` or the typed failure.
    fn validate(&self, input: &I) -> Outcome<(), Self::Failure>;
}

// Blanket impl for closures
impl<I: ?Sized, F, E> Validator<I> for F
where
    F: Fn(&I) -> Outcome<(), E> + Send + Sync,
{
    type Failure = E;

    #[inline]
    fn validate(&self, input: &I) -> Outcome<(), E> {
        self(input)
    }
}

/// Extension trait for validator combinators.
///
/// Provides method chaining for composing validators. All methods return
/// concrete types, so composition costs nothing beyond the fixed tree
/// built once up front.
///
/// # Example
///
/// ```rust
/// use tripwire::{Outcome, Validator, ValidatorExt};
///
/// let positive = |n: &i32| -> Outcome<(), &'static str> {
///     if *n > 0 { Outcome::valid(()) } else { Outcome::invalid("not positive") }
/// };
/// let even = |n: &i32| -> Outcome<(), &'static str> {
///     if *n % 2 == 0 { Outcome::valid(()) } else { Outcome::invalid("odd") }
/// };
///
/// let v = positive.chained(even);
/// assert!(v.validate(&2).is_valid());
/// assert_eq!(v.validate(&-2), Outcome::invalid("not positive"));
/// assert_eq!(v.validate(&3), Outcome::invalid("odd"));
/// ```
pub trait ValidatorExt<I: ?Sized>: Validator<I> + Sized {
    /// Sequence with another validator over the same input (logical AND).
    ///
    /// The resulting validator runs `self` first and short-circuits on its
    /// failure; otherwise the other validator's outcome is returned
    /// verbatim.
    fn chained<V>(self, other: V) -> Chained<Self, V>
    where
        V: Validator<I, Failure = Self::Failure>,
    {
        Chained(self, other)
    }

    /// Try another validator when this one fails (logical OR over a pair).
    ///
    /// The resulting validator accepts a pair of inputs, one component per
    /// branch; see [`Either`] for the exact semantics.
    fn either<V>(self, other: V) -> Either<Self, V> {
        Either(self, other)
    }

    /// Erase the concrete type behind a [`BoxedValidator`].
    ///
    /// Useful when heterogeneous validators must share one type, e.g. in
    /// a [`Pipeline`](crate::validator::Pipeline).
    fn boxed(self) -> BoxedValidator<I, Self::Failure>
    where
        Self: 'static,
    {
        BoxedValidator::new(self)
    }
}

impl<I: ?Sized, V: Validator<I>> ValidatorExt<I> for V {}

/// The identity validator: every input is valid.
///
/// `Always` is the neutral element of sequential composition - chaining it
/// before or after any validator leaves that validator's behavior
/// unchanged, and an empty pipeline builds down to it.
///
/// # Example
///
/// ```rust
/// use tripwire::{always, Validator};
///
/// let v = always::<str, String>();
/// assert!(v.validate("anything").is_valid());
/// assert!(v.validate("").is_valid());
/// ```
pub struct Always<I: ?Sized, F> {
    _marker: PhantomData<fn(&I) -> F>,
}

impl<I: ?Sized, F> Always<I, F> {
    /// Create the identity validator.
    #[inline]
    pub fn new() -> Self {
        Always {
            _marker: PhantomData,
        }
    }
}

impl<I: ?Sized, F> Validator<I> for Always<I, F> {
    type Failure = F;

    #[inline]
    fn validate(&self, _input: &I) -> Outcome<(), F> {
        Outcome::Valid(())
    }
}

impl<I: ?Sized, F> Default for Always<I, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized, F> Clone for Always<I, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized, F> Copy for Always<I, F> {}

impl<I: ?Sized, F> fmt::Debug for Always<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Always")
    }
}

/// Create the identity validator.
///
/// # Example
///
/// ```rust
/// use tripwire::{always, Validator};
///
/// assert!(always::<i32, String>().validate(&42).is_valid());
/// ```
pub fn always<I: ?Sized, F>() -> Always<I, F> {
    Always::new()
}

/// Sequential AND combinator - both validators must accept the input.
///
/// Runs the first validator; if it fails, that failure is the overall
/// result and the second validator is never invoked. If the first is
/// valid, the second validator's outcome is returned verbatim.
///
/// Both validators must share input and failure types. Nesting order does
/// not matter observably: `Chained(a, Chained(b, c))` and
/// `Chained(Chained(a, b), c)` stop at the same first failing component.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let v = Chained(min_length(2), max_length(10));
/// assert!(v.validate("ab").is_valid());
/// assert_eq!(v.validate("a"), Outcome::invalid(ValidationError::too_short()));
/// assert_eq!(v.validate("12345678901"), Outcome::invalid(ValidationError::too_long()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Chained<First, Second>(pub First, pub Second);

impl<I: ?Sized, First, Second> Validator<I> for Chained<First, Second>
where
    First: Validator<I>,
    Second: Validator<I, Failure = First::Failure>,
{
    type Failure = First::Failure;

    #[inline]
    fn validate(&self, input: &I) -> Outcome<(), Self::Failure> {
        match self.0.validate(input) {
            Outcome::Valid(()) => self.1.validate(input),
            Outcome::Invalid(failure) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("chained: first validator failed, short-circuiting");
                Outcome::Invalid(failure)
            }
        }
    }
}

/// Alternative OR combinator over a pair of inputs.
///
/// Validates `input.0` with the first validator; if that succeeds, the
/// result is valid and the second validator is never invoked. If the
/// first fails, the second validator's outcome on `input.1` is returned
/// verbatim.
///
/// Input types may differ between the branches; failure types must match.
/// When both branches fail, the reported failure is the *second* branch's,
/// never the first's - callers must not assume the first failure is
/// preserved.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let v = Either(min_length(4), min_length(6));
/// let input: (String, String) = ("aaaa".into(), "aaaaa".into());
/// assert!(v.validate(&input).is_valid());
///
/// let input: (String, String) = ("aaa".into(), "aaaaa".into());
/// assert_eq!(v.validate(&input), Outcome::invalid(ValidationError::too_short()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Either<First, Second>(pub First, pub Second);

impl<A, B, First, Second> Validator<(A, B)> for Either<First, Second>
where
    First: Validator<A>,
    Second: Validator<B, Failure = First::Failure>,
{
    type Failure = First::Failure;

    #[inline]
    fn validate(&self, input: &(A, B)) -> Outcome<(), Self::Failure> {
        match self.0.validate(&input.0) {
            Outcome::Valid(()) => Outcome::Valid(()),
            Outcome::Invalid(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("either: first branch failed, trying second");
                self.1.validate(&input.1)
            }
        }
    }
}

/// Conditional combinator - one of two validators, selected at
/// construction time.
///
/// A closed union of two validators over identical input and failure
/// types. `validate` dispatches to whichever variant is stored; the branch
/// decision is made once, when the value is built, not re-evaluated per
/// call. This lets declarative pipelines express `if`/`else` structure
/// while both branches still produce one composed type.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let strict = false;
/// let v = Conditional::select(strict, min_length(8), min_length(2));
/// assert!(v.validate("abc").is_valid());
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Conditional<First, Second> {
    /// The first branch is active.
    First(First),
    /// The second branch is active.
    Second(Second),
}

impl<First, Second> Conditional<First, Second> {
    /// Pick a branch once, up front.
    ///
    /// Both branch validators are constructed eagerly; `condition` decides
    /// which one the resulting value delegates to.
    #[inline]
    pub fn select(condition: bool, when_true: First, when_false: Second) -> Self {
        if condition {
            Conditional::First(when_true)
        } else {
            Conditional::Second(when_false)
        }
    }
}

impl<I: ?Sized, First, Second> Validator<I> for Conditional<First, Second>
where
    First: Validator<I>,
    Second: Validator<I, Failure = First::Failure>,
{
    type Failure = First::Failure;

    #[inline]
    fn validate(&self, input: &I) -> Outcome<(), Self::Failure> {
        match self {
            Conditional::First(first) => first.validate(input),
            Conditional::Second(second) => second.validate(input),
        }
    }
}
