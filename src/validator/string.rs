//! String leaf validators
//!
//! Concrete validation rules over string inputs: length bounds, substring
//! presence at an offset, and whole-input pattern matching. All of them
//! report [`ValidationError`] failures and implement `Validator` for both
//! `str` and `String`.
//!
//! Lengths and offsets count characters, not bytes, so multi-byte input is
//! measured the way a user reads it.

use regex::Regex;
use thiserror::Error;

use crate::outcome::Outcome;
use crate::validator::combinators::{Chained, Validator};

/// A validation failure carrying a human-readable message.
///
/// Equality is structural on the message, so tests and callers can match
/// failures exactly. The taxonomy is deliberately flat: combinators forward
/// leaf failures unchanged, so whatever message a leaf produces is what the
/// root of a composed tree reports.
///
/// # Example
///
/// ```rust
/// use tripwire::ValidationError;
///
/// let err = ValidationError::new("bad input");
/// assert_eq!(err.message(), "bad input");
/// assert_eq!(err.to_string(), "bad input");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    /// Create a failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError(message.into())
    }

    /// The failure reported when an input is shorter than a minimum length.
    pub fn too_short() -> Self {
        ValidationError::new("Too short.")
    }

    /// The failure reported when an input is longer than a maximum length.
    pub fn too_long() -> Self {
        ValidationError::new("Too long.")
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Outcome alias for string validators.
pub type StringOutcome = Outcome<(), ValidationError>;

/// Validator requiring a minimum character count.
#[derive(Clone, Copy, Debug)]
pub struct MinLength {
    min: usize,
}

impl Validator<str> for MinLength {
    type Failure = ValidationError;

    #[inline]
    fn validate(&self, input: &str) -> StringOutcome {
        if input.chars().count() >= self.min {
            Outcome::Valid(())
        } else {
            Outcome::Invalid(ValidationError::too_short())
        }
    }
}

impl Validator<String> for MinLength {
    type Failure = ValidationError;

    #[inline]
    fn validate(&self, input: &String) -> StringOutcome {
        Validator::<str>::validate(self, input)
    }
}

/// Create a validator requiring at least `min` characters.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let v = min_length(2);
/// assert!(v.validate("ab").is_valid());
/// assert_eq!(v.validate("a"), Outcome::invalid(ValidationError::too_short()));
/// ```
pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}

/// Validator requiring a maximum character count.
#[derive(Clone, Copy, Debug)]
pub struct MaxLength {
    max: usize,
}

impl Validator<str> for MaxLength {
    type Failure = ValidationError;

    #[inline]
    fn validate(&self, input: &str) -> StringOutcome {
        if input.chars().count() <= self.max {
            Outcome::Valid(())
        } else {
            Outcome::Invalid(ValidationError::too_long())
        }
    }
}

impl Validator<String> for MaxLength {
    type Failure = ValidationError;

    #[inline]
    fn validate(&self, input: &String) -> StringOutcome {
        Validator::<str>::validate(self, input)
    }
}

/// Create a validator allowing at most `max` characters.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let v = max_length(3);
/// assert!(v.validate("abc").is_valid());
/// assert_eq!(v.validate("abcd"), Outcome::invalid(ValidationError::too_long()));
/// ```
pub fn max_length(max: usize) -> MaxLength {
    MaxLength { max }
}

/// Validator requiring the character count to fall in an inclusive range.
///
/// Internally a [`Chained`] of [`MinLength`] and [`MaxLength`], so the
/// too-short check runs first and short-circuits the too-long check.
#[derive(Clone, Copy, Debug)]
pub struct LengthBetween {
    inner: Chained<MinLength, MaxLength>,
}

impl Validator<str> for LengthBetween {
    type Failure = ValidationError;

    #[inline]
    fn validate(&self, input: &str) -> StringOutcome {
        self.inner.validate(input)
    }
}

impl Validator<String> for LengthBetween {
    type Failure = ValidationError;

    #[inline]
    fn validate(&self, input: &String) -> StringOutcome {
        Validator::<str>::validate(self, input)
    }
}

/// Create a validator requiring between `min` and `max` characters.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let v = length_between(2, 4);
/// assert!(v.validate("abc").is_valid());
/// assert_eq!(v.validate("a"), Outcome::invalid(ValidationError::too_short()));
/// assert_eq!(v.validate("abcde"), Outcome::invalid(ValidationError::too_long()));
/// ```
pub fn length_between(min: usize, max: usize) -> LengthBetween {
    LengthBetween {
        inner: Chained(min_length(min), max_length(max)),
    }
}

/// Validator requiring a substring at a fixed character offset.
#[derive(Clone, Debug)]
pub struct Contains {
    start: usize,
    expected: String,
}

impl Validator<str> for Contains {
    type Failure = ValidationError;

    fn validate(&self, input: &str) -> StringOutcome {
        let expected_len = self.expected.chars().count();
        let found = input.chars().count() >= self.start + expected_len && {
            let window: String = input.chars().skip(self.start).take(expected_len).collect();
            window == self.expected
        };

        if found {
            Outcome::Valid(())
        } else {
            Outcome::Invalid(ValidationError::new(format!(
                "Input \"{}\" does not contain \"{}\" starting from {}",
                input, self.expected, self.start
            )))
        }
    }
}

impl Validator<String> for Contains {
    type Failure = ValidationError;

    #[inline]
    fn validate(&self, input: &String) -> StringOutcome {
        Validator::<str>::validate(self, input)
    }
}

/// Create a validator requiring `expected` at character offset `start`.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let v = contains(5, "Summer");
/// assert!(v.validate("This Summer").is_valid());
/// assert!(v.validate("This summer").is_invalid());
/// ```
pub fn contains(start: usize, expected: impl Into<String>) -> Contains {
    Contains {
        start,
        expected: expected.into(),
    }
}

/// Validator requiring the whole input to match a regular expression.
///
/// The pattern is compiled once at construction and implicitly anchored,
/// so the entire input must match, not just a substring of it.
#[derive(Clone, Debug)]
pub struct MatchesPattern {
    regex: Regex,
    pattern: String,
}

impl MatchesPattern {
    /// Compile a whole-input pattern validator.
    ///
    /// Returns the underlying [`regex::Error`] when the pattern does not
    /// compile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::prelude::*;
    ///
    /// let v = MatchesPattern::new(r"[a-z]+").unwrap();
    /// assert!(v.validate("hello").is_valid());
    /// assert!(v.validate("hello world").is_invalid()); // space never matches
    /// ```
    pub fn new(pattern: impl AsRef<str>) -> Result<Self, regex::Error> {
        let pattern = pattern.as_ref().to_string();
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(MatchesPattern { regex, pattern })
    }
}

impl Validator<str> for MatchesPattern {
    type Failure = ValidationError;

    fn validate(&self, input: &str) -> StringOutcome {
        if self.regex.is_match(input) {
            Outcome::Valid(())
        } else {
            Outcome::Invalid(ValidationError::new(format!(
                "Does not match pattern \"{}\"",
                self.pattern
            )))
        }
    }
}

impl Validator<String> for MatchesPattern {
    type Failure = ValidationError;

    #[inline]
    fn validate(&self, input: &String) -> StringOutcome {
        Validator::<str>::validate(self, input)
    }
}
