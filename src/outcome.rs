//! Outcome type for short-circuiting validation
//!
//! This module provides the `Outcome` type, the result of every validation:
//! either the input was valid, or a typed failure explains why it was not.
//! Unlike an accumulating validation type, `Outcome` carries exactly one
//! failure - combinators built on it stop at the first invalid result.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use tripwire::Outcome;
//!
//! let valid = Outcome::<_, String>::valid(42);
//! let invalid = Outcome::<i32, _>::invalid("out of range".to_string());
//!
//! assert!(valid.is_valid());
//! assert!(invalid.is_invalid());
//! ```
//!
//! ## Validators return `Outcome<(), F>`
//!
//! ```
//! use tripwire::Outcome;
//!
//! fn check_positive(n: i32) -> Outcome<(), String> {
//!     if n > 0 {
//!         Outcome::valid(())
//!     } else {
//!         Outcome::invalid(format!("{} is not positive", n))
//!     }
//! }
//!
//! assert_eq!(check_positive(3), Outcome::Valid(()));
//! assert_eq!(check_positive(-3), Outcome::Invalid("-3 is not positive".to_string()));
//! ```

/// The result of a validation: valid with a value, or invalid with a failure.
///
/// `Outcome` is deliberately minimal. It never holds more than one failure,
/// because evaluation is short-circuiting: the first invalid result in a
/// composed validator tree becomes the overall result, byte for byte, with
/// no wrapping or added context.
///
/// Validators produce `Outcome<(), F>` - the valid variant carries the unit
/// marker, the invalid variant carries the domain failure.
///
/// # Type Parameters
///
/// * `T` - The type of the valid value (unit for validators)
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```
/// use tripwire::Outcome;
///
/// let v = Outcome::<_, String>::valid(42);
/// assert_eq!(v.into_result(), Ok(42));
///
/// let v = Outcome::<i32, _>::invalid("too large");
/// assert_eq!(v.into_result(), Err("too large"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The input satisfied the validator
    Valid(T),
    /// The input violated the validator, with the failure describing why
    Invalid(E),
}

impl<T, E> Outcome<T, E> {
    /// Create a valid outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::<i32, String>::valid(42);
    /// assert!(v.is_valid());
    /// ```
    #[inline]
    pub fn valid(value: T) -> Self {
        Outcome::Valid(value)
    }

    /// Create an invalid outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::<i32, &str>::invalid("error");
    /// assert!(v.is_invalid());
    /// ```
    #[inline]
    pub fn invalid(failure: E) -> Self {
        Outcome::Invalid(failure)
    }

    /// Create an outcome from a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Outcome::Valid(42));
    ///
    /// let v = Outcome::from_result(Err::<i32, _>("error".to_string()));
    /// assert_eq!(v, Outcome::Invalid("error".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Valid(value),
            Err(failure) => Outcome::Invalid(failure),
        }
    }

    /// Convert this outcome into a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::<_, String>::valid(42);
    /// assert_eq!(v.into_result(), Ok(42));
    ///
    /// let v = Outcome::<i32, _>::invalid("error".to_string());
    /// assert_eq!(v.into_result(), Err("error".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Valid(value) => Ok(value),
            Outcome::Invalid(failure) => Err(failure),
        }
    }

    /// Check if this outcome is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::<_, String>::valid(42);
    /// assert!(v.is_valid());
    /// ```
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    /// Check if this outcome is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::<i32, _>::invalid("error");
    /// assert!(v.is_invalid());
    /// ```
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }

    /// Transform the valid value if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::<_, String>::valid(5);
    /// assert_eq!(v.map(|x| x * 2), Outcome::Valid(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Valid(value) => Outcome::Valid(f(value)),
            Outcome::Invalid(failure) => Outcome::Invalid(failure),
        }
    }

    /// Transform the failure value if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::<i32, _>::invalid("error");
    /// assert_eq!(v.map_invalid(|e| e.len()), Outcome::Invalid(5));
    /// ```
    #[inline]
    pub fn map_invalid<U, F>(self, f: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Valid(value) => Outcome::Valid(value),
            Outcome::Invalid(failure) => Outcome::Invalid(f(failure)),
        }
    }

    /// Return the valid value, or a default computed from the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::<i32, &str>::invalid("error");
    /// assert_eq!(v.valid_or(|_| 0), 0);
    /// ```
    #[inline]
    pub fn valid_or<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Valid(value) => value,
            Outcome::Invalid(failure) => f(failure),
        }
    }

    /// Get a reference to the failure, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwire::Outcome;
    ///
    /// let v = Outcome::<i32, &str>::invalid("error");
    /// assert_eq!(v.failure(), Some(&"error"));
    /// ```
    #[inline]
    pub fn failure(&self) -> Option<&E> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Invalid(failure) => Some(failure),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        let v = Outcome::<i32, String>::valid(42);
        assert!(v.is_valid());
        assert!(!v.is_invalid());
    }

    #[test]
    fn test_invalid() {
        let v = Outcome::<i32, &str>::invalid("error");
        assert!(v.is_invalid());
        assert!(!v.is_valid());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Outcome::<(), &str>::valid(()), Outcome::Valid(()));
        assert_eq!(Outcome::<(), &str>::invalid("e"), Outcome::Invalid("e"));
        assert_ne!(Outcome::<(), &str>::valid(()), Outcome::Invalid("e"));
    }

    #[test]
    fn test_result_round_trip() {
        let ok: Result<i32, String> = Ok(1);
        assert_eq!(Outcome::from_result(ok.clone()).into_result(), ok);

        let err: Result<i32, String> = Err("boom".to_string());
        assert_eq!(Outcome::from_result(err.clone()).into_result(), err);
    }

    #[test]
    fn test_map() {
        let v = Outcome::<i32, String>::valid(5);
        assert_eq!(v.map(|x| x + 1), Outcome::Valid(6));

        let v = Outcome::<i32, String>::invalid("e".to_string());
        assert_eq!(v.map(|x| x + 1), Outcome::Invalid("e".to_string()));
    }

    #[test]
    fn test_map_invalid() {
        let v = Outcome::<i32, &str>::invalid("error");
        assert_eq!(v.map_invalid(str::len), Outcome::Invalid(5));

        let v = Outcome::<i32, &str>::valid(1);
        assert_eq!(v.map_invalid(str::len), Outcome::Valid(1));
    }

    #[test]
    fn test_valid_or() {
        assert_eq!(Outcome::<i32, &str>::valid(7).valid_or(|_| 0), 7);
        assert_eq!(Outcome::<i32, &str>::invalid("e").valid_or(|_| 0), 0);
    }

    #[test]
    fn test_failure_accessor() {
        assert_eq!(Outcome::<i32, &str>::valid(1).failure(), None);
        assert_eq!(Outcome::<i32, &str>::invalid("e").failure(), Some(&"e"));
    }

    #[test]
    fn test_from_impl() {
        let v: Outcome<i32, &str> = Ok(3).into();
        assert_eq!(v, Outcome::Valid(3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let v = Outcome::<i32, String>::invalid("too short".to_string());
        let json = serde_json::to_string(&v).unwrap();
        let back: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
