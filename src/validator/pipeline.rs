//! Declarative pipeline assembly
//!
//! A pipeline is an ordered sequence of validators folded into one composed
//! validator with [`Chained`] as the fold operation. The leftmost validator
//! runs first and can short-circuit everything after it; an empty pipeline
//! accepts every input.
//!
//! Two renditions are provided:
//!
//! - [`pipeline!`](crate::pipeline) folds a sequence known at compile time
//!   into nested `Chained` nodes with no boxing and no runtime cost beyond
//!   the fixed tree.
//! - [`Pipeline`] assembles heterogeneous stages at runtime behind
//!   [`BoxedValidator`](crate::validator::BoxedValidator), with the same
//!   fold contract.
//!
//! Either way, composition happens once, ahead of the validation hot path,
//! and the composed validator is reusable for any number of calls.

use std::fmt;

use crate::validator::combinators::{Always, Chained, Conditional, Validator};
use crate::validator::erased::BoxedValidator;

/// Fold a sequence of validators into one, left to right, with [`Chained`].
///
/// - Zero items produce [`Always`](crate::validator::Always): the empty
///   pipeline accepts every input.
/// - One item is returned unchanged, with no wrapping.
/// - Two or more items are right-folded into nested `Chained` nodes in
///   declaration order: the first item is evaluated first and its failure
///   short-circuits all later items.
///
/// Branches are written as ordinary items via
/// [`Conditional::select`](crate::validator::Conditional::select).
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let v = pipeline![min_length(2), max_length(10), contains(0, "aaa")];
/// assert!(v.validate("aaab").is_valid());
///
/// // the contains stage is the only one that fails here
/// assert_eq!(
///     v.validate("zzzb"),
///     Outcome::invalid(ValidationError::new(
///         "Input \"zzzb\" does not contain \"aaa\" starting from 0"
///     ))
/// );
/// ```
#[macro_export]
macro_rules! pipeline {
    () => {
        $crate::validator::Always::new()
    };
    ($validator:expr $(,)?) => {
        $validator
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::validator::Chained($first, $crate::pipeline!($($rest),+))
    };
}

/// Runtime builder for heterogeneous validator pipelines.
///
/// Stages are erased behind [`BoxedValidator`] so validators of different
/// concrete types can share one sequence. `build` folds the stages with
/// [`Chained`] under the same contract as [`pipeline!`](crate::pipeline):
/// zero stages accept everything, a single stage is returned unchanged,
/// and the first stage of a longer pipeline can short-circuit the rest.
///
/// # Example
///
/// ```rust
/// use tripwire::prelude::*;
///
/// let strict = true;
/// let v = Pipeline::new()
///     .then(min_length(2))
///     .when(strict, contains(0, "id-"), always())
///     .then(max_length(12))
///     .build();
///
/// assert!(v.validate("id-042").is_valid());
/// assert!(v.validate("user-042").is_invalid());
/// ```
pub struct Pipeline<I: ?Sized + 'static, F: 'static> {
    stages: Vec<BoxedValidator<I, F>>,
}

impl<I: ?Sized + 'static, F: 'static> Pipeline<I, F> {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Pipeline { stages: Vec::new() }
    }

    /// Append a validator stage.
    pub fn then<V>(mut self, validator: V) -> Self
    where
        V: Validator<I, Failure = F> + 'static,
    {
        self.stages.push(BoxedValidator::new(validator));
        self
    }

    /// Append an `if`/`else` stage.
    ///
    /// Both branches are constructed eagerly; `condition` selects which one
    /// the stage delegates to, once, at build time. The selected
    /// [`Conditional`] then participates in the fold as one ordinary stage.
    pub fn when<A, B>(self, condition: bool, when_true: A, when_false: B) -> Self
    where
        A: Validator<I, Failure = F> + 'static,
        B: Validator<I, Failure = F> + 'static,
    {
        self.then(Conditional::select(condition, when_true, when_false))
    }

    /// Number of stages added so far.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Fold the stages into a single composed validator.
    pub fn build(self) -> BoxedValidator<I, F> {
        let mut stages = self.stages.into_iter().rev();
        match stages.next() {
            None => BoxedValidator::new(Always::new()),
            Some(last) => stages.fold(last, |tail, stage| {
                BoxedValidator::new(Chained(stage, tail))
            }),
        }
    }
}

impl<I: ?Sized + 'static, F: 'static> Default for Pipeline<I, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized + 'static, F: 'static> fmt::Debug for Pipeline<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
