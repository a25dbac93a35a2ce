//! Integration tests for the short-circuiting combinators

use tripwire::prelude::*;
use tripwire::testing::Spy;
use tripwire::{assert_invalid, assert_valid};

#[test]
fn chained_short_circuits_and_never_invokes_second() {
    let second = Spy::new(max_length(10));
    let probe = second.clone();

    let v = Chained(min_length(2), second);
    assert_eq!(
        v.validate("a"),
        Outcome::invalid(ValidationError::too_short())
    );
    assert_eq!(probe.calls(), 0);
}

#[test]
fn chained_failure_is_exactly_the_first_failure() {
    let first = min_length(2);
    let v = Chained(first, max_length(10));
    assert_eq!(v.validate("a"), first.validate("a"));
}

#[test]
fn chained_passes_through_second_outcome_when_first_valid() {
    let second = max_length(10);
    let v = Chained(min_length(2), second);

    // second's success becomes the overall result
    assert_eq!(v.validate("ab"), second.validate("ab"));
    // second's failure becomes the overall result
    assert_eq!(v.validate("12345678901"), second.validate("12345678901"));
}

#[test]
fn chained_min_max_scenario() {
    let v = Chained(min_length(2), max_length(10));

    assert_eq!(v.validate("ab"), Outcome::valid(()));
    assert_eq!(
        v.validate("a"),
        Outcome::invalid(ValidationError::too_short())
    );
    assert_eq!(
        v.validate("12345678901"),
        Outcome::invalid(ValidationError::too_long())
    );
}

#[test]
fn chained_is_observably_associative() {
    let left = Chained(Chained(min_length(2), max_length(10)), contains(0, "aaa"));
    let right = Chained(min_length(2), Chained(max_length(10), contains(0, "aaa")));

    for input in ["aaab", "a", "aaaaaaaaaaaa", "zzzb", ""] {
        assert_eq!(left.validate(input), right.validate(input));
    }
}

#[test]
fn either_short_circuits_and_never_invokes_second() {
    let second = Spy::new(min_length(6));
    let probe = second.clone();

    let v = Either(min_length(4), second);
    let input: (String, String) = ("aaaa".into(), "aaaaa".into());
    assert_valid!(v.validate(&input));
    assert_eq!(probe.calls(), 0);
}

#[test]
fn either_falls_back_to_second_outcome() {
    let second = min_length(2);
    let v = Either(min_length(4), second);

    let input: (String, String) = ("aaa".into(), "aa".into());
    assert_eq!(v.validate(&input), second.validate("aa"));
}

// The documented asymmetry: when both branches fail, the failure reported
// is the second branch's, never the first's.
#[test]
fn either_both_invalid_reports_second_failure() {
    let first = Spy::new(contains(0, "first"));
    let second = min_length(6);
    let first_probe = first.clone();

    let v = Either(first, second);
    let input: (String, String) = ("xxxxx".into(), "aaaaa".into());

    assert_eq!(v.validate(&input), second.validate("aaaaa"));
    assert_eq!(first_probe.calls(), 1);
}

#[test]
fn either_truth_table() {
    let v = Either(min_length(4), min_length(6));

    // both invalid
    let input: (String, String) = ("aaa".into(), "aaaaa".into());
    assert_eq!(
        v.validate(&input),
        Outcome::invalid(ValidationError::too_short())
    );

    // first valid, second invalid
    let input: (String, String) = ("aaaa".into(), "aaaaa".into());
    assert_valid!(v.validate(&input));

    // first invalid, second valid
    let input: (String, String) = ("aaa".into(), "aaaaaa".into());
    assert_valid!(v.validate(&input));

    // both valid
    let input: (String, String) = ("aaaa".into(), "aaaaaa".into());
    assert_valid!(v.validate(&input));
}

#[test]
fn either_branches_with_different_input_types() {
    let at_least_five = |n: &i32| -> Outcome<(), ValidationError> {
        if *n >= 5 {
            Outcome::valid(())
        } else {
            Outcome::invalid(ValidationError::new("below five"))
        }
    };

    let v = Either(min_length(4), at_least_five);

    let input: (String, i32) = ("aaaa".into(), 0);
    assert_valid!(v.validate(&input));

    let input: (String, i32) = ("a".into(), 7);
    assert_valid!(v.validate(&input));

    let input: (String, i32) = ("a".into(), 2);
    assert_eq!(
        v.validate(&input),
        Outcome::invalid(ValidationError::new("below five"))
    );
}

#[test]
fn always_is_identity_for_chaining() {
    let bare = contains(5, "Summer");
    let left = Chained(always(), contains(5, "Summer"));
    let right = Chained(contains(5, "Summer"), always());

    for input in ["This Summer", "This summer", "This summ", ""] {
        assert_eq!(left.validate(input), bare.validate(input));
        assert_eq!(right.validate(input), bare.validate(input));
    }
}

#[test]
fn contains_scenario() {
    let v = contains(5, "Summer");

    assert_eq!(v.validate("This Summer"), Outcome::valid(()));
    assert_eq!(
        v.validate("This summer"),
        Outcome::invalid(ValidationError::new(
            "Input \"This summer\" does not contain \"Summer\" starting from 5"
        ))
    );
}

#[test]
fn conditional_is_a_single_pipeline_item() {
    let strict = Conditional::select(true, min_length(8), min_length(2));
    let v = Chained(max_length(20), strict);

    assert_invalid!(v.validate("abc"));
    assert_valid!(v.validate("abcdefgh"));
}

#[test]
fn composed_tree_is_shareable_across_threads() {
    let v = std::sync::Arc::new(pipeline![min_length(2), max_length(10), contains(0, "aaa")]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let v = std::sync::Arc::clone(&v);
            std::thread::spawn(move || {
                assert_valid!(v.validate("aaab"));
                assert_invalid!(v.validate("zzzb"));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
