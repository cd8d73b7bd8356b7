//! Unit tests for the Outcome<A> container.
//!
//! Outcome carries either a success value or an error value on the
//! crate's single error channel. The first error encountered in a chain
//! is ferried through the remaining operations untouched.

#![cfg(feature = "control")]

use anyhow::anyhow;
use kleisli::control::Outcome;
use rstest::rstest;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn success_and_failure_are_exclusive() {
    let ok = Outcome::success("hello");
    assert!(ok.is_success());
    assert!(!ok.is_failure());

    let failed: Outcome<&str> = Outcome::failure(anyhow!("boom"));
    assert!(failed.is_failure());
    assert!(!failed.is_success());
}

#[rstest]
fn failure_accepts_any_convertible_error() {
    let parse_error = "nope".parse::<i32>().unwrap_err();
    let outcome: Outcome<i32> = Outcome::failure(parse_error);
    assert!(outcome.is_failure());
}

#[rstest]
fn references_borrow_the_right_branch() {
    let ok = Outcome::success(5);
    assert_eq!(ok.success_ref(), Some(&5));
    assert!(ok.error_ref().is_none());

    let failed: Outcome<i32> = Outcome::failure(anyhow!("boom"));
    assert!(failed.success_ref().is_none());
    assert_eq!(
        failed.error_ref().map(ToString::to_string),
        Some("boom".to_string())
    );
}

// =============================================================================
// Adapters
// =============================================================================

#[rstest]
fn from_parts_with_no_error_is_a_success() {
    let outcome = Outcome::from_parts("ok", None::<anyhow::Error>);
    assert_eq!(outcome.unwrap_or(""), "ok");
}

#[rstest]
fn from_parts_with_an_error_overrides_the_value() {
    let outcome = Outcome::from_parts("", Some(anyhow!("boom")));
    let error = outcome.into_error().expect("error wins over the value");
    assert_eq!(error.to_string(), "boom");
}

#[rstest]
fn result_conversions_roundtrip() {
    let outcome: Outcome<i32> = "42".parse::<i32>().into();
    assert_eq!(outcome.unwrap_or(0), 42);

    let outcome: Outcome<i32> = "nope".parse::<i32>().into();
    let result: Result<i32, anyhow::Error> = outcome.into();
    assert!(result.is_err());
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn map_transforms_the_success_value() {
    let shouted = Outcome::success("hello".to_string()).map(|s| s.to_uppercase());
    assert_eq!(shouted.unwrap_or_default(), "HELLO");
}

#[rstest]
fn map_carries_the_error_through_unchanged() {
    let failed: Outcome<String> = Outcome::failure(anyhow!("boom"));
    let mapped = failed.map(|s| s.to_uppercase());
    assert_eq!(
        mapped.into_error().map(|error| error.to_string()),
        Some("boom".to_string())
    );
}

#[rstest]
fn map_short_circuits_on_failure() {
    let failed: Outcome<i32> = Outcome::failure(anyhow!("boom"));
    let result: Outcome<i32> = failed.map(|_| panic!("must not be invoked"));
    assert!(result.is_failure());
}

#[rstest]
fn and_then_chains_fallible_steps() {
    fn reciprocal(x: f64) -> Outcome<f64> {
        if x == 0.0 {
            Outcome::failure(anyhow!("division by zero"))
        } else {
            Outcome::success(1.0 / x)
        }
    }

    let chained = Outcome::success(4.0).and_then(reciprocal);
    assert_eq!(chained.unwrap_or(f64::NAN), 0.25);

    let failed = Outcome::success(0.0).and_then(reciprocal);
    assert_eq!(
        failed.into_error().map(|error| error.to_string()),
        Some("division by zero".to_string())
    );
}

#[rstest]
fn only_the_first_error_is_kept() {
    fn fail_with(label: &'static str) -> impl Fn(i32) -> Outcome<i32> {
        move |_| Outcome::failure(anyhow!(label))
    }

    let outcome = Outcome::success(1)
        .and_then(fail_with("first"))
        .and_then(fail_with("second"))
        .map(|x| x + 1);
    assert_eq!(
        outcome.into_error().map(|error| error.to_string()),
        Some("first".to_string())
    );
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
fn fold_runs_exactly_one_branch() {
    let ok = Outcome::success(2);
    assert_eq!(ok.fold(|e| e.to_string(), |n| format!("got {n}")), "got 2");

    let failed: Outcome<i32> = Outcome::failure(anyhow!("boom"));
    assert_eq!(failed.fold(|e| e.to_string(), |n| format!("got {n}")), "boom");
}

#[rstest]
fn unwrap_or_never_panics() {
    assert_eq!(Outcome::success(5).unwrap_or(0), 5);
    assert_eq!(Outcome::<i32>::failure(anyhow!("boom")).unwrap_or(0), 0);
}

#[rstest]
fn unwrap_or_default_uses_the_zero_value() {
    assert_eq!(Outcome::success(7).unwrap_or_default(), 7);
    assert_eq!(Outcome::<i32>::failure(anyhow!("boom")).unwrap_or_default(), 0);
    assert_eq!(
        Outcome::<String>::failure(anyhow!("boom")).unwrap_or_default(),
        String::new()
    );
}

#[rstest]
fn unwrap_returns_the_success_value() {
    assert_eq!(Outcome::success(5).unwrap(), 5);
}

#[rstest]
fn unwrap_reraises_the_original_error_value() {
    let failed: Outcome<i32> = Outcome::failure(anyhow!("boom"));
    let payload = std::panic::catch_unwind(move || failed.unwrap())
        .expect_err("unwrap on a failure must panic");
    let error = payload
        .downcast::<anyhow::Error>()
        .expect("the panic payload is the error value itself, not a message");
    assert_eq!(error.to_string(), "boom");
}
