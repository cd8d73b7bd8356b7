//! Outcome type - a success value or an error, mutually exclusive.
//!
//! This module provides the `Outcome<A>` type, the crate's
//! success-or-error container. A chain of operations that can fail is
//! written as ordinary `map` / `and_then` calls on the success value; the
//! first error encountered is carried through the rest of the chain
//! untouched, and both cases are handled explicitly at an elimination
//! point. `Outcome` differs from [`Maybe`](crate::control::Maybe) in that
//! the failure branch carries a payload describing what went wrong.
//!
//! The error channel is fixed: every `Outcome` carries an
//! [`anyhow::Error`] on failure, and constructors accept anything
//! convertible into one. There is deliberately no error taxonomy here -
//! an error is just a value to be ferried to the caller.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32> {
//!     input.parse::<i32>().into()
//! }
//!
//! let report = parse("4")
//!     .map(|n| n * n)
//!     .fold(|error| format!("failed: {error}"), |n| format!("squared: {n}"));
//! assert_eq!(report, "squared: 16");
//! ```

use std::fmt;
use std::panic::panic_any;

use anyhow::Error;

/// A value that is either a success payload or an error payload.
///
/// `Outcome<A>` holds exactly one of a success value of type `A` or an
/// error value; it is never both. Transformations apply to the success
/// value only, and a failure short-circuits the rest of the chain while
/// preserving the original error.
///
/// Because the error channel ([`anyhow::Error`]) is neither `Clone` nor
/// comparable, `Outcome` itself carries no derive set beyond `Debug`;
/// observable equality in tests goes through [`Outcome::fold`].
///
/// # Type Parameters
///
/// * `A` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Outcome;
///
/// let success: Outcome<i32> = Outcome::success(42);
/// let failure: Outcome<i32> = Outcome::failure(anyhow::anyhow!("boom"));
///
/// assert_eq!(success.unwrap_or(0), 42);
/// assert_eq!(failure.unwrap_or(0), 0);
/// ```
pub enum Outcome<A> {
    /// A successful result.
    Success(A),
    /// A failed result carrying the error value.
    Failure(Error),
}

impl<A> Outcome<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value as a successful outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let outcome = Outcome::success("hello");
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Wraps an error as a failed outcome.
    ///
    /// Accepts anything convertible into the crate's error channel, so
    /// callers keep defining the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::failure(anyhow::anyhow!("boom"));
    /// assert!(outcome.is_failure());
    /// ```
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Failure(error.into())
    }

    /// Adapts a value-plus-optional-error pair into an `Outcome`.
    ///
    /// This bridges APIs that report failure through a separate error
    /// slot alongside the value. The contract is a truth table: a present
    /// error overrides the value and yields `Failure`; an absent error
    /// yields `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let ok = Outcome::from_parts("ok", None::<anyhow::Error>);
    /// assert_eq!(ok.unwrap_or(""), "ok");
    ///
    /// let failed = Outcome::from_parts("ignored", Some(anyhow::anyhow!("boom")));
    /// assert!(failed.is_failure());
    /// ```
    pub fn from_parts<E>(value: A, error: Option<E>) -> Self
    where
        E: Into<Error>,
    {
        match error {
            Some(error) => Self::Failure(error.into()),
            None => Self::Success(value),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a successful outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// assert!(Outcome::success(1).is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failed outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::failure(anyhow::anyhow!("boom"));
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).success_ref(), Some(&5));
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::failure(anyhow::anyhow!("boom"));
    /// assert_eq!(outcome.error_ref().map(ToString::to_string), Some("boom".to_string()));
    /// ```
    #[inline]
    pub const fn error_ref(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the outcome into an `Option` of the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).into_success(), Some(5));
    /// assert_eq!(Outcome::<i32>::failure(anyhow::anyhow!("boom")).into_success(), None);
    /// ```
    #[inline]
    pub fn into_success(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts the outcome into an `Option` of the error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::failure(anyhow::anyhow!("boom"));
    /// let error = outcome.into_error().expect("failure carries its error");
    /// assert_eq!(error.to_string(), "boom");
    /// ```
    #[inline]
    pub fn into_error(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the success value, or the given fallback on failure.
    ///
    /// This elimination never panics; the error value is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).unwrap_or(0), 5);
    /// assert_eq!(Outcome::<i32>::failure(anyhow::anyhow!("boom")).unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the success value, or terminates on failure.
    ///
    /// The panic payload is the contained error value itself, re-raised
    /// without any wrapping context. This is an escape hatch for
    /// prototypes and invariant-violation sites, not general error
    /// handling; prefer [`Outcome::fold`] or [`Outcome::unwrap_or`].
    ///
    /// # Panics
    ///
    /// Panics with the contained error if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).unwrap(), 5);
    /// ```
    #[inline]
    pub fn unwrap(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic_any(error),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// On failure the existing error propagates untouched and `function`
    /// is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let shouted = Outcome::success("hello".to_string()).map(|s| s.to_uppercase());
    /// assert_eq!(shouted.unwrap_or_default(), "HELLO");
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a function that itself returns an `Outcome`.
    ///
    /// This is the monadic bind: the result is not double-wrapped, and a
    /// failure short-circuits without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// fn reciprocal(x: f64) -> Outcome<f64> {
    ///     if x == 0.0 {
    ///         Outcome::failure(anyhow::anyhow!("division by zero"))
    ///     } else {
    ///         Outcome::success(1.0 / x)
    ///     }
    /// }
    ///
    /// let chained = Outcome::success(4.0).and_then(reciprocal);
    /// assert_eq!(chained.unwrap_or(f64::NAN), 0.25);
    ///
    /// let failed = Outcome::success(0.0).and_then(reciprocal);
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// Exactly one of the branches is invoked, and both must produce the
    /// same result type. This is the total pattern match as a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let ok = Outcome::success(2);
    /// assert_eq!(ok.fold(|e| e.to_string(), |n| format!("got {n}")), "got 2");
    ///
    /// let failed: Outcome<i32> = Outcome::failure(anyhow::anyhow!("boom"));
    /// assert_eq!(failed.fold(|e| e.to_string(), |n| format!("got {n}")), "boom");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(Error) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<A: Default> Outcome<A> {
    /// Returns the success value, or the type's default on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// assert_eq!(Outcome::success(7).unwrap_or_default(), 7);
    /// assert_eq!(Outcome::<i32>::failure(anyhow::anyhow!("boom")).unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => A::default(),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Outcome<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A, E> From<Result<A, E>> for Outcome<A>
where
    E: Into<Error>,
{
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(v)` becomes `Success(v)`, and `Err(e)` becomes `Failure` with
    /// the error converted into the crate's error channel. This is the
    /// Rust spelling of the value-plus-error dual-return idiom.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let outcome: Outcome<i32> = "42".parse::<i32>().into();
    /// assert_eq!(outcome.unwrap_or(0), 42);
    /// ```
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<A> From<Outcome<A>> for Result<A, Error> {
    /// Converts an `Outcome` back to a `Result`.
    ///
    /// `Success(v)` becomes `Ok(v)`, and `Failure(e)` becomes `Err(e)`.
    #[inline]
    fn from(outcome: Outcome<A>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// The error channel is Send + Sync, so an Outcome travels with its contents.
static_assertions::assert_impl_all!(Outcome<i32>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<String>: Send, Sync);
