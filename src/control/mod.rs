//! Monadic containers for optional and fallible values.
//!
//! This module provides the two closed container algebras of the crate:
//!
//! - [`Maybe`]: explicit presence (`Just`) or absence (`Nothing`) of a value
//! - [`Outcome`]: a success value or an error value, mutually exclusive
//!
//! Both containers are immutable once constructed and propagate
//! absence/failure by skipping downstream transformations until an
//! elimination point (`fold`, `just_or`, `unwrap_or`) provides a result.
//!
//! # Examples
//!
//! ## Optional values without null checks
//!
//! ```rust
//! use kleisli::control::Maybe;
//!
//! fn first_word(text: &str) -> Maybe<&str> {
//!     Maybe::from_option(text.split_whitespace().next())
//! }
//!
//! let greeting = first_word("hello world").map(str::to_uppercase);
//! assert_eq!(greeting, Maybe::Just("HELLO".to_string()));
//!
//! let silence = first_word("   ").map(str::to_uppercase);
//! assert_eq!(silence, Maybe::Nothing);
//! ```
//!
//! ## Fallible chains with a single error channel
//!
//! ```rust
//! use kleisli::control::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32> {
//!     input.parse::<i32>().into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled.unwrap_or(0), 42);
//!
//! // The first error is carried through the rest of the chain untouched.
//! let failed = parse("twenty-one").map(|n| n * 2);
//! assert!(failed.is_failure());
//! ```

mod maybe;
mod outcome;

pub use maybe::Maybe;
pub use outcome::Outcome;
