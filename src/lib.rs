//! # kleisli
//!
//! A small functional programming toolkit for Rust providing monadic
//! containers and function-pipeline composition.
//!
//! ## Overview
//!
//! The crate covers three container types and one composition facility:
//!
//! - **`Maybe<A>`**: explicit presence (`Just`) or absence (`Nothing`) of a value
//! - **`Outcome<A>`**: a success value or an error, with short-circuiting chains
//! - **`State<S, A>`**: stateful computation as a pure `S -> (A, S)` function value
//! - **`pipe!` / `compose!`**: variadic left-to-right and right-to-left
//!   function composition
//!
//! Every operation is a pure function of its inputs: containers are
//! immutable once constructed, and "mutation" of state is simulated by
//! producing new values. The library sequences caller-supplied functions;
//! it performs no I/O and no computation of its own.
//!
//! ## Feature Flags
//!
//! - `control`: The `Maybe` and `Outcome` containers
//! - `compose`: Function composition macros and helpers
//! - `effect`: The `State` monad
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kleisli::control::Maybe;
//! use kleisli::pipe;
//!
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let pipeline = pipe!(double, double, double);
//! let result = Maybe::Just(1).map(pipeline);
//! assert_eq!(result, Maybe::Just(8));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and helpers.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(test)]
#[cfg(all(feature = "control", feature = "compose"))]
mod tests {
    use crate::control::Maybe;

    #[test]
    fn containers_and_pipes_work_together() {
        let uppercase = |s: String| s.to_uppercase();
        let shout = |s: String| format!("{s}!");
        let pipeline = crate::pipe!(uppercase, shout);
        let result = Maybe::Just("hello".to_string()).map(pipeline);
        assert_eq!(result, Maybe::Just("HELLO!".to_string()));
    }
}
