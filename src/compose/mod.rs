//! Function composition utilities.
//!
//! This module provides the crate's composition combinators: macros that
//! chain unary functions into a single function, plus the helper
//! combinators the chains are built from.
//!
//! - [`pipe!`]: compose functions left-to-right (data flow order)
//! - [`compose!`]: compose functions right-to-left (mathematical order)
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that always returns the same value
//!
//! # Overview
//!
//! A pipeline is an ordered sequence of unary functions where each
//! function's output type is the next function's input type. Both macros
//! accept any number of functions (one or more) and return one composed
//! function; they differ only in reading order:
//!
//! ```text
//! pipe!(f, g, h)(x)    = h(g(f(x)))    // f applied first
//! compose!(f, g, h)(x) = f(g(h(x)))    // h applied first
//! ```
//!
//! Composition is strict sequential application: no error handling, no
//! memoization, no laziness. When a pipeline needs to short-circuit, its
//! steps should return [`Maybe`](crate::control::Maybe) or
//! [`Outcome`](crate::control::Outcome) and chain through those
//! containers - the containers own branching, the pipe owns sequencing.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::pipe;
//!
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let pipeline = pipe!(double, double, double);
//! assert_eq!(pipeline(1), 8);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `pipe!(f, g, h)` behaves like `pipe!(pipe!(f, g), h)`
//!   and like `pipe!(f, pipe!(g, h))`
//! - **Identity**: `pipe!(identity, f)` and `pipe!(f, identity)` behave like `f`
//! - **Duality**: `pipe!(f, g)` behaves like `compose!(g, f)`

mod compose_macro;
mod pipe_macro;
mod utils;

// Re-export helper functions
pub use utils::{constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
