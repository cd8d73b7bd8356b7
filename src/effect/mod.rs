//! Stateful computation as pure function values.
//!
//! This module provides the [`State`] monad: a computation that takes an
//! input state and returns a result paired with a next state. Threading
//! state through a sequence of steps becomes ordinary function
//! composition instead of manual bookkeeping, while every value involved
//! stays immutable.
//!
//! # Examples
//!
//! ## A counter threaded through a chain
//!
//! ```rust
//! use kleisli::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment().then(increment()).then(State::get());
//! let (count, final_state) = computation.run(0);
//! assert_eq!(count, 2);
//! assert_eq!(final_state, 2);
//! ```
//!
//! ## Reading a derived view without mutating
//!
//! ```rust
//! use kleisli::effect::State;
//!
//! #[derive(Clone)]
//! struct Session { user: String, hits: u64 }
//!
//! let computation: State<Session, u64> = State::gets(|session: &Session| session.hits);
//! let session = Session { user: "ada".to_string(), hits: 3 };
//! assert_eq!(computation.eval(session), 3);
//! ```

mod state;

pub use state::State;
