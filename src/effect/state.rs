//! State monad - computations that thread a state value.
//!
//! A `State<S, A>` wraps a pure transition function `S -> (A, S)`: given
//! an input state it produces a result and the next state. The container
//! has no state of its own - it *is* the transition - so running the same
//! computation twice on the same input always yields the same pair.
//!
//! Computations whose only purpose is to transform the state (such as
//! [`State::put`] and [`State::modify`]) yield the unit value `()` as
//! their result.
//!
//! # Laws
//!
//! - Functor identity: `m.map(identity)` runs like `m`
//! - Functor composition: `m.map(f).map(g)` runs like `m.map(|x| g(f(x)))`
//! - Monad left identity: `State::pure(a).and_then(f)` runs like `f(a)`
//! - Monad right identity: `m.and_then(State::pure)` runs like `m`
//! - Monad associativity: `m.and_then(f).and_then(g)` runs like
//!   `m.and_then(|x| f(x).and_then(g))`
//! - Get/put: `State::get().and_then(State::put)` leaves any state unchanged
//! - Put/put: `State::put(a).then(State::put(b))` runs like `State::put(b)`
//! - Modify composition: `State::modify(f).then(State::modify(g))` runs
//!   like `State::modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::State;
//!
//! let computation: State<i32, i32> = State::get()
//!     .and_then(|current| State::put(current + 1).then(State::pure(current)));
//!
//! let (result, final_state) = computation.run(10);
//! assert_eq!(result, 10);
//! assert_eq!(final_state, 11);
//! ```

use std::rc::Rc;

/// A stateful computation: a pure mapping from an input state to a
/// result paired with a next state.
///
/// The transition is stored behind an `Rc<dyn Fn>`, so a `State` is
/// cheaply cloneable and can be run any number of times; the `Fn` bound
/// (rather than `FnMut`) is what rules out hidden mutable capture and
/// keeps repeated runs referentially transparent. The `Rc` also makes
/// `State` deliberately single-threaded: it is neither `Send` nor `Sync`.
///
/// # Type Parameters
///
/// - `S`: The state type threaded through the computation
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::State;
///
/// let computation: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
/// let (result, final_state) = computation.run(10);
/// assert_eq!(result, 20);
/// assert_eq!(final_state, 11);
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a transition function as a `State`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, String> =
    ///     State::new(|s: i32| (format!("saw {s}"), s + 1));
    /// let (result, final_state) = computation.run(10);
    /// assert_eq!(result, "saw 10");
    /// assert_eq!(final_state, 11);
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    // =========================================================================
    // Entry Points
    // =========================================================================

    /// Applies the computation to an initial state.
    ///
    /// Returns both the result and the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, i32> = State::new(|s: i32| (s + 1, s * 2));
    /// assert_eq!(computation.run(10), (11, 20));
    /// ```
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Applies the computation and keeps only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(computation.eval(10), 20);
    /// ```
    pub fn eval(&self, initial_state: S) -> A {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Applies the computation and keeps only the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(computation.exec(10), 11);
    /// ```
    pub fn exec(&self, initial_state: S) -> S {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a constant value into a computation that leaves the state
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, &str> = State::pure("constant");
    /// assert_eq!(computation.run(42), ("constant", 42));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Projects a derived view out of the current state without
    /// modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// #[derive(Clone)]
    /// struct Config { port: u16 }
    ///
    /// let computation: State<Config, u16> = State::gets(|config: &Config| config.port);
    /// assert_eq!(computation.eval(Config { port: 8080 }), 8080);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (result, state)
        })
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the result, threading the state unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, i32> = State::new(|s: i32| (s, s));
    /// let mapped = computation.map(|value| value * 2);
    /// assert_eq!(mapped.run(21), (42, 21));
    /// ```
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (result, next_state) = (transition)(state);
            (function(result), next_state)
        })
    }

    /// Sequences this computation with a function producing the next one.
    ///
    /// This is the monadic bind: the first computation runs to
    /// `(a, s2)`, then `function(a)` builds the next computation, which
    /// runs on `s2`. Multi-step stateful pipelines compose this way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = computation.and_then(|value| State::new(move |s: i32| (value + s, s)));
    /// // First step: (10, 11); second step with state 11: (10 + 11, 11)
    /// assert_eq!(chained.run(10), (21, 11));
    /// ```
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (result, intermediate_state) = (transition)(state);
            function(result).run(intermediate_state)
        })
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation = State::modify(|count: i32| count + 1).then(State::get());
    /// assert_eq!(computation.run(0), (1, 1));
    /// ```
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.and_then(move |_| next.clone())
    }

    /// Combines two computations with a binary function, threading the
    /// state through both in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let second: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// let combined = first.map2(second, |a, b| a + b);
    /// // first: (10, 11); second with state 11: (22, 12)
    /// assert_eq!(combined.run(10), (32, 12));
    /// ```
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first_transition = self.transition;
        let second_transition = other.transition;
        State::new(move |state| {
            let (first_result, intermediate_state) = (first_transition)(state);
            let (second_result, final_state) = (second_transition)(intermediate_state);
            (function(first_result, second_result), final_state)
        })
    }
}

// =============================================================================
// State Access and Replacement
// =============================================================================

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Returns the current state unchanged, as both result and next state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, i32> = State::get();
    /// assert_eq!(computation.run(42), (42, 42));
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }

    /// Lifts a concrete state value into an identity seed: the incoming
    /// state is ignored, `state` is installed, and it is yielded as the
    /// result as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, i32> = State::init(7);
    /// assert_eq!(computation.run(99), (7, 7));
    /// ```
    pub fn init(state: S) -> Self {
        Self::new(move |_| (state.clone(), state.clone()))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Discards the current state and installs a new one, yielding unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, ()> = State::put(100);
    /// assert_eq!(computation.exec(42), 100);
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Transforms the current state with a function, yielding unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let computation: State<i32, ()> = State::modify(|x| x * 2);
    /// assert_eq!(computation.exec(21), 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: self.transition.clone(),
        }
    }
}

// The Rc keeps State on one thread.
static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);
