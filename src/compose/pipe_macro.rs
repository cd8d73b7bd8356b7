//! The `pipe!` macro for left-to-right function composition.
//!
//! This module provides the [`pipe!`] macro, which chains unary functions
//! into a single function applied in the order the functions are written.

/// Chains unary functions into one function, applied left to right.
///
/// `pipe!(f, g, h)` returns a function equivalent to `|x| h(g(f(x)))`:
/// the first listed function is applied first, matching the order data
/// flows through the pipeline. This is the reverse of mathematical
/// composition; for the right-to-left reading use
/// [`compose!`](crate::compose!), with `pipe!(f, g)` equivalent to
/// `compose!(g, f)`.
///
/// The types of consecutive steps must chain: each function's output
/// type is the next function's input type. A mismatched step is a
/// compile error at the `pipe!` call site.
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g)` - Returns a function computing `g(f(x))`
/// - `pipe!(f, g, h, ...)` - Any number of further steps, applied in
///   listed order
///
/// # Type Requirements
///
/// Each step only needs to implement [`FnOnce`] for the composed
/// function to be callable once; steps implementing [`Fn`] yield a
/// composed function that can be called repeatedly.
///
/// # Examples
///
/// ## A three-step pipeline
///
/// ```
/// use kleisli::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let pipeline = pipe!(double, double, double);
/// assert_eq!(pipeline(1), 8);
/// ```
///
/// ## Types flow left to right
///
/// ```
/// use kleisli::pipe;
///
/// fn to_words(text: &str) -> Vec<&str> { text.split_whitespace().collect() }
/// fn count(words: Vec<&str>) -> usize { words.len() }
///
/// let word_count = pipe!(to_words, count);
/// assert_eq!(word_count("the quick brown fox"), 4);
/// ```
///
/// ## Single function is returned as-is
///
/// ```
/// use kleisli::pipe;
///
/// let add_one = pipe!(|x: i32| x + 1);
/// assert_eq!(add_one(41), 42);
/// ```
///
/// ## Container-producing steps chain through the container
///
/// ```
/// use kleisli::control::Maybe;
/// use kleisli::pipe;
///
/// fn parse(text: &str) -> Maybe<i32> {
///     Maybe::from_option(text.parse().ok())
/// }
///
/// // The pipe sequences the wrapping; Maybe owns the branching.
/// let parse_and_double = pipe!(parse, |m: Maybe<i32>| m.map(|x| x * 2));
/// assert_eq!(parse_and_double("21"), Maybe::Just(42));
/// assert_eq!(parse_and_double("nope"), Maybe::Nothing);
/// ```
#[macro_export]
macro_rules! pipe {
    // Single function: the pipeline is the function itself
    ($function:expr $(,)?) => {
        $function
    };

    // Two functions: apply the first, then the second
    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // Three or more functions: peel the first, pipe the rest
    // pipe!(f, g, h, ...) = x -> pipe!(g, h, ...)(f(x))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::pipe!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}
