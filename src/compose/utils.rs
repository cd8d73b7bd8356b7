//! Helper combinators for function composition.
//!
//! Two fundamental building blocks used alongside the composition
//! macros:
//!
//! - [`identity`]: returns its argument unchanged (the I combinator)
//! - [`constant`]: always returns the same value (the K combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit of composition:
/// `pipe!(identity, f)` and `pipe!(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use kleisli::compose::identity;
/// use kleisli::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(pipe!(identity, double)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// Useful for elimination branches that produce a fixed result, such as
/// the absent arm of a fold.
///
/// # Examples
///
/// ```
/// use kleisli::compose::constant;
///
/// let always_zero = constant::<_, &str>(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
///
/// ```
/// use kleisli::compose::constant;
///
/// // Replace every element of an iterator
/// let dashes: Vec<&str> = vec![1, 2, 3].into_iter().map(constant("-")).collect();
/// assert_eq!(dashes, vec!["-", "-", "-"]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
