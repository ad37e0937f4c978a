use super::{Constant, ConstantResolver};

/// [`ConstantResolver`] produced by [`from_fn()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FnResolver<F> {
	func: F,
}

impl<E, F, V> ConstantResolver<E> for FnResolver<F>
where
	E: ?Sized,
	F: Fn(&E) -> Option<V>,
	V: Into<Constant>,
{
	#[inline(always)]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		(self.func)(expression).map(Into::into)
	}
}

/// Creates a [`ConstantResolver`] that delegates to the given function.
///
/// This is the usual way to plug in an external constant evaluator.
///
/// # Example
/// ```rust
/// # use template_injection::resolver::{from_fn, Constant, ConstantResolver};
///
/// let constants = from_fn(|expression: &str| match expression {
///     "TABLE" => Some(Constant::from("users")),
///     "LIMIT" => Some(Constant::from(10)),
///     _ => None,
/// });
///
/// assert_eq!(constants.resolve("TABLE"), Some(Constant::from("users")));
/// assert_eq!(constants.resolve("LIMIT"), Some(Constant::Integer(10)));
/// assert_eq!(constants.resolve("column"), None);
/// ```
pub const fn from_fn<E, F, V>(func: F) -> FnResolver<F>
where
	E: ?Sized,
	F: Fn(&E) -> Option<V>,
{
	FnResolver { func }
}
