use super::{Constant, ConstantResolver};

/// [`ConstantResolver`] produced by [`map_constant()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MapConstant<R, F> {
	resolver: R,
	func: F,
}

impl<E, R, F> ConstantResolver<E> for MapConstant<R, F>
where
	E: ?Sized,
	R: ConstantResolver<E>,
	F: Fn(Constant) -> Constant,
{
	fn resolve(&self, expression: &E) -> Option<Constant> {
		let value = self.resolver.resolve(expression)?;
		Some((self.func)(value))
	}
}

/// Creates a [`ConstantResolver`] that will apply a function `func` to constants found by `resolver`.
///
/// Only string constants are spliced into injected fragments.
/// This can be used to turn other constants into strings first.
///
/// # Example
/// ```rust
/// # use template_injection::resolver::{map_constant, Constant, ConstantResolver};
///
/// let constants = [("limit", Constant::Integer(10)), ("table", Constant::from("users"))];
/// let stringified = map_constant(constants, |value| match value {
///     Constant::Integer(x) => Constant::String(x.to_string()),
///     other => other,
/// });
///
/// assert_eq!(stringified.resolve("limit"), Some(Constant::from("10")));
/// assert_eq!(stringified.resolve("table"), Some(Constant::from("users")));
/// assert_eq!(stringified.resolve("offset"), None);
/// ```
pub const fn map_constant<R, F>(resolver: R, func: F) -> MapConstant<R, F>
where
	F: Fn(Constant) -> Constant,
{
	MapConstant { resolver, func }
}
