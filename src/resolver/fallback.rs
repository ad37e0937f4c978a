use super::{Constant, ConstantResolver};

/// [`ConstantResolver`] produced by [`fallback()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FallbackResolver<Base, Fallback> {
	base: Base,
	fallback: Fallback,
}

impl<E, Base, Fallback> ConstantResolver<E> for FallbackResolver<Base, Fallback>
where
	E: ?Sized,
	Base: ConstantResolver<E>,
	Fallback: ConstantResolver<E>,
{
	fn resolve(&self, expression: &E) -> Option<Constant> {
		self.base.resolve(expression).or_else(|| self.fallback.resolve(expression))
	}
}

/// Creates a [`ConstantResolver`] that will first ask `base`, and then ask `fallback`.
///
/// # Example
/// ```rust
/// # use template_injection::resolver::{fallback, Constant, ConstantResolver};
///
/// let local = [("table", "users")];
/// let global = [("schema", "public"), ("table", "ignored")];
/// let constants = fallback(local, global);
///
/// assert_eq!(constants.resolve("table"), Some(Constant::from("users")));
/// assert_eq!(constants.resolve("schema"), Some(Constant::from("public")));
/// assert_eq!(constants.resolve("column"), None);
/// ```
pub const fn fallback<Base, Fallback>(base: Base, fallback: Fallback) -> FallbackResolver<Base, Fallback> {
	FallbackResolver { base, fallback }
}
