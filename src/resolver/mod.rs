//! Constant resolvers and related utilities.
//!
//! A [`ConstantResolver`] gives the compile-time value of an interpolated expression, if it has one.
//! The splitter only asks one question per interpolation, through [`resolve_string()`].

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

mod fallback;
pub use fallback::*;

mod fn_resolver;
pub use fn_resolver::*;

mod map_constant;
pub use map_constant::*;

/// A compile-time constant value.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
	/// A string constant.
	String(String),

	/// A character constant.
	Char(char),

	/// An integer constant.
	Integer(i64),

	/// A floating point constant.
	Float(f64),

	/// A boolean constant.
	Boolean(bool),

	/// The null constant.
	Null,

	/// The evaluator produced an erroneous value, with a message describing the problem.
	Error(String),
}

impl Constant {
	/// Get the value as string slice if this is a string constant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Get the value as string if this is a string constant.
	pub fn into_string(self) -> Option<String> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Check if the evaluator produced an erroneous value.
	pub fn is_error(&self) -> bool {
		matches!(self, Self::Error(_))
	}
}

impl From<String> for Constant {
	fn from(other: String) -> Self {
		Self::String(other)
	}
}

impl From<&str> for Constant {
	fn from(other: &str) -> Self {
		Self::String(other.to_owned())
	}
}

impl From<char> for Constant {
	fn from(other: char) -> Self {
		Self::Char(other)
	}
}

impl From<i32> for Constant {
	fn from(other: i32) -> Self {
		Self::Integer(other.into())
	}
}

impl From<i64> for Constant {
	fn from(other: i64) -> Self {
		Self::Integer(other)
	}
}

impl From<f64> for Constant {
	fn from(other: f64) -> Self {
		Self::Float(other)
	}
}

impl From<bool> for Constant {
	fn from(other: bool) -> Self {
		Self::Boolean(other)
	}
}

/// Trait for types that can evaluate expressions to compile-time constants.
///
/// Implementations must not block indefinitely.
/// The splitter does not bound the time spent in [`resolve()`][Self::resolve].
pub trait ConstantResolver<E: ?Sized> {
	/// Get the constant value of an expression, if it has one.
	fn resolve(&self, expression: &E) -> Option<Constant>;
}

/// Resolve an expression to a string constant.
///
/// This is the only question the splitter asks a resolver.
/// A missing expression, an unknown expression, an erroneous value and constants of other types all give [`None`].
///
/// # Example
/// ```rust
/// # use template_injection::resolver::{resolve_string, Constant};
/// let constants = [("table", Constant::from("users")), ("limit", Constant::from(10))];
///
/// assert_eq!(resolve_string(&constants, Some("table")), Some("users".to_string()));
/// assert_eq!(resolve_string(&constants, Some("limit")), None);
/// assert_eq!(resolve_string(&constants, None::<&str>), None);
/// ```
pub fn resolve_string<E, R>(resolver: &R, expression: Option<&E>) -> Option<String>
where
	E: ?Sized,
	R: ConstantResolver<E> + ?Sized,
{
	resolver.resolve(expression?)?.into_string()
}

/// Allow using key-value [`slice`]s as [`ConstantResolver`]s.
///
/// The expression text is used as key.
/// For many entries, a [`HashMap`] or [`BTreeMap`] may perform better.
impl<E, K, V> ConstantResolver<E> for [(K, V)]
where
	E: AsRef<str> + ?Sized,
	K: Borrow<str>,
	V: Clone + Into<Constant>,
{
	fn resolve(&self, expression: &E) -> Option<Constant> {
		let key = expression.as_ref();
		self.iter().find_map(|(k, v)| (k.borrow() == key).then(|| v.clone().into()))
	}
}

/// Allow using key-value [`arrays`](`array`) as [`ConstantResolver`]s.
impl<E, K, V, const N: usize> ConstantResolver<E> for [(K, V); N]
where
	E: AsRef<str> + ?Sized,
	K: Borrow<str>,
	V: Clone + Into<Constant>,
{
	#[inline(always)]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		ConstantResolver::resolve(self.as_slice(), expression)
	}
}

/// Allow using key-value [`Vec`]s as [`ConstantResolver`]s.
impl<E, K, V> ConstantResolver<E> for Vec<(K, V)>
where
	E: AsRef<str> + ?Sized,
	K: Borrow<str>,
	V: Clone + Into<Constant>,
{
	#[inline(always)]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		ConstantResolver::resolve(self.as_slice(), expression)
	}
}

impl<E, T> ConstantResolver<E> for &'_ T
where
	E: ?Sized,
	T: ?Sized + ConstantResolver<E>,
{
	#[inline(always)]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		T::resolve(self, expression)
	}
}

impl<E, T> ConstantResolver<E> for &'_ mut T
where
	E: ?Sized,
	T: ?Sized + ConstantResolver<E>,
{
	#[inline(always)]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		T::resolve(self, expression)
	}
}

impl<E, T> ConstantResolver<E> for std::boxed::Box<T>
where
	E: ?Sized,
	T: ?Sized + ConstantResolver<E>,
{
	#[inline(always)]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		T::resolve(self, expression)
	}
}

impl<E, T> ConstantResolver<E> for std::rc::Rc<T>
where
	E: ?Sized,
	T: ?Sized + ConstantResolver<E>,
{
	#[inline(always)]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		T::resolve(self, expression)
	}
}

impl<E, T> ConstantResolver<E> for std::sync::Arc<T>
where
	E: ?Sized,
	T: ?Sized + ConstantResolver<E>,
{
	#[inline(always)]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		T::resolve(self, expression)
	}
}

/// A resolver that never resolves anything.
///
/// Every interpolation is replaced by a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConstants;

impl<E: ?Sized> ConstantResolver<E> for NoConstants {
	#[inline]
	fn resolve(&self, _expression: &E) -> Option<Constant> {
		None
	}
}

impl<E, V> ConstantResolver<E> for BTreeMap<&str, V>
where
	E: AsRef<str> + ?Sized,
	V: Clone + Into<Constant>,
{
	#[inline]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		self.get(expression.as_ref()).cloned().map(Into::into)
	}
}

impl<E, V> ConstantResolver<E> for BTreeMap<String, V>
where
	E: AsRef<str> + ?Sized,
	V: Clone + Into<Constant>,
{
	#[inline]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		self.get(expression.as_ref()).cloned().map(Into::into)
	}
}

impl<E, V, S: BuildHasher> ConstantResolver<E> for HashMap<&str, V, S>
where
	E: AsRef<str> + ?Sized,
	V: Clone + Into<Constant>,
{
	#[inline]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		self.get(expression.as_ref()).cloned().map(Into::into)
	}
}

impl<E, V, S: BuildHasher> ConstantResolver<E> for HashMap<String, V, S>
where
	E: AsRef<str> + ?Sized,
	V: Clone + Into<Constant>,
{
	#[inline]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		self.get(expression.as_ref()).cloned().map(Into::into)
	}
}
