use indexmap::{IndexMap, IndexSet};

use crate::{Constant, ConstantResolver, LanguageRegistry};

impl<E, V> ConstantResolver<E> for IndexMap<&str, V>
where
	E: AsRef<str> + ?Sized,
	V: Clone + Into<Constant>,
{
	#[inline]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		self.get(expression.as_ref()).cloned().map(Into::into)
	}
}

impl<E, V> ConstantResolver<E> for IndexMap<String, V>
where
	E: AsRef<str> + ?Sized,
	V: Clone + Into<Constant>,
{
	#[inline]
	fn resolve(&self, expression: &E) -> Option<Constant> {
		self.get(expression.as_ref()).cloned().map(Into::into)
	}
}

impl LanguageRegistry for IndexSet<&str> {
	#[inline]
	fn contains_language(&self, language: &str) -> bool {
		self.contains(language)
	}
}

impl LanguageRegistry for IndexSet<String> {
	#[inline]
	fn contains_language(&self, language: &str) -> bool {
		self.contains(language)
	}
}
