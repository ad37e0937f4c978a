//! Registries of injectable languages.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Trait for types that know which languages can be injected.
pub trait LanguageRegistry {
	/// Check if a language with the given identifier can be injected.
	fn contains_language(&self, language: &str) -> bool;
}

/// A registry that accepts every language identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyLanguage;

impl LanguageRegistry for AnyLanguage {
	#[inline]
	fn contains_language(&self, _language: &str) -> bool {
		true
	}
}

/// Allow using [`slice`]s of language identifiers as [`LanguageRegistry`].
///
/// # Example
/// ```rust
/// # use template_injection::LanguageRegistry;
/// let languages = ["sql", "regexp"];
///
/// assert!(languages.contains_language("sql"));
/// assert!(!languages.contains_language("html"));
/// ```
impl<K: Borrow<str>> LanguageRegistry for [K] {
	fn contains_language(&self, language: &str) -> bool {
		self.iter().any(|k| k.borrow() == language)
	}
}

impl<K: Borrow<str>, const N: usize> LanguageRegistry for [K; N] {
	#[inline(always)]
	fn contains_language(&self, language: &str) -> bool {
		self.as_slice().contains_language(language)
	}
}

impl<K: Borrow<str>> LanguageRegistry for Vec<K> {
	#[inline(always)]
	fn contains_language(&self, language: &str) -> bool {
		self.as_slice().contains_language(language)
	}
}

impl LanguageRegistry for BTreeSet<String> {
	#[inline]
	fn contains_language(&self, language: &str) -> bool {
		self.contains(language)
	}
}

impl LanguageRegistry for BTreeSet<&str> {
	#[inline]
	fn contains_language(&self, language: &str) -> bool {
		self.contains(language)
	}
}

impl<S: BuildHasher> LanguageRegistry for HashSet<String, S> {
	#[inline]
	fn contains_language(&self, language: &str) -> bool {
		self.contains(language)
	}
}

impl<S: BuildHasher> LanguageRegistry for HashSet<&str, S> {
	#[inline]
	fn contains_language(&self, language: &str) -> bool {
		self.contains(language)
	}
}

impl<T: ?Sized + LanguageRegistry> LanguageRegistry for &'_ T {
	#[inline(always)]
	fn contains_language(&self, language: &str) -> bool {
		T::contains_language(self, language)
	}
}

impl<T: ?Sized + LanguageRegistry> LanguageRegistry for std::boxed::Box<T> {
	#[inline(always)]
	fn contains_language(&self, language: &str) -> bool {
		T::contains_language(self, language)
	}
}

impl<T: ?Sized + LanguageRegistry> LanguageRegistry for std::rc::Rc<T> {
	#[inline(always)]
	fn contains_language(&self, language: &str) -> bool {
		T::contains_language(self, language)
	}
}

impl<T: ?Sized + LanguageRegistry> LanguageRegistry for std::sync::Arc<T> {
	#[inline(always)]
	fn contains_language(&self, language: &str) -> bool {
		T::contains_language(self, language)
	}
}
