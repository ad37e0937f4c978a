//! Injection configuration.

use std::collections::BTreeSet;

use crate::error::{self, ConfigError};
use crate::{InjectionDescriptor, LanguageRegistry};

/// A set of injectable languages with the injections configured for them.
///
/// With the `json`, `toml` or `yaml` feature enabled, a configuration can be loaded from a document:
///
/// ```toml
/// languages = ["sql", "regexp"]
///
/// [[injections]]
/// language = "sql"
/// prefix = "SELECT * FROM t WHERE "
///
/// [[injections]]
/// language = "regexp"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct InjectionConfig {
	/// The languages that can be injected.
	pub languages: BTreeSet<String>,

	/// The configured injections.
	pub injections: Vec<InjectionDescriptor>,
}

impl InjectionConfig {
	/// Create an empty configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an injectable language.
	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.languages.insert(language.into());
		self
	}

	/// Add an injection.
	pub fn with_injection(mut self, injection: InjectionDescriptor) -> Self {
		self.injections.push(injection);
		self
	}

	/// Check that every injection refers to a known, non-empty language.
	pub fn validate(&self) -> Result<(), ConfigError> {
		for (index, injection) in self.injections.iter().enumerate() {
			if injection.language.is_empty() {
				return Err(error::EmptyLanguage { index }.into());
			}
			if !self.languages.contains(&injection.language) {
				return Err(error::UnknownLanguage {
					index,
					language: injection.language.clone(),
				}
				.into());
			}
		}
		Ok(())
	}

	/// Get the first injection configured for a language.
	pub fn injection(&self, language: &str) -> Option<&InjectionDescriptor> {
		self.injections.iter().find(|x| x.language == language)
	}
}

impl LanguageRegistry for InjectionConfig {
	#[inline]
	fn contains_language(&self, language: &str) -> bool {
		self.languages.contains(language)
	}
}

#[cfg(test)]
mod test {
	use assert2::{assert, let_assert};

	use super::*;

	fn config() -> InjectionConfig {
		InjectionConfig::new()
			.with_language("sql")
			.with_language("regexp")
			.with_injection(InjectionDescriptor::new("sql").with_prefix("SELECT "))
			.with_injection(InjectionDescriptor::new("regexp"))
	}

	#[test]
	fn valid_config() {
		let config = config();
		assert!(let Ok(()) = config.validate());
		assert!(config.contains_language("sql"));
		assert!(!config.contains_language("html"));
		let_assert!(Some(injection) = config.injection("sql"));
		assert!(injection.prefix == "SELECT ");
		assert!(config.injection("html").is_none());
	}

	#[test]
	fn unknown_language() {
		let config = config().with_injection(InjectionDescriptor::new("html"));
		let_assert!(Err(ConfigError::UnknownLanguage(e)) = config.validate());
		assert!(e.index == 2);
		assert!(e.language == "html");
	}

	#[test]
	fn empty_language() {
		let config = InjectionConfig::new().with_injection(InjectionDescriptor::default());
		let_assert!(Err(ConfigError::EmptyLanguage(e)) = config.validate());
		assert!(e.index == 0);
	}
}
