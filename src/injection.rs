//! Injection descriptors and the partition produced by the splitter.

use std::ops::Range;

/// Describes how a literal should be injected with a foreign language.
///
/// The prefix and suffix are wrapped around the injected fragment as a whole,
/// so that the foreign parser sees a syntactically self-contained document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InjectionDescriptor {
	/// The identifier of the injected language.
	pub language: String,

	/// Text placed before the first part of the fragment.
	pub prefix: String,

	/// Text placed after the last part of the fragment.
	pub suffix: String,
}

impl InjectionDescriptor {
	/// Create a descriptor for a language, without prefix or suffix.
	pub fn new(language: impl Into<String>) -> Self {
		Self {
			language: language.into(),
			prefix: String::new(),
			suffix: String::new(),
		}
	}

	/// Set the prefix of the descriptor.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Set the suffix of the descriptor.
	pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.suffix = suffix.into();
		self
	}
}

/// A range of the literal to inject, with text to place around it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InjectionPart {
	/// The range in the literal, relative to the start of the literal.
	///
	/// Zero-length ranges only serve to carry a prefix or suffix.
	pub range: Range<usize>,

	/// Text placed before the range.
	pub prefix: String,

	/// Text placed after the range.
	pub suffix: String,
}

impl InjectionPart {
	/// Create a new part.
	pub fn new(range: Range<usize>, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
		Self {
			range,
			prefix: prefix.into(),
			suffix: suffix.into(),
		}
	}

	/// Check if the part covers no text of the literal.
	pub fn is_empty(&self) -> bool {
		self.range.is_empty()
	}
}

/// The result of splitting a literal into injection parts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InjectionResult {
	/// The injected language.
	pub language: String,

	/// True if at least one interpolation could not be resolved to a constant.
	///
	/// The parts then contain placeholders instead of the real values,
	/// so the injected fragment is only an approximation.
	pub unparsable: bool,

	/// The parts, ordered by their position in the literal.
	pub parts: Vec<InjectionPart>,
}

impl InjectionResult {
	/// Check if at least one interpolation could not be resolved.
	pub fn is_unparsable(&self) -> bool {
		self.unparsable
	}

	/// Get the parts of the result.
	pub fn parts(&self) -> &[InjectionPart] {
		&self.parts
	}

	/// Consume the result to get the parts.
	pub fn into_parts(self) -> Vec<InjectionPart> {
		self.parts
	}

	/// Stitch the injected fragment together from the source of the literal.
	///
	/// Each part contributes its prefix, the source text of its range and its suffix.
	/// Returns [`None`] if a range does not lie within `source` on character boundaries.
	pub fn render(&self, source: &str) -> Option<String> {
		let mut output = String::with_capacity(source.len());
		for part in &self.parts {
			output.push_str(&part.prefix);
			output.push_str(source.get(part.range.clone())?);
			output.push_str(&part.suffix);
		}
		Some(output)
	}
}

#[cfg(test)]
mod test {
	use assert2::{assert, check};

	use super::*;

	#[test]
	fn descriptor_builder() {
		let descriptor = InjectionDescriptor::new("sql").with_prefix("SELECT ").with_suffix(";");
		assert!(descriptor.language == "sql");
		assert!(descriptor.prefix == "SELECT ");
		assert!(descriptor.suffix == ";");
	}

	#[test]
	fn render_stitches_prefix_text_and_suffix() {
		let result = InjectionResult {
			language: "sql".into(),
			unparsable: false,
			parts: vec![
				InjectionPart::new(1..8, "<", ""),
				InjectionPart::new(12..12, "users", ""),
				InjectionPart::new(12..18, "", ">"),
			],
		};
		check!(result.render("\"select ${t} where\"").as_deref() == Some("<select users where>"));
	}

	#[test]
	fn render_rejects_ranges_outside_source() {
		let result = InjectionResult {
			language: "sql".into(),
			unparsable: false,
			parts: vec![InjectionPart::new(0..10, "", "")],
		};
		assert!(result.render("short").is_none());
	}
}
