//! Module containing error details.

/// An error in the entry list of a string-template literal.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub enum EntryError {
	/// An entry extends beyond the end of the literal.
	EntryOutOfBounds(EntryOutOfBounds),

	/// An entry starts before the end of the previous entry.
	OverlappingEntries(OverlappingEntries),

	/// The text of an entry does not match the source it covers.
	MismatchedText(MismatchedText),

	/// An entry starts or ends inside a multi-byte character.
	SplitCharacter(SplitCharacter),
}

impl From<EntryOutOfBounds> for EntryError {
	fn from(other: EntryOutOfBounds) -> Self {
		Self::EntryOutOfBounds(other)
	}
}

impl From<OverlappingEntries> for EntryError {
	fn from(other: OverlappingEntries) -> Self {
		Self::OverlappingEntries(other)
	}
}

impl From<MismatchedText> for EntryError {
	fn from(other: MismatchedText) -> Self {
		Self::MismatchedText(other)
	}
}

impl From<SplitCharacter> for EntryError {
	fn from(other: SplitCharacter) -> Self {
		Self::SplitCharacter(other)
	}
}

impl std::error::Error for EntryError {}

impl std::fmt::Display for EntryError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::EntryOutOfBounds(e) => e.fmt(f),
			Self::OverlappingEntries(e) => e.fmt(f),
			Self::MismatchedText(e) => e.fmt(f),
			Self::SplitCharacter(e) => e.fmt(f),
		}
	}
}

/// An entry extends beyond the end of the literal.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct EntryOutOfBounds {
	/// The index of the entry in the entry list.
	pub index: usize,

	/// The byte offset of the start of the entry.
	pub position: usize,

	/// The length of the entry in bytes.
	pub len: usize,

	/// The length of the literal in bytes.
	pub source_len: usize,
}

impl std::error::Error for EntryOutOfBounds {}

impl std::fmt::Display for EntryOutOfBounds {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(
			f,
			"Entry {} out of bounds: {}..{} exceeds literal length {}",
			self.index,
			self.position,
			self.position + self.len,
			self.source_len,
		)
	}
}

/// An entry starts before the end of the previous entry.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct OverlappingEntries {
	/// The index of the offending entry in the entry list.
	pub index: usize,

	/// The byte offset of the start of the offending entry.
	pub position: usize,

	/// The length of the offending entry in bytes.
	pub len: usize,

	/// The byte offset of the end of the previous entry.
	pub previous_end: usize,
}

impl std::error::Error for OverlappingEntries {}

impl std::fmt::Display for OverlappingEntries {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(
			f,
			"Entry {} starts at {}, before the end of the previous entry at {}",
			self.index,
			self.position,
			self.previous_end,
		)
	}
}

/// The text of an entry does not match the source it covers.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct MismatchedText {
	/// The index of the entry in the entry list.
	pub index: usize,

	/// The byte offset of the start of the entry.
	pub position: usize,

	/// The text of the entry.
	pub text: String,
}

impl std::error::Error for MismatchedText {}

impl std::fmt::Display for MismatchedText {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Entry {} text {:?} does not match the literal source", self.index, self.text)
	}
}

/// An entry starts or ends inside a multi-byte character.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct SplitCharacter {
	/// The index of the entry in the entry list.
	pub index: usize,

	/// The byte offset that is not on a character boundary.
	pub position: usize,
}

impl std::error::Error for SplitCharacter {}

impl std::fmt::Display for SplitCharacter {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Entry {} has offset {} inside a character of the literal", self.index, self.position)
	}
}

impl EntryError {
	/// Get the range in the source text that contains the error.
	///
	/// The range is clamped to the length of the literal for entries that are out of bounds.
	pub fn source_range(&self) -> std::ops::Range<usize> {
		let (start, len) = match &self {
			Self::EntryOutOfBounds(e) => {
				let start = e.position.min(e.source_len);
				(start, e.source_len - start)
			},
			Self::OverlappingEntries(e) => {
				(e.position, e.len)
			},
			Self::MismatchedText(e) => {
				(e.position, e.text.len())
			},
			Self::SplitCharacter(e) => {
				(e.position, 0)
			},
		};
		std::ops::Range {
			start,
			end: start + len,
		}
	}

	/// Get the line of source that contains the error.
	///
	/// Positions past the end of `source` or inside a character are moved back to the nearest character boundary.
	pub fn source_line<'a>(&self, source: &'a str) -> &'a str {
		source_line(source, self.source_range())
	}

	/// Write source highlighting for the error location.
	///
	/// The highlighting ends with a newline.
	///
	/// Note: this function doesn't print anything if the source line exceeds 60 characters in width.
	/// For more control over this behaviour, consider using [`Self::source_range()`] and [`Self::source_line()`] instead.
	pub fn write_source_highlighting(&self, f: &mut impl std::fmt::Write, source: &str) -> std::fmt::Result {
		write_source_highlighting(f, source, self.source_range())
	}

	/// Get source highlighting for the error location as a string.
	///
	/// The highlighting ends with a newline.
	pub fn source_highlighting(&self, source: &str) -> String {
		let mut output = String::new();
		// Writing to a String can not fail.
		let _ = self.write_source_highlighting(&mut output, source);
		output
	}
}

/// An error in an injection configuration.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub enum ConfigError {
	/// An injection has an empty language identifier.
	EmptyLanguage(EmptyLanguage),

	/// An injection refers to a language that is not in the list of languages.
	UnknownLanguage(UnknownLanguage),
}

impl From<EmptyLanguage> for ConfigError {
	fn from(other: EmptyLanguage) -> Self {
		Self::EmptyLanguage(other)
	}
}

impl From<UnknownLanguage> for ConfigError {
	fn from(other: UnknownLanguage) -> Self {
		Self::UnknownLanguage(other)
	}
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::EmptyLanguage(e) => e.fmt(f),
			Self::UnknownLanguage(e) => e.fmt(f),
		}
	}
}

/// An injection has an empty language identifier.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct EmptyLanguage {
	/// The index of the injection in the configuration.
	pub index: usize,
}

impl std::error::Error for EmptyLanguage {}

impl std::fmt::Display for EmptyLanguage {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Injection {} has an empty language", self.index)
	}
}

/// An injection refers to a language that is not in the list of languages.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct UnknownLanguage {
	/// The index of the injection in the configuration.
	pub index: usize,

	/// The unknown language identifier.
	pub language: String,
}

impl std::error::Error for UnknownLanguage {}

impl std::fmt::Display for UnknownLanguage {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Injection {} refers to unknown language: {}", self.index, self.language)
	}
}

fn source_line(source: &str, range: std::ops::Range<usize>) -> &str {
	let range = char_range(source, range);
	let start = line_start(source, range.start);
	let end = line_end(source, range.start);
	&source[start..end]
}

fn write_source_highlighting(
	f: &mut impl std::fmt::Write,
	source: &str,
	range: std::ops::Range<usize>,
) -> std::fmt::Result {
	use unicode_width::UnicodeWidthStr;

	let range = char_range(source, range);
	let line_start = line_start(source, range.start);
	let line = source_line(source, range.clone());
	if line.width() > 60 {
		return Ok(())
	}
	let range = range.start - line_start..(range.end - line_start).min(line.len());
	write!(f, "  {}\n  ", line)?;
	write_underline(f, line, range)?;
	writeln!(f)
}

/// Shrink a range to lie within `source` on character boundaries.
fn char_range(source: &str, range: std::ops::Range<usize>) -> std::ops::Range<usize> {
	let start = floor_char_boundary(source, range.start);
	let end = floor_char_boundary(source, range.end).max(start);
	start..end
}

fn floor_char_boundary(source: &str, position: usize) -> usize {
	let mut position = position.min(source.len());
	while !source.is_char_boundary(position) {
		position -= 1;
	}
	position
}

fn line_start(source: &str, position: usize) -> usize {
	match source.as_bytes()[..position].iter().rposition(|&c| c == b'\n' || c == b'\r') {
		Some(line_end) => line_end + 1,
		None => 0,
	}
}

fn line_end(source: &str, position: usize) -> usize {
	match source.as_bytes()[position..].iter().position(|&c| c == b'\n' || c == b'\r') {
		Some(line_end) => position + line_end,
		None => source.len()
	}
}

fn write_underline(f: &mut impl std::fmt::Write, line: &str, range: std::ops::Range<usize>) -> std::fmt::Result {
	use unicode_width::UnicodeWidthStr;
	let spaces = line[..range.start].width();
	let carets = line[range].width().max(1);
	write!(f, "{}", " ".repeat(spaces))?;
	write!(f, "{}", "^".repeat(carets))?;
	Ok(())
}
