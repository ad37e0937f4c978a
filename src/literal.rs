//! A validated view of a string-template literal.

use crate::error::{self, EntryError};
use crate::{ConstantResolver, Entry, InjectionDescriptor, InjectionResult, LanguageRegistry, Splitter};

/// A string-template literal: its source text and the entries the front end parsed from it.
///
/// Constructing a [`StringLiteral`] checks that the entries fit the source,
/// so splitting it always produces ranges that can be used to slice the source.
#[derive(Debug, Clone, Copy)]
pub struct StringLiteral<'a, E> {
	source: &'a str,
	entries: &'a [Entry<E>],
}

impl<'a, E> StringLiteral<'a, E> {
	/// Pair a literal source with its entries.
	///
	/// The entries must be in source order, must not overlap and must lie within `source`.
	/// Every entry must start and end on a character boundary of `source`.
	/// The text of literal and escape entries must match the source they cover.
	/// Gaps between entries are allowed: they usually hold the quotes of the literal.
	pub fn new(source: &'a str, entries: &'a [Entry<E>]) -> Result<Self, EntryError> {
		let mut previous_end = 0;
		for (index, entry) in entries.iter().enumerate() {
			let range = entry.range();
			if range.start < previous_end {
				return Err(error::OverlappingEntries {
					index,
					position: range.start,
					len: range.len(),
					previous_end,
				}
				.into());
			}
			if range.end > source.len() {
				return Err(error::EntryOutOfBounds {
					index,
					position: range.start,
					len: range.len(),
					source_len: source.len(),
				}
				.into());
			}
			if let Some(position) = [range.start, range.end].into_iter().find(|&x| !source.is_char_boundary(x)) {
				return Err(error::SplitCharacter { index, position }.into());
			}
			if let Entry::LiteralText(text) | Entry::EscapedChar(text) = entry {
				if source.get(range.clone()) != Some(text.text()) {
					return Err(error::MismatchedText {
						index,
						position: range.start,
						text: text.text().to_owned(),
					}
					.into());
				}
			}
			previous_end = range.end;
		}
		Ok(Self { source, entries })
	}

	/// Get the source text of the literal.
	#[inline]
	pub fn source(&self) -> &'a str {
		self.source
	}

	/// Get the entries of the literal.
	#[inline]
	pub fn entries(&self) -> &'a [Entry<E>] {
		self.entries
	}

	/// Split the literal into injection parts.
	///
	/// See [`Splitter::split()`] for details.
	pub fn split<L, R>(
		&self,
		languages: &L,
		constants: &R,
		descriptor: &InjectionDescriptor,
	) -> Option<InjectionResult>
	where
		L: LanguageRegistry + ?Sized,
		R: ConstantResolver<E> + ?Sized,
	{
		let result = Splitter::new(languages, constants).split(descriptor, self.entries)?;
		debug_assert!(result.parts.iter().all(|part| self.source.get(part.range.clone()).is_some()));
		Some(result)
	}

	/// Split the literal and stitch the injected fragment together.
	///
	/// Returns the result of the split and the fragment that the foreign parser would see.
	pub fn inject<L, R>(
		&self,
		languages: &L,
		constants: &R,
		descriptor: &InjectionDescriptor,
	) -> Option<(InjectionResult, String)>
	where
		L: LanguageRegistry + ?Sized,
		R: ConstantResolver<E> + ?Sized,
	{
		let result = self.split(languages, constants, descriptor)?;
		let fragment = result.render(self.source)?;
		Some((result, fragment))
	}
}
