//! Entries of a parsed string-template literal.

use std::ops::Range;

/// One child of a parsed string-template literal, in source order.
///
/// All offsets are byte offsets relative to the start of the literal,
/// which usually includes the opening quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<E> {
	/// Raw literal characters.
	LiteralText(Text),

	/// An escape sequence.
	///
	/// For splitting purposes this behaves exactly like [`Entry::LiteralText`].
	EscapedChar(Text),

	/// A bare identifier interpolation (`$name`).
	NameRef(Interpolation<E>),

	/// A braced expression interpolation (`${expr}`).
	Block(Interpolation<E>),
}

/// The kind of an [`Entry`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
	/// See [`Entry::LiteralText`].
	LiteralText,

	/// See [`Entry::EscapedChar`].
	EscapedChar,

	/// See [`Entry::NameRef`].
	NameRef,

	/// See [`Entry::Block`].
	Block,
}

/// A piece of text copied verbatim from the literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
	/// The text as it appears in the source, escapes not decoded.
	text: String,

	/// The range of the text in the literal.
	range: Range<usize>,
}

/// An interpolated sub-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation<E> {
	/// The expression, if the front end produced one.
	///
	/// An empty block (`${}`) has no expression and never resolves to a constant.
	expression: Option<E>,

	/// The range of the whole interpolation in the literal, including `$` and braces.
	range: Range<usize>,
}

impl Text {
	/// Create a text piece starting at `start`.
	///
	/// The length of the piece is the length of `text` in bytes.
	///
	/// # Panics
	/// Panics if the end of the piece does not fit in a `usize`.
	pub fn new(text: impl Into<String>, start: usize) -> Self {
		let text = text.into();
		let range = start..end_offset(start, text.len());
		Self { text, range }
	}

	/// The text as it appears in the source.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// The range of the text in the literal.
	pub fn range(&self) -> Range<usize> {
		self.range.clone()
	}
}

impl<E> Interpolation<E> {
	/// Create an interpolation covering `len` bytes from `start`.
	///
	/// # Panics
	/// Panics if `start + len` does not fit in a `usize`.
	pub fn new(expression: Option<E>, start: usize, len: usize) -> Self {
		Self {
			expression,
			range: start..end_offset(start, len),
		}
	}

	/// The interpolated expression, if any.
	pub fn expression(&self) -> Option<&E> {
		self.expression.as_ref()
	}

	/// The range of the interpolation in the literal.
	pub fn range(&self) -> Range<usize> {
		self.range.clone()
	}
}

impl<E> Entry<E> {
	/// Create a [`Entry::LiteralText`] entry.
	pub fn literal(text: impl Into<String>, start: usize) -> Self {
		Self::LiteralText(Text::new(text, start))
	}

	/// Create a [`Entry::EscapedChar`] entry.
	///
	/// `text` is the escape sequence as written in the source, for example `\n`.
	pub fn escape(text: impl Into<String>, start: usize) -> Self {
		Self::EscapedChar(Text::new(text, start))
	}

	/// Create a [`Entry::NameRef`] entry covering `len` bytes from `start`.
	pub fn name_ref(expression: E, start: usize, len: usize) -> Self {
		Self::NameRef(Interpolation::new(Some(expression), start, len))
	}

	/// Create a [`Entry::Block`] entry covering `len` bytes from `start`.
	///
	/// Pass `None` for a block without an expression.
	pub fn block(expression: Option<E>, start: usize, len: usize) -> Self {
		Self::Block(Interpolation::new(expression, start, len))
	}

	/// The kind of this entry.
	pub fn kind(&self) -> EntryKind {
		match self {
			Self::LiteralText(_) => EntryKind::LiteralText,
			Self::EscapedChar(_) => EntryKind::EscapedChar,
			Self::NameRef(_) => EntryKind::NameRef,
			Self::Block(_) => EntryKind::Block,
		}
	}

	/// Check if this entry is literal text or an escape sequence.
	pub fn is_text(&self) -> bool {
		self.kind().is_text()
	}

	/// Check if this entry is an interpolation.
	pub fn is_interpolation(&self) -> bool {
		!self.is_text()
	}

	/// The range of the entry in the literal.
	pub fn range(&self) -> Range<usize> {
		match self {
			Self::LiteralText(x) | Self::EscapedChar(x) => x.range(),
			Self::NameRef(x) | Self::Block(x) => x.range(),
		}
	}

	/// The start offset of the entry in the literal.
	pub fn start(&self) -> usize {
		self.range().start
	}

	/// The end offset of the entry in the literal.
	pub fn end(&self) -> usize {
		self.range().end
	}

	/// The length of the entry in bytes.
	pub fn len(&self) -> usize {
		self.range().len()
	}

	/// Check if the entry covers no source text at all.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

fn end_offset(start: usize, len: usize) -> usize {
	match start.checked_add(len) {
		Some(end) => end,
		None => panic!("entry range overflows: {start} + {len}"),
	}
}

impl EntryKind {
	/// Check if entries of this kind are merged into text runs.
	pub fn is_text(self) -> bool {
		matches!(self, Self::LiteralText | Self::EscapedChar)
	}
}

#[cfg(test)]
mod test {
	use assert2::{assert, let_assert};

	use super::*;

	#[test]
	#[should_panic(expected = "entry range overflows")]
	fn overflowing_interpolation_panics() {
		let _ = Entry::name_ref("x", usize::MAX, 2);
	}

	#[test]
	#[should_panic(expected = "entry range overflows")]
	fn overflowing_text_panics() {
		let _ = Entry::<&str>::literal("ab", usize::MAX - 1);
	}

	#[test]
	fn text_range_follows_text_length() {
		let entry = Entry::<&str>::literal("héllo", 1);
		assert!(entry.range() == (1..7));
		assert!(entry.kind() == EntryKind::LiteralText);
		assert!(entry.is_text());
	}

	#[test]
	fn escape_is_text() {
		let entry = Entry::<&str>::escape("\\n", 4);
		assert!(entry.is_text());
		assert!(!entry.is_interpolation());
		assert!(entry.len() == 2);
	}

	#[test]
	fn interpolation_accessors() {
		let entry = Entry::name_ref("table", 3, 6);
		assert!(entry.kind() == EntryKind::NameRef);
		assert!(entry.start() == 3);
		assert!(entry.end() == 9);
		let_assert!(Entry::NameRef(interpolation) = &entry);
		assert!(interpolation.expression() == Some(&"table"));

		let empty = Entry::<&str>::block(None, 9, 3);
		assert!(empty.is_interpolation());
		let_assert!(Entry::Block(interpolation) = &empty);
		assert!(interpolation.expression().is_none());
	}
}
