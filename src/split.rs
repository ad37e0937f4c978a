//! Splitting string-template literals into injection parts.

use std::ops::Range;

use crate::resolver::resolve_string;
use crate::{
	ConstantResolver, Entry, InjectionDescriptor, InjectionPart, InjectionResult, LanguageRegistry,
};

/// Placeholder spliced into the fragment for interpolations without a constant value.
pub const MISSING_VALUE: &str = "missingValue";

/// Splits string-template literals into injection parts.
///
/// The splitter borrows a [`LanguageRegistry`] to check the injected language
/// and a [`ConstantResolver`] to find the values of interpolated expressions.
/// It holds no other state, so one splitter can be used for any number of literals.
#[derive(Debug)]
pub struct Splitter<'a, L: ?Sized, R: ?Sized> {
	languages: &'a L,
	constants: &'a R,
}

impl<L: ?Sized, R: ?Sized> Clone for Splitter<'_, L, R> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<L: ?Sized, R: ?Sized> Copy for Splitter<'_, L, R> {}

impl<'a, L, R> Splitter<'a, L, R>
where
	L: LanguageRegistry + ?Sized,
	R: ?Sized,
{
	/// Create a splitter from a language registry and a constant resolver.
	pub fn new(languages: &'a L, constants: &'a R) -> Self {
		Self { languages, constants }
	}

	/// Split the entries of a literal into injection parts.
	///
	/// Runs of literal text and escape sequences become one part each.
	/// Interpolations with a string constant value are spliced into the prefix of the next part,
	/// other interpolations are replaced by [`MISSING_VALUE`] and mark the result as unparsable.
	/// The prefix of the descriptor goes to the first part, the suffix to the last part.
	///
	/// Returns [`None`] if the language of the descriptor is not in the language registry.
	///
	/// # Panics
	/// Panics if the entries are not in source order,
	/// since the resulting ranges would not form a partition of the literal.
	/// Use [`StringLiteral`][crate::StringLiteral] to validate entries up front.
	pub fn split<E>(
		&self,
		descriptor: &InjectionDescriptor,
		entries: &[Entry<E>],
	) -> Option<InjectionResult>
	where
		R: ConstantResolver<E>,
	{
		if !self.languages.contains_language(&descriptor.language) {
			tracing::debug!(language = %descriptor.language, "language can not be injected");
			return None;
		}

		let mut parts = Parts::with_capacity(entries.len() + 1);
		let mut unparsable = false;

		// Without leading text, the prefix of the descriptor gets a part of its own.
		let mut pending_prefix = match entries.first() {
			Some(first) if first.is_interpolation() => {
				let suffix = if entries.len() == 1 { descriptor.suffix.as_str() } else { "" };
				parts.push(first.start()..first.start(), descriptor.prefix.clone(), suffix);
				String::new()
			},
			_ => descriptor.prefix.clone(),
		};

		let mut index = 0;
		while let Some(entry) = entries.get(index) {
			match entry {
				Entry::LiteralText(_) | Entry::EscapedChar(_) => {
					let run = entries[index..].iter().take_while(|x| x.is_text()).count();
					let last = &entries[index + run - 1];
					index += run;
					let suffix = if index == entries.len() { descriptor.suffix.as_str() } else { "" };
					parts.push(entry.start()..last.end(), std::mem::take(&mut pending_prefix), suffix);
				},
				Entry::NameRef(interpolation) | Entry::Block(interpolation) => {
					index += 1;
					let is_last = index == entries.len();

					// The suffix of a lone interpolation already went to the leading part.
					let suffix = if is_last && entries.len() > 1 { descriptor.suffix.as_str() } else { "" };

					// A value from the previous interpolation that no text run picked up.
					if !pending_prefix.is_empty() {
						parts.push(entry.start()..entry.start(), std::mem::take(&mut pending_prefix), "");
					}

					pending_prefix = match resolve_string(self.constants, interpolation.expression()) {
						Some(value) => value,
						None => {
							tracing::trace!(position = entry.start(), "interpolation has no constant value");
							unparsable = true;
							MISSING_VALUE.to_owned()
						},
					};

					// Not only for a pending value: an empty value still needs a part to carry the suffix,
					// or the suffix would be dropped from the fragment.
					if is_last && !(pending_prefix.is_empty() && suffix.is_empty()) {
						parts.push(entry.end()..entry.end(), std::mem::take(&mut pending_prefix), suffix);
					}
				},
			}
		}

		let parts = parts.into_inner();
		tracing::trace!(language = %descriptor.language, parts = parts.len(), unparsable, "split literal");
		Some(InjectionResult {
			language: descriptor.language.clone(),
			unparsable,
			parts,
		})
	}
}

/// Split the entries of a literal into injection parts.
///
/// Shorthand for [`Splitter::new(languages, constants).split(descriptor, entries)`][Splitter::split].
///
/// # Example
/// ```rust
/// # use template_injection::{split, Entry, InjectionDescriptor, InjectionPart};
/// // "select * from $table"
/// let entries = [
///     Entry::literal("select * from ", 1),
///     Entry::name_ref("table", 15, 6),
/// ];
/// let constants = [("table", "users")];
/// let descriptor = InjectionDescriptor::new("sql");
///
/// let result = split(&["sql"], &constants, &descriptor, &entries).unwrap();
/// assert!(!result.unparsable);
/// assert_eq!(result.parts, [
///     InjectionPart::new(1..15, "", ""),
///     InjectionPart::new(21..21, "users", ""),
/// ]);
///
/// assert!(split(&["regexp"], &constants, &descriptor, &entries).is_none());
/// ```
pub fn split<E, L, R>(
	languages: &L,
	constants: &R,
	descriptor: &InjectionDescriptor,
	entries: &[Entry<E>],
) -> Option<InjectionResult>
where
	L: LanguageRegistry + ?Sized,
	R: ConstantResolver<E> + ?Sized,
{
	Splitter::new(languages, constants).split(descriptor, entries)
}

/// Collected parts, checked to form a partition as they are added.
struct Parts {
	parts: Vec<InjectionPart>,
}

impl Parts {
	fn with_capacity(capacity: usize) -> Self {
		Self {
			parts: Vec::with_capacity(capacity),
		}
	}

	fn push(&mut self, range: Range<usize>, prefix: String, suffix: &str) {
		assert!(range.start <= range.end, "improper injection range: {range:?}");
		if let Some(previous) = self.parts.last() {
			assert!(
				previous.range.end <= range.start,
				"injection range {range:?} overlaps previous range {:?}",
				previous.range,
			);
		}
		self.parts.push(InjectionPart {
			range,
			prefix,
			suffix: suffix.to_owned(),
		});
	}

	fn into_inner(self) -> Vec<InjectionPart> {
		self.parts
	}
}

#[cfg(test)]
mod test {
	use std::collections::BTreeMap;

	use assert2::{assert, check, let_assert};

	use super::*;
	use crate::resolver::{from_fn, Constant, NoConstants};
	use crate::{AnyLanguage, StringLiteral};

	fn sql() -> InjectionDescriptor {
		InjectionDescriptor::new("sql")
	}

	fn wrapped() -> InjectionDescriptor {
		InjectionDescriptor::new("sql").with_prefix("<").with_suffix(">")
	}

	fn part(range: Range<usize>, prefix: &str, suffix: &str) -> InjectionPart {
		InjectionPart::new(range, prefix, suffix)
	}

	/// Check that the parts partition the literal and return the rendered fragment.
	fn check_partition<E>(
		source: &str,
		entries: &[Entry<E>],
		descriptor: &InjectionDescriptor,
		result: &InjectionResult,
	) -> String {
		for part in &result.parts {
			assert!(part.range.start <= part.range.end);
		}
		for pair in result.parts.windows(2) {
			assert!(pair[0].range.end <= pair[1].range.start);
		}

		// Text entries are covered by exactly one part, interpolations by none.
		for entry in entries.iter().filter(|x| !x.is_empty()) {
			let covering = result.parts
				.iter()
				.filter(|x| x.range.start <= entry.start() && entry.end() <= x.range.end)
				.count();
			let expected = if entry.is_text() { 1 } else { 0 };
			assert!(covering == expected, "entry at {} covered {} times", entry.start(), covering);
		}

		// The descriptor prefix opens the fragment, the suffix goes to exactly one part.
		if let Some(first) = result.parts.first() {
			assert!(first.prefix == descriptor.prefix);
		}
		let lone_interpolation = entries.len() == 1 && entries[0].is_interpolation();
		let suffix_index = if lone_interpolation { 0 } else { result.parts.len().saturating_sub(1) };
		for (i, part) in result.parts.iter().enumerate() {
			if i > 0 && !descriptor.prefix.is_empty() {
				assert!(part.prefix != descriptor.prefix);
			}
			if i == suffix_index {
				assert!(part.suffix == descriptor.suffix);
			} else {
				assert!(part.suffix.is_empty());
			}
		}

		assert!(result.unparsable == result.parts.iter().any(|x| x.prefix == MISSING_VALUE));

		let_assert!(Some(fragment) = result.render(source));
		fragment
	}

	#[test]
	fn trailing_constant_is_spliced() {
		// "select * from $table"
		let source = "\"select * from $table\"";
		let entries = [Entry::literal("select * from ", 1), Entry::name_ref("table", 15, 6)];
		let constants = [("table", "users")];

		let_assert!(Ok(literal) = StringLiteral::new(source, &entries));
		let_assert!(Some((result, fragment)) = literal.inject(&["sql"], &constants, &sql()));
		assert!(!result.unparsable);
		assert!(fragment == "select * from users");
		assert!(result.parts.iter().filter(|x| !x.is_empty()).count() == 1);
		assert!(result.parts[0] == part(1..15, "", ""));
		check_partition(source, &entries, &sql(), &result);
	}

	#[test]
	fn leading_constant_is_folded_forward() {
		let source = "\"${a}b\"";
		let entries = [Entry::block(Some("a"), 1, 4), Entry::literal("b", 5)];
		let constants = [("a", "a")];

		let_assert!(Some(result) = split(&AnyLanguage, &constants, &wrapped(), &entries));
		assert!(!result.unparsable);
		assert!(result.parts == [
			part(1..1, "<", ""),
			part(5..6, "a", ">"),
		]);
		check!(check_partition(source, &entries, &wrapped(), &result) == "<ab>");
	}

	#[test]
	fn trailing_unresolved_block() {
		let source = "\"x=${f()}\"";
		let entries = [Entry::literal("x=", 1), Entry::block(Some("f()"), 3, 6)];

		let_assert!(Some(result) = split(&AnyLanguage, &NoConstants, &wrapped(), &entries));
		assert!(result.unparsable);
		assert!(result.parts == [
			part(1..3, "<", ""),
			part(9..9, MISSING_VALUE, ">"),
		]);
		check!(check_partition(source, &entries, &wrapped(), &result) == "<x=missingValue>");
	}

	#[test]
	fn lone_unresolved_block() {
		let source = "\"${f()}\"";
		let entries = [Entry::block(Some("f()"), 1, 6)];

		let_assert!(Some(result) = split(&AnyLanguage, &NoConstants, &wrapped(), &entries));
		assert!(result.unparsable);
		assert!(result.parts == [
			part(1..1, "<", ">"),
			part(7..7, MISSING_VALUE, ""),
		]);
		check!(check_partition(source, &entries, &wrapped(), &result) == "<>missingValue");
	}

	#[test]
	fn empty_literal() {
		let entries: [Entry<&str>; 0] = [];
		let_assert!(Some(result) = split(&AnyLanguage, &NoConstants, &wrapped(), &entries));
		assert!(!result.unparsable);
		assert!(result.parts.is_empty());
		check!(check_partition("\"\"", &entries, &wrapped(), &result) == "");
	}

	#[test]
	fn unknown_language() {
		let entries = [Entry::<&str>::literal("abc", 1)];
		check!(split(&["regexp", "html"], &NoConstants, &sql(), &entries) == None);
		check!(split(&Vec::<String>::new(), &NoConstants, &sql(), &entries) == None);
	}

	#[test]
	fn text_and_escapes_merge_into_one_part() {
		let source = r#""a\tb\nc""#;
		let entries = [
			Entry::<&str>::literal("a", 1),
			Entry::escape("\\t", 2),
			Entry::literal("b", 4),
			Entry::escape("\\n", 5),
			Entry::literal("c", 7),
		];
		let_assert!(Some(result) = split(&AnyLanguage, &NoConstants, &wrapped(), &entries));
		assert!(!result.unparsable);
		assert!(result.parts == [part(1..8, "<", ">")]);
		check!(check_partition(source, &entries, &wrapped(), &result) == r"<a\tb\nc>");
	}

	#[test]
	fn single_escape_after_unresolved_name() {
		let source = r#""$x\n""#;
		let entries = [Entry::name_ref("x", 1, 2), Entry::escape("\\n", 3)];
		let_assert!(Some(result) = split(&AnyLanguage, &NoConstants, &wrapped(), &entries));
		assert!(result.unparsable);
		assert!(result.parts == [
			part(1..1, "<", ""),
			part(3..5, MISSING_VALUE, ">"),
		]);
		check!(check_partition(source, &entries, &wrapped(), &result) == r"<missingValue\n>");
	}

	#[test]
	fn back_to_back_interpolations_keep_every_value() {
		let source = "\"a$x$y b\"";
		let entries = [
			Entry::literal("a", 1),
			Entry::name_ref("x", 2, 2),
			Entry::name_ref("y", 4, 2),
			Entry::literal(" b", 6),
		];
		let constants = [("x", "1")];
		let_assert!(Some(result) = split(&AnyLanguage, &constants, &wrapped(), &entries));
		assert!(result.unparsable);
		assert!(result.parts == [
			part(1..2, "<", ""),
			part(4..4, "1", ""),
			part(6..8, MISSING_VALUE, ">"),
		]);
		check!(check_partition(source, &entries, &wrapped(), &result) == "<a1missingValue b>");
	}

	#[test]
	fn back_to_back_trailing_interpolations() {
		let source = "\"a$x$y\"";
		let entries = [
			Entry::literal("a", 1),
			Entry::name_ref("x", 2, 2),
			Entry::name_ref("y", 4, 2),
		];
		let constants = [("x", "1"), ("y", "2")];
		let_assert!(Some(result) = split(&AnyLanguage, &constants, &wrapped(), &entries));
		assert!(!result.unparsable);
		assert!(result.parts == [
			part(1..2, "<", ""),
			part(4..4, "1", ""),
			part(6..6, "2", ">"),
		]);
		check!(check_partition(source, &entries, &wrapped(), &result) == "<a12>");
	}

	#[test]
	fn empty_constant_keeps_suffix() {
		let source = "\"a$x\"";
		let entries = [Entry::literal("a", 1), Entry::name_ref("x", 2, 2)];
		let constants = [("x", "")];
		let_assert!(Some(result) = split(&AnyLanguage, &constants, &wrapped(), &entries));
		assert!(!result.unparsable);
		assert!(result.parts == [
			part(1..2, "<", ""),
			part(4..4, "", ">"),
		]);
		check!(check_partition(source, &entries, &wrapped(), &result) == "<a>");
	}

	#[test]
	fn empty_constant_without_suffix_adds_nothing() {
		let source = "\"a$x\"";
		let entries = [Entry::literal("a", 1), Entry::name_ref("x", 2, 2)];
		let constants = [("x", "")];
		let_assert!(Some(result) = split(&AnyLanguage, &constants, &sql(), &entries));
		assert!(result.parts == [part(1..2, "", "")]);
		check!(check_partition(source, &entries, &sql(), &result) == "a");
	}

	#[test]
	fn non_string_constants_are_unresolved() {
		let source = "\"limit $n\"";
		let entries = [Entry::literal("limit ", 1), Entry::name_ref("n", 7, 2)];
		let mut constants = BTreeMap::new();
		constants.insert("n", Constant::Integer(10));
		let_assert!(Some(result) = split(&AnyLanguage, &constants, &sql(), &entries));
		assert!(result.unparsable);
		assert!(result.parts[1] == part(9..9, MISSING_VALUE, ""));
		check!(check_partition(source, &entries, &sql(), &result) == "limit missingValue");
	}

	#[test]
	fn block_without_expression_is_unresolved() {
		let source = "\"a${}b\"";
		let entries = [Entry::<&str>::literal("a", 1), Entry::block(None, 2, 3), Entry::literal("b", 5)];
		let resolver = from_fn(|_: &&str| Some("never asked"));
		let_assert!(Some(result) = split(&AnyLanguage, &resolver, &sql(), &entries));
		assert!(result.unparsable);
		assert!(result.parts == [
			part(1..2, "", ""),
			part(5..6, MISSING_VALUE, ""),
		]);
		check!(check_partition(source, &entries, &sql(), &result) == "amissingValueb");
	}

	#[test]
	fn erroneous_constant_is_unresolved() {
		let source = "\"${1 / 0}x\"";
		let entries = [Entry::block(Some("1 / 0"), 1, 8), Entry::literal("x", 9)];
		let resolver = from_fn(|_: &&str| Some(Constant::Error("division by zero".into())));
		let_assert!(Some(result) = split(&AnyLanguage, &resolver, &sql(), &entries));
		assert!(result.unparsable);
		assert!(result.parts[1] == part(9..10, MISSING_VALUE, ""));
		check!(check_partition(source, &entries, &sql(), &result) == "missingValuex");
	}

	#[test]
	#[should_panic(expected = "overlaps previous range")]
	fn unordered_entries_panic() {
		let entries = [Entry::<&str>::literal("b", 5), Entry::name_ref("x", 1, 2), Entry::literal("a", 3)];
		let _ = split(&AnyLanguage, &NoConstants, &sql(), &entries);
	}

	#[test]
	fn fragment_reconstructs_logical_content() {
		let source = r#""${a}-$b-\t${c}-$d""#;
		let entries = [
			Entry::block(Some("a"), 1, 4),
			Entry::literal("-", 5),
			Entry::name_ref("b", 6, 2),
			Entry::literal("-", 8),
			Entry::escape("\\t", 9),
			Entry::block(Some("c"), 11, 4),
			Entry::literal("-", 15),
			Entry::name_ref("d", 16, 2),
		];
		let constants = [("a", "A"), ("c", "C")];
		let descriptor = InjectionDescriptor::new("sql").with_prefix("[").with_suffix("]");

		let_assert!(Ok(literal) = StringLiteral::new(source, &entries));
		let_assert!(Some(result) = literal.split(&["sql"], &constants, &descriptor));
		assert!(result.unparsable);

		let fragment = check_partition(source, &entries, &descriptor, &result);
		assert!(fragment == r"[A-missingValue-\tC-missingValue]");
	}

	#[test]
	fn fragment_of_plain_literal() {
		let source = "\"plain\"";
		let entries = [Entry::<&str>::literal("plain", 1)];
		let descriptor = InjectionDescriptor::new("regexp").with_prefix("^").with_suffix("$");

		let_assert!(Some(result) = split(&AnyLanguage, &NoConstants, &descriptor, &entries));
		assert!(!result.unparsable);
		check!(check_partition(source, &entries, &descriptor, &result) == "^plain$");
	}
}
