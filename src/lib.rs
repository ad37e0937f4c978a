//! Split string-template literals into ranges for foreign language injection.
//!
//! Editors highlight and check strings that contain code in another language,
//! such as SQL queries, regular expressions or HTML snippets.
//! When such a string is a template with interpolations,
//! the injected parser must see the literal text with something in place of each interpolation.
//!
//! This crate takes the entries of an already parsed string-template literal
//! and turns them into a list of [`InjectionPart`]s:
//! ranges of the literal with a prefix and suffix to place around each range.
//! Stitching the parts together gives the fragment to hand to the foreign parser.
//!
//! # Features
//!
//! * Adjacent literal text and escape sequences are merged into a single range.
//! * Interpolations with a constant string value are spliced into the fragment.
//! * Other interpolations are replaced by a placeholder ([`MISSING_VALUE`]) and mark the result as unparsable.
//! * The prefix and suffix of the [`InjectionDescriptor`] always end up at the start and end of the fragment,
//!   even for literals that start or end with an interpolation.
//! * Load injection configuration from JSON, TOML or YAML (optional, requires the `json`, `toml` or `yaml` feature).
//!
//! # Examples
//!
//! The [`split()`][split] function splits a list of entries.
//! Constants come from a [`ConstantResolver`], such as a slice of key-value pairs, a map or a closure.
//! The language must be known to a [`LanguageRegistry`].
//!
//! ```
//! # use template_injection::{split, Entry, InjectionDescriptor};
//! // "id = $id and name = ${name}"
//! let source = "\"id = $id and name = ${name}\"";
//! let entries = [
//!     Entry::literal("id = ", 1),
//!     Entry::name_ref("id", 6, 3),
//!     Entry::literal(" and name = ", 9),
//!     Entry::block(Some("name"), 21, 7),
//! ];
//! let constants = [("name", "'bob'")];
//! let descriptor = InjectionDescriptor::new("sql").with_prefix("SELECT * FROM t WHERE ");
//!
//! let result = split(&["sql"], &constants, &descriptor, &entries).unwrap();
//! assert!(result.unparsable);
//! assert_eq!(
//!   result.render(source).unwrap(),
//!   "SELECT * FROM t WHERE id = missingValue and name = 'bob'",
//! );
//! ```
//!
//! A [`StringLiteral`] pairs the entries with the source of the literal and checks that they fit together.
//!
//! ```
//! # use template_injection::{AnyLanguage, Entry, InjectionDescriptor, NoConstants, StringLiteral};
//! let source = "\"^[a-z]+\\\\d$\"";
//! let entries = [
//!     Entry::<&str>::literal("^[a-z]+", 1),
//!     Entry::escape("\\\\", 8),
//!     Entry::literal("d$", 10),
//! ];
//! let literal = StringLiteral::new(source, &entries)?;
//! let descriptor = InjectionDescriptor::new("regexp");
//!
//! let (result, fragment) = literal.inject(&AnyLanguage, &NoConstants, &descriptor).unwrap();
//! assert_eq!(result.parts.len(), 1);
//! assert_eq!(fragment, "^[a-z]+\\\\d$");
//! # Ok::<(), template_injection::EntryError>(())
//! ```
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

pub mod error;
pub use error::{ConfigError, EntryError};

mod config;
pub use config::InjectionConfig;

mod entry;
pub use entry::{Entry, EntryKind, Interpolation, Text};

mod injection;
pub use injection::{InjectionDescriptor, InjectionPart, InjectionResult};

mod language;
pub use language::{AnyLanguage, LanguageRegistry};

mod literal;
pub use literal::StringLiteral;

pub mod resolver;
pub use resolver::{Constant, ConstantResolver, NoConstants};

mod split;
pub use split::{split, Splitter, MISSING_VALUE};

mod features;
#[allow(unused_imports)] // Might not re-export anything if all features are disabled.
pub use features::*;
