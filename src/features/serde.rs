use serde::{
	de::{Error, MapAccess, Visitor},
	ser::SerializeStruct,
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
};

use crate::InjectionDescriptor;

/// Fields of an injection table.
#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
	Language,
	Prefix,
	Suffix,
}

/// Accepts either a bare language identifier or a full injection table.
struct InjectionDescriptorVisitor;

impl<'de> Visitor<'de> for InjectionDescriptorVisitor {
	type Value = InjectionDescriptor;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a language identifier or an injection table")
	}

	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: Error,
	{
		self.visit_string(v.to_owned())
	}

	fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
	where
		E: Error,
	{
		Ok(InjectionDescriptor::new(v))
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut language: Option<String> = None;
		let mut prefix: Option<String> = None;
		let mut suffix: Option<String> = None;

		while let Some(key) = map.next_key()? {
			let (slot, name) = match key {
				Field::Language => (&mut language, "language"),
				Field::Prefix => (&mut prefix, "prefix"),
				Field::Suffix => (&mut suffix, "suffix"),
			};
			if slot.is_some() {
				return Err(A::Error::duplicate_field(name));
			}
			*slot = Some(map.next_value()?);
		}

		Ok(InjectionDescriptor {
			language: language.ok_or_else(|| A::Error::missing_field("language"))?,
			prefix: prefix.unwrap_or_default(),
			suffix: suffix.unwrap_or_default(),
		})
	}
}

impl Serialize for InjectionDescriptor {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut state = serializer.serialize_struct("InjectionDescriptor", 3)?;
		state.serialize_field("language", &self.language)?;
		state.serialize_field("prefix", &self.prefix)?;
		state.serialize_field("suffix", &self.suffix)?;
		state.end()
	}
}

impl<'de> Deserialize<'de> for InjectionDescriptor {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(InjectionDescriptorVisitor)
	}
}
