//! Support for loading injection configuration from TOML data.

use crate::{ConfigError, InjectionConfig};

/// Parse and validate an injection configuration from TOML data.
pub fn from_slice(data: &[u8]) -> Result<InjectionConfig, Error> {
	from_str(std::str::from_utf8(data)?)
}

/// Parse and validate an injection configuration from TOML data.
pub fn from_str(data: &str) -> Result<InjectionConfig, Error> {
	let config: InjectionConfig = toml::from_str(data)?;
	config.validate()?;
	tracing::debug!(
		languages = config.languages.len(),
		injections = config.injections.len(),
		"loaded TOML injection config",
	);
	Ok(config)
}

/// Error for loading injection configuration from TOML.
#[derive(Debug)]
pub enum Error {
	/// The input contains invalid UTF-8.
	InvalidUtf8(std::str::Utf8Error),

	/// An error occurred while parsing TOML.
	Toml(toml::de::Error),

	/// The configuration is not valid.
	Config(ConfigError),
}

impl From<std::str::Utf8Error> for Error {
	#[inline]
	fn from(other: std::str::Utf8Error) -> Self {
		Self::InvalidUtf8(other)
	}
}

impl From<toml::de::Error> for Error {
	#[inline]
	fn from(other: toml::de::Error) -> Self {
		Self::Toml(other)
	}
}

impl From<ConfigError> for Error {
	#[inline]
	fn from(other: ConfigError) -> Self {
		Self::Config(other)
	}
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidUtf8(e) => std::fmt::Display::fmt(e, f),
			Self::Toml(e) => std::fmt::Display::fmt(e, f),
			Self::Config(e) => std::fmt::Display::fmt(e, f),
		}
	}
}
