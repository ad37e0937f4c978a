//! Support for loading injection configuration from JSON data.

use crate::{ConfigError, InjectionConfig};

/// Parse and validate an injection configuration from JSON data.
pub fn from_slice(data: &[u8]) -> Result<InjectionConfig, Error> {
	let config: InjectionConfig = serde_json::from_slice(data)?;
	finish(config)
}

/// Parse and validate an injection configuration from JSON data.
pub fn from_str(data: &str) -> Result<InjectionConfig, Error> {
	let config: InjectionConfig = serde_json::from_str(data)?;
	finish(config)
}

fn finish(config: InjectionConfig) -> Result<InjectionConfig, Error> {
	config.validate()?;
	tracing::debug!(
		languages = config.languages.len(),
		injections = config.injections.len(),
		"loaded JSON injection config",
	);
	Ok(config)
}

/// Error for loading injection configuration from JSON.
#[derive(Debug)]
pub enum Error {
	/// An error occurred while parsing JSON.
	Json(serde_json::Error),

	/// The configuration is not valid.
	Config(ConfigError),
}

impl From<serde_json::Error> for Error {
	#[inline]
	fn from(other: serde_json::Error) -> Self {
		Self::Json(other)
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
			Self::Json(e) => std::fmt::Display::fmt(e, f),
			Self::Config(e) => std::fmt::Display::fmt(e, f),
		}
	}
}
