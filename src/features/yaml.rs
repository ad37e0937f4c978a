//! Support for loading injection configuration from YAML data.

use crate::{ConfigError, InjectionConfig};

/// Parse and validate an injection configuration from YAML data.
pub fn from_slice(data: &[u8]) -> Result<InjectionConfig, Error> {
	let config: InjectionConfig = serde_yaml::from_slice(data)?;
	finish(config)
}

/// Parse and validate an injection configuration from YAML data.
pub fn from_str(data: &str) -> Result<InjectionConfig, Error> {
	let config: InjectionConfig = serde_yaml::from_str(data)?;
	finish(config)
}

fn finish(config: InjectionConfig) -> Result<InjectionConfig, Error> {
	config.validate()?;
	tracing::debug!(
		languages = config.languages.len(),
		injections = config.injections.len(),
		"loaded YAML injection config",
	);
	Ok(config)
}

/// Error for loading injection configuration from YAML.
#[derive(Debug)]
pub enum Error {
	/// An error occured while parsing YAML.
	Yaml(serde_yaml::Error),

	/// The configuration is not valid.
	Config(ConfigError),
}

impl From<serde_yaml::Error> for Error {
	#[inline]
	fn from(other: serde_yaml::Error) -> Self {
		Self::Yaml(other)
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
			Error::Yaml(e) => std::fmt::Display::fmt(e, f),
			Error::Config(e) => std::fmt::Display::fmt(e, f),
		}
	}
}
