// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files and environment variables.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{GitConfigLayer, I18nConfigLayer, LinksConfigLayer, LoggingConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/pma/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: PMA_SERVER_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			git: Some(load_git_from_env()?),
			links: Some(load_links_from_env()),
			i18n: Some(load_i18n_from_env()),
			logging: Some(load_logging_from_env()?),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_bool(name: &str) -> Result<Option<bool>, ConfigError> {
	match env_var(name) {
		Some(v) => parse_bool(&v).map(Some).ok_or_else(|| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid boolean value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn parse_bool(value: &str) -> Option<bool> {
	match value.to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}

fn load_git_from_env() -> Result<GitConfigLayer, ConfigError> {
	Ok(GitConfigLayer {
		show_git_revision: env_bool("PMA_SERVER_SHOW_GIT_REVISION")?,
		revision_file: env_var("PMA_SERVER_REVISION_FILE").map(PathBuf::from),
		repository_url: env_var("PMA_SERVER_REPOSITORY_URL"),
	})
}

fn load_links_from_env() -> LinksConfigLayer {
	LinksConfigLayer {
		redirect: env_var("PMA_SERVER_LINK_REDIRECT"),
	}
}

fn load_i18n_from_env() -> I18nConfigLayer {
	I18nConfigLayer {
		default_locale: env_var("PMA_SERVER_DEFAULT_LOCALE"),
		catalog_dir: env_var("PMA_SERVER_CATALOG_DIR").map(PathBuf::from),
	}
}

fn load_logging_from_env() -> Result<LoggingConfigLayer, ConfigError> {
	Ok(LoggingConfigLayer {
		level: env_var("PMA_SERVER_LOG_LEVEL"),
		json: env_bool("PMA_SERVER_LOG_JSON")?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert_eq!(layer, ServerConfigLayer::default());
	}

	#[test]
	fn test_toml_source_missing_file_returns_empty() {
		let source = TomlSource::new("/nonexistent/server.toml");
		let layer = source.load().unwrap();
		assert!(layer.git.is_none());
	}

	#[test]
	fn test_toml_source_reads_sections() {
		let temp = TempDir::new().unwrap();
		let path = temp.path().join("server.toml");
		fs::write(
			&path,
			r#"
[git]
show_git_revision = false
revision_file = "/srv/pma/revision.toml"

[links]
redirect = "../url.php"
"#,
		)
		.unwrap();

		let layer = TomlSource::new(&path).load().unwrap();
		let git = layer.git.unwrap();
		assert_eq!(git.show_git_revision, Some(false));
		assert_eq!(
			git.revision_file,
			Some(PathBuf::from("/srv/pma/revision.toml"))
		);
		assert_eq!(layer.links.unwrap().redirect.as_deref(), Some("../url.php"));
		assert!(layer.logging.is_none());
	}

	/// Test: A malformed config file is an error naming the file.
	///
	/// Why this test is important: Silently ignoring a broken config file would
	/// start the server with defaults the operator did not ask for.
	#[test]
	fn test_toml_source_parse_error() {
		let temp = TempDir::new().unwrap();
		let path = temp.path().join("server.toml");
		fs::write(&path, "[git\nshow_git_revision = ").unwrap();

		let err = TomlSource::new(&path).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
		assert!(err.to_string().contains("server.toml"));
	}

	#[test]
	fn test_parse_bool() {
		assert_eq!(parse_bool("TRUE"), Some(true));
		assert_eq!(parse_bool("1"), Some(true));
		assert_eq!(parse_bool("off"), Some(false));
		assert_eq!(parse_bool("maybe"), None);
	}

	#[test]
	fn test_env_bool_rejects_garbage() {
		std::env::set_var("PMA_TEST_SOURCES_ENV_BOOL_GARBAGE", "maybe");
		let err = env_bool("PMA_TEST_SOURCES_ENV_BOOL_GARBAGE").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { .. }));
		std::env::remove_var("PMA_TEST_SOURCES_ENV_BOOL_GARBAGE");
	}

	#[test]
	fn test_env_var_ignores_empty() {
		std::env::set_var("PMA_TEST_SOURCES_ENV_VAR_EMPTY", "");
		assert_eq!(env_var("PMA_TEST_SOURCES_ENV_VAR_EMPTY"), None);
		std::env::remove_var("PMA_TEST_SOURCES_ENV_VAR_EMPTY");
	}
}
