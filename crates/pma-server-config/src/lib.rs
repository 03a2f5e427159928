// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the pma server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`PMA_SERVER_*`)
//! - [`Config`], the per-request settings store that page components query
//!   through [`ConfigProvider`]
//!
//! # Usage
//!
//! ```ignore
//! use pma_server_config::{load_config, Config, ConfigProvider};
//!
//! let server = load_config()?;
//! let mut config = Config::from_git_config(&server.git);
//! config.check_git_revision();
//! ```

pub mod error;
pub mod layer;
pub mod provider;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use provider::{keys, Config, ConfigProvider, ConfigValue};
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerConfig {
	pub git: GitConfig,
	pub links: LinksConfig,
	pub i18n: I18nConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`PMA_SERVER_*`)
/// 2. Config file (`/etc/pma/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Merge `sources` in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let git = layer.git.unwrap_or_default().finalize();
	let links = layer.links.unwrap_or_default().finalize();
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&git, &links)?;

	info!(
		show_git_revision = git.show_git_revision,
		revision_file = ?git.revision_file,
		repository_url = %git.repository_url,
		default_locale = %i18n.default_locale,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		git,
		links,
		i18n,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(git: &GitConfig, links: &LinksConfig) -> Result<(), ConfigError> {
	let url = url::Url::parse(&git.repository_url).map_err(|e| {
		ConfigError::Validation(format!(
			"repository_url '{}' is not a valid URL: {e}",
			git.repository_url
		))
	})?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::Validation(format!(
			"repository_url must use http or https, got '{}'",
			url.scheme()
		)));
	}

	if links.redirect.trim().is_empty() {
		return Err(ConfigError::Validation(
			"links.redirect must not be empty".to_string(),
		));
	}

	Ok(())
}
