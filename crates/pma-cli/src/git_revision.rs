// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `pma git-revision`: render the sidebar item to stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use pma_common_i18n::{resolve_locale, CatalogTranslator, IdentityTranslator, Translator};
use pma_common_version::{BuildRevisionSource, FileRevisionSource, RevisionSource};
use pma_server_config::{Config, ServerConfig};
use pma_server_display::{GitRevision, Linker, Response, Templates};
use tracing::{debug, info};

use crate::locale::detect_locale;

#[derive(Args, Debug, Default)]
pub struct GitRevisionArgs {
	/// Read the revision from this TOML file instead of the configured source
	#[arg(long, value_name = "PATH")]
	pub revision_file: Option<PathBuf>,

	/// Use the revision this binary was built from
	#[arg(long, conflicts_with = "revision_file")]
	pub build: bool,

	/// Locale code, e.g. `de` or `fr_FR`; defaults to the system locale
	#[arg(long, value_name = "CODE")]
	pub locale: Option<String>,

	/// Compiled `.mo` catalog to translate with, bypassing locale lookup
	#[arg(long, value_name = "PATH")]
	pub catalog: Option<PathBuf>,
}

/// Render the item. `None` means there was no revision to show.
pub fn render(config: &ServerConfig, args: &GitRevisionArgs) -> anyhow::Result<Option<String>> {
	let source: Box<dyn RevisionSource> = if args.build {
		Box::new(BuildRevisionSource)
	} else if let Some(path) = &args.revision_file {
		Box::new(FileRevisionSource::new(path.clone()))
	} else {
		config.git.revision_source()
	};
	info!(source = source.name(), "rendering git revision");

	let mut provider = Config::new(source).with_show_git_revision(config.git.show_git_revision);
	let translator = load_translator(config, args)?;
	let linker = Linker::new(config.links.redirect.clone());
	let templates = Templates::new(linker.clone());
	let mut response = Response::new();

	let html = GitRevision::new(&mut response, &mut provider, &templates, translator.as_ref())
		.with_linker(linker)
		.with_repository_url(config.git.repository_url.clone())?
		.display()
		.context("failed to render git revision")?;

	Ok(response.is_success().then_some(html))
}

fn load_translator(
	config: &ServerConfig,
	args: &GitRevisionArgs,
) -> anyhow::Result<Box<dyn Translator>> {
	if let Some(path) = &args.catalog {
		let catalog = CatalogTranslator::from_file(path)
			.with_context(|| format!("failed to load catalog {}", path.display()))?;
		return Ok(Box::new(catalog));
	}

	let requested = args.locale.clone().or_else(detect_locale);
	let locale = resolve_locale(requested.as_deref(), &config.i18n.default_locale);
	debug!(requested = ?requested, locale, "resolved locale");

	let Some(dir) = &config.i18n.catalog_dir else {
		return Ok(Box::new(IdentityTranslator));
	};
	match CatalogTranslator::for_locale(dir, locale)? {
		Some(catalog) => Ok(Box::new(catalog)),
		None => {
			debug!(locale, dir = %dir.display(), "no catalog for locale, using English");
			Ok(Box::new(IdentityTranslator))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	const REVISION: &str = r#"
commit_hash = "0123456789abcdef0123456789abcdef01234567"
message = "Fix <sidebar>"
is_remote_commit = true
branch = "master"

[committer]
name = "Jane"
email = "jane@example.com"
date = "2019-05-01T12:00:00+02:00"

[author]
name = "Jane"
email = "jane@example.com"
date = "2019-05-01T12:00:00+02:00"
"#;

	fn write_revision(dir: &TempDir) -> PathBuf {
		let path = dir.path().join("revision.toml");
		fs::write(&path, REVISION).unwrap();
		path
	}

	fn args_for(path: PathBuf) -> GitRevisionArgs {
		GitRevisionArgs {
			revision_file: Some(path),
			locale: Some("en".to_string()),
			..Default::default()
		}
	}

	#[test]
	fn test_renders_revision_file() {
		let dir = TempDir::new().unwrap();
		let args = args_for(write_revision(&dir));

		let html = render(&ServerConfig::default(), &args).unwrap().unwrap();

		assert!(html.starts_with("<li id=\"li_pma_version_git\">Git revision: "));
		assert!(html.contains("<strong title=\"Fix &lt;sidebar&gt;\">0123456</strong>"));
		assert!(html.contains("./url.php?url=https%3A%2F%2Fgithub.com%2Fphpmyadmin%2Fphpmyadmin%2Fcommit%2F0123456789abcdef"));
	}

	/// Test: Configured links settings reach the rendered markup.
	///
	/// Why this test is important: Deployments behind a reverse proxy or on a
	/// fork change both the redirect page and the repository. The CLI must
	/// honour them rather than the built-in defaults.
	#[test]
	fn test_uses_configured_links() {
		let dir = TempDir::new().unwrap();
		let args = args_for(write_revision(&dir));
		let mut config = ServerConfig::default();
		config.git.repository_url = "https://git.example.org/pma".to_string();
		config.links.redirect = "/go".to_string();

		let html = render(&config, &args).unwrap().unwrap();

		assert!(html.contains("href=\"/go?url=https%3A%2F%2Fgit.example.org%2Fpma%2Fcommit%2F"));
	}

	#[test]
	fn test_missing_revision_file_is_none() {
		let dir = TempDir::new().unwrap();
		let args = args_for(dir.path().join("absent.toml"));

		assert_eq!(render(&ServerConfig::default(), &args).unwrap(), None);
	}

	#[test]
	fn test_disabled_display_is_none() {
		let dir = TempDir::new().unwrap();
		let args = args_for(write_revision(&dir));
		let mut config = ServerConfig::default();
		config.git.show_git_revision = false;

		assert_eq!(render(&config, &args).unwrap(), None);
	}

	#[test]
	fn test_revision_file_from_config() {
		let dir = TempDir::new().unwrap();
		let mut config = ServerConfig::default();
		config.git.revision_file = Some(write_revision(&dir));
		let args = GitRevisionArgs {
			locale: Some("en".to_string()),
			..Default::default()
		};

		let html = render(&config, &args).unwrap().unwrap();
		assert!(html.contains(">0123456</strong>"));
	}

	#[test]
	fn test_unreadable_catalog_is_an_error() {
		let dir = TempDir::new().unwrap();
		let catalog = dir.path().join("broken.mo");
		fs::write(&catalog, b"not a catalog").unwrap();
		let args = GitRevisionArgs {
			catalog: Some(catalog),
			..args_for(write_revision(&dir))
		};

		let err = render(&ServerConfig::default(), &args).unwrap_err();
		assert!(err.to_string().contains("failed to load catalog"));
	}

	#[test]
	fn test_missing_catalog_dir_entry_falls_back_to_english() {
		let dir = TempDir::new().unwrap();
		let mut config = ServerConfig::default();
		config.i18n.catalog_dir = Some(dir.path().join("locale"));
		let args = GitRevisionArgs {
			locale: Some("de".to_string()),
			..args_for(write_revision(&dir))
		};

		let html = render(&config, &args).unwrap().unwrap();
		assert!(html.contains("Git revision: "));
		assert!(html.contains("committed on May 01, 2019 at 12:00 PM by"));
	}
}
