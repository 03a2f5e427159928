// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Git revision display configuration section.

use std::path::PathBuf;

use pma_common_version::{BuildRevisionSource, FileRevisionSource, RevisionSource};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/phpmyadmin/phpmyadmin";

/// Git revision configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct GitConfig {
	/// Whether the sidebar shows the git revision at all.
	pub show_git_revision: bool,
	/// Packaged revision file. When unset, the revision captured at build
	/// time is used.
	pub revision_file: Option<PathBuf>,
	/// Web view of the repository; commit and tree links hang off it.
	pub repository_url: String,
}

impl Default for GitConfig {
	fn default() -> Self {
		Self {
			show_git_revision: true,
			revision_file: None,
			repository_url: DEFAULT_REPOSITORY_URL.to_string(),
		}
	}
}

impl GitConfig {
	pub fn revision_source(&self) -> Box<dyn RevisionSource> {
		match &self.revision_file {
			Some(path) => Box::new(FileRevisionSource::new(path.clone())),
			None => Box::new(BuildRevisionSource),
		}
	}
}

/// Git revision configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GitConfigLayer {
	#[serde(default)]
	pub show_git_revision: Option<bool>,
	#[serde(default)]
	pub revision_file: Option<PathBuf>,
	#[serde(default)]
	pub repository_url: Option<String>,
}

impl GitConfigLayer {
	pub fn merge(&mut self, other: GitConfigLayer) {
		if other.show_git_revision.is_some() {
			self.show_git_revision = other.show_git_revision;
		}
		if other.revision_file.is_some() {
			self.revision_file = other.revision_file;
		}
		if other.repository_url.is_some() {
			self.repository_url = other.repository_url;
		}
	}

	pub fn finalize(self) -> GitConfig {
		let defaults = GitConfig::default();
		GitConfig {
			show_git_revision: self.show_git_revision.unwrap_or(defaults.show_git_revision),
			revision_file: self.revision_file,
			repository_url: self
				.repository_url
				.map(|url| url.trim_end_matches('/').to_string())
				.unwrap_or(defaults.repository_url),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_defaults() {
		let config = GitConfigLayer::default().finalize();
		assert!(config.show_git_revision);
		assert!(config.revision_file.is_none());
		assert_eq!(config.repository_url, DEFAULT_REPOSITORY_URL);
	}

	#[test]
	fn test_trailing_slash_is_trimmed() {
		let layer = GitConfigLayer {
			repository_url: Some("https://git.example.com/pma/".to_string()),
			..Default::default()
		};
		assert_eq!(layer.finalize().repository_url, "https://git.example.com/pma");
	}

	#[test]
	fn test_merge_preserves_base_when_none() {
		let mut base = GitConfigLayer {
			show_git_revision: Some(false),
			revision_file: Some(PathBuf::from("/srv/pma/revision.toml")),
			repository_url: None,
		};
		base.merge(GitConfigLayer::default());
		assert_eq!(base.show_git_revision, Some(false));
		assert_eq!(
			base.revision_file,
			Some(PathBuf::from("/srv/pma/revision.toml"))
		);
	}

	#[test]
	fn test_revision_source_follows_file_setting() {
		let mut config = GitConfig::default();
		assert_eq!(config.revision_source().name(), "build");

		config.revision_file = Some(PathBuf::from("/srv/pma/revision.toml"));
		assert_eq!(config.revision_source().name(), "revision-file");
	}

	#[test]
	fn test_deserialize_empty() {
		let layer: GitConfigLayer = toml::from_str("").unwrap();
		assert_eq!(layer, GitConfigLayer::default());
	}

	proptest! {
		/// A later layer's value always wins, an unset one never does.
		#[test]
		fn prop_merge_prefers_set_values(
			base in proptest::option::of(any::<bool>()),
			over in proptest::option::of(any::<bool>()),
		) {
			let mut layer = GitConfigLayer { show_git_revision: base, ..Default::default() };
			layer.merge(GitConfigLayer { show_git_revision: over, ..Default::default() });
			prop_assert_eq!(layer.show_git_revision, over.or(base));
		}

		#[test]
		fn prop_finalized_url_has_no_trailing_slash(path in "[a-z]{1,8}", slashes in "/{0,3}") {
			let layer = GitConfigLayer {
				repository_url: Some(format!("https://git.example.com/{path}{slashes}")),
				..Default::default()
			};
			prop_assert_eq!(layer.finalize().repository_url, format!("https://git.example.com/{path}"));
		}
	}
}
