// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request settings store holding the git revision of the running build.

use std::collections::HashMap;

use pma_common_version::{GitPerson, RevisionInfo, RevisionSource};
use tracing::{debug, warn};

use crate::sections::GitConfig;

/// Setting names for git revision metadata.
pub mod keys {
	/// `true` when revision data was loaded.
	pub const VERSION_GIT: &str = "PMA_VERSION_GIT";
	pub const COMMIT_HASH: &str = "PMA_VERSION_GIT_COMMITHASH";
	pub const MESSAGE: &str = "PMA_VERSION_GIT_MESSAGE";
	pub const IS_REMOTE_COMMIT: &str = "PMA_VERSION_GIT_ISREMOTECOMMIT";
	/// Absent when the build has no branch.
	pub const BRANCH: &str = "PMA_VERSION_GIT_BRANCH";
	pub const IS_REMOTE_BRANCH: &str = "PMA_VERSION_GIT_ISREMOTEBRANCH";
	pub const COMMITTER: &str = "PMA_VERSION_GIT_COMMITTER";
	pub const AUTHOR: &str = "PMA_VERSION_GIT_AUTHOR";

	pub(crate) const ALL_GIT: [&str; 8] = [
		VERSION_GIT,
		COMMIT_HASH,
		MESSAGE,
		IS_REMOTE_COMMIT,
		BRANCH,
		IS_REMOTE_BRANCH,
		COMMITTER,
		AUTHOR,
	];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
	Bool(bool),
	Str(String),
	Person(GitPerson),
}

impl ConfigValue {
	/// Truthiness: `Bool(true)` and non-empty strings.
	pub fn is_truthy(&self) -> bool {
		match self {
			ConfigValue::Bool(b) => *b,
			ConfigValue::Str(s) => !s.is_empty(),
			ConfigValue::Person(_) => true,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			ConfigValue::Str(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_person(&self) -> Option<&GitPerson> {
		match self {
			ConfigValue::Person(p) => Some(p),
			_ => None,
		}
	}
}

impl From<bool> for ConfigValue {
	fn from(value: bool) -> Self {
		ConfigValue::Bool(value)
	}
}

impl From<String> for ConfigValue {
	fn from(value: String) -> Self {
		ConfigValue::Str(value)
	}
}

impl From<&str> for ConfigValue {
	fn from(value: &str) -> Self {
		ConfigValue::Str(value.to_string())
	}
}

impl From<GitPerson> for ConfigValue {
	fn from(value: GitPerson) -> Self {
		ConfigValue::Person(value)
	}
}

/// Settings lookup used by page components.
pub trait ConfigProvider {
	fn get(&self, key: &str) -> Option<&ConfigValue>;

	/// Load (or reload) git revision data into the `PMA_VERSION_GIT*` keys.
	fn check_git_revision(&mut self);

	/// Whether `key` is set to a truthy value.
	fn is_enabled(&self, key: &str) -> bool {
		self.get(key).is_some_and(ConfigValue::is_truthy)
	}
}

/// Settings store backed by a [`RevisionSource`].
pub struct Config {
	settings: HashMap<String, ConfigValue>,
	show_git_revision: bool,
	revision_source: Box<dyn RevisionSource>,
}

impl Config {
	pub fn new(revision_source: Box<dyn RevisionSource>) -> Self {
		Self {
			settings: HashMap::new(),
			show_git_revision: true,
			revision_source,
		}
	}

	pub fn from_git_config(git: &GitConfig) -> Self {
		Self::new(git.revision_source()).with_show_git_revision(git.show_git_revision)
	}

	/// When disabled, [`ConfigProvider::check_git_revision`] never consults
	/// the revision source.
	pub fn with_show_git_revision(mut self, show: bool) -> Self {
		self.show_git_revision = show;
		self
	}

	pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
		self.settings.insert(key.into(), value.into());
	}

	pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
		self.settings.remove(key)
	}

	fn clear_git_revision(&mut self) {
		for key in keys::ALL_GIT {
			self.settings.remove(key);
		}
	}

	fn store_revision(&mut self, revision: RevisionInfo) {
		self.set(keys::VERSION_GIT, true);
		self.set(keys::COMMIT_HASH, revision.commit_hash);
		self.set(keys::MESSAGE, revision.message);
		self.set(keys::IS_REMOTE_COMMIT, revision.is_remote_commit);
		if let Some(branch) = revision.branch {
			self.set(keys::BRANCH, branch);
		}
		self.set(keys::IS_REMOTE_BRANCH, revision.is_remote_branch);
		self.set(keys::COMMITTER, revision.committer);
		self.set(keys::AUTHOR, revision.author);
	}
}

impl ConfigProvider for Config {
	fn get(&self, key: &str) -> Option<&ConfigValue> {
		self.settings.get(key)
	}

	fn check_git_revision(&mut self) {
		self.clear_git_revision();

		if !self.show_git_revision {
			debug!("git revision display disabled");
			self.set(keys::VERSION_GIT, false);
			return;
		}

		let source = self.revision_source.name();
		match self.revision_source.load() {
			Ok(Some(revision)) => {
				debug!(source, commit = %revision.commit_hash, "loaded git revision");
				self.store_revision(revision);
			}
			Ok(None) => {
				debug!(source, "no git revision available");
				self.set(keys::VERSION_GIT, false);
			}
			Err(e) => {
				warn!(source, error = %e, "failed to load git revision");
				self.set(keys::VERSION_GIT, false);
			}
		}
	}
}
