// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Revision sources: packaged TOML file, compile-time constants, memory.

use std::path::{Path, PathBuf};

use chrono::DateTime;
use tracing::{debug, trace};

use crate::build;
use crate::error::RevisionError;
use crate::revision::{GitPerson, RevisionInfo};

/// Trait for places git revision metadata can be loaded from.
///
/// `Ok(None)` means "this build carries no revision information" and is not
/// an error. Errors are reserved for data that exists but cannot be used.
pub trait RevisionSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn load(&self) -> Result<Option<RevisionInfo>, RevisionError>;
}

/// In-memory revision, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRevisionSource {
	revision: Option<RevisionInfo>,
}

impl StaticRevisionSource {
	pub fn new(revision: RevisionInfo) -> Self {
		Self {
			revision: Some(revision),
		}
	}

	pub fn empty() -> Self {
		Self::default()
	}
}

impl RevisionSource for StaticRevisionSource {
	fn name(&self) -> &'static str {
		"static"
	}

	fn load(&self) -> Result<Option<RevisionInfo>, RevisionError> {
		Ok(self.revision.clone())
	}
}

/// Revision file packaged alongside a build.
///
/// A missing file is not an error: release tarballs built outside a git
/// checkout simply do not ship one.
#[derive(Debug, Clone)]
pub struct FileRevisionSource {
	path: PathBuf,
}

impl FileRevisionSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl RevisionSource for FileRevisionSource {
	fn name(&self) -> &'static str {
		"revision-file"
	}

	fn load(&self) -> Result<Option<RevisionInfo>, RevisionError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "revision file not found, skipping");
			return Ok(None);
		}

		debug!(path = %self.path.display(), "loading revision file");
		let content =
			std::fs::read_to_string(&self.path).map_err(|e| RevisionError::FileRead {
				path: self.path.clone(),
				source: e,
			})?;

		let revision: RevisionInfo = toml::from_str(&content).map_err(|e| RevisionError::Parse {
			path: self.path.clone(),
			source: e,
		})?;

		if revision.commit_hash.trim().is_empty() {
			return Err(RevisionError::EmptyHash);
		}

		trace!(commit = %revision.commit_hash, "parsed revision file");
		Ok(Some(revision))
	}
}

/// Revision captured by the build script from the checkout the binary was
/// compiled in.
///
/// The build only knows one identity per commit, so author and committer are
/// the same person, and nothing is known about the remote.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildRevisionSource;

impl RevisionSource for BuildRevisionSource {
	fn name(&self) -> &'static str {
		"build"
	}

	#[allow(clippy::const_is_empty)]
	fn load(&self) -> Result<Option<RevisionInfo>, RevisionError> {
		if build::COMMIT_HASH.is_empty() {
			debug!("binary was not built from a git checkout");
			return Ok(None);
		}

		let date = DateTime::parse_from_rfc3339(build::COMMIT_DATE_3339).map_err(|e| {
			RevisionError::InvalidDate {
				value: build::COMMIT_DATE_3339.to_string(),
				source: e,
			}
		})?;

		let person = GitPerson {
			name: build::COMMIT_AUTHOR.to_string(),
			email: build::COMMIT_EMAIL.to_string(),
			date,
		};

		let branch = Some(build::BRANCH)
			.filter(|b| !b.is_empty())
			.map(str::to_string);

		Ok(Some(RevisionInfo {
			commit_hash: build::COMMIT_HASH.to_string(),
			message: String::new(),
			is_remote_commit: false,
			branch,
			is_remote_branch: false,
			committer: person.clone(),
			author: person,
		}))
	}
}
