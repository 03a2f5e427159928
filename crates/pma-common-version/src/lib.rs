// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build and git revision information for pma.
//!
//! This crate is the single source of truth for what build is running:
//!
//! - [`BuildInfo`]: package version, short SHA, build timestamp and platform,
//!   captured at compile time.
//! - [`RevisionInfo`]: the full git revision record (hash, message, branch,
//!   author and committer) shown in the admin sidebar.
//! - [`RevisionSource`]: where a [`RevisionInfo`] comes from. Implementations
//!   read a packaged revision file, compile-time constants, or memory.

shadow_rs::shadow!(build);

mod error;
mod revision;
mod source;

pub use error::RevisionError;
pub use revision::{short_hash, GitPerson, RevisionInfo, SHORT_HASH_LEN};
pub use source::{BuildRevisionSource, FileRevisionSource, RevisionSource, StaticRevisionSource};

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
///
/// Derived at compile time from target configuration.
pub const PLATFORM: &str = env!("PMA_PLATFORM");

/// Core build information used by the CLI and the server.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
	pub version: &'static str,
	pub git_sha: &'static str,
	pub build_timestamp: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	/// Get the current build information (compile-time constants).
	#[allow(clippy::const_is_empty)]
	pub const fn current() -> Self {
		Self {
			version: build::PKG_VERSION,
			git_sha: if build::SHORT_COMMIT.is_empty() {
				"unknown"
			} else {
				build::SHORT_COMMIT
			},
			build_timestamp: build::BUILD_TIME,
			platform: PLATFORM,
		}
	}
}
