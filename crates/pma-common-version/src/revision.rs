// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Number of hash characters shown for an abbreviated commit.
pub const SHORT_HASH_LEN: usize = 7;

/// A commit author or committer.
///
/// Equality is structural: two people are the same when name, email and date
/// all match. Dates compare as instants, so the same moment written with two
/// different offsets is equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitPerson {
	pub name: String,
	pub email: String,
	/// RFC 3339 on disk, e.g. `2019-05-01T12:00:00+02:00`.
	pub date: DateTime<FixedOffset>,
}

/// Git revision of the running build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionInfo {
	/// Full commit hash.
	pub commit_hash: String,
	#[serde(default)]
	pub message: String,
	/// The commit exists on the hosted remote and can be linked to.
	#[serde(default)]
	pub is_remote_commit: bool,
	/// `None` when the build was made from a detached HEAD.
	#[serde(default)]
	pub branch: Option<String>,
	#[serde(default)]
	pub is_remote_branch: bool,
	pub committer: GitPerson,
	pub author: GitPerson,
}

/// The first [`SHORT_HASH_LEN`] characters of `commit_hash`, or all of it
/// when shorter.
pub fn short_hash(commit_hash: &str) -> &str {
	match commit_hash.char_indices().nth(SHORT_HASH_LEN) {
		Some((idx, _)) => &commit_hash[..idx],
		None => commit_hash,
	}
}
