// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Revision loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading git revision metadata.
#[derive(Debug, thiserror::Error)]
pub enum RevisionError {
	/// The revision file exists but could not be read.
	#[error("failed to read revision file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The revision file is not valid TOML or is missing fields.
	#[error("failed to parse revision file {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// A commit date could not be parsed as RFC 3339.
	#[error("invalid commit date '{value}': {source}")]
	InvalidDate {
		value: String,
		#[source]
		source: chrono::ParseError,
	},

	/// The revision record has no commit hash.
	#[error("revision record has an empty commit hash")]
	EmptyHash,
}
