// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

/// Errors that can occur while loading translation catalogs.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("failed to open catalog {path}: {source}")]
	CatalogRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse catalog {path}: {source}")]
	CatalogParse {
		path: PathBuf,
		#[source]
		source: gettext::Error,
	},
}
