// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization configuration section.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
	pub default_locale: String,
	/// Root of the `{locale}/LC_MESSAGES/pma.mo` tree. Without it every page
	/// renders in English.
	pub catalog_dir: Option<PathBuf>,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_locale: "en".to_string(),
			catalog_dir: None,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub catalog_dir: Option<PathBuf>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: I18nConfigLayer) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.catalog_dir.is_some() {
			self.catalog_dir = other.catalog_dir;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			default_locale: self.default_locale.unwrap_or_else(|| "en".to_string()),
			catalog_dir: self.catalog_dir,
		}
	}
}
