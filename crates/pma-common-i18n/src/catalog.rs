// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::I18nError;

/// gettext text domain; catalogs are named `{DOMAIN}.mo`.
pub const DOMAIN: &str = "pma";

/// String lookup used by server-rendered HTML.
///
/// Implementations return the msgid itself when no translation exists.
pub trait Translator: Send + Sync {
	fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str;

	/// Lookup disambiguated by a context, e.g. `("Short month name", "May")`.
	fn pgettext<'a>(&'a self, context: &'a str, msgid: &'a str) -> &'a str;
}

/// Translator for the source locale: every msgid is its own translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
	fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
		msgid
	}

	fn pgettext<'a>(&'a self, _context: &str, msgid: &'a str) -> &'a str {
		msgid
	}
}

/// Translator backed by a compiled gettext `.mo` catalog.
pub struct CatalogTranslator {
	catalog: gettext::Catalog,
}

impl CatalogTranslator {
	pub fn from_file(path: &Path) -> Result<Self, I18nError> {
		let file = File::open(path).map_err(|e| I18nError::CatalogRead {
			path: path.to_path_buf(),
			source: e,
		})?;
		let catalog = gettext::Catalog::parse(file).map_err(|e| I18nError::CatalogParse {
			path: path.to_path_buf(),
			source: e,
		})?;
		debug!(path = %path.display(), "loaded translation catalog");
		Ok(Self { catalog })
	}

	/// Load the catalog for `locale` below `dir`, or `None` when the locale
	/// ships no catalog.
	pub fn for_locale(dir: &Path, locale: &str) -> Result<Option<Self>, I18nError> {
		let path = catalog_path(dir, locale);
		if !path.exists() {
			debug!(path = %path.display(), locale, "no catalog for locale");
			return Ok(None);
		}
		Self::from_file(&path).map(Some)
	}
}

impl Translator for CatalogTranslator {
	fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
		self.catalog.gettext(msgid)
	}

	fn pgettext<'a>(&'a self, context: &'a str, msgid: &'a str) -> &'a str {
		self.catalog.pgettext(context, msgid)
	}
}

/// Standard gettext layout: `{dir}/{locale}/LC_MESSAGES/{DOMAIN}.mo`.
pub fn catalog_path(dir: &Path, locale: &str) -> PathBuf {
	dir
		.join(locale)
		.join("LC_MESSAGES")
		.join(format!("{DOMAIN}.mo"))
}
