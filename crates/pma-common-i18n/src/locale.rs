// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Locale used when nothing else matches. Message ids are written in it.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub code: &'static str,
	pub name: &'static str,
	pub native_name: &'static str,
}

/// Locales with a shipped catalog.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
	},
	LocaleInfo {
		code: "de",
		name: "German",
		native_name: "Deutsch",
	},
	LocaleInfo {
		code: "es",
		name: "Spanish",
		native_name: "Español",
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
	},
];

pub fn is_supported(code: &str) -> bool {
	locale_info(code).is_some()
}

pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == code)
}

pub fn available_locales() -> impl Iterator<Item = &'static str> {
	LOCALES.iter().map(|l| l.code)
}
