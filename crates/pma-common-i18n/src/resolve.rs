// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{locale_info, DEFAULT_LOCALE};

/// Resolve the effective locale from user preference and server default.
///
/// Resolution order (highest to lowest priority):
/// 1. User's requested locale (if supported)
/// 2. Server default locale (if supported)
/// 3. Fallback to English ("en")
///
/// Region suffixes are ignored, so `de_DE` and `de-AT` both resolve to `de`.
///
/// # Example
///
/// ```
/// use pma_common_i18n::resolve_locale;
///
/// assert_eq!(resolve_locale(Some("de"), "en"), "de");
/// assert_eq!(resolve_locale(None, "fr"), "fr");
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), "en");
/// ```
pub fn resolve_locale(user_locale: Option<&str>, server_default: &str) -> &'static str {
	user_locale
		.and_then(supported)
		.or_else(|| supported(server_default))
		.unwrap_or(DEFAULT_LOCALE)
}

fn supported(locale: &str) -> Option<&'static str> {
	let lang = locale.split(['_', '-', '.']).next()?.to_ascii_lowercase();
	locale_info(&lang).map(|info| info.code)
}
