// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// The operating system's locale, e.g. `de-DE`, if it reports one.
///
/// Not validated; pass it through [`pma_common_i18n::resolve_locale`].
pub fn detect_locale() -> Option<String> {
	sys_locale::get_locale().filter(|locale| !locale.is_empty())
}
