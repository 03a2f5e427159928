// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::borrow::Cow;

/// Escape text for use in HTML element content and quoted attribute values.
///
/// Replaces `&`, `<`, `>`, `"` and `'`. Input without any of them is returned
/// borrowed.
pub fn escape(input: &str) -> Cow<'_, str> {
	if !input.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(input);
	}

	let mut out = String::with_capacity(input.len() + 16);
	for c in input.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#039;"),
			other => out.push(other),
		}
	}
	Cow::Owned(out)
}
