// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outbound link rewriting.

pub use pma_server_config::DEFAULT_REDIRECT;
use url::form_urlencoded;

/// Rewrites external links to go through the application's redirect page.
///
/// Browsers send the current page as referrer when following a link, and the
/// admin page URL can carry session tokens. Going through the redirect page
/// keeps it away from external hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linker {
	redirect: String,
}

impl Default for Linker {
	fn default() -> Self {
		Self::new(DEFAULT_REDIRECT)
	}
}

impl Linker {
	pub fn new(redirect: impl Into<String>) -> Self {
		Self {
			redirect: redirect.into(),
		}
	}

	/// Rewrite an `http(s)` URL to `{redirect}?url={encoded}`.
	///
	/// Any other URL (`mailto:`, relative paths) is returned unchanged. The
	/// result is not HTML-escaped.
	pub fn link_url(&self, target: &str) -> String {
		if !is_external(target) {
			return target.to_string();
		}

		let query = form_urlencoded::Serializer::new(String::new())
			.append_pair("url", target)
			.finish();
		let separator = if self.redirect.contains('?') { '&' } else { '?' };
		format!("{}{separator}{query}", self.redirect)
	}
}

fn is_external(target: &str) -> bool {
	let target = target.trim_start();
	["http://", "https://"].iter().any(|scheme| {
		target
			.get(..scheme.len())
			.is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
	})
}
