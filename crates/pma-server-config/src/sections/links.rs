// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outbound link configuration section.

use serde::{Deserialize, Serialize};

pub const DEFAULT_REDIRECT: &str = "./url.php";

/// Outbound link configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct LinksConfig {
	/// Endpoint external links are routed through, so the admin URL never
	/// reaches the external site as a referrer.
	pub redirect: String,
}

impl Default for LinksConfig {
	fn default() -> Self {
		Self {
			redirect: DEFAULT_REDIRECT.to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LinksConfigLayer {
	#[serde(default)]
	pub redirect: Option<String>,
}

impl LinksConfigLayer {
	pub fn merge(&mut self, other: LinksConfigLayer) {
		if other.redirect.is_some() {
			self.redirect = other.redirect;
		}
	}

	pub fn finalize(self) -> LinksConfig {
		LinksConfig {
			redirect: self.redirect.unwrap_or_else(|| DEFAULT_REDIRECT.to_string()),
		}
	}
}
