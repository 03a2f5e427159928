// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Receives the outcome of the current request.
pub trait StatusSink {
	fn set_request_status(&mut self, success: bool);
}

/// Request outcome; successful until a component reports otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
	success: bool,
}

impl Default for Response {
	fn default() -> Self {
		Self { success: true }
	}
}

impl Response {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_success(&self) -> bool {
		self.success
	}
}

impl StatusSink for Response {
	fn set_request_status(&mut self, success: bool) {
		self.success = success;
	}
}
