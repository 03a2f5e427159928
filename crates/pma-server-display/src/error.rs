// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Errors raised while rendering a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
	#[error("template not found: {0}")]
	NotFound(String),

	#[error("invalid parameters for template {template}: {source}")]
	InvalidParams {
		template: String,
		#[source]
		source: serde_json::Error,
	},
}

/// Errors raised while rendering a sidebar fragment.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
	#[error(transparent)]
	Template(#[from] TemplateError),

	/// The configuration reports a revision but lacks one of its settings.
	#[error("missing setting {0}")]
	MissingSetting(&'static str),

	#[error("invalid repository url '{url}': {reason}")]
	InvalidRepositoryUrl { url: String, reason: String },
}
