// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sidebar item describing the git revision of the running build.

use pma_common_i18n::{localised_date, sprintf, Translator};
use pma_common_version::{short_hash, GitPerson};
use pma_server_config::{keys, ConfigProvider, ConfigValue, DEFAULT_REPOSITORY_URL};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::DisplayError;
use crate::html::escape;
use crate::link::Linker;
use crate::response::StatusSink;
use crate::template::{TemplateRenderer, LIST_ITEM};

/// `id` of the rendered `<li>` element.
pub const ITEM_ID: &str = "li_pma_version_git";

/// Renders the "Git revision" sidebar item.
///
/// Borrows its collaborators for the duration of one request.
pub struct GitRevision<'a> {
	response: &'a mut dyn StatusSink,
	config: &'a mut dyn ConfigProvider,
	template: &'a dyn TemplateRenderer,
	translator: &'a dyn Translator,
	linker: Linker,
	repository_url: String,
}

impl<'a> GitRevision<'a> {
	pub fn new(
		response: &'a mut dyn StatusSink,
		config: &'a mut dyn ConfigProvider,
		template: &'a dyn TemplateRenderer,
		translator: &'a dyn Translator,
	) -> Self {
		Self {
			response,
			config,
			template,
			translator,
			linker: Linker::default(),
			repository_url: DEFAULT_REPOSITORY_URL.to_string(),
		}
	}

	pub fn with_linker(mut self, linker: Linker) -> Self {
		self.linker = linker;
		self
	}

	/// Web view of the repository; `/commit/{hash}` and `/tree/{branch}` are
	/// appended to it.
	///
	/// Only absolute `http` and `https` URLs are accepted, since the base ends
	/// up in an `href`.
	pub fn with_repository_url(mut self, url: impl Into<String>) -> Result<Self, DisplayError> {
		let url = url.into();
		let invalid = |reason: String| DisplayError::InvalidRepositoryUrl {
			url: url.clone(),
			reason,
		};
		let parsed = Url::parse(&url).map_err(|e| invalid(e.to_string()))?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
		}
		self.repository_url = url.trim_end_matches('/').to_string();
		Ok(self)
	}

	/// Render the item.
	///
	/// Returns an empty string and marks the request as failed when the build
	/// carries no revision.
	#[tracing::instrument(name = "git_revision_display", skip(self))]
	pub fn display(&mut self) -> Result<String, DisplayError> {
		self.config.check_git_revision();

		let commit_hash = self
			.config
			.get(keys::COMMIT_HASH)
			.and_then(ConfigValue::as_str)
			.unwrap_or_default()
			.to_string();

		if !self.config.is_enabled(keys::VERSION_GIT) || commit_hash.is_empty() {
			debug!("no git revision to display");
			self.response.set_request_status(false);
			return Ok(String::new());
		}

		let message = self
			.config
			.get(keys::MESSAGE)
			.and_then(ConfigValue::as_str)
			.unwrap_or_default();

		let mut commit = format!(
			"<strong title=\"{}\">{}</strong>",
			escape(message),
			escape(short_hash(&commit_hash))
		);
		if self.config.is_enabled(keys::IS_REMOTE_COMMIT) {
			let target = format!("{}/commit/{}", self.repository_url, commit_hash);
			commit = self.external_link(&target, &commit);
		}

		let branch = match self.config.get(keys::BRANCH).and_then(ConfigValue::as_str) {
			Some(name) => {
				let mut label = escape(name).into_owned();
				if self.config.is_enabled(keys::IS_REMOTE_BRANCH) {
					let target = format!("{}/tree/{}", self.repository_url, name);
					label = self.external_link(&target, &label);
				}
				sprintf(
					self.translator.gettext("%1$s from %2$s branch"),
					&[commit.as_str(), label.as_str()],
				)
			}
			None => format!("{commit} ({})", self.translator.gettext("no branch")),
		};

		let committer = self.person(keys::COMMITTER)?;
		let author = self.person(keys::AUTHOR)?;

		let mut content = format!(
			"{} {},<br> {}",
			self.translator.gettext("Git revision:"),
			branch,
			self.attribution("committed on %1$s by %2$s", committer)
		);
		if author != committer {
			content.push_str(", <br>");
			content.push_str(&self.attribution("authored on %1$s by %2$s", author));
		}

		let params = json!({
			"content": content,
			"id": ITEM_ID,
			"class": null,
			"url": {
				"href": null,
				"target": null,
				"id": null,
				"class": null,
			},
			"mysql_help_page": null,
		});

		Ok(self.template.render(LIST_ITEM, &params)?)
	}

	fn person(&self, key: &'static str) -> Result<&GitPerson, DisplayError> {
		self
			.config
			.get(key)
			.and_then(ConfigValue::as_person)
			.ok_or(DisplayError::MissingSetting(key))
	}

	fn external_link(&self, target: &str, inner: &str) -> String {
		format!(
			"<a href=\"{}\" rel=\"noopener noreferrer\" target=\"_blank\">{}</a>",
			escape(&self.linker.link_url(target)),
			inner
		)
	}

	fn attribution(&self, msgid: &str, person: &GitPerson) -> String {
		let date = localised_date(&person.date, self.translator);
		let href = self.linker.link_url(&format!("mailto:{}", person.email));
		let link = format!(
			"<a href=\"{}\">{}</a>",
			escape(&href),
			escape(&person.name)
		);
		sprintf(self.translator.gettext(msgid), &[date.as_str(), link.as_str()])
	}
}
