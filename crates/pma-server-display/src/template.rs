// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Built-in HTML templates.

use serde::Deserialize;
use serde_json::Value;

use crate::error::TemplateError;
use crate::html::escape;
use crate::link::Linker;

pub const LIST_ITEM: &str = "list/item";

const MYSQL_DOCS_BASE: &str = "https://dev.mysql.com/doc/refman/8.0/en/";

/// Renders a named template with JSON parameters.
pub trait TemplateRenderer {
	fn render(&self, name: &str, params: &Value) -> Result<String, TemplateError>;
}

/// The templates shipped with the server.
#[derive(Debug, Clone, Default)]
pub struct Templates {
	linker: Linker,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListItemParams {
	/// Inserted verbatim; callers escape what they put in.
	content: String,
	id: Option<String>,
	class: Option<String>,
	url: Option<ListItemUrl>,
	mysql_help_page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListItemUrl {
	href: Option<String>,
	target: Option<String>,
	id: Option<String>,
	class: Option<String>,
}

impl Templates {
	pub fn new(linker: Linker) -> Self {
		Self { linker }
	}

	fn list_item(&self, params: ListItemParams) -> String {
		let mut html = String::from("<li");
		push_attr(&mut html, "id", params.id.as_deref());
		push_attr(&mut html, "class", params.class.as_deref());
		html.push('>');

		let link = params
			.url
			.filter(|url| url.href.as_deref().is_some_and(|href| !href.is_empty()));
		if let Some(url) = &link {
			html.push_str("<a");
			push_attr(&mut html, "href", url.href.as_deref());
			push_attr(&mut html, "target", url.target.as_deref());
			push_attr(&mut html, "id", url.id.as_deref());
			push_attr(&mut html, "class", url.class.as_deref());
			html.push('>');
		}

		html.push_str(&params.content);

		if link.is_some() {
			html.push_str("</a>");
		}

		if let Some(page) = params.mysql_help_page.filter(|page| !page.is_empty()) {
			let href = self.linker.link_url(&format!("{MYSQL_DOCS_BASE}{page}.html"));
			html.push_str(" <a href=\"");
			html.push_str(&escape(&href));
			html.push_str("\" target=\"mysql_doc\" class=\"help\">Documentation</a>");
		}

		html.push_str("</li>");
		html
	}
}

impl TemplateRenderer for Templates {
	fn render(&self, name: &str, params: &Value) -> Result<String, TemplateError> {
		match name {
			LIST_ITEM => {
				let params = ListItemParams::deserialize(params).map_err(|e| {
					TemplateError::InvalidParams {
						template: name.to_string(),
						source: e,
					}
				})?;
				Ok(self.list_item(params))
			}
			other => Err(TemplateError::NotFound(other.to_string())),
		}
	}
}

fn push_attr(html: &mut String, name: &str, value: Option<&str>) {
	if let Some(value) = value.filter(|v| !v.is_empty()) {
		html.push(' ');
		html.push_str(name);
		html.push_str("=\"");
		html.push_str(&escape(value));
		html.push('"');
	}
}
