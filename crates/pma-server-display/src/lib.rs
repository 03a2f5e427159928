// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server-rendered sidebar fragments for pma.
//!
//! The main entry point is [`GitRevision`], which renders the "Git revision"
//! list item shown in the admin sidebar:
//!
//! ```
//! use pma_common_i18n::IdentityTranslator;
//! use pma_common_version::StaticRevisionSource;
//! use pma_server_config::Config;
//! use pma_server_display::{GitRevision, Response, Templates};
//!
//! let mut response = Response::new();
//! let mut config = Config::new(Box::new(StaticRevisionSource::empty()));
//! let templates = Templates::default();
//!
//! let html = GitRevision::new(&mut response, &mut config, &templates, &IdentityTranslator)
//! 	.display()
//! 	.unwrap();
//!
//! assert!(html.is_empty());
//! assert!(!response.is_success());
//! ```
//!
//! Every value that originates from the repository (messages, names, emails,
//! branch names) is escaped with [`html::escape`] before it reaches markup, and
//! external links are routed through [`Linker`].

pub mod error;
mod git_revision;
pub mod html;
mod link;
mod response;
mod template;

pub use error::{DisplayError, TemplateError};
pub use git_revision::{GitRevision, ITEM_ID};
pub use link::{Linker, DEFAULT_REDIRECT};
pub use response::{Response, StatusSink};
pub use template::{TemplateRenderer, Templates, LIST_ITEM};
