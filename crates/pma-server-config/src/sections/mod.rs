// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod git;
mod i18n;
mod links;
mod logging;

pub use git::{GitConfig, GitConfigLayer, DEFAULT_REPOSITORY_URL};
pub use i18n::{I18nConfig, I18nConfigLayer};
pub use links::{LinksConfig, LinksConfigLayer, DEFAULT_REDIRECT};
pub use logging::{LoggingConfig, LoggingConfigLayer};
