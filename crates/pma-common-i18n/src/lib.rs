// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for pma.
//!
//! Server-rendered HTML looks strings up through a [`Translator`]. Message ids
//! are the English source strings, as in any gettext catalog, and may carry
//! positional placeholders (`%1$s`) so translators can reorder arguments.
//!
//! # Example
//!
//! ```
//! use pma_common_i18n::{sprintf, IdentityTranslator, Translator};
//!
//! let i18n = IdentityTranslator;
//! let line = sprintf(i18n.gettext("%1$s from %2$s branch"), &["abc1234", "master"]);
//! assert_eq!(line, "abc1234 from master branch");
//! ```

mod catalog;
mod date;
mod error;
mod format;
mod locale;
mod resolve;

pub use catalog::{catalog_path, CatalogTranslator, IdentityTranslator, Translator, DOMAIN};
pub use date::{localised_date, localised_date_with_format, DEFAULT_DATE_FORMAT};
pub use error::I18nError;
pub use format::sprintf;
pub use locale::{available_locales, is_supported, locale_info, LocaleInfo};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
