// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Date formatting with translated month and weekday names.

use chrono::format::{Item, StrftimeItems};
use std::borrow::Cow;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use tracing::warn;

use crate::catalog::Translator;

/// strftime pattern for a full date and time. It is itself a msgid so each
/// locale can choose its own order.
pub const DEFAULT_DATE_FORMAT: &str = "%B %d, %Y at %I:%M %p";

const MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

const SHORT_MONTHS: [&str; 12] = [
	"Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAYS: [&str; 7] = [
	"Sunday",
	"Monday",
	"Tuesday",
	"Wednesday",
	"Thursday",
	"Friday",
	"Saturday",
];

const SHORT_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MERIDIEM_CONTEXT: &str = "AM/PM indication in time";

/// Format `date` with the translated [`DEFAULT_DATE_FORMAT`].
pub fn localised_date(date: &DateTime<FixedOffset>, translator: &dyn Translator) -> String {
	localised_date_with_format(date, translator.gettext(DEFAULT_DATE_FORMAT), translator)
}

/// Format `date` with a strftime `format`, translating `%B`, `%b`, `%A`,
/// `%a`, `%p` and `%P` through `translator`. The date is shown in its own offset.
///
/// A format chrono cannot parse (for example from a broken translation) falls
/// back to [`DEFAULT_DATE_FORMAT`].
pub fn localised_date_with_format(
	date: &DateTime<FixedOffset>,
	format: &str,
	translator: &dyn Translator,
) -> String {
	let pattern = substitute_names(date, format, translator);
	if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
		warn!(format, "invalid date format, using default");
		let pattern = substitute_names(date, DEFAULT_DATE_FORMAT, translator);
		return date.format(&pattern).to_string();
	}
	date.format(&pattern).to_string()
}

/// Replace name specifiers with translated text, escaped for strftime.
fn substitute_names(date: &DateTime<FixedOffset>, format: &str, translator: &dyn Translator) -> String {
	let month = date.month0() as usize;
	let weekday = date.weekday().num_days_from_sunday() as usize;
	let meridiem = if date.hour() >= 12 { "PM" } else { "AM" };

	let mut out = String::with_capacity(format.len());
	let mut chars = format.chars();
	while let Some(c) = chars.next() {
		if c != '%' {
			out.push(c);
			continue;
		}
		let name: Cow<'_, str> = match chars.next() {
			Some('B') => translator.gettext(MONTHS[month]).into(),
			Some('b') => translator.pgettext("Short month name", SHORT_MONTHS[month]).into(),
			Some('A') => translator.gettext(DAYS[weekday]).into(),
			Some('a') => translator.pgettext("Short week day name", SHORT_DAYS[weekday]).into(),
			Some('p') => translator.pgettext(MERIDIEM_CONTEXT, meridiem).into(),
			Some('P') => translator.pgettext(MERIDIEM_CONTEXT, meridiem).to_lowercase().into(),
			Some(other) => {
				out.push('%');
				out.push(other);
				continue;
			}
			None => {
				out.push('%');
				break;
			}
		};
		out.push_str(&name.replace('%', "%%"));
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::IdentityTranslator;

	struct German;

	impl Translator for German {
		fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
			match msgid {
				"May" => "Mai",
				"Wednesday" => "Mittwoch",
				DEFAULT_DATE_FORMAT => "%d. %B %Y um %H:%M",
				other => other,
			}
		}

		fn pgettext<'a>(&'a self, context: &str, msgid: &'a str) -> &'a str {
			match (context, msgid) {
				("Short month name", "May") => "Mai",
				("Short week day name", "Wed") => "Mi",
				(_, other) => other,
			}
		}
	}

	fn date(s: &str) -> DateTime<FixedOffset> {
		DateTime::parse_from_rfc3339(s).unwrap()
	}

	#[test]
	fn test_default_format_in_english() {
		let formatted = localised_date(&date("2019-05-01T14:05:00+02:00"), &IdentityTranslator);
		assert_eq!(formatted, "May 01, 2019 at 02:05 PM");
	}

	/// Test: Month names and the format itself come from the translator.
	///
	/// Why this test is important: The commit date is shown inline in a
	/// translated sentence. An English month name inside a German sentence is
	/// exactly what a localized date exists to avoid.
	#[test]
	fn test_translated_format_and_month() {
		let formatted = localised_date(&date("2019-05-01T14:05:00+02:00"), &German);
		assert_eq!(formatted, "01. Mai 2019 um 14:05");
	}

	struct Afternoon;

	impl Translator for Afternoon {
		fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
			msgid
		}

		fn pgettext<'a>(&'a self, context: &str, msgid: &'a str) -> &'a str {
			match (context, msgid) {
				("AM/PM indication in time", "AM") => "vorm.",
				("AM/PM indication in time", "PM") => "nachm.",
				(_, other) => other,
			}
		}
	}

	/// Test: The AM/PM marker of the default format is translated.
	///
	/// Why this test is important: A catalog may keep the default date layout
	/// and translate only the words. Leaving chrono's English "PM" in place
	/// would put English text in the middle of a translated sentence.
	#[test]
	fn test_default_format_translates_meridiem() {
		let afternoon = localised_date(&date("2019-05-01T12:00:00+02:00"), &Afternoon);
		assert_eq!(afternoon, "May 01, 2019 at 12:00 nachm.");

		let morning = localised_date(&date("2019-05-01T00:30:00+02:00"), &Afternoon);
		assert_eq!(morning, "May 01, 2019 at 12:30 vorm.");
	}

	#[test]
	fn test_lowercase_meridiem() {
		let formatted =
			localised_date_with_format(&date("2019-05-01T18:00:00Z"), "%I %P", &IdentityTranslator);
		assert_eq!(formatted, "06 pm");
		let formatted = localised_date_with_format(&date("2019-05-01T18:00:00Z"), "%P", &Afternoon);
		assert_eq!(formatted, "nachm.");
	}

	#[test]
	fn test_short_names_use_context() {
		let formatted =
			localised_date_with_format(&date("2019-05-01T14:05:00+02:00"), "%a %b %e", &German);
		assert_eq!(formatted, "Mi Mai  1");
	}

	#[test]
	fn test_date_keeps_its_offset() {
		let formatted = localised_date_with_format(
			&date("2019-05-01T23:30:00-07:00"),
			"%Y-%m-%d %H:%M %z",
			&IdentityTranslator,
		);
		assert_eq!(formatted, "2019-05-01 23:30 -0700");
	}

	/// Test: A percent sign inside a translated name is not a specifier.
	///
	/// Why this test is important: Translated names are inserted into the
	/// strftime pattern. An unescaped `%` in a translation would otherwise be
	/// interpreted by chrono or make formatting fail.
	#[test]
	fn test_percent_in_translation_is_literal() {
		struct Odd;
		impl Translator for Odd {
			fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
				if msgid == "May" {
					"100%Y"
				} else {
					msgid
				}
			}
			fn pgettext<'a>(&'a self, _context: &str, msgid: &'a str) -> &'a str {
				msgid
			}
		}

		let formatted = localised_date_with_format(&date("2019-05-01T00:00:00Z"), "%B", &Odd);
		assert_eq!(formatted, "100%Y");
	}

	#[test]
	fn test_invalid_format_falls_back_to_default() {
		let formatted =
			localised_date_with_format(&date("2019-05-01T14:05:00Z"), "%Q broken", &IdentityTranslator);
		assert_eq!(formatted, "May 01, 2019 at 02:05 PM");
	}
}
