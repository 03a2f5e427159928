// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Substitute string arguments into a translated message.
///
/// Supports the placeholders found in gettext catalogs:
/// - `%1$s`, `%2$s`, ... positional, 1-based
/// - `%s` sequential, counting from the first argument
/// - `%%` a literal percent sign
///
/// A placeholder with no matching argument renders as nothing; any other `%`
/// sequence is copied through untouched.
///
/// # Example
///
/// ```
/// use pma_common_i18n::sprintf;
///
/// assert_eq!(sprintf("%2$s, %1$s", &["world", "hello"]), "hello, world");
/// assert_eq!(sprintf("%s of %s (100%%)", &["1", "2"]), "1 of 2 (100%)");
/// ```
pub fn sprintf(format: &str, args: &[&str]) -> String {
	let mut out = String::with_capacity(format.len() + args.iter().map(|a| a.len()).sum::<usize>());
	let mut rest = format;
	let mut next_seq = 0usize;

	while let Some(pos) = rest.find('%') {
		out.push_str(&rest[..pos]);
		let spec = &rest[pos + 1..];

		if let Some(after) = spec.strip_prefix('%') {
			out.push('%');
			rest = after;
		} else if let Some(after) = spec.strip_prefix('s') {
			out.push_str(args.get(next_seq).copied().unwrap_or_default());
			next_seq += 1;
			rest = after;
		} else if let Some((index, after)) = positional(spec) {
			if let Some(arg) = index.checked_sub(1).and_then(|i| args.get(i)) {
				out.push_str(arg);
			}
			rest = after;
		} else {
			out.push('%');
			rest = spec;
		}
	}

	out.push_str(rest);
	out
}

/// Parse `{digits}$s` at the start of `spec`.
fn positional(spec: &str) -> Option<(usize, &str)> {
	let digits = spec.bytes().take_while(u8::is_ascii_digit).count();
	if digits == 0 {
		return None;
	}
	let after = spec[digits..].strip_prefix("$s")?;
	let index = spec[..digits].parse().ok()?;
	Some((index, after))
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_positional_arguments() {
		assert_eq!(
			sprintf("%1$s from %2$s branch", &["abc1234", "master"]),
			"abc1234 from master branch"
		);
	}

	/// Test: Translators may reorder positional arguments.
	///
	/// Why this test is important: Word order differs between languages. The
	/// whole point of `%1$s` over `%s` is that a translation can put the second
	/// argument first.
	#[test]
	fn test_positional_reordering() {
		assert_eq!(
			sprintf("Zweig %2$s: %1$s", &["abc1234", "master"]),
			"Zweig master: abc1234"
		);
	}

	#[test]
	fn test_sequential_and_literal_percent() {
		assert_eq!(sprintf("%s%%", &["50"]), "50%");
	}

	#[test]
	fn test_missing_argument_renders_empty() {
		assert_eq!(sprintf("a%3$sb%sc", &["x"]), "abxc");
		assert_eq!(sprintf("%0$s", &["x"]), "");
	}

	#[test]
	fn test_unknown_specifier_is_copied() {
		assert_eq!(sprintf("100%d %", &[]), "100%d %");
		assert_eq!(sprintf("%1$d", &["x"]), "%1$d");
	}

	proptest! {
		/// Text without a percent sign is returned unchanged whatever the arguments.
		#[test]
		fn prop_plain_text_is_untouched(text in "[^%]*", arg in ".*") {
			prop_assert_eq!(sprintf(&text, &[arg.as_str()]), text);
		}

		/// Arguments are inserted verbatim, even when they contain placeholders.
		#[test]
		fn prop_arguments_are_not_reinterpreted(arg in ".*") {
			prop_assert_eq!(sprintf("[%1$s]", &[arg.as_str()]), format!("[{arg}]"));
		}
	}
}
