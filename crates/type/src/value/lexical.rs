// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::borrow::Cow;

/// Strips surrounding whitespace and underscore separators from a numeric
/// literal, borrowing when no rewriting is required.
pub(crate) fn clean_number(raw: &str) -> Cow<'_, str> {
	let needs_trimming = raw
		.as_bytes()
		.first()
		.is_some_and(|&b| b.is_ascii_whitespace())
		|| raw.as_bytes()
			.last()
			.is_some_and(|&b| b.is_ascii_whitespace());
	let has_underscores = raw.as_bytes().contains(&b'_');

	match (needs_trimming, has_underscores) {
		(false, false) => Cow::Borrowed(raw),
		(true, false) => Cow::Borrowed(raw.trim()),
		(false, true) => Cow::Owned(raw.replace('_', "")),
		(true, true) => Cow::Owned(raw.trim().replace('_', "")),
	}
}
