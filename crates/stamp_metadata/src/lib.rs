// crates/stamp_metadata/src/lib.rs

use metadata_tag::{metadata_tag_for, METADATA_TAG_PATTERN};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(METADATA_TAG_PATTERN).expect("valid metadata tag pattern"));

/// How `stamp_metadata` changed the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampAction {
    /// At least one date-stamped tag existed and every match was rewritten
    /// in place.
    Replaced,
    /// No tag matched; a fresh one was appended at the end.
    Appended,
}

/// Inserts or updates the run-metadata tag in `content` for the given date.
///
/// If the content already carries a date-stamped tag, every occurrence
/// matching the pattern is replaced with the tag for `today`, leaving the
/// surrounding text untouched. Otherwise the content is trimmed of leading
/// and trailing whitespace and the tag is appended after one blank line,
/// with a trailing newline.
///
/// This is a pure transformation; the caller decides whether the result
/// differs from the input and whether to write it anywhere.
///
/// # Arguments
///
/// * `content` - The full document text.
/// * `today`   - Today's date as an ISO-8601 `YYYY-MM-DD` string.
///
/// # Returns
///
/// The transformed text and the action that was taken.
pub fn stamp_metadata(content: &str, today: &str) -> (String, StampAction) {
    let tag = metadata_tag_for(today);

    if TAG_RE.is_match(content) {
        let stamped = TAG_RE.replace_all(content, tag.as_str()).into_owned();
        (stamped, StampAction::Replaced)
    } else {
        let stamped = format!("{}\n\n{}\n", content.trim(), tag);
        (stamped, StampAction::Appended)
    }
}
