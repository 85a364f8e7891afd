// crates/metadata_tag/src/lib.rs

//! Canonical form of the run-metadata tag shared across the refresher
//! tool-chain.

/// Opening portion of the tag, up to and including the `=` before the date.
pub const METADATA_TAG_PREFIX: &str = "<!-- run_metadata: last_checked=";

/// Closing portion of the tag.
pub const METADATA_TAG_SUFFIX: &str = " -->";

/// Regex source matching a date-stamped tag (`YYYY-MM-DD`, zero-padded).
pub const METADATA_TAG_PATTERN: &str =
    r"<!-- run_metadata: last_checked=\d{4}-\d{2}-\d{2} -->";

/// Builds the full tag line for the given ISO-8601 date string.
pub fn metadata_tag_for(date: &str) -> String {
    format!("{}{}{}", METADATA_TAG_PREFIX, date, METADATA_TAG_SUFFIX)
}
