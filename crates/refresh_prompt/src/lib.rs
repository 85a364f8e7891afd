// crates/refresh_prompt/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use log::{error, warn};

use stamp_metadata::{stamp_metadata, StampAction};
use validate_sections::missing_sections;

pub mod config;

/// Outcome of one refresh pass over the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The file content changed and was written back.
    Updated,
    /// The file already carried today's timestamp; nothing was written.
    Unchanged,
    /// The file does not exist. Reported, not fatal.
    Missing,
}

/// Runs the full read-validate-stamp-write cycle against `path`.
///
/// A missing file is an expected condition: it is logged and reported as
/// [`RefreshOutcome::Missing`] without an error. Anything else that goes
/// wrong mid-cycle (unreadable content, a failed write) propagates as an
/// error and is left to the caller.
pub fn refresh_prompt_file(path: &Path) -> Result<RefreshOutcome> {
    println!("Checking {}...", path.display());

    if !path.exists() {
        error!("File {} not found!", path.display());
        return Ok(RefreshOutcome::Missing);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;

    // Validation only warns; an incomplete prompt still gets stamped.
    for section in missing_sections(&content) {
        warn!("Missing section '{}' in {}", section, path.display());
    }

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let (new_content, action) = stamp_metadata(&content, &today);
    match action {
        StampAction::Replaced => println!("Updated existing timestamp."),
        StampAction::Appended => println!("Appended new timestamp."),
    }

    if new_content != content {
        fs::write(path, &new_content)
            .with_context(|| format!("Error writing file {}", path.display()))?;
        println!("SUCCESS: Updated {}", path.display());
        Ok(RefreshOutcome::Updated)
    } else {
        println!("No changes needed for {}", path.display());
        Ok(RefreshOutcome::Unchanged)
    }
}
