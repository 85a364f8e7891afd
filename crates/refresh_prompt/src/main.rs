// crates/refresh_prompt/src/main.rs

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::LevelFilter;

use refresh_prompt::config::RefreshConfig;
use refresh_prompt::refresh_prompt_file;
use resolve_prompt_path::install_root;

fn main() -> Result<()> {
    let matches = Command::new("refresh_prompt")
        .version("0.1.0")
        .about("Validates the migration prompt file and stamps its last-checked date")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let verbose = *matches.get_one::<bool>("verbose").unwrap();
    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let config = RefreshConfig::default();

    // REFRESH_PROMPT_FILE skips path resolution and names the target
    // directly.
    let target_path = if let Ok(path_override) = env::var("REFRESH_PROMPT_FILE") {
        PathBuf::from(path_override)
    } else {
        let current_dir = env::current_dir().context("Failed to get current directory")?;
        // When the prompts directory is not visible from the working
        // directory, retry relative to the installation root (two levels
        // above the binary's directory).
        let fallback = env::current_exe()
            .ok()
            .and_then(|exe| install_root(&exe));
        config.target_path(&current_dir, fallback.as_deref())
    };
    log::debug!("Resolved target path: {}", target_path.display());

    let outcome = refresh_prompt_file(&target_path)?;
    log::debug!("Refresh outcome: {:?}", outcome);

    Ok(())
}
