// crates/refresh_prompt/src/config.rs

use std::path::{Path, PathBuf};

use resolve_prompt_path::resolve_prompt_path;

/// Where the prompt file lives. The defaults are the values baked into the
/// tool; carrying them in a struct lets tests and callers point the
/// refresher at arbitrary locations instead.
#[derive(Clone, Debug)]
pub struct RefreshConfig {
    /// Directory holding the prompt files, relative to the repository root.
    pub prompts_dir: String,
    /// Basename of the prompt file to refresh.
    pub target_file: String,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            prompts_dir: ".github/prompts".to_string(),
            target_file: "migrate-cypress-to-playwright.prompt.md".to_string(),
        }
    }
}

impl RefreshConfig {
    /// Resolves the candidate path for the target file, preferring the
    /// working-directory-relative location and falling back to
    /// `fallback_base` when the prompts directory is absent.
    pub fn target_path(&self, working_dir: &Path, fallback_base: Option<&Path>) -> PathBuf {
        resolve_prompt_path(
            working_dir,
            &self.prompts_dir,
            &self.target_file,
            fallback_base,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_points_at_github_prompts() {
        let config = RefreshConfig::default();
        assert_eq!(config.prompts_dir, ".github/prompts");
        assert_eq!(config.target_file, "migrate-cypress-to-playwright.prompt.md");
    }

    #[test]
    fn test_target_path_uses_configured_names() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("prompts")).expect("failed to create dir");

        let config = RefreshConfig {
            prompts_dir: "prompts".to_string(),
            target_file: "notes.md".to_string(),
        };
        let path = config.target_path(temp_dir.path(), None);
        assert_eq!(path, temp_dir.path().join("prompts/notes.md"));
    }
}
