// crates/resolve_prompt_path/src/lib.rs

use std::path::{Path, PathBuf};

/// Resolves the location of the prompt file.
///
/// The primary candidate is `working_dir/prompts_dir/file_name`. If
/// `prompts_dir` does not exist under `working_dir` (typically because the
/// tool was not started from the repository root) and a `fallback_base` is
/// supplied, the candidate is recomputed as
/// `fallback_base/prompts_dir/file_name` instead.
///
/// The returned path is only a candidate: no error is raised here if it does
/// not exist, that is for the caller to detect and report.
pub fn resolve_prompt_path(
    working_dir: &Path,
    prompts_dir: &str,
    file_name: &str,
    fallback_base: Option<&Path>,
) -> PathBuf {
    let primary_dir = working_dir.join(prompts_dir);
    if primary_dir.is_dir() {
        return primary_dir.join(file_name);
    }

    match fallback_base {
        Some(base) => base.join(prompts_dir).join(file_name),
        None => primary_dir.join(file_name),
    }
}

/// Derives the installation root for the binary at `exe_path`.
///
/// The binary lives two directory levels below the repository root
/// (`<root>/target/<profile>/<bin>`), so the root is the third ancestor of
/// the executable path. Returns `None` for paths too shallow to have one.
pub fn install_root(exe_path: &Path) -> Option<PathBuf> {
    exe_path.ancestors().nth(3).map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_prefers_working_dir_relative_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let prompts = temp_dir.path().join(".github/prompts");
        fs::create_dir_all(&prompts).expect("failed to create prompts dir");

        let fallback = tempdir().expect("failed to create fallback dir");
        let resolved = resolve_prompt_path(
            temp_dir.path(),
            ".github/prompts",
            "target.prompt.md",
            Some(fallback.path()),
        );
        assert_eq!(resolved, prompts.join("target.prompt.md"));
    }

    #[test]
    fn test_falls_back_when_dir_absent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let fallback = tempdir().expect("failed to create fallback dir");

        let resolved = resolve_prompt_path(
            temp_dir.path(),
            ".github/prompts",
            "target.prompt.md",
            Some(fallback.path()),
        );
        assert_eq!(
            resolved,
            fallback.path().join(".github/prompts/target.prompt.md")
        );
    }

    #[test]
    fn test_keeps_primary_candidate_without_fallback() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let resolved =
            resolve_prompt_path(temp_dir.path(), ".github/prompts", "target.prompt.md", None);
        assert_eq!(
            resolved,
            temp_dir.path().join(".github/prompts/target.prompt.md")
        );
    }

    #[test]
    fn test_install_root_strips_target_profile_and_binary() {
        let exe = Path::new("/repo/target/debug/refresh_prompt");
        assert_eq!(install_root(exe), Some(PathBuf::from("/repo")));
    }

    #[test]
    fn test_install_root_of_shallow_path_is_none() {
        assert_eq!(install_root(Path::new("/refresh_prompt")), None);
    }
}
