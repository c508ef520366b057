//! Input path resolution
//!
//! Relative input paths are resolved against the project root, not the shell's
//! working directory:
//!
//! 1. `SUPERCHAIN_CHECK_ROOT` if set
//! 2. the directory holding `target/` when running a cargo-built binary
//!    (`<root>/target/<profile>/superchain_check`)
//! 3. the current working directory

use once_cell::sync::Lazy;
use std::env;
use std::path::{Path, PathBuf};

use crate::logger::{self, LogTag};

/// Environment variable overriding the project root
pub const ROOT_ENV_VAR: &str = "SUPERCHAIN_CHECK_ROOT";

static PROJECT_ROOT: Lazy<PathBuf> = Lazy::new(|| {
    let root = resolve_project_root(
        env::var_os(ROOT_ENV_VAR).map(PathBuf::from),
        env::current_exe().ok(),
        env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    );
    logger::debug(
        LogTag::Config,
        &format!("Project root: {}", root.display()),
    );
    root
});

/// Resolve the input file path given on the command line
pub fn resolve_input_path(input: &Path) -> PathBuf {
    resolve_against(&PROJECT_ROOT, input)
}

fn resolve_against(root: &Path, input: &Path) -> PathBuf {
    if input.is_absolute() {
        input.to_path_buf()
    } else {
        root.join(input)
    }
}

fn resolve_project_root(
    env_root: Option<PathBuf>,
    exe: Option<PathBuf>,
    cwd: PathBuf,
) -> PathBuf {
    if let Some(root) = env_root.filter(|p| !p.as_os_str().is_empty()) {
        return root;
    }

    if let Some(root) = exe.as_deref().and_then(cargo_target_root) {
        return root;
    }

    cwd
}

/// `<root>/target/<profile>/<binary>` -> `<root>`
fn cargo_target_root(exe: &Path) -> Option<PathBuf> {
    let target_dir = exe.parent()?.parent()?;
    if target_dir.file_name()? == "target" {
        target_dir.parent().map(Path::to_path_buf)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_input_unchanged() {
        let root = Path::new("/project");
        let input = Path::new("/data/tokens.json");
        assert_eq!(resolve_against(root, input), PathBuf::from("/data/tokens.json"));
    }

    #[test]
    fn test_relative_input_joins_root() {
        let root = Path::new("/project");
        let input = Path::new("data/tokens.json");
        assert_eq!(
            resolve_against(root, input),
            PathBuf::from("/project/data/tokens.json")
        );
    }

    #[test]
    fn test_env_root_wins() {
        let root = resolve_project_root(
            Some(PathBuf::from("/from/env")),
            Some(PathBuf::from("/repo/target/release/superchain_check")),
            PathBuf::from("/cwd"),
        );
        assert_eq!(root, PathBuf::from("/from/env"));
    }

    #[test]
    fn test_cargo_target_root() {
        let root = resolve_project_root(
            None,
            Some(PathBuf::from("/repo/target/debug/superchain_check")),
            PathBuf::from("/cwd"),
        );
        assert_eq!(root, PathBuf::from("/repo"));
    }

    #[test]
    fn test_target_must_be_two_levels_up() {
        let root = resolve_project_root(
            None,
            Some(PathBuf::from("/repo/target/release/bin/superchain_check")),
            PathBuf::from("/cwd"),
        );
        assert_eq!(root, PathBuf::from("/cwd"));
    }

    #[test]
    fn test_installed_binary_falls_back_to_cwd() {
        let root = resolve_project_root(
            Some(PathBuf::new()),
            Some(PathBuf::from("/usr/local/bin/superchain_check")),
            PathBuf::from("/cwd"),
        );
        assert_eq!(root, PathBuf::from("/cwd"));
    }
}
