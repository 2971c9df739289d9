//! Workspace root detection
//!
//! The checker needs to run from the directory holding the project's
//! `tsconfig.json`, not from wherever the server was launched.

use std::env;
use std::path::{Path, PathBuf};

/// Fallback workspace root when no tsconfig.json is found in any ancestor
const PROJECT_DIR_VAR: &str = "CLAUDE_PROJECT_DIR";

/// Find the nearest ancestor directory of `file_path` containing a
/// `tsconfig.json`.
///
/// Relative paths are resolved against the current working directory before
/// the walk. If no ancestor has the marker, falls back to
/// `$CLAUDE_PROJECT_DIR` (when set and non-empty), then the current working
/// directory. Always returns a directory.
pub fn find_workspace_root(file_path: &Path) -> PathBuf {
    let absolute = if file_path.is_absolute() {
        file_path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(file_path))
            .unwrap_or_else(|_| file_path.to_path_buf())
    };

    let mut dir = absolute.parent();
    while let Some(current) = dir {
        let parent = current.parent();
        // The filesystem root is never a workspace candidate
        if parent.is_none() {
            break;
        }
        if current.join("tsconfig.json").is_file() {
            return current.to_path_buf();
        }
        dir = parent;
    }

    if let Ok(project_dir) = env::var(PROJECT_DIR_VAR) {
        if !project_dir.is_empty() {
            return PathBuf::from(project_dir);
        }
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_marker_in_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("project");
        let src = root.join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(root.join("tsconfig.json"), "{}").unwrap();

        let found = find_workspace_root(&src.join("app.ts"));
        assert_eq!(found, root);
    }

    #[test]
    fn test_nearest_marker_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let outer = tmp.path().join("outer");
        let inner = outer.join("packages").join("web");
        fs::create_dir_all(inner.join("src")).unwrap();
        fs::write(outer.join("tsconfig.json"), "{}").unwrap();
        fs::write(inner.join("tsconfig.json"), "{}").unwrap();

        let found = find_workspace_root(&inner.join("src").join("index.ts"));
        assert_eq!(found, inner);
    }

    #[test]
    fn test_marker_beside_file() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("flat");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("tsconfig.json"), "{}").unwrap();

        let found = find_workspace_root(&root.join("main.ts"));
        assert_eq!(found, root);
    }

    #[test]
    fn test_no_marker_falls_back_to_env() {
        let tmp = tempfile::tempdir().unwrap();
        let deep = tmp.path().join("no-marker").join("src");
        fs::create_dir_all(&deep).unwrap();

        env::set_var(PROJECT_DIR_VAR, tmp.path());
        let found = find_workspace_root(&deep.join("app.ts"));
        env::remove_var(PROJECT_DIR_VAR);

        assert_eq!(found, tmp.path());
    }

    #[test]
    fn test_root_is_not_a_workspace_candidate() {
        // A file directly under / can only resolve through the fallbacks;
        // the walk stops before testing the root itself
        let found = find_workspace_root(Path::new("/orphan.ts"));
        assert_ne!(found, Path::new("/"));
    }

    #[test]
    fn test_bare_filename_terminates() {
        // No parent beyond cwd's ancestors; must return something, not loop
        let found = find_workspace_root(Path::new("orphan.ts"));
        assert!(!found.as_os_str().is_empty());
    }
}
