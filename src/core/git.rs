//! Git repository operations.
//!
//! This module provides utilities for interacting with Git repositories:
//! finding the repository root and hooks directory, enumerating the staged
//! file set, and probing remote revisions for `validate --revs`.

use crate::core::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// Represents a Git repository.
#[derive(Debug, Clone)]
pub struct GitRepo {
    /// Root directory of the repository (where .git is).
    root: PathBuf,
    /// Path to the .git directory (or file for worktrees).
    git_dir: PathBuf,
}

impl GitRepo {
    /// Discovers the Git repository from the current directory.
    pub fn discover() -> Result<Self> {
        Self::discover_from(&std::env::current_dir().map_err(|e| Error::io("get current dir", e))?)
    }

    /// Discovers the Git repository from a specific path.
    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel", "--git-dir"])
            .current_dir(path)
            .output()
            .map_err(|e| Error::io("run git rev-parse", e))?;

        if !output.status.success() {
            return Err(Error::NotGitRepo);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut lines = stdout.lines();

        let root = lines.next().map(PathBuf::from).ok_or(Error::NotGitRepo)?;

        let git_dir = lines
            .next()
            .map(|s| {
                let p = PathBuf::from(s);
                if p.is_absolute() {
                    p
                } else {
                    root.join(p)
                }
            })
            .ok_or(Error::NotGitRepo)?;

        Ok(Self { root, git_dir })
    }

    /// Returns the root directory of the repository.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .git directory path.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Returns the hooks directory path.
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        // Check for custom hooks path first
        if let Ok(output) = Command::new("git")
            .args(["config", "--get", "core.hooksPath"])
            .current_dir(&self.root)
            .output()
        {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !path.is_empty() {
                    let hooks_path = PathBuf::from(&path);
                    if hooks_path.is_absolute() {
                        return hooks_path;
                    }
                    return self.root.join(hooks_path);
                }
            }
        }

        // Default to .git/hooks
        self.git_dir.join("hooks")
    }

    /// Returns the path to a specific hook.
    #[must_use]
    pub fn hook_path(&self, hook_name: &str) -> PathBuf {
        self.hooks_dir().join(hook_name)
    }

    /// Returns the staged file set as repository-relative paths.
    ///
    /// Paths use `/` separators so they can be matched against the
    /// configured patterns directly. Deleted files are not included.
    pub fn staged_files(&self) -> Result<Vec<String>> {
        let output = Command::new("git")
            .args(["diff", "--cached", "--name-only", "--diff-filter=ACMR"])
            .current_dir(&self.root)
            .output()
            .map_err(|e| Error::io("get staged files", e))?;

        if !output.status.success() {
            return Err(Error::git("diff --cached", "Failed to get staged files"));
        }

        let files = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();

        Ok(files)
    }

    /// Returns every file in the working tree as repository-relative paths.
    ///
    /// The `.git` directory is never descended into. Results are sorted for
    /// deterministic hook input ordering.
    pub fn all_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != ".git");

        for entry in walker {
            let entry = entry.map_err(|e| Error::Internal {
                message: format!("walk working tree: {e}"),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|e| Error::Internal {
                    message: format!("strip repo root: {e}"),
                })?;

            let path = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            files.push(path);
        }

        files.sort_unstable();
        Ok(files)
    }
}

/// Probes whether `rev` names an existing ref of the remote repository.
///
/// Used by `validate --revs`; this is the only network-touching operation in
/// the crate. Returns `Ok(false)` when the remote answered but no ref
/// matched, and an error when the remote could not be queried at all.
pub fn remote_rev_exists(repo_url: &str, rev: &str) -> Result<bool> {
    let output = Command::new("git")
        .args(["ls-remote", "--exit-code", repo_url, rev])
        .output()
        .map_err(|e| Error::io("run git ls-remote", e))?;

    match output.status.code() {
        Some(0) => Ok(true),
        // ls-remote --exit-code uses 2 for "no matching refs"
        Some(2) => Ok(false),
        _ => Err(Error::git(
            "ls-remote",
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        )),
    }
}
