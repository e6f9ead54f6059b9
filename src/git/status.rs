//! Git Status Operations
//!
//! Porcelain status parsing used to gate the interactive session: committing
//! only starts from a tree whose changes are fully staged.

use regex::Regex;
use std::{io, process::Command};

use crate::errors::{GitError, Result, RczError};

/// Reads the git status.
///
/// # Errors
/// * If the git command cannot be executed or reports failure (typically:
///   not inside a repository, or `git` missing from PATH)
///
/// # Returns
/// * `Result<String>` - The porcelain status output
pub fn read_git_status() -> Result<String> {
    let command = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .map_err(|e| {
            RczError::Git(GitError::RepositoryCheck {
                output: e.to_string(),
            })
        })?;

    if command.status.success() {
        let output = String::from_utf8_lossy(&command.stdout);
        Ok(output.to_string())
    } else {
        let error_message = String::from_utf8_lossy(&command.stderr);
        Err(RczError::Git(GitError::RepositoryCheck {
            output: error_message.trim().to_string(),
        }))
    }
}

/// Extracts the files with unstaged working-tree changes from porcelain
/// status output.
///
/// Each porcelain line is `XY path` where X is the index status and Y the
/// working-tree status. A non-space Y means the path has changes that are
/// not staged; this includes untracked files (`??`). Staged-only lines
/// (Y = space) are not reported.
///
/// # Arguments
/// * `status` - The porcelain status output
///
/// # Errors
/// * If the status-line pattern fails to compile
///
/// # Returns
/// * `Result<Vec<String>>` - One `path (XY)` entry per offending file,
///   in output order
pub fn unstaged_entries(status: &str) -> Result<Vec<String>> {
    // Matches lines whose second status character is not a space:
    //  M file.txt    (modified, not staged)
    // MM file.txt    (staged and modified again)
    // ?? file.txt    (untracked)
    // but not:
    // M  file.txt    (fully staged)
    let regex_rule = Regex::new(r"^(.[^ ])\s+(.+)$")
        .map_err(|e| RczError::Io(io::Error::new(io::ErrorKind::InvalidData, e.to_string())))?;

    let entries = status
        .lines()
        .filter_map(|line| {
            let captures = regex_rule.captures(line)?;
            let code = captures.get(1)?.as_str();
            let path = captures.get(2)?.as_str().trim();

            Some(format!("{path} ({code})"))
        })
        .collect();

    Ok(entries)
}

/// Verifies the working tree is clean enough to prompt for a commit.
///
/// # Errors
/// * `GitError::RepositoryCheck` - If the status query cannot be executed
/// * `GitError::UnstagedChanges` - If any file has unstaged changes; the
///   error aggregates every offending path rather than failing on the first
pub fn check_clean() -> Result<()> {
    let status = read_git_status()?;
    let unstaged = unstaged_entries(&status)?;

    if unstaged.is_empty() {
        Ok(())
    } else {
        Err(RczError::Git(GitError::UnstagedChanges { files: unstaged }))
    }
}
