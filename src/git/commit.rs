//! Commit Operations
//!
//! Executes the final `git commit` with one `-m` flag per rendered message
//! fragment. The argument vector is passed straight to the process, no shell
//! in between, so fragment content never needs quoting here.

use std::process::{Command, Output};

use crate::errors::{GitError, Result, RczError};
use crate::message::commit_args;

/// Runs `git commit` with the given message fragments.
///
/// # Arguments
/// * `fragments` - The rendered message units, main line first
///
/// # Errors
/// * If spawning git fails
/// * If the commit command exits non-zero
pub fn commit_with_fragments(fragments: &[String]) -> Result<()> {
    let output = Command::new("git").args(commit_args(fragments)).output()?;

    handle_output("commit", &output)
}

/// Handles the output of a git command: success output is forwarded to the
/// user, failure becomes a `GitError::CommandFailed`.
fn handle_output(method_name: &str, output: &Output) -> Result<()> {
    if output.status.success() {
        if !output.stdout.is_empty() {
            println!("{}", String::from_utf8_lossy(&output.stdout).trim());
        }

        Ok(())
    } else {
        let error_message = String::from_utf8_lossy(&output.stderr);

        Err(RczError::Git(GitError::CommandFailed {
            command: format!("git {method_name}"),
            output: error_message.trim().to_string(),
        }))
    }
}
