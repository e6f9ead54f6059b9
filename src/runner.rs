//! Final Confirmation and Execution
//!
//! Shows the rendered `git commit` invocation, asks for a last confirmation
//! and runs the command. Declining is a clean cancellation with no side
//! effects, never an error.

use console::style;
use inquire::{Confirm, InquireError};

use crate::{
    errors::{InputError, Result, RczError},
    git::commit::commit_with_fragments,
    message::preview,
    utils::print_success,
};

/// Previews the commit command, confirms, and executes it on approval.
///
/// # Errors
/// * `RczError::Cancelled` - The user declined or aborted the confirmation
/// * `GitError::CommandFailed` - The commit command exited non-zero
pub fn confirm_and_run(fragments: &[String]) -> Result<()> {
    println!("{}", style("Will execute:").bold());
    println!("{}", style(preview(fragments)).cyan());

    let confirmed = Confirm::new("Execute this commit?")
        .with_default(true)
        .prompt()
        .map_err(|error| match error {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                RczError::Cancelled
            }
            other => RczError::Input(InputError::Prompt(other)),
        })?;

    if !confirmed {
        return Err(RczError::Cancelled);
    }

    commit_with_fragments(fragments)?;

    let main_line = fragments.first().map(String::as_str).unwrap_or_default();
    print_success("Commit created", main_line);

    Ok(())
}
