//! Command-Line Interface
//!
//! Argument parsing and the sequential pipeline: repository check, config
//! load, interactive session, rendering, confirm-and-execute.

use clap::Parser;

use crate::{
    config::ConfigStore,
    errors::Result,
    git::status::check_clean,
    message::render_fragments,
    prompt, runner,
};

#[derive(Parser)]
#[command(about = "Interactive conventional-commit composer.\n\
Prompts for a commit type, scope, summary and body, then runs `git commit`.")]
#[command(name = "rcz")]
#[command(version)]
pub struct Cli {
    /// Preset commit type: pre-selects the first configured type key this
    /// value is a prefix of (e.g. "fe" for "feat")
    #[arg(value_name = "TYPE")]
    commit_type: Option<String>,

    /// Preset commit summary, pre-fills the summary field
    #[arg(value_name = "MESSAGE")]
    message: Option<String>,
}

/// # `run`
/// Runs the program.
///
/// ## Errors
/// Returns an error if any pipeline stage fails; `RczError::Cancelled` when
/// the user aborts at a prompt or the final confirmation.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    check_clean()?;

    let config = ConfigStore::new().load()?;

    let message = prompt::collect(
        &config,
        cli.commit_type.as_deref(),
        cli.message.as_deref(),
    )?;

    let fragments = render_fragments(&message, &config);

    runner::confirm_and_run(&fragments)
}
