use thiserror::Error;

/// Main error type for the rcz application
#[derive(Error, Debug)]
pub enum RczError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Deliberate user abort, either at a prompt or the final confirm.
    /// Not a failure: the top-level exit point maps it to status 0.
    #[error("Operation cancelled by user")]
    Cancelled,
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error while accessing config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration format: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to check git status: {output}")]
    RepositoryCheck { output: String },

    #[error("Unstaged changes found in:\n{}", crate::utils::format_list(.files))]
    UnstagedChanges { files: Vec<String> },

    #[error("Git command failed: {command}\nOutput: {output}")]
    CommandFailed { command: String, output: String },
}

/// Errors from the interactive prompt engine
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),
}

impl RczError {
    /// Category title shown on the blocking error dialog.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config Error",
            Self::Git(GitError::CommandFailed { .. }) => "Execution Error",
            Self::Git(_) => "Repository Error",
            Self::Input(_) => "Input Error",
            Self::Io(_) => "IO Error",
            Self::Cancelled => "Cancelled",
        }
    }

    /// One-line suggestion shown under the error details.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Config(_) => {
                "Check the syntax of changelog.config.json (or ~/.changelog.config.json)."
            }
            Self::Git(GitError::UnstagedChanges { .. }) => {
                "Stage your changes with `git add` and try again."
            }
            Self::Git(GitError::RepositoryCheck { .. }) => {
                "Make sure you are inside a git repository and `git` is on your PATH."
            }
            Self::Git(GitError::CommandFailed { .. }) => {
                "Inspect the git output above, then retry the commit."
            }
            Self::Input(_) | Self::Io(_) | Self::Cancelled => "Please try again.",
        }
    }
}

/// Type alias for Result using `RczError`
pub type Result<T> = std::result::Result<T, RczError>;
