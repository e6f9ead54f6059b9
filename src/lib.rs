pub mod cli;
pub mod config;
pub mod errors;
pub mod git;
pub mod message;
pub mod prompt;
pub mod runner;
pub mod scopes;
pub mod utils;
