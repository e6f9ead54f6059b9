//! Git Operations Module
//!
//! Subprocess-backed git functionality for the rcz CLI tool, split into
//! focused submodules.

pub mod commit;
pub mod status;
