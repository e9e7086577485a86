//! Terminal front-end for Bolt Bucket.
//!
//! The binary parses [`cli::Cli`], loads the client configuration, installs the logger and
//! hands the command to [`commands::run`] with an HTTP gateway.

pub mod cli;
pub mod commands;
pub mod render;
