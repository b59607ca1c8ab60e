//! StudyHub CLI
//!
//! Loads the settings once at process start and hands them to commands.
//!
//! # CLI Usage
//!
//! ```bash
//! # Validate settings (and optionally reach the database)
//! cargo run -- check --connect
//!
//! # Print effective settings with secrets redacted
//! cargo run -- show --json
//! ```

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
