//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// StudyHub - settings loader and validator
#[derive(Parser, Debug)]
#[command(name = "studyhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file to layer under the process environment (default: discover .env)
    #[arg(long, global = true, env = "STUDYHUB_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the settings
    Check(CheckArgs),

    /// Print the loaded settings with secrets redacted
    Show(ShowArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Also open a database connection and ping it
    #[arg(long)]
    pub connect: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print JSON instead of KEY=value lines
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_connect() {
        let cli = Cli::try_parse_from(["studyhub", "check", "--connect"]).unwrap();
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Check(CheckArgs { connect: true })));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["studyhub", "show", "--json", "-v", "--env-file", "prod.env"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.env_file, Some(PathBuf::from("prod.env")));
        assert!(matches!(cli.command, Commands::Show(ShowArgs { json: true })));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["studyhub"]).is_err());
    }
}
