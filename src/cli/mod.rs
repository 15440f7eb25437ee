//! Command-line interface for hookgate.
//!
//! This module provides the `hookgate` CLI with subcommands for:
//! - `init`: Initialize configuration
//! - `install`: Install git hook
//! - `uninstall`: Remove git hook
//! - `run`: Run hooks manually
//! - `list`: List configured hooks
//! - `validate`: Validate configuration
//! - `config`: Show configuration

mod commands;

use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Config-driven pre-commit hook runner.
#[derive(Debug, Parser)]
#[command(
    name = "hookgate",
    author,
    version,
    about = "Config-driven pre-commit hook runner with per-hook path filtering",
    long_about = r#"
hookgate runs the tools declared in your hook configuration against the
staged file set, applying each tool only to the files its include/exclude
patterns admit. Any failing tool blocks the commit.

Quick start:
  hookgate init      # Create configuration
  hookgate install   # Install git hook
  # Done! Commits now run the configured hooks.

Environment variables:
  HOOKGATE_SKIP=1    Skip all hooks
"#,
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use color output.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Always use color.
    Always,
    /// Auto-detect color support.
    #[default]
    Auto,
    /// Never use color.
    Never,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize hookgate configuration.
    #[command(visible_alias = "i")]
    Init {
        /// Preset configuration to start from.
        #[arg(
            short,
            long,
            value_parser = ["python", "node", "rust", "go"],
            default_value = "python"
        )]
        preset: String,

        /// Overwrite existing configuration.
        #[arg(short, long)]
        force: bool,
    },

    /// Install the git pre-commit hook.
    Install {
        /// Overwrite existing hook.
        #[arg(short, long)]
        force: bool,
    },

    /// Remove the git pre-commit hook.
    Uninstall,

    /// Run hooks manually.
    #[command(visible_alias = "r")]
    Run {
        /// Run against every file in the working tree instead of the staged
        /// set.
        #[arg(short, long)]
        all_files: bool,

        /// Run only the hook with this id.
        #[arg(long)]
        hook: Option<String>,

        /// Stop after the first failing hook.
        #[arg(long)]
        fail_fast: bool,

        /// Emit a machine-readable JSON report on stdout.
        #[arg(long)]
        json: bool,
    },

    /// List all configured hooks.
    #[command(visible_alias = "l")]
    List {
        /// Emit the configuration as JSON on stdout.
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file.
    #[command(visible_alias = "v")]
    Validate {
        /// Also check that every rev resolves against its remote repository
        /// (touches the network).
        #[arg(long)]
        revs: bool,
    },

    /// Show configuration file location and contents.
    Config {
        /// Output raw file contents.
        #[arg(long)]
        raw: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Runs the CLI.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.verbose, cli.quiet);

    // Set up color
    setup_color(cli.color);

    // If no subcommand, run the default action (same as `hookgate run`)
    match cli.command {
        Some(Commands::Init { preset, force }) => commands::init(&preset, force),
        Some(Commands::Install { force }) => commands::install(force),
        Some(Commands::Uninstall) => commands::uninstall(),
        Some(Commands::Run {
            all_files,
            hook,
            fail_fast,
            json,
        }) => commands::run(all_files, hook.as_deref(), fail_fast, json),
        Some(Commands::List { json }) => commands::list(json),
        Some(Commands::Validate { revs }) => commands::validate(revs),
        Some(Commands::Config { raw }) => commands::config(raw),
        Some(Commands::Completions { shell }) => {
            commands::completions(shell);
            Ok(ExitCode::SUCCESS)
        }
        None => commands::run(false, None, false, false),
    }
}

/// Sets up logging based on verbosity flags.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Sets up color output.
fn setup_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorChoice::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        ColorChoice::Auto => {
            // Let console crate auto-detect
        }
    }
}
