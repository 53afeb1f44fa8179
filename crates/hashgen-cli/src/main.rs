//! hashgen CLI: instantiates the fixed-size hash stack and queue containers.
//!
//! Running `hashgen` with no command generates every configured size, exactly like
//! `hashgen generate`. The other commands inspect a run without writing:
//! `plan` lists the outputs and `check` fails when any output is missing or stale.
//! `init` writes a default `hashgen.config.json`.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use hashgen_core::config::OverwritePolicy;

#[derive(Parser)]
#[command(
    name = "hashgen",
    about = "Generate fixed-size hash stack and queue sources from C templates",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to hashgen.config.json (defaults apply if the file does not exist)
    #[arg(long, global = true, default_value = "hashgen.config.json")]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Instantiate every template for every size (the default)
    Generate {
        #[command(flatten)]
        overrides: Overrides,

        /// Print the outputs that would be written, without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// List the files a generation run would produce
    Plan {
        #[command(flatten)]
        overrides: Overrides,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fail if any generated file is missing or out of date
    Check {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Write a default hashgen.config.json
    Init {
        /// Replace an existing config without asking
        #[arg(long)]
        force: bool,
    },
}

/// Command-line overrides applied on top of the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct Overrides {
    /// Template directory (relative to the current directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Comma-separated sizes to generate, e.g. `27,81`
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<u64>,

    /// What to do with existing outputs
    #[arg(long, value_enum)]
    overwrite: Option<OverwriteChoice>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OverwriteChoice {
    Always,
    Protect,
}

impl OverwriteChoice {
    pub fn policy(self) -> OverwritePolicy {
        match self {
            Self::Always => OverwritePolicy::Always,
            Self::Protect => OverwritePolicy::Protect,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        None => {
            commands::generate::run(&cli.config, &Overrides::default(), false)?;
        }
        Some(Commands::Generate { overrides, dry_run }) => {
            commands::generate::run(&cli.config, &overrides, dry_run)?;
        }
        Some(Commands::Plan { overrides, json }) => {
            commands::plan::run(&cli.config, &overrides, json)?;
        }
        Some(Commands::Check { overrides }) => {
            commands::check::run(&cli.config, &overrides)?;
        }
        Some(Commands::Init { force }) => {
            commands::init::run(&cli.config, force)?;
        }
    }

    Ok(())
}
