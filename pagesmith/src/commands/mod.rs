mod build;
mod check;
mod clear;
mod completions;

use std::path::PathBuf;

use build::BuildCommand;
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use clear::ClearCommand;
use completions::CompletionsCommand;
use eyre::Result;
use pagesmith_manifest::Config;
use tracing::debug;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pagesmith_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pagesmith")]
#[command(version)]
#[command(about = "Generate Logseq pages from index.ini asset descriptors")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to generate.toml (defaults to searching upward from the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => BuildCommand {}.run(self.load_config()),
            Some(Commands::Build(cmd)) => cmd.run(self.load_config()),
            Some(Commands::Clear(cmd)) => cmd.run(self.load_config()),
            Some(Commands::Check(cmd)) => cmd.run(self.load_config()),
            Some(Commands::Completions(cmd)) => cmd.run(),
        }
    }

    fn load_config(&self) -> Config {
        let config = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                Config::from_file(path).unwrap_or_exit()
            }
            None => Config::load().unwrap_or_exit(),
        };
        debug!(
            root = %config.project_root.display(),
            assets = %config.assets_dir.display(),
            pages = %config.pages_dir.display(),
            "using configuration"
        );
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Clear generated pages and regenerate them from the asset tree (default)
    Build(BuildCommand),

    /// Remove generated pages, leaving hand-written pages alone
    Clear(ClearCommand),

    /// Validate every descriptor without writing pages
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
