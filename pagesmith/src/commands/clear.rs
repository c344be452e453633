use clap::Args;
use eyre::Result;
use pagesmith_manifest::Config;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ClearCommand {
    /// Preview what would be removed without actually removing
    #[arg(long)]
    pub dry_run: bool,
}

impl ClearCommand {
    pub fn run(&self, config: Config) -> Result<()> {
        let report = ops::clear(config, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
