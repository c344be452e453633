use clap::Args;
use eyre::Result;
use pagesmith_manifest::Config;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Run the check command, exiting with status 1 if any descriptor fails
    pub fn run(&self, config: Config) -> Result<()> {
        let report = ops::check(config)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
