use clap::Args;
use eyre::Result;
use pagesmith_manifest::Config;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {}

impl BuildCommand {
    pub fn run(&self, config: Config) -> Result<()> {
        let report = ops::build(config)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
