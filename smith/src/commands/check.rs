use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to smith.toml (defaults to ./smith.toml)
    #[arg(short, long, default_value = "smith.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, root) = open_manifest(&self.config);
        let report = ops::check(&manifest, &root, &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
