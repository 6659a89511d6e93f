use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_manifest;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to smith.toml (defaults to ./smith.toml)
    #[arg(short, long, default_value = "smith.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to the directory of smith.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, root) = open_manifest(&self.config);
        let output_dir = self.output.clone().unwrap_or_else(|| root.clone());

        let report = ops::bake(
            &manifest,
            &root,
            BakeOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
