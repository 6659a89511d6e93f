use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use structsmith_catalog::{FsCatalogSource, Resolver};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Package whose catalog to read
    pub package: String,

    /// Directory package lookup starts from
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Extra directories searched for catalogs
    #[arg(long = "catalog-path")]
    pub catalog_paths: Vec<PathBuf>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let source = FsCatalogSource::new(&self.root).with_search_paths(self.catalog_paths.clone());
        let mut resolver = Resolver::new(source);

        let report = ops::list(&mut resolver, &self.package)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
