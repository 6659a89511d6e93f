mod bake;
mod check;
mod list;
mod render;

use std::path::{Path, PathBuf};

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use list::ListCommand;
use render::RenderCommand;
use structsmith_manifest::Manifest;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for structsmith_manifest::Result<T> {
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

/// Load a manifest, returning it with the directory relative paths in it
/// are resolved against.
pub(crate) fn open_manifest(config: &Path) -> (Manifest, PathBuf) {
    let manifest = Manifest::from_file(config).unwrap_or_exit();
    let root = match config.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    (manifest, root)
}

#[derive(Parser)]
#[command(name = "smith")]
#[command(version)]
#[command(about = "Derive TypeScript interfaces from type catalogs")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Render(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every interface declared in smith.toml
    Bake(BakeCommand),

    /// Validate smith.toml and build every interface without writing
    Check(CheckCommand),

    /// Print a catalog record as a TypeScript interface
    Render(RenderCommand),

    /// List the record types of a package catalog
    List(ListCommand),
}
