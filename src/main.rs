use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod boundary;
mod cli;
mod corpus;
mod kernelspec;
mod navigation;
mod notebook;
mod validate;

use cli::{Command, RootArgs};

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Navigation(args) => {
            navigation::run_navigation(&args.notebook_dir)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Kernelspec(args) => {
            kernelspec::run_kernelspec(&args.notebook_dir)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate(args) => validate::run_validate(&args.notebook_dir),
        Command::Boundaries(args) => {
            boundary::run_boundaries(&args.tree, &args.out, args.grid)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
