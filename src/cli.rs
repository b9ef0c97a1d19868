//! CLI argument parsing for the notebook maintenance commands.
//!
//! The CLI is intentionally thin: each subcommand wires one sequential pass
//! over the corpus without embedding policy, so the same core logic can be
//! reused from tests.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default notebook root, relative to the repository checkout.
pub const DEFAULT_NOTEBOOK_DIR: &str = "notebooks";

/// Root CLI entrypoint for the maintenance commands.
#[derive(Parser, Debug)]
#[command(
    name = "nbkit",
    version,
    about = "Maintenance commands for the book's companion notebooks",
    after_help = "Commands:\n  navigation [--notebook-dir <dir>]   Insert or refresh prev/next navigation cells\n  kernelspec [--notebook-dir <dir>]   Normalize the kernel display name\n  validate   [--notebook-dir <dir>]   Check notebook structure (exit 1 on warnings)\n  boundaries --tree <json> --out <json>  Compute decision-tree boundary geometry\n\nExamples:\n  nbkit navigation\n  nbkit kernelspec --notebook-dir notebooks\n  nbkit validate\n  nbkit boundaries --tree tree.json --out boundaries.json --grid",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level maintenance commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Navigation(NavigationArgs),
    Kernelspec(KernelspecArgs),
    Validate(ValidateArgs),
    Boundaries(BoundariesArgs),
}

/// Navigation command inputs.
#[derive(Parser, Debug)]
#[command(about = "Insert or refresh prev/next navigation cells in every notebook")]
pub struct NavigationArgs {
    /// Directory holding the numbered notebooks
    #[arg(long, value_name = "DIR", default_value = DEFAULT_NOTEBOOK_DIR)]
    pub notebook_dir: PathBuf,
}

/// Kernelspec command inputs.
#[derive(Parser, Debug)]
#[command(about = "Normalize the kernelspec display name in every notebook")]
pub struct KernelspecArgs {
    /// Directory holding the numbered notebooks
    #[arg(long, value_name = "DIR", default_value = DEFAULT_NOTEBOOK_DIR)]
    pub notebook_dir: PathBuf,
}

/// Validate command inputs.
#[derive(Parser, Debug)]
#[command(about = "Check notebook structure and exit nonzero on warnings")]
pub struct ValidateArgs {
    /// Directory holding the numbered notebooks
    #[arg(long, value_name = "DIR", default_value = DEFAULT_NOTEBOOK_DIR)]
    pub notebook_dir: PathBuf,
}

/// Boundaries command inputs.
#[derive(Parser, Debug)]
#[command(about = "Compute decision-tree boundary geometry for a notebook figure")]
pub struct BoundariesArgs {
    /// Path to the tree description JSON
    #[arg(long, value_name = "PATH")]
    pub tree: PathBuf,

    /// Output path for the boundary geometry JSON
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// Also sample the class grid over the bounds
    #[arg(long)]
    pub grid: bool,
}
