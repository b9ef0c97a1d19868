//! Kernelspec display-name normalization.
//!
//! Notebooks authored in different environments drift in what their kernel
//! advertises; pinning the display name keeps the rendered corpus uniform.
use crate::corpus;
use crate::notebook::{self, Kernelspec, Notebook};
use anyhow::Result;
use std::path::Path;

/// Display name every notebook in the corpus should advertise.
pub const KERNEL_DISPLAY_NAME: &str = "Python 3";

/// Ensure the kernelspec sub-mapping exists and pin its display name.
pub fn normalize_kernelspec(notebook: &mut Notebook) {
    let kernelspec = notebook
        .metadata
        .kernelspec
        .get_or_insert_with(Kernelspec::default);
    kernelspec.display_name = Some(KERNEL_DISPLAY_NAME.to_string());
}

/// Normalize every notebook in the corpus, in reading order. Read and write
/// failures propagate and abort the run.
pub fn run_kernelspec(notebook_dir: &Path) -> Result<()> {
    for file_name in corpus::notebook_files(notebook_dir)? {
        let path = notebook_dir.join(&file_name);
        let mut notebook = notebook::read_notebook(&path)?;
        println!("- Updating kernelspec for {file_name}");
        normalize_kernelspec(&mut notebook);
        notebook::write_notebook(&path, &notebook)?;
    }
    Ok(())
}
