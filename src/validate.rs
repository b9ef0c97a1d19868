//! Structural validation for the notebook corpus.
//!
//! Each notebook is checked against a fixed battery of independent
//! predicates. A document that cannot be read at all yields a single
//! read-failure warning and skips the rest; everything else is reported
//! per predicate and summarized at the end of the run.
use crate::corpus;
use crate::navigation::NAV_MARKER;
use crate::notebook::{self, CellType, Notebook};
use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

/// Sentinel prefix identifying the book information cell.
pub const BOOK_INFO_MARKER: &str = "<!--BOOK_INFORMATION-->";

/// Validate one notebook file, degrading a read failure to a single warning.
pub fn validate_notebook(path: &Path) -> Vec<String> {
    match notebook::read_notebook(path) {
        Ok(notebook) => collect_warnings(&notebook),
        Err(err) => vec![format!("Failed to read notebook: {err:#}")],
    }
}

/// Run every structural predicate over a readable document.
pub fn collect_warnings(notebook: &Notebook) -> Vec<String> {
    let mut warnings = Vec::new();

    match &notebook.metadata.kernelspec {
        None => warnings.push("Missing kernelspec metadata".to_string()),
        Some(kernelspec) if kernelspec.display_name.is_none() => {
            warnings.push("Missing kernelspec display_name".to_string());
        }
        Some(_) => {}
    }

    for (position, cell) in notebook.cells.iter().enumerate() {
        if !cell.source.trim().is_empty() {
            continue;
        }
        match cell.cell_type {
            CellType::Code => warnings.push(format!("Empty code cell at position {position}")),
            CellType::Markdown => {
                warnings.push(format!("Empty markdown cell at position {position}"));
            }
            CellType::Raw => {}
        }
    }

    if let Some(first) = notebook.cells.first() {
        if !first.source.starts_with(BOOK_INFO_MARKER) {
            warnings.push("Missing book information comment".to_string());
        }
    }

    let has_nav = notebook
        .cells
        .iter()
        .any(|cell| cell.source.contains(NAV_MARKER));
    if !has_nav {
        warnings.push("Missing navigation bar".to_string());
    }

    warnings
}

/// Validate the whole corpus and report per-notebook warnings plus a global
/// summary. Exit code is zero only when no notebook produced a warning.
pub fn run_validate(notebook_dir: &Path) -> Result<ExitCode> {
    println!("Validating all notebooks...");
    println!("{}", "=".repeat(50));

    let mut all_warnings = Vec::new();
    for file_name in corpus::notebook_files(notebook_dir)? {
        let warnings = validate_notebook(&notebook_dir.join(&file_name));
        if warnings.is_empty() {
            println!("✓ {file_name} - No issues found");
        } else {
            println!("\n{file_name}:");
            for warning in &warnings {
                println!("  - {warning}");
            }
            all_warnings.extend(warnings.into_iter().map(|warning| (file_name.clone(), warning)));
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("Validation complete. Found {} issues total.", all_warnings.len());

    if all_warnings.is_empty() {
        println!("All notebooks passed validation!");
        return Ok(ExitCode::SUCCESS);
    }

    println!("\nSummary of issues:");
    for (file_name, warning) in &all_warnings {
        println!("  {file_name}: {warning}");
    }
    Ok(ExitCode::FAILURE)
}
