//! Notebook corpus enumeration and title lookup.
//!
//! The canonical reading order is the lexicographic order of file names
//! matching the chapter/section naming pattern. Everything else in the
//! directory (the contents index, checkpoints, figures) is ignored.
use crate::notebook::{self, CellType};
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

/// File names that participate in the reading order: `NN.NN-Title.ipynb`.
const NOTEBOOK_NAME_PATTERN: &str = r"^\d\d\.\d\d-.*\.ipynb$";

/// List the corpus notebooks in canonical reading order.
pub fn notebook_files(dir: &Path) -> Result<Vec<String>> {
    let pattern = Regex::new(NOTEBOOK_NAME_PATTERN).context("compile notebook name pattern")?;
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("list notebook directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if pattern.is_match(name) {
            names.push(name.to_string());
        }
    }
    names.sort();
    tracing::debug!(count = names.len(), dir = %dir.display(), "enumerated corpus");
    Ok(names)
}

/// Best-effort display title for a notebook: the first markdown heading, or
/// the file stem when no heading (or no readable document) exists.
pub fn notebook_title(dir: &Path, file_name: &str) -> String {
    if let Ok(notebook) = notebook::read_notebook(&dir.join(file_name)) {
        for cell in &notebook.cells {
            if cell.cell_type != CellType::Markdown {
                continue;
            }
            if let Some(title) = heading_title(&cell.source) {
                return title;
            }
        }
    }
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string())
}

fn heading_title(source: &str) -> Option<String> {
    let first_line = source.lines().next()?;
    let heading = first_line.strip_prefix('#')?;
    Some(heading.trim_start_matches('#').trim().to_string())
}
