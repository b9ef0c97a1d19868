//! Navigation cell construction and injection.
//!
//! Every corpus notebook carries the same markdown navigation cell twice:
//! once at index 1 (directly after the book-info cell) and once at the tail.
//! Cells are recognized by the sentinel prefix on their source text, so the
//! pass can be re-run at any time without stacking duplicates.
use crate::corpus;
use crate::notebook::{self, Cell, Notebook};
use anyhow::{bail, Result};
use std::path::Path;

/// Sentinel prefix identifying a navigation cell by its source text.
pub const NAV_MARKER: &str = "<!--NAVIGATION-->";

const CONTENTS_LINK: &str = "| [Contents](Index.ipynb) |";

/// One entry in the reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub file_name: String,
    pub title: String,
}

/// Whether the head navigation cell was overwritten in place or newly inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavUpdate {
    Amended,
    Inserted,
}

/// Walk `items` with one-element lookbehind/lookahead, padding head and tail
/// with `None`.
pub fn prev_this_next<T>(items: &[T]) -> Vec<(Option<&T>, &T, Option<&T>)> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let prev = index.checked_sub(1).and_then(|prev| items.get(prev));
            (prev, item, items.get(index + 1))
        })
        .collect()
}

/// Render the navigation cell source for one notebook.
pub fn render_navbar(prev: Option<&NavEntry>, current_file: &str, next: Option<&NavEntry>) -> String {
    let mut navbar = format!("{NAV_MARKER}\n");
    if let Some(prev) = prev {
        navbar.push_str(&format!("< [{}]({}) ", prev.title, prev.file_name));
    }
    navbar.push_str(CONTENTS_LINK);
    if let Some(next) = next {
        navbar.push_str(&format!(" [{}]({}) >", next.title, next.file_name));
    }
    navbar.push_str(&colab_badge(current_file));
    navbar
}

fn colab_badge(file_name: &str) -> String {
    format!(
        "\n\n<a href=\"https://colab.research.google.com/github/jakevdp/PythonDataScienceHandbook/blob/master/notebooks/{file_name}\"><img align=\"left\" src=\"https://colab.research.google.com/assets/colab-badge.svg\" alt=\"Open in Colab\" title=\"Open and Execute in Google Colaboratory\"></a>\n"
    )
}

/// Ensure exactly one navigation cell at the head slot and one at the tail.
///
/// Index 0 is reserved for the book-info cell, so the head slot is index 1; a
/// document too short to have one is malformed and aborts the run rather than
/// mis-indexing.
pub fn inject_navbar(notebook: &mut Notebook, file_name: &str, navbar: &str) -> Result<NavUpdate> {
    if notebook.cells.len() < 2 {
        bail!(
            "{file_name} has {} cell(s); expected a book-info cell plus content before the navbar slot",
            notebook.cells.len()
        );
    }

    let head = if is_nav_cell(&notebook.cells[1]) {
        notebook.cells[1].source = navbar.to_string();
        NavUpdate::Amended
    } else {
        notebook.cells.insert(1, Cell::markdown(navbar));
        NavUpdate::Inserted
    };

    // cells is non-empty here, so the tail index is always valid
    let tail = notebook.cells.len() - 1;
    if is_nav_cell(&notebook.cells[tail]) {
        notebook.cells[tail].source = navbar.to_string();
    } else {
        notebook.cells.push(Cell::markdown(navbar));
    }

    Ok(head)
}

fn is_nav_cell(cell: &Cell) -> bool {
    cell.source.starts_with(NAV_MARKER)
}

/// Inject or refresh navigation cells across the whole corpus, in reading
/// order. Read and write failures propagate and abort the run.
pub fn run_navigation(notebook_dir: &Path) -> Result<()> {
    let files = corpus::notebook_files(notebook_dir)?;
    let entries: Vec<NavEntry> = files
        .iter()
        .map(|file_name| NavEntry {
            file_name: file_name.clone(),
            title: corpus::notebook_title(notebook_dir, file_name),
        })
        .collect();

    for (prev, entry, next) in prev_this_next(&entries) {
        let navbar = render_navbar(prev, &entry.file_name, next);
        let path = notebook_dir.join(&entry.file_name);
        let mut notebook = notebook::read_notebook(&path)?;
        match inject_navbar(&mut notebook, &entry.file_name, &navbar)? {
            NavUpdate::Amended => println!("- amending navbar for {}", entry.file_name),
            NavUpdate::Inserted => println!("- inserting navbar for {}", entry.file_name),
        }
        notebook::write_notebook(&path, &notebook)?;
    }
    Ok(())
}
