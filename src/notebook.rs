//! Notebook document model and on-disk JSON round-tripping.
//!
//! Only the fields the maintenance commands touch are typed; everything else
//! (outputs, execution counts, format versions, cell ids) passes through
//! untouched via flattened maps, so rewriting a notebook never loses data the
//! format defines but this crate does not care about.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Cell kinds defined by the notebook format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    Code,
    Markdown,
    Raw,
}

/// A single notebook cell.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Cell {
    pub cell_type: CellType,
    #[serde(with = "source_lines")]
    pub source: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    /// New markdown cell with empty metadata, as inserted by the navigation pass.
    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            cell_type: CellType::Markdown,
            source: source.into(),
            metadata: Map::new(),
            extra: Map::new(),
        }
    }
}

/// Kernel-specification sub-mapping inside document metadata.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Kernelspec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotebookMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernelspec: Option<Kernelspec>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A full notebook document: ordered cells plus document metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub metadata: NotebookMetadata,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Read and parse a notebook document.
pub fn read_notebook(path: &Path) -> Result<Notebook> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read notebook {}", path.display()))?;
    let notebook = serde_json::from_str(&content)
        .with_context(|| format!("parse notebook {}", path.display()))?;
    Ok(notebook)
}

/// Persist a notebook document back to `path`, overwriting the original file.
pub fn write_notebook(path: &Path, notebook: &Notebook) -> Result<()> {
    let mut json = serde_json::to_string_pretty(notebook)
        .with_context(|| format!("serialize notebook {}", path.display()))?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("write notebook {}", path.display()))?;
    Ok(())
}

/// Cell source is stored on disk either as a single string or as a list of
/// line strings; the in-memory model is always one string, written back in
/// the canonical list-of-lines form.
mod source_lines {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Source {
        Text(String),
        Lines(Vec<String>),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Source::deserialize(deserializer)? {
            Source::Text(text) => text,
            Source::Lines(lines) => lines.concat(),
        })
    }

    pub fn serialize<S>(source: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(source.split_inclusive('\n'))
    }
}
