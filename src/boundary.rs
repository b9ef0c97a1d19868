//! Decision-tree region geometry for the tree-visualization figures.
//!
//! Models a fitted 2D decision tree as an explicit binary tree and derives
//! the axis-aligned boundary segments and class regions a notebook overlays
//! on a scatter plot. Fitting is the estimator's business; this module only
//! walks an already-described tree.
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Axis a split tests: `X` compares the first feature, `Y` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitAxis {
    X,
    Y,
}

/// A fitted tree. Internal nodes split one axis at a threshold, with the
/// left subtree covering values at or below it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Leaf {
        class: u32,
    },
    Split {
        axis: SplitAxis,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

/// Axis-aligned viewport the boundaries are clipped to.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// One axis-aligned boundary segment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Segment {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Sampling configuration for [`class_grid`]. An explicit value handed to
/// the caller's plotting code, not a process-wide default.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RenderConfig {
    pub resolution: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { resolution: 200 }
    }
}

/// On-disk description of a fitted tree and its viewport.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TreePlot {
    pub tree: TreeNode,
    pub bounds: Bounds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderConfig>,
}

/// Boundary geometry written for the notebook overlay to consume.
#[derive(Debug, Deserialize, Serialize)]
pub struct BoundaryReport {
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<Vec<u32>>>,
}

/// Class label for a single point.
pub fn predict(tree: &TreeNode, point: (f64, f64)) -> u32 {
    let mut node = tree;
    loop {
        match node {
            TreeNode::Leaf { class } => return *class,
            TreeNode::Split {
                axis,
                threshold,
                left,
                right,
            } => {
                let value = match axis {
                    SplitAxis::X => point.0,
                    SplitAxis::Y => point.1,
                };
                node = if value <= *threshold { left } else { right };
            }
        }
    }
}

/// Every split's boundary segment, clipped to the region the split governs.
pub fn boundaries(tree: &TreeNode, bounds: Bounds) -> Vec<Segment> {
    let mut segments = Vec::new();
    collect_boundaries(tree, bounds, &mut segments);
    segments
}

fn collect_boundaries(node: &TreeNode, bounds: Bounds, segments: &mut Vec<Segment>) {
    let TreeNode::Split {
        axis,
        threshold,
        left,
        right,
    } = node
    else {
        return;
    };

    match axis {
        SplitAxis::X => {
            segments.push(Segment {
                start: (*threshold, bounds.y.0),
                end: (*threshold, bounds.y.1),
            });
            let left_bounds = Bounds {
                x: (bounds.x.0, *threshold),
                y: bounds.y,
            };
            let right_bounds = Bounds {
                x: (*threshold, bounds.x.1),
                y: bounds.y,
            };
            collect_boundaries(left, left_bounds, segments);
            collect_boundaries(right, right_bounds, segments);
        }
        SplitAxis::Y => {
            segments.push(Segment {
                start: (bounds.x.0, *threshold),
                end: (bounds.x.1, *threshold),
            });
            let left_bounds = Bounds {
                x: bounds.x,
                y: (bounds.y.0, *threshold),
            };
            let right_bounds = Bounds {
                x: bounds.x,
                y: (*threshold, bounds.y.1),
            };
            collect_boundaries(left, left_bounds, segments);
            collect_boundaries(right, right_bounds, segments);
        }
    }
}

/// Sample class predictions over an evenly spaced grid, endpoints included.
/// Rows scan `y`, columns scan `x`, matching the meshgrid the notebook feeds
/// to a contour plot.
pub fn class_grid(tree: &TreeNode, bounds: Bounds, config: &RenderConfig) -> Vec<Vec<u32>> {
    let steps = config.resolution;
    (0..steps)
        .map(|row| {
            let y = lerp(bounds.y, row, steps);
            (0..steps)
                .map(|col| {
                    let x = lerp(bounds.x, col, steps);
                    predict(tree, (x, y))
                })
                .collect()
        })
        .collect()
}

fn lerp(range: (f64, f64), step: usize, steps: usize) -> f64 {
    if steps <= 1 {
        return range.0;
    }
    range.0 + (range.1 - range.0) * step as f64 / (steps - 1) as f64
}

/// Load a tree description, compute its boundary geometry, and write the
/// report for a notebook to consume.
pub fn run_boundaries(tree_path: &Path, out: &Path, grid: bool) -> Result<()> {
    let plot: TreePlot = read_json(tree_path)?;
    let render = plot.render.unwrap_or_default();
    let segments = boundaries(&plot.tree, plot.bounds);
    let classes = grid.then(|| class_grid(&plot.tree, plot.bounds, &render));

    let report = BoundaryReport { segments, classes };
    write_json(out, &report)?;
    println!(
        "Wrote {} boundary segment(s) to {}",
        report.segments.len(),
        out.display()
    );
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let value =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialize {}", path.display()))?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
